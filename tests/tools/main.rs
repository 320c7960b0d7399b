//! End to end checks of the `sprkit` tools over temporary directories.

mod anchor;
mod exit_codes;
mod item_data;
mod mirror;
mod speed;
