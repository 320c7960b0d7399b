#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `sprkit` bundles the asset pipeline utilities of a sprite based game:
//! item XML pruning, item table conversion, calibration tweaks, anchor
//! alignment checks, direction mirroring and animation speed validation.
//!
//! The formats and algorithms live in [`sprkit_types`]; this crate adds the
//! tool configuration and ships one binary per utility.

pub mod config;

/// `use sprkit::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export sprkit_types for convenience
pub use sprkit_types;
