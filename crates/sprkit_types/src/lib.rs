//! This crate provides the data formats and algorithms behind the `sprkit` asset tools.
//!
//! # File Formats
//!
//! - **Item XML**: item definition documents pruned against a valid id list
//! - **Item table**: tab-separated `$key<TAB>name` rows turned into `desc` lines
//! - **Calibration**: in-game anchor capture per heading (JSON)
//! - **Sprite offsets**: `#gfx-action` sections with `FRAME n dx= dy=` lines
//! - **`sprite_frame`**: animation intervals from an SQL dump or the generated `SprDataTable` source
//! - **`list.spr`**: per character action frame sequences and durations
//!
//! # Algorithms
//!
//! - [`anchor`]: shadow/clothes heading tweaks, layer alignment report, direction mirroring
//! - [`speed`]: reconciliation of `list.spr` durations with the expected intervals
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use sprkit_types::prelude::*;
//!
//! let offsets = SpriteOffsets::open("sprite_offsets.txt")?;
//! let report = render_alignment_report("sprite_offsets.txt", &offsets, DEFAULT_ACTION, &default_layers());
//! print!("{report}");
//! # Ok::<(), SprkitError>(())
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use sprkit_types::file::{Calibration, SprkitError};
//! use sprkit_types::anchor::tweak::{heading_tweaks, render_heading_switch};
//!
//! let calibration = Calibration::open("calibration_anchor.json")?;
//! print!("{}", render_heading_switch(&heading_tweaks(&calibration)));
//! # Ok::<(), SprkitError>(())
//! ```

pub mod anchor;
pub mod file;
pub mod speed;

/// `use sprkit_types::prelude::*;` to import commonly used items.
pub mod prelude;
