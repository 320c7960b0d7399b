//! Prelude module for `sprkit`.
//!
//! # Examples
//!
//! ```no_run
//! use sprkit::prelude::*;
//!
//! let config = ToolConfig::load(None).expect("configuration");
//! let offsets = SpriteOffsets::open(&config.anchor_align.offsets)?;
//! println!("{} sections", offsets.len());
//! # Ok::<(), SprkitError>(())
//! ```

// Re-export everything from sprkit_types::prelude
#[doc(inline)]
pub use sprkit_types::prelude::*;

#[doc(inline)]
pub use crate::config::ToolConfig;
