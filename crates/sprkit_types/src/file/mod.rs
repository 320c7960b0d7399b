//! Asset file formats handled by the `sprkit` tools.

mod error;

pub mod calibration;
pub mod item_table;
pub mod item_xml;
pub mod list_spr;
pub mod sprite_frame;
pub mod sprite_offsets;

// Re-export unified error type
pub use error::{FileType, Result, SprkitError};

// Re-export main file types
pub use calibration::{AnchorRecord, Calibration, CalibrationEntry, HEADING_COUNT};
pub use item_table::DescEntry;
pub use item_xml::{PruneReport, ValidIds};
pub use list_spr::{ActionCategory, ActionTiming, Character, ListSpr};
pub use sprite_frame::SpriteFrameTable;
pub use sprite_offsets::{FrameOffset, OffsetSection, SectionKey, SpriteOffsets};
