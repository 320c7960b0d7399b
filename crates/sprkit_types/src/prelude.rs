//! Prelude module for `sprkit_types`.
//!
//! This module provides a convenient way to import commonly used types, functions, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use sprkit_types::prelude::*;
//!
//! let list = ListSpr::open("list.spr", "big5", None)?;
//! let expected = SpriteFrameTable::open_sql("server.sql", "sprite_frame")?;
//! let comparison = SpeedComparison::reconcile(&list, &expected, &Default::default());
//! println!("{} actions", comparison.summary().total);
//! # Ok::<(), SprkitError>(())
//! ```

// File module types
#[doc(inline)]
pub use crate::file::{
	// Calibration
	AnchorRecord,
	Calibration,
	CalibrationEntry,
	HEADING_COUNT,

	// list.spr
	ActionCategory,
	ActionTiming,
	Character,
	ListSpr,

	// Item data
	DescEntry,
	PruneReport,
	ValidIds,

	// Errors
	FileType,
	Result,
	SprkitError,

	// Sprite offsets
	FrameOffset,
	OffsetSection,
	SectionKey,
	SpriteOffsets,

	// Intervals
	SpriteFrameTable,
};

// Algorithms
#[doc(inline)]
pub use crate::{
	anchor::{
		AlignLayer, DEFAULT_ACTION, FlipMode, FrameSize, HeadingTweak, MirrorJob, MirrorPair,
		Tweak, default_layers, default_pairs, heading_tweaks, render_alignment_report,
		render_heading_switch,
	},
	speed::{Comparison, SpeedComparison, Summary, render_report},
};
