//! Sprite anchor tooling: calibration tweaks, layer alignment and mirroring.

pub mod align;
pub mod mirror;
pub mod tweak;

pub use self::{
	align::{AlignLayer, DEFAULT_ACTION, LayerAnchor, default_layers, render_alignment_report},
	mirror::{
		DirectionOffsets, FlipMode, FrameSize, MirrorJob, MirrorOutcome, MirrorPair, MirrorSource,
		default_pairs, default_source_offsets,
	},
	tweak::{HeadingTweak, Tweak, heading_tweaks, render_heading_switch},
};
