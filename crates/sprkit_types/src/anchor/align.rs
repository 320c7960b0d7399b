//! Anchor alignment check across the body, shadow and clothes layers.
//!
//! Each layer is a separate graphic id in the sprite offset file. For one
//! action the check prints the `FRAME 0` anchor of every layer so their
//! feet alignment can be compared by eye. It never modifies anything.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::file::{FrameOffset, SpriteOffsets};

/// Action checked when none is given.
pub const DEFAULT_ACTION: u32 = 10;

/// Width of the separator lines in the report.
const RULE_WIDTH: usize = 72;

/// A sprite layer to compare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignLayer {
	/// Graphic id of the layer
	pub gfx_id: u32,
	/// Label printed in the report
	pub label: String,
}

impl AlignLayer {
	/// Creates a layer entry.
	pub fn new(gfx_id: u32, label: impl Into<String>) -> Self {
		Self {
			gfx_id,
			label: label.into(),
		}
	}
}

/// Body (240), shadow (241) and clothes (242).
pub fn default_layers() -> Vec<AlignLayer> {
	vec![
		AlignLayer::new(240, "Body"),
		AlignLayer::new(241, "Shadow"),
		AlignLayer::new(242, "Clothes"),
	]
}

/// Anchor found for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerAnchor<'a> {
	/// The section has a `FRAME 0`
	Frame0(&'a FrameOffset),
	/// No `FRAME 0`; the lowest indexed frame instead
	FirstFrame(&'a FrameOffset),
	/// No section, or a section without frames
	Missing,
}

/// Looks up the anchor of `gfx_id` for `action_id`.
pub fn layer_anchor(offsets: &SpriteOffsets, gfx_id: u32, action_id: u32) -> LayerAnchor<'_> {
	let Some(section) = offsets.get(gfx_id, action_id) else {
		return LayerAnchor::Missing;
	};
	if let Some(frame) = section.frame(0) {
		return LayerAnchor::Frame0(frame);
	}
	section.first_frame().map_or(LayerAnchor::Missing, LayerAnchor::FirstFrame)
}

/// Formats the report line of one layer.
pub fn layer_line(layer: &AlignLayer, anchor: LayerAnchor<'_>, action_id: u32) -> String {
	let prefix = format!("  {} (GfxId={})", layer.label, layer.gfx_id);
	match anchor {
		LayerAnchor::Frame0(frame) => {
			format!("{prefix}: FRAME 0  dx={}  dy={}", frame.dx, frame.dy)
		}
		LayerAnchor::FirstFrame(frame) => format!(
			"{prefix}: no FRAME 0, first frame {}  dx={}  dy={}",
			frame.index, frame.dx, frame.dy
		),
		LayerAnchor::Missing => format!("{prefix}: no data for action {action_id}"),
	}
}

/// Renders the full alignment report for `action_id`.
///
/// `source` is only printed, as the name of the file being read.
pub fn render_alignment_report(
	source: &str,
	offsets: &SpriteOffsets,
	action_id: u32,
	layers: &[AlignLayer],
) -> String {
	let rule = "-".repeat(RULE_WIDTH);
	let mut out = String::new();

	let _ = writeln!(out, "Reading: {source}");
	let _ = writeln!(out, "Action {action_id}, anchor (dx, dy) at FRAME 0 of each layer");
	out.push_str(
		"With every anchor on the feet, each layer's dy should be close to its own texture height h (dy/h ~ 1).\n",
	);
	out.push_str("Only (dx, dy) are listed; w and h come from the frame textures.\n");
	let _ = writeln!(out, "{rule}");
	for layer in layers {
		let anchor = layer_anchor(offsets, layer.gfx_id, action_id);
		let _ = writeln!(out, "{}", layer_line(layer, anchor, action_id));
	}
	let _ = writeln!(out, "{rule}");
	out.push_str(
		"Layer textures differ in size, so absolute (dx, dy) need not match; compare dy/h per layer instead.\n",
	);
	out
}
