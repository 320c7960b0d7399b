//! Shadow/clothes heading tweaks derived from a calibration export.
//!
//! The client already offsets each overlay layer relative to the body with a
//! feet-alignment formula ([`current_offset`]). That formula lines up the
//! bottom edges but not the horizontal centers. The tweak for a layer is the
//! difference between the offset that makes the overlay's bottom-center pixel
//! coincide with the body's ([`desired_offset`]) and the current offset.
//!
//! Headings without an entry, and entries without the body or the overlay
//! layer, get a zero tweak. The generated switch always covers headings 0-7.

use std::fmt::{self, Write as _};

use crate::file::{AnchorRecord, Calibration, CalibrationEntry, HEADING_COUNT};

/// A 2D correction applied on top of the client's feet alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tweak {
	/// Horizontal correction in pixels
	pub x: f64,
	/// Vertical correction in pixels
	pub y: f64,
}

impl Tweak {
	/// No correction.
	pub const ZERO: Self = Self {
		x: 0.0,
		y: 0.0,
	};

	/// Creates a tweak.
	pub const fn new(x: f64, y: f64) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl fmt::Display for Tweak {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "new Vector2({:.1}f, {:.1}f)", self.x, self.y)
	}
}

/// Offset the client currently gives `layer`, relative to the body offset.
///
/// Horizontal: anchor to texture center. Vertical: anchor to texture center,
/// plus the difference between the body's and the layer's anchor-to-feet
/// distances.
pub fn current_offset(layer: &AnchorRecord, body: &AnchorRecord) -> (f64, f64) {
	let ax = layer.w / 2.0 - layer.dx;
	let ay = layer.h / 2.0 - layer.dy;
	let feet_align_y = body.anchor_to_feet() - layer.anchor_to_feet();
	(ax, ay + feet_align_y)
}

/// Offset that puts the layer's bottom-center pixel on the body's.
pub fn desired_offset(body: &AnchorRecord, layer: &AnchorRecord) -> (f64, f64) {
	let (bx, by) = body.bottom_center_offset();
	let (lx, ly) = layer.bottom_center_offset();
	(bx - lx, by - ly)
}

/// Tweak for one overlay layer: desired minus current offset.
pub fn layer_tweak(body: &AnchorRecord, layer: &AnchorRecord) -> Tweak {
	let desired = desired_offset(body, layer);
	let current = current_offset(layer, body);
	Tweak::new(desired.0 - current.0, desired.1 - current.1)
}

/// Tweaks for both overlays at one heading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadingTweak {
	/// Heading (0-7)
	pub heading: u8,
	/// Shadow layer tweak
	pub shadow: Tweak,
	/// Clothes layer tweak
	pub clothes: Tweak,
}

impl HeadingTweak {
	/// Computes the tweaks of one calibration entry.
	pub fn from_entry(heading: u8, entry: &CalibrationEntry) -> Self {
		let tweak = |layer: Option<&AnchorRecord>| match (entry.body.as_ref(), layer) {
			(Some(body), Some(layer)) => layer_tweak(body, layer),
			_ => Tweak::ZERO,
		};
		Self {
			heading,
			shadow: tweak(entry.shadow.as_ref()),
			clothes: tweak(entry.clothes.as_ref()),
		}
	}
}

/// Computes tweaks for every heading 0-7; missing headings are zero.
pub fn heading_tweaks(calibration: &Calibration) -> Vec<HeadingTweak> {
	(0..HEADING_COUNT)
		.map(|heading| match calibration.get(heading) {
			Some(entry) => HeadingTweak::from_entry(heading, entry),
			None => HeadingTweak {
				heading,
				..HeadingTweak::default()
			},
		})
		.collect()
}

/// Name of the client method the generated switch replaces.
pub const TWEAK_METHOD: &str = "GetShadowClothesHeadingTweak";

/// Renders the client method body with one `case` per heading.
pub fn render_heading_switch(tweaks: &[HeadingTweak]) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "// ----- paste into {TWEAK_METHOD} in GameEntity.Visuals.cs -----");
	let _ = writeln!(
		out,
		"\t\tprivate void {TWEAK_METHOD}(out Vector2 shadowTweak, out Vector2 clothesTweak)"
	);
	out.push_str("\t\t{\n");
	out.push_str("\t\t\tshadowTweak = Vector2.Zero;\n");
	out.push_str("\t\t\tclothesTweak = Vector2.Zero;\n");
	out.push_str("\t\t\tswitch (Heading)\n");
	out.push_str("\t\t\t{\n");
	for tweak in tweaks {
		let _ = writeln!(out, "\t\t\t\tcase {}:", tweak.heading);
		let _ = writeln!(out, "\t\t\t\t\tshadowTweak = {};", tweak.shadow);
		let _ = writeln!(out, "\t\t\t\t\tclothesTweak = {};", tweak.clothes);
		out.push_str("\t\t\t\t\tbreak;\n");
	}
	out.push_str("\t\t\t}\n");
	out.push_str("\t\t}\n");
	out.push_str("// ----- end -----\n");
	out
}
