//! Line classifier for the sprite offset text format.

use std::sync::OnceLock;

use regex::Regex;

use super::{FrameOffset, SectionKey};

/// What a single line of a sprite offset file means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OffsetLine<'a> {
	/// Empty or whitespace-only
	Blank,
	/// `#gfx-action`, opens a section
	Section(SectionKey),
	/// A `#` line with two fields that are not both integers; closes the open section
	BadSection,
	/// `ANCHOR = <name>`
	Anchor(&'a str),
	/// `FRAME n dx=.. dy=.. [bmp=..] [type=..]`
	Frame(FrameOffset),
	/// Anything else, including `#` lines with a single field and incomplete `FRAME` lines
	Ignored,
}

struct FramePatterns {
	index: Regex,
	dx: Regex,
	dy: Regex,
	bmp: Regex,
	kind: Regex,
}

fn frame_patterns() -> &'static FramePatterns {
	static PATTERNS: OnceLock<FramePatterns> = OnceLock::new();
	PATTERNS.get_or_init(|| FramePatterns {
		index: Regex::new(r"FRAME\s+(\d+)").expect("valid FRAME pattern"),
		dx: Regex::new(r"dx=(-?\d+)").expect("valid dx pattern"),
		dy: Regex::new(r"dy=(-?\d+)").expect("valid dy pattern"),
		bmp: Regex::new(r"bmp=(\S+)").expect("valid bmp pattern"),
		kind: Regex::new(r"type=(\S+)").expect("valid type pattern"),
	})
}

fn capture<T: std::str::FromStr>(re: &Regex, line: &str) -> Option<T> {
	re.captures(line)?.get(1)?.as_str().parse().ok()
}

fn capture_str(re: &Regex, line: &str) -> Option<String> {
	Some(re.captures(line)?.get(1)?.as_str().to_string())
}

/// Classifies one line. Leading and trailing whitespace is ignored.
pub fn classify(line: &str) -> OffsetLine<'_> {
	let line = line.trim();
	if line.is_empty() {
		return OffsetLine::Blank;
	}

	if line.starts_with("ANCHOR") {
		let name = line.split_once('=').map_or("", |(_, name)| name.trim());
		return OffsetLine::Anchor(name);
	}

	if let Some(header) = line.strip_prefix('#') {
		let mut parts = header.split('-');
		let (Some(gfx), Some(action)) = (parts.next(), parts.next()) else {
			return OffsetLine::Ignored;
		};
		return match (gfx.trim().parse(), action.trim().parse()) {
			(Ok(gfx_id), Ok(action_id)) => OffsetLine::Section(SectionKey::new(gfx_id, action_id)),
			_ => OffsetLine::BadSection,
		};
	}

	if line.starts_with("FRAME") {
		let patterns = frame_patterns();
		let (Some(index), Some(dx), Some(dy)) = (
			capture(&patterns.index, line),
			capture(&patterns.dx, line),
			capture(&patterns.dy, line),
		) else {
			return OffsetLine::Ignored;
		};
		return OffsetLine::Frame(FrameOffset {
			index,
			dx,
			dy,
			bmp: capture_str(&patterns.bmp, line),
			kind: capture_str(&patterns.kind, line),
		});
	}

	OffsetLine::Ignored
}
