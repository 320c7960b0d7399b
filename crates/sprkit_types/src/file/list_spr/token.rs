//! Frame tokens inside a `list.spr` action line.
//!
//! A frame token has the shape `A.B:C`: sprite `A` (may be negative), frame
//! `B` and duration `C` in units of [`MS_PER_DURATION_UNIT`]. Tokens may carry
//! decorations that are stripped before matching:
//!
//! - `[300` sound cue markers (any number of them)
//! - `<97` and everything after the first `<`
//! - `!` and `>` flags

use std::sync::OnceLock;

use regex::Regex;

/// Milliseconds per duration unit.
pub const MS_PER_DURATION_UNIT: u64 = 40;

/// One decoded frame token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken {
	/// Sprite sheet index (`A`)
	pub sprite: i32,
	/// Frame index (`B`)
	pub frame: u32,
	/// Duration in units (`C`)
	pub duration_units: u64,
}

impl FrameToken {
	/// Parses a raw token, decorations included.
	pub fn parse(raw: &str) -> Option<Self> {
		let clean = strip_decorations(raw);
		if clean.is_empty() {
			return None;
		}

		let caps = token_pattern().captures(&clean)?;
		Some(Self {
			sprite: caps[1].parse().ok()?,
			frame: caps[2].parse().ok()?,
			duration_units: caps[3].parse().ok()?,
		})
	}

	/// Duration in milliseconds.
	pub fn duration_ms(&self) -> u64 {
		self.duration_units.saturating_mul(MS_PER_DURATION_UNIT)
	}
}

fn token_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^(-?\d+)\.(\d+):(\d+)").expect("valid frame token pattern"))
}

fn sound_cue_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"\[\d+").expect("valid sound cue pattern"))
}

/// Removes sound cues, `<` suffixes and `!`/`>` flags.
pub fn strip_decorations(raw: &str) -> String {
	let without_cues = sound_cue_pattern().replace_all(raw, "");
	let head = without_cues.split('<').next().unwrap_or_default();
	head.chars().filter(|c| !matches!(c, '!' | '>')).collect::<String>().trim().to_string()
}
