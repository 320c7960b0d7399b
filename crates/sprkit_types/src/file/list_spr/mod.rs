//! `list.spr` animation list.
//!
//! The list describes, per character, the frame sequence and timing of each
//! action:
//!
//! ```text
//! #0	208	prince
//! 0.walk(1 4,24.0:4 24.1:4[300 24.2:4 24.3:4)
//! 1.attack(1 6,24.0:3 24.1:3 24.2:3<97 24.3:3)
//! ```
//!
//! A header line `#gfxId count name` opens a character. Each action line is
//! `actionId.actionName(content)`; the second comma-separated segment of
//! `content` holds the frame tokens (see [`token`]). Only actions with an
//! [`ActionCategory`] are kept, and an action needs at least one readable
//! frame token to be recorded.
//!
//! # Usage Examples
//!
//! ```
//! use sprkit_types::file::list_spr::ListSpr;
//!
//! let list = ListSpr::parse("#240 10 death knight\n0.walk(1 4,240.0:4 240.1:4)\n", None);
//! let walk = list.get(240).unwrap().action(0).unwrap();
//! assert_eq!(walk.total_ms, 320);
//! ```

pub mod category;
pub mod token;

use std::{
	collections::{BTreeMap, HashSet},
	path::Path,
	sync::OnceLock,
};

use encoding_rs::Encoding;
use log::{debug, warn};
use regex::Regex;

use crate::file::{FileType, Result, SprkitError};

pub use self::{
	category::ActionCategory,
	token::{FrameToken, MS_PER_DURATION_UNIT},
};

/// What a single `list.spr` line means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLine<'a> {
	/// `#gfxId count name`
	Header {
		/// Graphic id of the character
		gfx_id: u32,
		/// Second header field, kept but not interpreted
		count: u32,
		/// Character name
		name: &'a str,
	},
	/// `actionId.actionName(content)`
	Action {
		/// Action id
		action_id: u32,
		/// Action name, trimmed
		name: &'a str,
		/// Text between the parentheses
		content: &'a str,
	},
	/// Anything else
	Other,
}

fn header_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"^#(\d+)\s+(\d+)\s+(.+)$").expect("valid header pattern"))
}

fn action_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| {
		Regex::new(r"^(\d+)\.([a-zA-Z0-9_\s]+)\(([^)]+)\)").expect("valid action pattern")
	})
}

/// Classifies one line. Leading and trailing whitespace is ignored.
pub fn classify(line: &str) -> ListLine<'_> {
	let line = line.trim();
	if line.is_empty() {
		return ListLine::Other;
	}

	if let Some(caps) = header_pattern().captures(line) {
		let (Ok(gfx_id), Ok(count)) = (caps[1].parse(), caps[2].parse()) else {
			return ListLine::Other;
		};
		let name = caps.get(3).map_or("", |m| m.as_str().trim());
		return ListLine::Header {
			gfx_id,
			count,
			name,
		};
	}

	if let Some(caps) = action_pattern().captures(line) {
		let Ok(action_id) = caps[1].parse() else {
			return ListLine::Other;
		};
		return ListLine::Action {
			action_id,
			name: caps.get(2).map_or("", |m| m.as_str().trim()),
			content: caps.get(3).map_or("", |m| m.as_str().trim()),
		};
	}

	ListLine::Other
}

/// Timing of one action as described by `list.spr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTiming {
	/// Action id
	pub action_id: u32,
	/// Action name
	pub name: String,
	/// Classification of the action
	pub category: ActionCategory,
	/// Per-frame durations in milliseconds, in order
	pub frame_durations: Vec<u64>,
	/// Sum of `frame_durations`, saturating at `u64::MAX`
	pub total_ms: u64,
}

impl ActionTiming {
	/// Builds the timing of an action line, or `None` when the action is not
	/// classified or has no readable frame token.
	pub fn from_content(action_id: u32, name: &str, content: &str) -> Option<Self> {
		let category = ActionCategory::from_action_id(action_id)?;
		let frames = content.split(',').nth(1)?;

		let frame_durations: Vec<u64> = frames
			.split_whitespace()
			.filter_map(FrameToken::parse)
			.map(|token| token.duration_ms())
			.collect();
		if frame_durations.is_empty() {
			return None;
		}

		Some(Self {
			action_id,
			name: name.to_string(),
			category,
			total_ms: frame_durations.iter().fold(0, |total: u64, &ms| total.saturating_add(ms)),
			frame_durations,
		})
	}
}

/// One character block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
	/// Graphic id
	pub gfx_id: u32,
	/// Name from the header line
	pub name: String,
	actions: BTreeMap<u32, ActionTiming>,
}

impl Character {
	/// Creates a character without actions.
	pub fn new(gfx_id: u32, name: impl Into<String>) -> Self {
		Self {
			gfx_id,
			name: name.into(),
			actions: BTreeMap::new(),
		}
	}

	/// Timing of `action_id`.
	pub fn action(&self, action_id: u32) -> Option<&ActionTiming> {
		self.actions.get(&action_id)
	}

	/// Actions ordered by id.
	pub fn actions(&self) -> impl Iterator<Item = &ActionTiming> {
		self.actions.values()
	}

	/// Number of recorded actions.
	pub fn action_count(&self) -> usize {
		self.actions.len()
	}

	/// Records an action, replacing an earlier one with the same id.
	pub fn insert_action(&mut self, timing: ActionTiming) {
		self.actions.insert(timing.action_id, timing);
	}
}

/// Parsed `list.spr`, keyed by graphic id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSpr {
	characters: BTreeMap<u32, Character>,
}

impl ListSpr {
	/// Opens a `list.spr` file, decoding it with the encoding `label`
	/// (e.g. `utf-8`, `big5`, `euc-kr`), and parses it.
	pub fn open(
		path: impl AsRef<Path>,
		label: &str,
		targets: Option<&HashSet<u32>>,
	) -> Result<Self> {
		let bytes = std::fs::read(path)?;
		let text = decode(&bytes, label)?;
		Ok(Self::parse(&text, targets))
	}

	/// Parses `list.spr` text. With `targets`, only those graphic ids are kept.
	pub fn parse(text: &str, targets: Option<&HashSet<u32>>) -> Self {
		let mut characters: BTreeMap<u32, Character> = BTreeMap::new();
		let mut current: Option<u32> = None;

		for raw in text.lines() {
			match classify(raw) {
				ListLine::Header {
					gfx_id,
					name,
					..
				} => {
					if targets.is_none_or(|targets| targets.contains(&gfx_id)) {
						characters.insert(gfx_id, Character::new(gfx_id, name));
						current = Some(gfx_id);
					} else {
						current = None;
					}
				}
				ListLine::Action {
					action_id,
					name,
					content,
				} => {
					let Some(character) = current.and_then(|id| characters.get_mut(&id)) else {
						continue;
					};
					match ActionTiming::from_content(action_id, name, content) {
						Some(timing) => character.insert_action(timing),
						None => debug!("#{}: skipping action {action_id}.{name}", character.gfx_id),
					}
				}
				ListLine::Other => {}
			}
		}

		Self {
			characters,
		}
	}

	/// Character with `gfx_id`.
	pub fn get(&self, gfx_id: u32) -> Option<&Character> {
		self.characters.get(&gfx_id)
	}

	/// Characters ordered by graphic id.
	pub fn characters(&self) -> impl Iterator<Item = &Character> {
		self.characters.values()
	}

	/// Number of characters.
	pub fn len(&self) -> usize {
		self.characters.len()
	}

	/// Returns `true` when no character was parsed.
	pub fn is_empty(&self) -> bool {
		self.characters.is_empty()
	}
}

/// Decodes `bytes` with the encoding named by `label`.
///
/// A byte order mark overrides the label. Malformed sequences are replaced
/// and reported once as a warning.
pub fn decode(bytes: &[u8], label: &str) -> Result<String> {
	let encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
		SprkitError::BadEncoding {
			file_type: FileType::ListSpr,
			message: format!("unknown encoding label {label:?}"),
		}
	})?;
	let (text, used, had_errors) = encoding.decode(bytes);
	if had_errors {
		warn!("list.spr contains bytes that are not valid {}", used.name());
	}
	Ok(text.into_owned())
}
