//! Sprite offset text format (`sprite_offsets*.txt`).
//!
//! The file is a sequence of sections, one per `(graphic id, action id)`:
//!
//! ```text
//! #240-10
//! ANCHOR = 240-10-a.bmp
//! FRAME 0 dx=5 dy=40 bmp=240-10-000.png type=CHARACTER
//! FRAME 1 dx=6 dy=41 bmp=240-10-001.png type=CHARACTER
//! ```
//!
//! `dx`/`dy` are the anchor position inside the frame image. Parsing is
//! tolerant: lines that do not match a known shape are skipped, and `FRAME`
//! lines before the first section header are dropped. A header repeated
//! later in the file appends to the existing section.
//!
//! # Usage Examples
//!
//! ```
//! use sprkit_types::file::sprite_offsets::SpriteOffsets;
//!
//! let offsets = SpriteOffsets::parse("#240-10\nFRAME 0 dx=5 dy=40\n");
//! let section = offsets.get(240, 10).unwrap();
//! assert_eq!(section.frame(0).map(|f| (f.dx, f.dy)), Some((5, 40)));
//! ```

pub mod line;

use std::{collections::BTreeMap, fmt, path::Path};

use log::debug;

use crate::file::Result;

pub use self::line::{OffsetLine, classify};

/// Section identifier: graphic id and action id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionKey {
	/// Graphic resource id
	pub gfx_id: u32,
	/// Animation action id
	pub action_id: u32,
}

impl SectionKey {
	/// Creates a key.
	pub const fn new(gfx_id: u32, action_id: u32) -> Self {
		Self {
			gfx_id,
			action_id,
		}
	}
}

impl fmt::Display for SectionKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}-{}", self.gfx_id, self.action_id)
	}
}

/// Anchor offset of a single animation frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOffset {
	/// Frame index within the action
	pub index: u32,
	/// Anchor x inside the frame image
	pub dx: i32,
	/// Anchor y inside the frame image
	pub dy: i32,
	/// Frame image file name
	pub bmp: Option<String>,
	/// Sprite type tag, e.g. `CHARACTER`
	pub kind: Option<String>,
}

impl FrameOffset {
	/// Creates a frame offset without image or type tags.
	pub fn new(index: u32, dx: i32, dy: i32) -> Self {
		Self {
			index,
			dx,
			dy,
			bmp: None,
			kind: None,
		}
	}
}

impl fmt::Display for FrameOffset {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "FRAME {} dx={} dy={}", self.index, self.dx, self.dy)?;
		if let Some(bmp) = &self.bmp {
			write!(f, " bmp={bmp}")?;
		}
		if let Some(kind) = &self.kind {
			write!(f, " type={kind}")?;
		}
		Ok(())
	}
}

/// One `#gfx-action` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetSection {
	/// Section key
	pub key: SectionKey,
	/// Name from the `ANCHOR = ...` line
	pub anchor: Option<String>,
	/// Frames in file order
	pub frames: Vec<FrameOffset>,
}

impl OffsetSection {
	/// Creates an empty section.
	pub fn new(key: SectionKey) -> Self {
		Self {
			key,
			anchor: None,
			frames: Vec::new(),
		}
	}

	/// First frame stored with `index`.
	pub fn frame(&self, index: u32) -> Option<&FrameOffset> {
		self.frames.iter().find(|frame| frame.index == index)
	}

	/// Frame with the lowest index.
	pub fn first_frame(&self) -> Option<&FrameOffset> {
		self.frames.iter().min_by_key(|frame| frame.index)
	}
}

impl fmt::Display for OffsetSection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "#{}", self.key)?;
		if let Some(anchor) = &self.anchor {
			writeln!(f, "ANCHOR = {anchor}")?;
		}
		for frame in &self.frames {
			writeln!(f, "{frame}")?;
		}
		Ok(())
	}
}

/// A parsed sprite offset file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteOffsets {
	sections: BTreeMap<SectionKey, OffsetSection>,
}

impl SpriteOffsets {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Opens and parses a sprite offset file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Ok(Self::parse(&text))
	}

	/// Parses sprite offset text, skipping anything it does not recognise.
	pub fn parse(text: &str) -> Self {
		let mut offsets = Self::new();
		let mut current: Option<SectionKey> = None;

		for (number, raw) in text.lines().enumerate() {
			match classify(raw) {
				OffsetLine::Section(key) => {
					offsets.sections.entry(key).or_insert_with(|| OffsetSection::new(key));
					current = Some(key);
				}
				OffsetLine::BadSection => {
					debug!("line {}: unreadable section header {raw:?}", number + 1);
					current = None;
				}
				OffsetLine::Anchor(name) => {
					if let Some(section) = current.and_then(|key| offsets.sections.get_mut(&key)) {
						section.anchor = Some(name.to_string());
					}
				}
				OffsetLine::Frame(frame) => {
					match current.and_then(|key| offsets.sections.get_mut(&key)) {
						Some(section) => section.frames.push(frame),
						None => debug!("line {}: FRAME outside of any section", number + 1),
					}
				}
				OffsetLine::Blank | OffsetLine::Ignored => {}
			}
		}

		offsets
	}

	/// Section for `(gfx_id, action_id)`.
	pub fn get(&self, gfx_id: u32, action_id: u32) -> Option<&OffsetSection> {
		self.sections.get(&SectionKey::new(gfx_id, action_id))
	}

	/// Adds or replaces a section.
	pub fn insert(&mut self, section: OffsetSection) {
		self.sections.insert(section.key, section);
	}

	/// Sections ordered by key.
	pub fn sections(&self) -> impl Iterator<Item = &OffsetSection> {
		self.sections.values()
	}

	/// Number of sections.
	pub fn len(&self) -> usize {
		self.sections.len()
	}

	/// Returns `true` when no section was found.
	pub fn is_empty(&self) -> bool {
		self.sections.is_empty()
	}
}

/// Renders sections as text blocks separated by one blank line.
pub fn render_sections<'a>(sections: impl IntoIterator<Item = &'a OffsetSection>) -> String {
	sections.into_iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

impl fmt::Display for SpriteOffsets {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&render_sections(self.sections()))
	}
}
