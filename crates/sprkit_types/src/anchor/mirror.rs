//! Generating missing sprite directions by mirroring existing ones.
//!
//! A character drawn in four directions gets the other four by flipping:
//! frames of the source direction are read from `{base}-{dir}-{frame:03}.png`,
//! flipped, and written under the target direction with the same frame
//! index. The anchor moves with the pixels, see [`FlipMode::apply_offset`].
//!
//! When no source frame exists on disk the images are skipped, but the
//! offset block is still produced from an assumed frame size and the known
//! source offsets so it can be pasted into the offset file.

use std::{
	fs,
	path::{Path, PathBuf},
};

use image::{ImageFormat, RgbaImage, imageops};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::file::{
	FileType, FrameOffset, OffsetSection, Result, SectionKey, SpriteOffsets, SprkitError,
};

/// Sprite type tag written on every generated frame line.
pub const FRAME_KIND: &str = "CHARACTER";

/// Frames assumed per direction when nothing is known about it.
pub const FALLBACK_FRAME_COUNT: u32 = 4;

/// How a direction is mirrored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipMode {
	/// Copy as is
	#[default]
	None,
	/// Mirror left to right
	Horizontal,
	/// Mirror top to bottom
	Vertical,
	/// Both axes, i.e. a 180 degree rotation
	Both,
}

impl FlipMode {
	/// Builds a mode from the two axis flags.
	pub const fn from_flags(horizontal: bool, vertical: bool) -> Self {
		match (horizontal, vertical) {
			(true, true) => Self::Both,
			(true, false) => Self::Horizontal,
			(false, true) => Self::Vertical,
			(false, false) => Self::None,
		}
	}

	/// Whether x is mirrored.
	pub const fn flips_horizontal(self) -> bool {
		matches!(self, Self::Horizontal | Self::Both)
	}

	/// Whether y is mirrored.
	pub const fn flips_vertical(self) -> bool {
		matches!(self, Self::Vertical | Self::Both)
	}

	/// Anchor position after mirroring a `width` x `height` frame.
	///
	/// Results outside the `i32` range saturate.
	pub const fn apply_offset(self, dx: i32, dy: i32, width: i32, height: i32) -> (i32, i32) {
		let dx = if self.flips_horizontal() { width.saturating_sub(1).saturating_sub(dx) } else { dx };
		let dy = if self.flips_vertical() { height.saturating_sub(1).saturating_sub(dy) } else { dy };
		(dx, dy)
	}

	/// Mirrors an image.
	pub fn apply_image(self, image: &RgbaImage) -> RgbaImage {
		match self {
			Self::None => image.clone(),
			Self::Horizontal => imageops::flip_horizontal(image),
			Self::Vertical => imageops::flip_vertical(image),
			Self::Both => imageops::rotate180(image),
		}
	}
}

/// One source to target direction mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorPair {
	/// Direction that exists
	pub source: u32,
	/// Direction to generate
	pub target: u32,
	/// Flip applied to get from source to target
	pub flip: FlipMode,
}

impl MirrorPair {
	/// Creates a pair.
	pub const fn new(source: u32, target: u32, flip: FlipMode) -> Self {
		Self {
			source,
			target,
			flip,
		}
	}
}

/// 0→4 both axes, 1→5 vertical, 2→6 horizontal, 3→7 horizontal.
pub fn default_pairs() -> Vec<MirrorPair> {
	vec![
		MirrorPair::new(0, 4, FlipMode::Both),
		MirrorPair::new(1, 5, FlipMode::Vertical),
		MirrorPair::new(2, 6, FlipMode::Horizontal),
		MirrorPair::new(3, 7, FlipMode::Horizontal),
	]
}

/// Frame size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
	/// Width
	pub width: u32,
	/// Height
	pub height: u32,
}

impl FrameSize {
	/// Creates a size.
	pub const fn new(width: u32, height: u32) -> Self {
		Self {
			width,
			height,
		}
	}

	fn signed(self) -> Result<(i32, i32)> {
		let convert = |v: u32| {
			i32::try_from(v).map_err(|_| SprkitError::invalid(FileType::Png, format!("frame extent {v} too large")))
		};
		Ok((convert(self.width)?, convert(self.height)?))
	}
}

impl Default for FrameSize {
	fn default() -> Self {
		Self::new(24, 48)
	}
}

/// Known anchor offsets of one source direction, in frame order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionOffsets {
	/// Direction (action) id
	pub direction: u32,
	/// `[dx, dy]` per frame, frame 0 first
	pub frames: Vec<[i32; 2]>,
}

impl DirectionOffsets {
	/// Creates an entry.
	pub fn new(direction: u32, frames: &[(i32, i32)]) -> Self {
		Self {
			direction,
			frames: frames.iter().map(|&(dx, dy)| [dx, dy]).collect(),
		}
	}
}

/// Measured offsets of directions 0-3 of graphic 167.
pub fn default_source_offsets() -> Vec<DirectionOffsets> {
	vec![
		DirectionOffsets::new(0, &[(3, -42), (3, -42), (2, -43), (2, -43)]),
		DirectionOffsets::new(1, &[(13, -44), (13, -44), (11, -46), (12, -46)]),
		DirectionOffsets::new(2, &[(1, -42), (1, -43), (-2, -43), (-3, -43)]),
		DirectionOffsets::new(3, &[(-5, -40), (-5, -41), (-11, -45), (-11, -44)]),
	]
}

/// File name of a frame image.
pub fn frame_file_name(base_id: u32, direction: u32, frame: u32) -> String {
	format!("{base_id}-{direction}-{frame:03}.png")
}

/// Finds `{base}-{direction}-<digits>.png` files in `dir`, ordered by frame.
///
/// A missing directory yields no frames.
pub fn collect_source_frames(dir: &Path, base_id: u32, direction: u32) -> Result<Vec<(u32, PathBuf)>> {
	let prefix = format!("{base_id}-{direction}-");
	let entries = match fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
			warn!("input directory {} does not exist", dir.display());
			return Ok(Vec::new());
		}
		Err(err) => return Err(err.into()),
	};

	let mut frames = Vec::new();
	for entry in entries {
		let entry = entry?;
		let name = entry.file_name();
		let Some(name) = name.to_str() else {
			continue;
		};
		let Some(digits) = name.strip_prefix(&prefix).and_then(|rest| rest.strip_suffix(".png")) else {
			continue;
		};
		if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
			continue;
		}
		let Ok(index) = digits.parse() else {
			continue;
		};
		if entry.file_type()?.is_file() {
			frames.push((index, entry.path()));
		}
	}
	frames.sort();
	Ok(frames)
}

/// Where the offsets of a generated block came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorSource {
	/// Real frames were mirrored; sizes are the images' own
	Disk {
		/// Number of frames written
		frames: usize,
	},
	/// No source frame on disk; computed with the assumed size
	Assumed(FrameSize),
}

/// Result of mirroring one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorOutcome {
	/// The pair that was processed
	pub pair: MirrorPair,
	/// Generated offset block for the target direction
	pub section: OffsetSection,
	/// Disk-verified or assumed
	pub source: MirrorSource,
}

impl MirrorOutcome {
	/// Console summary line for this pair.
	pub fn summary(&self, base_id: u32) -> String {
		match self.source {
			MirrorSource::Disk {
				frames,
			} => format!(
				"generated {base_id}-{} (mirrored from {base_id}-{}), {frames} frames",
				self.pair.target, self.pair.source
			),
			MirrorSource::Assumed(size) => format!(
				"[skipped] no {base_id}-{}-*.png found, computed with assumed size {}x{}",
				self.pair.source, size.width, size.height
			),
		}
	}
}

/// Mirroring of one graphic id.
#[derive(Debug, Clone)]
pub struct MirrorJob {
	/// Graphic id whose directions are mirrored
	pub base_id: u32,
	/// Directory with the source frames
	pub input_dir: PathBuf,
	/// Directory receiving the mirrored frames
	pub output_dir: PathBuf,
	/// Frame size used when no source image exists
	pub assumed_size: FrameSize,
	/// Known source offsets, by direction
	pub source_offsets: Vec<DirectionOffsets>,
	/// Offsets read from an existing offset file; take precedence
	pub known: Option<SpriteOffsets>,
}

impl MirrorJob {
	/// Creates a job with the default size and source offsets.
	pub fn new(base_id: u32, input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_id,
			input_dir: input_dir.into(),
			output_dir: output_dir.into(),
			assumed_size: FrameSize::default(),
			source_offsets: default_source_offsets(),
			known: None,
		}
	}

	fn table_frames(&self, direction: u32) -> Option<&[[i32; 2]]> {
		self.source_offsets
			.iter()
			.find(|entry| entry.direction == direction)
			.map(|entry| entry.frames.as_slice())
	}

	fn known_section(&self, direction: u32) -> Option<&OffsetSection> {
		self.known
			.as_ref()
			.and_then(|offsets| offsets.get(self.base_id, direction))
			.filter(|section| !section.frames.is_empty())
	}

	/// Source anchor of one frame; `(0, 0)` when nothing is known.
	pub fn source_offset(&self, direction: u32, index: u32) -> (i32, i32) {
		if let Some(frame) = self.known_section(direction).and_then(|section| section.frame(index)) {
			return (frame.dx, frame.dy);
		}
		self.table_frames(direction)
			.and_then(|frames| frames.get(index as usize))
			.map_or((0, 0), |&[dx, dy]| (dx, dy))
	}

	/// Source frames assumed when none exist on disk.
	fn assumed_sequence(&self, direction: u32) -> Vec<(u32, i32, i32)> {
		if let Some(section) = self.known_section(direction) {
			let mut frames: Vec<_> = section.frames.iter().map(|f| (f.index, f.dx, f.dy)).collect();
			frames.sort_by_key(|&(index, ..)| index);
			frames.dedup_by_key(|&mut (index, ..)| index);
			return frames;
		}
		match self.table_frames(direction) {
			Some(frames) => (0..).zip(frames).map(|(index, &[dx, dy])| (index, dx, dy)).collect(),
			None => (0..FALLBACK_FRAME_COUNT).map(|index| (index, 0, 0)).collect(),
		}
	}

	fn target_frame(&self, target: u32, index: u32, (dx, dy): (i32, i32)) -> FrameOffset {
		FrameOffset {
			bmp: Some(frame_file_name(self.base_id, target, index)),
			kind: Some(FRAME_KIND.to_string()),
			..FrameOffset::new(index, dx, dy)
		}
	}

	/// Mirrors one pair, writing images when source frames exist.
	pub fn mirror_pair(&self, pair: MirrorPair) -> Result<MirrorOutcome> {
		let key = SectionKey::new(self.base_id, pair.target);
		let mut section = OffsetSection::new(key);
		section.anchor = Some(format!("{key}-a.bmp"));

		let sources = collect_source_frames(&self.input_dir, self.base_id, pair.source)?;
		if sources.is_empty() {
			let (width, height) = self.assumed_size.signed()?;
			for (index, dx, dy) in self.assumed_sequence(pair.source) {
				let offset = pair.flip.apply_offset(dx, dy, width, height);
				section.frames.push(self.target_frame(pair.target, index, offset));
			}
			return Ok(MirrorOutcome {
				pair,
				section,
				source: MirrorSource::Assumed(self.assumed_size),
			});
		}

		fs::create_dir_all(&self.output_dir)?;
		for (index, path) in &sources {
			let image = image::open(path)?.to_rgba8();
			let (width, height) = FrameSize::new(image.width(), image.height()).signed()?;

			let target = self.output_dir.join(frame_file_name(self.base_id, pair.target, *index));
			pair.flip.apply_image(&image).save_with_format(&target, ImageFormat::Png)?;
			debug!("{} -> {}", path.display(), target.display());

			let (dx, dy) = self.source_offset(pair.source, *index);
			let offset = pair.flip.apply_offset(dx, dy, width, height);
			section.frames.push(self.target_frame(pair.target, *index, offset));
		}

		Ok(MirrorOutcome {
			pair,
			section,
			source: MirrorSource::Disk {
				frames: sources.len(),
			},
		})
	}

	/// Mirrors every pair in order.
	pub fn run(&self, pairs: &[MirrorPair]) -> Result<Vec<MirrorOutcome>> {
		let mut outcomes = Vec::with_capacity(pairs.len());
		for &pair in pairs {
			let outcome = self.mirror_pair(pair)?;
			match outcome.source {
				MirrorSource::Disk {
					..
				} => info!("{}", outcome.summary(self.base_id)),
				MirrorSource::Assumed(_) => warn!("{}", outcome.summary(self.base_id)),
			}
			outcomes.push(outcome);
		}
		Ok(outcomes)
	}
}

#[cfg(test)]
mod tests {
	use image::Rgba;

	use super::*;

	#[test]
	fn test_offset_formulas() {
		assert_eq!(FlipMode::Horizontal.apply_offset(3, -42, 24, 48), (20, -42));
		assert_eq!(FlipMode::Vertical.apply_offset(3, -42, 24, 48), (3, 89));
		assert_eq!(FlipMode::Both.apply_offset(3, -42, 24, 48), (20, 89));
		assert_eq!(FlipMode::None.apply_offset(3, -42, 24, 48), (3, -42));
		assert_eq!(FlipMode::from_flags(true, true), FlipMode::Both);
	}

	#[test]
	fn test_extreme_offsets_saturate() {
		assert_eq!(FlipMode::Horizontal.apply_offset(i32::MIN, 0, 24, 48), (i32::MAX, 0));
		assert_eq!(FlipMode::Vertical.apply_offset(0, i32::MAX, 24, 48), (0, -2_147_483_600));
		assert_eq!(FlipMode::Both.apply_offset(i32::MIN, i32::MIN, 24, 48), (i32::MAX, i32::MAX));

		let dir = tempfile::tempdir().unwrap();
		let mut job = MirrorJob::new(167, dir.path(), dir.path());
		job.known = Some(SpriteOffsets::parse("#167-3\nFRAME 0 dx=-2147483648 dy=0\n"));
		assert_eq!(job.source_offset(3, 0), (i32::MIN, 0));

		let outcome = job.mirror_pair(MirrorPair::new(3, 7, FlipMode::Horizontal)).unwrap();
		let offsets: Vec<_> = outcome.section.frames.iter().map(|f| (f.index, f.dx, f.dy)).collect();
		assert_eq!(offsets, vec![(0, i32::MAX, 0)]);
	}

	#[test]
	fn test_image_flips() {
		let mut image = RgbaImage::new(2, 2);
		image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));

		assert_eq!(FlipMode::Horizontal.apply_image(&image).get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
		assert_eq!(FlipMode::Vertical.apply_image(&image).get_pixel(0, 1), &Rgba([255, 0, 0, 255]));
		assert_eq!(FlipMode::Both.apply_image(&image).get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
		assert_eq!(FlipMode::None.apply_image(&image), image);
	}

	#[test]
	fn test_assumed_block_without_images() {
		let dir = tempfile::tempdir().unwrap();
		let job = MirrorJob::new(167, dir.path(), dir.path());

		let outcome = job.mirror_pair(MirrorPair::new(2, 6, FlipMode::Horizontal)).unwrap();
		assert_eq!(outcome.source, MirrorSource::Assumed(FrameSize::new(24, 48)));
		assert_eq!(
			outcome.section.to_string(),
			"#167-6\nANCHOR = 167-6-a.bmp\n\
			 FRAME 0 dx=22 dy=-42 bmp=167-6-000.png type=CHARACTER\n\
			 FRAME 1 dx=22 dy=-43 bmp=167-6-001.png type=CHARACTER\n\
			 FRAME 2 dx=25 dy=-43 bmp=167-6-002.png type=CHARACTER\n\
			 FRAME 3 dx=26 dy=-43 bmp=167-6-003.png type=CHARACTER\n"
		);
		assert!(outcome.summary(167).starts_with("[skipped] no 167-2-*.png"));
	}

	#[test]
	fn test_unknown_direction_falls_back_to_zero() {
		let dir = tempfile::tempdir().unwrap();
		let job = MirrorJob::new(900, dir.path().join("missing"), dir.path());

		let outcome = job.mirror_pair(MirrorPair::new(9, 10, FlipMode::Vertical)).unwrap();
		let offsets: Vec<_> = outcome.section.frames.iter().map(|f| (f.index, f.dx, f.dy)).collect();
		assert_eq!(offsets, vec![(0, 0, 47), (1, 0, 47), (2, 0, 47), (3, 0, 47)]);
	}

	#[test]
	fn test_known_offsets_take_precedence() {
		let dir = tempfile::tempdir().unwrap();
		let mut job = MirrorJob::new(167, dir.path(), dir.path());
		job.known = Some(SpriteOffsets::parse("#167-3\nFRAME 1 dx=4 dy=5\nFRAME 0 dx=1 dy=2\n"));

		assert_eq!(job.source_offset(3, 0), (1, 2));
		assert_eq!(job.source_offset(3, 7), (0, 0));
		assert_eq!(job.source_offset(0, 2), (2, -43));

		let outcome = job.mirror_pair(MirrorPair::new(3, 7, FlipMode::Horizontal)).unwrap();
		let offsets: Vec<_> = outcome.section.frames.iter().map(|f| (f.index, f.dx, f.dy)).collect();
		assert_eq!(offsets, vec![(0, 22, 2), (1, 19, 5)]);
	}

	#[test]
	fn test_disk_frames_are_mirrored() {
		let input = tempfile::tempdir().unwrap();
		let output = tempfile::tempdir().unwrap();

		let mut image = RgbaImage::new(10, 20);
		image.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
		for index in [1u32, 0] {
			image.save(input.path().join(frame_file_name(167, 0, index))).unwrap();
		}
		fs::write(input.path().join("167-0-abc.png"), b"not a frame").unwrap();
		fs::write(input.path().join("167-01-000.png"), b"other direction").unwrap();

		let job = MirrorJob::new(167, input.path(), output.path());
		let outcome = job.mirror_pair(MirrorPair::new(0, 4, FlipMode::Both)).unwrap();
		assert_eq!(
			outcome.source,
			MirrorSource::Disk {
				frames: 2
			}
		);
		// (3, -42) in a 10x20 frame
		assert_eq!(outcome.section.frame(0).map(|f| (f.dx, f.dy)), Some((6, 61)));

		let written = image::open(output.path().join("167-4-001.png")).unwrap().to_rgba8();
		assert_eq!(written.dimensions(), (10, 20));
		assert_eq!(written.get_pixel(9, 19), &Rgba([1, 2, 3, 255]));
	}

	#[test]
	fn test_collect_ignores_other_names() {
		let dir = tempfile::tempdir().unwrap();
		for name in ["167-1-002.png", "167-1-000.png", "167-1-.png", "167-1-001.txt", "167-10-000.png"] {
			fs::write(dir.path().join(name), b"").unwrap();
		}
		let frames = collect_source_frames(dir.path(), 167, 1).unwrap();
		assert_eq!(frames.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 2]);
	}
}
