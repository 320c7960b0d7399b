//! Intervals from the generated client `SprDataTable` source.
//!
//! The generator emits a single tuple-list literal:
//!
//! ```text
//! var rawData = new List<(int gfx, int action, int frame)>
//! {
//!     (0, 0, 640), (0, 1, 800),
//!     (240, 4, 600),
//! };
//! ```

use std::{path::Path, sync::OnceLock};

use log::{debug, warn};
use regex::Regex;

use super::SpriteFrameTable;
use crate::file::Result;

fn block_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| {
		Regex::new(
			r"(?s)var\s+rawData\s*=\s*new\s+List<\(\s*int\s+gfx,\s*int\s+action,\s*int\s+frame\s*\)>\s*\{([^}]+)\}",
		)
		.expect("valid rawData pattern")
	})
}

fn tuple_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| Regex::new(r"\((\d+),\s*(\d+),\s*(\d+)\)").expect("valid tuple pattern"))
}

impl SpriteFrameTable {
	/// Builds a table from the `rawData` literal of a generated source file.
	///
	/// Returns an empty table when the literal is not present.
	pub fn from_data_table(source: &str) -> Self {
		let mut frames = Self::new();
		let Some(block) = block_pattern().captures(source).and_then(|caps| caps.get(1)) else {
			warn!("no rawData list found in SprDataTable source");
			return frames;
		};

		for caps in tuple_pattern().captures_iter(block.as_str()) {
			let (Ok(gfx_id), Ok(action_id), Ok(interval)) =
				(caps[1].parse(), caps[2].parse(), caps[3].parse())
			else {
				continue;
			};
			frames.insert(gfx_id, action_id, interval);
		}
		debug!("{} intervals read from SprDataTable", frames.len());
		frames
	}

	/// Opens a generated source file and reads its `rawData` literal.
	pub fn open_data_table(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Ok(Self::from_data_table(&text))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test_log::test]
	fn test_reads_raw_data_literal() {
		let source = r#"
public static class SprDataTable
{
	private static readonly (int, int, int) Ignored = (1, 2, 3);

	static SprDataTable()
	{
		var rawData = new List<(int gfx, int action, int frame)>
		{
			(0, 0, 640), (0, 1, 800),
			(240,4,600),
		};
	}
}
"#;
		let table = SpriteFrameTable::from_data_table(source);
		assert_eq!(table.len(), 3);
		assert_eq!(table.get(0, 1), Some(800));
		assert_eq!(table.get(240, 4), Some(600));
		assert_eq!(table.get(1, 2), None);
		assert_eq!(table.name(0), None);
	}

	#[test]
	fn test_missing_literal_gives_empty_table() {
		assert!(SpriteFrameTable::from_data_table("class Empty {}").is_empty());
	}
}
