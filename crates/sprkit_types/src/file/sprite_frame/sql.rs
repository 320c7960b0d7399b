//! `sprite_frame` rows from an SQL dump.
//!
//! Rows are read from `INSERT INTO `sprite_frame`` statements, one tuple per
//! row:
//!
//! ```text
//! INSERT INTO `sprite_frame` VALUES
//! ('prince',0,0,'walk',640),
//! ('prince',0,1,'attack',800);
//! ```
//!
//! Tuples are `(name, gfx id, action id, action label, interval ms)`. A
//! statement ends at a line starting with `;` or a line ending with `;`;
//! rows outside the statement are ignored.

use std::{path::Path, sync::OnceLock};

use log::debug;
use regex::Regex;

use super::SpriteFrameTable;
use crate::file::Result;

/// Default name of the table holding animation intervals.
pub const DEFAULT_TABLE: &str = "sprite_frame";

/// One `sprite_frame` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrameRow {
	/// Character name
	pub name: String,
	/// Graphic id
	pub gfx_id: u32,
	/// Action id
	pub action_id: u32,
	/// Interval in milliseconds
	pub interval_ms: u32,
}

fn row_pattern() -> &'static Regex {
	static PATTERN: OnceLock<Regex> = OnceLock::new();
	PATTERN.get_or_init(|| {
		Regex::new(r"\('((?:[^'\\]|\\.)*)',\s*(\d+),\s*(\d+),\s*'(?:[^'\\]|\\.)*',\s*(\d+)\)")
			.expect("valid sprite_frame row pattern")
	})
}

fn unescape(raw: &str) -> String {
	let mut out = String::with_capacity(raw.len());
	let mut chars = raw.chars();
	while let Some(ch) = chars.next() {
		if ch == '\\' {
			if let Some(next) = chars.next() {
				out.push(next);
			}
		} else {
			out.push(ch);
		}
	}
	out
}

/// Extracts every row tuple found in `text`.
pub fn rows_in(text: &str) -> impl Iterator<Item = SpriteFrameRow> + '_ {
	row_pattern().captures_iter(text).filter_map(|caps| {
		Some(SpriteFrameRow {
			name: unescape(&caps[1]),
			gfx_id: caps[2].parse().ok()?,
			action_id: caps[3].parse().ok()?,
			interval_ms: caps[4].parse().ok()?,
		})
	})
}

/// Scans an SQL dump for the rows of `table`.
pub fn parse_rows(text: &str, table: &str) -> Vec<SpriteFrameRow> {
	let marker = format!("INSERT INTO `{table}`");
	let mut rows = Vec::new();
	let mut in_statement = false;

	for line in text.lines() {
		let trimmed = line.trim();

		if let Some(position) = line.find(&marker) {
			in_statement = true;
			rows.extend(rows_in(&line[position + marker.len()..]));
			if trimmed.ends_with(';') {
				in_statement = false;
			}
			continue;
		}

		if !in_statement {
			continue;
		}
		if trimmed.starts_with(';') || trimmed.starts_with("INSERT INTO") {
			in_statement = false;
			continue;
		}

		rows.extend(rows_in(line));
		if trimmed.ends_with(';') {
			in_statement = false;
		}
	}

	rows
}

impl SpriteFrameTable {
	/// Builds a table from the `table` rows of an SQL dump.
	pub fn from_sql(text: &str, table: &str) -> Self {
		let mut frames = Self::new();
		for row in parse_rows(text, table) {
			frames.insert_name(row.gfx_id, row.name);
			frames.insert(row.gfx_id, row.action_id, row.interval_ms);
		}
		debug!("{} `{table}` intervals read from SQL", frames.len());
		frames
	}

	/// Opens an SQL dump and reads the rows of `table`.
	pub fn open_sql(path: impl AsRef<Path>, table: &str) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Ok(Self::from_sql(&text, table))
	}
}
