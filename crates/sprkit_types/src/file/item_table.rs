//! Tab-separated item table to `desc.txt` line conversion.
//!
//! Input rows look like `$4001<TAB>Long Sword<TAB>...`; every row whose first
//! field starts with [`KEY_SIGIL`] becomes
//! `desc<TAB>$4001<TAB>Long Sword<TAB>Long Sword`. Anything else is skipped
//! without complaint.

use std::io::{BufRead, Write};

/// Character a key must start with for the row to qualify.
pub const KEY_SIGIL: char = '$';

/// Literal tag written as the first output field.
pub const DESC_TAG: &str = "desc";

/// A qualifying `(key, name)` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescEntry {
	/// Key including the sigil, cut at the first whitespace
	pub key: String,
	/// Display name
	pub name: String,
}

impl DescEntry {
	/// Parses one table row, returning `None` when it does not qualify.
	pub fn parse(line: &str) -> Option<Self> {
		let line = line.trim();
		if line.is_empty() {
			return None;
		}

		let mut fields = line.split('\t');
		let key = fields.next()?.trim();
		let name = fields.next()?.trim();
		if !key.starts_with(KEY_SIGIL) {
			return None;
		}
		let key = key.split_whitespace().next().unwrap_or(key);

		Some(Self {
			key: key.to_string(),
			name: name.to_string(),
		})
	}

	/// Formats the `desc.txt` line, without a trailing newline.
	pub fn to_desc_line(&self) -> String {
		format!("{DESC_TAG}\t{}\t{}\t{}", self.key, self.name, self.name)
	}
}

/// Converts every qualifying row of `input` and writes one line per row to `output`.
///
/// Returns the number of lines written.
pub fn convert<R: BufRead, W: Write>(input: R, mut output: W) -> std::io::Result<usize> {
	let mut written = 0;
	for line in input.lines() {
		let line = line?;
		if let Some(entry) = DescEntry::parse(&line) {
			writeln!(output, "{}", entry.to_desc_line())?;
			written += 1;
		}
	}
	output.flush()?;
	Ok(written)
}
