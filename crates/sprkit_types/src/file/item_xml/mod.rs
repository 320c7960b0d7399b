//! Item definition XML pruning.
//!
//! Item data lives in a set of XML documents whose root element holds a flat
//! list of `Item` children:
//!
//! ```text
//! <Items>
//!     <Item ItemId="40001" Name="..."/>
//!     <Item Id="40002" Name="..."/>
//! </Items>
//! ```
//!
//! Pruning removes every direct `Item` child whose identifier (`ItemId`, then
//! `Id`) is not in a [`ValidIds`] set. Items without a parsable integer
//! identifier are kept, and nothing below the root's direct children is ever
//! touched. A document is only rewritten when at least one item was removed,
//! so untouched files stay byte-identical.
//!
//! # Usage Examples
//!
//! ```
//! use sprkit_types::file::item_xml::{ValidIds, prune_items};
//!
//! let valid: ValidIds = [1, 2].into_iter().collect();
//! let xml = r#"<Items><Item ItemId="1"/><Item ItemId="3"/></Items>"#;
//!
//! let pruned = prune_items(xml, &valid).unwrap();
//! assert_eq!(pruned.removed(), &[3]);
//! assert!(pruned.output().unwrap().contains(r#"ItemId="1""#));
//! ```

mod writer;

use std::{
	collections::{BTreeSet, HashSet},
	fmt::Write as _,
	path::{Path, PathBuf},
};

use log::{debug, info, warn};
use roxmltree::{Document, Node, NodeId, ParsingOptions};

use crate::file::{FileType, Result, SprkitError};

/// Element name of the prunable records.
pub const ITEM_TAG: &str = "Item";

/// Attribute names checked for the item identifier, first match wins.
pub const ID_ATTRIBUTES: [&str; 2] = ["ItemId", "Id"];

/// Set of item identifiers that must survive pruning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidIds {
	ids: HashSet<i64>,
}

impl ValidIds {
	/// Loads ids from a text file containing one integer per line.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Ok(Self::from_text(&text))
	}

	/// Parses one integer per line. Blank and non-integer lines are skipped.
	pub fn from_text(text: &str) -> Self {
		text.lines().filter_map(|line| line.trim().parse::<i64>().ok()).collect()
	}

	/// Returns `true` if `id` is valid.
	pub fn contains(&self, id: i64) -> bool {
		self.ids.contains(&id)
	}

	/// Number of valid ids.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Returns `true` when no id was loaded.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}
}

impl FromIterator<i64> for ValidIds {
	fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
		Self {
			ids: iter.into_iter().collect(),
		}
	}
}

/// Result of pruning a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedDocument {
	removed: Vec<i64>,
	output: Option<String>,
}

impl PrunedDocument {
	/// Removed identifiers in document order.
	pub fn removed(&self) -> &[i64] {
		&self.removed
	}

	/// Rewritten document text, present only when something was removed.
	pub fn output(&self) -> Option<&str> {
		self.output.as_deref()
	}
}

/// Reads the identifier of an `Item` element, if it has a parsable one.
fn item_id(node: &Node<'_, '_>) -> Option<i64> {
	let raw = ID_ATTRIBUTES.iter().find_map(|name| node.attribute(*name))?;
	raw.trim().parse().ok()
}

/// Removes invalid `Item` children of the root element from `text`.
pub fn prune_items(text: &str, valid: &ValidIds) -> Result<PrunedDocument> {
	let text = text.strip_prefix('\u{feff}').unwrap_or(text);
	let options = ParsingOptions {
		allow_dtd: true,
		..ParsingOptions::default()
	};
	let doc = Document::parse_with_options(text, options)?;

	let mut removed = Vec::new();
	let mut skip: HashSet<NodeId> = HashSet::new();
	for child in doc.root_element().children().filter(|n| n.has_tag_name(ITEM_TAG)) {
		let Some(id) = item_id(&child) else {
			continue;
		};
		if !valid.contains(id) {
			removed.push(id);
			skip.insert(child.id());
		}
	}

	if removed.is_empty() {
		return Ok(PrunedDocument {
			removed,
			output: None,
		});
	}

	Ok(PrunedDocument {
		removed,
		output: Some(writer::write_document(&doc, &skip)),
	})
}

/// Prunes one file in place, returning the removed identifiers.
///
/// The file is only rewritten when something was removed and `dry_run` is off.
pub fn prune_file(path: impl AsRef<Path>, valid: &ValidIds, dry_run: bool) -> Result<Vec<i64>> {
	let path = path.as_ref();
	let text = std::fs::read_to_string(path)?;
	let pruned = prune_items(&text, valid)?;

	if let Some(output) = pruned.output() {
		if dry_run {
			debug!("dry run, not rewriting {}", path.display());
		} else {
			std::fs::write(path, output)?;
		}
	}

	Ok(pruned.removed)
}

/// Lists the `.xml` files directly inside `dir`, sorted by path.
pub fn xml_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	for entry in std::fs::read_dir(dir)? {
		let path = entry?.path();
		if path.is_file() && path.extension().is_some_and(|ext| ext == "xml") {
			files.push(path);
		}
	}
	files.sort();
	Ok(files)
}

/// Consolidated removal report across every processed file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
	files: Vec<(PathBuf, Vec<i64>)>,
}

impl PruneReport {
	/// Creates an empty report.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the ids removed from `path`.
	pub fn record(&mut self, path: impl Into<PathBuf>, removed: Vec<i64>) {
		self.files.push((path.into(), removed));
	}

	/// Every processed file, including the ones with nothing removed.
	pub fn files(&self) -> &[(PathBuf, Vec<i64>)] {
		&self.files
	}

	/// Total number of removed items across all files.
	pub fn removed_count(&self) -> usize {
		self.files.iter().map(|(_, removed)| removed.len()).sum()
	}

	/// Renders the Markdown report. Files without removals are omitted.
	pub fn to_markdown(&self) -> String {
		let mut out = String::from("# Clean Item XML Report\n\n");
		for (path, removed) in &self.files {
			if removed.is_empty() {
				continue;
			}
			let ids: BTreeSet<i64> = removed.iter().copied().collect();
			let ids = ids.iter().map(i64::to_string).collect::<Vec<_>>().join(", ");
			let _ = writeln!(out, "- `{}`", path.display());
			let _ = writeln!(out, "  - removed item ids: {ids}");
		}
		out
	}

	/// Writes the Markdown report to `path`, replacing any previous report.
	pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
		std::fs::write(path, self.to_markdown())?;
		Ok(())
	}
}

/// Prunes every `.xml` file directly inside each of `dirs`.
///
/// Directories that do not exist are skipped. A file that cannot be read or
/// parsed is logged and left alone; the run carries on with the next file.
pub fn prune_dirs(dirs: &[PathBuf], valid: &ValidIds, dry_run: bool) -> Result<PruneReport> {
	if valid.is_empty() {
		return Err(SprkitError::empty(FileType::ValidIds, "valid id set"));
	}

	let mut report = PruneReport::new();
	for dir in dirs {
		if !dir.exists() {
			warn!("skipping missing directory {}", dir.display());
			continue;
		}
		for path in xml_files(dir)? {
			match prune_file(&path, valid, dry_run) {
				Ok(removed) => {
					if !removed.is_empty() {
						info!("{}: removed {} item(s)", path.display(), removed.len());
					}
					report.record(path, removed);
				}
				Err(err) => warn!("skipping {}: {}", path.display(), err),
			}
		}
	}
	Ok(report)
}
