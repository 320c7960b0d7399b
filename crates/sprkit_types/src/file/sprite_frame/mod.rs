//! Animation interval tables recorded outside of `list.spr`.
//!
//! Two sources describe the expected interval (in milliseconds) of each
//! `(graphic id, action id)`:
//!
//! - the server's `sprite_frame` table, read from an SQL dump ([`sql`])
//! - the client's generated `SprDataTable` source ([`data_table`])
//!
//! Both parse into a [`SpriteFrameTable`]; [`SpriteFrameTable::merge`]
//! combines them with the first table taking precedence.

pub mod data_table;
pub mod sql;

use std::collections::{BTreeMap, HashSet};

/// Interval table keyed by graphic id and action id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteFrameTable {
	names: BTreeMap<u32, String>,
	intervals: BTreeMap<(u32, u32), u32>,
}

impl SpriteFrameTable {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records an interval, replacing an earlier value for the same key.
	pub fn insert(&mut self, gfx_id: u32, action_id: u32, interval_ms: u32) {
		self.intervals.insert((gfx_id, action_id), interval_ms);
	}

	/// Records a character name; the first name seen for a graphic id wins.
	pub fn insert_name(&mut self, gfx_id: u32, name: impl Into<String>) {
		self.names.entry(gfx_id).or_insert_with(|| name.into());
	}

	/// Interval recorded for `(gfx_id, action_id)`.
	pub fn get(&self, gfx_id: u32, action_id: u32) -> Option<u32> {
		self.intervals.get(&(gfx_id, action_id)).copied()
	}

	/// Character name recorded for `gfx_id`.
	pub fn name(&self, gfx_id: u32) -> Option<&str> {
		self.names.get(&gfx_id).map(String::as_str)
	}

	/// Graphic ids that have a name, i.e. characters listed by the source.
	pub fn named_gfx_ids(&self) -> HashSet<u32> {
		self.names.keys().copied().collect()
	}

	/// Number of distinct graphic ids with at least one interval.
	pub fn character_count(&self) -> usize {
		self.intervals.keys().map(|(gfx_id, _)| gfx_id).collect::<HashSet<_>>().len()
	}

	/// Number of recorded intervals.
	pub fn len(&self) -> usize {
		self.intervals.len()
	}

	/// Returns `true` when no interval was recorded.
	pub fn is_empty(&self) -> bool {
		self.intervals.is_empty()
	}

	/// Adds every key of `other` that this table does not have yet.
	///
	/// Values and names already present in `self` are kept.
	pub fn merge(&mut self, other: &Self) {
		for (&key, &interval) in &other.intervals {
			self.intervals.entry(key).or_insert(interval);
		}
		for (&gfx_id, name) in &other.names {
			self.names.entry(gfx_id).or_insert_with(|| name.clone());
		}
	}
}
