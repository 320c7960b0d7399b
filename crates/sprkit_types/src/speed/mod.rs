//! Cross-checking `list.spr` action durations against the expected
//! intervals from the SQL dump and the generated `SprDataTable` source.
//!
//! Every parsed action gets exactly one [`Comparison`]: it either matches
//! the expected interval, differs from it, or has no expected interval at
//! all. A missing entry is never counted as a mismatch.

mod report;

use std::collections::BTreeSet;

use crate::file::{ActionCategory, ActionTiming, ListSpr, SpriteFrameTable};

pub use self::report::{RULE_WIDTH, render_report};

/// Outcome for one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
	/// Same duration in both sources
	Matched {
		/// Expected interval in milliseconds
		expected_ms: u32,
	},
	/// Both sources have a value and they differ
	Mismatched {
		/// Expected interval in milliseconds
		expected_ms: u32,
		/// `list.spr` total minus the expected interval
		diff_ms: i64,
	},
	/// No expected interval for this action
	Missing,
}

impl Comparison {
	/// Compares a `list.spr` total with an optional expected interval.
	pub fn of(total_ms: u64, expected: Option<u32>) -> Self {
		match expected {
			None => Self::Missing,
			Some(expected_ms) if u64::from(expected_ms) == total_ms => Self::Matched {
				expected_ms,
			},
			Some(expected_ms) => Self::Mismatched {
				expected_ms,
				diff_ms: i64::try_from(total_ms).unwrap_or(i64::MAX) - i64::from(expected_ms),
			},
		}
	}
}

/// One compared action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionComparison {
	/// Timing read from `list.spr`
	pub timing: ActionTiming,
	/// Result of the comparison
	pub comparison: Comparison,
}

/// Compared actions of one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterComparison {
	/// Graphic id
	pub gfx_id: u32,
	/// Name from the SQL dump, or from `list.spr` when the dump has none
	pub name: String,
	/// Whether the character is under special attention
	pub special: bool,
	/// Actions ordered by id
	pub actions: Vec<ActionComparison>,
}

impl CharacterComparison {
	/// Actions grouped by category, categories in declaration order.
	pub fn by_category(&self) -> Vec<(ActionCategory, Vec<&ActionComparison>)> {
		ActionCategory::ALL
			.iter()
			.filter_map(|&category| {
				let actions: Vec<_> =
					self.actions.iter().filter(|action| action.timing.category == category).collect();
				(!actions.is_empty()).then_some((category, actions))
			})
			.collect()
	}
}

/// Counts over all compared actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
	/// Number of compared actions
	pub total: usize,
	/// Actions with equal durations
	pub matched: usize,
	/// Actions with different durations
	pub mismatched: usize,
	/// Actions without an expected interval
	pub missing: usize,
}

impl Summary {
	/// `count` as a percentage of the total; `0.0` when nothing was compared.
	pub fn percent(&self, count: usize) -> f64 {
		if self.total == 0 {
			0.0
		} else {
			count as f64 * 100.0 / self.total as f64
		}
	}
}

/// A mismatch, flattened for the detail lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch<'a> {
	/// Character the action belongs to
	pub character: &'a CharacterComparison,
	/// The mismatching action
	pub action: &'a ActionComparison,
	/// Expected interval
	pub expected_ms: u32,
	/// `list.spr` total minus the expected interval
	pub diff_ms: i64,
}

/// Full comparison result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeedComparison {
	/// Characters ordered by graphic id
	pub characters: Vec<CharacterComparison>,
	/// Graphic ids under special attention
	pub special: BTreeSet<u32>,
}

impl SpeedComparison {
	/// Compares every parsed action of `list` with `expected`.
	pub fn reconcile(list: &ListSpr, expected: &SpriteFrameTable, special: &BTreeSet<u32>) -> Self {
		let characters = list
			.characters()
			.map(|character| CharacterComparison {
				gfx_id: character.gfx_id,
				name: expected.name(character.gfx_id).unwrap_or(&character.name).to_string(),
				special: special.contains(&character.gfx_id),
				actions: character
					.actions()
					.map(|timing| ActionComparison {
						comparison: Comparison::of(
							timing.total_ms,
							expected.get(character.gfx_id, timing.action_id),
						),
						timing: timing.clone(),
					})
					.collect(),
			})
			.collect();

		Self {
			characters,
			special: special.clone(),
		}
	}

	/// Counts of each outcome.
	pub fn summary(&self) -> Summary {
		let mut summary = Summary::default();
		for action in self.characters.iter().flat_map(|character| &character.actions) {
			summary.total += 1;
			match action.comparison {
				Comparison::Matched {
					..
				} => summary.matched += 1,
				Comparison::Mismatched {
					..
				} => summary.mismatched += 1,
				Comparison::Missing => summary.missing += 1,
			}
		}
		summary
	}

	/// Every mismatch, by graphic id then action id.
	pub fn mismatches(&self) -> impl Iterator<Item = Mismatch<'_>> {
		self.characters.iter().flat_map(|character| {
			character.actions.iter().filter_map(move |action| match action.comparison {
				Comparison::Mismatched {
					expected_ms,
					diff_ms,
				} => Some(Mismatch {
					character,
					action,
					expected_ms,
					diff_ms,
				}),
				_ => None,
			})
		})
	}

	/// Mismatches of the special characters only.
	pub fn special_mismatches(&self) -> impl Iterator<Item = Mismatch<'_>> {
		self.mismatches().filter(|mismatch| mismatch.character.special)
	}
}
