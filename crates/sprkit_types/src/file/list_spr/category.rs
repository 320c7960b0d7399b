//! Action classification used when comparing animation speeds.

use std::fmt;

/// Kind of action an action id represents.
///
/// Only actions with a category take part in speed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionCategory {
	/// Walking
	Walk,
	/// Melee attack
	MeleeAttack,
	/// Ranged attack (bow)
	RangedAttack,
	/// Long range melee (spear, staff)
	LongRangeMelee,
	/// Ranged magic
	MagicRanged,
}

impl ActionCategory {
	/// Every category, in report order.
	pub const ALL: [Self; 5] = [
		Self::Walk,
		Self::MeleeAttack,
		Self::RangedAttack,
		Self::LongRangeMelee,
		Self::MagicRanged,
	];

	/// Category of `action_id`, or `None` for actions that are not validated.
	pub fn from_action_id(action_id: u32) -> Option<Self> {
		match action_id {
			0 | 4 | 11 | 20 | 24 | 40 => Some(Self::Walk),
			1 | 5 | 12 | 30 => Some(Self::MeleeAttack),
			21 => Some(Self::RangedAttack),
			41 => Some(Self::LongRangeMelee),
			18 | 19 => Some(Self::MagicRanged),
			_ => None,
		}
	}
}

impl fmt::Display for ActionCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Walk => "Walk",
			Self::MeleeAttack => "Melee Attack",
			Self::RangedAttack => "Ranged Attack - Bow",
			Self::LongRangeMelee => "Long Range Melee - Spear/Staff",
			Self::MagicRanged => "Magic Ranged",
		};
		f.write_str(label)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_classification_table() {
		assert_eq!(ActionCategory::from_action_id(0), Some(ActionCategory::Walk));
		assert_eq!(ActionCategory::from_action_id(40), Some(ActionCategory::Walk));
		assert_eq!(ActionCategory::from_action_id(30), Some(ActionCategory::MeleeAttack));
		assert_eq!(ActionCategory::from_action_id(21), Some(ActionCategory::RangedAttack));
		assert_eq!(ActionCategory::from_action_id(41), Some(ActionCategory::LongRangeMelee));
		assert_eq!(ActionCategory::from_action_id(19), Some(ActionCategory::MagicRanged));
		assert_eq!(ActionCategory::from_action_id(3), None);
		assert_eq!(ActionCategory::from_action_id(10), None);
	}
}
