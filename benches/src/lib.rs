//! Benchmark helper utilities for sprkit
//!
//! This module generates synthetic text inputs shaped like the real asset
//! files: `list.spr`, sprite offset files and `sprite_frame` SQL dumps.

use std::fmt::Write as _;

/// Action ids written for every synthetic character, all of them validated.
pub const ACTION_IDS: [u32; 8] = [0, 1, 4, 5, 11, 21, 30, 41];

/// Generates a `list.spr` with `characters` characters.
///
/// Every action has `frames` frame tokens; some tokens carry sound cues and
/// `<` suffixes so the decoration stripping is exercised.
pub fn generate_list_spr(characters: u32, frames: u32) -> String {
	let mut out = String::new();
	for gfx in 0..characters {
		let _ = writeln!(out, "#{gfx}\t{}\tcharacter {gfx}", ACTION_IDS.len());
		for action in ACTION_IDS {
			let _ = write!(out, "{action}.action {action}(1 {frames},");
			for frame in 0..frames {
				let units = 2 + (gfx + frame) % 5;
				match frame % 4 {
					1 => {
						let _ = write!(out, "{gfx}.{frame}:{units}[300 ");
					}
					3 => {
						let _ = write!(out, "{gfx}.{frame}:{units}<97 ");
					}
					_ => {
						let _ = write!(out, "{gfx}.{frame}:{units} ");
					}
				}
			}
			out.push_str(")\n");
		}
	}
	out
}

/// Generates a sprite offset file with `sections` sections of `frames` frames.
pub fn generate_sprite_offsets(sections: u32, frames: u32) -> String {
	let mut out = String::new();
	for section in 0..sections {
		let (gfx, action) = (section / 8, section % 8);
		let _ = writeln!(out, "#{gfx}-{action}");
		let _ = writeln!(out, "ANCHOR = {gfx}-{action}-a.bmp");
		for frame in 0..frames {
			let dx = (section + frame) as i32 % 24 - 4;
			let dy = -40 - (frame as i32 % 6);
			let _ = writeln!(
				out,
				"FRAME {frame} dx={dx} dy={dy} bmp={gfx}-{action}-{frame:03}.png type=CHARACTER"
			);
		}
		out.push('\n');
	}
	out
}

/// Generates an SQL dump with one `sprite_frame` row per character and action.
pub fn generate_sql_dump(characters: u32) -> String {
	let mut out = String::from("-- synthetic dump\nINSERT INTO `sprite_frame` VALUES\n");
	let rows = characters * ACTION_IDS.len() as u32;
	let mut written = 0;
	for gfx in 0..characters {
		for action in ACTION_IDS {
			written += 1;
			let end = if written == rows { ';' } else { ',' };
			let _ = writeln!(out, "('character {gfx}',{gfx},{action},'action {action}',{}){end}", 400 + action * 40);
		}
	}
	out
}

/// Common benchmark sizes for synthetic inputs, as (characters, frames per action)
pub mod sizes {
	/// A handful of characters
	pub const SMALL: (u32, u32) = (16, 4);
	/// Roughly a real client's character list
	pub const REAL_GAME: (u32, u32) = (400, 8);
	/// Stress size
	pub const LARGE: (u32, u32) = (2000, 12);
}

#[cfg(test)]
mod tests {
	use sprkit_types::file::{ListSpr, SpriteFrameTable, SpriteOffsets, sprite_frame::sql::DEFAULT_TABLE};

	use super::*;

	#[test]
	fn test_generated_list_spr_parses() {
		let list = ListSpr::parse(&generate_list_spr(3, 4), None);
		assert_eq!(list.len(), 3);
		assert!(list.characters().all(|c| c.action_count() == ACTION_IDS.len()));
	}

	#[test]
	fn test_generated_offsets_parse() {
		let offsets = SpriteOffsets::parse(&generate_sprite_offsets(10, 3));
		assert_eq!(offsets.len(), 10);
		assert_eq!(offsets.get(1, 1).map(|s| s.frames.len()), Some(3));
	}

	#[test]
	fn test_generated_dump_parses() {
		let table = SpriteFrameTable::from_sql(&generate_sql_dump(5), DEFAULT_TABLE);
		assert_eq!(table.len(), 5 * ACTION_IDS.len());
		assert_eq!(table.named_gfx_ids().len(), 5);
	}
}
