//! Text rendering of a [`SpeedComparison`].

use std::fmt::Write as _;

use super::{Comparison, Mismatch, SpeedComparison};

/// Width of the `=` and `-` rules.
pub const RULE_WIDTH: usize = 80;

fn mismatch_detail(mismatch: &Mismatch<'_>) -> String {
	format!(
		"GfxId {} ({}) Action {}.{}: list.spr={}ms, SprDataTable={}ms, difference={}ms",
		mismatch.character.gfx_id,
		mismatch.character.name,
		mismatch.action.timing.action_id,
		mismatch.action.timing.name,
		mismatch.action.timing.total_ms,
		mismatch.expected_ms,
		mismatch.diff_ms
	)
}

fn banner(out: &mut String, title: &str) {
	let rule = "=".repeat(RULE_WIDTH);
	let _ = writeln!(out, "{rule}");
	let _ = writeln!(out, "{title}");
	let _ = writeln!(out, "{rule}");
	out.push('\n');
}

/// Renders the comparison report. `generated_at` is printed verbatim.
pub fn render_report(comparison: &SpeedComparison, generated_at: &str) -> String {
	let special_ids =
		comparison.special.iter().map(|id| format!("gfx={id}")).collect::<Vec<_>>().join(", ");
	let mut out = String::new();

	banner(&mut out, "list.spr vs SprDataTable speed comparison report");
	let _ = writeln!(out, "Generated: {generated_at}");
	out.push('\n');
	out.push_str("Notes:\n");
	out.push_str(
		"  - list.spr: total action duration parsed from list.spr (sum of DurationUnit * 40ms over all frames)\n",
	);
	out.push_str("  - SprDataTable: interval (ms) defined by the SQL dump or SprDataTable.cs\n");
	out.push_str("  - difference: list.spr minus SprDataTable (ms)\n");
	let _ = writeln!(out, "  - ⚠️ marks characters under special attention ({special_ids})");
	out.push('\n');

	for character in &comparison.characters {
		let mark = if character.special { " ⚠️" } else { "" };
		let _ = writeln!(out, "## GfxId {}: {}{mark}", character.gfx_id, character.name);
		let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

		for (category, actions) in character.by_category() {
			let _ = write!(out, "\n### {category}\n\n");
			for action in actions {
				let timing = &action.timing;
				let frames = timing.frame_durations.iter().map(u64::to_string).collect::<Vec<_>>().join("+");
				let _ = writeln!(out, "  Action {}.{}:", timing.action_id, timing.name);
				let _ = writeln!(
					out,
					"    list.spr:     {}ms (frames: {frames}ms = {}ms)",
					timing.total_ms, timing.total_ms
				);
				match action.comparison {
					Comparison::Matched {
						expected_ms,
					} => {
						let _ = writeln!(out, "    SprDataTable: {expected_ms}ms ✓ match");
					}
					Comparison::Mismatched {
						expected_ms,
						diff_ms,
					} => {
						let _ = writeln!(
							out,
							"    SprDataTable: {expected_ms}ms ✗ mismatch (difference: {diff_ms}ms)"
						);
						let relation = if diff_ms > 0 { "longer" } else { "shorter" };
						let _ = writeln!(
							out,
							"    Note: list.spr is {}ms {relation} than SprDataTable",
							diff_ms.unsigned_abs()
						);
					}
					Comparison::Missing => out.push_str("    SprDataTable: [missing]\n"),
				}
				out.push('\n');
			}
		}
		out.push('\n');
	}

	let summary = comparison.summary();
	banner(&mut out, "Summary");
	let _ = writeln!(out, "Total actions: {}", summary.total);
	for (label, count) in [
		("Matched", summary.matched),
		("Mismatched", summary.mismatched),
		("Missing", summary.missing),
	] {
		let _ = writeln!(out, "{label}: {count} ({:.1}%)", summary.percent(count));
	}
	out.push('\n');

	let mismatches: Vec<_> = comparison.mismatches().collect();
	if !mismatches.is_empty() {
		out.push_str("Mismatch details:\n");
		let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
		for mismatch in &mismatches {
			let _ = writeln!(out, "  {}", mismatch_detail(mismatch));
		}
		out.push('\n');
	}

	let special: Vec<_> = comparison.special_mismatches().collect();
	if !special.is_empty() {
		banner(&mut out, &format!("⚠️ Special character mismatches ({special_ids})"));
		for mismatch in &special {
			let _ = writeln!(out, "  {}", mismatch_detail(mismatch));
		}
		out.push('\n');
	}

	out
}
