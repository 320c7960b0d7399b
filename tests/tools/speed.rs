use std::{collections::BTreeSet, fs};

use sprkit::sprkit_types::{
	file::{ListSpr, SpriteFrameTable, sprite_frame::sql::DEFAULT_TABLE},
	speed::{SpeedComparison, render_report},
};

const SQL: &str = "\
-- dump
INSERT INTO `sprite_frame` VALUES
('prince',0,0,'walk',640),
('prince',0,1,'attack',800),
('death knight',240,4,'walk sword',600);
";

const DATA_TABLE: &str = "\
var rawData = new List<(int gfx, int action, int frame)>
{
	(0, 0, 720), (0, 21, 400),
	(240, 4, 400), (9, 0, 100),
};
";

const LIST_SPR: &str = "\
#0	208	prince
0.walk(1 4,24.0:4 24.1:4 24.2:4 24.3:4)
1.attack(1 4,24.4:5[300 24.5:5 24.6:5 24.7:5<12)
21.bow(1 2,24.8:5 24.9:5)
30.kick(1 1,24.10:4)
#9	1	slime
0.walk(1 1,9.0:2)
#240	120	death knight
4.walk sword(1 2,240.0:5 240.1:5)
";

#[test_log::test]
fn test_three_source_reconciliation() {
	let dir = tempfile::tempdir().unwrap();
	let sql_path = dir.path().join("db.sql");
	let cs_path = dir.path().join("SprDataTable.cs");
	let list_path = dir.path().join("list.spr");
	fs::write(&sql_path, SQL).unwrap();
	fs::write(&cs_path, DATA_TABLE).unwrap();
	fs::write(&list_path, LIST_SPR).unwrap();

	let mut expected = SpriteFrameTable::open_sql(&sql_path, DEFAULT_TABLE).unwrap();
	expected.merge(&SpriteFrameTable::open_data_table(&cs_path).unwrap());
	// the SQL value wins on conflicts
	assert_eq!(expected.get(0, 0), Some(640));
	assert_eq!(expected.get(0, 21), Some(400));

	let targets = expected.named_gfx_ids();
	let list = ListSpr::open(&list_path, "utf-8", Some(&targets)).unwrap();
	// slime is not in the SQL dump
	assert_eq!(list.len(), 2);

	let special: BTreeSet<u32> = [240].into_iter().collect();
	let comparison = SpeedComparison::reconcile(&list, &expected, &special);
	let summary = comparison.summary();
	// walk 640 = 640, attack 800 = 800, bow 400 = 400, kick missing, dk walk 400 != 600
	assert_eq!((summary.total, summary.matched, summary.mismatched, summary.missing), (5, 3, 1, 1));

	let report = render_report(&comparison, "2026-10-18 12:00:00");
	assert!(report.contains("    list.spr:     800ms (frames: 200+200+200+200ms = 800ms)\n"));
	assert!(report.contains("### Ranged Attack - Bow\n\n  Action 21.bow:"));
	assert!(report.contains("  Action 30.kick:\n    list.spr:     160ms (frames: 160ms = 160ms)\n    SprDataTable: [missing]\n"));
	assert!(report.contains("## GfxId 240: death knight ⚠️\n"));
	assert!(report.contains("Matched: 3 (60.0%)\n"));
	assert!(report.contains("Missing: 1 (20.0%)\n"));
	assert!(report.contains("⚠️ Special character mismatches (gfx=240)"));
}

#[test]
fn test_no_sql_rows_parses_every_character() {
	let expected = SpriteFrameTable::from_data_table(DATA_TABLE);
	assert!(expected.named_gfx_ids().is_empty());

	let list = ListSpr::parse(LIST_SPR, None);
	assert_eq!(list.len(), 3);

	let comparison = SpeedComparison::reconcile(&list, &expected, &BTreeSet::new());
	let summary = comparison.summary();
	assert_eq!(summary.matched + summary.mismatched + summary.missing, summary.total);
	// slime walk 80 != 100
	assert_eq!(comparison.mismatches().filter(|m| m.character.gfx_id == 9).count(), 1);
	assert_eq!(comparison.special_mismatches().count(), 0);
}
