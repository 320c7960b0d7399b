use std::fs;

use sprkit::{
	config::ToolConfig,
	sprkit_types::{
		anchor::{
			default_layers,
			render_alignment_report,
			tweak::{Tweak, heading_tweaks, render_heading_switch},
		},
		file::{Calibration, SpriteOffsets},
	},
};

#[test]
fn test_alignment_report_from_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("sprite_offsets-138_update.txt");
	fs::write(
		&path,
		"#240-10\nANCHOR = 240-10-a.bmp\nFRAME 0 dx=5 dy=40 bmp=240-10-000.png type=CHARACTER\n\n\
		 #241-10\nFRAME 2 dx=3 dy=12\n",
	)
	.unwrap();

	let offsets = SpriteOffsets::open(&path).unwrap();
	let report = render_alignment_report("offsets", &offsets, 10, &default_layers());
	let lines: Vec<&str> = report.lines().filter(|line| line.starts_with("  ")).collect();
	assert_eq!(
		lines,
		vec![
			"  Body (GfxId=240): FRAME 0  dx=5  dy=40",
			"  Shadow (GfxId=241): no FRAME 0, first frame 2  dx=3  dy=12",
			"  Clothes (GfxId=242): no data for action 10",
		]
	);
}

#[test]
fn test_configured_layers_are_used() {
	let config = ToolConfig::from_toml("[anchor_align]\nlayers = [{ gfx_id = 7, label = \"Mount\" }]\n").unwrap();
	let offsets = SpriteOffsets::parse("#7-10\nFRAME 0 dx=1 dy=2\n");
	let report = render_alignment_report("x", &offsets, config.anchor_align.action, &config.anchor_align.layers);
	assert!(report.contains("  Mount (GfxId=7): FRAME 0  dx=1  dy=2\n"));
	assert!(!report.contains("Body"));
}

#[test]
fn test_calibration_file_to_switch() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("calibration_anchor.json");
	fs::write(
		&path,
		r#"{
			"0": {
				"body": { "dx": 10, "dy": 40, "w": 30, "h": 50 },
				"shadow": { "dx": 4, "dy": 30, "w": 20, "h": 40 },
				"clothes": null
			},
			"5": { "body": { "dx": 12, "dy": 46, "w": 24, "h": 48 }, "clothes": {} }
		}"#,
	)
	.unwrap();

	let calibration = Calibration::open(&path).unwrap();
	let tweaks = heading_tweaks(&calibration);
	assert_eq!(tweaks[0].shadow, Tweak::new(-7.0, 10.0));
	assert_eq!(tweaks[0].clothes, Tweak::ZERO);
	assert_eq!(tweaks[5].clothes, Tweak::ZERO);

	let code = render_heading_switch(&tweaks);
	assert_eq!(code.matches("\t\t\t\t\tbreak;\n").count(), 8);
	assert!(code.contains(
		"\t\t\t\tcase 0:\n\t\t\t\t\tshadowTweak = new Vector2(-7.0f, 10.0f);\n\t\t\t\t\tclothesTweak = new Vector2(0.0f, 0.0f);\n"
	));
	assert!(code.contains("\t\t\t\tcase 7:\n\t\t\t\t\tshadowTweak = new Vector2(0.0f, 0.0f);\n"));
}
