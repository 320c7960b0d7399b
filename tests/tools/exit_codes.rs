use std::{
	fs,
	path::Path,
	process::{Command, Output},
};

/// Runs a tool binary inside `dir`, so no stray `sprkit.toml` is picked up.
fn run(exe: &str, dir: &Path, args: &[&str]) -> Output {
	Command::new(exe).current_dir(dir).args(args).output().unwrap()
}

#[test]
fn test_clean_item_xml_refuses_empty_id_list() {
	let dir = tempfile::tempdir().unwrap();
	let items = dir.path().join("items");
	fs::create_dir(&items).unwrap();
	let xml = "<Items><Item ItemId=\"1\"/></Items>";
	fs::write(items.join("a.xml"), xml).unwrap();
	fs::write(dir.path().join("valid.txt"), "\nnot a number\n").unwrap();

	let output = run(env!("CARGO_BIN_EXE_clean_item_xml"), dir.path(), &["valid.txt", "items"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("No valid item ids"));
	assert_eq!(fs::read_to_string(items.join("a.xml")).unwrap(), xml);
	assert!(!dir.path().join("clean_item_xml_report.md").exists());
}

#[test]
fn test_calibration_tweak_missing_or_empty_input() {
	let dir = tempfile::tempdir().unwrap();
	let exe = env!("CARGO_BIN_EXE_calibration_tweak");

	let output = run(exe, dir.path(), &["missing.json"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));

	fs::write(dir.path().join("empty.json"), "[]").unwrap();
	let output = run(exe, dir.path(), &["empty.json"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("No usable calibration data"));

	fs::write(dir.path().join("one.json"), r#"[{ "heading": 2, "body": { "dx": 1, "dy": 2, "w": 3, "h": 4 } }]"#)
		.unwrap();
	let output = run(exe, dir.path(), &["one.json"]);
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).contains("case 2:"));
}

#[test]
fn test_anchor_align_check_missing_offsets() {
	let dir = tempfile::tempdir().unwrap();
	let output = run(env!("CARGO_BIN_EXE_anchor_align_check"), dir.path(), &["missing.txt", "10"]);
	assert!(!output.status.success());
	assert!(output.stdout.is_empty());
}

#[test]
fn test_speed_validator_missing_list_spr() {
	let dir = tempfile::tempdir().unwrap();
	let output = run(
		env!("CARGO_BIN_EXE_spr_speed_validator"),
		dir.path(),
		&["--sql", "db.sql", "--data-table", "SprDataTable.cs", "--list-spr", "list.spr", "-r", "out/report.txt"],
	);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("list.spr not found"));
	assert!(!dir.path().join("out").exists());
}
