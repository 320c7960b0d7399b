use std::fs;

use sprkit::sprkit_types::file::{ValidIds, item_table::convert, item_xml::prune_dirs};

const ITEMS: &str = "<?xml version=\"1.0\"?>\n<Items>\n  <Item ItemId=\"40001\"><Name>Sword</Name></Item>\n  <Item ItemId=\"40002\"><Name>Shield</Name></Item>\n  <!-- event items -->\n  <Item Id=\"50001\" />\n</Items>\n";

const SHOP: &str = "<Shop>\n    <Item ItemId=\"40001\" Price=\"10\"/>\n</Shop>\n";

#[test_log::test]
fn test_prune_directories_and_report() {
	let root = tempfile::tempdir().unwrap();
	let items = root.path().join("items");
	fs::create_dir(&items).unwrap();
	fs::write(items.join("a_items.xml"), ITEMS).unwrap();
	fs::write(items.join("b_shop.xml"), SHOP).unwrap();
	fs::write(items.join("broken.xml"), "<Items><Item ItemId=\"1\">").unwrap();
	fs::write(items.join("notes.txt"), "<Item ItemId=\"7\"/>").unwrap();

	let valid = ValidIds::from_text("40001\n");
	let dirs = vec![items.clone(), root.path().join("missing")];
	let report = prune_dirs(&dirs, &valid, false).unwrap();

	assert_eq!(report.removed_count(), 2);
	assert_eq!(
		fs::read_to_string(items.join("a_items.xml")).unwrap(),
		"<?xml version='1.0' encoding='utf-8'?>\n<Items>\n\t<Item ItemId=\"40001\">\n\t\t<Name>Sword</Name>\n\t</Item>\n\t<!-- event items -->\n</Items>"
	);
	// nothing removed, so the file keeps its original bytes
	assert_eq!(fs::read_to_string(items.join("b_shop.xml")).unwrap(), SHOP);
	assert_eq!(fs::read_to_string(items.join("broken.xml")).unwrap(), "<Items><Item ItemId=\"1\">");

	let report_path = root.path().join("report.md");
	report.write(&report_path).unwrap();
	let markdown = fs::read_to_string(&report_path).unwrap();
	assert_eq!(
		markdown,
		format!(
			"# Clean Item XML Report\n\n- `{}`\n  - removed item ids: 40002, 50001\n",
			items.join("a_items.xml").display()
		)
	);
}

#[test]
fn test_dry_run_leaves_files_alone() {
	let root = tempfile::tempdir().unwrap();
	fs::write(root.path().join("items.xml"), ITEMS).unwrap();

	let valid = ValidIds::from_text("1\n");
	let report = prune_dirs(&[root.path().to_path_buf()], &valid, true).unwrap();
	assert_eq!(report.removed_count(), 3);
	assert_eq!(fs::read_to_string(root.path().join("items.xml")).unwrap(), ITEMS);
}

#[test]
fn test_empty_id_list_is_refused() {
	let root = tempfile::tempdir().unwrap();
	let valid = ValidIds::from_text("\nnot a number\n");
	assert!(prune_dirs(&[root.path().to_path_buf()], &valid, false).is_err());
}

#[test]
fn test_item_table_conversion() {
	let table = "$4001\tLong Sword\tweapon\n#comment\tx\n  $4002 extra\t Round Shield \t\nnot-a-key\tNope\n$4003\n";
	let mut output = Vec::new();
	let written = convert(table.as_bytes(), &mut output).unwrap();

	assert_eq!(written, 2);
	assert_eq!(
		String::from_utf8(output).unwrap(),
		"desc\t$4001\tLong Sword\tLong Sword\ndesc\t$4002\tRound Shield\tRound Shield\n"
	);
}
