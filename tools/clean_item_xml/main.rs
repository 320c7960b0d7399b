//! Item XML pruner.
//!
//! Removes every `<Item>` whose `ItemId` (or `Id`) is not in the valid id
//! list from the `.xml` files of the given directories, then writes a
//! Markdown report of what was removed.
//!
//! # Usage
//!
//! ```bash
//! clean_item_xml valid_item_ids.txt data/items data/shop
//! clean_item_xml valid_item_ids.txt data/items --dry-run --report /tmp/report.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use sprkit::{
	config::ToolConfig,
	sprkit_types::file::{ValidIds, item_xml::prune_dirs},
};

#[derive(Parser)]
#[command(name = "clean_item_xml")]
#[command(author = "sprkit project")]
#[command(version)]
#[command(about = "Remove items with unknown ids from item XML files", long_about = None)]
struct Cli {
	/// Valid item id list, one integer per line
	#[arg(value_name = "VALID_IDS")]
	valid_ids: PathBuf,

	/// Directories whose .xml files are pruned
	#[arg(value_name = "XML_DIR", required = true)]
	dirs: Vec<PathBuf>,

	/// Markdown report path
	#[arg(short, long, value_name = "REPORT")]
	report: Option<PathBuf>,

	/// Compute the report without rewriting any XML file
	#[arg(long, default_value_t = false)]
	dry_run: bool,

	/// Configuration file (defaults to sprkit.toml when present)
	#[arg(short, long, value_name = "CONFIG")]
	config: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
	let report_path = cli.report.unwrap_or(config.prune.report);

	let valid = ValidIds::open(&cli.valid_ids)
		.with_context(|| format!("Failed to read {}", cli.valid_ids.display()))?;
	if valid.is_empty() {
		bail!("No valid item ids loaded from {}; aborting", cli.valid_ids.display());
	}
	info!("{} valid item ids loaded", valid.len());

	let report = prune_dirs(&cli.dirs, &valid, cli.dry_run)?;
	report
		.write(&report_path)
		.with_context(|| format!("Failed to write report {}", report_path.display()))?;

	let verb = if cli.dry_run { "would remove" } else { "removed" };
	info!(
		"{} file(s) scanned, {verb} {} item(s); report written to {}",
		report.files().len(),
		report.removed_count(),
		report_path.display()
	);
	Ok(())
}
