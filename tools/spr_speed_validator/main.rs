//! Animation speed validator.
//!
//! Compares the action durations of `list.spr` (sum of frame durations,
//! 40ms per unit) with the intervals of the server's `sprite_frame` table
//! and the client's generated `SprDataTable`. The SQL dump wins where both
//! define an interval. The report is written to a file and echoed.
//!
//! # Usage
//!
//! ```bash
//! spr_speed_validator
//! spr_speed_validator --sql server/db.sql --list-spr Assets/list.spr --encoding big5
//! ```

use std::{collections::BTreeSet, fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use log::{info, warn};
use sprkit::{
	config::ToolConfig,
	sprkit_types::{
		file::{ListSpr, SpriteFrameTable},
		speed::{SpeedComparison, render_report},
	},
};

#[derive(Parser)]
#[command(name = "spr_speed_validator")]
#[command(author = "sprkit project")]
#[command(version)]
#[command(about = "Cross-check list.spr action durations against sprite_frame intervals", long_about = None)]
struct Cli {
	/// SQL dump containing the sprite_frame table
	#[arg(long, value_name = "SQL")]
	sql: Option<PathBuf>,

	/// Generated SprDataTable source
	#[arg(long, value_name = "DATA_TABLE")]
	data_table: Option<PathBuf>,

	/// list.spr to validate
	#[arg(long, value_name = "LIST_SPR")]
	list_spr: Option<PathBuf>,

	/// Report destination
	#[arg(short, long, value_name = "REPORT")]
	report: Option<PathBuf>,

	/// Text encoding of list.spr (e.g. utf-8, big5)
	#[arg(short, long, value_name = "LABEL")]
	encoding: Option<String>,

	/// Graphic ids that get their own mismatch section (repeatable)
	#[arg(short, long = "special", value_name = "GFX_ID")]
	special: Vec<u32>,

	/// Configuration file (defaults to sprkit.toml when present)
	#[arg(short, long, value_name = "CONFIG")]
	config: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let speed = ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?.speed;
	let sql_path = cli.sql.unwrap_or(speed.sql);
	let data_table_path = cli.data_table.unwrap_or(speed.data_table);
	let list_path = cli.list_spr.unwrap_or(speed.list_spr);
	let report_path = cli.report.unwrap_or(speed.report);
	let encoding = cli.encoding.unwrap_or(speed.encoding);
	let special: BTreeSet<u32> =
		if cli.special.is_empty() { speed.special_gfx_ids } else { cli.special.into_iter().collect() };

	let mut expected = if sql_path.exists() {
		SpriteFrameTable::open_sql(&sql_path, &speed.table)
			.with_context(|| format!("Failed to read {}", sql_path.display()))?
	} else {
		warn!("SQL dump {} not found", sql_path.display());
		SpriteFrameTable::new()
	};
	info!("{} characters loaded from the SQL dump", expected.character_count());

	if data_table_path.exists() {
		let data_table = SpriteFrameTable::open_data_table(&data_table_path)
			.with_context(|| format!("Failed to read {}", data_table_path.display()))?;
		info!("{} characters loaded from SprDataTable", data_table.character_count());
		expected.merge(&data_table);
	} else {
		warn!("SprDataTable source {} not found", data_table_path.display());
	}

	if !list_path.exists() {
		bail!("list.spr not found: {} (run from the project root)", list_path.display());
	}
	let targets = expected.named_gfx_ids();
	let targets = (!targets.is_empty()).then_some(&targets);
	match targets {
		Some(targets) => info!("parsing list.spr for {} target characters", targets.len()),
		None => info!("parsing list.spr for every character"),
	}
	let list = ListSpr::open(&list_path, &encoding, targets)
		.with_context(|| format!("Failed to read {}", list_path.display()))?;
	info!("{} characters found in list.spr", list.len());

	let comparison = SpeedComparison::reconcile(&list, &expected, &special);
	let report = render_report(&comparison, &Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

	if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}
	fs::write(&report_path, &report)
		.with_context(|| format!("Failed to write {}", report_path.display()))?;
	print!("{report}");
	info!("report saved to {}", report_path.display());
	Ok(())
}
