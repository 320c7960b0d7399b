//! Anchor alignment checker.
//!
//! Prints the `FRAME 0` anchor of the body, shadow and clothes layers for one
//! action so their feet alignment can be compared. Read only.
//!
//! # Usage
//!
//! ```bash
//! anchor_align_check
//! anchor_align_check Assets/sprite_offsets-138_update.txt 11
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sprkit::{
	config::ToolConfig,
	sprkit_types::{anchor::render_alignment_report, file::SpriteOffsets},
};

#[derive(Parser)]
#[command(name = "anchor_align_check")]
#[command(author = "sprkit project")]
#[command(version)]
#[command(about = "Compare FRAME 0 anchors of the body, shadow and clothes layers", long_about = None)]
struct Cli {
	/// Sprite offset file (defaults to the configured offsets file)
	#[arg(value_name = "OFFSETS")]
	offsets: Option<PathBuf>,

	/// Action id to compare (defaults to 10)
	#[arg(value_name = "ACTION")]
	action: Option<u32>,

	/// Configuration file (defaults to sprkit.toml when present)
	#[arg(short, long, value_name = "CONFIG")]
	config: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
	let path = cli.offsets.unwrap_or(config.anchor_align.offsets);
	let action = cli.action.unwrap_or(config.anchor_align.action);

	if !path.exists() {
		bail!("Cannot read {}: file not found", path.display());
	}
	let offsets =
		SpriteOffsets::open(&path).with_context(|| format!("Failed to read {}", path.display()))?;
	if offsets.is_empty() {
		bail!("No sprite offset sections in {}", path.display());
	}

	print!(
		"{}",
		render_alignment_report(
			&path.display().to_string(),
			&offsets,
			action,
			&config.anchor_align.layers
		)
	);
	Ok(())
}
