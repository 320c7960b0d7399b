//! Calibration to heading tweak generator.
//!
//! Reads the anchor calibration captured in game (one measurement per
//! heading, taken by turning the character to headings 0-7 and pressing F8)
//! and prints the `GetShadowClothesHeadingTweak` switch with the shadow and
//! clothes corrections of every heading.
//!
//! # Usage
//!
//! ```bash
//! calibration_tweak
//! calibration_tweak Assets/calibration_anchor.json --output tweak.cs
//! ```

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use sprkit::{
	config::ToolConfig,
	sprkit_types::{
		anchor::tweak::{heading_tweaks, render_heading_switch},
		file::{Calibration, HEADING_COUNT},
	},
};

#[derive(Parser)]
#[command(name = "calibration_tweak")]
#[command(author = "sprkit project")]
#[command(version)]
#[command(about = "Generate shadow/clothes heading tweaks from an anchor calibration export", long_about = None)]
struct Cli {
	/// Calibration export (defaults to the configured calibration_anchor.json)
	#[arg(value_name = "CALIBRATION")]
	input: Option<PathBuf>,

	/// Write the generated code to this file instead of stdout
	#[arg(short, long, value_name = "OUTPUT")]
	output: Option<PathBuf>,

	/// Configuration file (defaults to sprkit.toml when present)
	#[arg(short, long, value_name = "CONFIG")]
	config: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
	let input = cli.input.unwrap_or(config.calibration.input);

	if !input.exists() {
		bail!(
			"Calibration file {} not found. Turn the character to headings 0-7 in game, press F8 at each, \
			 then copy user://calibration_anchor.json into the project",
			input.display()
		);
	}

	let calibration =
		Calibration::open(&input).with_context(|| format!("Failed to parse {}", input.display()))?;
	if calibration.is_empty() {
		bail!("No usable calibration data in {}", input.display());
	}
	if calibration.len() < usize::from(HEADING_COUNT) {
		warn!(
			"only {} of {HEADING_COUNT} headings captured; missing headings get a zero tweak",
			calibration.len()
		);
	}

	let code = render_heading_switch(&heading_tweaks(&calibration));
	match &cli.output {
		Some(path) => {
			fs::write(path, &code).with_context(|| format!("Failed to write {}", path.display()))?;
			info!("heading tweaks written to {}", path.display());
		}
		None => print!("{code}"),
	}
	Ok(())
}
