//! Sprite direction mirror generator.
//!
//! Builds the four missing directions of a character from the four drawn
//! ones (by default 0→4 rotated 180°, 1→5 flipped vertically, 2→6 and 3→7
//! flipped horizontally), writes the mirrored frames and prints the offset
//! blocks for the new directions.
//!
//! # Usage
//!
//! ```bash
//! mirror_directions Assets/png138
//! mirror_directions Assets/png138 --output-dir out/ --output-txt out/sprite_offsets_167_mirrored.txt
//! mirror_directions Assets/png138 --offsets Assets/sprite_offsets.txt --assumed-size 32x64
//! ```

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::info;
use sprkit::{
	config::ToolConfig,
	sprkit_types::{
		anchor::{FrameSize, MirrorJob},
		file::{SpriteOffsets, sprite_offsets::render_sections},
	},
};

#[derive(Parser)]
#[command(name = "mirror_directions")]
#[command(author = "sprkit project")]
#[command(version)]
#[command(about = "Mirror drawn sprite directions into the missing ones", long_about = None)]
struct Cli {
	/// Directory with `{base}-{dir}-NNN.png` frames (defaults to the configured one)
	#[arg(value_name = "INPUT_DIR")]
	input_dir: Option<PathBuf>,

	/// Directory for the mirrored frames (defaults to the input directory)
	#[arg(short, long, value_name = "OUTPUT_DIR")]
	output_dir: Option<PathBuf>,

	/// Write the offset blocks to this file instead of stdout
	#[arg(short = 't', long, value_name = "OUTPUT_TXT")]
	output_txt: Option<PathBuf>,

	/// Graphic id to mirror
	#[arg(short, long, value_name = "GFX_ID")]
	base: Option<u32>,

	/// Existing sprite offset file to take source offsets from
	#[arg(long, value_name = "OFFSETS")]
	offsets: Option<PathBuf>,

	/// Frame size used when no source image exists, e.g. `24x48`
	#[arg(long, value_name = "WxH", value_parser = parse_size)]
	assumed_size: Option<FrameSize>,

	/// Configuration file (defaults to sprkit.toml when present)
	#[arg(short, long, value_name = "CONFIG")]
	config: Option<PathBuf>,
}

fn parse_size(text: &str) -> Result<FrameSize> {
	let (width, height) =
		text.split_once(['x', 'X']).ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got {text:?}"))?;
	Ok(FrameSize::new(width.trim().parse()?, height.trim().parse()?))
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let mirror = ToolConfig::load(cli.config.as_deref()).context("Failed to load configuration")?.mirror;

	let input_dir = cli.input_dir.unwrap_or(mirror.input_dir);
	let output_dir = cli.output_dir.or(mirror.output_dir).unwrap_or_else(|| input_dir.clone());
	let output_txt = cli.output_txt.or(mirror.output_txt);

	let mut job = MirrorJob::new(cli.base.unwrap_or(mirror.base_id), input_dir, output_dir);
	job.assumed_size = cli.assumed_size.unwrap_or(mirror.assumed_size);
	job.source_offsets = mirror.source_offsets;
	if let Some(path) = cli.offsets.or(mirror.offsets) {
		let known =
			SpriteOffsets::open(&path).with_context(|| format!("Failed to read {}", path.display()))?;
		info!("{} offset sections loaded from {}", known.len(), path.display());
		job.known = Some(known);
	}

	let outcomes = job.run(&mirror.pairs)?;
	let text = render_sections(outcomes.iter().map(|outcome| &outcome.section));

	match output_txt {
		Some(path) => {
			if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
				fs::create_dir_all(parent)?;
			}
			fs::write(&path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
			info!("offsets written to {}", path.display());
		}
		None => {
			println!("======== mirrored offsets (paste into sprite_offsets) ========\n");
			print!("{text}");
		}
	}
	Ok(())
}
