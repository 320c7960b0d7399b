//! Item table to description lines.
//!
//! Reads a tab-separated item table (from stdin unless `--input` is given)
//! and prints one `desc<TAB>$key<TAB>name<TAB>name` line per row whose
//! first field starts with `$`.
//!
//! # Usage
//!
//! ```bash
//! item_table_desc < items.tsv > desc.txt
//! item_table_desc --input items.tsv
//! ```

use std::{
	fs::File,
	io::{self, BufReader, BufWriter, Write},
	path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use sprkit::sprkit_types::file::item_table::convert;

#[derive(Parser)]
#[command(name = "item_table_desc")]
#[command(author = "sprkit project")]
#[command(version)]
#[command(about = "Convert a tab-separated item table into desc lines", long_about = None)]
struct Cli {
	/// Read the table from this file instead of stdin
	#[arg(short, long, value_name = "INPUT")]
	input: Option<PathBuf>,
}

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let stdout = io::stdout();
	let mut output = BufWriter::new(stdout.lock());

	let written = match &cli.input {
		Some(path) => {
			let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
			convert(BufReader::new(file), &mut output)?
		}
		None => convert(io::stdin().lock(), &mut output)?,
	};
	output.flush()?;

	debug!("{written} desc line(s) written");
	Ok(())
}
