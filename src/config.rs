//! Layered configuration shared by the `sprkit` tools.
//!
//! Values come from built-in defaults, overridden by an optional TOML file
//! (`sprkit.toml` in the working directory unless `--config` names another
//! one), overridden in turn by command-line flags in each tool.
//!
//! ```toml
//! [anchor_align]
//! offsets = "Assets/sprite_offsets-138_update.txt"
//! action = 10
//! layers = [
//!     { gfx_id = 240, label = "Body" },
//!     { gfx_id = 241, label = "Shadow" },
//! ]
//!
//! [mirror]
//! base_id = 167
//! input_dir = "Assets/png138"
//! assumed_size = { width = 24, height = 48 }
//! pairs = [{ source = 0, target = 4, flip = "both" }]
//!
//! [speed]
//! special_gfx_ids = [240]
//! encoding = "big5"
//! ```

use std::{
	collections::BTreeSet,
	path::{Path, PathBuf},
};

use config::{Config, ConfigError, File, FileFormat};
use log::debug;
use serde::{Deserialize, Serialize};
use sprkit_types::{
	anchor::{
		AlignLayer, DEFAULT_ACTION, DirectionOffsets, FrameSize, MirrorPair, default_layers,
		default_pairs, default_source_offsets,
	},
	file::sprite_frame::sql::DEFAULT_TABLE,
};

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sprkit.toml";

/// Settings of the item XML pruner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
	/// Markdown report path
	pub report: PathBuf,
}

impl Default for PruneConfig {
	fn default() -> Self {
		Self {
			report: PathBuf::from("clean_item_xml_report.md"),
		}
	}
}

/// Settings of the calibration tweak generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
	/// Calibration export read when no path is given
	pub input: PathBuf,
}

impl Default for CalibrationConfig {
	fn default() -> Self {
		Self {
			input: PathBuf::from("calibration_anchor.json"),
		}
	}
}

/// Settings of the anchor alignment checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorAlignConfig {
	/// Sprite offset file read when no path is given
	pub offsets: PathBuf,
	/// Action compared when none is given
	pub action: u32,
	/// Layers to compare, in report order
	pub layers: Vec<AlignLayer>,
}

impl Default for AnchorAlignConfig {
	fn default() -> Self {
		Self {
			offsets: PathBuf::from("sprite_offsets-138_update.txt"),
			action: DEFAULT_ACTION,
			layers: default_layers(),
		}
	}
}

/// Settings of the direction mirror generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
	/// Graphic id whose directions are mirrored
	pub base_id: u32,
	/// Directory holding the source frames
	pub input_dir: PathBuf,
	/// Directory receiving mirrored frames; the input directory when unset
	pub output_dir: Option<PathBuf>,
	/// Offset text destination; printed when unset
	pub output_txt: Option<PathBuf>,
	/// Existing offset file consulted for source offsets
	pub offsets: Option<PathBuf>,
	/// Frame size assumed when no source image exists
	pub assumed_size: FrameSize,
	/// Source to target directions
	pub pairs: Vec<MirrorPair>,
	/// Known source offsets by direction
	pub source_offsets: Vec<DirectionOffsets>,
}

impl Default for MirrorConfig {
	fn default() -> Self {
		Self {
			base_id: 167,
			input_dir: PathBuf::from("."),
			output_dir: None,
			output_txt: None,
			offsets: None,
			assumed_size: FrameSize::default(),
			pairs: default_pairs(),
			source_offsets: default_source_offsets(),
		}
	}
}

/// Settings of the animation speed validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
	/// SQL dump with the interval table
	pub sql: PathBuf,
	/// Generated `SprDataTable` source
	pub data_table: PathBuf,
	/// `list.spr` to validate
	pub list_spr: PathBuf,
	/// Report destination
	pub report: PathBuf,
	/// Name of the interval table in the dump
	pub table: String,
	/// Graphic ids given their own mismatch section
	pub special_gfx_ids: BTreeSet<u32>,
	/// Text encoding label of `list.spr`
	pub encoding: String,
}

impl Default for SpeedConfig {
	fn default() -> Self {
		Self {
			sql: PathBuf::from("server/database.sql"),
			data_table: PathBuf::from("Client/Data/SprDataTable.cs"),
			list_spr: PathBuf::from("Assets/list.spr"),
			report: PathBuf::from("Tool/spr_speed_comparison.txt"),
			table: DEFAULT_TABLE.to_string(),
			special_gfx_ids: [240].into_iter().collect(),
			encoding: "utf-8".to_string(),
		}
	}
}

/// Configuration of every tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
	/// `[prune]`
	pub prune: PruneConfig,
	/// `[calibration]`
	pub calibration: CalibrationConfig,
	/// `[anchor_align]`
	pub anchor_align: AnchorAlignConfig,
	/// `[mirror]`
	pub mirror: MirrorConfig,
	/// `[speed]`
	pub speed: SpeedConfig,
}

impl ToolConfig {
	/// Loads `path`, or [`DEFAULT_CONFIG_FILE`] if it exists when `path` is `None`.
	///
	/// An explicitly named file must exist.
	pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
		let (path, required) = match path {
			Some(path) => (path, true),
			None => (Path::new(DEFAULT_CONFIG_FILE), false),
		};
		debug!("loading configuration from {} (required: {required})", path.display());

		Config::builder()
			.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required))
			.build()?
			.try_deserialize()
	}

	/// Parses configuration from TOML text.
	pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
		Config::builder().add_source(File::from_str(text, FileFormat::Toml)).build()?.try_deserialize()
	}
}
