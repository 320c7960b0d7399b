//! Error types for file format parsing and manipulation.

use std::fmt;

use thiserror::Error;

/// The kind of asset file an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// Item definition XML document
	ItemXml,
	/// Valid item id list (one integer per line)
	ValidIds,
	/// In-game anchor calibration export (JSON)
	Calibration,
	/// Sprite offset text (`#gfx-action` sections with `FRAME` lines)
	SpriteOffsets,
	/// SQL dump containing the `sprite_frame` table
	SqlDump,
	/// Generated `SprDataTable` source
	DataTable,
	/// `list.spr` animation list
	ListSpr,
	/// PNG frame image
	Png,
}

impl fmt::Display for FileType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::ItemXml => "item XML",
			Self::ValidIds => "valid id list",
			Self::Calibration => "calibration export",
			Self::SpriteOffsets => "sprite offsets",
			Self::SqlDump => "SQL dump",
			Self::DataTable => "SprDataTable source",
			Self::ListSpr => "list.spr",
			Self::Png => "PNG",
		};
		f.write_str(name)
	}
}

/// Unified error type for every format and tool in this crate.
#[derive(Debug, Error)]
pub enum SprkitError {
	/// The input was readable but its content has the wrong overall shape
	#[error("Invalid {file_type} data: {message}")]
	InvalidData {
		/// File type being parsed
		file_type: FileType,
		/// Human readable reason
		message: String,
	},

	/// The input could not be decoded with the requested text encoding
	#[error("Bad {file_type} encoding: {message}")]
	BadEncoding {
		/// File type being decoded
		file_type: FileType,
		/// Human readable reason
		message: String,
	},

	/// The input parsed, but contained nothing usable
	#[error("No usable {file_type} data in {source_name}")]
	Empty {
		/// File type that came up empty
		file_type: FileType,
		/// Path or other name of the input
		source_name: String,
	},

	/// IO error
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// JSON error
	#[error(transparent)]
	Json(#[from] serde_json::Error),

	/// XML error
	#[error(transparent)]
	Xml(#[from] roxmltree::Error),

	/// Image decoding or encoding error
	#[error(transparent)]
	Image(#[from] image::ImageError),
}

impl SprkitError {
	/// Shorthand for [`SprkitError::InvalidData`].
	pub fn invalid(file_type: FileType, message: impl Into<String>) -> Self {
		Self::InvalidData {
			file_type,
			message: message.into(),
		}
	}

	/// Shorthand for [`SprkitError::Empty`].
	pub fn empty(file_type: FileType, source_name: impl fmt::Display) -> Self {
		Self::Empty {
			file_type,
			source_name: source_name.to_string(),
		}
	}
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SprkitError>;
