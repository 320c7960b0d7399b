//! In-game anchor calibration export (`calibration_anchor.json`).
//!
//! The capture tool writes one measurement per heading, either as a list:
//!
//! ```json
//! [
//!   { "heading": 0, "body": { "dx": 12, "dy": 46, "w": 24, "h": 48 },
//!     "shadow": { "dx": 12, "dy": 44, "w": 24, "h": 46 } }
//! ]
//! ```
//!
//! or as an object keyed by heading:
//!
//! ```json
//! { "0": { "body": { "dx": 12, "dy": 46, "w": 24, "h": 48 } } }
//! ```
//!
//! In the list shape the last entry for a heading wins and a missing
//! `heading` means heading 0. In the object shape only values that are
//! objects with a `body` member are kept.

use std::{collections::BTreeMap, path::Path};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::file::{FileType, Result, SprkitError};

/// Number of sprite headings (0-7).
pub const HEADING_COUNT: u8 = 8;

fn default_extent() -> f64 {
	1.0
}

/// Anchor point and frame size of one sprite layer, in pixels.
///
/// `dx`/`dy` locate the anchor inside the frame (origin top-left, y down) and
/// may lie outside the frame; `w`/`h` are the frame size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorRecord {
	/// Anchor x
	#[serde(default)]
	pub dx: f64,
	/// Anchor y
	#[serde(default)]
	pub dy: f64,
	/// Frame width
	#[serde(default = "default_extent")]
	pub w: f64,
	/// Frame height
	#[serde(default = "default_extent")]
	pub h: f64,
}

impl AnchorRecord {
	/// Creates a record from its four measurements.
	pub const fn new(dx: f64, dy: f64, w: f64, h: f64) -> Self {
		Self {
			dx,
			dy,
			w,
			h,
		}
	}

	/// Vector from the anchor to the bottom-center pixel of the frame.
	pub fn bottom_center_offset(&self) -> (f64, f64) {
		(self.w / 2.0 - self.dx, self.h - self.dy)
	}

	/// Distance from the anchor down to the frame's bottom edge.
	pub fn anchor_to_feet(&self) -> f64 {
		self.h - self.dy
	}
}

/// Measurements captured for one heading.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalibrationEntry {
	/// Character body layer
	pub body: Option<AnchorRecord>,
	/// Shadow overlay layer
	pub shadow: Option<AnchorRecord>,
	/// Clothing overlay layer
	pub clothes: Option<AnchorRecord>,
}

impl CalibrationEntry {
	fn from_object(object: &Map<String, Value>) -> Result<Self> {
		Ok(Self {
			body: layer(object, "body")?,
			shadow: layer(object, "shadow")?,
			clothes: layer(object, "clothes")?,
		})
	}
}

/// Reads a layer; `null`, `{}` or a non-object value count as absent.
fn layer(object: &Map<String, Value>, name: &str) -> Result<Option<AnchorRecord>> {
	match object.get(name) {
		Some(Value::Object(fields)) if !fields.is_empty() => {
			let record: AnchorRecord = serde_json::from_value(Value::Object(fields.clone()))?;
			if record.w <= 0.0 || record.h <= 0.0 {
				warn!("{name} layer has a non-positive size {}x{}", record.w, record.h);
			}
			Ok(Some(record))
		}
		Some(other) if !other.is_null() && !other.is_object() => {
			debug!("ignoring non-object {name} layer: {other}");
			Ok(None)
		}
		_ => Ok(None),
	}
}

/// Reads a heading from a JSON number or numeric string.
fn heading_of(value: &Value) -> Option<i64> {
	match value {
		Value::Number(n) => n.as_i64().or_else(|| {
			n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)
		}),
		Value::String(s) => s.trim().parse().ok(),
		_ => None,
	}
}

/// A parsed calibration export, keyed by heading.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calibration {
	entries: BTreeMap<i64, CalibrationEntry>,
}

impl Calibration {
	/// Opens and parses a calibration export.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let text = std::fs::read_to_string(path)?;
		Self::from_json(&text)
	}

	/// Parses either the list or the object shape.
	pub fn from_json(text: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(text)?;
		let mut entries = BTreeMap::new();

		match value {
			Value::Array(items) => {
				for item in items {
					let Value::Object(object) = item else {
						debug!("ignoring non-object calibration entry");
						continue;
					};
					let heading = match object.get("heading") {
						None => 0,
						Some(raw) => match heading_of(raw) {
							Some(heading) => heading,
							None => {
								debug!("ignoring entry with unreadable heading {raw}");
								continue;
							}
						},
					};
					entries.insert(heading, CalibrationEntry::from_object(&object)?);
				}
			}
			Value::Object(map) => {
				for (key, item) in map {
					let Value::Object(object) = item else {
						continue;
					};
					if !object.contains_key("body") {
						continue;
					}
					let Ok(heading) = key.trim().parse::<i64>() else {
						debug!("ignoring entry with non-numeric key {key:?}");
						continue;
					};
					entries.insert(heading, CalibrationEntry::from_object(&object)?);
				}
			}
			_ => {
				return Err(SprkitError::invalid(
					FileType::Calibration,
					"top level must be a list or an object",
				));
			}
		}

		Ok(Self {
			entries,
		})
	}

	/// Entry recorded for `heading`, if any.
	pub fn get(&self, heading: u8) -> Option<&CalibrationEntry> {
		self.entries.get(&i64::from(heading))
	}

	/// Number of recorded headings.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when nothing usable was parsed.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
