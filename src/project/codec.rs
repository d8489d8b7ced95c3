//! ProjectCodec: PixelBuffer <-> stored project record.
//!
//! The host keeps a small list of recent projects as JSON records; this
//! module produces and consumes that shape but never stores it. Field
//! names are camelCase on the wire (`gridSize`, `usedColors`) to match
//! the records the web-app host already has on disk.
//!
//! Decoding is deliberately forgiving: a record whose pixel array is
//! longer or shorter than the grid must load without crashing, so excess
//! entries are truncated and missing ones stay empty.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::buffer::{GridSize, PixelBuffer, Rgb};
use crate::export;
use crate::{Error, Result};

/// How many distinct colors a record's cosmetic summary carries.
const USED_COLOR_SAMPLE: usize = 2;

/// A stored project, as the external project store keeps it.
///
/// `pixels` is the flattened cell sequence in index order; `None` marks
/// an unpainted cell (`null` on the wire). `thumbnail` is a base64 PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Flattened cells, row-major, `null` for empty.
    #[serde(default)]
    pub pixels: Vec<Option<Rgb>>,
    /// Grid side length; must be one of the allowed sizes.
    pub grid_size: u32,
    /// User-visible project name.
    #[serde(default)]
    pub name: String,
    /// Unix timestamp (seconds) of the save.
    #[serde(default)]
    pub timestamp: u64,
    /// Base64-encoded PNG preview.
    #[serde(default)]
    pub thumbnail: String,
    /// Up to two distinct colors used in the art, for list previews.
    #[serde(default)]
    pub used_colors: Vec<Rgb>,
}

/// Build a record from a buffer.
///
/// Flattens the cells in index order and attaches the thumbnail and the
/// color summary. Fails only if PNG encoding of the thumbnail fails.
pub fn encode(buffer: &PixelBuffer, name: &str, timestamp: u64) -> Result<ProjectRecord> {
    let png = export::encode_png(&export::thumbnail(buffer))?;
    Ok(ProjectRecord {
        pixels: buffer.cells().to_vec(),
        grid_size: buffer.side(),
        name: name.to_owned(),
        timestamp,
        thumbnail: BASE64.encode(png),
        used_colors: buffer.color_usage_sample(USED_COLOR_SAMPLE),
    })
}

/// Load a record into a buffer.
///
/// The buffer is resized to the record's grid size (discarding current
/// content) whether or not the sizes match, then pixels are copied in
/// range. Length mismatches are tolerated; an unknown grid size is not,
/// since it would misinterpret the row-major pixel data.
pub fn decode(record: &ProjectRecord, buffer: &mut PixelBuffer) -> Result<()> {
    let size =
        GridSize::new(record.grid_size).ok_or(Error::InvalidGridSize(record.grid_size))?;

    // Resize always clears, so entries past the stored data stay empty.
    buffer.resize(size);

    if record.pixels.len() != buffer.len() {
        warn!(
            "project {:?}: {} stored pixels for a {} grid; truncating/padding",
            record.name,
            record.pixels.len(),
            size
        );
    }

    for (index, cell) in record.pixels.iter().take(buffer.len()).enumerate() {
        if let Some(color) = cell {
            buffer.set_pixel(index, *color);
        }
    }
    Ok(())
}

/// Decode a record's embedded thumbnail back to PNG bytes.
pub fn decode_thumbnail(record: &ProjectRecord) -> Result<Vec<u8>> {
    Ok(BASE64.decode(&record.thumbnail)?)
}

/// Serialize a record to the host's JSON wire form.
pub fn to_json(record: &ProjectRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}

/// Parse a record from the host's JSON wire form.
pub fn from_json(json: &str) -> Result<ProjectRecord> {
    Ok(serde_json::from_str(json)?)
}
