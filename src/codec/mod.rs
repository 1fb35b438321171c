//! Field file format.
//!
//! A field file is pretty-printed JSON holding the grid dimensions and one
//! token per cell in row-major order:
//!
//! ```json
//! {
//!   "width": 2,
//!   "height": 1,
//!   "pixels": [
//!     true,
//!     null
//!   ]
//! }
//! ```
//!
//! `true` is black, `false` is white and `null` is unset. Only the grid is
//! stored; cursor, paint color and run direction start fresh on load.
//!
//! Some older field files use `true` for white. Those files load here with
//! black and white swapped.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::grid::{Cell, MAX_DIMENSION, PixelGrid};
use crate::storage::{StorageError, write_atomic};

/// Reasons a field file is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    Syntax(String),

    #[error("top level must be a JSON object")]
    NotAnObject,

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("`{field}` must be an integer between 1 and {MAX_DIMENSION}, got {value}")]
    InvalidDimension { field: &'static str, value: String },

    #[error("`pixels` must be an array")]
    PixelsNotArray,

    #[error("expected {expected} pixels, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("unrecognized pixel token {token} at index {index}")]
    UnknownToken { index: usize, token: String },
}

#[derive(Serialize)]
struct FieldFile {
    width: usize,
    height: usize,
    pixels: Vec<Option<bool>>,
}

/// Top-level fields of a field file, checked one by one so each problem gets
/// its own [`FormatError`].
#[derive(Deserialize)]
struct RawFieldFile {
    #[serde(default, deserialize_with = "present")]
    width: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    height: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pixels: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)`; only an absent field is `None`.
fn present<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

const fn cell_token(cell: Cell) -> Option<bool> {
    match cell {
        Cell::Black => Some(true),
        Cell::White => Some(false),
        Cell::Unset => None,
    }
}

const fn token_cell(token: Option<bool>) -> Cell {
    match token {
        Some(true) => Cell::Black,
        Some(false) => Cell::White,
        None => Cell::Unset,
    }
}

/// Encode a grid as a field file.
pub fn serialize(grid: &PixelGrid) -> Vec<u8> {
    let file = FieldFile {
        width: grid.width(),
        height: grid.height(),
        pixels: grid.cells().iter().copied().map(cell_token).collect(),
    };
    let mut bytes = serde_json::to_vec_pretty(&file)
        .expect("integers and optional bools always serialize");
    bytes.push(b'\n');
    bytes
}

/// Decode a field file.
///
/// Nothing is built until every check has passed, so a bad file never yields
/// a partial grid.
///
/// # Errors
/// Returns a [`FormatError`] describing the first problem found.
pub fn deserialize(bytes: &[u8]) -> Result<PixelGrid, FormatError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|err| FormatError::Syntax(err.to_string()))?;
    if !value.is_object() {
        return Err(FormatError::NotAnObject);
    }
    let raw: RawFieldFile =
        serde_json::from_value(value).map_err(|err| FormatError::Syntax(err.to_string()))?;

    let width = dimension(raw.width, "width")?;
    let height = dimension(raw.height, "height")?;
    let Value::Array(pixels) = raw.pixels.ok_or(FormatError::MissingField("pixels"))? else {
        return Err(FormatError::PixelsNotArray);
    };

    let expected = width * height;
    let found = pixels.len();
    if found != expected {
        return Err(FormatError::SizeMismatch { expected, found });
    }

    let cells = pixels
        .into_iter()
        .enumerate()
        .map(|(index, token)| {
            Option::<bool>::deserialize(&token)
                .map(token_cell)
                .map_err(|_| FormatError::UnknownToken {
                    index,
                    token: token.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Dimensions and length were checked above.
    PixelGrid::from_cells(width, height, cells)
        .map_err(|_| FormatError::SizeMismatch { expected, found })
}

fn dimension(value: Option<Value>, field: &'static str) -> Result<usize, FormatError> {
    let value = value.ok_or(FormatError::MissingField(field))?;
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .filter(|n| (1..=MAX_DIMENSION).contains(n))
        .ok_or_else(|| FormatError::InvalidDimension {
            field,
            value: value.to_string(),
        })
}

/// Read a field file from disk.
///
/// # Errors
/// Returns [`StorageError::Io`] if the file cannot be read and
/// [`StorageError::Format`] if its contents are malformed.
pub fn load(path: &Path) -> Result<PixelGrid, StorageError> {
    let bytes = std::fs::read(path).map_err(|err| StorageError::io(path, err))?;
    deserialize(&bytes).map_err(|source| StorageError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a field file to disk, replacing any previous contents atomically.
///
/// # Errors
/// Returns [`StorageError::Io`] if the file cannot be written.
pub fn save(path: &Path, grid: &PixelGrid) -> Result<(), StorageError> {
    write_atomic(path, &serialize(grid))
}
