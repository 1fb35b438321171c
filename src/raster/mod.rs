//! Raster export of pixel grids.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::grid::{Cell, PixelGrid};
use crate::storage::{StorageError, write_atomic};

/// Largest accepted block size, in pixels per cell edge.
pub const MAX_SCALE: u32 = 64;
/// Longest edge of an encoded image, in pixels. Scales that would exceed it
/// are lowered, never below one pixel per cell.
pub const MAX_IMAGE_EDGE: u32 = 8192;

const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xFF]);
const WHITE: Rgba<u8> = Rgba([0xFF, 0xFF, 0xFF, 0xFF]);
const GRAY: Rgba<u8> = Rgba([0x7F, 0x7F, 0x7F, 0xFF]);
const TRANSPARENT: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0x00]);

/// How unset cells appear in exported images.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnsetFill {
    /// Opaque mid gray
    #[default]
    Gray,
    /// Fully transparent
    Transparent,
}

/// Options for [`encode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    scale: u32,
    pub unset: UnsetFill,
}

impl RasterOptions {
    /// Scale is clamped to `1..=MAX_SCALE`.
    pub fn new(scale: u32, unset: UnsetFill) -> Self {
        Self {
            scale: scale.clamp(1, MAX_SCALE),
            unset,
        }
    }

    /// Pixels per cell edge.
    pub const fn scale(&self) -> u32 {
        self.scale
    }
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self::new(1, UnsetFill::Gray)
    }
}

const fn pixel_for(cell: Cell, unset: UnsetFill) -> Rgba<u8> {
    match (cell, unset) {
        (Cell::Black, _) => BLACK,
        (Cell::White, _) => WHITE,
        (Cell::Unset, UnsetFill::Gray) => GRAY,
        (Cell::Unset, UnsetFill::Transparent) => TRANSPARENT,
    }
}

/// Pixels per cell edge actually used for `grid`: the requested scale,
/// lowered until the longer image edge fits in [`MAX_IMAGE_EDGE`].
pub fn effective_scale(grid: &PixelGrid, options: RasterOptions) -> u32 {
    let longest = u32::try_from(grid.width().max(grid.height())).unwrap_or(u32::MAX);
    options.scale().min(MAX_IMAGE_EDGE / longest).max(1)
}

/// Size of the image [`encode`] produces for `grid`.
pub fn output_dimensions(grid: &PixelGrid, options: RasterOptions) -> (u32, u32) {
    let scale = effective_scale(grid, options);
    // Grid dimensions are capped at MAX_DIMENSION, far below u32::MAX.
    #[allow(clippy::cast_possible_truncation)]
    (grid.width() as u32 * scale, grid.height() as u32 * scale)
}

/// Render each cell as a square block of [`effective_scale`] pixels.
pub fn encode(grid: &PixelGrid, options: RasterOptions) -> RgbaImage {
    let scale = effective_scale(grid, options);
    let (width, height) = output_dimensions(grid, options);
    RgbaImage::from_fn(width, height, |x, y| {
        let cell = grid
            .get((y / scale) as usize, (x / scale) as usize)
            .unwrap_or_default();
        pixel_for(cell, options.unset)
    })
}

/// Encode a grid straight to PNG bytes.
///
/// # Errors
/// Returns an error if the PNG encoder fails.
pub fn encode_png(grid: &PixelGrid, options: RasterOptions) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    encode(grid, options).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Write a grid to `path` as a PNG file.
///
/// # Errors
/// Returns [`StorageError::Encode`] if encoding fails and
/// [`StorageError::Io`] if the file cannot be written.
pub fn export_png(path: &Path, grid: &PixelGrid, options: RasterOptions) -> Result<(), StorageError> {
    let bytes = encode_png(grid, options)?;
    write_atomic(path, &bytes)
}
