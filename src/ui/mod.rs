//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Zoom and overview windows onto the grid
//! - [`style`]: Cell and panel colors

pub mod style;
pub mod viewport;

mod overlays;
mod render;
mod status;

pub use render::{render, split_main_columns};

/// Terminal columns per grid cell in the zoom panel.
pub const ZOOM_CELL_WIDTH: u16 = 2;
/// Height of the paint status panel including borders.
pub const STATUS_PANEL_HEIGHT: u16 = 7;
