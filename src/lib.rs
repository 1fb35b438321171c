// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. grid::GridError)
    clippy::module_name_repetitions
)]

//! # Pixelfield
//!
//! A terminal editor for tri-state pixel grids.
//!
//! Every cell of a grid is black, white or unset. Pixelfield paints runs of
//! cells with the number keys, snaking down the grid row by row, saves the
//! grid as JSON and exports it as a PNG.
//!
//! ## Architecture
//!
//! Pixelfield uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`grid`]: The cell grid
//! - [`editor`]: Cursor, paint color and editing commands
//! - [`codec`]: JSON field file format
//! - [`raster`]: PNG export
//! - [`storage`]: Atomic file writes
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults
//! - [`perf`]: Timing and debug event log

pub mod app;
pub mod codec;
pub mod config;
pub mod editor;
pub mod grid;
pub mod perf;
pub mod raster;
pub mod storage;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Command, EditorState};
    pub use crate::grid::{Cell, PixelGrid};
}
