//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use input::command_for_key;
pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::config::DEFAULT_LOOKAROUND;
use crate::raster::RasterOptions;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
    raster: RasterOptions,
    lookaround: usize,
}

impl App {
    /// Create a new application editing the given field file.
    pub fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            raster: RasterOptions::default(),
            lookaround: DEFAULT_LOOKAROUND,
        }
    }

    /// Set the options used by in-app PNG export.
    #[must_use]
    pub const fn with_raster(mut self, raster: RasterOptions) -> Self {
        self.raster = raster;
        self
    }

    /// Set the zoom panel radius.
    #[must_use]
    pub const fn with_lookaround(mut self, lookaround: usize) -> Self {
        self.lookaround = lookaround;
        self
    }
}
