use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::DEFAULT_LOOKAROUND;
use crate::editor::EditorState;
use crate::raster::RasterOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Clone)]
pub struct Model {
    /// Grid, cursor, paint color and run direction
    pub editor: EditorState,
    /// Field file the grid is saved to
    pub file_path: PathBuf,
    /// Target of in-app PNG export
    pub png_path: PathBuf,
    /// Options used for PNG export
    pub raster: RasterOptions,
    /// Zoom panel radius in cells
    pub lookaround: usize,
    /// Whether the grid changed since the last save or load
    pub dirty: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Terminal size as (width, height)
    pub terminal_size: (u16, u16),
    toast: Option<Toast>,
    /// Set after first quit attempt with unsaved changes; allows second quit to proceed
    pub quit_confirmed: bool,
    /// Set after first reload attempt with unsaved changes; allows second reload to discard them
    pub reload_confirmed: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a new model editing `editor`, saved to `file_path`.
    pub fn new(file_path: PathBuf, editor: EditorState, terminal_size: (u16, u16)) -> Self {
        let png_path = png_path_for(&file_path);
        Self {
            editor,
            file_path,
            png_path,
            raster: RasterOptions::default(),
            lookaround: DEFAULT_LOOKAROUND,
            dirty: false,
            help_visible: false,
            terminal_size,
            toast: None,
            quit_confirmed: false,
            reload_confirmed: false,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn with_raster(mut self, raster: RasterOptions) -> Self {
        self.raster = raster;
        self
    }

    #[must_use]
    pub const fn with_lookaround(mut self, lookaround: usize) -> Self {
        self.lookaround = lookaround;
        self
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(4),
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// File name shown in the status bar.
    pub fn display_name(&self) -> String {
        self.file_path
            .file_name()
            .map_or_else(|| "untitled".to_string(), |s| s.to_string_lossy().to_string())
    }

    /// Write the grid to the field file.
    pub(super) fn save_to_disk(&mut self) -> Result<(), crate::storage::StorageError> {
        let _scope = crate::perf::scope("app.save");
        crate::codec::save(&self.file_path, self.editor.grid())?;
        self.dirty = false;
        Ok(())
    }

    /// Write the grid to the PNG export path.
    pub(super) fn export_png(&self) -> Result<(), crate::storage::StorageError> {
        let _scope = crate::perf::scope("app.export_png");
        crate::raster::export_png(&self.png_path, self.editor.grid(), self.raster)
    }

    /// Replace the editor with the grid stored on disk.
    ///
    /// The editor is left untouched if the file cannot be read or parsed.
    pub(super) fn reload_from_disk(&mut self) -> Result<(), crate::storage::StorageError> {
        let grid = crate::codec::load(&self.file_path)?;
        self.editor = EditorState::new(grid);
        self.dirty = false;
        Ok(())
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PathBuf::new(), EditorState::default(), (80, 24))
    }
}

/// `field.json` exports to `field.png` next to it.
fn png_path_for(file_path: &Path) -> PathBuf {
    file_path.with_extension("png")
}
