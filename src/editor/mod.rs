//! Cursor-driven editing of a pixel grid.
//!
//! [`EditorState`] owns the grid together with the cursor, the paint color
//! and the run direction. Every edit is a [`Command`] applied through
//! [`EditorState::apply`].

mod command;
mod state;

pub use command::{Command, Direction, RunLength};
pub use state::{Cursor, EditorState, PaintColor, RunDirection};
