//! Colors for cells and panel chrome.
//!
//! Cells use fixed RGB values so they match exported PNGs regardless of the
//! terminal palette.

use ratatui::style::{Color, Modifier, Style};

use crate::editor::PaintColor;
use crate::grid::Cell;

pub const BLACK: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const WHITE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const UNSET: Color = Color::Rgb(0x7F, 0x7F, 0x7F);
pub const CURSOR: Color = Color::Rgb(0xFF, 0x00, 0x00);
/// Outline of the zoom window in the overview.
pub const ZOOM_FRAME: Color = Color::Rgb(0x00, 0x00, 0xFF);

pub const fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Black => BLACK,
        Cell::White => WHITE,
        Cell::Unset => UNSET,
    }
}

pub const fn paint_color(color: PaintColor) -> Color {
    cell_color(color.cell())
}

/// Style for the cursor marker drawn on top of `cell`.
pub fn cursor_style(cell: Cell) -> Style {
    Style::default()
        .fg(CURSOR)
        .bg(cell_color(cell))
        .add_modifier(Modifier::BOLD)
}

/// Border style for a panel.
pub fn panel_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn label_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}
