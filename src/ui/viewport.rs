//! Windows onto the grid for the zoom and overview panels.

use crate::editor::Cursor;
use crate::grid::{Cell, PixelGrid};

/// First index of a `visible`-long window over `len` items that keeps
/// `focus` on screen, centred where the edges allow.
pub fn scroll_origin(len: usize, visible: usize, focus: usize) -> usize {
    if visible == 0 || len <= visible {
        return 0;
    }
    let max_origin = len - visible;
    focus.saturating_sub(visible / 2).min(max_origin)
}

/// A square of cells centred on the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomWindow {
    radius: usize,
}

impl ZoomWindow {
    pub const fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Largest window no bigger than `radius` whose cells fit in
    /// `columns`×`rows` terminal cells at `cell_width` columns per cell.
    pub const fn fit(radius: usize, columns: u16, rows: u16, cell_width: u16) -> Self {
        let across = (columns / cell_width) as usize;
        let down = rows as usize;
        let limit = if across < down { across } else { down };
        let fitting = limit.saturating_sub(1) / 2;
        Self {
            radius: if fitting < radius { fitting } else { radius },
        }
    }

    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Cells per side.
    pub const fn side(&self) -> usize {
        self.radius * 2 + 1
    }

    /// Whether grid cell (`row`, `col`) lies on the border of the window
    /// centred on `cursor`.
    pub const fn outlines(&self, cursor: Cursor, row: usize, col: usize) -> bool {
        let r = self.radius;
        let in_rows = row + r >= cursor.row && row <= cursor.row + r;
        let in_cols = col + r >= cursor.col && col <= cursor.col + r;
        let edge_row = row + r == cursor.row || row == cursor.row + r;
        let edge_col = col + r == cursor.col || col == cursor.col + r;
        in_rows && in_cols && (edge_row || edge_col)
    }

    /// Cells in the window, top row first. Positions outside the grid are
    /// `None`; the cursor sits at `[radius][radius]`.
    pub fn rows(&self, grid: &PixelGrid, cursor: Cursor) -> Vec<Vec<Option<Cell>>> {
        (0..self.side())
            .map(|dy| {
                (0..self.side())
                    .map(|dx| {
                        let row = (cursor.row + dy).checked_sub(self.radius)?;
                        let col = (cursor.col + dx).checked_sub(self.radius)?;
                        grid.get(row, col).ok()
                    })
                    .collect()
            })
            .collect()
    }
}

/// The part of the grid shown in the overview panel.
///
/// Each terminal row shows two grid rows, so a panel `height` rows tall
/// covers `2 * height` grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewWindow {
    /// First visible grid row
    pub row_origin: usize,
    /// First visible grid column
    pub col_origin: usize,
    /// Number of visible grid rows
    pub rows: usize,
    /// Number of visible grid columns
    pub cols: usize,
}

impl OverviewWindow {
    pub fn new(grid: &PixelGrid, cursor: Cursor, width: u16, height: u16) -> Self {
        let visible_rows = (height as usize * 2).min(grid.height());
        let visible_cols = (width as usize).min(grid.width());
        Self {
            row_origin: scroll_origin(grid.height(), visible_rows, cursor.row),
            col_origin: scroll_origin(grid.width(), visible_cols, cursor.col),
            rows: visible_rows,
            cols: visible_cols,
        }
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row_origin
            && row < self.row_origin + self.rows
            && col >= self.col_origin
            && col < self.col_origin + self.cols
    }
}
