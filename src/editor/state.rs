use crate::grid::{Cell, PixelGrid};

use super::command::{Command, Direction, RunLength};

/// Cursor position in the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Cursor {
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The color written by runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaintColor {
    #[default]
    Black,
    White,
}

impl PaintColor {
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    pub const fn cell(self) -> Cell {
        match self {
            Self::Black => Cell::Black,
            Self::White => Cell::White,
        }
    }
}

/// Horizontal direction a run travels in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunDirection {
    #[default]
    Rightward,
    Leftward,
}

impl RunDirection {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Rightward => Self::Leftward,
            Self::Leftward => Self::Rightward,
        }
    }
}

/// A grid plus the cursor, paint color and run direction used to edit it.
///
/// The cursor is always inside the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    grid: PixelGrid,
    cursor: Cursor,
    color: PaintColor,
    direction: RunDirection,
}

impl EditorState {
    /// Start editing `grid` at (0, 0), painting black, running rightward.
    pub fn new(grid: PixelGrid) -> Self {
        Self {
            grid,
            cursor: Cursor::default(),
            color: PaintColor::default(),
            direction: RunDirection::default(),
        }
    }

    pub const fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub const fn color(&self) -> PaintColor {
        self.color
    }

    pub const fn direction(&self) -> RunDirection {
        self.direction
    }

    /// The cell under the cursor.
    pub fn current_cell(&self) -> Cell {
        self.grid
            .get(self.cursor.row, self.cursor.col)
            .unwrap_or_default()
    }

    /// Apply one command. Returns true when a grid cell was written.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Move(direction) => {
                self.move_cursor(direction);
                false
            }
            Command::Home => {
                self.cursor = Cursor::default();
                self.direction = RunDirection::Rightward;
                false
            }
            Command::PlaceRun(n) => self.place_run(n),
            Command::ReverseDirection => {
                self.direction = self.direction.reversed();
                false
            }
            Command::ExchangeColor => {
                self.color = self.color.inverted();
                false
            }
            Command::SetTrue => self.write(Cell::Black),
            Command::SetFalse => self.write(Cell::White),
            Command::ClearCell => self.write(Cell::Unset),
            Command::Save => false,
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        let Cursor { row, col } = self.cursor;
        self.cursor = match direction {
            Direction::Up => Cursor::at(row.saturating_sub(1), col),
            Direction::Down => Cursor::at((row + 1).min(self.grid.height() - 1), col),
            Direction::Left => Cursor::at(row, col.saturating_sub(1)),
            Direction::Right => Cursor::at(row, (col + 1).min(self.grid.width() - 1)),
        };
    }

    /// Paint `n` cells boustrophedon-style, then swap the paint color.
    fn place_run(&mut self, n: RunLength) -> bool {
        let cell = self.color.cell();
        let mut written = false;
        for _ in 0..n.get() {
            written |= self.write(cell);
            if !self.advance() {
                break;
            }
        }
        self.color = self.color.inverted();
        written
    }

    /// Step to the next cell of a run.
    ///
    /// At the end of a row the run turns down one row and reverses. Returns
    /// false when the turn would leave the last row; the cursor stays put.
    fn advance(&mut self) -> bool {
        let last_col = self.grid.width() - 1;
        match self.direction {
            RunDirection::Rightward if self.cursor.col < last_col => {
                self.cursor.col += 1;
            }
            RunDirection::Leftward if self.cursor.col > 0 => {
                self.cursor.col -= 1;
            }
            _ => {
                if self.cursor.row + 1 >= self.grid.height() {
                    return false;
                }
                self.cursor.row += 1;
                self.direction = self.direction.reversed();
            }
        }
        true
    }

    fn write(&mut self, cell: Cell) -> bool {
        self.grid
            .set(self.cursor.row, self.cursor.col, cell)
            .expect("cursor is clamped to the grid");
        true
    }
}
