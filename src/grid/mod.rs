//! Tri-state pixel storage.
//!
//! A [`PixelGrid`] has fixed dimensions chosen at construction and stores
//! one [`Cell`] per position in row-major order.

use thiserror::Error;

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 4096;

/// A single pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    Black,
    White,
    #[default]
    Unset,
}

/// Errors raised by grid construction and access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be between 1 and {MAX_DIMENSION}, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("expected {expected} cells for the grid, got {found}")]
    CellCount { expected: usize, found: usize },

    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

/// A fixed-size rectangle of tri-state cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl PixelGrid {
    /// Create a grid with every cell unset.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero
    /// or larger than [`MAX_DIMENSION`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Unset; width * height],
        })
    }

    /// Build a grid from row-major cells.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidDimensions`] for bad dimensions and
    /// [`GridError::CellCount`] when `cells` does not hold exactly
    /// `width * height` entries.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Read the cell at `(row, col)`.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Write the cell at `(row, col)`.
    ///
    /// # Errors
    /// Returns [`GridError::OutOfBounds`] outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    const fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            cells: vec![Cell::Unset],
        }
    }
}

const fn check_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_unset() {
        let grid = PixelGrid::new(4, 3).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.count(Cell::Unset), 12);
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            PixelGrid::new(0, 3),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert!(PixelGrid::new(3, 0).is_err());
    }

    #[test]
    fn test_oversized_dimension_is_rejected() {
        assert!(PixelGrid::new(MAX_DIMENSION + 1, 1).is_err());
        assert!(PixelGrid::new(1, MAX_DIMENSION).is_ok());
    }

    #[test]
    fn test_set_then_get() {
        let mut grid = PixelGrid::new(3, 2).unwrap();
        grid.set(1, 2, Cell::Black).unwrap();
        grid.set(0, 0, Cell::White).unwrap();
        assert_eq!(grid.get(1, 2), Ok(Cell::Black));
        assert_eq!(grid.get(0, 0), Ok(Cell::White));
        assert_eq!(grid.get(0, 1), Ok(Cell::Unset));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = PixelGrid::new(3, 2).unwrap();
        assert_eq!(
            grid.get(2, 0),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                width: 3,
                height: 2
            })
        );
        assert!(grid.get(0, 3).is_err());
    }

    #[test]
    fn test_set_out_of_bounds_leaves_grid_untouched() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        assert!(grid.set(5, 5, Cell::Black).is_err());
        assert_eq!(grid.count(Cell::Unset), 4);
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut grid = PixelGrid::new(2, 2).unwrap();
        grid.set(1, 0, Cell::Black).unwrap();
        let rows: Vec<&[Cell]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Cell::Unset, Cell::Unset]);
        assert_eq!(rows[1], &[Cell::Black, Cell::Unset]);
    }

    #[test]
    fn test_from_cells_checks_length() {
        let err = PixelGrid::from_cells(2, 2, vec![Cell::Black; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::CellCount {
                expected: 4,
                found: 3
            }
        );
        let grid = PixelGrid::from_cells(2, 1, vec![Cell::Black, Cell::White]).unwrap();
        assert_eq!(grid.get(0, 1), Ok(Cell::White));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn access_is_checked_against_dimensions(
                width in 1..40usize,
                height in 1..40usize,
                row in 0..60usize,
                col in 0..60usize,
            ) {
                let mut grid = PixelGrid::new(width, height).unwrap();
                let inside = row < height && col < width;
                prop_assert_eq!(grid.get(row, col).is_ok(), inside);
                prop_assert_eq!(grid.set(row, col, Cell::Black).is_ok(), inside);
                prop_assert_eq!(grid.count(Cell::Black), usize::from(inside));
            }
        }
    }
}
