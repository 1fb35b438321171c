/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Number of cells painted by one run: a single digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunLength(u8);

impl RunLength {
    pub const MAX: u8 = 9;

    /// Returns `None` for values above [`RunLength::MAX`].
    pub const fn new(n: u8) -> Option<Self> {
        if n <= Self::MAX { Some(Self(n)) } else { None }
    }

    /// Parse an ASCII digit.
    pub fn from_digit(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::new)
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Every operation the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell, clamped at the grid edge
    Move(Direction),
    /// Cursor to (0, 0), direction to rightward
    Home,
    /// Paint a run in the active color, then swap the color
    PlaceRun(RunLength),
    /// Flip the run direction
    ReverseDirection,
    /// Flip the paint color
    ExchangeColor,
    /// Set the cell under the cursor to black
    SetTrue,
    /// Set the cell under the cursor to white
    SetFalse,
    /// Unset the cell under the cursor
    ClearCell,
    /// Persist the grid; performed by the application layer
    Save,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_length_accepts_single_digits() {
        for n in 0..=9 {
            assert_eq!(RunLength::new(n).map(RunLength::get), Some(n));
        }
        assert_eq!(RunLength::new(10), None);
    }

    #[test]
    fn test_run_length_from_digit() {
        assert_eq!(RunLength::from_digit('7'), RunLength::new(7));
        assert_eq!(RunLength::from_digit('0'), RunLength::new(0));
        assert_eq!(RunLength::from_digit('a'), None);
        assert_eq!(RunLength::from_digit('x'), None);
    }
}
