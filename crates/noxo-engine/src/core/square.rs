use std::fmt;

/// An address of one cell on the 3x3 board.
///
/// Players refer to squares by number, `1` through `9`, laid out row-major:
///
/// ```text
///  1 | 2 | 3
/// ---+---+---
///  4 | 5 | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
///
/// Internally a square is a 0-indexed `(row, col)` pair. A `Square` can only
/// be constructed in bounds, so lookups through it never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const CENTER: Square = Square { row: 1, col: 1 };

    /// All squares in row-major order, the canonical scan order for the
    /// move heuristic.
    pub const ALL: [Square; 9] = {
        let mut all = [Square { row: 0, col: 0 }; 9];
        let mut index = 0;
        while index < 9 {
            all[index] = Square {
                row: (index / 3) as u8,
                col: (index % 3) as u8,
            };
            index += 1;
        }
        all
    };

    /// The heuristic's fixed fallback preference: center first, then the
    /// corners in a fixed order.
    pub const STRATEGIC: [Square; 5] = [
        Square::CENTER,
        Square { row: 0, col: 0 },
        Square { row: 0, col: 2 },
        Square { row: 2, col: 0 },
        Square { row: 2, col: 2 },
    ];

    /// Converts a player-facing square number (1-9) to a square.
    ///
    /// Returns `None` when the number is out of range.
    #[must_use]
    pub fn from_number(number: u8) -> Option<Self> {
        if !(1..=9).contains(&number) {
            return None;
        }
        let index = number - 1;
        Some(Square {
            row: index / 3,
            col: index % 3,
        })
    }

    /// The player-facing square number (1-9).
    #[must_use]
    pub fn number(self) -> u8 {
        self.row * 3 + self.col + 1
    }

    #[must_use]
    pub fn row(self) -> usize {
        usize::from(self.row)
    }

    #[must_use]
    pub fn col(self) -> usize {
        usize::from(self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_mapping_is_row_major() {
        let square = Square::from_number(1).unwrap();
        assert_eq!((square.row(), square.col()), (0, 0));
        let square = Square::from_number(5).unwrap();
        assert_eq!((square.row(), square.col()), (1, 1));
        assert_eq!(square, Square::CENTER);
        let square = Square::from_number(6).unwrap();
        assert_eq!((square.row(), square.col()), (1, 2));
        let square = Square::from_number(9).unwrap();
        assert_eq!((square.row(), square.col()), (2, 2));
    }

    #[test]
    fn test_number_roundtrip_for_all_squares() {
        for (index, square) in Square::ALL.iter().enumerate() {
            let number = u8::try_from(index).unwrap() + 1;
            assert_eq!(square.number(), number);
            assert_eq!(Square::from_number(number), Some(*square));
        }
    }

    #[test]
    fn test_out_of_range_numbers_are_rejected() {
        assert_eq!(Square::from_number(0), None);
        assert_eq!(Square::from_number(10), None);
        assert_eq!(Square::from_number(u8::MAX), None);
    }

    #[test]
    fn test_all_is_row_major() {
        let numbers: Vec<_> = Square::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, (1..=9).collect::<Vec<_>>());
    }
}
