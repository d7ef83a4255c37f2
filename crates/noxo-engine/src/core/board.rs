use crate::SquareOccupiedError;

use super::{mark::Mark, square::Square};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// The eight winning lines: three rows, three columns, two diagonals.
const LINES: [[Square; 3]; 8] = {
    let [s1, s2, s3, s4, s5, s6, s7, s8, s9] = Square::ALL;
    [
        [s1, s2, s3],
        [s4, s5, s6],
        [s7, s8, s9],
        [s1, s4, s7],
        [s2, s5, s8],
        [s3, s6, s9],
        [s1, s5, s9],
        [s3, s5, s7],
    ]
};

/// A 3x3 noughts-and-crosses board.
///
/// `Board` is a small owned value. Moves mutate it only through
/// [`Board::place`], and callers that need a hypothetical position copy the
/// board instead of mutating and undoing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    /// Places `mark` on `square`.
    ///
    /// Fails without modifying the board when the square is already taken;
    /// the caller re-prompts.
    pub fn place(&mut self, square: Square, mark: Mark) -> Result<(), SquareOccupiedError> {
        let cell = &mut self.cells[square.row()][square.col()];
        if !cell.is_empty() {
            return Err(SquareOccupiedError);
        }
        *cell = Cell::Marked(mark);
        Ok(())
    }

    /// Iterates over the empty squares in row-major order.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::ALL
            .into_iter()
            .filter(|square| self.cell(*square).is_empty())
    }

    /// Returns true iff any row, column, or diagonal is entirely `mark`.
    #[must_use]
    pub fn is_winner(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&square| self.cell(square) == Cell::Marked(mark)))
    }

    /// Returns true iff no empty cell remains.
    ///
    /// A full board can still contain a winning line, so callers must check
    /// [`Board::is_winner`] first.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.empty_squares().next().is_none()
    }
}
