use rand::{Rng, seq::IndexedRandom as _};

use crate::core::{Board, Mark, Square};

/// Picks the computer's next square with a greedy rule cascade.
///
/// Rules are tried in strict priority order; the first that applies wins:
///
/// 1. Take a square that wins the game for `mark` immediately.
/// 2. Take a square where the opposing mark would win next turn.
/// 3. Take the first empty square from the fixed strategic list
///    (center, then the corners).
/// 4. Pick uniformly at random among the remaining empty squares.
///
/// Rules 1 and 2 scan empty squares in row-major order and stop at the first
/// hit. That scan order is a reproducible tie-break, not optimal play, and
/// tests rely on it.
///
/// The random source is injected so callers can seed it; only rule 4 draws
/// from it. Returns `None` when the board is full.
pub fn choose_computer_move<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    rng: &mut R,
) -> Option<Square> {
    if let Some(square) = winning_square(board, mark) {
        return Some(square);
    }
    if let Some(square) = winning_square(board, mark.other()) {
        return Some(square);
    }
    if let Some(square) = Square::STRATEGIC
        .into_iter()
        .find(|&square| board.cell(square).is_empty())
    {
        return Some(square);
    }
    let open: Vec<Square> = board.empty_squares().collect();
    open.choose(rng).copied()
}

/// First empty square (row-major) that would complete a line for `mark`,
/// tried on a copy of the board.
fn winning_square(board: &Board, mark: Mark) -> Option<Square> {
    board.empty_squares().find(|&square| {
        let mut trial = *board;
        trial.place(square, mark).is_ok() && trial.is_winner(mark)
    })
}
