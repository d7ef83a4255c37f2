use rand::Rng;

use crate::{
    PlayError,
    core::{Board, Mark, Square},
};

use super::heuristic::choose_computer_move;

/// How a finished game ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Draw,
}

impl Outcome {
    /// The score a game contributes to the session total.
    #[must_use]
    pub fn score(self) -> i64 {
        match self {
            Outcome::PlayerWin => 1,
            Outcome::ComputerWin => -1,
            Outcome::Draw => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    PlayerTurn,
    ComputerTurn,
    Over(Outcome),
}

/// One game of noughts and crosses against the computer.
///
/// `Game` is a turn state machine over a fresh [`Board`]. The player always
/// moves first with `X`. After every applied move the game checks for a win
/// before checking for a draw, since a full board can still hold a winning
/// line.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub const PLAYER_MARK: Mark = Mark::X;
    pub const COMPUTER_MARK: Mark = Mark::O;

    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::PlayerTurn,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            GameState::Over(outcome) => Some(outcome),
            GameState::PlayerTurn | GameState::ComputerTurn => None,
        }
    }

    /// Applies the player's move and advances the turn.
    ///
    /// Fails with the game and board unchanged when the square is taken or
    /// it is not the player's turn; the caller re-prompts on a taken square.
    pub fn play_player_move(&mut self, square: Square) -> Result<GameState, PlayError> {
        self.play(square, Self::PLAYER_MARK)
    }

    /// Lets the heuristic pick the computer's square and applies it.
    ///
    /// Only the heuristic's random fallback draws from `rng`. Returns the
    /// chosen square along with the resulting state.
    pub fn play_computer_move<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Square, GameState), PlayError> {
        if !self.state.is_computer_turn() {
            return Err(self.wrong_turn());
        }
        // A full board is caught as a draw right after the player's move,
        // so an open square always exists here.
        let square = choose_computer_move(&self.board, Self::COMPUTER_MARK, rng)
            .ok_or(PlayError::GameOver)?;
        let state = self.play(square, Self::COMPUTER_MARK)?;
        Ok((square, state))
    }

    fn play(&mut self, square: Square, mark: Mark) -> Result<GameState, PlayError> {
        let expected_turn = match mark {
            Mark::X => GameState::PlayerTurn,
            Mark::O => GameState::ComputerTurn,
        };
        if self.state != expected_turn {
            return Err(self.wrong_turn());
        }
        self.board
            .place(square, mark)
            .map_err(PlayError::SquareOccupied)?;
        self.state = if self.board.is_winner(mark) {
            GameState::Over(match mark {
                Mark::X => Outcome::PlayerWin,
                Mark::O => Outcome::ComputerWin,
            })
        } else if self.board.is_draw() {
            GameState::Over(Outcome::Draw)
        } else {
            match mark {
                Mark::X => GameState::ComputerTurn,
                Mark::O => GameState::PlayerTurn,
            }
        };
        Ok(self.state)
    }

    fn wrong_turn(&self) -> PlayError {
        match self.state {
            GameState::Over(_) => PlayError::GameOver,
            GameState::PlayerTurn | GameState::ComputerTurn => PlayError::OutOfTurn,
        }
    }
}
