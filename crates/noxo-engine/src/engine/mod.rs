//! Game flow logic built on the core board model.
//!
//! - [`Game`] - One game of noughts and crosses as a turn state machine
//! - [`choose_computer_move`] - The computer opponent's move heuristic
//!
//! # Game Flow
//!
//! 1. A fresh [`Game`] starts on an empty board with the player to move
//! 2. The driver applies the player's square with [`Game::play_player_move`]
//! 3. Unless the game ended, [`Game::play_computer_move`] picks and applies
//!    the computer's reply
//! 4. Repeat until the state is [`GameState::Over`]
//!
//! The engine never touches the console; prompting, rendering, and the menu
//! shell live in the `noxo` binary.

pub use self::{game::*, heuristic::*};

mod game;
mod heuristic;
