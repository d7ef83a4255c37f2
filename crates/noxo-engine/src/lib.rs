pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("square is already taken")]
pub struct SquareOccupiedError;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlayError {
    #[display("square is already taken")]
    SquareOccupied(SquareOccupiedError),
    #[display("not this side's turn")]
    OutOfTurn,
    #[display("the game is already over")]
    GameOver,
}
