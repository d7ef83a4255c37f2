use noxo_engine::{Game, GameState, Outcome, PlayError, Square};

use crate::ui;

/// Plays one interactive game and returns its score.
pub(crate) fn run() -> anyhow::Result<i64> {
    let mut game = Game::new();
    let mut rng = rand::rng();
    ui::draw_board(game.board());

    loop {
        let state = player_turn(&mut game)?;
        println!("You played:");
        ui::draw_board(game.board());
        if let GameState::Over(outcome) = state {
            return Ok(announce(outcome));
        }

        let (square, state) = game.play_computer_move(&mut rng)?;
        println!("Computer plays square {square}:");
        ui::draw_board(game.board());
        if let GameState::Over(outcome) = state {
            return Ok(announce(outcome));
        }
    }
}

/// Prompts until a move applies. Bad input is explained and re-prompted,
/// never fatal.
fn player_turn(game: &mut Game) -> anyhow::Result<GameState> {
    loop {
        let input = ui::prompt("Choose your square (1-9): ")?;
        let Ok(number) = input.parse::<u8>() else {
            println!("Invalid input. Please enter a number between 1 and 9.");
            continue;
        };
        let Some(square) = Square::from_number(number) else {
            println!("Invalid choice. Please enter a number between 1 and 9.");
            continue;
        };
        match game.play_player_move(square) {
            Ok(state) => return Ok(state),
            Err(PlayError::SquareOccupied(_)) => {
                println!("That square is already taken. Please choose another.");
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn announce(outcome: Outcome) -> i64 {
    match outcome {
        Outcome::PlayerWin => println!("You win!"),
        Outcome::ComputerWin => println!("The computer wins!"),
        Outcome::Draw => println!("It's a draw."),
    }
    outcome.score()
}
