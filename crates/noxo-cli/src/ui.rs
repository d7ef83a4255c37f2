//! Console rendering and line-based input helpers.

use std::io::{self, Write as _};

use anyhow::Context as _;
use noxo_engine::{Board, Mark, Square};

/// Prints `message` without a newline and reads one trimmed line of input.
pub(crate) fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    anyhow::ensure!(read != 0, "standard input closed");
    Ok(line.trim().to_string())
}

pub(crate) fn print_welcome() {
    println!("Welcome to Noughts and Crosses.");
    println!("This is the layout of the board:");
    draw_layout();
    println!("When prompted, enter the number of the square you want.");
}

/// Draws the current board, empty squares blank.
pub(crate) fn draw_board(board: &Board) {
    draw_grid(|square| board.cell(square).mark().map_or(' ', Mark::as_char));
}

/// Draws the square-numbering layout shown in the welcome banner.
pub(crate) fn draw_layout() {
    draw_grid(|square| char::from(b'0' + square.number()));
}

fn draw_grid(cell: impl Fn(Square) -> char) {
    println!(" -----------");
    for row in Square::ALL.chunks(3) {
        println!("| {} | {} | {} |", cell(row[0]), cell(row[1]), cell(row[2]));
        println!(" -----------");
    }
}
