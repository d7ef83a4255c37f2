use std::path::{Path, PathBuf};

use clap::Parser;

use crate::{
    leaderboard::{self, Leaderboard},
    ui,
};

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Path to the leaderboard file
    #[clap(long, default_value = "leaderboard.txt")]
    leaderboard: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Play,
    SaveScore,
    ShowLeaderboard,
    Quit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Play),
            "2" => Some(MenuChoice::SaveScore),
            "3" => Some(MenuChoice::ShowLeaderboard),
            "q" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    ui::print_welcome();

    // The running total lives for this session only; quitting does not
    // autosave it.
    let mut total_score = 0_i64;
    loop {
        match prompt_menu_choice()? {
            MenuChoice::Play => {
                total_score += play::run()?;
                println!("Your current score is: {total_score}");
            }
            MenuChoice::SaveScore => save_score(&args.leaderboard, total_score)?,
            MenuChoice::ShowLeaderboard => show_leaderboard(&args.leaderboard)?,
            MenuChoice::Quit => {
                println!("Thank you for playing Noughts and Crosses. Goodbye!");
                return Ok(());
            }
        }
    }
}

fn prompt_menu_choice() -> anyhow::Result<MenuChoice> {
    loop {
        println!();
        println!("------------- Menu -------------");
        println!("1 - Play the game");
        println!("2 - Save your score to the leaderboard");
        println!("3 - Load and display the leaderboard");
        println!("q - End the program");
        let input = ui::prompt("Enter your choice: ")?;
        match MenuChoice::parse(&input.to_lowercase()) {
            Some(choice) => return Ok(choice),
            None => println!("Invalid choice. Please try again."),
        }
    }
}

fn save_score(path: &Path, score: i64) -> anyhow::Result<()> {
    let name = ui::prompt("Enter your name: ")?;
    leaderboard::record_score(path, &name, score)?;
    println!("Your score ({score}) has been saved under the name {name}.");
    Ok(())
}

fn show_leaderboard(path: &Path) -> anyhow::Result<()> {
    println!();
    println!("---------- Leaderboard ----------");
    // A missing file is reported as such; it is not the same thing as an
    // existing empty leaderboard.
    match Leaderboard::load(path)? {
        None => println!("No leaderboard file found. Save a score first."),
        Some(board) if board.is_empty() => println!("The leaderboard is empty."),
        Some(board) => {
            for (rank, (name, score)) in board.ranked().iter().enumerate() {
                println!("{}. {name}: {score}", rank + 1);
            }
        }
    }
    Ok(())
}
