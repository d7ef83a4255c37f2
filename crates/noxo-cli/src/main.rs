mod command;
mod leaderboard;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
