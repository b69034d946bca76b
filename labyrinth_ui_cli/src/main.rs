use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use labyrinth_core::{load_roster, player::PlayerId};
use log::error;
use roster_view::render_roster;

mod roster_view;

/// Prints the players of a labyrinth game as reported by the game server
#[derive(Parser, Debug)]
#[command(name = "labyrinth", version, about)]
struct Cli {
    /// JSON array of player records, `-` reads stdin
    #[arg(long, default_value = "-")]
    players: PathBuf,

    /// Id of the local player
    #[arg(long)]
    user: Option<PlayerId>,

    /// Skip records with missing fields instead of using defaults
    #[arg(long, default_value_t = false)]
    strict: bool,
}

fn read_players(path: &PathBuf) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        io::stdin().read_to_string(&mut json)?;
        Ok(json)
    } else {
        fs::read_to_string(path)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let json = match read_players(&cli.players) {
        Ok(json) => json,
        Err(e) => {
            error!("Cannot read {}: {}", cli.players.display(), e);
            return ExitCode::FAILURE;
        }
    };
    let mut roster = match load_roster(&json, cli.strict) {
        Ok(roster) => roster,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(user) = cli.user {
        if let Err(e) = roster.mark_user(user) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    println!("{}", render_roster(&roster));
    ExitCode::SUCCESS
}
