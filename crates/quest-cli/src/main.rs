//! Terminal frontend for the quest text adventure.

mod logger;
mod play;

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;
use quest_engine::{DoorPolicy, GameConfig};

#[derive(Parser)]
#[command(
    name = "quest",
    about = "Текстовая игра: собрать рюкзак и выйти на улицу",
    version
)]
struct Cli {
    /// Door-lock policy: per-visit (door relocks on every corridor visit) or persistent
    #[arg(long, default_value = "per-visit", value_parser = parse_door)]
    door: DoorPolicy,

    /// Log engine activity to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored banner and prompt
    #[arg(long)]
    no_color: bool,
}

fn parse_door(s: &str) -> Result<DoorPolicy, String> {
    DoorPolicy::parse(s).ok_or_else(|| format!("unknown door policy '{s}' (expected per-visit or persistent)"))
}

fn main() {
    let cli = Cli::parse();

    let color = !cli.no_color && io::stdout().is_terminal();
    if !color {
        colored::control::set_override(false);
    }

    let ansi = !cli.no_color && io::stderr().is_terminal();
    let result = logger::init(cli.verbose, ansi).and_then(|()| {
        let config = GameConfig::new().with_door(cli.door);
        let stdin = io::stdin();
        play::run(config, stdin.lock(), io::stdout().lock())
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
