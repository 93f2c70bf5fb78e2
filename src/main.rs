use anyhow::Result;

use esports_stats::cli::Command;
use esports_stats::{handle_check, handle_setup, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Setup { database } => handle_setup(database.clone()),
        Command::Check { kind, path } => handle_check(*kind, path),
    }
}
