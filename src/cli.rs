use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(author, version, about = "esports statistics data model tools")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Drop and recreate the relational schema
    Setup {
        /// Database file (defaults to $DATABASE_PATH or esports_stats.db)
        #[arg(short, long)]
        database: Option<String>,
    },
    /// Parse a JSON payload (object or array) and validate every record
    Check {
        /// Record shape the payload must match
        #[arg(short, long, value_enum)]
        kind: PayloadKind,
        /// Path to the JSON file
        path: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Team,
    Player,
    Tournament,
    Match,
    MatchDetail,
    MatchMap,
    MatchMapDetail,
    MatchPlayer,
    MatchPlayerDetail,
    Subscription,
    SubscriptionDetail,
    PlayerStats,
    PlayerStatsDetail,
    TeamStats,
    TeamStatsDetail,
    CreateTeam,
    CreatePlayer,
    CreateTournament,
    CreateMatch,
}

impl PayloadKind {
    pub fn label(&self) -> &'static str {
        match self {
            PayloadKind::Team => "team",
            PayloadKind::Player => "player",
            PayloadKind::Tournament => "tournament",
            PayloadKind::Match => "match",
            PayloadKind::MatchDetail => "match detail",
            PayloadKind::MatchMap => "match map",
            PayloadKind::MatchMapDetail => "match map detail",
            PayloadKind::MatchPlayer => "match player",
            PayloadKind::MatchPlayerDetail => "match player detail",
            PayloadKind::Subscription => "subscription",
            PayloadKind::SubscriptionDetail => "subscription detail",
            PayloadKind::PlayerStats => "player stats",
            PayloadKind::PlayerStatsDetail => "player stats detail",
            PayloadKind::TeamStats => "team stats",
            PayloadKind::TeamStatsDetail => "team stats detail",
            PayloadKind::CreateTeam => "create team request",
            PayloadKind::CreatePlayer => "create player request",
            PayloadKind::CreateTournament => "create tournament request",
            PayloadKind::CreateMatch => "create match request",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let cli = Cli::parse_from(["esports_stats", "check", "--kind", "create-match", "payload.json"]);
        assert_eq!(
            cli.command,
            Command::Check {
                kind: PayloadKind::CreateMatch,
                path: PathBuf::from("payload.json"),
            }
        );
    }

    #[test]
    fn test_parse_setup_command() {
        let cli = Cli::parse_from(["esports_stats", "setup", "-d", "stats.db"]);
        assert_eq!(
            cli.command,
            Command::Setup {
                database: Some("stats.db".to_string())
            }
        );
    }

    #[test]
    fn test_parse_detail_kind() {
        let cli = Cli::parse_from(["esports_stats", "check", "-k", "player-stats-detail", "s.json"]);
        assert_eq!(
            cli.command,
            Command::Check {
                kind: PayloadKind::PlayerStatsDetail,
                path: PathBuf::from("s.json"),
            }
        );
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = Cli::try_parse_from(["esports_stats", "check", "--kind", "bracket", "x.json"]);
        assert!(result.is_err());
    }
}
