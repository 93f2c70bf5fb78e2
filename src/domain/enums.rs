use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::errors::ParseEnumError;

/// Declares a closed set of string literals stored as TEXT.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($literal => Ok($name::$variant),)+
                    other => Err(ParseEnumError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value
                    .as_str()?
                    .parse()
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

string_enum! {
    /// Event a subscriber wants to be told about.
    NotificationType, "notification type" {
        MatchStart => "match_start",
        MatchEnd => "match_end",
        TeamUpdate => "team_update",
        PlayerUpdate => "player_update",
        TournamentStart => "tournament_start",
    }
}

string_enum! {
    MatchStatus, "match status" {
        Scheduled => "scheduled",
        Live => "live",
        Finished => "finished",
        Cancelled => "cancelled",
        Postponed => "postponed",
    }
}

string_enum! {
    TournamentStatus, "tournament status" {
        Upcoming => "upcoming",
        Active => "active",
        Finished => "finished",
    }
}

string_enum! {
    /// Messaging platform a notification is delivered through.
    Platform, "platform" {
        Telegram => "telegram",
        Discord => "discord",
    }
}

string_enum! {
    MapStatus, "map status" {
        Upcoming => "upcoming",
        Live => "live",
        Finished => "finished",
    }
}

/// Which kind of subscription target a notification type concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Match,
    Team,
    Player,
    Tournament,
}

impl NotificationType {
    pub fn target_kind(&self) -> TargetKind {
        match self {
            NotificationType::MatchStart | NotificationType::MatchEnd => TargetKind::Match,
            NotificationType::TeamUpdate => TargetKind::Team,
            NotificationType::PlayerUpdate => TargetKind::Player,
            NotificationType::TournamentStart => TargetKind::Tournament,
        }
    }
}

impl MatchStatus {
    /// No further state transitions are expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Cancelled)
    }
}
