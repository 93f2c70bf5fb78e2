use thiserror::Error;

/// Raised when a string is not one of the literals of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Invariant violations detected by `Validate` implementations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: String },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("start date {start} is after end date {end}")]
    DateRange { start: String, end: String },

    #[error("winner team {winner} is not one of the participating teams")]
    WinnerNotParticipant { winner: i64 },

    #[error("team {team} cannot play against itself")]
    SameTeam { team: i64 },

    #[error("{field} may only be set once the match is finished")]
    FinishOnlyField { field: &'static str },

    #[error("end time {end} is before start time {start}")]
    EndBeforeStart { start: String, end: String },

    #[error("subscription targets more than one entity")]
    MultipleTargets,

    #[error("wins ({wins}) + losses ({losses}) exceed {played} played")]
    ResultCountExceedsPlayed { wins: i32, losses: i32, played: i32 },

    #[error("{nested} copy has id {actual}, expected {expected}")]
    NestedMismatch {
        nested: &'static str,
        expected: i64,
        actual: i64,
    },

    #[error("{nested} copy is attached but {field} is not set")]
    NestedWithoutReference {
        nested: &'static str,
        field: &'static str,
    },

    #[error("{field} is {actual}, expected {expected}")]
    WinrateMismatch {
        field: &'static str,
        expected: f64,
        actual: f64,
    },

    #[error("map order {order} appears more than once")]
    DuplicateMapOrder { order: i32 },

    #[error("map order must start at 1 (got {order})")]
    MapOrderOutOfRange { order: i32 },

    #[error("map {map_id} belongs to match {map_match_id}, not {match_id}")]
    ForeignMap {
        map_id: i64,
        map_match_id: i64,
        match_id: i64,
    },

    #[error("headshots ({headshots}) exceed kills ({kills})")]
    HeadshotsExceedKills { headshots: i32, kills: i32 },
}

/// Add context to payload read errors
pub fn read_context(path: &str) -> String {
    format!("Failed to read payload from: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to database setup errors
pub fn setup_context(path: &str) -> String {
    format!("Failed to set up database at: {}", path)
}
