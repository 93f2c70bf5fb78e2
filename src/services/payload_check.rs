use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::cli::PayloadKind;
use crate::domain::{
    CreateMatchRequest, CreatePlayerRequest, CreateTeamRequest, CreateTournamentRequest, Match,
    MatchDetail, MatchMap, MatchMapDetail, MatchPlayer, MatchPlayerDetail, Player, PlayerStats,
    PlayerStatsDetail, Subscription, SubscriptionDetail, Team, TeamStats, TeamStatsDetail,
    Tournament, Validate,
};
use crate::errors::{parse_context, read_context};

/// Deserializes payloads into their typed shape and validates them.
pub struct PayloadCheckService {
    kind: PayloadKind,
}

impl PayloadCheckService {
    pub fn new(kind: PayloadKind) -> Self {
        Self { kind }
    }

    pub fn check_file(&self, path: &Path) -> Result<usize> {
        let display = path.display().to_string();
        let json = fs::read_to_string(path).with_context(|| read_context(&display))?;
        let count = self.check_str(&json)?;
        info!("{}: {} {} record(s) valid", display, count, self.kind.label());
        Ok(count)
    }

    /// Returns the number of records checked; a top-level array holds many.
    pub fn check_str(&self, json: &str) -> Result<usize> {
        let value: Value =
            serde_json::from_str(json).with_context(|| parse_context("JSON payload"))?;

        match value {
            Value::Array(items) => {
                let count = items.len();
                for (idx, item) in items.into_iter().enumerate() {
                    self.check_value(item)
                        .with_context(|| format!("Record {} is invalid", idx + 1))?;
                }
                Ok(count)
            }
            single => {
                self.check_value(single)?;
                Ok(1)
            }
        }
    }

    fn check_value(&self, value: Value) -> Result<()> {
        match self.kind {
            PayloadKind::Team => check::<Team>(value, self.kind),
            PayloadKind::Player => check::<Player>(value, self.kind),
            PayloadKind::Tournament => check::<Tournament>(value, self.kind),
            PayloadKind::Match => check::<Match>(value, self.kind),
            PayloadKind::MatchDetail => check::<MatchDetail>(value, self.kind),
            PayloadKind::MatchMap => check::<MatchMap>(value, self.kind),
            PayloadKind::MatchMapDetail => check::<MatchMapDetail>(value, self.kind),
            PayloadKind::MatchPlayer => check::<MatchPlayer>(value, self.kind),
            PayloadKind::MatchPlayerDetail => check::<MatchPlayerDetail>(value, self.kind),
            PayloadKind::Subscription => check::<Subscription>(value, self.kind),
            PayloadKind::SubscriptionDetail => check::<SubscriptionDetail>(value, self.kind),
            PayloadKind::PlayerStats => check::<PlayerStats>(value, self.kind),
            PayloadKind::PlayerStatsDetail => check::<PlayerStatsDetail>(value, self.kind),
            PayloadKind::TeamStats => check::<TeamStats>(value, self.kind),
            PayloadKind::TeamStatsDetail => check::<TeamStatsDetail>(value, self.kind),
            PayloadKind::CreateTeam => check::<CreateTeamRequest>(value, self.kind),
            PayloadKind::CreatePlayer => check::<CreatePlayerRequest>(value, self.kind),
            PayloadKind::CreateTournament => check::<CreateTournamentRequest>(value, self.kind),
            PayloadKind::CreateMatch => check::<CreateMatchRequest>(value, self.kind),
        }
    }
}

fn check<T>(value: Value, kind: PayloadKind) -> Result<()>
where
    T: DeserializeOwned + Validate,
{
    let record: T = serde_json::from_value(value).with_context(|| parse_context(kind.label()))?;
    if let Err(e) = record.validate() {
        warn!("Rejected {}: {}", kind.label(), e);
        return Err(e.into());
    }
    Ok(())
}
