use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::errors::ValidationError;

use super::enums::{MapStatus, MatchStatus};
use super::models::{
    Match, MatchMap, MatchPlayer, Player, PlayerStats, Subscription, Team, TeamId, TeamStats,
    Tournament,
};
use super::requests::{
    CreateMatchRequest, CreatePlayerRequest, CreateTeamRequest, CreateTournamentRequest,
};
use super::views::{
    MatchDetail, MatchMapDetail, MatchPlayerDetail, PlayerStatsDetail, SubscriptionDetail,
    TeamStatsDetail,
};

const WINRATE_TOLERANCE: f64 = 1e-6;

pub type ValidationResult = Result<(), ValidationError>;

pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

fn non_empty(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i64) -> ValidationResult {
    if value < 0 {
        return Err(ValidationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn non_negative_real(field: &'static str, value: f64) -> ValidationResult {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn date_range(start: DateTime<Utc>, end: DateTime<Utc>) -> ValidationResult {
    if start > end {
        return Err(ValidationError::DateRange {
            start: start.to_rfc3339(),
            end: end.to_rfc3339(),
        });
    }
    Ok(())
}

fn distinct_teams(team1: Option<TeamId>, team2: Option<TeamId>) -> ValidationResult {
    match (team1, team2) {
        (Some(a), Some(b)) if a == b => Err(ValidationError::SameTeam { team: a }),
        _ => Ok(()),
    }
}

fn rate_matches(field: &'static str, actual: f64, expected: f64) -> ValidationResult {
    if !actual.is_finite() || (actual - expected).abs() > WINRATE_TOLERANCE {
        return Err(ValidationError::WinrateMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn results_within_played(wins: i32, losses: i32, played: i32) -> ValidationResult {
    non_negative("matches_played", played.into())?;
    non_negative("wins", wins.into())?;
    non_negative("losses", losses.into())?;
    if i64::from(wins) + i64::from(losses) > i64::from(played) {
        return Err(ValidationError::ResultCountExceedsPlayed {
            wins,
            losses,
            played,
        });
    }
    Ok(())
}

/// An attached copy must carry the id its base row references.
fn nested_matches(
    nested: &'static str,
    field: &'static str,
    reference: Option<i64>,
    attached: Option<i64>,
) -> ValidationResult {
    match (reference, attached) {
        (Some(expected), Some(actual)) if expected != actual => {
            Err(ValidationError::NestedMismatch {
                nested,
                expected,
                actual,
            })
        }
        (None, Some(_)) => Err(ValidationError::NestedWithoutReference { nested, field }),
        _ => Ok(()),
    }
}

impl Validate for Team {
    fn validate(&self) -> ValidationResult {
        non_empty("name", &self.name)?;
        non_negative("ranking", self.ranking.into())
    }
}

impl Validate for Player {
    fn validate(&self) -> ValidationResult {
        non_empty("username", &self.username)?;
        non_negative_real("rating", self.rating)
    }
}

impl Validate for Tournament {
    fn validate(&self) -> ValidationResult {
        non_empty("name", &self.name)?;
        non_negative("prize_pool", self.prize_pool)?;
        date_range(self.start_date, self.end_date)
    }
}

impl Validate for Match {
    fn validate(&self) -> ValidationResult {
        non_negative("team1_score", self.team1_score.into())?;
        non_negative("team2_score", self.team2_score.into())?;
        distinct_teams(self.team1_id, self.team2_id)?;

        if let Some(winner) = self.winner_team_id {
            if !self.involves(winner) {
                return Err(ValidationError::WinnerNotParticipant { winner });
            }
        }

        if self.status != MatchStatus::Finished {
            if self.end_time.is_some() {
                return Err(ValidationError::FinishOnlyField { field: "end_time" });
            }
            if self.duration_seconds.is_some() {
                return Err(ValidationError::FinishOnlyField {
                    field: "duration_seconds",
                });
            }
        }

        if let Some(end) = self.end_time {
            if end < self.start_time {
                return Err(ValidationError::EndBeforeStart {
                    start: self.start_time.to_rfc3339(),
                    end: end.to_rfc3339(),
                });
            }
        }

        if let Some(duration) = self.duration_seconds {
            non_negative("duration_seconds", duration.into())?;
        }
        Ok(())
    }
}

impl Validate for MatchMap {
    fn validate(&self) -> ValidationResult {
        non_empty("map_name", &self.map_name)?;
        if self.map_order < 1 {
            return Err(ValidationError::MapOrderOutOfRange {
                order: self.map_order,
            });
        }
        non_negative("team1_score", self.team1_score.into())?;
        non_negative("team2_score", self.team2_score.into())?;

        if let Some(duration) = self.duration_seconds {
            if self.status != MapStatus::Finished {
                return Err(ValidationError::FinishOnlyField {
                    field: "duration_seconds",
                });
            }
            non_negative("duration_seconds", duration.into())?;
        }
        Ok(())
    }
}

impl Validate for MatchPlayer {
    fn validate(&self) -> ValidationResult {
        non_negative("kills", self.kills.into())?;
        non_negative("deaths", self.deaths.into())?;
        non_negative("assists", self.assists.into())?;
        non_negative("headshots", self.headshots.into())?;
        non_negative("mvps", self.mvps.into())?;
        non_negative_real("adr", self.adr)?;
        non_negative_real("rating", self.rating)?;

        if self.headshots > self.kills {
            return Err(ValidationError::HeadshotsExceedKills {
                headshots: self.headshots,
                kills: self.kills,
            });
        }
        Ok(())
    }
}

impl Validate for Subscription {
    fn validate(&self) -> ValidationResult {
        non_empty("user_id", &self.user_id)?;
        non_empty("chat_id", &self.chat_id)?;
        if self.target().is_none() {
            return Err(ValidationError::MultipleTargets);
        }
        Ok(())
    }
}

impl Validate for PlayerStats {
    fn validate(&self) -> ValidationResult {
        results_within_played(self.wins, self.losses, self.matches_played)?;
        non_negative("total_kills", self.total_kills.into())?;
        non_negative("total_deaths", self.total_deaths.into())?;
        non_negative("total_assists", self.total_assists.into())?;
        non_negative("total_headshots", self.total_headshots.into())?;
        non_negative("total_mvps", self.total_mvps.into())?;
        non_negative_real("avg_kd", self.avg_kd)?;
        non_negative_real("avg_adr", self.avg_adr)?;
        non_negative_real("avg_rating", self.avg_rating)?;
        rate_matches("winrate", self.winrate, self.expected_winrate())
    }
}

impl Validate for TeamStats {
    fn validate(&self) -> ValidationResult {
        results_within_played(self.wins, self.losses, self.matches_played)?;
        non_negative("maps_won", self.maps_won.into())?;
        non_negative("maps_lost", self.maps_lost.into())?;
        rate_matches("winrate", self.winrate, self.expected_winrate())?;
        rate_matches(
            "map_winrate",
            self.map_winrate,
            self.expected_map_winrate(),
        )
    }
}

impl Validate for MatchDetail {
    /// Checks the match, each map, and how the maps relate to the match.
    fn validate(&self) -> ValidationResult {
        self.base.validate()?;
        let ids = |team: &Option<Team>| team.as_ref().map(|t| t.id);
        nested_matches("team1", "team1_id", self.base.team1_id, ids(&self.team1))?;
        nested_matches("team2", "team2_id", self.base.team2_id, ids(&self.team2))?;
        nested_matches(
            "winner_team",
            "winner_team_id",
            self.base.winner_team_id,
            ids(&self.winner_team),
        )?;
        nested_matches(
            "tournament",
            "tournament_id",
            self.base.tournament_id,
            self.tournament.as_ref().map(|t| t.id),
        )?;

        let mut seen_orders = HashSet::new();
        for map in &self.maps {
            map.validate()?;
            if map.match_id != self.base.id {
                return Err(ValidationError::ForeignMap {
                    map_id: map.id,
                    map_match_id: map.match_id,
                    match_id: self.base.id,
                });
            }
            if !seen_orders.insert(map.map_order) {
                return Err(ValidationError::DuplicateMapOrder {
                    order: map.map_order,
                });
            }
            if let Some(winner) = map.winner_team_id {
                if !self.base.involves(winner) {
                    return Err(ValidationError::WinnerNotParticipant { winner });
                }
            }
        }
        Ok(())
    }
}

impl Validate for MatchMapDetail {
    fn validate(&self) -> ValidationResult {
        self.base.validate()?;
        nested_matches(
            "match",
            "match_id",
            Some(self.base.match_id),
            self.parent.as_ref().map(|m| m.id),
        )?;
        nested_matches(
            "winner_team",
            "winner_team_id",
            self.base.winner_team_id,
            self.winner_team.as_ref().map(|t| t.id),
        )?;
        if let (Some(parent), Some(winner)) = (&self.parent, self.base.winner_team_id) {
            if !parent.involves(winner) {
                return Err(ValidationError::WinnerNotParticipant { winner });
            }
        }
        Ok(())
    }
}

impl Validate for MatchPlayerDetail {
    fn validate(&self) -> ValidationResult {
        self.base.validate()?;
        nested_matches(
            "match",
            "match_id",
            Some(self.base.match_id),
            self.parent.as_ref().map(|m| m.id),
        )?;
        nested_matches(
            "map",
            "map_id",
            self.base.map_id,
            self.map.as_ref().map(|m| m.id),
        )?;
        nested_matches(
            "player",
            "player_id",
            Some(self.base.player_id),
            self.player.as_ref().map(|p| p.id),
        )?;
        nested_matches(
            "team",
            "team_id",
            Some(self.base.team_id),
            self.team.as_ref().map(|t| t.id),
        )?;
        if let Some(map) = &self.map {
            if map.match_id != self.base.match_id {
                return Err(ValidationError::ForeignMap {
                    map_id: map.id,
                    map_match_id: map.match_id,
                    match_id: self.base.match_id,
                });
            }
        }
        Ok(())
    }
}

impl Validate for SubscriptionDetail {
    fn validate(&self) -> ValidationResult {
        self.base.validate()?;
        nested_matches(
            "team",
            "team_id",
            self.base.team_id,
            self.team.as_ref().map(|t| t.id),
        )?;
        nested_matches(
            "tournament",
            "tournament_id",
            self.base.tournament_id,
            self.tournament.as_ref().map(|t| t.id),
        )?;
        nested_matches(
            "player",
            "player_id",
            self.base.player_id,
            self.player.as_ref().map(|p| p.id),
        )
    }
}

impl Validate for PlayerStatsDetail {
    fn validate(&self) -> ValidationResult {
        self.base.validate()?;
        nested_matches(
            "player",
            "player_id",
            Some(self.base.player_id),
            self.player.as_ref().map(|p| p.id),
        )?;
        nested_matches(
            "team",
            "team_id",
            self.base.team_id,
            self.team.as_ref().map(|t| t.id),
        )
    }
}

impl Validate for TeamStatsDetail {
    fn validate(&self) -> ValidationResult {
        self.base.validate()?;
        nested_matches(
            "team",
            "team_id",
            Some(self.base.team_id),
            self.team.as_ref().map(|t| t.id),
        )
    }
}

impl Validate for CreateTeamRequest {
    fn validate(&self) -> ValidationResult {
        non_empty("external_id", &self.external_id)?;
        non_empty("name", &self.name)?;
        non_negative("ranking", self.ranking.into())
    }
}

impl Validate for CreatePlayerRequest {
    fn validate(&self) -> ValidationResult {
        non_empty("external_id", &self.external_id)?;
        non_empty("username", &self.username)?;
        non_negative_real("rating", self.rating)
    }
}

impl Validate for CreateTournamentRequest {
    fn validate(&self) -> ValidationResult {
        non_empty("external_id", &self.external_id)?;
        non_empty("name", &self.name)?;
        non_negative("prize_pool", self.prize_pool)?;
        date_range(self.start_date, self.end_date)
    }
}

impl Validate for CreateMatchRequest {
    fn validate(&self) -> ValidationResult {
        non_empty("external_match_id", &self.external_match_id)?;
        distinct_teams(self.team1_id, self.team2_id)
    }
}
