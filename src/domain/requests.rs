use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{MatchStatus, TournamentStatus};
use super::models::{Match, MatchId, Player, PlayerId, Team, TeamId, Tournament, TournamentId};

/// Payload for registering a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTeamRequest {
    pub external_id: String,
    pub name: String,
    pub tag: String,
    pub country_code: String,
    pub logo_url: String,
    pub ranking: i32,
}

/// Payload for registering a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePlayerRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub external_id: String,
    pub username: String,
    pub real_name: String,
    pub country_code: String,
    pub rank_tier: i32,
    pub rating: f64,
}

/// Payload for registering a tournament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTournamentRequest {
    pub external_id: String,
    pub name: String,
    pub tier: String,
    pub prize_pool: i64,
    pub currency: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub status: TournamentStatus,
}

/// Payload for scheduling a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMatchRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
    pub external_match_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_id: Option<TeamId>,
    pub start_time: DateTime<Utc>,
    pub format: String,
    pub stage: String,
}

impl CreateTeamRequest {
    pub fn into_entity(self, id: TeamId, now: DateTime<Utc>) -> Team {
        Team {
            id,
            external_id: self.external_id,
            name: self.name,
            tag: self.tag,
            country_code: self.country_code,
            logo_url: self.logo_url,
            ranking: self.ranking,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CreatePlayerRequest {
    pub fn into_entity(self, id: PlayerId, now: DateTime<Utc>) -> Player {
        Player {
            id,
            team_id: self.team_id,
            external_id: self.external_id,
            username: self.username,
            real_name: self.real_name,
            country_code: self.country_code,
            rank_tier: self.rank_tier,
            rating: self.rating,
            created_at: now,
            updated_at: now,
        }
    }
}

impl CreateTournamentRequest {
    pub fn into_entity(self, id: TournamentId, now: DateTime<Utc>) -> Tournament {
        Tournament {
            id,
            external_id: self.external_id,
            name: self.name,
            tier: self.tier,
            prize_pool: self.prize_pool,
            currency: self.currency,
            start_date: self.start_date,
            end_date: self.end_date,
            location: self.location,
            status: self.status,
            created_at: now,
        }
    }
}

impl CreateMatchRequest {
    /// New matches start scheduled, scoreless and without a winner.
    pub fn into_entity(self, id: MatchId, now: DateTime<Utc>) -> Match {
        Match {
            id,
            tournament_id: self.tournament_id,
            external_match_id: self.external_match_id,
            team1_id: self.team1_id,
            team2_id: self.team2_id,
            start_time: self.start_time,
            end_time: None,
            duration_seconds: None,
            format: self.format,
            winner_team_id: None,
            team1_score: 0,
            team2_score: 0,
            status: MatchStatus::Scheduled,
            stage: self.stage,
            created_at: now,
        }
    }
}
