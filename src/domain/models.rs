use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{MapStatus, MatchStatus, NotificationType, Platform, TournamentStatus};

pub type TeamId = i64;
pub type PlayerId = i64;
pub type TournamentId = i64;
pub type MatchId = i64;
pub type MapId = i64;
pub type SubscriptionId = i64;
pub type StatsId = i64;

/// A competing organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub external_id: String,
    pub name: String,
    pub tag: String,
    pub country_code: String,
    pub logo_url: String,
    /// 0 is a real rank, not "unranked".
    pub ranking: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An individual competitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Absent for free agents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub external_id: String,
    pub username: String,
    pub real_name: String,
    pub country_code: String,
    pub rank_tier: i32,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    pub fn is_free_agent(&self) -> bool {
        self.team_id.is_none()
    }
}

/// A competitive event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub external_id: String,
    pub name: String,
    pub tier: String,
    pub prize_pool: i64,
    pub currency: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
}

/// Result of a finished match from one team's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// A game played between two teams
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
    pub external_match_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2_id: Option<TeamId>,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_team_id: Option<TeamId>,
    pub team1_score: i32,
    pub team2_score: i32,
    pub status: MatchStatus,
    pub stage: String,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Exactly one side has a team assigned.
    pub fn is_bye(&self) -> bool {
        self.team1_id.is_some() != self.team2_id.is_some()
    }

    pub fn involves(&self, team_id: TeamId) -> bool {
        self.team1_id == Some(team_id) || self.team2_id == Some(team_id)
    }

    pub fn outcome_for(&self, team_id: TeamId) -> Option<Outcome> {
        if self.status != MatchStatus::Finished || !self.involves(team_id) {
            return None;
        }

        match self.winner_team_id {
            Some(winner) if winner == team_id => Some(Outcome::Win),
            Some(_) => Some(Outcome::Loss),
            None => Some(Outcome::Draw),
        }
    }
}

/// One map within a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMap {
    pub id: MapId,
    pub match_id: MatchId,
    pub map_name: String,
    pub map_order: i32,
    pub team1_score: i32,
    pub team2_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i32>,
    pub status: MapStatus,
    pub created_at: DateTime<Utc>,
}

/// One player's stat line for a match, or for a single map of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayer {
    pub id: i64,
    pub match_id: MatchId,
    /// Absent when the row holds match-aggregate stats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_id: Option<MapId>,
    pub player_id: PlayerId,
    pub team_id: TeamId,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    pub headshots: i32,
    pub mvps: i32,
    pub score: i32,
    pub adr: f64,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

impl MatchPlayer {
    pub fn is_match_aggregate(&self) -> bool {
        self.map_id.is_none()
    }
}

/// What a subscription listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionTarget {
    Team(TeamId),
    Tournament(TournamentId),
    Player(PlayerId),
    /// No target set: every event of the notification type.
    Everything,
}

/// A user's opt-in notification registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub user_id: String,
    pub platform: Platform,
    pub chat_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament_id: Option<TournamentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    pub notification_type: NotificationType,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// `None` when more than one target id is set.
    pub fn target(&self) -> Option<SubscriptionTarget> {
        match (self.team_id, self.tournament_id, self.player_id) {
            (None, None, None) => Some(SubscriptionTarget::Everything),
            (Some(id), None, None) => Some(SubscriptionTarget::Team(id)),
            (None, Some(id), None) => Some(SubscriptionTarget::Tournament(id)),
            (None, None, Some(id)) => Some(SubscriptionTarget::Player(id)),
            _ => None,
        }
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

/// Rolling aggregate for a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub id: StatsId,
    pub player_id: PlayerId,
    /// Team at time of computation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    pub matches_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub total_kills: i32,
    pub total_deaths: i32,
    pub total_assists: i32,
    pub total_headshots: i32,
    pub total_mvps: i32,
    pub avg_kd: f64,
    pub avg_adr: f64,
    pub avg_rating: f64,
    pub winrate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_match_time: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

/// Rolling aggregate for a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    pub id: StatsId,
    pub team_id: TeamId,
    pub matches_played: i32,
    pub wins: i32,
    pub losses: i32,
    pub winrate: f64,
    pub maps_won: i32,
    pub maps_lost: i32,
    pub map_winrate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_match_time: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    pub fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 12, hour, 0, 0).unwrap()
    }

    pub fn team(id: TeamId) -> Team {
        Team {
            id,
            external_id: format!("ext-team-{id}"),
            name: "Natus Vincere".to_string(),
            tag: "NAVI".to_string(),
            country_code: "UA".to_string(),
            logo_url: "https://img.example/navi.png".to_string(),
            ranking: 0,
            created_at: at(8),
            updated_at: at(9),
        }
    }

    pub fn player(id: PlayerId, team_id: Option<TeamId>) -> Player {
        Player {
            id,
            team_id,
            external_id: format!("ext-player-{id}"),
            username: "s1mple".to_string(),
            real_name: "Oleksandr Kostyliev".to_string(),
            country_code: "UA".to_string(),
            rank_tier: 1,
            rating: 1.31,
            created_at: at(8),
            updated_at: at(8),
        }
    }

    pub fn tournament(id: TournamentId) -> Tournament {
        Tournament {
            id,
            external_id: format!("ext-tournament-{id}"),
            name: "IEM Katowice".to_string(),
            tier: "S".to_string(),
            prize_pool: 1_000_000,
            currency: "USD".to_string(),
            start_date: at(6),
            end_date: at(22),
            location: "Katowice".to_string(),
            status: TournamentStatus::Active,
            created_at: at(5),
        }
    }

    pub fn finished_match(id: MatchId) -> Match {
        Match {
            id,
            tournament_id: Some(1),
            external_match_id: format!("ext-match-{id}"),
            team1_id: Some(10),
            team2_id: Some(20),
            start_time: at(12),
            end_time: Some(at(14)),
            duration_seconds: Some(7200),
            format: "bo3".to_string(),
            winner_team_id: Some(10),
            team1_score: 16,
            team2_score: 9,
            status: MatchStatus::Finished,
            stage: "Grand Final".to_string(),
            created_at: at(10),
        }
    }

    pub fn match_map(id: MapId, match_id: MatchId, order: i32) -> MatchMap {
        MatchMap {
            id,
            match_id,
            map_name: "de_inferno".to_string(),
            map_order: order,
            team1_score: 13,
            team2_score: 7,
            winner_team_id: Some(10),
            duration_seconds: Some(2400),
            status: MapStatus::Finished,
            created_at: at(12),
        }
    }

    pub fn stat_line(match_id: MatchId, map_id: Option<MapId>) -> MatchPlayer {
        MatchPlayer {
            id: 1,
            match_id,
            map_id,
            player_id: 7,
            team_id: 10,
            kills: 24,
            deaths: 16,
            assists: 5,
            headshots: 12,
            mvps: 4,
            score: 58,
            adr: 92.5,
            rating: 1.25,
            created_at: at(14),
        }
    }

    pub fn subscription(id: SubscriptionId) -> Subscription {
        Subscription {
            id,
            user_id: "user-42".to_string(),
            platform: Platform::Telegram,
            chat_id: "-100123".to_string(),
            team_id: Some(10),
            tournament_id: None,
            player_id: None,
            notification_type: NotificationType::MatchStart,
            is_active: true,
            created_at: at(7),
        }
    }
}
