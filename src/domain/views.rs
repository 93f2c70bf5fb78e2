//! Read-time views: a canonical entity plus denormalized copies of the rows
//! it references. Views are attached when reading and never persisted.

use serde::{Deserialize, Serialize};

use super::models::{
    Match, MatchMap, MatchPlayer, Player, PlayerStats, Subscription, Team, TeamStats, Tournament,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub base: Match,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team1: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team2: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<Tournament>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_team: Option<Team>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maps: Vec<MatchMap>,
}

impl MatchDetail {
    pub fn new(base: Match) -> Self {
        Self {
            base,
            team1: None,
            team2: None,
            tournament: None,
            winner_team: None,
            maps: Vec::new(),
        }
    }

    /// Attaches the team copies, picking the winner among them.
    pub fn with_teams(mut self, team1: Option<Team>, team2: Option<Team>) -> Self {
        self.winner_team = self.base.winner_team_id.and_then(|winner| {
            [&team1, &team2]
                .into_iter()
                .flatten()
                .find(|team| team.id == winner)
                .cloned()
        });
        self.team1 = team1;
        self.team2 = team2;
        self
    }

    pub fn with_tournament(mut self, tournament: Tournament) -> Self {
        self.tournament = Some(tournament);
        self
    }

    /// Attaches maps in play order.
    pub fn with_maps(mut self, mut maps: Vec<MatchMap>) -> Self {
        maps.sort_by_key(|map| map.map_order);
        self.maps = maps;
        self
    }

    pub fn into_base(self) -> Match {
        self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchMapDetail {
    #[serde(flatten)]
    pub base: MatchMap,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner_team: Option<Team>,
}

impl MatchMapDetail {
    pub fn new(base: MatchMap) -> Self {
        Self {
            base,
            parent: None,
            winner_team: None,
        }
    }

    pub fn with_match(mut self, parent: Match) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_winner_team(mut self, team: Team) -> Self {
        self.winner_team = Some(team);
        self
    }

    pub fn into_base(self) -> MatchMap {
        self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchPlayerDetail {
    #[serde(flatten)]
    pub base: MatchPlayer,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Match>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<MatchMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl MatchPlayerDetail {
    pub fn new(base: MatchPlayer) -> Self {
        Self {
            base,
            parent: None,
            map: None,
            player: None,
            team: None,
        }
    }

    pub fn with_match(mut self, parent: Match) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_map(mut self, map: MatchMap) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn into_base(self) -> MatchPlayer {
        self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionDetail {
    #[serde(flatten)]
    pub base: Subscription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<Tournament>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
}

impl SubscriptionDetail {
    pub fn new(base: Subscription) -> Self {
        Self {
            base,
            team: None,
            tournament: None,
            player: None,
        }
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn with_tournament(mut self, tournament: Tournament) -> Self {
        self.tournament = Some(tournament);
        self
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn into_base(self) -> Subscription {
        self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsDetail {
    #[serde(flatten)]
    pub base: PlayerStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<Player>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl PlayerStatsDetail {
    pub fn new(base: PlayerStats) -> Self {
        Self {
            base,
            player: None,
            team: None,
        }
    }

    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn into_base(self) -> PlayerStats {
        self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatsDetail {
    #[serde(flatten)]
    pub base: TeamStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,
}

impl TeamStatsDetail {
    pub fn new(base: TeamStats) -> Self {
        Self { base, team: None }
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }

    pub fn into_base(self) -> TeamStats {
        self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::fixtures::{
        at, finished_match, match_map, player, stat_line, subscription, team, tournament,
    };
    use crate::domain::models::Outcome;
    use serde::de::DeserializeOwned;

    fn round_trip<T>(value: &T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let json = serde_json::to_string(value).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    fn detail() -> MatchDetail {
        let mut navi = team(10);
        navi.name = "Natus Vincere".to_string();
        let mut faze = team(20);
        faze.name = "FaZe Clan".to_string();

        MatchDetail::new(finished_match(3))
            .with_teams(Some(navi), Some(faze))
            .with_tournament(tournament(1))
            .with_maps(vec![match_map(6, 3, 2), match_map(5, 3, 1)])
    }

    #[test]
    fn test_winner_team_is_picked_from_attached_teams() {
        let detail = detail();
        assert_eq!(detail.winner_team.as_ref().map(|t| t.id), Some(10));
    }

    #[test]
    fn test_maps_are_sorted_by_order() {
        let orders: Vec<i32> = detail().maps.iter().map(|m| m.map_order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_detail_flattens_base_fields() {
        let json = serde_json::to_value(detail()).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["winner_team_id"], 10);
        assert_eq!(json["team2"]["name"], "FaZe Clan");
        assert_eq!(json["maps"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_bare_detail_serializes_like_base() {
        let bare = MatchDetail::new(finished_match(3));
        let detail_json = serde_json::to_value(&bare).unwrap();
        let base_json = serde_json::to_value(finished_match(3)).unwrap();
        assert_eq!(detail_json, base_json);
    }

    #[test]
    fn test_detail_round_trip() {
        let detail = detail();
        let json = serde_json::to_string(&detail).unwrap();
        let parsed: MatchDetail = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, detail);
        assert_eq!(parsed.into_base(), finished_match(3));
    }

    #[test]
    fn test_map_detail_nests_parent_under_match_key() {
        let detail = MatchMapDetail::new(match_map(5, 3, 1))
            .with_match(finished_match(3))
            .with_winner_team(team(10));

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["match_id"], 3);
        assert_eq!(json["match"]["id"], 3);
        assert_eq!(json["winner_team"]["id"], 10);

        assert_eq!(round_trip(&detail), detail);
        assert_eq!(detail.into_base(), match_map(5, 3, 1));
    }

    #[test]
    fn test_player_line_detail_round_trip() {
        let detail = MatchPlayerDetail::new(stat_line(3, Some(5)))
            .with_match(finished_match(3))
            .with_map(match_map(5, 3, 1))
            .with_player(player(7, Some(10)))
            .with_team(team(10));

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["player_id"], 7);
        assert_eq!(json["map"]["map_order"], 1);
        assert_eq!(json["player"]["username"], "s1mple");

        assert_eq!(round_trip(&detail), detail);
    }

    #[test]
    fn test_subscription_detail_omits_missing_copies() {
        let bare = SubscriptionDetail::new(subscription(2));
        let json = serde_json::to_value(&bare).unwrap();
        assert_eq!(json, serde_json::to_value(subscription(2)).unwrap());

        let detail = bare.with_team(team(10));
        assert_eq!(round_trip(&detail), detail);
        assert_eq!(detail.into_base(), subscription(2));
    }

    #[test]
    fn test_stats_details_round_trip_with_computed_averages() {
        let mut player_stats = PlayerStats::new(1, 7, Some(10), at(0));
        let mut line = stat_line(3, None);
        for i in 0..7 {
            line.adr = (f64::from(i) * 77.3 + 11.1) / 3.0;
            line.rating = (f64::from(i) * 1.07 + 0.13) / 7.0;
            player_stats.record(&line, Outcome::Win, at(i), at(8));
        }
        let player_detail = PlayerStatsDetail::new(player_stats)
            .with_player(player(7, Some(10)))
            .with_team(team(10));
        assert_eq!(round_trip(&player_detail), player_detail);

        let mut team_stats = TeamStats::new(2, 10, at(0));
        team_stats.record(Outcome::Win, 2, 1, at(1), at(2));
        team_stats.record(Outcome::Loss, 1, 2, at(3), at(4));
        team_stats.record(Outcome::Win, 2, 0, at(5), at(6));
        let team_detail = TeamStatsDetail::new(team_stats.clone()).with_team(team(10));
        assert_eq!(round_trip(&team_detail), team_detail);
        assert_eq!(team_detail.into_base(), team_stats);
    }
}
