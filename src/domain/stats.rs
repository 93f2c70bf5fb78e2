use chrono::{DateTime, Utc};

use super::models::{
    MatchPlayer, Outcome, PlayerId, PlayerStats, StatsId, TeamId, TeamStats,
};

/// Share of `wins` in `played`, defined as 0 when nothing was played.
pub fn winrate(wins: i64, played: i64) -> f64 {
    if played <= 0 {
        return 0.0;
    }
    wins as f64 / played as f64
}

/// Kills per death; a deathless record counts every kill.
pub fn kill_death_ratio(kills: i32, deaths: i32) -> f64 {
    if deaths <= 0 {
        return kills as f64;
    }
    kills as f64 / deaths as f64
}

fn running_average(previous: f64, count_before: i32, sample: f64) -> f64 {
    let count_before = count_before.max(0) as f64;
    (previous * count_before + sample) / (count_before + 1.0)
}

fn latest(current: Option<DateTime<Utc>>, candidate: DateTime<Utc>) -> Option<DateTime<Utc>> {
    Some(current.map_or(candidate, |existing| existing.max(candidate)))
}

fn count_result(wins: &mut i32, losses: &mut i32, outcome: Outcome) {
    match outcome {
        Outcome::Win => *wins = wins.saturating_add(1),
        Outcome::Loss => *losses = losses.saturating_add(1),
        Outcome::Draw => {}
    }
}

impl PlayerStats {
    pub fn new(id: StatsId, player_id: PlayerId, team_id: Option<TeamId>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            player_id,
            team_id,
            matches_played: 0,
            wins: 0,
            losses: 0,
            total_kills: 0,
            total_deaths: 0,
            total_assists: 0,
            total_headshots: 0,
            total_mvps: 0,
            avg_kd: 0.0,
            avg_adr: 0.0,
            avg_rating: 0.0,
            winrate: 0.0,
            last_match_time: None,
            updated_at: now,
        }
    }

    /// Folds one match-aggregate stat line of this player into the totals.
    /// Per-map lines and other players' lines are skipped and yield `false`.
    pub fn record(
        &mut self,
        line: &MatchPlayer,
        outcome: Outcome,
        played_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> bool {
        if !line.is_match_aggregate() || line.player_id != self.player_id {
            return false;
        }

        self.avg_adr = running_average(self.avg_adr, self.matches_played, line.adr);
        self.avg_rating = running_average(self.avg_rating, self.matches_played, line.rating);

        self.matches_played = self.matches_played.saturating_add(1);
        count_result(&mut self.wins, &mut self.losses, outcome);

        self.total_kills = self.total_kills.saturating_add(line.kills);
        self.total_deaths = self.total_deaths.saturating_add(line.deaths);
        self.total_assists = self.total_assists.saturating_add(line.assists);
        self.total_headshots = self.total_headshots.saturating_add(line.headshots);
        self.total_mvps = self.total_mvps.saturating_add(line.mvps);

        self.avg_kd = kill_death_ratio(self.total_kills, self.total_deaths);
        self.winrate = self.expected_winrate();
        self.last_match_time = latest(self.last_match_time, played_at);
        self.updated_at = now;
        true
    }

    pub fn expected_winrate(&self) -> f64 {
        winrate(self.wins.into(), self.matches_played.into())
    }

    pub fn headshot_percentage(&self) -> f64 {
        if self.total_kills <= 0 {
            return 0.0;
        }
        self.total_headshots as f64 / self.total_kills as f64
    }
}

impl TeamStats {
    pub fn new(id: StatsId, team_id: TeamId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            team_id,
            matches_played: 0,
            wins: 0,
            losses: 0,
            winrate: 0.0,
            maps_won: 0,
            maps_lost: 0,
            map_winrate: 0.0,
            last_match_time: None,
            updated_at: now,
        }
    }

    pub fn record(
        &mut self,
        outcome: Outcome,
        maps_won: i32,
        maps_lost: i32,
        played_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) {
        self.matches_played = self.matches_played.saturating_add(1);
        count_result(&mut self.wins, &mut self.losses, outcome);
        self.maps_won = self.maps_won.saturating_add(maps_won.max(0));
        self.maps_lost = self.maps_lost.saturating_add(maps_lost.max(0));

        self.winrate = self.expected_winrate();
        self.map_winrate = self.expected_map_winrate();
        self.last_match_time = latest(self.last_match_time, played_at);
        self.updated_at = now;
    }

    pub fn maps_played(&self) -> i64 {
        i64::from(self.maps_won) + i64::from(self.maps_lost)
    }

    pub fn expected_winrate(&self) -> f64 {
        winrate(self.wins.into(), self.matches_played.into())
    }

    pub fn expected_map_winrate(&self) -> f64 {
        winrate(self.maps_won.into(), self.maps_played())
    }
}
