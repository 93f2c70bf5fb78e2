use rusqlite::Row;

use super::nullable::{NullInt64, NullTime, Nullable};
use crate::domain::{
    Match, MatchMap, MatchPlayer, Player, PlayerStats, Subscription, Team, TeamStats, Tournament,
};

/// Maps a result row, addressed by column name, into an entity.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}

fn nullable_id(row: &Row, column: &str) -> rusqlite::Result<Option<i64>> {
    row.get::<_, NullInt64>(column).map(Nullable::into_option)
}

fn nullable_seconds(row: &Row, column: &str) -> rusqlite::Result<Option<i32>> {
    row.get::<_, Nullable<i32>>(column).map(Nullable::into_option)
}

fn nullable_time(row: &Row, column: &str) -> rusqlite::Result<Option<chrono::DateTime<chrono::Utc>>> {
    row.get::<_, NullTime>(column).map(Nullable::into_option)
}

impl FromRow for Team {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Team {
            id: row.get("id")?,
            external_id: row.get("external_id")?,
            name: row.get("name")?,
            tag: row.get("tag")?,
            country_code: row.get("country_code")?,
            logo_url: row.get("logo_url")?,
            ranking: row.get("ranking")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl FromRow for Player {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Player {
            id: row.get("id")?,
            team_id: nullable_id(row, "team_id")?,
            external_id: row.get("external_id")?,
            username: row.get("username")?,
            real_name: row.get("real_name")?,
            country_code: row.get("country_code")?,
            rank_tier: row.get("rank_tier")?,
            rating: row.get("rating")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl FromRow for Tournament {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Tournament {
            id: row.get("id")?,
            external_id: row.get("external_id")?,
            name: row.get("name")?,
            tier: row.get("tier")?,
            prize_pool: row.get("prize_pool")?,
            currency: row.get("currency")?,
            start_date: row.get("start_date")?,
            end_date: row.get("end_date")?,
            location: row.get("location")?,
            status: row.get("status")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl FromRow for Match {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Match {
            id: row.get("id")?,
            tournament_id: nullable_id(row, "tournament_id")?,
            external_match_id: row.get("external_match_id")?,
            team1_id: nullable_id(row, "team1_id")?,
            team2_id: nullable_id(row, "team2_id")?,
            start_time: row.get("start_time")?,
            end_time: nullable_time(row, "end_time")?,
            duration_seconds: nullable_seconds(row, "duration_seconds")?,
            format: row.get("format")?,
            winner_team_id: nullable_id(row, "winner_team_id")?,
            team1_score: row.get("team1_score")?,
            team2_score: row.get("team2_score")?,
            status: row.get("status")?,
            stage: row.get("stage")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl FromRow for MatchMap {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(MatchMap {
            id: row.get("id")?,
            match_id: row.get("match_id")?,
            map_name: row.get("map_name")?,
            map_order: row.get("map_order")?,
            team1_score: row.get("team1_score")?,
            team2_score: row.get("team2_score")?,
            winner_team_id: nullable_id(row, "winner_team_id")?,
            duration_seconds: nullable_seconds(row, "duration_seconds")?,
            status: row.get("status")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl FromRow for MatchPlayer {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(MatchPlayer {
            id: row.get("id")?,
            match_id: row.get("match_id")?,
            map_id: nullable_id(row, "map_id")?,
            player_id: row.get("player_id")?,
            team_id: row.get("team_id")?,
            kills: row.get("kills")?,
            deaths: row.get("deaths")?,
            assists: row.get("assists")?,
            headshots: row.get("headshots")?,
            mvps: row.get("mvps")?,
            score: row.get("score")?,
            adr: row.get("adr")?,
            rating: row.get("rating")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl FromRow for Subscription {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Subscription {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            platform: row.get("platform")?,
            chat_id: row.get("chat_id")?,
            team_id: nullable_id(row, "team_id")?,
            tournament_id: nullable_id(row, "tournament_id")?,
            player_id: nullable_id(row, "player_id")?,
            notification_type: row.get("notification_type")?,
            is_active: row.get("is_active")?,
            created_at: row.get("created_at")?,
        })
    }
}

impl FromRow for PlayerStats {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(PlayerStats {
            id: row.get("id")?,
            player_id: row.get("player_id")?,
            team_id: nullable_id(row, "team_id")?,
            matches_played: row.get("matches_played")?,
            wins: row.get("wins")?,
            losses: row.get("losses")?,
            total_kills: row.get("total_kills")?,
            total_deaths: row.get("total_deaths")?,
            total_assists: row.get("total_assists")?,
            total_headshots: row.get("total_headshots")?,
            total_mvps: row.get("total_mvps")?,
            avg_kd: row.get("avg_kd")?,
            avg_adr: row.get("avg_adr")?,
            avg_rating: row.get("avg_rating")?,
            winrate: row.get("winrate")?,
            last_match_time: nullable_time(row, "last_match_time")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

impl FromRow for TeamStats {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(TeamStats {
            id: row.get("id")?,
            team_id: row.get("team_id")?,
            matches_played: row.get("matches_played")?,
            wins: row.get("wins")?,
            losses: row.get("losses")?,
            winrate: row.get("winrate")?,
            maps_won: row.get("maps_won")?,
            maps_lost: row.get("maps_lost")?,
            map_winrate: row.get("map_winrate")?,
            last_match_time: nullable_time(row, "last_match_time")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::nullable::{null_int64, null_time};
    use crate::database::setup::reset_database;
    use crate::domain::models::fixtures::*;
    use crate::domain::{MatchStatus, Platform};
    use rusqlite::{Connection, params};

    fn seeded() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        reset_database(&conn).unwrap();

        for team in [team(10), team(20)] {
            conn.execute(
                "INSERT INTO teams (id, external_id, name, tag, country_code, logo_url, ranking, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    team.id,
                    team.external_id,
                    team.name,
                    team.tag,
                    team.country_code,
                    team.logo_url,
                    team.ranking,
                    team.created_at,
                    team.updated_at
                ],
            )
            .unwrap();
        }
        conn
    }

    fn insert_match(conn: &Connection, m: &Match) -> rusqlite::Result<usize> {
        conn.execute(
            "INSERT INTO matches (id, tournament_id, external_match_id, team1_id, team2_id, start_time, end_time, duration_seconds, format, winner_team_id, team1_score, team2_score, status, stage, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                m.id,
                null_int64(m.tournament_id),
                m.external_match_id,
                null_int64(m.team1_id),
                null_int64(m.team2_id),
                m.start_time,
                null_time(m.end_time),
                Nullable::from(m.duration_seconds),
                m.format,
                null_int64(m.winner_team_id),
                m.team1_score,
                m.team2_score,
                m.status,
                m.stage,
                m.created_at
            ],
        )
    }

    fn load_match(conn: &Connection, id: i64) -> Match {
        conn.query_row("SELECT * FROM matches WHERE id = ?1", [id], Match::from_row)
            .unwrap()
    }

    #[test]
    fn test_team_row_maps_back() {
        let conn = seeded();
        let loaded = conn
            .query_row("SELECT * FROM teams WHERE id = 10", [], Team::from_row)
            .unwrap();
        assert_eq!(loaded, team(10));
    }

    #[test]
    fn test_match_with_nulls_maps_back() {
        let conn = seeded();
        let mut bye = finished_match(3);
        bye.tournament_id = None;
        bye.team1_id = None;
        bye.winner_team_id = Some(20);

        insert_match(&conn, &bye).unwrap();
        let loaded = load_match(&conn, 3);

        assert_eq!(loaded, bye);
        assert_eq!(loaded.team1_id, None);
        assert_eq!(loaded.status, MatchStatus::Finished);
    }

    #[test]
    fn test_schema_rejects_foreign_winner() {
        let conn = seeded();
        let mut invalid = finished_match(4);
        invalid.tournament_id = None;
        invalid.winner_team_id = Some(30);
        assert!(insert_match(&conn, &invalid).is_err());
    }

    #[test]
    fn test_schema_rejects_duplicate_map_order() {
        let conn = seeded();
        let mut m = finished_match(3);
        m.tournament_id = None;
        insert_match(&conn, &m).unwrap();

        let insert_map = |id: i64, order: i32| {
            let map = match_map(id, 3, order);
            conn.execute(
                "INSERT INTO match_maps (id, match_id, map_name, map_order, team1_score, team2_score, winner_team_id, duration_seconds, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    map.id,
                    map.match_id,
                    map.map_name,
                    map.map_order,
                    map.team1_score,
                    map.team2_score,
                    null_int64(map.winner_team_id),
                    Nullable::from(map.duration_seconds),
                    map.status,
                    map.created_at
                ],
            )
        };

        insert_map(5, 1).unwrap();
        assert!(insert_map(6, 1).is_err());

        let loaded = conn
            .query_row("SELECT * FROM match_maps WHERE id = 5", [], MatchMap::from_row)
            .unwrap();
        assert_eq!(loaded, match_map(5, 3, 1));
    }

    #[test]
    fn test_subscription_row_maps_enums() {
        let conn = seeded();
        let s = subscription(2);
        conn.execute(
            "INSERT INTO subscriptions (id, user_id, platform, chat_id, team_id, tournament_id, player_id, notification_type, is_active, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                s.id,
                s.user_id,
                s.platform,
                s.chat_id,
                null_int64(s.team_id),
                null_int64(s.tournament_id),
                null_int64(s.player_id),
                s.notification_type,
                s.is_active,
                s.created_at
            ],
        )
        .unwrap();

        let loaded = conn
            .query_row("SELECT * FROM subscriptions WHERE id = 2", [], Subscription::from_row)
            .unwrap();
        assert_eq!(loaded, s);
        assert_eq!(loaded.platform, Platform::Telegram);
    }

    #[test]
    fn test_unknown_status_in_row_is_an_error() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE maps (status TEXT); INSERT INTO maps (status) VALUES ('paused');",
        )
        .unwrap();

        let result: rusqlite::Result<crate::domain::MapStatus> =
            conn.query_row("SELECT status FROM maps", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
