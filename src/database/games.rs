use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::Game;

pub fn insert_game(
    conn: &mut DbConn,
    tournament_id: i64,
    home_participant_id: i64,
    away_participant_id: i64,
    home_score: i64,
    away_score: i64,
) -> Result<Game> {
    let sql = "INSERT INTO games (tournament_id, home_participant_id, away_participant_id, home_score, away_score) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id, tournament_id, home_participant_id, away_participant_id, home_score, away_score, created_at";

    conn.query_row(
        sql,
        params![
            tournament_id,
            home_participant_id,
            away_participant_id,
            home_score,
            away_score
        ],
        parse_game_row,
    )
    .context("Failed to insert game")
}

pub fn list_for_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<Vec<Game>> {
    let sql = "SELECT id, tournament_id, home_participant_id, away_participant_id, home_score, away_score, created_at FROM games WHERE tournament_id = ?1 ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_game_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_for_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM games WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .context("Failed to count games for tournament")
}

/// True when the unordered pair already played in this tournament.
pub fn pair_played(
    conn: &mut DbConn,
    tournament_id: i64,
    first_participant_id: i64,
    second_participant_id: i64,
) -> Result<bool> {
    let sql = "
        SELECT EXISTS (
            SELECT 1 FROM games
            WHERE tournament_id = ?1
              AND ((home_participant_id = ?2 AND away_participant_id = ?3)
                OR (home_participant_id = ?3 AND away_participant_id = ?2))
        )
    ";

    conn.query_row(
        sql,
        params![tournament_id, first_participant_id, second_participant_id],
        |row| row.get(0),
    )
    .context("Failed to check existing pairing")
}

fn parse_game_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        home_participant_id: row.get(2)?,
        away_participant_id: row.get(3)?,
        home_score: row.get(4)?,
        away_score: row.get(5)?,
        created_at: row.get(6)?,
    })
}
