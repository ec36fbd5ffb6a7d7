use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::{Participant, ParticipantWithPlayer};

pub fn insert_participant(
    conn: &mut DbConn,
    tournament_id: i64,
    player_id: i64,
) -> Result<Participant> {
    let sql = "INSERT INTO tournament_participants (tournament_id, player_id) VALUES (?1, ?2) RETURNING id, tournament_id, player_id";

    conn.query_row(sql, params![tournament_id, player_id], parse_participant_row)
        .context("Failed to insert new participant")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Participant>> {
    let sql = "SELECT id, tournament_id, player_id FROM tournament_participants WHERE id = ?1";

    conn.query_row(sql, params![id], parse_participant_row)
        .optional()
        .context("Failed to query participant by id")
}

pub fn count_for_tournament(conn: &mut DbConn, tournament_id: i64) -> Result<i64> {
    let sql = "SELECT COUNT(*) FROM tournament_participants WHERE tournament_id = ?1";

    conn.query_row(sql, params![tournament_id], |row| row.get(0))
        .context("Failed to count participants for tournament")
}

pub fn pair_exists(conn: &mut DbConn, tournament_id: i64, player_id: i64) -> Result<bool> {
    let sql = "SELECT EXISTS (SELECT 1 FROM tournament_participants WHERE tournament_id = ?1 AND player_id = ?2)";

    conn.query_row(sql, params![tournament_id, player_id], |row| row.get(0))
        .context("Failed to check participant pair")
}

pub fn list_for_tournament(
    conn: &mut DbConn,
    tournament_id: i64,
) -> Result<Vec<ParticipantWithPlayer>> {
    let sql = "
        SELECT tp.id, tp.tournament_id, tp.player_id, p.name
        FROM tournament_participants tp
        JOIN players p ON tp.player_id = p.id
        WHERE tp.tournament_id = ?1
        ORDER BY tp.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![tournament_id], parse_participant_with_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn find_with_player(conn: &mut DbConn, id: i64) -> Result<Option<ParticipantWithPlayer>> {
    let sql = "
        SELECT tp.id, tp.tournament_id, tp.player_id, p.name
        FROM tournament_participants tp
        JOIN players p ON tp.player_id = p.id
        WHERE tp.id = ?1
    ";

    conn.query_row(sql, params![id], parse_participant_with_player_row)
        .optional()
        .context("Failed to query participant with player")
}

fn parse_participant_row(row: &rusqlite::Row) -> rusqlite::Result<Participant> {
    Ok(Participant {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player_id: row.get(2)?,
    })
}

fn parse_participant_with_player_row(
    row: &rusqlite::Row,
) -> rusqlite::Result<ParticipantWithPlayer> {
    Ok(ParticipantWithPlayer {
        id: row.get(0)?,
        tournament_id: row.get(1)?,
        player_id: row.get(2)?,
        player_name: row.get(3)?,
    })
}
