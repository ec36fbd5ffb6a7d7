use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Tournament;

pub fn insert_tournament(conn: &mut DbConn, name: &str) -> Result<Tournament> {
    let sql = "INSERT INTO tournaments (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_tournament_row)
        .context("Failed to insert new tournament")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Tournament>> {
    let sql = "SELECT id, name, created_at FROM tournaments WHERE id = ?1";

    conn.query_row(sql, params![id], parse_tournament_row)
        .optional()
        .context("Failed to query tournament by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Tournament>> {
    let sql = "SELECT id, name, created_at FROM tournaments ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_tournament_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_tournament(conn: &mut DbConn, id: i64, name: &str) -> Result<Option<Tournament>> {
    let sql = "UPDATE tournaments SET name = ?1 WHERE id = ?2 RETURNING id, name, created_at";

    conn.query_row(sql, params![name, id], parse_tournament_row)
        .optional()
        .context("Failed to update tournament")
}

/// Returns false when no row with the given id existed. Participants and
/// games of the tournament are removed by the FK cascade.
pub fn delete_tournament(conn: &mut DbConn, id: i64) -> Result<bool> {
    let sql = "DELETE FROM tournaments WHERE id = ?1";

    let affected = conn
        .execute(sql, params![id])
        .context("Failed to delete tournament")?;
    Ok(affected > 0)
}

fn parse_tournament_row(row: &rusqlite::Row) -> rusqlite::Result<Tournament> {
    Ok(Tournament {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}
