use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;

pub fn insert_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn update_player(conn: &mut DbConn, id: i64, name: &str) -> Result<Option<Player>> {
    let sql = "UPDATE players SET name = ?1 WHERE id = ?2 RETURNING id, name, created_at";

    conn.query_row(sql, params![name, id], parse_player_row)
        .optional()
        .context("Failed to update player")
}

/// Returns false when no row with the given id existed.
pub fn delete_player(conn: &mut DbConn, id: i64) -> Result<bool> {
    let sql = "DELETE FROM players WHERE id = ?1";

    let affected = conn
        .execute(sql, params![id])
        .context("Failed to delete player")?;
    Ok(affected > 0)
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}
