use serde::Serialize;

use crate::database::{self, DbConn, Tournament};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    InPlanning,
    Started,
    Finished,
}

#[derive(Debug, Clone)]
pub struct TournamentProgress {
    pub tournament: Tournament,
    pub participants_count: i64,
    pub total_required_games: i64,
    pub games_played: i64,
    pub status: TournamentStatus,
}

/// Number of games in a complete round-robin over `participants` players.
pub fn required_games(participants: i64) -> i64 {
    if participants < 2 {
        0
    } else {
        participants * (participants - 1) / 2
    }
}

fn derive_status(games_played: i64, total_required: i64) -> TournamentStatus {
    if games_played == 0 {
        TournamentStatus::InPlanning
    } else if total_required > 0 && games_played >= total_required {
        TournamentStatus::Finished
    } else {
        TournamentStatus::Started
    }
}

/// Read-only projection of the tournament lifecycle. Counts are queried
/// fresh on every call.
pub fn tournament_status(
    conn: &mut DbConn,
    tournament_id: i64,
) -> Result<TournamentProgress, ServiceError> {
    let tournament = database::tournaments::find_by_id(conn, tournament_id)?
        .ok_or_else(|| ServiceError::not_found("Tournament not found"))?;

    let participants_count = database::participants::count_for_tournament(conn, tournament_id)?;
    let games_played = database::games::count_for_tournament(conn, tournament_id)?;
    let total_required_games = required_games(participants_count);

    Ok(TournamentProgress {
        tournament,
        participants_count,
        total_required_games,
        games_played,
        status: derive_status(games_played, total_required_games),
    })
}
