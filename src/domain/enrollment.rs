use crate::config::settings::TournamentSettings;
use crate::database::{self, DbConn, ParticipantWithPlayer};
use crate::errors::{self, ServiceError};

/// Bind a player to a tournament.
///
/// Checks run in a fixed order so the first failing one decides the error:
/// tournament existence, payload shape, player existence, capacity, and
/// finally the (tournament, player) uniqueness.
pub fn enroll(
    conn: &mut DbConn,
    settings: &TournamentSettings,
    tournament_id: i64,
    player_id: Option<i64>,
) -> Result<ParticipantWithPlayer, ServiceError> {
    database::tournaments::find_by_id(conn, tournament_id)?
        .ok_or_else(|| ServiceError::not_found("Tournament not found"))?;

    let player_id =
        player_id.ok_or_else(|| ServiceError::validation("player_id is required"))?;

    let player = database::players::find_by_id(conn, player_id)?
        .ok_or_else(|| ServiceError::not_found("Player not found"))?;

    let enrolled = database::participants::count_for_tournament(conn, tournament_id)?;
    if enrolled >= settings.max_participants {
        return Err(ServiceError::CapacityExceeded(format!(
            "Tournament allows a maximum of {} participants",
            settings.max_participants
        )));
    }

    if database::participants::pair_exists(conn, tournament_id, player_id)? {
        return Err(duplicate_enrollment());
    }

    match database::participants::insert_participant(conn, tournament_id, player_id) {
        Ok(participant) => Ok(ParticipantWithPlayer {
            id: participant.id,
            tournament_id: participant.tournament_id,
            player_id: participant.player_id,
            player_name: player.name,
        }),
        // A concurrent enrollment that won the race lands on the unique
        // (tournament_id, player_id) constraint.
        Err(err) if errors::is_constraint_violation(&err) => Err(duplicate_enrollment()),
        Err(err) => Err(err.into()),
    }
}

fn duplicate_enrollment() -> ServiceError {
    ServiceError::DuplicateEntry(
        "Player is already a participant of this tournament".to_string(),
    )
}
