use crate::database::{self, DbConn, Game, Participant};
use crate::errors::{self, ServiceError};

/// Record the outcome of one pairing.
///
/// `winner` is the player id of the winning side, or `None` for a draw.
/// The derived score pair is the point award itself: 2/0 for a win,
/// 1/1 for a draw.
pub fn record_result(
    conn: &mut DbConn,
    tournament_id: i64,
    home_participant: Option<i64>,
    away_participant: Option<i64>,
    winner: Option<i64>,
) -> Result<Game, ServiceError> {
    database::tournaments::find_by_id(conn, tournament_id)?
        .ok_or_else(|| ServiceError::not_found("Tournament not found"))?;

    let home_id = home_participant
        .ok_or_else(|| ServiceError::validation("home_participant and away_participant are required"))?;
    let away_id = away_participant
        .ok_or_else(|| ServiceError::validation("home_participant and away_participant are required"))?;

    let home = database::participants::find_by_id(conn, home_id)?;
    let away = database::participants::find_by_id(conn, away_id)?;
    let (Some(home), Some(away)) = (home, away) else {
        return Err(ServiceError::not_found(
            "One or both participants do not exist",
        ));
    };

    if home.id == away.id {
        return Err(ServiceError::InvalidOperation(
            "A participant cannot play against themselves".to_string(),
        ));
    }

    if home.tournament_id != tournament_id || away.tournament_id != tournament_id {
        return Err(ServiceError::InvalidOperation(
            "Both participants must belong to this tournament".to_string(),
        ));
    }

    let (home_score, away_score) = derive_scores(&home, &away, winner)?;

    if database::games::pair_played(conn, tournament_id, home.id, away.id)? {
        return Err(duplicate_pairing());
    }

    match database::games::insert_game(conn, tournament_id, home.id, away.id, home_score, away_score)
    {
        Ok(game) => Ok(game),
        // A concurrent recording of the same pairing lands on the unordered
        // pair index.
        Err(err) if errors::is_constraint_violation(&err) => Err(duplicate_pairing()),
        Err(err) => Err(err.into()),
    }
}

/// Map a declared winner onto the stored score pair.
fn derive_scores(
    home: &Participant,
    away: &Participant,
    winner: Option<i64>,
) -> Result<(i64, i64), ServiceError> {
    match winner {
        None => Ok((1, 1)),
        Some(player_id) if player_id == home.player_id => Ok((2, 0)),
        Some(player_id) if player_id == away.player_id => Ok((0, 2)),
        Some(_) => Err(ServiceError::InvalidOperation(
            "Winner must be one of the participants or null for draw".to_string(),
        )),
    }
}

fn duplicate_pairing() -> ServiceError {
    ServiceError::DuplicateEntry(
        "A game between these participants already exists for this tournament".to_string(),
    )
}
