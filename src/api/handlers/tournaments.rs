use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{require_name, AppState};
use crate::api::models::{
    AddGameRequest, AddParticipantRequest, GameResponse, LeaderboardResponse, NameRequest,
    ParticipantResponse, StatusResponse, TournamentResponse,
};
use crate::database;
use crate::domain::{enrollment, progress, results, standings};
use crate::errors::ServiceError;

pub async fn list_tournaments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TournamentResponse>>, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let tournaments = database::tournaments::list_all(&mut conn)?;
    Ok(Json(tournaments.into_iter().map(Into::into).collect()))
}

pub async fn create_tournament(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let name = require_name(body.name)?;
    let mut conn = database::get_connection(&state.pool)?;
    let tournament = database::tournaments::insert_tournament(&mut conn, &name)?;
    Ok((StatusCode::CREATED, Json(TournamentResponse::from(tournament))))
}

pub async fn get_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<TournamentResponse>, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let tournament = database::tournaments::find_by_id(&mut conn, tournament_id)?
        .ok_or_else(|| ServiceError::not_found("Tournament not found"))?;
    Ok(Json(tournament.into()))
}

pub async fn update_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
    Json(body): Json<NameRequest>,
) -> Result<Json<TournamentResponse>, ServiceError> {
    let name = require_name(body.name)?;
    let mut conn = database::get_connection(&state.pool)?;
    let tournament = database::tournaments::update_tournament(&mut conn, tournament_id, &name)?
        .ok_or_else(|| ServiceError::not_found("Tournament not found"))?;
    Ok(Json(tournament.into()))
}

pub async fn delete_tournament(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    if !database::tournaments::delete_tournament(&mut conn, tournament_id)? {
        return Err(ServiceError::not_found("Tournament not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_participant(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
    Json(body): Json<AddParticipantRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let participant = enrollment::enroll(
        &mut conn,
        &state.config.tournament,
        tournament_id,
        body.player_id,
    )?;
    Ok((
        StatusCode::CREATED,
        Json(ParticipantResponse::from(participant)),
    ))
}

pub async fn add_game(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
    Json(body): Json<AddGameRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let game = results::record_result(
        &mut conn,
        tournament_id,
        body.home_participant,
        body.away_participant,
        body.winner,
    )?;
    Ok((StatusCode::CREATED, Json(GameResponse::from(game))))
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<StatusResponse>, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let progress = progress::tournament_status(&mut conn, tournament_id)?;
    Ok(Json(progress.into()))
}

pub async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
    Path(tournament_id): Path<i64>,
) -> Result<Json<LeaderboardResponse>, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let standings = standings::leaderboard(&mut conn, tournament_id)?;
    Ok(Json(standings.into()))
}
