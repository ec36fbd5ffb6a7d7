use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{require_name, AppState};
use crate::api::models::{NameRequest, PlayerResponse};
use crate::database;
use crate::errors::ServiceError;

pub async fn list_players(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PlayerResponse>>, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let players = database::players::list_all(&mut conn)?;
    Ok(Json(players.into_iter().map(Into::into).collect()))
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NameRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let name = require_name(body.name)?;
    let mut conn = database::get_connection(&state.pool)?;
    let player = database::players::insert_player(&mut conn, &name)?;
    Ok((StatusCode::CREATED, Json(PlayerResponse::from(player))))
}

pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<Json<PlayerResponse>, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    let player = database::players::find_by_id(&mut conn, player_id)?
        .ok_or_else(|| ServiceError::not_found("Player not found"))?;
    Ok(Json(player.into()))
}

pub async fn update_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
    Json(body): Json<NameRequest>,
) -> Result<Json<PlayerResponse>, ServiceError> {
    let name = require_name(body.name)?;
    let mut conn = database::get_connection(&state.pool)?;
    let player = database::players::update_player(&mut conn, player_id, &name)?
        .ok_or_else(|| ServiceError::not_found("Player not found"))?;
    Ok(Json(player.into()))
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<i64>,
) -> Result<StatusCode, ServiceError> {
    let mut conn = database::get_connection(&state.pool)?;
    if !database::players::delete_player(&mut conn, player_id)? {
        return Err(ServiceError::not_found("Player not found"));
    }
    Ok(StatusCode::NO_CONTENT)
}
