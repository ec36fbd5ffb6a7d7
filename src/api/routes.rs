use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    health::health,
    players::{create_player, delete_player, get_player, list_players, update_player},
    tournaments::{
        add_game, add_participant, create_tournament, delete_tournament, get_leaderboard,
        get_status, get_tournament, list_tournaments, update_tournament,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/players", get(list_players).post(create_player))
        .route(
            "/api/players/:id",
            get(get_player).put(update_player).delete(delete_player),
        )
        .route(
            "/api/tournaments",
            get(list_tournaments).post(create_tournament),
        )
        .route(
            "/api/tournaments/:id",
            get(get_tournament)
                .put(update_tournament)
                .delete(delete_tournament),
        )
        .route("/api/tournaments/:id/participants", post(add_participant))
        .route("/api/tournaments/:id/games", post(add_game))
        .route("/api/tournaments/:id/status", get(get_status))
        .route("/api/tournaments/:id/leaderboard", get(get_leaderboard))
        .with_state(state)
}
