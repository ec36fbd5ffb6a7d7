use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::{Game, ParticipantWithPlayer, Player, Tournament};
use crate::domain::{StandingRow, TournamentProgress, TournamentStandings, TournamentStatus};

// --- Request bodies ---

#[derive(Debug, Deserialize)]
pub struct NameRequest {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddParticipantRequest {
    pub player_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct AddGameRequest {
    pub home_participant: Option<i64>,
    pub away_participant: Option<i64>,
    /// Player id of the winning side; absent or null means a draw.
    #[serde(default)]
    pub winner: Option<i64>,
}

// --- Responses ---

#[derive(Debug, Serialize)]
pub struct PlayerResponse {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            created_at: player.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<Tournament> for TournamentResponse {
    fn from(tournament: Tournament) -> Self {
        Self {
            id: tournament.id,
            name: tournament.name,
            created_at: tournament.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
    pub player_name: String,
}

impl From<ParticipantWithPlayer> for ParticipantResponse {
    fn from(participant: ParticipantWithPlayer) -> Self {
        Self {
            id: participant.id,
            tournament_id: participant.tournament_id,
            player_id: participant.player_id,
            player_name: participant.player_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameResponse {
    pub id: i64,
    pub tournament_id: i64,
    pub home_participant: i64,
    pub away_participant: i64,
    pub home_score: i64,
    pub away_score: i64,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            tournament_id: game.tournament_id,
            home_participant: game.home_participant_id,
            away_participant: game.away_participant_id,
            home_score: game.home_score,
            away_score: game.away_score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub tournament_id: i64,
    pub tournament_name: String,
    pub participants_count: i64,
    pub total_required_games: i64,
    pub games_played: i64,
    pub status: TournamentStatus,
}

impl From<TournamentProgress> for StatusResponse {
    fn from(progress: TournamentProgress) -> Self {
        Self {
            tournament_id: progress.tournament.id,
            tournament_name: progress.tournament.name,
            participants_count: progress.participants_count,
            total_required_games: progress.total_required_games,
            games_played: progress.games_played,
            status: progress.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub tournament_id: i64,
    pub tournament_name: String,
    pub leaderboard: Vec<StandingRow>,
}

impl From<TournamentStandings> for LeaderboardResponse {
    fn from(standings: TournamentStandings) -> Self {
        Self {
            tournament_id: standings.tournament.id,
            tournament_name: standings.tournament.name,
            leaderboard: standings.entries,
        }
    }
}
