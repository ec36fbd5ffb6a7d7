use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
}

#[derive(Debug, Clone)]
pub struct Game {
    pub id: i64,
    pub tournament_id: i64,
    pub home_participant_id: i64,
    pub away_participant_id: i64,
    pub home_score: i64,
    pub away_score: i64,
    pub created_at: Option<NaiveDateTime>,
}

// DTO for joined queries
#[derive(Debug, Clone)]
pub struct ParticipantWithPlayer {
    pub id: i64,
    pub tournament_id: i64,
    pub player_id: i64,
    pub player_name: String,
}
