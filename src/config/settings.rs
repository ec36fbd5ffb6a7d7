#[derive(Debug, Clone)]
pub struct TournamentSettings {
    /// Hard cap on enrollments per tournament.
    pub max_participants: i64,
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            max_participants: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "tournament_service.db".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub tournament: TournamentSettings,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
