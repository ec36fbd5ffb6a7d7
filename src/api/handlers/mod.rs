use crate::config::AppConfig;
use crate::database::DbPool;
use crate::errors::ServiceError;

pub mod health;
pub mod players;
pub mod tournaments;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: AppConfig,
}

pub(crate) fn require_name(name: Option<String>) -> Result<String, ServiceError> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(ServiceError::validation("name is required")),
    }
}
