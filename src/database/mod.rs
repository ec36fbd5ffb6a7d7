pub mod connection;
pub mod games;
pub mod models;
pub mod participants;
pub mod players;
pub mod setup;
pub mod tournaments;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
