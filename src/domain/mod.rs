pub mod enrollment;
pub mod progress;
pub mod results;
pub mod standings;

pub use progress::{TournamentProgress, TournamentStatus};
pub use standings::{StandingRow, TournamentStandings};
