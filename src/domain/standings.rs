use std::collections::HashMap;

use serde::Serialize;

use crate::database::{self, DbConn, Game, Tournament};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    pub player_id: i64,
    pub player_name: String,
    pub points: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub games_played: i64,
}

impl StandingRow {
    fn new(player_id: i64, player_name: String) -> Self {
        Self {
            player_id,
            player_name,
            points: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            games_played: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TournamentStandings {
    pub tournament: Tournament,
    pub entries: Vec<StandingRow>,
}

/// Fold every recorded game of one tournament into per-player standings.
///
/// Participants without games appear with zeroed counters. Ordering is
/// points descending with ties broken by ascending player name, so equal
/// inputs always produce the same ranking.
pub fn leaderboard(
    conn: &mut DbConn,
    tournament_id: i64,
) -> Result<TournamentStandings, ServiceError> {
    let tournament = database::tournaments::find_by_id(conn, tournament_id)?
        .ok_or_else(|| ServiceError::not_found("Tournament not found"))?;

    let participants = database::participants::list_for_tournament(conn, tournament_id)?;
    let games = database::games::list_for_tournament(conn, tournament_id)?;

    // Accumulators are scoped to this call; games address rows through the
    // participant id they reference.
    let mut by_participant: HashMap<i64, usize> = HashMap::with_capacity(participants.len());
    let mut entries: Vec<StandingRow> = Vec::with_capacity(participants.len());
    for participant in &participants {
        by_participant.insert(participant.id, entries.len());
        entries.push(StandingRow::new(
            participant.player_id,
            participant.player_name.clone(),
        ));
    }

    for game in &games {
        let (Some(&home), Some(&away)) = (
            by_participant.get(&game.home_participant_id),
            by_participant.get(&game.away_participant_id),
        ) else {
            continue;
        };
        apply_game(&mut entries, home, away, game);
    }

    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });

    Ok(TournamentStandings {
        tournament,
        entries,
    })
}

fn apply_game(entries: &mut [StandingRow], home: usize, away: usize, game: &Game) {
    entries[home].games_played += 1;
    entries[away].games_played += 1;

    if game.home_score > game.away_score {
        entries[home].points += 2;
        entries[home].wins += 1;
        entries[away].losses += 1;
    } else if game.home_score < game.away_score {
        entries[away].points += 2;
        entries[away].wins += 1;
        entries[home].losses += 1;
    } else {
        entries[home].points += 1;
        entries[home].draws += 1;
        entries[away].points += 1;
        entries[away].draws += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::create_test_pool;
    use crate::database::setup::init_schema;
    use crate::database::{games, participants, players, tournaments, DbPool};

    fn setup() -> DbPool {
        let pool = create_test_pool().unwrap();
        let mut conn = pool.get().unwrap();
        init_schema(&mut conn).unwrap();
        pool
    }

    fn enroll(conn: &mut DbConn, tournament_id: i64, name: &str) -> i64 {
        let player = players::insert_player(conn, name).unwrap();
        participants::insert_participant(conn, tournament_id, player.id)
            .unwrap()
            .id
    }

    #[test]
    fn test_leaderboard_tournament_not_found() {
        let pool = setup();
        let mut conn = pool.get().unwrap();

        let err = leaderboard(&mut conn, 9999).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(m) if m == "Tournament not found"));
    }

    #[test]
    fn test_leaderboard_zeroed_without_games() {
        let pool = setup();
        let mut conn = pool.get().unwrap();
        let tournament = tournaments::insert_tournament(&mut conn, "Planning Cup").unwrap();
        enroll(&mut conn, tournament.id, "Alice");
        enroll(&mut conn, tournament.id, "Bob");

        let standings = leaderboard(&mut conn, tournament.id).unwrap();
        assert_eq!(standings.entries.len(), 2);
        for entry in &standings.entries {
            assert_eq!(entry.points, 0);
            assert_eq!(entry.games_played, 0);
        }
    }

    #[test]
    fn test_leaderboard_full_round_robin() {
        // A beats B, A draws C, C beats B: A and C tie on 3 points and the
        // name tie-break puts A first.
        let pool = setup();
        let mut conn = pool.get().unwrap();
        let tournament = tournaments::insert_tournament(&mut conn, "Final Cup").unwrap();
        let a = enroll(&mut conn, tournament.id, "A");
        let b = enroll(&mut conn, tournament.id, "B");
        let c = enroll(&mut conn, tournament.id, "C");

        games::insert_game(&mut conn, tournament.id, a, b, 2, 0).unwrap();
        games::insert_game(&mut conn, tournament.id, a, c, 1, 1).unwrap();
        games::insert_game(&mut conn, tournament.id, c, b, 2, 0).unwrap();

        let standings = leaderboard(&mut conn, tournament.id).unwrap();
        let names: Vec<&str> = standings
            .entries
            .iter()
            .map(|e| e.player_name.as_str())
            .collect();
        assert_eq!(names, ["A", "C", "B"]);

        assert_eq!(standings.entries[0].points, 3);
        assert_eq!(standings.entries[0].wins, 1);
        assert_eq!(standings.entries[0].draws, 1);
        assert_eq!(standings.entries[1].points, 3);
        assert_eq!(standings.entries[2].points, 0);
        assert_eq!(standings.entries[2].losses, 2);
    }

    #[test]
    fn test_leaderboard_distinct_points_order() {
        // A beats B, C beats A, B draws C: C=3, A=2, B=1.
        let pool = setup();
        let mut conn = pool.get().unwrap();
        let tournament = tournaments::insert_tournament(&mut conn, "Ranked Cup").unwrap();
        let a = enroll(&mut conn, tournament.id, "A");
        let b = enroll(&mut conn, tournament.id, "B");
        let c = enroll(&mut conn, tournament.id, "C");

        games::insert_game(&mut conn, tournament.id, a, b, 2, 0).unwrap();
        games::insert_game(&mut conn, tournament.id, c, a, 2, 0).unwrap();
        games::insert_game(&mut conn, tournament.id, b, c, 1, 1).unwrap();

        let standings = leaderboard(&mut conn, tournament.id).unwrap();
        let ranked: Vec<(&str, i64)> = standings
            .entries
            .iter()
            .map(|e| (e.player_name.as_str(), e.points))
            .collect();
        assert_eq!(ranked, [("C", 3), ("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_points_sum_is_twice_games_played() {
        let pool = setup();
        let mut conn = pool.get().unwrap();
        let tournament = tournaments::insert_tournament(&mut conn, "Sum Cup").unwrap();
        let a = enroll(&mut conn, tournament.id, "A");
        let b = enroll(&mut conn, tournament.id, "B");
        let c = enroll(&mut conn, tournament.id, "C");

        games::insert_game(&mut conn, tournament.id, a, b, 2, 0).unwrap();
        games::insert_game(&mut conn, tournament.id, b, c, 1, 1).unwrap();

        let standings = leaderboard(&mut conn, tournament.id).unwrap();
        let total_points: i64 = standings.entries.iter().map(|e| e.points).sum();
        let total_games: i64 = standings.entries.iter().map(|e| e.games_played).sum();
        assert_eq!(total_points, 4);
        assert_eq!(total_games, 4); // each game counts once per side
    }

    #[test]
    fn test_ties_broken_by_name_ascending() {
        let pool = setup();
        let mut conn = pool.get().unwrap();
        let tournament = tournaments::insert_tournament(&mut conn, "Tie Cup").unwrap();
        let zoe = enroll(&mut conn, tournament.id, "Zoe");
        let amy = enroll(&mut conn, tournament.id, "Amy");

        games::insert_game(&mut conn, tournament.id, zoe, amy, 1, 1).unwrap();

        let standings = leaderboard(&mut conn, tournament.id).unwrap();
        assert_eq!(standings.entries[0].player_name, "Amy");
        assert_eq!(standings.entries[1].player_name, "Zoe");
    }

    #[test]
    fn test_aggregation_scoped_to_tournament() {
        let pool = setup();
        let mut conn = pool.get().unwrap();
        let cup = tournaments::insert_tournament(&mut conn, "Cup").unwrap();
        let other = tournaments::insert_tournament(&mut conn, "Other").unwrap();
        let alice = players::insert_player(&mut conn, "Alice").unwrap();
        let bob = players::insert_player(&mut conn, "Bob").unwrap();

        let cup_alice = participants::insert_participant(&mut conn, cup.id, alice.id)
            .unwrap()
            .id;
        let cup_bob = participants::insert_participant(&mut conn, cup.id, bob.id)
            .unwrap()
            .id;
        let other_alice = participants::insert_participant(&mut conn, other.id, alice.id)
            .unwrap()
            .id;
        let other_bob = participants::insert_participant(&mut conn, other.id, bob.id)
            .unwrap()
            .id;

        games::insert_game(&mut conn, cup.id, cup_alice, cup_bob, 2, 0).unwrap();
        games::insert_game(&mut conn, other.id, other_alice, other_bob, 0, 2).unwrap();

        let standings = leaderboard(&mut conn, cup.id).unwrap();
        let alice_row = standings
            .entries
            .iter()
            .find(|e| e.player_name == "Alice")
            .unwrap();
        assert_eq!(alice_row.points, 2);
        assert_eq!(alice_row.games_played, 1);
    }
}
