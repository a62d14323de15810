#![allow(dead_code)]

use game_core::Game;
use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

/// Deterministic RNG for reproducible hint and target selection
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a game with a specific target block
pub fn create_game_with_target(target: &str) -> Game {
    Game::with_target(Uuid::new_v4(), Uuid::new_v4(), target.to_string())
}

/// Plays the given guesses in order, stopping at the first rejected one
pub fn play_guesses(game: &mut Game, guesses: &[&str]) -> Vec<game_core::GuessOutcome> {
    guesses
        .iter()
        .map_while(|guess| game.submit_guess(guess).ok())
        .collect()
}

/// Guesses that are valid catalog blocks but never the given target
pub fn wrong_guesses(target: &str, count: usize) -> Vec<&'static str> {
    game_core::all_blocks()
        .into_iter()
        .filter(|block| *block != target)
        .take(count)
        .collect()
}
