use game_types::LeaderboardEntry;

pub const MAX_ATTEMPTS: i32 = 6;
pub const POINTS_PER_GUESS: i32 = 100;

/// Result of a game that just transitioned into `completed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameCompletion {
    pub score_delta: i32,
    pub won: bool,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Points for a correct guess made with `attempts_before` attempts left
    pub fn points_for_correct_guess(attempts_before: i32) -> i32 {
        POINTS_PER_GUESS * attempts_before
    }

    /// Fold a completed game into a user's leaderboard entry.
    ///
    /// Streaks count consecutive won games; a loss resets the current streak
    /// and `best_streak` keeps the longest run seen.
    pub fn apply_completion(
        mut entry: LeaderboardEntry,
        completion: GameCompletion,
    ) -> LeaderboardEntry {
        entry.total_score += completion.score_delta;
        entry.games_played += 1;

        if completion.won {
            entry.games_won += 1;
            entry.current_streak += 1;
            entry.best_streak = entry.best_streak.max(entry.current_streak);
        } else {
            entry.current_streak = 0;
        }

        entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn win(score_delta: i32) -> GameCompletion {
        GameCompletion {
            score_delta,
            won: true,
        }
    }

    fn loss() -> GameCompletion {
        GameCompletion {
            score_delta: 0,
            won: false,
        }
    }

    #[test]
    fn test_points_scale_with_remaining_attempts() {
        assert_eq!(ScoringEngine::points_for_correct_guess(6), 600);
        assert_eq!(ScoringEngine::points_for_correct_guess(3), 300);
        assert_eq!(ScoringEngine::points_for_correct_guess(1), 100);
    }

    #[test]
    fn test_first_completion_creates_totals() {
        let entry = ScoringEngine::apply_completion(LeaderboardEntry::empty(Uuid::new_v4()), win(600));
        assert_eq!(entry.total_score, 600);
        assert_eq!(entry.games_played, 1);
        assert_eq!(entry.games_won, 1);
        assert_eq!(entry.best_streak, 1);
    }

    #[test]
    fn test_totals_accumulate_across_games() {
        let entry = LeaderboardEntry::empty(Uuid::new_v4());
        let entry = ScoringEngine::apply_completion(entry, win(600));
        let entry = ScoringEngine::apply_completion(entry, loss());
        assert_eq!(entry.total_score, 600);
        assert_eq!(entry.games_played, 2);
        assert_eq!(entry.games_won, 1);
    }

    #[test]
    fn test_streak_tracking() {
        let mut entry = LeaderboardEntry::empty(Uuid::new_v4());
        for completion in [win(100), win(200), loss(), win(300)] {
            entry = ScoringEngine::apply_completion(entry, completion);
        }
        assert_eq!(entry.current_streak, 1);
        assert_eq!(entry.best_streak, 2);
        assert_eq!(entry.total_score, 600);
        assert_eq!(entry.games_played, 4);
    }
}
