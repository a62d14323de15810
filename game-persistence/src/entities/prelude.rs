pub use super::games::Entity as Games;
pub use super::guesses::Entity as Guesses;
pub use super::leaderboard::Entity as Leaderboard;
