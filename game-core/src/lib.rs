pub mod catalog;
pub mod feedback;
pub mod game_state;
pub mod hints;
pub mod scoring;
pub mod similarity;

// Re-export main components
pub use catalog::*;
pub use feedback::*;
pub use game_state::*;
pub use hints::*;
pub use scoring::*;
pub use similarity::*;
