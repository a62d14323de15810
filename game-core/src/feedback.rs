use serde::{Deserialize, Serialize};
use std::str::FromStr;

use game_types::GuessFeedback;

use crate::similarity::SimilarityEngine;

/// Which feedback model a deployment uses. The two are never mixed within a
/// game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMode {
    /// Themed hints keyed by the target's category
    #[default]
    Category,
    /// Material/type/variant flags with a fixed message
    Similarity,
}

impl FromStr for FeedbackMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "category" => Ok(FeedbackMode::Category),
            "similarity" => Ok(FeedbackMode::Similarity),
            other => Err(format!("unknown feedback mode: {other}")),
        }
    }
}

pub fn similarity_feedback(target: &str, guess: &str) -> GuessFeedback {
    let similarities = SimilarityEngine::calculate(target, guess);
    GuessFeedback {
        is_correct: target == guess,
        hint: SimilarityEngine::message(&similarities).to_string(),
        similarities: Some(similarities),
    }
}

pub fn category_feedback(target: &str, guess: &str, hint: String) -> GuessFeedback {
    GuessFeedback {
        is_correct: target == guess,
        hint,
        similarities: None,
    }
}
