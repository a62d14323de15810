use game_types::Similarities;

const MATERIALS: &[&str] = &[
    "oak",
    "spruce",
    "birch",
    "jungle",
    "acacia",
    "dark_oak",
    "mangrove",
    "cherry",
    "stone",
    "deepslate",
    "nether",
];

const BLOCK_TYPES: &[&str] = &["planks", "log", "block", "ore", "bricks", "wool"];

pub struct SimilarityEngine;

impl SimilarityEngine {
    pub fn calculate(target: &str, guess: &str) -> Similarities {
        let shares = |vocabulary: &[&str]| {
            vocabulary
                .iter()
                .any(|token| target.contains(token) && guess.contains(token))
        };

        Similarities {
            material: shares(MATERIALS),
            block_type: shares(BLOCK_TYPES),
            variant: leading_token(target) == leading_token(guess),
        }
    }

    pub fn message(similarities: &Similarities) -> &'static str {
        if similarities.variant && similarities.block_type {
            "Very close! You've got the right variant and type!"
        } else if similarities.material && similarities.block_type {
            "Close! You've got the right material and type!"
        } else if similarities.material {
            "You're on the right track with the material!"
        } else if similarities.block_type {
            "Right type of block, wrong material!"
        } else {
            "Try something completely different!"
        }
    }
}

fn leading_token(block: &str) -> &str {
    block.split('_').next().unwrap_or(block)
}
