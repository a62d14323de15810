use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use crate::catalog::{Category, category_of};

pub struct HintEngine;

impl HintEngine {
    /// Themed hints for a category, four per pool
    pub fn themed_hints(category: Category) -> &'static [&'static str; 4] {
        match category {
            Category::Ores => &[
                "Deep in the caves, this valuable treasure awaits!",
                "Miners dream of finding this precious block!",
                "You'll need an iron pickaxe or better to mine this one!",
                "This block sparkles with fortune beneath the surface!",
            ],
            Category::Wood => &[
                "Not wooden planks, but something more natural!",
                "This block grows tall in the forest!",
                "You're barking up the wrong tree with that guess!",
                "Nature's bounty, but not from the forest!",
            ],
            Category::Building => &[
                "A solid foundation for any build!",
                "This block is more fundamental than that!",
                "Many crafters use this as their base material!",
                "A classic building block, but not what you guessed!",
            ],
            Category::Nature => &[
                "Mother nature's touch in block form!",
                "You'll find this in the great outdoors!",
                "Natural beauty in cubic form!",
                "The wilderness holds this block's secret!",
            ],
            Category::Decorative => &[
                "This block adds function and style!",
                "More practical than purely decorative!",
                "Useful and beautiful in its own way!",
                "This block serves a special purpose!",
            ],
            Category::Nether => &[
                "This block brings hellish vibes!",
                "You'll need to venture into the Nether for this one!",
                "Hot and dangerous surroundings spawn this block!",
                "The Nether's secrets include this block!",
            ],
            Category::End => &[
                "Found in the realm of the Ender Dragon!",
                "This block comes from the void dimension!",
                "Journey to The End to find this one!",
                "Mysterious and alien in nature!",
            ],
            Category::Colored => &[
                "This block comes in many shades!",
                "Color isn't its main feature!",
                "You're thinking too decorative!",
                "Function over fashion with this block!",
            ],
            Category::Other => &[
                "Think outside the box!",
                "Not quite what you're imagining!",
                "You're on the wrong track!",
                "Try a different category entirely!",
            ],
        }
    }

    /// Pick a hint for `guess` against `target`, avoiding hints already
    /// issued in this game.
    ///
    /// Once every themed hint of the target's category has been used, the
    /// hint names the category outright. Players get a stronger clue as the
    /// game drags on.
    pub fn generate<R: Rng + ?Sized>(
        target: &str,
        guess: &str,
        previous_hints: &[String],
        rng: &mut R,
    ) -> String {
        let target_category = category_of(target);
        let issued: HashSet<&str> = previous_hints.iter().map(String::as_str).collect();

        let available: Vec<&str> = Self::themed_hints(target_category)
            .iter()
            .copied()
            .filter(|hint| !issued.contains(hint))
            .collect();

        match available.choose(rng) {
            Some(hint) => hint.to_string(),
            None => Self::fallback_hint(target_category, category_of(guess), rng),
        }
    }

    /// Category comparison hint used after the themed pool runs dry
    pub fn fallback_hint<R: Rng + ?Sized>(
        target_category: Category,
        guess_category: Category,
        rng: &mut R,
    ) -> String {
        match rng.gen_range(0..4) {
            0 => format!("Think {target_category} instead of {guess_category}!"),
            1 => format!("You might find this block in {target_category} areas."),
            2 => format!("This block belongs to the {target_category} family."),
            _ => format!("Look for something in the {target_category} category!"),
        }
    }

    /// Last-resort hint when hint generation itself failed. `None` means the
    /// target is not even known.
    pub fn generic_fallback(target: Option<&str>) -> String {
        let category = target.map_or("unknown", |block| category_of(block).as_str());
        format!("Look for something in the {category} category!")
    }

    pub fn is_themed_hint(hint: &str) -> bool {
        Category::ALL
            .iter()
            .any(|category| Self::themed_hints(*category).contains(&hint))
    }
}
