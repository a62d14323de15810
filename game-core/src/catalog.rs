use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hint grouping for catalog blocks. Every block belongs to at most one
/// category; blocks listed under none of them fall into [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ores,
    Wood,
    Building,
    Nature,
    Decorative,
    Nether,
    End,
    Colored,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Ores,
        Category::Wood,
        Category::Building,
        Category::Nature,
        Category::Decorative,
        Category::Nether,
        Category::End,
        Category::Colored,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ores => "ores",
            Category::Wood => "wood",
            Category::Building => "building",
            Category::Nature => "nature",
            Category::Decorative => "decorative",
            Category::Nether => "nether",
            Category::End => "end",
            Category::Colored => "colored",
            Category::Other => "other",
        }
    }

    /// Blocks in this category. The lists are disjoint.
    pub fn items(&self) -> &'static [&'static str] {
        match self {
            Category::Ores => ORES,
            Category::Wood => WOOD,
            Category::Building => BUILDING,
            Category::Nature => NATURE,
            Category::Decorative => DECORATIVE,
            Category::Nether => NETHER,
            Category::End => END,
            Category::Colored => COLORED,
            Category::Other => UNCATEGORIZED,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ORES: &[&str] = &[
    "coal_ore",
    "iron_ore",
    "gold_ore",
    "diamond_ore",
    "emerald_ore",
    "lapis_ore",
    "redstone_ore",
    "copper_ore",
    "deepslate_diamond_ore",
    "deepslate_iron_ore",
    "diamond_block",
    "gold_block",
    "iron_block",
    "emerald_block",
];

const WOOD: &[&str] = &[
    "oak_planks",
    "spruce_planks",
    "birch_planks",
    "jungle_planks",
    "acacia_planks",
    "dark_oak_planks",
    "mangrove_planks",
    "cherry_planks",
    "oak_log",
    "spruce_log",
    "birch_log",
    "jungle_log",
    "acacia_log",
    "dark_oak_log",
    "mangrove_log",
    "cherry_log",
];

const BUILDING: &[&str] = &[
    "stone",
    "cobblestone",
    "granite",
    "diorite",
    "andesite",
    "deepslate",
    "stone_bricks",
    "mossy_cobblestone",
    "bricks",
    "smooth_stone",
    "sandstone",
    "polished_granite",
    "tuff",
    "calcite",
];

const NATURE: &[&str] = &[
    "grass_block",
    "dirt",
    "coarse_dirt",
    "podzol",
    "mycelium",
    "sand",
    "red_sand",
    "gravel",
    "clay",
    "snow_block",
    "ice",
    "packed_ice",
    "moss_block",
    "mud",
    "oak_leaves",
    "pumpkin",
    "melon",
];

const DECORATIVE: &[&str] = &[
    "glass",
    "bookshelf",
    "crafting_table",
    "furnace",
    "chest",
    "jukebox",
    "note_block",
    "sea_lantern",
    "glowstone",
    "lantern",
    "barrel",
    "anvil",
    "beacon",
];

const NETHER: &[&str] = &[
    "netherrack",
    "soul_sand",
    "soul_soil",
    "magma_block",
    "nether_bricks",
    "basalt",
    "blackstone",
    "crimson_planks",
    "warped_planks",
    "nether_wart_block",
    "ancient_debris",
    "nether_quartz_ore",
    "shroomlight",
];

const END: &[&str] = &[
    "end_stone",
    "end_stone_bricks",
    "purpur_block",
    "purpur_pillar",
    "obsidian",
    "crying_obsidian",
    "dragon_egg",
    "chorus_flower",
];

const COLORED: &[&str] = &[
    "white_wool",
    "red_wool",
    "blue_wool",
    "black_wool",
    "white_concrete",
    "red_concrete",
    "terracotta",
    "white_terracotta",
    "orange_terracotta",
    "red_stained_glass",
    "blue_stained_glass",
];

const UNCATEGORIZED: &[&str] = &[
    "bedrock",
    "sponge",
    "tnt",
    "slime_block",
    "honey_block",
    "hay_block",
    "target",
    "observer",
];

/// Reverse lookup of a block's category. Unknown names yield `Other`.
pub fn category_of(block: &str) -> Category {
    Category::ALL
        .iter()
        .copied()
        .filter(|category| *category != Category::Other)
        .find(|category| category.items().contains(&block))
        .unwrap_or(Category::Other)
}

/// Check if a block name is part of the catalog
pub fn is_valid_block(block: &str) -> bool {
    Category::ALL
        .iter()
        .any(|category| category.items().contains(&block))
}

/// Every catalog block, grouped by category in declaration order
pub fn all_blocks() -> Vec<&'static str> {
    Category::ALL
        .iter()
        .flat_map(|category| category.items().iter().copied())
        .collect()
}

/// Pick a block uniformly at random from the whole catalog
pub fn random_block<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let blocks = all_blocks();
    blocks[rng.gen_range(0..blocks.len())]
}
