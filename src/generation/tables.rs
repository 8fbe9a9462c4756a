//! # Quest Data Tables
//!
//! Fixed content pools for quest generation, keyed by category.
//!
//! Order within each table is significant: selection walks these slices, so
//! reordering an entry changes what a given seed produces.

use crate::{Category, ObjectiveType};

/// Mapping from objective type to the targets it may use.
pub type ObjectivePool = &'static [(ObjectiveType, &'static [&'static str])];

/// Break targets for categories without a dedicated pool.
pub const GENERAL_BREAK_TARGETS: &[&str] = &[
    "stone",
    "coal_ore",
    "iron_ore",
    "gold_ore",
    "diamond_ore",
    "deepslate_coal_ore",
    "deepslate_iron_ore",
    "deepslate_gold_ore",
    "deepslate_diamond_ore",
    "ancient_debris",
    "oak_log",
    "spruce_log",
    "birch_log",
    "jungle_log",
    "acacia_log",
    "dark_oak_log",
    "wheat",
    "carrots",
    "potatoes",
    "beetroots",
    "pumpkin",
    "melon",
];

/// Every hostile mob a kill objective can name.
pub const KILL_TARGETS: &[&str] = &[
    "zombie",
    "skeleton",
    "spider",
    "creeper",
    "enderman",
    "witch",
    "zombie_villager",
    "husk",
    "drowned",
    "stray",
    "phantom",
    "slime",
    "cave_spider",
    "blaze",
    "ghast",
    "magma_cube",
    "piglin",
    "hoglin",
    "wither_skeleton",
    "guardian",
    "elder_guardian",
    "pillager",
    "vindicator",
    "evoker",
    "ravager",
    "shulker",
    "ender_dragon",
    "wither",
];

/// Interact targets for categories without a dedicated pool.
pub const GENERAL_INTERACT_TARGETS: &[&str] = &[
    "crafting_table",
    "furnace",
    "blast_furnace",
    "smoker",
    "smithing_table",
    "cartography_table",
    "loom",
    "grindstone",
    "stonecutter",
    "enchanting_table",
    "anvil",
    "cauldron",
    "composter",
    "barrel",
    "chest",
    "shulker_box",
    "ender_chest",
    "beacon",
    "respawn_anchor",
    "lodestone",
    "water",
    "lava",
    "campfire",
    "soul_campfire",
    "brewing_stand",
    "oak_sign",
];

const MINING_BREAK_TARGETS: &[&str] = &[
    "stone",
    "coal_ore",
    "iron_ore",
    "gold_ore",
    "diamond_ore",
    "emerald_ore",
    "lapis_ore",
    "redstone_ore",
    "deepslate_coal_ore",
    "deepslate_iron_ore",
    "deepslate_gold_ore",
    "deepslate_diamond_ore",
    "deepslate_emerald_ore",
    "deepslate_lapis_ore",
    "deepslate_redstone_ore",
    "nether_gold_ore",
    "nether_quartz_ore",
    "ancient_debris",
    "obsidian",
];

const FARMING_BREAK_TARGETS: &[&str] = &[
    "wheat",
    "carrots",
    "potatoes",
    "beetroots",
    "pumpkin",
    "melon",
    "sugarcane",
    "bamboo",
    "cocoa",
    "nether_wart",
    "sweet_berry_bush",
    "kelp",
    "sea_pickle",
];

const EXPLORATION_INTERACT_TARGETS: &[&str] = &[
    "oak_sign",
    "spruce_sign",
    "birch_sign",
    "jungle_sign",
    "acacia_sign",
    "dark_oak_sign",
    "crimson_sign",
    "warped_sign",
    "lodestone",
    "respawn_anchor",
    "beacon",
    "dragon_egg",
];

const FISHING_INTERACT_TARGETS: &[&str] = &["water"];

const MINING_POOL: ObjectivePool = &[(ObjectiveType::Break, MINING_BREAK_TARGETS)];
const COMBAT_POOL: ObjectivePool = &[(ObjectiveType::Kill, KILL_TARGETS)];
const FARMING_POOL: ObjectivePool = &[(ObjectiveType::Break, FARMING_BREAK_TARGETS)];
const EXPLORATION_POOL: ObjectivePool = &[(ObjectiveType::Interact, EXPLORATION_INTERACT_TARGETS)];
const FISHING_POOL: ObjectivePool = &[(ObjectiveType::Interact, FISHING_INTERACT_TARGETS)];
const GENERAL_POOL: ObjectivePool = &[
    (ObjectiveType::Break, GENERAL_BREAK_TARGETS),
    (ObjectiveType::Kill, KILL_TARGETS),
    (ObjectiveType::Interact, GENERAL_INTERACT_TARGETS),
];

/// Returns the objective pool a category draws from.
///
/// `daily` and `special` quests mix all three objective types.
pub fn objective_pool(category: Category) -> ObjectivePool {
    match category {
        Category::Mining => MINING_POOL,
        Category::Combat => COMBAT_POOL,
        Category::Farming => FARMING_POOL,
        Category::Exploration => EXPLORATION_POOL,
        Category::Fishing => FISHING_POOL,
        Category::Daily | Category::Special => GENERAL_POOL,
    }
}

/// Quest title pool for a category.
pub fn titles(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mining => &[
            "The Deep Delver",
            "Mineral Hunter",
            "Stone Gatherer",
            "Coal Collector",
            "Iron Miner",
            "Gold Rush",
            "Diamond Seeker",
            "Emerald Excavator",
            "Obsidian Harvester",
            "Ancient Debris Hunter",
            "Deepslate Explorer",
            "The Quarry Master",
            "Ore Hunter",
            "The Prospector",
            "Gem Collector",
        ],
        Category::Combat => &[
            "Monster Slayer",
            "Zombie Hunter",
            "Spider Exterminator",
            "Skeleton Archer",
            "Creeper Bomber",
            "Nether Beast Hunter",
            "The Executioner",
            "Undead Slayer",
            "Mob Bounty Hunter",
            "The Exterminator",
            "Wither Hunter",
            "Dragon Slayer",
            "Beast Master",
            "Phantom Menace",
            "Guardian of the Sea",
        ],
        Category::Farming => &[
            "Crop Harvester",
            "Wheat Farmer",
            "Carrot Collector",
            "Potato Gatherer",
            "Beetroot Farmer",
            "Pumpkin Patch",
            "Melon Master",
            "Sugar Cane Farmer",
            "Bamboo Harvester",
            "Sweet Berry Picker",
            "Nether Wart Gatherer",
            "Mushroom Collector",
            "Kelp Farmer",
            "Master Gardener",
            "Orchard Keeper",
        ],
        Category::Exploration => &[
            "World Traveler",
            "Treasure Hunter",
            "Monument Explorer",
            "Village Visitor",
            "Nether Explorer",
            "End Adventurer",
            "Sign Collector",
            "Beacon Builder",
            "Respawn Point Maker",
            "Outpost Infiltrator",
            "Mansion Explorer",
            "Ancient City Explorer",
            "Trail Runner",
            "Desert Nomad",
            "Arctic Explorer",
        ],
        Category::Fishing => &[
            "Master Angler",
            "Treasure Fisher",
            "Deep Sea Catcher",
            "Lake Fisherman",
            "River Angler",
            "Rare Fish Collector",
            "Ocean Harvester",
            "Fishing Champion",
            "Enchanted Catcher",
            "Sea Scavenger",
            "Tropical Fisher",
            "Ice Fisher",
            "Midnight Angler",
            "Dawn Fisher",
            "Twilight Caster",
        ],
        Category::Daily => &[
            "Daily Miner",
            "Daily Hunter",
            "Daily Farmer",
            "Daily Fisher",
            "Daily Explorer",
            "Daily Crafting",
            "Daily Build",
            "Daily Enchanter",
            "Daily Brewer",
            "Daily Challenge",
            "Morning Task",
            "Afternoon Activity",
            "Evening Quest",
            "Night Mission",
            "Dawn Patrol",
        ],
        Category::Special => &[
            "Welcome to the Server",
            "Server Anniversary",
            "Holiday Special",
            "Dragon Hunter",
            "Wither Challenger",
            "Ancient Building",
            "Master of All Trades",
            "The Final Challenge",
            "Legendary Quest",
            "Hero's Journey",
            "Epic Adventure",
            "Unique Discovery",
            "Ultimate Challenge",
            "Special Event",
            "Limited Time Offer",
            "Seasonal Special",
        ],
    }
}

/// Quest description pool for a category.
pub fn descriptions(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mining => &[
            "Delve deep into the caves and collect valuable minerals.",
            "The blacksmith needs special ores. Can you help?",
            "Put your mining skills to use by collecting these rare materials.",
            "Test your mining prowess by gathering these valuable resources.",
            "The kingdom needs these materials for construction. Will you answer the call?",
            "Rare minerals are needed for a special project. Are you up to the task?",
        ],
        Category::Combat => &[
            "These monsters have been causing trouble. Eliminate them!",
            "Prove your combat skills by defeating these enemies.",
            "The village is under attack! Help defend it by slaying these creatures.",
            "A bounty has been placed on these monsters. Can you claim it?",
            "These creatures are a threat to the kingdom. Will you help remove them?",
            "Test your fighting abilities against these formidable foes.",
        ],
        Category::Farming => &[
            "The village needs food supplies. Can you harvest these crops?",
            "Show off your farming skills by gathering these plants.",
            "A feast is being prepared and your crops are needed!",
            "Fresh produce is required for the upcoming market day.",
            "The kingdom faces food shortages. Your farming skills are needed!",
            "Demonstrate your green thumb by harvesting these crops.",
        ],
        Category::Exploration => &[
            "Venture into the unknown and discover hidden places.",
            "Find and interact with these special locations around the world.",
            "Chart unexplored territories by visiting these landmarks.",
            "Important information is hidden throughout the land. Can you find it?",
            "Ancient secrets await those brave enough to explore.",
            "An expedition is underway, and your exploration skills are needed!",
        ],
        Category::Fishing => &[
            "Test your fishing skills in the waters around the kingdom.",
            "The local chef needs fresh fish for a special recipe.",
            "Cast your line and see what treasures you can reel in!",
            "A fishing competition is happening - show off your angling skills!",
            "Rare aquatic treasures are waiting to be caught. Are you skilled enough?",
            "The royal table requires the finest fish. Can you provide them?",
        ],
        Category::Daily => &[
            "Complete these tasks before the day is done!",
            "A new day brings new challenges. Can you complete them all?",
            "Daily tasks to keep the kingdom running smoothly.",
            "The morning's tasks await a skilled adventurer like yourself.",
            "Today's challenges require your unique abilities.",
            "Each day brings opportunities to prove your worth!",
        ],
        Category::Special => &[
            "A rare opportunity for the most skilled adventurers!",
            "Only the bravest dare attempt this special challenge.",
            "A unique quest that tests all your abilities!",
            "This special task comes with great rewards for those who succeed.",
            "A once-in-a-lifetime adventure awaits!",
            "The kingdom calls upon its greatest heroes for this special mission.",
        ],
    }
}

/// Items a quest of this category may hand out.
pub fn reward_items(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mining => &["iron_pickaxe", "diamond", "iron_ingot", "gold_ingot", "emerald"],
        Category::Combat => &["iron_sword", "bow", "arrow", "shield", "golden_apple"],
        Category::Farming => &["bread", "golden_carrot", "apple", "cake", "pumpkin_pie"],
        Category::Exploration => &["map", "compass", "spyglass", "ender_pearl", "elytra"],
        Category::Fishing => &[
            "fishing_rod",
            "nautilus_shell",
            "tropical_fish",
            "pufferfish",
            "sea_pickle",
        ],
        Category::Daily => &[
            "experience_bottle",
            "iron_ingot",
            "emerald",
            "diamond",
            "golden_apple",
        ],
        Category::Special => &[
            "diamond_sword",
            "diamond_pickaxe",
            "diamond_axe",
            "enchanted_golden_apple",
            "dragon_egg",
        ],
    }
}

/// Console commands special quests may run on completion.
pub const SPECIAL_COMMANDS: &[&str] = &[
    "effect give %player% regeneration 30 1",
    "give %player% diamond 5",
    "give %player% enchanted_golden_apple 1",
    "give %player% experience_bottle 10",
    "broadcast %player% has completed a special quest!",
    "lp user %player% permission set special.quest true",
];

/// The lone command occasionally attached to non-special quests.
pub const COMMON_COMMAND: &str = "effect give %player% regeneration 30 1";

/// Cooldown used by every daily quest.
pub const DAILY_COOLDOWN_HOURS: u32 = 24;

/// Cooldown choices for special quests: two days, three days, a week.
pub const SPECIAL_COOLDOWN_HOURS: &[u32] = &[48, 72, 168];

/// Cooldown choices for all other categories.
pub const COMMON_COOLDOWN_HOURS: &[u32] = &[24, 48, 72];
