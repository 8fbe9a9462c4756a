//! # Quest Generation
//!
//! Randomized quest generation with per-run uniqueness tracking.
//!
//! Each quest is built in a fixed sequence of random draws: category, id,
//! title, description, repeat policy, objectives, then rewards. Keeping that
//! order stable is what makes a seed reproduce the same document.

use super::tables::{self, ObjectivePool};
use super::utils::{humanize, pick, roll, weighted_category};
use crate::{
    Category, GenerationConfig, Generator, Objective, ObjectiveType, Quest, QuestCollection,
    QuestGenError, QuestGenResult, RewardBundle, RewardValue,
};
use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Generates a batch of quests from the built-in tables.
#[derive(Debug, Clone)]
pub struct QuestGenerator {
    /// Lower bound on objectives per quest
    pub min_objectives: usize,
    /// Upper bound on objectives per quest
    pub max_objectives: usize,
    /// Upper bound on item or command entries in one reward
    pub max_reward_entries: usize,
}

/// Ids and titles already handed out during one run.
#[derive(Debug, Default)]
struct RunState {
    used_ids: HashSet<String>,
    used_titles: HashSet<String>,
}

impl Default for QuestGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestGenerator {
    /// Creates a generator producing 1-3 objectives and up to 3 reward entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use questgen::{GenerationConfig, Generator, QuestGenerator};
    /// use questgen::generation::utils::create_rng;
    ///
    /// let config = GenerationConfig::for_testing(42);
    /// let mut rng = create_rng(&config);
    /// let quests = QuestGenerator::new().generate(&config, &mut rng).unwrap();
    /// assert_eq!(quests.len(), 10);
    /// ```
    pub fn new() -> Self {
        Self {
            min_objectives: 1,
            max_objectives: 3,
            max_reward_entries: 3,
        }
    }

    fn choose_category(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> QuestGenResult<Category> {
        match config.forced_category {
            Some(category) => Ok(category),
            None => weighted_category(rng),
        }
    }

    /// Builds `{category}_{n}` and suffixes a counter until it is unused.
    ///
    /// Returns the id together with the final counter, which also
    /// disambiguates titles once a title pool runs dry.
    fn allocate_id(
        category: Category,
        index: usize,
        used_ids: &mut HashSet<String>,
    ) -> (String, u32) {
        let base = format!("{}_{}", category, index + 1);
        let mut id = base.clone();
        let mut counter = 1;
        while used_ids.contains(&id) {
            id = format!("{}_{}", base, counter);
            counter += 1;
        }
        used_ids.insert(id.clone());
        (id, counter)
    }

    /// Prefers an unused title from the pool; once the pool is exhausted,
    /// reuses a pool title with a numeric suffix.
    fn choose_title(
        category: Category,
        counter: u32,
        used_titles: &mut HashSet<String>,
        rng: &mut StdRng,
    ) -> QuestGenResult<String> {
        let pool = tables::titles(category);
        let available: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|title| !used_titles.contains(*title))
            .collect();

        let title = if available.is_empty() {
            let base = pick(rng, pool, "titles")?;
            let mut suffix = counter;
            let mut title = format!("{} {}", base, suffix);
            while used_titles.contains(&title) {
                suffix += 1;
                title = format!("{} {}", base, suffix);
            }
            warn!("Title pool for {} exhausted, using '{}'", category, title);
            title
        } else {
            pick(rng, &available, "titles")?.to_string()
        };

        used_titles.insert(title.clone());
        Ok(title)
    }

    /// Decides whether a quest is repeatable and its cooldown in hours.
    fn repeat_policy(
        category: Category,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> QuestGenResult<(bool, u32)> {
        match category {
            Category::Daily => Ok((true, tables::DAILY_COOLDOWN_HOURS)),
            Category::Special => {
                let repeatable = roll(rng, config.special_repeatable_chance);
                let cooldown = *pick(rng, tables::SPECIAL_COOLDOWN_HOURS, "cooldowns")?;
                Ok((repeatable, cooldown))
            }
            _ => {
                let repeatable = roll(rng, config.common_repeatable_chance);
                let cooldown = *pick(rng, tables::COMMON_COOLDOWN_HOURS, "cooldowns")?;
                Ok((repeatable, cooldown))
            }
        }
    }

    /// Picks an objective type and a target not yet used in this quest.
    ///
    /// When the drawn type has nothing left, the first other type with
    /// unused targets is taken instead. If every type is exhausted the drawn
    /// type's full pool is used again, so a target can repeat.
    fn choose_target(
        pool: ObjectivePool,
        used_targets: &HashSet<&'static str>,
        rng: &mut StdRng,
    ) -> QuestGenResult<(ObjectiveType, &'static str)> {
        let unused = |targets: &'static [&'static str]| -> Vec<&'static str> {
            targets
                .iter()
                .copied()
                .filter(|target| !used_targets.contains(target))
                .collect()
        };

        let &(drawn_type, drawn_targets) = pick(rng, pool, "objective types")?;
        let mut objective_type = drawn_type;
        let mut available = unused(drawn_targets);

        if available.is_empty() {
            let alternative = pool
                .iter()
                .filter(|(candidate, _)| *candidate != drawn_type)
                .map(|&(candidate, targets)| (candidate, unused(targets)))
                .find(|(_, targets)| !targets.is_empty());

            match alternative {
                Some((candidate, targets)) => {
                    trace!(
                        "Falling back from {} to {} objectives",
                        drawn_type,
                        candidate
                    );
                    objective_type = candidate;
                    available = targets;
                }
                None => {
                    debug!("All {} targets used, allowing a repeat", drawn_type);
                    available = drawn_targets.to_vec();
                }
            }
        }

        let target = *pick(rng, &available, "targets")?;
        Ok((objective_type, target))
    }

    /// Builds one objective for a fixed type and target, drawing its amount.
    ///
    /// # Examples
    ///
    /// ```
    /// use questgen::{Category, ObjectiveType, QuestGenerator};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(5);
    /// let objective = QuestGenerator::build_objective(
    ///     Category::Combat,
    ///     ObjectiveType::Kill,
    ///     "wither",
    ///     &mut rng,
    /// );
    /// assert_eq!(objective.amount, 1);
    /// assert_eq!(objective.description, "Defeat the wither");
    /// ```
    pub fn build_objective(
        category: Category,
        objective_type: ObjectiveType,
        target: &str,
        rng: &mut StdRng,
    ) -> Objective {
        let amount = objective_amount(objective_type, target, rng);
        Objective {
            objective_type,
            target: target.to_string(),
            amount,
            description: describe_objective(category, objective_type, target, amount),
        }
    }

    fn generate_objectives(
        &self,
        category: Category,
        rng: &mut StdRng,
    ) -> QuestGenResult<IndexMap<String, Objective>> {
        let pool = tables::objective_pool(category);
        let count = rng.gen_range(self.min_objectives..=self.max_objectives);
        let mut used_targets = HashSet::new();
        let mut objectives = IndexMap::with_capacity(count);

        for slot in 0..count {
            let (objective_type, target) = Self::choose_target(pool, &used_targets, rng)?;
            used_targets.insert(target);
            objectives.insert(
                format!("obj{}", slot + 1),
                Self::build_objective(category, objective_type, target, rng),
            );
        }

        Ok(objectives)
    }

    /// Picks between 1 and `max_reward_entries` distinct entries from `pool`.
    fn sample_entries(&self, pool: &[&str], rng: &mut StdRng) -> Option<RewardValue> {
        let upper = pool.len().min(self.max_reward_entries);
        if upper == 0 {
            return None;
        }
        let count = rng.gen_range(1..=upper);
        let entries = pool
            .choose_multiple(rng, count)
            .map(|entry| entry.to_string())
            .collect();
        RewardValue::from_entries(entries)
    }

    /// Builds the reward bundle; money and experience scale with the number
    /// of objectives outside the daily and special categories.
    fn generate_rewards(
        &self,
        category: Category,
        objective_count: usize,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> RewardBundle {
        let scale = objective_count as u32 + 1;
        let mut rewards = RewardBundle::default();

        if roll(rng, config.money_chance) {
            rewards.money = Some(match category {
                Category::Special => rng.gen_range(500..=10_000),
                Category::Daily => rng.gen_range(100..=500),
                _ => rng.gen_range(50..=300) * scale,
            });
        }

        if roll(rng, config.experience_chance) {
            rewards.experience = Some(match category {
                Category::Special => rng.gen_range(250..=5_000),
                Category::Daily => rng.gen_range(50..=250),
                _ => rng.gen_range(25..=150) * scale,
            });
        }

        if roll(rng, config.item_chance) {
            rewards.item = self.sample_entries(tables::reward_items(category), rng);
        }

        if category == Category::Special && roll(rng, config.special_command_chance) {
            rewards.command = self.sample_entries(tables::SPECIAL_COMMANDS, rng);
        } else if roll(rng, config.common_command_chance) {
            rewards.command = Some(RewardValue::Single(tables::COMMON_COMMAND.to_string()));
        }

        rewards
    }

    fn generate_quest(
        &self,
        index: usize,
        config: &GenerationConfig,
        state: &mut RunState,
        rng: &mut StdRng,
    ) -> QuestGenResult<(String, Quest)> {
        let category = self.choose_category(config, rng)?;
        let (id, counter) = Self::allocate_id(category, index, &mut state.used_ids);
        let title = Self::choose_title(category, counter, &mut state.used_titles, rng)?;
        let description = pick(rng, tables::descriptions(category), "descriptions")?.to_string();
        let (repeatable, cooldown_hours) = Self::repeat_policy(category, config, rng)?;
        let objectives = self.generate_objectives(category, rng)?;
        let rewards = self.generate_rewards(category, objectives.len(), config, rng);

        debug!(
            "Generated {} '{}' with {} objectives",
            id,
            title,
            objectives.len()
        );

        Ok((
            id,
            Quest {
                title,
                description,
                category,
                repeatable,
                cooldown_hours,
                objectives,
                rewards,
            },
        ))
    }
}

impl Generator<QuestCollection> for QuestGenerator {
    fn generate(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> QuestGenResult<QuestCollection> {
        config.validate()?;
        if self.min_objectives == 0 || self.min_objectives > self.max_objectives {
            return Err(QuestGenError::InvalidConfig(format!(
                "objective range {}..={} is empty",
                self.min_objectives, self.max_objectives
            )));
        }

        if config.quest_count < 0 {
            warn!(
                "Negative quest count {}, generating none",
                config.quest_count
            );
        }
        let count = config.effective_count();
        info!("{} generating {} quests", self.generator_type(), count);

        let mut collection = QuestCollection::new(config.settings.clone());
        let mut state = RunState::default();

        for index in 0..count {
            let (id, quest) = self.generate_quest(index, config, &mut state, rng)?;
            collection.insert(id, quest)?;
        }

        self.validate(&collection, config)?;
        Ok(collection)
    }

    fn validate(
        &self,
        content: &QuestCollection,
        config: &GenerationConfig,
    ) -> QuestGenResult<()> {
        let expected = config.effective_count();
        if content.len() != expected {
            return Err(QuestGenError::GenerationFailed(format!(
                "expected {} quests, found {}",
                expected,
                content.len()
            )));
        }

        let mut titles = HashSet::new();
        for (id, quest) in &content.quests {
            let fail = |reason: &str| -> QuestGenResult<()> {
                Err(QuestGenError::GenerationFailed(format!(
                    "quest {}: {}",
                    id, reason
                )))
            };

            if !titles.insert(quest.title.as_str()) {
                return fail("title is not unique");
            }
            if quest.objectives.len() < self.min_objectives
                || quest.objectives.len() > self.max_objectives
            {
                return fail("objective count out of range");
            }
            if quest.category == Category::Daily
                && !(quest.repeatable && quest.cooldown_hours == tables::DAILY_COOLDOWN_HOURS)
            {
                return fail("daily quest must repeat every day");
            }
            if quest.objectives.len() <= distinct_targets(quest.category)
                && !quest.has_unique_targets()
            {
                return fail("objective targets repeat");
            }
            let rewards_distinct = [&quest.rewards.item, &quest.rewards.command]
                .into_iter()
                .flatten()
                .all(RewardValue::is_distinct);
            if !rewards_distinct {
                return fail("reward entries repeat");
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "QuestGenerator"
    }
}

/// Number of different targets a category's objective pool offers.
pub fn distinct_targets(category: Category) -> usize {
    tables::objective_pool(category)
        .iter()
        .flat_map(|(_, targets)| targets.iter())
        .collect::<HashSet<_>>()
        .len()
}

/// Draws an objective amount from the tier its target belongs to.
///
/// Rarer ores and tougher mobs ask for smaller amounts; bosses are always
/// a single kill.
pub fn objective_amount(
    objective_type: ObjectiveType,
    target: &str,
    rng: &mut StdRng,
) -> u32 {
    match objective_type {
        ObjectiveType::Break => match target {
            "diamond_ore" | "ancient_debris" | "emerald_ore" => rng.gen_range(3..=8),
            "gold_ore" | "redstone_ore" | "lapis_ore" => rng.gen_range(8..=16),
            "iron_ore" | "coal_ore" => rng.gen_range(16..=32),
            _ if target.contains("deepslate") => rng.gen_range(8..=24),
            "stone" => rng.gen_range(64..=128),
            "pumpkin" | "melon" => rng.gen_range(8..=16),
            _ => rng.gen_range(16..=48),
        },
        ObjectiveType::Kill => match target {
            "ender_dragon" | "wither" => 1,
            "elder_guardian" | "ravager" | "evoker" => rng.gen_range(1..=3),
            "blaze" | "enderman" | "witch" | "phantom" => rng.gen_range(5..=15),
            _ => rng.gen_range(15..=30),
        },
        ObjectiveType::Interact => match target {
            "enchanting_table" | "anvil" | "beacon" => rng.gen_range(1..=5),
            "water" => rng.gen_range(10..=25),
            _ => rng.gen_range(1..=10),
        },
    }
}

/// Renders the player-facing line for an objective.
///
/// # Examples
///
/// ```
/// use questgen::{describe_objective, Category, ObjectiveType};
///
/// assert_eq!(
///     describe_objective(Category::Mining, ObjectiveType::Break, "iron_ore", 20),
///     "Mine 20 iron ore"
/// );
/// assert_eq!(
///     describe_objective(Category::Fishing, ObjectiveType::Interact, "water", 12),
///     "Catch 12 fish"
/// );
/// ```
pub fn describe_objective(
    category: Category,
    objective_type: ObjectiveType,
    target: &str,
    amount: u32,
) -> String {
    let name = humanize(target);
    match objective_type {
        ObjectiveType::Break => format!("Mine {} {}", amount, name),
        ObjectiveType::Kill if amount == 1 => format!("Defeat the {}", name),
        ObjectiveType::Kill => format!("Kill {} {}s", amount, name),
        ObjectiveType::Interact if target == "water" && category == Category::Fishing => {
            format!("Catch {} fish", amount)
        }
        ObjectiveType::Interact => format!("Interact with {} {}", amount, name),
    }
}

/// Generates `count` quests with default settings; a count of zero or less
/// yields an empty collection.
pub fn generate_quests(count: i64, rng: &mut StdRng) -> QuestGenResult<QuestCollection> {
    let config = GenerationConfig {
        quest_count: count,
        ..GenerationConfig::default()
    };
    QuestGenerator::new().generate(&config, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils::create_rng;
    use rand::SeedableRng;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_allocate_id_suffixes_collisions() {
        let mut used = HashSet::new();
        let (first, counter) = QuestGenerator::allocate_id(Category::Mining, 0, &mut used);
        assert_eq!(first, "mining_1");
        assert_eq!(counter, 1);

        let (second, counter) = QuestGenerator::allocate_id(Category::Mining, 0, &mut used);
        assert_eq!(second, "mining_1_1");
        assert_eq!(counter, 2);

        let (third, _) = QuestGenerator::allocate_id(Category::Mining, 0, &mut used);
        assert_eq!(third, "mining_1_2");
    }

    #[test]
    fn test_title_pool_exhaustion_appends_counter() {
        let mut rng = rng(11);
        let mut used: HashSet<String> = tables::titles(Category::Daily)
            .iter()
            .map(|title| title.to_string())
            .collect();

        let title =
            QuestGenerator::choose_title(Category::Daily, 1, &mut used, &mut rng).unwrap();
        assert!(title.ends_with(" 1"));
        let base = title.trim_end_matches(" 1");
        assert!(tables::titles(Category::Daily).contains(&base));

        // The same base would collide again; the suffix keeps climbing instead
        for _ in 0..40 {
            QuestGenerator::choose_title(Category::Daily, 1, &mut used, &mut rng).unwrap();
        }
        assert_eq!(used.len(), tables::titles(Category::Daily).len() + 41);
    }

    #[test]
    fn test_daily_policy_is_fixed() {
        let config = GenerationConfig::default();
        let mut rng = rng(3);
        for _ in 0..20 {
            let policy =
                QuestGenerator::repeat_policy(Category::Daily, &config, &mut rng).unwrap();
            assert_eq!(policy, (true, 24));
        }
    }

    #[test]
    fn test_special_cooldowns_are_long() {
        let config = GenerationConfig::default();
        let mut rng = rng(4);
        for _ in 0..50 {
            let (_, cooldown) =
                QuestGenerator::repeat_policy(Category::Special, &config, &mut rng).unwrap();
            assert!(tables::SPECIAL_COOLDOWN_HOURS.contains(&cooldown));
        }
    }

    #[test]
    fn test_choose_target_falls_back_to_other_type() {
        let pool = tables::objective_pool(Category::Daily);
        let mut used: HashSet<&'static str> = HashSet::new();
        used.extend(tables::GENERAL_BREAK_TARGETS.iter().copied());
        used.extend(tables::KILL_TARGETS.iter().copied());

        let mut rng = rng(8);
        for _ in 0..20 {
            let (objective_type, target) =
                QuestGenerator::choose_target(pool, &used, &mut rng).unwrap();
            assert_eq!(objective_type, ObjectiveType::Interact);
            assert!(!used.contains(target));
        }
    }

    #[test]
    fn test_choose_target_reuses_when_everything_is_used() {
        let pool = tables::objective_pool(Category::Fishing);
        let used: HashSet<&'static str> = ["water"].into_iter().collect();
        let mut rng = rng(9);

        let (objective_type, target) =
            QuestGenerator::choose_target(pool, &used, &mut rng).unwrap();
        assert_eq!(objective_type, ObjectiveType::Interact);
        assert_eq!(target, "water");
    }

    #[test]
    fn test_amount_tiers() {
        let mut rng = rng(21);
        for _ in 0..200 {
            let stone = objective_amount(ObjectiveType::Break, "stone", &mut rng);
            assert!((64..=128).contains(&stone));
            let diamond = objective_amount(ObjectiveType::Break, "diamond_ore", &mut rng);
            assert!((3..=8).contains(&diamond));
            let deepslate =
                objective_amount(ObjectiveType::Break, "deepslate_emerald_ore", &mut rng);
            assert!((8..=24).contains(&deepslate));
            let crop = objective_amount(ObjectiveType::Break, "wheat", &mut rng);
            assert!((16..=48).contains(&crop));
            let melon = objective_amount(ObjectiveType::Break, "melon", &mut rng);
            assert!((8..=16).contains(&melon));

            assert_eq!(
                objective_amount(ObjectiveType::Kill, "ender_dragon", &mut rng),
                1
            );
            let evoker = objective_amount(ObjectiveType::Kill, "evoker", &mut rng);
            assert!((1..=3).contains(&evoker));
            let blaze = objective_amount(ObjectiveType::Kill, "blaze", &mut rng);
            assert!((5..=15).contains(&blaze));
            let zombie = objective_amount(ObjectiveType::Kill, "zombie", &mut rng);
            assert!((15..=30).contains(&zombie));

            let beacon = objective_amount(ObjectiveType::Interact, "beacon", &mut rng);
            assert!((1..=5).contains(&beacon));
            let water = objective_amount(ObjectiveType::Interact, "water", &mut rng);
            assert!((10..=25).contains(&water));
            let chest = objective_amount(ObjectiveType::Interact, "chest", &mut rng);
            assert!((1..=10).contains(&chest));
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            describe_objective(Category::Combat, ObjectiveType::Kill, "cave_spider", 20),
            "Kill 20 cave spiders"
        );
        assert_eq!(
            describe_objective(Category::Special, ObjectiveType::Kill, "ender_dragon", 1),
            "Defeat the ender dragon"
        );
        assert_eq!(
            describe_objective(Category::Daily, ObjectiveType::Interact, "water", 4),
            "Interact with 4 water"
        );
        assert_eq!(
            describe_objective(
                Category::Exploration,
                ObjectiveType::Interact,
                "dark_oak_sign",
                3
            ),
            "Interact with 3 dark oak sign"
        );
    }

    #[test]
    fn test_forced_mining_break_stone() {
        let mut rng = rng(77);
        let objective = QuestGenerator::build_objective(
            Category::Mining,
            ObjectiveType::Break,
            "stone",
            &mut rng,
        );
        assert!((64..=128).contains(&objective.amount));
        assert_eq!(
            objective.description,
            format!("Mine {} stone", objective.amount)
        );
    }

    #[test]
    fn test_forced_category_generation() {
        let mut config = GenerationConfig::for_testing(5);
        config.forced_category = Some(Category::Mining);
        config.quest_count = 1;

        let mut rng = create_rng(&config);
        let collection = QuestGenerator::new().generate(&config, &mut rng).unwrap();
        let (id, quest) = collection.quests.first().unwrap();

        assert_eq!(id, "mining_1");
        assert_eq!(quest.category, Category::Mining);
        for objective in quest.objectives.values() {
            assert_eq!(objective.objective_type, ObjectiveType::Break);
            assert!(objective.description.starts_with("Mine "));
        }
    }

    #[test]
    fn test_rewards_with_certain_chances() {
        let mut config = GenerationConfig::default();
        config.money_chance = 1.0;
        config.experience_chance = 1.0;
        config.item_chance = 1.0;
        config.special_command_chance = 1.0;

        let generator = QuestGenerator::new();
        let mut rng = rng(13);
        for _ in 0..50 {
            let rewards = generator.generate_rewards(Category::Mining, 2, &config, &mut rng);
            let money = rewards.money.unwrap();
            assert!(money % 3 == 0 && (150..=900).contains(&money));
            let xp = rewards.experience.unwrap();
            assert!(xp % 3 == 0 && (75..=450).contains(&xp));
            let item = rewards.item.unwrap();
            assert!(item.len() <= 3 && item.is_distinct());

            let special = generator.generate_rewards(Category::Special, 1, &config, &mut rng);
            let command = special.command.unwrap();
            assert!(command.is_distinct());
            assert!(command
                .entries()
                .iter()
                .all(|entry| tables::SPECIAL_COMMANDS.contains(entry)));
        }
    }

    #[test]
    fn test_rewards_with_zero_chances() {
        let config = GenerationConfig {
            money_chance: 0.0,
            experience_chance: 0.0,
            item_chance: 0.0,
            special_command_chance: 0.0,
            common_command_chance: 0.0,
            ..GenerationConfig::default()
        };

        let generator = QuestGenerator::new();
        let mut rng = rng(14);
        for category in Category::ALL {
            assert!(generator
                .generate_rewards(category, 3, &config, &mut rng)
                .is_empty());
        }
    }

    #[test]
    fn test_common_command_is_single() {
        let config = GenerationConfig {
            common_command_chance: 1.0,
            ..GenerationConfig::default()
        };
        let generator = QuestGenerator::new();
        let mut rng = rng(15);
        let rewards = generator.generate_rewards(Category::Farming, 1, &config, &mut rng);
        assert_eq!(
            rewards.command,
            Some(RewardValue::Single(tables::COMMON_COMMAND.to_string()))
        );
    }

    #[test]
    fn test_special_falls_through_to_common_command() {
        let config = GenerationConfig {
            special_command_chance: 0.0,
            common_command_chance: 1.0,
            ..GenerationConfig::default()
        };
        let generator = QuestGenerator::new();
        let mut rng = rng(16);
        for _ in 0..20 {
            let rewards = generator.generate_rewards(Category::Special, 2, &config, &mut rng);
            assert_eq!(
                rewards.command,
                Some(RewardValue::Single(tables::COMMON_COMMAND.to_string()))
            );
        }
    }

    #[test]
    fn test_generator_type() {
        assert_eq!(QuestGenerator::new().generator_type(), "QuestGenerator");
    }

    #[test]
    fn test_negative_count_is_empty() {
        let mut rng = rng(1);
        let collection = generate_quests(-3, &mut rng).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_invalid_objective_range() {
        let generator = QuestGenerator {
            min_objectives: 3,
            max_objectives: 1,
            max_reward_entries: 3,
        };
        let config = GenerationConfig::for_testing(1);
        let mut rng = create_rng(&config);
        assert!(generator.generate(&config, &mut rng).is_err());
    }

    #[test]
    fn test_distinct_targets() {
        assert_eq!(distinct_targets(Category::Fishing), 1);
        assert_eq!(
            distinct_targets(Category::Combat),
            tables::KILL_TARGETS.len()
        );
    }
}
