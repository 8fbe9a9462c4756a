//! # Quest Module
//!
//! The quest data model shared by the generator and the output writers.
//!
//! Every type here derives serde traits so the whole collection can be handed
//! to a serializer as-is. Field order in the structs is the field order in the
//! written document, and the maps are insertion ordered, so output stays
//! stable and readable.

pub mod rewards;

pub use rewards::*;

use crate::{QuestGenError, QuestGenResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quest categories, each with its own title, description, objective and
/// reward pools.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mining,
    Combat,
    Farming,
    Exploration,
    Fishing,
    Daily,
    Special,
}

impl Category {
    /// All categories in selection-table order.
    pub const ALL: [Category; 7] = [
        Category::Mining,
        Category::Combat,
        Category::Farming,
        Category::Exploration,
        Category::Fishing,
        Category::Daily,
        Category::Special,
    ];

    /// Relative weight used when drawing a category for a new quest.
    ///
    /// # Examples
    ///
    /// ```
    /// use questgen::Category;
    ///
    /// assert_eq!(Category::Daily.weight(), 4);
    /// assert_eq!(Category::Special.weight(), 1);
    /// ```
    pub fn weight(self) -> u32 {
        match self {
            Category::Mining | Category::Combat => 3,
            Category::Farming | Category::Exploration | Category::Fishing => 2,
            Category::Daily => 4,
            Category::Special => 1,
        }
    }

    /// Lowercase name, as used in quest ids and the written config.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mining => "mining",
            Category::Combat => "combat",
            Category::Farming => "farming",
            Category::Exploration => "exploration",
            Category::Fishing => "fishing",
            Category::Daily => "daily",
            Category::Special => "special",
        }
    }

    /// Capitalized name for human-facing summaries.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Mining => "Mining",
            Category::Combat => "Combat",
            Category::Farming => "Farming",
            Category::Exploration => "Exploration",
            Category::Fishing => "Fishing",
            Category::Daily => "Daily",
            Category::Special => "Special",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QuestGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| {
                QuestGenError::InvalidConfig(format!("unknown quest category '{}'", s))
            })
    }
}

/// The kind of action an objective asks the player to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveType {
    Break,
    Kill,
    Interact,
}

impl ObjectiveType {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveType::Break => "break",
            ObjectiveType::Kill => "kill",
            ObjectiveType::Interact => "interact",
        }
    }
}

impl fmt::Display for ObjectiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single task within a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(rename = "type")]
    pub objective_type: ObjectiveType,
    /// Block, entity or item name the objective applies to
    pub target: String,
    pub amount: u32,
    /// Human-readable summary, e.g. "Mine 12 iron ore"
    pub description: String,
}

/// One generated quest record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Quest {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub repeatable: bool,
    /// Hours before a repeatable quest can be taken again
    pub cooldown_hours: u32,
    /// Objectives keyed `obj1`, `obj2`, ... in generation order
    pub objectives: IndexMap<String, Objective>,
    pub rewards: RewardBundle,
}

impl Quest {
    /// Returns true if no two objectives share a target.
    pub fn has_unique_targets(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.objectives
            .values()
            .all(|objective| seen.insert(objective.target.as_str()))
    }
}

/// Plugin-wide notification and limit settings written ahead of the quests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct QuestSettings {
    pub notify_on_progress: bool,
    pub sound_on_complete: bool,
    pub completion_sound: String,
    pub sound_volume: f64,
    pub sound_pitch: f64,
    pub max_active_quests: u32,
    pub auto_assign_daily: bool,
}

impl Default for QuestSettings {
    fn default() -> Self {
        Self {
            notify_on_progress: true,
            sound_on_complete: true,
            completion_sound: "entity.player.levelup".to_string(),
            sound_volume: 1.0,
            sound_pitch: 1.2,
            max_active_quests: 5,
            auto_assign_daily: true,
        }
    }
}

/// The complete generated document: settings plus quests keyed by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestCollection {
    pub settings: QuestSettings,
    pub quests: IndexMap<String, Quest>,
}

impl QuestCollection {
    /// Creates an empty collection with the given settings.
    pub fn new(settings: QuestSettings) -> Self {
        Self {
            settings,
            quests: IndexMap::new(),
        }
    }

    /// Number of quests in the collection.
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// Inserts a quest under a fresh id.
    ///
    /// Ids are the uniqueness key of the collection, so reusing one is an
    /// error rather than a silent overwrite.
    pub fn insert(&mut self, id: String, quest: Quest) -> QuestGenResult<()> {
        if self.quests.contains_key(&id) {
            return Err(QuestGenError::GenerationFailed(format!(
                "duplicate quest id '{}'",
                id
            )));
        }
        self.quests.insert(id, quest);
        Ok(())
    }

    /// Tallies the collection by category and repeatability.
    pub fn summary(&self) -> GenerationSummary {
        let mut by_category: Vec<(Category, usize)> = Category::ALL
            .iter()
            .map(|&category| {
                let count = self
                    .quests
                    .values()
                    .filter(|quest| quest.category == category)
                    .count();
                (category, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        by_category.sort_by_key(|(category, _)| category.as_str());

        let repeatable = self.quests.values().filter(|quest| quest.repeatable).count();

        GenerationSummary {
            total: self.quests.len(),
            by_category,
            repeatable,
        }
    }
}

/// Counts reported after a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub total: usize,
    /// Non-empty categories, alphabetical by name
    pub by_category: Vec<(Category, usize)>,
    pub repeatable: usize,
}

impl GenerationSummary {
    pub fn one_time(&self) -> usize {
        self.total - self.repeatable
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated Quest Summary:")?;
        writeln!(f, "Total Quests: {}", self.total)?;
        for (category, count) in &self.by_category {
            writeln!(f, "  - {}: {} quests", category.display_name(), count)?;
        }
        writeln!(f, "Repeatable Quests: {}", self.repeatable)?;
        write!(f, "One-time Quests: {}", self.one_time())
    }
}
