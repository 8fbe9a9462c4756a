//! # Quest Rewards
//!
//! The optional payload handed to a player on completion.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An item or command reward: a bare string when there is one entry, a list
/// otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RewardValue {
    Single(String),
    Multiple(Vec<String>),
}

impl RewardValue {
    /// Wraps a list of entries, collapsing a one-element list to `Single`.
    ///
    /// Returns `None` for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use questgen::RewardValue;
    ///
    /// let one = RewardValue::from_entries(vec!["diamond".to_string()]);
    /// assert_eq!(one, Some(RewardValue::Single("diamond".to_string())));
    /// assert!(RewardValue::from_entries(Vec::new()).is_none());
    /// ```
    pub fn from_entries(mut entries: Vec<String>) -> Option<Self> {
        match entries.len() {
            0 => None,
            1 => entries.pop().map(RewardValue::Single),
            _ => Some(RewardValue::Multiple(entries)),
        }
    }

    /// All entries as string slices.
    pub fn entries(&self) -> Vec<&str> {
        match self {
            RewardValue::Single(entry) => vec![entry.as_str()],
            RewardValue::Multiple(entries) => entries.iter().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RewardValue::Single(_) => 1,
            RewardValue::Multiple(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when no entry appears twice.
    pub fn is_distinct(&self) -> bool {
        let mut seen = HashSet::new();
        self.entries().into_iter().all(|entry| seen.insert(entry))
    }
}

/// Money, experience, item and command rewards; each is optional and
/// omitted from the output when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub money: Option<u32>,
    #[serde(rename = "xp", skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<RewardValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<RewardValue>,
}

impl RewardBundle {
    pub fn is_empty(&self) -> bool {
        self.money.is_none()
            && self.experience.is_none()
            && self.item.is_none()
            && self.command.is_none()
    }
}
