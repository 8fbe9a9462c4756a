//! # Output Module
//!
//! Writes a generated quest collection as a YAML configuration document.

use crate::{QuestCollection, QuestGenResult};
use log::info;
use std::fs;
use std::path::Path;

/// Default output file name for generated quests.
pub const DEFAULT_QUESTS_FILE: &str = "quests.yml";

/// Serializes a collection to block-style YAML.
///
/// Keys appear in struct declaration order and quests in generation order.
pub fn to_yaml_string(collection: &QuestCollection) -> QuestGenResult<String> {
    Ok(serde_yaml::to_string(collection)?)
}

/// Writes a collection to `path`, creating missing parent directories.
pub fn save_collection(
    collection: &QuestCollection,
    path: impl AsRef<Path>,
) -> QuestGenResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    let yaml = to_yaml_string(collection)?;
    fs::write(path, yaml)?;

    info!(
        "Generated quest configuration saved to {} ({} quests)",
        path.display(),
        collection.len()
    );
    Ok(())
}
