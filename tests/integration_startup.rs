//! Integration test to ensure a default run can start from a config file.

use questgen::generation::utils::create_rng;
use questgen::{Category, GenerationConfig, Generator, QuestGenResult, QuestGenerator};

#[test]
fn test_config_file_drives_generation() -> QuestGenResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("questgen.toml");
    std::fs::write(
        &path,
        r#"
seed = 2718
quest_count = 6
forced_category = "special"
money_chance = 1.0

[settings]
max-active-quests = 3
sound-pitch = 0.8
"#,
    )?;

    let config = GenerationConfig::from_toml_file(&path)?;
    let collection = QuestGenerator::new().generate(&config, &mut create_rng(&config))?;

    assert_eq!(collection.len(), 6);
    assert_eq!(collection.settings.max_active_quests, 3);
    assert_eq!(collection.settings.sound_pitch, 0.8);
    for quest in collection.quests.values() {
        assert_eq!(quest.category, Category::Special);
        let money = quest.rewards.money.expect("money is guaranteed");
        assert!((500..=10_000).contains(&money));
        assert!([48, 72, 168].contains(&quest.cooldown_hours));
    }
    Ok(())
}

#[test]
fn test_bad_config_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questgen.toml");
    std::fs::write(&path, "item_chance = 2.0\n").unwrap();

    let config = GenerationConfig::from_toml_file(&path).unwrap();
    let mut rng = create_rng(&config);
    assert!(QuestGenerator::new().generate(&config, &mut rng).is_err());
}

#[test]
fn test_missing_config_file() {
    let result = GenerationConfig::from_toml_file("/nonexistent/questgen.toml");
    assert!(result.is_err());
}
