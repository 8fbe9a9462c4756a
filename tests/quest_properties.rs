//! Property tests for the invariants every generated batch must hold.

use proptest::prelude::*;
use questgen::{distinct_targets, generate_quests, RewardValue};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_count_matches(seed in any::<u64>(), count in -5i64..60) {
        let collection = generate_quests(count, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(collection.len(), count.max(0) as usize);
    }

    #[test]
    fn prop_ids_and_titles_distinct(seed in any::<u64>(), count in 0i64..80) {
        let collection = generate_quests(count, &mut StdRng::seed_from_u64(seed)).unwrap();

        let ids: HashSet<_> = collection.quests.keys().collect();
        prop_assert_eq!(ids.len(), collection.len());
        let titles: HashSet<_> = collection.quests.values().map(|q| &q.title).collect();
        prop_assert_eq!(titles.len(), collection.len());
    }

    #[test]
    fn prop_objectives_well_formed(seed in any::<u64>(), count in 1i64..40) {
        let collection = generate_quests(count, &mut StdRng::seed_from_u64(seed)).unwrap();

        for quest in collection.quests.values() {
            prop_assert!((1..=3).contains(&quest.objectives.len()));
            if quest.objectives.len() <= distinct_targets(quest.category) {
                prop_assert!(quest.has_unique_targets());
            }
            let keys: Vec<_> = quest.objectives.keys().cloned().collect();
            let expected: Vec<_> = (1..=keys.len()).map(|n| format!("obj{}", n)).collect();
            prop_assert_eq!(keys, expected);
        }
    }

    #[test]
    fn prop_rewards_distinct(seed in any::<u64>(), count in 1i64..40) {
        let collection = generate_quests(count, &mut StdRng::seed_from_u64(seed)).unwrap();

        for quest in collection.quests.values() {
            for value in [&quest.rewards.item, &quest.rewards.command].into_iter().flatten() {
                prop_assert!(value.is_distinct());
                prop_assert!((1..=3).contains(&value.len()));
                if let RewardValue::Multiple(entries) = value {
                    prop_assert!(entries.len() > 1);
                }
            }
        }
    }

    #[test]
    fn prop_seed_determinism(seed in any::<u64>(), count in 0i64..30) {
        let first = generate_quests(count, &mut StdRng::seed_from_u64(seed)).unwrap();
        let second = generate_quests(count, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }
}
