//! # Property-Based Tests
//!
//! Completeness, band partitioning, non-mutation, metadata skipping and the
//! threat formula, checked over generated collections.

#![allow(clippy::float_arithmetic)]

use bestiary_core::{
    MonsterCollection, ThreatBand, calculate_threat_levels, extract_monster_names,
    organize_by_threat_level,
};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// =============================================================================
// STRATEGIES
// =============================================================================

/// A monster whose factors may be absent.
fn arb_monster() -> impl Strategy<Value = Value> {
    (
        "[A-Z][a-z]{1,7}",
        option::of(0u32..1000),
        option::of(0u32..1000),
    )
        .prop_map(|(name, health, damage)| {
            let mut monster = Map::new();
            monster.insert("name".to_string(), json!(name));
            if let Some(h) = health {
                monster.insert("health".to_string(), json!(h));
            }
            if let Some(d) = damage {
                monster.insert("damage".to_string(), json!(d));
            }
            Value::Object(monster)
        })
}

/// A roster most of the time, otherwise a scalar or object metadata value.
fn arb_entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => vec(arb_monster(), 0..8).prop_map(Value::Array),
        1 => any::<i64>().prop_map(Value::from),
        1 => "[a-z]{0,6}".prop_map(Value::from),
        1 => arb_monster(),
    ]
}

fn arb_collection() -> impl Strategy<Value = MonsterCollection> {
    vec(arb_entry(), 0..6).prop_map(|entries| {
        let map = entries
            .into_iter()
            .enumerate()
            .map(|(i, value)| (format!("group{i}"), value))
            .collect();
        MonsterCollection::from_map(map)
    })
}

fn roster_len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Every roster element appears exactly once in every output.
    #[test]
    fn completeness(monsters in arb_collection()) {
        let expected: usize = monsters.as_map().values().map(roster_len).sum();

        prop_assert_eq!(calculate_threat_levels(&monsters).len(), expected);
        prop_assert_eq!(extract_monster_names(&monsters).len(), expected);
        prop_assert_eq!(organize_by_threat_level(&monsters).len(), expected);
        prop_assert_eq!(monsters.monster_count(), expected);
    }

    /// Each record sits in exactly the band its threat level selects.
    #[test]
    fn bands_are_exclusive_and_exhaustive(monsters in arb_collection()) {
        let bands = organize_by_threat_level(&monsters);

        for band in ThreatBand::ALL {
            for record in bands.band(band) {
                let level = record.threat_level().value();
                let low = level < 10_000.0;
                let medium = (10_000.0..=50_000.0).contains(&level);
                let high = !low && !medium;

                prop_assert_eq!(u8::from(low) + u8::from(medium) + u8::from(high), 1);
                let expected = if low {
                    ThreatBand::Low
                } else if medium {
                    ThreatBand::Medium
                } else {
                    ThreatBand::High
                };
                prop_assert_eq!(band, expected);
            }
        }
    }

    /// No operation changes its input.
    #[test]
    fn input_is_never_mutated(monsters in arb_collection()) {
        let before = monsters.clone();

        let _ = calculate_threat_levels(&monsters);
        prop_assert_eq!(&monsters, &before);
        let _ = extract_monster_names(&monsters);
        prop_assert_eq!(&monsters, &before);
        let _ = organize_by_threat_level(&monsters);
        prop_assert_eq!(&monsters, &before);
    }

    /// Adding a metadata entry changes no output.
    #[test]
    fn metadata_entries_are_skipped(monsters in arb_collection(), tag in "[a-z]{1,6}") {
        let tagged = monsters.clone().with_metadata("zz-meta", json!(tag));

        prop_assert_eq!(
            serde_json::to_value(calculate_threat_levels(&monsters)).expect("render"),
            serde_json::to_value(calculate_threat_levels(&tagged)).expect("render")
        );
        prop_assert_eq!(extract_monster_names(&monsters), extract_monster_names(&tagged));
        prop_assert_eq!(
            serde_json::to_value(organize_by_threat_level(&monsters)).expect("render"),
            serde_json::to_value(organize_by_threat_level(&tagged)).expect("render")
        );
    }

    /// threatLevel is exactly health * damage, NaN when a factor is missing.
    #[test]
    fn threat_formula(monsters in arb_collection()) {
        for record in calculate_threat_levels(&monsters) {
            let health = record.get("health").and_then(Value::as_f64);
            let damage = record.get("damage").and_then(Value::as_f64);
            let level = record.threat_level().value();

            match (health, damage) {
                (Some(h), Some(d)) => {
                    prop_assert_eq!(level, h * d);
                    prop_assert_eq!(record.get("threatLevel").and_then(Value::as_f64), Some(h * d));
                }
                _ => {
                    prop_assert!(level.is_nan());
                    prop_assert_eq!(record.get("threatLevel"), Some(&Value::Null));
                }
            }
        }
    }

    /// Calculator and classifier score identically; only the key attribute differs.
    #[test]
    fn calculator_and_classifier_agree(monsters in arb_collection()) {
        let calculated = calculate_threat_levels(&monsters);
        let bands = organize_by_threat_level(&monsters);
        let classified: Vec<_> = ThreatBand::ALL
            .iter()
            .flat_map(|band| bands.band(*band).iter())
            .collect();

        prop_assert_eq!(calculated.len(), classified.len());
        for record in &calculated {
            prop_assert!(record.get("difficulty").is_some());
            prop_assert!(record.get("category").is_none());
        }
        for record in classified {
            prop_assert!(record.get("category").is_some());
            prop_assert!(record.get("difficulty").is_none());
        }
    }
}
