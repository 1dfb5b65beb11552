//! # Threat Calculator
//!
//! Computes `threatLevel = health * damage` for every monster and annotates
//! each record with the grouping key it came from.
//!
//! - Rosters are visited in natural key order, records in array order
//! - Metadata entries are skipped
//! - Missing or non-numeric factors produce NaN, never an error

use crate::primitives::{DAMAGE_ATTR, DIFFICULTY_ATTR, HEALTH_ATTR, THREAT_LEVEL_ATTR};
use crate::{AnnotatedMonster, Grouping, Monster, MonsterCollection, ThreatLevel};
use serde_json::Value;

/// Annotate every monster with `difficulty` and `threatLevel`.
///
/// Returns one record per roster element, flattened across rosters.
pub fn calculate_threat_levels(monsters: &MonsterCollection) -> Vec<AnnotatedMonster> {
    monsters
        .groupings()
        .flat_map(|grouping| annotate_grouping(grouping, DIFFICULTY_ATTR))
        .collect()
}

/// Annotate each record of a roster, writing the roster key into `key_attr`.
pub(crate) fn annotate_grouping<'a>(
    grouping: Grouping<'a>,
    key_attr: &'static str,
) -> impl Iterator<Item = AnnotatedMonster> + 'a {
    grouping
        .monsters
        .iter()
        .map(move |record| annotate(record, key_attr, grouping.key))
}

/// Copy a record and merge in the grouping key and threat level.
///
/// Derived attributes are inserted last: a same-named source attribute keeps
/// its position but takes the derived value.
fn annotate(record: &Value, key_attr: &str, key: &str) -> AnnotatedMonster {
    let source = record.as_object();
    let threat_level = threat_level_of(source);

    let mut attributes = source.cloned().unwrap_or_default();
    attributes.insert(key_attr.to_string(), Value::String(key.to_string()));
    attributes.insert(THREAT_LEVEL_ATTR.to_string(), threat_level.to_json());

    AnnotatedMonster::new(attributes, threat_level)
}

/// Compute `health * damage` for a record.
///
/// A missing record (a roster element that is not an object) has neither
/// factor and scores NaN.
#[must_use]
pub fn threat_level_of(monster: Option<&Monster>) -> ThreatLevel {
    let health = coerce_number(monster.and_then(|m| m.get(HEALTH_ATTR)));
    let damage = coerce_number(monster.and_then(|m| m.get(DAMAGE_ATTR)));
    ThreatLevel::new(product(health, damage))
}

#[allow(clippy::float_arithmetic)]
fn product(health: f64, damage: f64) -> f64 {
    health * damage
}

/// Numeric reading of an attribute value.
///
/// | Value | Number |
/// |-------|--------|
/// | absent | NaN |
/// | `null` | 0 |
/// | `true` / `false` | 1 / 0 |
/// | number | itself |
/// | string | trimmed decimal, hex, octal or binary literal, or `Infinity`; empty is 0; anything else NaN |
/// | array | empty is 0; one element reads as that element's text form; longer is NaN |
/// | object | NaN |
#[must_use]
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        None => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => parse_numeric_text(text),
        Some(Value::Array(items)) => coerce_array(items),
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// An array reads as the number its comma-joined text form spells.
fn coerce_array(items: &[Value]) -> f64 {
    match items {
        [] => 0.0,
        [only] => match only {
            // `null` joins as "", booleans as "true"/"false".
            Value::Null => 0.0,
            Value::Bool(_) | Value::Object(_) => f64::NAN,
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(text) => parse_numeric_text(text),
            Value::Array(nested) => coerce_array(nested),
        },
        _ => f64::NAN,
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix_digits(digits, radix);
        }
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan" spellings; those are not numbers here.
    let is_decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !is_decimal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits in `radix`, accumulated in `f64` so literals wider than 64 bits
/// still read as a finite number.
#[allow(clippy::float_arithmetic)]
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc: f64, c| {
            c.to_digit(radix)
                .map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

// =============================================================================
// TESTS
// =============================================================================
