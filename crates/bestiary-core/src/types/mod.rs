//! # Core Type Definitions
//!
//! This module contains the shared data model for Bestiary analytics:
//! - Input shape (`Monster`, `MonsterCollection`, `GroupEntry`, `Grouping`)
//! - Derived values (`ThreatLevel`, `AnnotatedMonster`)
//! - Error types (`BestiaryError`)
//!
//! ## Ordering Guarantees
//!
//! All maps in this module are insertion-ordered (`serde_json` is built with
//! `preserve_order`). A collection is visited in natural key order:
//! array-index keys (`"0"`, `"1"`, ... up to `2^32 - 2`, no leading zeros)
//! first in ascending numeric order, then every other key in insertion order,
//! which for parsed input is document order.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

// =============================================================================
// MONSTER RECORD
// =============================================================================

/// A single monster record.
///
/// Expected attributes are `name`, `health` and `damage`; any other attribute
/// is carried through every transformation untouched.
pub type Monster = Map<String, Value>;

// =============================================================================
// MONSTER COLLECTION
// =============================================================================

/// A mapping from grouping key (usually a difficulty label) to a roster of
/// monsters, possibly interleaved with metadata entries.
///
/// Only array-valued entries take part in analytics. Everything else is
/// metadata and is skipped by every operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterCollection(Map<String, Value>);

impl MonsterCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing JSON object.
    #[must_use]
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Append a roster under `key`, replacing any previous entry with that key.
    #[must_use]
    pub fn with_roster(mut self, key: impl Into<String>, monsters: Vec<Monster>) -> Self {
        let roster = monsters.into_iter().map(Value::Object).collect();
        self.0.insert(key.into(), Value::Array(roster));
        self
    }

    /// Append a non-roster entry under `key`.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Borrow the underlying JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Number of entries, rosters and metadata alike.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the collection has no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every entry in natural key order, discriminated by shape.
    ///
    /// Array-index keys come first in ascending numeric order, then the rest
    /// in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = GroupEntry<'_>> {
        let mut indexed: Vec<(u32, &str, &Value)> = Vec::new();
        let mut named: Vec<(&str, &Value)> = Vec::new();

        for (key, value) in &self.0 {
            match array_index(key) {
                Some(index) => indexed.push((index, key.as_str(), value)),
                None => named.push((key.as_str(), value)),
            }
        }
        indexed.sort_by_key(|(index, _, _)| *index);

        indexed
            .into_iter()
            .map(|(_, key, value)| (key, value))
            .chain(named)
            .map(|(key, value)| GroupEntry::classify(key, value))
    }

    /// Only the roster entries, in natural key order.
    pub fn groupings(&self) -> impl Iterator<Item = Grouping<'_>> {
        self.entries().filter_map(GroupEntry::into_roster)
    }

    /// Total number of records across all rosters.
    #[must_use]
    pub fn monster_count(&self) -> usize {
        self.groupings().map(|g| g.monsters.len()).sum()
    }
}

/// Numeric value of a canonical array-index key.
///
/// Canonical means plain decimal digits, no leading zero unless the key is
/// `"0"`, and below `u32::MAX`.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index < u32::MAX)
}

impl TryFrom<Value> for MonsterCollection {
    type Error = BestiaryError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(BestiaryError::InvalidCollection),
        }
    }
}

impl From<MonsterCollection> for Value {
    fn from(collection: MonsterCollection) -> Self {
        Value::Object(collection.0)
    }
}

// =============================================================================
// GROUP ENTRIES
// =============================================================================

/// A single collection entry after the "is this a roster" check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroupEntry<'a> {
    /// The value is an array of monster records.
    Roster(Grouping<'a>),
    /// The value is anything else and is ignored by analytics.
    Metadata {
        /// The entry's key.
        key: &'a str,
        /// The entry's value.
        value: &'a Value,
    },
}

impl<'a> GroupEntry<'a> {
    /// Discriminate an entry by the runtime shape of its value.
    #[must_use]
    pub fn classify(key: &'a str, value: &'a Value) -> Self {
        match value {
            Value::Array(monsters) => GroupEntry::Roster(Grouping { key, monsters }),
            _ => GroupEntry::Metadata { key, value },
        }
    }

    /// The entry's key, whatever its shape.
    #[must_use]
    pub fn key(&self) -> &'a str {
        match self {
            GroupEntry::Roster(grouping) => grouping.key,
            GroupEntry::Metadata { key, .. } => key,
        }
    }

    /// The roster, if this entry is one.
    #[must_use]
    pub fn into_roster(self) -> Option<Grouping<'a>> {
        match self {
            GroupEntry::Roster(grouping) => Some(grouping),
            GroupEntry::Metadata { .. } => None,
        }
    }
}

/// A roster: the monsters stored under one grouping key.
///
/// Elements that are not JSON objects are kept in place and behave as records
/// with no attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grouping<'a> {
    /// The grouping key, e.g. a difficulty label.
    pub key: &'a str,
    /// The roster in array order.
    pub monsters: &'a [Value],
}

// =============================================================================
// THREAT LEVEL
// =============================================================================

/// Derived score: `health * damage`.
///
/// NaN when either factor is missing or non-numeric. NaN is kept rather than
/// rejected and classifies as `highThreat`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ThreatLevel(pub f64);

impl ThreatLevel {
    /// Wrap a raw score.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw score.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if the score could not be computed.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Render the score as a JSON value (see [`number_to_json`]).
    ///
    /// [`number_to_json`]: crate::formats::number_to_json
    #[must_use]
    pub fn to_json(self) -> Value {
        crate::formats::number_to_json(self.0)
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// ANNOTATED MONSTER
// =============================================================================

/// A monster record plus its grouping key and `threatLevel`.
///
/// The attribute map is a copy of the source record with the two derived
/// attributes merged in last, so they win over same-named source attributes.
/// Serializes as the attribute map alone.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedMonster {
    attributes: Monster,
    threat_level: ThreatLevel,
}

impl AnnotatedMonster {
    /// Create an annotated record from merged attributes and the typed score.
    #[must_use]
    pub fn new(attributes: Monster, threat_level: ThreatLevel) -> Self {
        Self {
            attributes,
            threat_level,
        }
    }

    /// All attributes, source and derived, in merge order.
    #[must_use]
    pub fn attributes(&self) -> &Monster {
        &self.attributes
    }

    /// Look up a single attribute.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.attributes.get(attribute)
    }

    /// The record's `name` attribute, if present.
    #[must_use]
    pub fn name(&self) -> Option<&Value> {
        self.get(crate::primitives::NAME_ATTR)
    }

    /// The typed threat score (NaN preserved).
    #[must_use]
    pub fn threat_level(&self) -> ThreatLevel {
        self.threat_level
    }

    /// Consume the record, keeping only its attributes.
    #[must_use]
    pub fn into_attributes(self) -> Monster {
        self.attributes
    }
}

impl Serialize for AnnotatedMonster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised at the edges of Bestiary.
///
/// The analytics operations themselves never fail; these come from loading
/// input, rendering output, and the CLI's file and config handling.
#[derive(Debug, Error)]
pub enum BestiaryError {
    /// The top-level input value is not a JSON object.
    #[error("Invalid monster collection: expected a JSON object at the top level")]
    InvalidCollection,

    /// The serialized input exceeds the loader's size limit.
    #[error("Input too large: {size} bytes (limit {limit})")]
    InputTooLarge {
        /// Actual input size in bytes.
        size: u64,
        /// Maximum accepted size in bytes.
        limit: u64,
    },

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// The configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================
