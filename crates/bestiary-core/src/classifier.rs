//! # Threat Classifier
//!
//! Reorganizes a collection by threat band instead of by grouping key.
//!
//! ## Band Definitions
//!
//! | Band | Serialized As | Threat Level |
//! |------|---------------|--------------|
//! | Low | `lowThreat` | `< 10000` |
//! | Medium | `mediumThreat` | `10000 ..= 50000` |
//! | High | `highThreat` | `> 50000`, or NaN |
//!
//! Records are annotated with `category` (not `difficulty`) before banding.
//! Within each band, records keep their scan order.

use crate::primitives::{CATEGORY_ATTR, MEDIUM_THREAT_CEILING, MEDIUM_THREAT_FLOOR};
use crate::threat::annotate_grouping;
use crate::{AnnotatedMonster, MonsterCollection, ThreatLevel};
use serde::{Deserialize, Serialize};

// =============================================================================
// BAND ENUM
// =============================================================================

/// One of the three fixed threat bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThreatBand {
    /// Below the medium floor.
    Low,
    /// Between the floor and the ceiling, both inclusive.
    Medium,
    /// Above the ceiling, plus every score that is not a number.
    High,
}

impl ThreatBand {
    /// All bands in ascending order.
    pub const ALL: [ThreatBand; 3] = [ThreatBand::Low, ThreatBand::Medium, ThreatBand::High];

    /// Assign a threat level to its band.
    ///
    /// NaN fails both comparisons and falls through to `High`.
    #[must_use]
    pub fn classify(level: ThreatLevel) -> Self {
        let value = level.value();
        if value < MEDIUM_THREAT_FLOOR {
            ThreatBand::Low
        } else if (MEDIUM_THREAT_FLOOR..=MEDIUM_THREAT_CEILING).contains(&value) {
            ThreatBand::Medium
        } else {
            ThreatBand::High
        }
    }

    /// The band's field name in serialized output.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            ThreatBand::Low => "lowThreat",
            ThreatBand::Medium => "mediumThreat",
            ThreatBand::High => "highThreat",
        }
    }
}

impl std::fmt::Display for ThreatBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

// =============================================================================
// BANDS OUTPUT
// =============================================================================

/// Monsters partitioned into the three threat bands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatBands {
    /// Records with `threatLevel < 10000`.
    pub low_threat: Vec<AnnotatedMonster>,
    /// Records with `10000 <= threatLevel <= 50000`.
    pub medium_threat: Vec<AnnotatedMonster>,
    /// Everything else.
    pub high_threat: Vec<AnnotatedMonster>,
}

impl ThreatBands {
    /// Create empty bands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in a single band, in scan order.
    #[must_use]
    pub fn band(&self, band: ThreatBand) -> &[AnnotatedMonster] {
        match band {
            ThreatBand::Low => &self.low_threat,
            ThreatBand::Medium => &self.medium_threat,
            ThreatBand::High => &self.high_threat,
        }
    }

    /// Append a record to the band its threat level selects.
    pub fn push(&mut self, record: AnnotatedMonster) {
        let target = match ThreatBand::classify(record.threat_level()) {
            ThreatBand::Low => &mut self.low_threat,
            ThreatBand::Medium => &mut self.medium_threat,
            ThreatBand::High => &mut self.high_threat,
        };
        target.push(record);
    }

    /// Total records across all bands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.low_threat.len() + self.medium_threat.len() + self.high_threat.len()
    }

    /// Check if every band is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Partition every monster of the collection into threat bands.
///
/// Each record is annotated with `category` = its grouping key and its
/// `threatLevel`, then appended to exactly one band.
pub fn organize_by_threat_level(monsters: &MonsterCollection) -> ThreatBands {
    let mut bands = ThreatBands::new();

    for record in monsters
        .groupings()
        .flat_map(|grouping| annotate_grouping(grouping, CATEGORY_ATTR))
    {
        bands.push(record);
    }

    bands
}

// =============================================================================
// TESTS
// =============================================================================
