//! # Threat Summary
//!
//! Per-band counts derived from a [`ThreatBands`] value.

use crate::{ThreatBand, ThreatBands};
use serde::{Deserialize, Serialize};

/// Record counts per band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatSummary {
    /// Records in `lowThreat`.
    pub low: usize,
    /// Records in `mediumThreat`.
    pub medium: usize,
    /// Records in `highThreat`.
    pub high: usize,
    /// Records across all bands.
    pub total: usize,
    /// Records whose threat level is NaN. Already counted in `high`.
    pub unscored: usize,
}

impl ThreatSummary {
    /// Count the records of each band.
    #[must_use]
    pub fn from_bands(bands: &ThreatBands) -> Self {
        let unscored = bands
            .band(ThreatBand::High)
            .iter()
            .filter(|r| r.threat_level().is_nan())
            .count();

        Self {
            low: bands.low_threat.len(),
            medium: bands.medium_threat.len(),
            high: bands.high_threat.len(),
            total: bands.len(),
            unscored,
        }
    }

    /// Count for a single band.
    #[must_use]
    pub fn count(&self, band: ThreatBand) -> usize {
        match band {
            ThreatBand::Low => self.low,
            ThreatBand::Medium => self.medium,
            ThreatBand::High => self.high,
        }
    }
}
