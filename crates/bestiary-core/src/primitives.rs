//! # Fixed Primitives
//!
//! Hardcoded constants for the Bestiary analytics core.
//!
//! These are compiled into the binary and are immutable at runtime:
//! band boundaries, the attribute names read from and written to monster
//! records, and the loader's input limits.

// =============================================================================
// BAND BOUNDARIES
// =============================================================================

/// Lowest threat level that counts as `mediumThreat`.
///
/// - `threatLevel < MEDIUM_THREAT_FLOOR` is `lowThreat`.
/// - The boundary itself is medium.
pub const MEDIUM_THREAT_FLOOR: f64 = 10_000.0;

/// Highest threat level that still counts as `mediumThreat`.
///
/// - `threatLevel > MEDIUM_THREAT_CEILING` is `highThreat`.
/// - The boundary itself is medium.
pub const MEDIUM_THREAT_CEILING: f64 = 50_000.0;

// =============================================================================
// ATTRIBUTE NAMES
// =============================================================================

/// Attribute holding a monster's display name.
pub const NAME_ATTR: &str = "name";

/// Attribute holding a monster's health.
pub const HEALTH_ATTR: &str = "health";

/// Attribute holding a monster's damage.
pub const DAMAGE_ATTR: &str = "damage";

/// Attribute the threat calculator writes the grouping key into.
pub const DIFFICULTY_ATTR: &str = "difficulty";

/// Attribute the threat classifier writes the grouping key into.
///
/// Differs from [`DIFFICULTY_ATTR`] for the same grouping key. Both names are
/// part of the observable output and must stay distinct.
pub const CATEGORY_ATTR: &str = "category";

/// Attribute holding the computed `health * damage` product.
pub const THREAT_LEVEL_ATTR: &str = "threatLevel";

// =============================================================================
// INPUT LIMITS
// =============================================================================

/// Maximum size of serialized collection input accepted by the loader (1 MiB).
///
/// Checked before parsing so oversized input is rejected without allocation.
pub const MAX_COLLECTION_BYTES: usize = 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_ordered() {
        assert!(MEDIUM_THREAT_FLOOR < MEDIUM_THREAT_CEILING);
    }

    #[test]
    fn grouping_key_attributes_differ() {
        assert_ne!(DIFFICULTY_ATTR, CATEGORY_ATTR);
    }
}
