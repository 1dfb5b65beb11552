//! # bestiary-core
//!
//! The monster analytics engine for Bestiary - THE LOGIC.
//!
//! Three independent, pure operations over a collection of monster rosters,
//! plus an arithmetic helper:
//!
//! - [`calculate_threat_levels`]: annotate every monster with `difficulty`
//!   and `threatLevel = health * damage`
//! - [`extract_monster_names`]: flatten every monster's `name`
//! - [`organize_by_threat_level`]: partition monsters into `lowThreat`,
//!   `mediumThreat` and `highThreat`
//! - [`sum`]: add two values
//!
//! ## Architectural Constraints
//!
//! - No I/O, no logging, no async: callers inject the data and own presentation
//! - Inputs are borrowed and never mutated; outputs are freshly allocated
//! - Non-array entries of a collection are metadata and are always skipped
//! - Malformed records never fail; they score NaN and classify as `highThreat`

// =============================================================================
// MODULES
// =============================================================================

pub mod arith;
pub mod classifier;
pub mod formats;
pub mod names;
pub mod primitives;
pub mod summary;
pub mod threat;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    AnnotatedMonster, BestiaryError, GroupEntry, Grouping, Monster, MonsterCollection,
    ThreatLevel,
};

// =============================================================================
// RE-EXPORTS: Analytics
// =============================================================================

pub use arith::sum;
pub use classifier::{ThreatBand, ThreatBands, organize_by_threat_level};
pub use names::extract_monster_names;
pub use summary::ThreatSummary;
pub use threat::{calculate_threat_levels, coerce_number, threat_level_of};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{
    check_size, collection_from_slice, collection_from_str, number_to_json, to_json_pretty,
};
