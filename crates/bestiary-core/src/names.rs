//! # Name Extractor
//!
//! Flattens the `name` of every monster across all rosters.

use crate::MonsterCollection;
use crate::primitives::NAME_ATTR;
use serde_json::Value;

/// Collect every monster's `name` in grouping-then-array order.
///
/// A record without a `name` yields `None` in its position instead of being
/// dropped, so the output has exactly one entry per roster element.
pub fn extract_monster_names(monsters: &MonsterCollection) -> Vec<Option<Value>> {
    monsters
        .groupings()
        .flat_map(|grouping| grouping.monsters.iter())
        .map(|record| record.get(NAME_ATTR).cloned())
        .collect()
}
