//! # CLI Command Implementations
//!
//! Each `cmd_*` function renders one command's output as text or JSON.
//! Loading the collection happens once, before the command runs.

use crate::config::AppConfig;
use bestiary_core::{
    BestiaryError, GroupEntry, MonsterCollection, ThreatBand, ThreatSummary,
    calculate_threat_levels, check_size, collection_from_slice, collection_from_str,
    extract_monster_names, number_to_json, organize_by_threat_level, primitives, sum,
    to_json_pretty,
};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Sample bestiary compiled into the binary.
const BUNDLED_COLLECTION: &str = include_str!("../../data/monsters.json");

// =============================================================================
// DATA SOURCE
// =============================================================================

/// Where the monster collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// The sample collection bundled with the binary.
    Bundled,
}

impl DataSource {
    /// Pick the source: `--file` first, then the configured path, then the sample.
    #[must_use]
    pub fn resolve(cli_file: Option<&Path>, config: &AppConfig) -> Self {
        cli_file
            .map(Path::to_path_buf)
            .or_else(|| config.data.clone())
            .map_or(DataSource::Bundled, DataSource::File)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Bundled => f.write_str("bundled sample"),
        }
    }
}

/// Load a monster collection from its source.
pub fn load_collection(source: &DataSource) -> Result<MonsterCollection, BestiaryError> {
    let monsters = match source {
        DataSource::Bundled => collection_from_str(BUNDLED_COLLECTION)?,
        DataSource::File(path) => {
            let validated_path = validate_file_path(path)?;
            validate_file_size(&validated_path)?;

            let contents = std::fs::read(&validated_path)
                .map_err(|e| BestiaryError::IoError(format!("Read file: {}", e)))?;
            collection_from_slice(&contents)?
        }
    };

    for entry in monsters.entries() {
        if let GroupEntry::Metadata { key, .. } = entry {
            tracing::debug!("Skipping metadata entry '{}'", key);
        }
    }
    tracing::info!(
        "Loaded {} monsters in {} rosters from {}",
        monsters.monster_count(),
        monsters.groupings().count(),
        source
    );

    Ok(monsters)
}

/// Validate and canonicalize an input path.
///
/// Resolves `..` and symlinks and requires a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, BestiaryError> {
    let canonical = path.canonicalize().map_err(|e| {
        BestiaryError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(BestiaryError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Reject files over the loader's size limit before reading them.
fn validate_file_size(path: &Path) -> Result<(), BestiaryError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| BestiaryError::IoError(format!("Read metadata: {}", e)))?;
    check_size(metadata.len())
}

// =============================================================================
// RENDERING HELPERS
// =============================================================================

fn display_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => "(unnamed)".to_string(),
    }
}

// =============================================================================
// THREATS COMMAND
// =============================================================================

/// Every monster with its difficulty and threat level.
pub fn cmd_threats(monsters: &MonsterCollection, json_mode: bool) -> Result<String, BestiaryError> {
    let records = calculate_threat_levels(monsters);

    if json_mode {
        return to_json_pretty(&records);
    }

    let mut out = String::new();
    out.push_str("Monster Threat Levels\n");
    out.push_str("=====================\n");
    for record in &records {
        out.push_str(&format!(
            "{:<16} {:<10} {:>12}\n",
            display_value(record.name()),
            display_value(record.get(primitives::DIFFICULTY_ATTR)),
            record.threat_level()
        ));
    }
    out.push_str(&format!("\nTotal: {}", records.len()));

    Ok(out)
}

// =============================================================================
// NAMES COMMAND
// =============================================================================

/// Every monster name, one per line.
pub fn cmd_names(monsters: &MonsterCollection, json_mode: bool) -> Result<String, BestiaryError> {
    let names = extract_monster_names(monsters);

    if json_mode {
        return to_json_pretty(&names);
    }

    Ok(names
        .iter()
        .map(|name| display_value(name.as_ref()))
        .collect::<Vec<_>>()
        .join("\n"))
}

// =============================================================================
// BANDS COMMAND
// =============================================================================

/// Monsters grouped by threat band.
pub fn cmd_bands(monsters: &MonsterCollection, json_mode: bool) -> Result<String, BestiaryError> {
    let bands = organize_by_threat_level(monsters);

    if json_mode {
        return to_json_pretty(&bands);
    }

    let mut out = String::new();
    for band in ThreatBand::ALL {
        let records = bands.band(band);
        out.push_str(&format!("{} ({})\n", band, records.len()));
        for record in records {
            out.push_str(&format!(
                "  {:<16} {:<10} {:>12}\n",
                display_value(record.name()),
                display_value(record.get(primitives::CATEGORY_ATTR)),
                record.threat_level()
            ));
        }
    }

    Ok(out.trim_end().to_string())
}

// =============================================================================
// SUMMARY COMMAND
// =============================================================================

/// Per-band counts.
pub fn cmd_summary(monsters: &MonsterCollection, json_mode: bool) -> Result<String, BestiaryError> {
    let summary = ThreatSummary::from_bands(&organize_by_threat_level(monsters));

    if json_mode {
        return to_json_pretty(&summary);
    }

    let mut out = String::new();
    out.push_str("Bestiary Threat Summary\n");
    out.push_str("=======================\n");
    for band in ThreatBand::ALL {
        out.push_str(&format!("{:<14} {}\n", band.field_name(), summary.count(band)));
    }
    out.push_str(&format!("{:<14} {}", "total", summary.total));
    if summary.unscored > 0 {
        out.push_str(&format!(
            "\n{} monster(s) lack health or damage and were counted as highThreat",
            summary.unscored
        ));
    }

    Ok(out)
}

// =============================================================================
// SUM COMMAND
// =============================================================================

/// Add two numbers.
pub fn cmd_sum(a: f64, b: f64, json_mode: bool) -> Result<String, BestiaryError> {
    let total = sum(a, b);

    if json_mode {
        return to_json_pretty(&serde_json::json!({
            "a": number_to_json(a),
            "b": number_to_json(b),
            "sum": number_to_json(total)
        }));
    }

    Ok(total.to_string())
}
