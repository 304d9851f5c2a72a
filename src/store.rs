use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::error::Result;
use crate::model::GameRecord;

/// Read a season file.
pub fn load(path: &Path) -> Result<Vec<GameRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Drop every row whose natural key was already seen; earlier rows win.
pub fn dedup(records: Vec<GameRecord>) -> Vec<GameRecord> {
    let mut seen: HashSet<(String, String, String)> = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|r| {
            let (date, home, visitor) = r.key();
            seen.insert((date.to_string(), home.to_string(), visitor.to_string()))
        })
        .collect()
}

fn write(path: &Path, records: &[GameRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Merge `records` into the season file at `path` and rewrite it in full.
///
/// Rows already on disk take precedence over freshly fetched rows with the same key.
/// Returns the number of rows now in the file.
#[instrument(level = "info", skip(records), fields(path = %path.display(), new = records.len()))]
pub fn persist(path: &Path, records: Vec<GameRecord>) -> Result<usize> {
    let combined = if path.exists() {
        let mut existing = load(path)?;
        existing.extend(records);
        existing
    } else {
        records
    };
    let merged = dedup(combined);
    write(path, &merged)?;
    info!(rows = merged.len(), "Saved season file");
    Ok(merged.len())
}
