use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads an NDJSON file holding one location per line. Blank lines are skipped.
/// Lines are only checked for being JSON; entries are validated on import.
pub fn read(path: &Path) -> anyhow::Result<Vec<serde_json::Value>> {
    let locations_file = File::open(path)
        .with_context(|| format!("Failed to open the locations file {}.", path.display()))?;
    let file_reader = BufReader::new(locations_file);
    let mut locations = Vec::new();
    for (index, line) in file_reader.lines().enumerate() {
        let line = line.context("Failed to read a line in the locations file.")?;
        if line.trim().is_empty() {
            continue;
        }
        let location: serde_json::Value = serde_json::from_str(&line)
            .with_context(|| format!("Failed to parse line {} of the locations file.", index + 1))?;
        locations.push(location);
    }
    Ok(locations)
}
