//! Database writer with atomic whole-file replace.
//!
//! The record list is serialized as pretty-printed JSON with keys in data
//! model order, written to a temporary sibling file, fsynced, then renamed
//! over the destination. Readers never observe a half-written database.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::record::FlightRecord;

use super::errors::{StoreError, StoreResult};

/// Saves the record list to `destination`, replacing any previous contents.
pub fn save(records: &[FlightRecord], destination: &Path) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(records).map_err(|e| {
        StoreError::write_failed(
            format!("Failed to serialize {} records", records.len()),
            e.into(),
        )
    })?;

    let tmp_path = temp_sibling(destination);

    let mut tmp = File::create(&tmp_path).map_err(|e| {
        StoreError::write_failed(
            format!("Failed to create temp file: {}", tmp_path.display()),
            e,
        )
    })?;

    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.write_all(b"\n"))
        .and_then(|_| tmp.sync_all())
        .map_err(|e| {
            StoreError::write_failed(
                format!("Failed to write database: {}", destination.display()),
                e,
            )
        })?;
    drop(tmp);

    fs::rename(&tmp_path, destination).map_err(|e| {
        StoreError::write_failed(
            format!("Failed to replace database: {}", destination.display()),
            e,
        )
    })
}

/// Temp file placed next to the destination so the rename stays on one
/// filesystem.
fn temp_sibling(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "db.json".into());
    name.push(".tmp");
    destination.with_file_name(name)
}
