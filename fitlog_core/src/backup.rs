//! Backup exchange: portable export/import of the full store.
//!
//! An export is a snapshot, not a diff; an import is a full replace, not a
//! merge. Import validation is presence-checking only: the document must
//! parse as JSON and carry both a `workouts` and a `meals` key. Parsing
//! happens before any mutation so a rejected import leaves the store alone.

use crate::{Error, MealDay, Result, Store, WorkoutDay};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Application name stamped into export documents.
pub const APP_NAME: &str = "Fitlog";

/// File-name prefix for exported backups.
pub const BACKUP_FILE_PREFIX: &str = "fitlog-backup";

/// The portable backup document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub app_name: String,
    /// RFC 3339 timestamp of the export.
    pub export_date: String,
    pub workouts: Vec<WorkoutDay>,
    pub meals: Vec<MealDay>,
}

/// Build an export snapshot of the store.
pub fn export_document(store: &Store, now: DateTime<Utc>) -> BackupDocument {
    BackupDocument {
        app_name: APP_NAME.to_string(),
        export_date: now.to_rfc3339(),
        workouts: store.workouts.clone(),
        meals: store.meals.clone(),
    }
}

/// Serialize an export document to pretty JSON.
pub fn export_to_string(store: &Store, now: DateTime<Utc>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&export_document(store, now))?)
}

/// Default file name for a backup exported on `date`:
/// `fitlog-backup-YYYY-MM-DD.json`.
pub fn backup_file_name(date: NaiveDate) -> String {
    format!("{}-{}.json", BACKUP_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// Parse an externally supplied backup payload.
///
/// Returns the workout and meal lists to hand to `replace_all`. Unparsable
/// text and missing keys are distinct failures ([`Error::BackupUnreadable`]
/// vs [`Error::BackupInvalid`]); neither mutates anything.
pub fn parse_backup(text: &str) -> Result<(Vec<WorkoutDay>, Vec<MealDay>)> {
    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::BackupUnreadable(e.to_string()))?;

    let obj = value
        .as_object()
        .ok_or_else(|| Error::BackupInvalid("document is not a JSON object".into()))?;

    // Key presence is the contract; shape problems inside the lists are
    // reported as invalid as well.
    let workouts = obj
        .get("workouts")
        .ok_or_else(|| Error::BackupInvalid("missing 'workouts' key".into()))?;
    let meals = obj
        .get("meals")
        .ok_or_else(|| Error::BackupInvalid("missing 'meals' key".into()))?;

    let workouts: Vec<WorkoutDay> = serde_json::from_value(workouts.clone())
        .map_err(|e| Error::BackupInvalid(format!("bad 'workouts' list: {}", e)))?;
    let meals: Vec<MealDay> = serde_json::from_value(meals.clone())
        .map_err(|e| Error::BackupInvalid(format!("bad 'meals' list: {}", e)))?;

    tracing::debug!(
        "Parsed backup with {} workout days, {} meal days",
        workouts.len(),
        meals.len()
    );
    Ok((workouts, meals))
}
