use std::{fs, path::Path};

use crate::{errors::ScheduleError, schedules::ScheduleSnapshot};

/// Writes the provided snapshot to disk atomically by staging to a temporary file.
pub fn save_snapshot_to_file(snapshot: &ScheduleSnapshot, path: &Path) -> Result<(), ScheduleError> {
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a schedule snapshot from disk, returning structured errors on failure.
pub fn load_snapshot_from_file(path: &Path) -> Result<ScheduleSnapshot, ScheduleError> {
    let data = fs::read_to_string(path)?;
    let snapshot: ScheduleSnapshot = serde_json::from_str(&data)?;
    tracing::debug!(
        schedules = snapshot.schedules.len(),
        path = %path.display(),
        "loaded schedule snapshot"
    );
    Ok(snapshot)
}
