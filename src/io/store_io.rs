use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Filename of the persisted collection inside the data directory
pub const STORE_FILE: &str = "tasks.json";

/// Newest schema version this build can read. A future format change bumps
/// this so an old build fails loudly instead of mis-parsing.
pub const SCHEMA_VERSION: u32 = 1;

/// Error type for the persistence adapter
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("stored tasks are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("stored tasks use schema version {found}, newest supported is {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// On-disk envelope: the full collection plus a schema version
#[derive(Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    tasks: Vec<Task>,
}

/// Load the full task collection from the data directory.
///
/// A missing file is an empty collection; unparsable content or a newer
/// schema version is an error for the caller to surface (recommended
/// recovery: warn and start empty, never crash the session).
pub fn load_tasks(data_dir: &Path) -> Result<Vec<Task>, StoreError> {
    let path = data_dir.join(STORE_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Read { path, source: e }),
    };

    let file: StoreFile = serde_json::from_str(&content)?;
    if file.version > SCHEMA_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: file.version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(file.tasks)
}

/// Persist the full task collection, replacing any prior state.
///
/// The write is atomic (temp file in the same directory, then rename), so a
/// failed write leaves the previous blob intact. Failures are surfaced, not
/// retried; the in-memory collection stays authoritative for the session.
pub fn save_tasks(data_dir: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    fs::create_dir_all(data_dir).map_err(|e| StoreError::Write {
        path: data_dir.to_path_buf(),
        source: e,
    })?;

    let path = data_dir.join(STORE_FILE);
    let file = StoreFile {
        version: SCHEMA_VERSION,
        tasks: tasks.to_vec(),
    };
    let content = serde_json::to_string_pretty(&file)?;
    atomic_write(&path, content.as_bytes()).map_err(|e| StoreError::Write { path, source: e })
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, TaskId};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task {
                id: TaskId(1),
                title: "Task A".into(),
                category: "Work".into(),
                due_date: NaiveDate::from_ymd_opt(2025, 11, 20),
                priority: Priority::High,
                completed: false,
            },
            Task {
                id: TaskId(2),
                title: "Task B".into(),
                category: String::new(),
                due_date: None,
                priority: Priority::Medium,
                completed: true,
            },
        ]
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let tasks = sample_tasks();
        save_tasks(dir.path(), &tasks).unwrap();
        let loaded = load_tasks(dir.path()).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn missing_file_is_an_empty_collection() {
        let dir = TempDir::new().unwrap();
        assert!(load_tasks(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_corrupt() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(STORE_FILE), "not json {{{").unwrap();
        assert!(matches!(load_tasks(dir.path()), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(STORE_FILE),
            r#"{"version": 99, "tasks": []}"#,
        )
        .unwrap();
        assert!(matches!(
            load_tasks(dir.path()),
            Err(StoreError::UnsupportedVersion {
                found: 99,
                supported: SCHEMA_VERSION
            })
        ));
    }

    #[test]
    fn save_overwrites_prior_state() {
        let dir = TempDir::new().unwrap();
        save_tasks(dir.path(), &sample_tasks()).unwrap();
        save_tasks(dir.path(), &[]).unwrap();
        assert!(load_tasks(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn save_creates_data_dir_on_demand() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested/tick");
        save_tasks(&nested, &sample_tasks()).unwrap();
        assert_eq!(load_tasks(&nested).unwrap().len(), 2);
    }

    #[test]
    fn atomic_save_leaves_no_temp_litter() {
        let dir = TempDir::new().unwrap();
        save_tasks(dir.path(), &sample_tasks()).unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn envelope_carries_schema_version() {
        let dir = TempDir::new().unwrap();
        save_tasks(dir.path(), &[]).unwrap();
        let raw = fs::read_to_string(dir.path().join(STORE_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SCHEMA_VERSION);
    }
}
