//! Store persistence with file locking.
//!
//! The whole store is one JSON document written to a single file. Saves are
//! atomic (temp file + rename) and serialized with an exclusive lock so a
//! crash mid-write can never leave a half-written store behind.

use crate::{Result, Store};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Persistence backend for the store document.
///
/// The data store takes this as an injected collaborator so tests can
/// substitute an in-memory fake.
pub trait StoreBackend {
    /// Load the persisted store. A missing or unreadable document is an
    /// empty store, never an error.
    fn load(&self) -> Store;

    /// Persist the full store document.
    fn save(&mut self, store: &Store) -> Result<()>;
}

/// JSON-file backend with file locking
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend for the given store file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StoreBackend for JsonFileBackend {
    fn load(&self) -> Store {
        if !self.path.exists() {
            tracing::info!("No store file found, starting with empty store");
            return Store::default();
        }

        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!(
                    "Unable to open store file {:?}: {}. Starting empty.",
                    self.path,
                    e
                );
                return Store::default();
            }
        };

        // Acquire shared lock for reading
        if let Err(e) = file.lock_shared() {
            tracing::warn!(
                "Unable to lock store file {:?}: {}. Starting empty.",
                self.path,
                e
            );
            return Store::default();
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!(
                "Failed to read store file {:?}: {}. Starting empty.",
                self.path,
                e
            );
            return Store::default();
        }

        let _ = file.unlock();

        match serde_json::from_str::<Store>(&contents) {
            Ok(store) => {
                tracing::debug!(
                    "Loaded store from {:?} ({} workout days, {} meal days)",
                    self.path,
                    store.workouts.len(),
                    store.meals.len()
                );
                store
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse store file {:?}: {}. Starting empty.",
                    self.path,
                    e
                );
                Store::default()
            }
        }
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(self.path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "store path missing parent")
        })?)?;

        // Acquire exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(store)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace old store file
        temp.persist(&self.path)
            .map_err(|e| crate::Error::Io(e.error))?;

        tracing::debug!("Saved store to {:?}", self.path);
        Ok(())
    }
}

/// In-memory backend for tests. `fail_saves` simulates a write failure.
#[derive(Default)]
pub struct MemoryBackend {
    pub stored: Option<Store>,
    pub fail_saves: bool,
}

impl StoreBackend for MemoryBackend {
    fn load(&self) -> Store {
        self.stored.clone().unwrap_or_default()
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        if self.fail_saves {
            return Err(crate::Error::Other("simulated write failure".into()));
        }
        self.stored = Some(store.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExerciseEntry, WeightUnit, WorkoutDay};
    use uuid::Uuid;

    fn sample_store() -> Store {
        Store {
            workouts: vec![WorkoutDay {
                id: Uuid::new_v4(),
                date: "2024-03-09".into(),
                date_display: "Saturday, March 9".into(),
                exercises: vec![ExerciseEntry::new("Squats", 3, 10, 185.0, WeightUnit::Lbs)],
            }],
            meals: vec![],
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");

        let store = sample_store();
        let mut backend = JsonFileBackend::new(&path);
        backend.save(&store).unwrap();

        let loaded = backend.load();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path().join("nonexistent.json"));

        let store = backend.load();
        assert!(store.workouts.is_empty());
        assert!(store.meals.is_empty());
    }

    #[test]
    fn test_load_corrupted_file_is_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        let backend = JsonFileBackend::new(&path);
        let store = backend.load();
        assert!(store.workouts.is_empty());
        assert!(store.meals.is_empty());
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut backend = JsonFileBackend::new(&path);
        backend.save(&Store::default()).unwrap();

        assert!(path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "store.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only store.json, found extras: {:?}",
            extras
        );
    }
}
