use std::{
    collections::HashMap,
    fs,
    io::Write as _,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use anyhow::Context as _;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tempfile::NamedTempFile;

/// Settings type that can be persisted through a [`SettingsStorage`].
pub trait StoredSettings: Serialize + DeserializeOwned + Default {
    /// Storage key, one per settings type.
    const KEY: &'static str;
}

/// Host-provided settings persistence.
pub trait SettingsStorage: Send + Sync {
    fn load_value(&self, key: &str) -> anyhow::Result<Option<Value>>;
    fn save_value(&self, key: &str, value: Value) -> anyhow::Result<()>;
}

pub trait SettingsStorageExt: SettingsStorage {
    /// Loads `T`, falling back to `T::default()` when nothing was saved yet.
    fn load<T: StoredSettings>(&self) -> anyhow::Result<T> {
        match self.load_value(T::KEY)? {
            Some(value) => serde_json::from_value(value)
                .with_context(|| format!("Failed to decode settings {}", T::KEY)),
            None => Ok(T::default()),
        }
    }

    fn save<T: StoredSettings>(&self, settings: &T) -> anyhow::Result<()> {
        self.save_value(T::KEY, serde_json::to_value(settings)?)
    }
}

impl<S: SettingsStorage + ?Sized> SettingsStorageExt for S {}

#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStorage for MemoryStorage {
    fn load_value(&self, key: &str) -> anyhow::Result<Option<Value>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save_value(&self, key: &str, value: Value) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Stores each settings type as `<dir>/<KEY>.json`.
///
/// Saves go to a temp file in the same directory that is then renamed over
/// the target, so a reader never sees a half written file.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SettingsStorage for JsonFileStorage {
    fn load_value(&self, key: &str) -> anyhow::Result<Option<Value>> {
        let path = self.path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data =
            fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(serde_json::from_slice(&data)?))
    }

    fn save_value(&self, key: &str, value: Value) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path(key);
        let data = serde_json::to_vec_pretty(&value)?;
        let mut file = NamedTempFile::new_in(&self.dir)?;
        file.write_all(&data)?;
        file.as_file().sync_all()?;
        file.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::debug!("saved settings {key} to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    #[serde(default)]
    struct Sample {
        name: String,
        enabled: bool,
    }

    impl StoredSettings for Sample {
        const KEY: &'static str = "Sample";
    }

    #[test]
    fn missing_entry_loads_default() {
        let storage = MemoryStorage::new();
        let loaded: Sample = storage.load().expect("Failed to load");
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn memory_storage_keeps_latest_save() {
        let storage = MemoryStorage::new();
        storage
            .save(&Sample {
                name: "first".into(),
                enabled: false,
            })
            .expect("Failed to save");
        storage
            .save(&Sample {
                name: "second".into(),
                enabled: true,
            })
            .expect("Failed to save");
        let loaded: Sample = storage.load().expect("Failed to load");
        assert_eq!(loaded.name, "second");
        assert!(loaded.enabled);
    }

    #[test]
    fn file_storage_writes_one_file_per_key() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = JsonFileStorage::new(dir.path().join("settings"));
        let sample = Sample {
            name: "file".into(),
            enabled: true,
        };
        storage.save(&sample).expect("Failed to save");
        assert!(dir.path().join("settings").join("Sample.json").exists());

        let reopened = JsonFileStorage::new(dir.path().join("settings"));
        let loaded: Sample = reopened.load().expect("Failed to load");
        assert_eq!(loaded, sample);
    }

    #[test]
    fn file_storage_replaces_previous_save() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let storage = JsonFileStorage::new(dir.path());
        for name in ["old", "new"] {
            storage
                .save(&Sample {
                    name: name.into(),
                    enabled: false,
                })
                .expect("Failed to save");
        }

        let loaded: Sample = storage.load().expect("Failed to load");
        assert_eq!(loaded.name, "new");
        let files: Vec<_> = fs::read_dir(dir.path())
            .expect("Failed to list dir")
            .map(|entry| entry.expect("Failed to read entry").file_name())
            .collect();
        assert_eq!(files, vec![std::ffi::OsString::from("Sample.json")]);
    }

    #[test]
    fn file_storage_reports_corrupt_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("Sample.json"), b"not json").expect("Failed to write");
        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.load::<Sample>().is_err());
    }
}
