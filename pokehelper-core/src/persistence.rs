//! Best-effort persistence of [`AppData`] as a single JSON blob.
//!
//! Loading never fails observably: a missing, unreadable or corrupt blob yields
//! [`AppData::default`]. Saving reports errors to the caller, and [`persist`]
//! wraps it for call sites that only log.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::constants::STORAGE_KEY;
use crate::data::AppData;
use crate::error::StorageError;

/// String key/value backend, shaped after the browser's `localStorage`.
pub trait KeyValueStore {
    type Error: std::error::Error + Into<StorageError>;

    /// Read the value stored under `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

/// Load the persisted blob, falling back to defaults on any failure.
#[must_use]
pub fn load_app_data<S: KeyValueStore>(store: &S) -> AppData {
    let raw = match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("no saved data under {STORAGE_KEY}, starting fresh");
            return AppData::default();
        }
        Err(err) => {
            log::warn!("failed to read saved data: {err}");
            return AppData::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to parse saved data: {err}");
            AppData::default()
        }
    }
}

/// Serialize `data` and overwrite the stored blob.
///
/// # Errors
///
/// Returns [`StorageError`] when serialization or the backend write fails.
pub fn save_app_data<S: KeyValueStore>(store: &S, data: &AppData) -> Result<(), StorageError> {
    let json = serde_json::to_string(data)?;
    store.set_item(STORAGE_KEY, &json).map_err(Into::into)
}

/// [`save_app_data`], logging and dropping any failure.
pub fn persist<S: KeyValueStore>(store: &S, data: &AppData) -> bool {
    match save_app_data(store, data) {
        Ok(()) => true,
        Err(err) => {
            log::error!("Failed to save data: {err}");
            false
        }
    }
}

/// Remove the stored blob.
///
/// # Errors
///
/// Returns [`StorageError`] if the backend rejects the removal.
pub fn clear_app_data<S: KeyValueStore>(store: &S) -> Result<(), StorageError> {
    store.remove_item(STORAGE_KEY).map_err(Into::into)
}

/// Pretty-printed JSON for the save-data export box.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] if encoding fails.
pub fn export_app_data(data: &AppData) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Parse pasted JSON into a replacement blob.
///
/// # Errors
///
/// Returns [`StorageError::Serialization`] when the text is not a valid blob.
pub fn import_app_data(json: &str) -> Result<AppData, StorageError> {
    Ok(serde_json::from_str(json.trim())?)
}

/// In-memory store used by tests and the headless tester.
///
/// Clones share the same entries, so a test can keep a handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    quota: Option<usize>,
    unavailable: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects values longer than `bytes`.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::default()
        }
    }

    /// A store whose every operation fails, like storage disabled by the browser.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Store a raw value, bypassing quota and counters.
    pub fn seed(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable(
                "storage is disabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    type Error = StorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.check_available()?;
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.check_available()?;
        if let Some(quota) = self.quota
            && value.len() > quota
        {
            return Err(StorageError::QuotaExceeded {
                needed: value.len(),
                quota,
            });
        }
        self.seed(key, value);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.check_available()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{BreedingProject, Investment, Theme};
    use crate::stats::IvSpread;
    use crate::types::BreedingStatus;
    use chrono::{TimeZone, Utc};

    fn sample() -> AppData {
        let mut data = AppData::default();
        let bought = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut investment = Investment::new("Leftovers", None, 3, 12_345, bought).unwrap();
        investment.reprice(15_000);
        data.investments.push(investment);
        data.pokedex_completion.insert("Charizard".into(), true);
        data.settings.theme = Theme::Dark;
        data
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = MemoryStore::new();
        let data = sample();
        save_app_data(&store, &data).unwrap();
        assert_eq!(load_app_data(&store), data);
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn absent_key_loads_defaults() {
        let data = load_app_data(&MemoryStore::new());
        assert_eq!(data, AppData::default());
        assert_eq!(data.settings.theme, Theme::Light);
    }

    #[test]
    fn corrupt_blob_loads_defaults() {
        let store = MemoryStore::new();
        store.seed(STORAGE_KEY, "{not json");
        assert_eq!(load_app_data(&store), AppData::default());
        store.seed(STORAGE_KEY, r#"{"investments": 7}"#);
        assert_eq!(load_app_data(&store), AppData::default());
    }

    #[test]
    fn unavailable_store_loads_defaults_and_fails_saves() {
        let store = MemoryStore::unavailable();
        assert_eq!(load_app_data(&store), AppData::default());
        assert!(matches!(
            save_app_data(&store, &sample()),
            Err(StorageError::Unavailable(_))
        ));
        assert!(!persist(&store, &sample()));
    }

    #[test]
    fn quota_rejects_large_writes_without_touching_previous_value() {
        let store = MemoryStore::with_quota(400);
        save_app_data(&store, &AppData::default()).unwrap();
        let before = store.raw(STORAGE_KEY);
        let mut big = AppData::default();
        for n in 0..50 {
            big.pokedex_completion.insert(format!("species-{n}"), true);
        }
        assert!(matches!(
            save_app_data(&store, &big),
            Err(StorageError::QuotaExceeded { quota: 400, .. })
        ));
        assert_eq!(store.raw(STORAGE_KEY), before);
    }

    #[test]
    fn export_import_round_trips_and_rejects_garbage() {
        let data = sample();
        let text = export_app_data(&data).unwrap();
        assert!(text.contains("\"pokedexCompletion\""));
        assert_eq!(import_app_data(&text).unwrap(), data);
        assert!(matches!(
            import_app_data("42"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn out_of_range_target_ivs_are_rejected_on_load_and_import() {
        let mut data = AppData::default();
        data.breeding_projects.push(BreedingProject {
            id: "1700000000000".into(),
            pokemon_name: "Charizard".into(),
            target_ivs: IvSpread::uniform(31),
            target_nature: None,
            egg_moves: Vec::new(),
            status: BreedingStatus::default(),
            steps: Vec::new(),
            estimated_cost: 250_000,
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        });
        let mut blob = serde_json::to_value(&data).unwrap();
        blob["breedingProjects"][0]["targetIVs"]["hp"] = serde_json::json!(200);
        let text = blob.to_string();

        assert!(matches!(
            import_app_data(&text),
            Err(StorageError::Serialization(_))
        ));

        let store = MemoryStore::new();
        store.seed(STORAGE_KEY, &text);
        let loaded = load_app_data(&store);
        assert!(loaded.breeding_projects.is_empty());
        assert_eq!(loaded, AppData::default());
    }

    #[test]
    fn clear_removes_blob() {
        let store = MemoryStore::new();
        save_app_data(&store, &sample()).unwrap();
        clear_app_data(&store).unwrap();
        assert!(store.raw(STORAGE_KEY).is_none());
    }
}
