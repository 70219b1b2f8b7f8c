use std::{
    env, fmt,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use serde::{Deserialize, Serialize};
use translate_plugin_interface::{
    Credential, Error, SettingsStorage,
    storage::{SettingsStorageExt as _, StoredSettings},
};

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    /// Azure Translator subscription key
    pub api_key: String,
    /// Azure region (e.g. eastus, westeurope)
    pub region: String,
    /// Replaces the public endpoint, e.g. for sovereign clouds
    pub custom_endpoint: String,
    pub use_custom_endpoint: bool,
}

impl StoredSettings for TranslationSettings {
    const KEY: &'static str = "AzureTranslator";
}

impl TranslationSettings {
    /// Reads `AZURE_TRANSLATOR_KEY`, `AZURE_TRANSLATOR_REGION` and `AZURE_TRANSLATOR_ENDPOINT`.
    /// A non-empty endpoint turns the custom endpoint on.
    pub fn from_env() -> Self {
        let custom_endpoint = env::var("AZURE_TRANSLATOR_ENDPOINT").unwrap_or_default();
        Self {
            api_key: env::var("AZURE_TRANSLATOR_KEY").unwrap_or_default(),
            region: env::var("AZURE_TRANSLATOR_REGION").unwrap_or_default(),
            use_custom_endpoint: !custom_endpoint.is_empty(),
            custom_endpoint,
        }
    }

    /// Api key first, then region. Only the first missing one is reported.
    pub fn check_credentials(&self) -> Result<(), Error> {
        if self.api_key.is_empty() {
            return Err(Error::MissingCredential(Credential::ApiKey));
        }
        if self.region.is_empty() {
            return Err(Error::MissingCredential(Credential::Region));
        }
        Ok(())
    }
}

impl fmt::Debug for TranslationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationSettings")
            .field("api_key", &"***")
            .field("region", &self.region)
            .field("custom_endpoint", &self.custom_endpoint)
            .field("use_custom_endpoint", &self.use_custom_endpoint)
            .finish()
    }
}

/// Settings shared between the translator and the editing surface.
pub type SharedSettings = Arc<RwLock<TranslationSettings>>;

/// Copy of the current settings, taken in one read.
pub fn snapshot(settings: &SharedSettings) -> TranslationSettings {
    settings
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    ApiKey,
    Region,
    CustomEndpoint,
    UseCustomEndpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Observer = Arc<dyn Fn(&TranslationSettings, SettingsField) + Send + Sync>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Editable view over [`TranslationSettings`].
///
/// Every field write notifies the observers with a full snapshot. The store
/// registers one observer itself, which saves the whole settings object to
/// storage; [`SettingsStore::dispose`] (or dropping the store) removes it.
///
/// No lock is held while observers run. Saves are serialized and always
/// write the settings as they are when the save starts.
pub struct SettingsStore {
    settings: SharedSettings,
    observers: Mutex<Vec<(Subscription, Observer)>>,
    next_id: AtomicU64,
    persistence: Mutex<Option<Subscription>>,
}

impl SettingsStore {
    pub fn new(settings: SharedSettings, storage: Arc<dyn SettingsStorage>) -> Self {
        let store = Self {
            settings,
            observers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            persistence: Mutex::new(None),
        };
        let live = store.settings.clone();
        let save_gate = Mutex::new(());
        let subscription = store.subscribe(move |_, field| {
            let _gate = lock(&save_gate);
            if let Err(e) = storage.save(&snapshot(&live)) {
                log::warn!("Failed to save settings after {field:?} changed: {e:#}");
            }
        });
        *lock(&store.persistence) = Some(subscription);
        store
    }

    /// Observers run on the editing thread after the new value is stored.
    /// They may call setters on this store; each nested edit notifies again.
    pub fn subscribe(
        &self,
        observer: impl Fn(&TranslationSettings, SettingsField) + Send + Sync + 'static,
    ) -> Subscription {
        let subscription = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        let observer: Observer = Arc::new(observer);
        lock(&self.observers).push((subscription, observer));
        subscription
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut observers = lock(&self.observers);
        let before = observers.len();
        observers.retain(|(s, _)| *s != subscription);
        observers.len() != before
    }

    /// Stops persisting edits. Safe to call more than once.
    pub fn dispose(&self) {
        if let Some(subscription) = lock(&self.persistence).take() {
            self.unsubscribe(subscription);
        }
    }

    pub fn is_persisting(&self) -> bool {
        lock(&self.persistence).is_some()
    }

    pub fn snapshot(&self) -> TranslationSettings {
        snapshot(&self.settings)
    }

    pub fn api_key(&self) -> String {
        self.snapshot().api_key
    }

    pub fn region(&self) -> String {
        self.snapshot().region
    }

    pub fn custom_endpoint(&self) -> String {
        self.snapshot().custom_endpoint
    }

    pub fn use_custom_endpoint(&self) -> bool {
        self.snapshot().use_custom_endpoint
    }

    pub fn set_api_key(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(SettingsField::ApiKey, |s| s.api_key = value);
    }

    pub fn set_region(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(SettingsField::Region, |s| s.region = value);
    }

    pub fn set_custom_endpoint(&self, value: impl Into<String>) {
        let value = value.into();
        self.update(SettingsField::CustomEndpoint, |s| s.custom_endpoint = value);
    }

    pub fn set_use_custom_endpoint(&self, value: bool) {
        self.update(SettingsField::UseCustomEndpoint, |s| {
            s.use_custom_endpoint = value
        });
    }

    fn update(&self, field: SettingsField, apply: impl FnOnce(&mut TranslationSettings)) {
        let current = {
            let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut settings);
            settings.clone()
        };
        // cloned so observers may unsubscribe while being called
        let observers: Vec<Observer> = lock(&self.observers)
            .iter()
            .map(|(_, o)| o.clone())
            .collect();
        for observer in observers {
            observer(&current, field);
        }
    }
}

impl Drop for SettingsStore {
    fn drop(&mut self) {
        self.dispose();
    }
}
