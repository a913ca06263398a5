//! Locale State
//!
//! The active language code as shared, observable state. Changing it persists
//! the new code and notifies subscribers; translations always resolve against
//! the code that is current at call time.

use crate::constants::{DEFAULT_LOCALE, LOCALE_STORAGE_KEY};
use crate::i18n::{Catalog, catalog};
use crate::states::{MemoryPreferences, PreferenceStore, TomlPreferences};
use crossbeam_channel::{Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, warn};

/// Notification sent to subscribers when the active locale changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChanged {
    pub previous: String,
    pub current: String,
}

/// Shared locale store
///
/// The value sits behind a read/write lock, so concurrent writers from
/// several threads are safe; the last write wins.
pub struct LocaleStore {
    current: RwLock<String>,
    storage: Arc<dyn PreferenceStore>,
    catalog: Arc<Catalog>,
    subscribers: Mutex<Vec<Sender<LocaleChanged>>>,
}

impl LocaleStore {
    /// Create a store backed by `storage`, using the embedded dictionaries
    pub fn new(storage: Arc<dyn PreferenceStore>) -> Self {
        Self::with_catalog(storage, catalog())
    }

    /// Create a store with an explicit catalog
    pub fn with_catalog(storage: Arc<dyn PreferenceStore>, catalog: Arc<Catalog>) -> Self {
        let current = read_persisted_locale(storage.as_ref());
        info!(locale = %current, "Locale store initialized");
        Self {
            current: RwLock::new(current),
            storage,
            catalog,
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current language code
    pub fn locale(&self) -> String {
        self.current.read().clone()
    }

    /// Change the language code and persist it.
    ///
    /// The code is not validated; an unknown code makes every lookup fall
    /// back to its key. A failed write is logged and the in-memory value is
    /// still updated. Subscribers are notified under the write lock, so they
    /// see changes in the order they were applied.
    pub fn set_locale(&self, code: impl Into<String>) {
        let code = code.into();
        let mut current = self.current.write();
        let previous = std::mem::replace(&mut *current, code.clone());

        if let Err(e) = self.storage.set(LOCALE_STORAGE_KEY, &code) {
            error!(error = %e, locale = %code, "Failed to persist locale");
        }

        if previous == code {
            return;
        }

        info!(from = %previous, to = %code, "Locale changed");
        self.notify(LocaleChanged {
            previous,
            current: code,
        });
    }

    /// Receive a [`LocaleChanged`] for every effective change from now on
    pub fn subscribe(&self) -> Receiver<LocaleChanged> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    /// Translate a dotted key for the current locale
    pub fn t(&self, key: &str) -> String {
        let locale = self.current.read();
        self.catalog.translate(&locale, key)
    }

    /// Translate a key for the current locale and substitute `{name}` placeholders
    pub fn t_format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let locale = self.current.read();
        self.catalog.format(&locale, key, args)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn notify(&self, event: LocaleChanged) {
        let mut subscribers = self.subscribers.lock();
        // Drop subscribers whose receiver is gone
        subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        debug!(subscribers = subscribers.len(), "Locale change delivered");
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &*self.current.read())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}

/// Persisted locale, or the default when absent, blank or unreadable
fn read_persisted_locale(storage: &dyn PreferenceStore) -> String {
    match storage.get(LOCALE_STORAGE_KEY) {
        Ok(Some(code)) if !code.trim().is_empty() => code,
        Ok(_) => DEFAULT_LOCALE.to_string(),
        Err(e) => {
            warn!(error = %e, "Failed to read persisted locale, using default");
            DEFAULT_LOCALE.to_string()
        }
    }
}

// ==================== Global Store ====================

static LOCALE_STORE: OnceLock<LocaleStore> = OnceLock::new();

/// Install the process-wide store. Returns `false` if one already exists.
pub fn init_global(store: LocaleStore) -> bool {
    LOCALE_STORE.set(store).is_ok()
}

/// Process-wide store, backed by the preference file on first use
pub fn global() -> &'static LocaleStore {
    LOCALE_STORE.get_or_init(|| {
        let storage: Arc<dyn PreferenceStore> = match TomlPreferences::open_default() {
            Ok(prefs) => Arc::new(prefs),
            Err(e) => {
                warn!(error = %e, "Preference file unavailable, locale will not persist");
                Arc::new(MemoryPreferences::new())
            }
        };
        LocaleStore::new(storage)
    })
}

/// Current language code of the process-wide store
pub fn current_locale() -> String {
    global().locale()
}

/// Change the process-wide language code and persist it
pub fn set_locale(code: impl Into<String>) {
    global().set_locale(code);
}

/// Translate a dotted key for the process-wide locale
pub fn t(key: &str) -> String {
    global().t(key)
}

/// Translate with `{name}` placeholders for the process-wide locale
pub fn t_format(key: &str, args: &[(&str, &str)]) -> String {
    global().t_format(key, args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};

    struct FailingPreferences;

    impl PreferenceStore for FailingPreferences {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Invalid {
                message: "unreadable".to_string(),
            })
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Invalid {
                message: "read-only".to_string(),
            })
        }
    }

    fn memory_store() -> (Arc<MemoryPreferences>, LocaleStore) {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = LocaleStore::new(prefs.clone());
        (prefs, store)
    }

    #[test]
    fn defaults_to_english_without_preference() {
        let (_, store) = memory_store();
        assert_eq!(store.locale(), "en");
    }

    #[test]
    fn blank_preference_falls_back_to_default() {
        let prefs = Arc::new(MemoryPreferences::with_value(LOCALE_STORAGE_KEY, "  "));
        let store = LocaleStore::new(prefs);
        assert_eq!(store.locale(), "en");
    }

    #[test]
    fn unreadable_preference_falls_back_to_default() {
        let store = LocaleStore::new(Arc::new(FailingPreferences));
        assert_eq!(store.locale(), "en");
    }

    #[test]
    fn set_locale_updates_and_persists() {
        let (prefs, store) = memory_store();
        store.set_locale("zh-TW");
        assert_eq!(store.locale(), "zh-TW");
        assert_eq!(
            prefs.get(LOCALE_STORAGE_KEY).expect("get").as_deref(),
            Some("zh-TW")
        );

        // a fresh store over the same storage starts from the saved code
        let reloaded = LocaleStore::new(prefs);
        assert_eq!(reloaded.locale(), "zh-TW");
    }

    #[test]
    fn persisted_locale_survives_restart_on_disk() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("prefs.toml");

        LocaleStore::new(Arc::new(TomlPreferences::at(&path))).set_locale("zh-TW");

        let restarted = LocaleStore::new(Arc::new(TomlPreferences::at(&path)));
        assert_eq!(restarted.locale(), "zh-TW");
        assert_eq!(restarted.t("sections.poem"), "程式詩歌");
    }

    #[test]
    fn set_locale_is_idempotent() {
        let (prefs, store) = memory_store();
        let rx = store.subscribe();

        store.set_locale("zh-TW");
        store.set_locale("zh-TW");

        assert_eq!(store.locale(), "zh-TW");
        assert_eq!(
            prefs.get(LOCALE_STORAGE_KEY).expect("get").as_deref(),
            Some("zh-TW")
        );
        assert_eq!(rx.try_iter().count(), 1);
    }

    #[test]
    fn persistence_failure_still_changes_locale() {
        let store = LocaleStore::new(Arc::new(FailingPreferences));
        store.set_locale("zh-TW");
        assert_eq!(store.locale(), "zh-TW");
    }

    #[test]
    fn subscribers_receive_changes() {
        let (_, store) = memory_store();
        let first = store.subscribe();
        let second = store.subscribe();

        store.set_locale("zh-TW");
        store.set_locale("en");

        let expected = vec![
            LocaleChanged {
                previous: "en".to_string(),
                current: "zh-TW".to_string(),
            },
            LocaleChanged {
                previous: "zh-TW".to_string(),
                current: "en".to_string(),
            },
        ];
        assert_eq!(first.try_iter().collect::<Vec<_>>(), expected);
        assert_eq!(second.try_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn concurrent_writers_notify_in_write_order() {
        let (_, store) = memory_store();
        let rx = store.subscribe();

        std::thread::scope(|scope| {
            for worker in 0..4 {
                let store = &store;
                scope.spawn(move || {
                    for round in 0..50 {
                        let code = if (worker + round) % 2 == 0 { "zh-TW" } else { "en" };
                        store.set_locale(code);
                    }
                });
            }
        });

        let events: Vec<LocaleChanged> = rx.try_iter().collect();
        assert!(!events.is_empty());
        assert_eq!(events[0].previous, "en");
        for pair in events.windows(2) {
            assert_eq!(pair[0].current, pair[1].previous);
        }
        let last = events.last().expect("at least one change");
        assert_eq!(last.current, store.locale());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let (_, store) = memory_store();
        drop(store.subscribe());
        let live = store.subscribe();

        store.set_locale("zh-TW");

        assert_eq!(store.subscribers.lock().len(), 1);
        assert_eq!(live.try_iter().count(), 1);
    }

    #[test]
    fn translate_follows_current_locale() {
        let (_, store) = memory_store();
        assert_eq!(store.t("app.title"), "Repo Saga Engine");
        assert_eq!(
            store.t("app.subtitle"),
            "Turn GitHub projects into poetry and fiction"
        );

        store.set_locale("zh-TW");
        assert_eq!(store.t("app.title"), "Repo Saga Engine");
        assert_eq!(store.t("app.subtitle"), "將 GitHub 專案轉化為詩歌與小說的魔法引擎");
    }

    #[test]
    fn unknown_locale_translates_to_keys() {
        let (_, store) = memory_store();
        store.set_locale("fr");
        assert_eq!(store.locale(), "fr");
        assert_eq!(store.t("app.title"), "app.title");
        assert_eq!(store.t("sections.poem"), "sections.poem");
    }

    #[test]
    fn missing_keys_translate_to_themselves() {
        let (_, store) = memory_store();
        assert_eq!(store.t("nope"), "nope");
        assert_eq!(store.t("app.nope.deeper"), "app.nope.deeper");
        assert_eq!(store.t("results"), "results");
    }

    #[test]
    fn custom_catalog_is_used() {
        let mut catalog = Catalog::default();
        catalog.insert_source("en", "greeting = \"Hello {name}\"\n");
        let store = LocaleStore::with_catalog(Arc::new(MemoryPreferences::new()), Arc::new(catalog));

        assert_eq!(store.t_format("greeting", &[("name", "Ada")]), "Hello Ada");
        assert_eq!(store.t("app.title"), "app.title");
    }
}
