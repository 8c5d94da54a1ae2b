//! Theme preference persistence: a tiny key-value store holding one
//! JSON-encoded boolean under the `darkMode` key. The browser build
//! reads and writes localStorage; desktop keeps a JSON file under the
//! user config dir. Absent or malformed values fall back to light.

use std::collections::HashMap;

pub const DARK_MODE_KEY: &str = "darkMode";

/// Key-value preference storage.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Decode a stored dark-mode value. `None` (nothing stored) and
/// malformed text both mean light.
pub fn decode_dark_mode(raw: Option<&str>) -> bool {
    let Some(raw) = raw else { return false };
    match serde_json::from_str::<bool>(raw) {
        Ok(dark) => dark,
        Err(_) => {
            log::warn!("ignoring malformed {DARK_MODE_KEY} preference: {raw:?}");
            false
        }
    }
}

pub fn load_dark_mode(store: &impl PrefStore) -> bool {
    decode_dark_mode(store.get(DARK_MODE_KEY).as_deref())
}

pub fn store_dark_mode(store: &mut impl PrefStore, dark: bool) {
    store.set(DARK_MODE_KEY, if dark { "true" } else { "false" });
}

/// Read the preference from the platform store.
pub fn load_dark_mode_pref() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        load_dark_mode(&LocalStoragePrefStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FilePrefStore::open_default()
            .map(|store| load_dark_mode(&store))
            .unwrap_or(false)
    }
}

/// Write the preference to the platform store.
pub fn save_dark_mode_pref(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        store_dark_mode(&mut LocalStoragePrefStore, dark);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(mut store) = FilePrefStore::open_default() {
            store_dark_mode(&mut store, dark);
        }
    }
}

/// In-memory store, used by tests.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: HashMap<String, String>,
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Browser localStorage.
#[cfg(target_arch = "wasm32")]
pub struct LocalStoragePrefStore;

#[cfg(target_arch = "wasm32")]
impl PrefStore for LocalStoragePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::warn!("could not persist {key} preference to localStorage");
                }
            }
            None => log::warn!("localStorage unavailable, {key} preference not persisted"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file_store {
    use super::PrefStore;
    use once_cell::sync::Lazy;
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    static DEFAULT_PATH: Lazy<Option<PathBuf>> =
        Lazy::new(|| dirs::config_dir().map(|dir| dir.join("tiptally").join("prefs.json")));

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct PrefFile {
        entries: HashMap<String, String>,
    }

    /// JSON file under the user config dir.
    #[derive(Debug)]
    pub struct FilePrefStore {
        path: PathBuf,
        prefs: PrefFile,
    }

    impl FilePrefStore {
        /// Open the store at its default location. `None` when the host
        /// has no config dir.
        pub fn open_default() -> Option<Self> {
            DEFAULT_PATH.as_ref().map(|path| Self::open(path))
        }

        /// Unreadable or malformed files are treated as empty.
        pub fn open(path: &Path) -> Self {
            let prefs = std::fs::read_to_string(path)
                .ok()
                .and_then(|text| serde_json::from_str(&text).ok())
                .unwrap_or_default();
            Self {
                path: path.to_path_buf(),
                prefs,
            }
        }

        fn save(&self) {
            if let Some(parent) = self.path.parent() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    log::warn!("could not create preference dir {:?}: {}", parent, err);
                    return;
                }
            }
            match serde_json::to_string_pretty(&self.prefs) {
                Ok(json) => {
                    if let Err(err) = std::fs::write(&self.path, json) {
                        log::warn!("could not write preferences {:?}: {}", self.path, err);
                    }
                }
                Err(err) => log::warn!("could not encode preferences: {}", err),
            }
        }
    }

    impl PrefStore for FilePrefStore {
        fn get(&self, key: &str) -> Option<String> {
            self.prefs.entries.get(key).cloned()
        }

        fn set(&mut self, key: &str, value: &str) {
            self.prefs.entries.insert(key.to_string(), value.to_string());
            self.save();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FilePrefStore;
