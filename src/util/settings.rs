//! Persisted key/value settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page persists exactly one setting (the theme). Reads happen once at
//! mount and writes once per change, so the browser store is touched
//! synchronously with no caching layer.

/// A persisted string setting store.
pub trait SettingsStore: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `localStorage`-backed settings. Missing storage reads as empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSettings;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().unwrap_or(None))
}

impl SettingsStore for LocalStorageSettings {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).unwrap_or(None)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("failed to persist {key}: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }
}
