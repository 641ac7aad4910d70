//! Theme initialization and toggle.
//!
//! Reads the persisted preference from a [`SettingsStore`] and applies it to
//! the document through a [`ThemeSurface`]. Toggle applies the flipped mode
//! and writes it back synchronously.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_STORAGE_KEY;
use crate::state::theme::ThemeMode;
use crate::util::settings::SettingsStore;

/// Document-wide theme marker.
pub trait ThemeSurface: Send + Sync {
    fn apply(&self, mode: ThemeMode);
}

/// Sets `data-theme` on the `<html>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentThemeSurface;

impl ThemeSurface for DocumentThemeSurface {
    fn apply(&self, mode: ThemeMode) {
        #[cfg(feature = "csr")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            else {
                return;
            };
            if let Err(err) = el.set_attribute("data-theme", mode.as_str()) {
                log::warn!("failed to apply theme marker: {err:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = mode;
        }
    }
}

/// Read the persisted theme. Anything but `"dark"` resolves to light.
pub fn read_preference(settings: &dyn SettingsStore) -> ThemeMode {
    ThemeMode::resolve(settings.read(THEME_STORAGE_KEY).as_deref())
}

/// Resolve the persisted theme and apply it to the document.
pub fn init(settings: &dyn SettingsStore, surface: &dyn ThemeSurface) -> ThemeMode {
    let mode = read_preference(settings);
    surface.apply(mode);
    log::debug!("theme initialized: {}", mode.as_str());
    mode
}

/// Flip the theme, apply it, and persist the new value.
pub fn toggle(current: ThemeMode, settings: &dyn SettingsStore, surface: &dyn ThemeSurface) -> ThemeMode {
    let next = current.toggled();
    surface.apply(next);
    settings.write(THEME_STORAGE_KEY, next.as_str());
    log::debug!("theme toggled: {} -> {}", current.as_str(), next.as_str());
    next
}
