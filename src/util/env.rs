//! Bundle of environment capabilities provided to components via context.

use std::sync::Arc;

use crate::util::mail::{MailLauncher, WindowMailLauncher};
use crate::util::navigate::{SectionNavigator, SmoothScrollNavigator};
use crate::util::scroll::{ScrollSource, WindowScrollSource};
use crate::util::settings::{LocalStorageSettings, SettingsStore};
use crate::util::theme::{DocumentThemeSurface, ThemeSurface};
use crate::util::timer::{BrowserScheduler, Scheduler};

/// Every side-effecting capability the page uses.
#[derive(Clone)]
pub struct Environment {
    pub settings: Arc<dyn SettingsStore>,
    pub theme_surface: Arc<dyn ThemeSurface>,
    pub mail: Arc<dyn MailLauncher>,
    pub navigator: Arc<dyn SectionNavigator>,
    pub scroll: Arc<dyn ScrollSource>,
    pub scheduler: Arc<dyn Scheduler>,
}

impl Environment {
    /// Capabilities backed by the real browser window.
    #[must_use]
    pub fn browser() -> Self {
        Self {
            settings: Arc::new(LocalStorageSettings),
            theme_surface: Arc::new(DocumentThemeSurface),
            mail: Arc::new(WindowMailLauncher),
            navigator: Arc::new(SmoothScrollNavigator),
            scroll: Arc::new(WindowScrollSource),
            scheduler: Arc::new(BrowserScheduler),
        }
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
