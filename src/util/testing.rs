//! In-memory capability fakes for unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::state::theme::ThemeMode;
use crate::util::mail::{LaunchError, MailLauncher};
use crate::util::navigate::SectionNavigator;
use crate::util::scroll::{ScrollCallback, ScrollSource, ScrollSubscription};
use crate::util::settings::SettingsStore;
use crate::util::theme::ThemeSurface;
use crate::util::timer::{Scheduler, Task};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================
// Settings
// =============================================================

#[derive(Default)]
pub struct MemorySettings {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemorySettings {
    pub fn with(key: &str, value: &str) -> Self {
        let settings = Self::default();
        lock(&settings.values).insert(key.to_owned(), value.to_owned());
        settings
    }

    pub fn get(&self, key: &str) -> Option<String> {
        lock(&self.values).get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

impl SettingsStore for MemorySettings {
    fn read(&self, key: &str) -> Option<String> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &str) {
        lock(&self.values).insert(key.to_owned(), value.to_owned());
        *lock(&self.writes) += 1;
    }
}

// =============================================================
// Theme surface
// =============================================================

#[derive(Default)]
pub struct RecordingSurface {
    applied: Mutex<Vec<ThemeMode>>,
}

impl RecordingSurface {
    pub fn applied(&self) -> Vec<ThemeMode> {
        lock(&self.applied).clone()
    }
}

impl ThemeSurface for RecordingSurface {
    fn apply(&self, mode: ThemeMode) {
        lock(&self.applied).push(mode);
    }
}

// =============================================================
// Mail
// =============================================================

#[derive(Default)]
pub struct RecordingLauncher {
    opened: Mutex<Vec<String>>,
}

impl RecordingLauncher {
    pub fn opened(&self) -> Vec<String> {
        lock(&self.opened).clone()
    }
}

impl MailLauncher for RecordingLauncher {
    fn open(&self, uri: &str) -> Result<(), LaunchError> {
        lock(&self.opened).push(uri.to_owned());
        Ok(())
    }
}

pub struct FailingLauncher(pub LaunchError);

impl MailLauncher for FailingLauncher {
    fn open(&self, _uri: &str) -> Result<(), LaunchError> {
        Err(self.0.clone())
    }
}

// =============================================================
// Navigation
// =============================================================

#[derive(Default)]
pub struct FakeDocument {
    ids: Vec<String>,
    scrolled_to: Mutex<Vec<String>>,
    top_scrolls: Mutex<usize>,
}

impl FakeDocument {
    pub fn with_ids(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|s| (*s).to_owned()).collect(),
            ..Self::default()
        }
    }

    pub fn scrolled_to(&self) -> Vec<String> {
        lock(&self.scrolled_to).clone()
    }

    pub fn top_scrolls(&self) -> usize {
        *lock(&self.top_scrolls)
    }
}

impl SectionNavigator for FakeDocument {
    fn scroll_to_section(&self, id: &str) -> bool {
        if !self.ids.iter().any(|known| known == id) {
            return false;
        }
        lock(&self.scrolled_to).push(id.to_owned());
        true
    }

    fn scroll_to_top(&self) {
        *lock(&self.top_scrolls) += 1;
    }
}

// =============================================================
// Timers
// =============================================================

/// Virtual-clock scheduler; tasks run only when `advance` passes their due time.
#[derive(Default)]
pub struct ManualScheduler {
    now: Mutex<Duration>,
    pending: Mutex<Vec<(Duration, Task)>>,
}

impl ManualScheduler {
    pub fn pending(&self) -> usize {
        lock(&self.pending).len()
    }

    pub fn advance(&self, by: Duration) {
        let now = {
            let mut now = lock(&self.now);
            *now += by;
            *now
        };
        let due: Vec<Task> = {
            let mut pending = lock(&self.pending);
            let (ready, waiting): (Vec<_>, Vec<_>) = pending.drain(..).partition(|(at, _)| *at <= now);
            *pending = waiting;
            ready.into_iter().map(|(_, task)| task).collect()
        };
        for task in due {
            task();
        }
    }
}

impl Scheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: Task) {
        let at = *lock(&self.now) + delay;
        lock(&self.pending).push((at, task));
    }
}

// =============================================================
// Scroll
// =============================================================

type Listeners = Arc<Mutex<Vec<(u64, Arc<dyn Fn(f64) + Send + Sync>)>>>;

#[derive(Default)]
pub struct ManualScrollSource {
    listeners: Listeners,
    next_id: Mutex<u64>,
}

impl ManualScrollSource {
    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub fn emit(&self, offset: f64) {
        let callbacks: Vec<_> = lock(&self.listeners).iter().map(|(_, cb)| cb.clone()).collect();
        for cb in callbacks {
            cb(offset);
        }
    }
}

impl ScrollSource for ManualScrollSource {
    fn subscribe(&self, on_change: ScrollCallback) -> ScrollSubscription {
        let id = {
            let mut next = lock(&self.next_id);
            *next += 1;
            *next
        };
        lock(&self.listeners).push((id, Arc::from(on_change)));
        let listeners = self.listeners.clone();
        ScrollSubscription::new(move || lock(&listeners).retain(|(other, _)| *other != id))
    }
}
