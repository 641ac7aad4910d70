//! Viewport scroll signal subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page listens for scroll offsets for as long as it is mounted. The
//! listener is held by a [`ScrollSubscription`] guard and released exactly
//! once when the guard drops, which the page ties to `on_cleanup`.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Callback receiving each new scroll offset.
pub type ScrollCallback = Box<dyn Fn(f64) + Send + Sync>;

/// Guard for an active scroll listener.
#[must_use = "dropping the subscription releases the listener"]
pub struct ScrollSubscription {
    release: Option<Release>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// A subscription with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Source of vertical scroll offsets in pixels.
pub trait ScrollSource: Send + Sync {
    /// Call `on_change` with the new offset on every scroll signal until the
    /// returned subscription is dropped.
    fn subscribe(&self, on_change: ScrollCallback) -> ScrollSubscription;
}

/// Window `scroll` events reporting `window.scrollY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScrollSource;

impl ScrollSource for WindowScrollSource {
    fn subscribe(&self, on_change: ScrollCallback) -> ScrollSubscription {
        #[cfg(feature = "csr")]
        {
            let handle = leptos::prelude::window_event_listener(leptos::ev::scroll, move |_| {
                let offset = web_sys::window().map_or(0.0, |w| w.scroll_y().unwrap_or(0.0));
                on_change(offset);
            });
            ScrollSubscription::new(move || handle.remove())
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(on_change);
            ScrollSubscription::inert()
        }
    }
}
