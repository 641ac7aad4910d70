//! Smooth in-page navigation between named sections.

#[cfg(test)]
#[path = "navigate_test.rs"]
mod navigate_test;

/// Navigable page sections, in navigation-bar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::About, Section::Projects, Section::Skills, Section::Contact];

    /// Element id carried by the section's container.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Viewport scrolling capability.
pub trait SectionNavigator: Send + Sync {
    /// Smoothly bring the element with `id` into view. Returns `false` and
    /// leaves the viewport untouched when no such element exists.
    fn scroll_to_section(&self, id: &str) -> bool;

    /// Smoothly scroll back to the top of the page.
    fn scroll_to_top(&self);
}

/// Navigate to a known section.
pub fn go_to(navigator: &dyn SectionNavigator, section: Section) -> bool {
    navigator.scroll_to_section(section.id())
}

/// Look `id` up with `find` and hand the element to `scroll`. A missing
/// element leaves the viewport alone and returns `false`.
pub fn scroll_to_section_with<E>(
    id: &str,
    find: impl FnOnce(&str) -> Option<E>,
    scroll: impl FnOnce(&E),
) -> bool {
    let Some(el) = find(id) else {
        log::debug!("no section with id {id}");
        return false;
    };
    scroll(&el);
    true
}

/// `scrollIntoView` / `scrollTo` with smooth behavior.
#[derive(Clone, Copy, Debug, Default)]
pub struct SmoothScrollNavigator;

impl SectionNavigator for SmoothScrollNavigator {
    fn scroll_to_section(&self, id: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            scroll_to_section_with(
                id,
                |id| web_sys::window().and_then(|w| w.document()).and_then(|doc| doc.get_element_by_id(id)),
                |el: &web_sys::Element| {
                    let options = web_sys::ScrollIntoViewOptions::new();
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    el.scroll_into_view_with_scroll_into_view_options(&options);
                },
            )
        }
        #[cfg(not(feature = "csr"))]
        {
            scroll_to_section_with(id, |_| None::<()>, |_| {})
        }
    }

    fn scroll_to_top(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
