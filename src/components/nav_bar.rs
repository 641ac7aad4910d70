//! Fixed navigation bar with section links, theme toggle, and resume link.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::config::{OWNER_NAME, RESUME_DOWNLOAD_NAME, RESUME_PATH};
use crate::state::scroll::ScrollState;
use crate::state::theme::ThemeMode;
use crate::util::env::Environment;
use crate::util::navigate::{self, Section};
use crate::util::theme;

/// Bar class: transparent at the top, solid once scrolled.
pub(crate) fn nav_class(scroll: ScrollState) -> &'static str {
    if scroll.past_threshold { "nav-bar nav-bar--solid" } else { "nav-bar nav-bar--transparent" }
}

/// Glyph on the theme toggle: offers the mode you would switch to.
pub(crate) fn theme_toggle_glyph(mode: ThemeMode) -> &'static str {
    if mode.is_dark() { "☀" } else { "☾" }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let theme_mode = expect_context::<RwSignal<ThemeMode>>();
    let env = expect_context::<Environment>();

    let on_toggle_theme = {
        let env = env.clone();
        move |_| {
            let current = theme_mode.get_untracked();
            let next = theme::toggle(current, env.settings.as_ref(), env.theme_surface.as_ref());
            theme_mode.set(next);
        }
    };

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            let env = env.clone();
            view! {
                <button
                    class="nav-bar__link"
                    on:click=move |_| {
                        navigate::go_to(env.navigator.as_ref(), section);
                    }
                >
                    {section.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class=move || nav_class(scroll.get())>
            <div class="nav-bar__inner">
                <div class="nav-bar__brand">
                    <span class="nav-bar__logo" aria-hidden="true">"</>"</span>
                    <span class="nav-bar__name">{OWNER_NAME}</span>
                </div>

                <div class="nav-bar__links">{links}</div>

                <button
                    class="btn nav-bar__theme-toggle"
                    on:click=on_toggle_theme
                    title="Toggle dark mode"
                    aria-label="Toggle dark mode"
                >
                    {move || theme_toggle_glyph(theme_mode.get())}
                </button>

                <a class="btn nav-bar__resume" href=RESUME_PATH download=RESUME_DOWNLOAD_NAME>
                    "Resume"
                </a>
            </div>
        </nav>
    }
}
