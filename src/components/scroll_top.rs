//! Floating "back to top" control, shown once the page is scrolled.

#[cfg(test)]
#[path = "scroll_top_test.rs"]
mod scroll_top_test;

use leptos::prelude::*;

use crate::state::scroll::ScrollState;
use crate::util::env::Environment;

pub(crate) fn scroll_top_class(scroll: ScrollState) -> &'static str {
    if scroll.past_threshold { "scroll-top scroll-top--visible" } else { "scroll-top" }
}

#[component]
pub fn ScrollTopButton() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let env = expect_context::<Environment>();

    view! {
        <button
            class=move || scroll_top_class(scroll.get())
            aria-hidden=move || (!scroll.get().past_threshold).to_string()
            aria-label="Scroll to top"
            on:click=move |_| env.navigator.scroll_to_top()
        >
            "↑"
        </button>
    }
}
