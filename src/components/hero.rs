//! Landing hero with greeting, calls to action, and a scroll hint.

use leptos::prelude::*;

use crate::config::OWNER_NAME;
use crate::content::profile::{HERO_TRAITS, TAGLINE_ROLE};
use crate::util::env::Environment;
use crate::util::navigate::{self, Section};

#[component]
pub fn Hero() -> impl IntoView {
    let env = expect_context::<Environment>();
    let go = move |section: Section| {
        let env = env.clone();
        move |_: leptos::ev::MouseEvent| {
            navigate::go_to(env.navigator.as_ref(), section);
        }
    };

    let traits = HERO_TRAITS
        .iter()
        .enumerate()
        .map(|(index, label)| {
            view! {
                <span class="hero__trait" style=format!("--stagger: {index}")>{*label}</span>
            }
        })
        .collect_view();

    view! {
        <section class="hero">
            <div class="hero__backdrop" aria-hidden="true"></div>
            <div class="hero__content">
                <p class="hero__availability">"Available worldwide"</p>
                <h1 class="hero__title">
                    "Hi, I'm " <span class="hero__name">{OWNER_NAME}</span>
                </h1>
                <p class="hero__tagline">
                    "I'm a passionate " <strong>{TAGLINE_ROLE}</strong>
                    " who loves crafting digital experiences with modern technologies. "
                    "I turn ideas into reality through clean code and beautiful design."
                </p>
                <div class="hero__traits">{traits}</div>
                <div class="hero__actions">
                    <button class="btn btn--primary" on:click=go(Section::Projects)>
                        "View My Work"
                    </button>
                    <button class="btn btn--outline" on:click=go(Section::Contact)>
                        "Get In Touch"
                    </button>
                </div>
            </div>
            <button class="hero__scroll-hint" aria-label="Scroll to about" on:click=go(Section::About)>
                "⌄"
            </button>
        </section>
    }
}
