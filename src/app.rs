//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::SITE_TITLE;
use crate::content::PortfolioData;
use crate::pages::home::HomePage;
use crate::state::scroll::ScrollState;
use crate::state::theme::ThemeMode;
use crate::util::env::Environment;
use crate::util::theme;

/// Root application component.
///
/// Resolves the persisted theme, then provides the environment, content,
/// and shared view state to the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let env = Environment::browser();
    let mode: ThemeMode = theme::init(env.settings.as_ref(), env.theme_surface.as_ref());

    provide_context(RwSignal::new(mode));
    provide_context(RwSignal::new(ScrollState::default()));
    provide_context(PortfolioData::embedded());
    provide_context(env);

    view! {
        <Title text=SITE_TITLE/>
        <HomePage/>
    }
}
