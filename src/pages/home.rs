//! The portfolio page: every section plus the scroll listener.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::contact_form::ContactForm;
use crate::components::contact_info::ContactInfo;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::nav_bar::NavBar;
use crate::components::projects::Projects;
use crate::components::scroll_top::ScrollTopButton;
use crate::components::tech_grid::TechGrid;
use crate::state::scroll::ScrollState;
use crate::util::env::Environment;
use crate::util::scroll::ScrollSource;

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

/// Feed `scroll` from `source` until the current owner is cleaned up.
pub(crate) fn track_scroll(source: &dyn ScrollSource, scroll: RwSignal<ScrollState>) {
    let subscription = source.subscribe(Box::new(move |offset| {
        let next = ScrollState::from_offset(offset);
        if scroll.try_get_untracked().is_some_and(|current| current != next) {
            scroll.set(next);
        }
    }));
    on_cleanup(move || drop(subscription));
}

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let env = expect_context::<Environment>();

    // Listener lives exactly as long as the page.
    track_scroll(env.scroll.as_ref(), scroll);

    view! {
        <div class="page">
            <NavBar/>
            <main>
                <Hero/>
                <About/>
                <TechGrid/>
                <Projects/>
                <section id="contact" class="section contact">
                    <header class="section__header">
                        <h2>"Let's Work Together"</h2>
                        <p>
                            "Have a project in mind? I'd love to hear from you and discuss how we can "
                            "bring your ideas to life."
                        </p>
                    </header>
                    <div class="contact__layout">
                        <ContactForm/>
                        <ContactInfo/>
                    </div>
                </section>
            </main>
            <Footer/>
            <ScrollTopButton/>
        </div>
    }
}
