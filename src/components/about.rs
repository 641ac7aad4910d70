//! About section: intro, current focus, and achievement counters.

use leptos::prelude::*;

use crate::content::profile::{ACHIEVEMENTS, CURRENTLY};

#[component]
pub fn About() -> impl IntoView {
    let focus = CURRENTLY
        .iter()
        .map(|item| {
            view! {
                <li class="about__focus-item">
                    <h4>{item.title}</h4>
                    <p>{item.detail}</p>
                </li>
            }
        })
        .collect_view();

    let achievements = ACHIEVEMENTS
        .iter()
        .enumerate()
        .map(|(index, a)| {
            view! {
                <div class="about__achievement" style=format!("--stagger: {index}")>
                    <div class="about__achievement-number">{a.number}</div>
                    <div class="about__achievement-label">{a.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="about" class="section about">
            <header class="section__header">
                <h2>"About Me"</h2>
                <p>
                    "I'm a passionate developer and designer with expertise in modern web technologies, "
                    "mobile development, and creative design. I love bringing ideas to life through code and design."
                </p>
            </header>
            <div class="about__currently">
                <h3>"Currently"</h3>
                <ul>{focus}</ul>
            </div>
            <div class="about__achievements">{achievements}</div>
        </section>
    }
}
