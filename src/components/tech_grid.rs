//! Skills section: the technology badge grid.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::content::PortfolioData;
use crate::content::tech::{TechBadge, build_tech_badges};

#[component]
fn Badge(badge: TechBadge, index: usize) -> impl IntoView {
    let icon = match badge.icon.monogram() {
        Some(mark) => view! {
            <svg class="tech-badge__icon" viewBox="0 0 40 40" role="img" aria-label=badge.name.clone()>
                <rect width="40" height="40" rx="8" fill=badge.icon.brand_color()/>
                <text x="20" y="25" text-anchor="middle" font-size="14" font-weight="700" fill="#FFFFFF">
                    {mark}
                </text>
            </svg>
        }
        .into_any(),
        None => view! { <span class="tech-badge__icon tech-badge__icon--generic">"</>"</span> }.into_any(),
    };
    view! {
        <div class="tech-badge" title=badge.name style=format!("--stagger: {index}")>
            <div class=format!("tech-badge__tile {}", badge.color_class)>{icon}</div>
        </div>
    }
}

#[component]
pub fn TechGrid() -> impl IntoView {
    let data = expect_context::<PortfolioData>();
    let badges = build_tech_badges(&data.tech_stack)
        .into_iter()
        .enumerate()
        .map(|(index, badge)| view! { <Badge badge=badge index=index/> })
        .collect_view();

    view! {
        <section id="skills" class="section skills">
            <header class="section__header">
                <h2>"Tech Stack"</h2>
                <p>"Technologies and tools I use to bring projects to life"</p>
            </header>
            <div class="skills__grid">{badges}</div>
        </section>
    }
}
