//! Featured projects section.

use leptos::prelude::*;

use crate::content::projects::{PROJECTS, ProjectEntry};

#[component]
fn ProjectCard(project: ProjectEntry, index: usize) -> impl IntoView {
    let chips = project
        .technologies
        .iter()
        .map(|tech| view! { <span class="chip">{*tech}</span> })
        .collect_view();

    view! {
        <article class="project-card" style=format!("--stagger: {index}")>
            <div class="project-card__media">
                <img class="project-card__image" src=project.image alt=project.title/>
                <span class=format!("badge badge--{}", project.status.badge_variant())>
                    {project.status.label()}
                </span>
                <a
                    class="project-card__link"
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=format!("Open {}", project.title)
                >
                    "↗"
                </a>
            </div>
            <header class="project-card__header">
                <h3 class="project-card__title">{project.title}</h3>
                <span class="project-card__year">{project.year}</span>
            </header>
            <p class="project-card__description">{project.description}</p>
            <div class="project-card__chips">{chips}</div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| view! { <ProjectCard project=*project index=index/> })
        .collect_view();

    view! {
        <section id="projects" class="section projects">
            <header class="section__header">
                <h2>"Featured Projects"</h2>
                <p>"A selection of my recent work showcasing different technologies and design approaches"</p>
            </header>
            <div class="projects__grid">{cards}</div>
        </section>
    }
}
