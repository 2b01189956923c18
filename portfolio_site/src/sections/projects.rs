use leptos::prelude::*;
use portfolio_core::{
    CategoryFilter, FILTER_CHOICES, ProjectEntry, Section, filter_projects, visible_tech,
};

use crate::state::use_portfolio;

/// Badges shown per card before collapsing into "+N more".
const MAX_TECH_BADGES: usize = 4;

#[component]
pub fn Projects() -> impl IntoView {
    let data = use_portfolio();
    let filter = RwSignal::new(CategoryFilter::All);

    let filter_button = move |choice: CategoryFilter| {
        view! {
            <button
                class=move || if filter.get() == choice { "btn" } else { "btn outline" }
                on:click=move |_| filter.set(choice)
            >
                {choice.label()}
            </button>
        }
    };

    let cards = move || {
        filter_projects(&data.projects, filter.get())
            .into_iter()
            .map(project_card)
            .collect_view()
    };

    view! {
        <section id=Section::Projects.anchor_id()>
            <h2>"Featured Projects"</h2>
            <div class="filters">
                {FILTER_CHOICES.into_iter().map(filter_button).collect_view()}
            </div>
            <div class="grid">{cards}</div>
        </section>
    }
}

fn project_card(project: &ProjectEntry) -> AnyView {
    let badges = visible_tech(&project.tech_stack, MAX_TECH_BADGES);
    let shown = badges
        .shown
        .iter()
        .map(|tech| view! { <span class="badge">{tech.clone()}</span> })
        .collect_view();
    let more = (badges.hidden > 0)
        .then(|| view! { <span class="badge">{format!("+{} more", badges.hidden)}</span> });

    let features = project
        .features
        .iter()
        .map(|feature| view! { <li>{feature.clone()}</li> })
        .collect_view();

    let image = project.image.clone().map(|src| {
        view! { <img class="project-image" src=src alt=project.title.clone() loading="lazy" /> }
    });
    let demo = project.live_demo.clone().map(|href| {
        view! {
            <a class="btn" href=href target="_blank" rel="noopener noreferrer">"Live Demo"</a>
        }
    });

    view! {
        <div class="card">
            {image}
            <span class="badge">{project.category.label()}</span>
            <span class="badge">{project.status.label()}</span>
            <h3>{project.title.clone()}</h3>
            <p class="muted">{project.subtitle.clone()}</p>
            <p>{project.description.clone()}</p>
            <ul>{features}</ul>
            <div>{shown}{more}</div>
            <div class="project-links">
                <a class="btn outline" href=project.github.clone() target="_blank" rel="noopener noreferrer">
                    "Code"
                </a>
                {demo}
            </div>
        </div>
    }
    .into_any()
}
