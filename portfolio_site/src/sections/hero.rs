use leptos::prelude::*;
use portfolio_core::Section;
use portfolio_core::links::social_links;

use super::link_view;
use crate::state::{use_portfolio, use_site_state};

#[component]
pub fn Hero() -> impl IntoView {
    let state = use_site_state();
    let data = use_portfolio();
    let personal = &data.personal;
    let resume = personal.resume_url.clone();

    view! {
        <section id=Section::Hero.anchor_id() class="hero">
            <p class="hero-greeting">"Hello, I'm"</p>
            <h1>{personal.name.clone()}</h1>
            <p class="hero-title">{personal.title.clone()}</p>
            <p class="hero-subtitle">{personal.subtitle.clone()}</p>
            <p class="hero-tagline">{personal.tagline.clone()}</p>

            <div class="hero-actions">
                <button class="btn" on:click=move |_| state.navigate_to(Section::Projects)>
                    "View My Work"
                </button>
                {resume.map(|url| view! {
                    <a class="btn outline" href=url target="_blank" rel="noopener noreferrer">
                        "Download Resume"
                    </a>
                })}
            </div>

            <div class="hero-social">
                {social_links(personal)
                    .into_iter()
                    .map(|link| link_view(link, false))
                    .collect_view()}
            </div>

            <button class="scroll-indicator" aria-label="Scroll to about" on:click=move |_| state.navigate_to(Section::About)>
                "\u{2193}"
            </button>
        </section>
    }
}
