use leptos::prelude::*;
use portfolio_core::{NAV_ENTRIES, Section};

use crate::state::{use_portfolio, use_site_state};

#[component]
pub fn Header() -> impl IntoView {
    let state = use_site_state();
    let data = use_portfolio();
    let name = data.personal.name.clone();
    let github = data.personal.github.clone();
    let linkedin = data.personal.linkedin.clone();
    let menu_github = github.clone();
    let menu_linkedin = linkedin.clone();

    let nav_button = move |section: Section| {
        view! {
            <button
                class=move || {
                    if state.active.get() == section { "nav-link active" } else { "nav-link" }
                }
                on:click=move |_| state.navigate(section.anchor_id())
            >
                {section.label()}
            </button>
        }
    };

    view! {
        <header class=move || if state.scrolled.get() { "header scrolled" } else { "header" }>
            <div class="header-inner">
                <button class="brand" on:click=move |_| state.navigate_to(Section::Hero)>
                    {name}
                </button>

                <nav class="nav-links">
                    {NAV_ENTRIES.into_iter().map(nav_button).collect_view()}
                </nav>

                <div class="header-social">
                    <a href=github target="_blank" rel="noopener noreferrer" class="nav-link">"GitHub"</a>
                    <a href=linkedin target="_blank" rel="noopener noreferrer" class="nav-link">"LinkedIn"</a>
                    <button class="btn" on:click=move |_| state.navigate_to(Section::Contact)>
                        "Let's Talk"
                    </button>
                </div>

                <button class="menu-toggle" aria-label="Toggle menu" on:click=move |_| state.toggle_menu()>
                    {move || if state.menu_open() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>

            <Show when=move || state.menu_open()>
                <div class="mobile-menu">
                    {NAV_ENTRIES.into_iter().map(nav_button).collect_view()}
                    <a href=menu_github.clone() target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    <a href=menu_linkedin.clone() target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                    <button class="btn" on:click=move |_| state.navigate_to(Section::Contact)>
                        "Let's Talk"
                    </button>
                </div>
            </Show>
        </header>
    }
}
