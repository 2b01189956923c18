use leptos::prelude::*;
use portfolio_core::links::social_links;
use portfolio_core::{NAV_ENTRIES, Section};

use super::link_view;
use crate::state::{use_portfolio, use_site_state};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_site_state();
    let data = use_portfolio();
    let personal = &data.personal;

    view! {
        <footer class="footer">
            <div class="footer-brand">
                <strong>{personal.name.clone()}</strong>
                <p>{personal.title.clone()}</p>
            </div>
            <nav class="footer-links">
                {NAV_ENTRIES
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button class="nav-link" on:click=move |_| state.navigate_to(section)>
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="footer-social">
                {social_links(personal)
                    .into_iter()
                    .map(|link| link_view(link, false))
                    .collect_view()}
            </div>
            <p>{format!("\u{00A9} {} {}. All rights reserved.", current_year(), personal.name)}</p>
            <button class="nav-link" on:click=move |_| state.navigate_to(Section::Hero)>
                "Back to top \u{2191}"
            </button>
        </footer>
    }
}
