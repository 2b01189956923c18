use leptos::prelude::*;
use portfolio_core::Section;

use crate::state::use_portfolio;

/// Bio, skill groups, certifications and interests.
#[component]
pub fn About() -> impl IntoView {
    let data = use_portfolio();

    let skill_groups = data
        .skills
        .groups()
        .into_iter()
        .map(|(title, items)| {
            let badges = items
                .iter()
                .map(|skill| view! { <span class="badge">{skill.clone()}</span> })
                .collect_view();
            view! {
                <div class="card">
                    <h3>{title}</h3>
                    <div>{badges}</div>
                </div>
            }
        })
        .collect_view();

    let has_certs = !data.certifications.is_empty();
    let certifications = data
        .certifications
        .iter()
        .map(|cert| {
            view! {
                <div class="card">
                    <h4>{cert.name.clone()}</h4>
                    <p class="muted">{format!("{} \u{00B7} {}", cert.issuer, cert.year)}</p>
                    <p>{cert.description.clone()}</p>
                </div>
            }
        })
        .collect_view();

    let interests = data
        .interests
        .iter()
        .map(|interest| view! { <li>{interest.clone()}</li> })
        .collect_view();

    view! {
        <section id=Section::About.anchor_id()>
            <h2>"About Me"</h2>
            <p class="bio">{data.personal.bio.clone()}</p>

            <h3>"Skills"</h3>
            <div class="grid">{skill_groups}</div>

            {has_certs.then(|| view! { <h3>"Certifications"</h3> })}
            <div class="grid">{certifications}</div>

            <h3>"Interests"</h3>
            <ul>{interests}</ul>
        </section>
    }
}
