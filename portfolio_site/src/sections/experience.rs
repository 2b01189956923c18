use leptos::prelude::*;
use portfolio_core::Section;

use crate::state::use_portfolio;

#[component]
pub fn Experience() -> impl IntoView {
    let data = use_portfolio();

    let entries = data
        .experience
        .iter()
        .map(|entry| {
            let skills = entry
                .skills
                .iter()
                .map(|skill| view! { <span class="badge">{skill.clone()}</span> })
                .collect_view();
            let link = entry.link.clone().map(|href| {
                view! {
                    <a href=href target="_blank" rel="noopener noreferrer">"View certificate"</a>
                }
            });
            view! {
                <div class="card">
                    <h3>{entry.role.clone()}</h3>
                    <p>{entry.company.clone()}</p>
                    <p class="muted">{format!("{} \u{00B7} {}", entry.engagement, entry.duration)}</p>
                    <p>{entry.description.clone()}</p>
                    <div>{skills}</div>
                    {link}
                </div>
            }
        })
        .collect_view();

    let achievements = (!data.achievements.is_empty()).then(|| {
        let cards = data
            .achievements
            .iter()
            .map(|achievement| {
                view! {
                    <div class="card">
                        <h4>{achievement.title.clone()}</h4>
                        <p>{achievement.description.clone()}</p>
                        <p class="muted">{achievement.year.clone()}</p>
                    </div>
                }
            })
            .collect_view();
        view! {
            <h3>"Key Achievements"</h3>
            <div class="grid">{cards}</div>
        }
    });

    view! {
        <section id=Section::Experience.anchor_id()>
            <h2>"Experience"</h2>
            {entries}
            {achievements}
        </section>
    }
}
