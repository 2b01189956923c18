use leptos::prelude::*;
use portfolio_core::{Grade, Section};

use crate::state::use_portfolio;

#[component]
pub fn Education() -> impl IntoView {
    let data = use_portfolio();

    let entries = data
        .education
        .iter()
        .map(|entry| {
            let grade = entry.grade().map(|grade| {
                let label = match grade {
                    Grade::Cgpa(_) => "CGPA",
                    Grade::Percentage(_) => "Score",
                };
                view! { <p class="grade">{format!("{label}: {}", grade.value())}</p> }
            });
            let coursework = (!entry.coursework.is_empty()).then(|| {
                let items = entry
                    .coursework
                    .iter()
                    .map(|course| view! { <span class="badge">{course.clone()}</span> })
                    .collect_view();
                view! { <div class="coursework">{items}</div> }
            });
            view! {
                <div class="card">
                    <h3>{entry.degree.clone()}</h3>
                    <p>{entry.institution.clone()}</p>
                    <p class="muted">{format!("{} \u{00B7} {}", entry.location, entry.duration)}</p>
                    {grade}
                    {coursework}
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=Section::Education.anchor_id()>
            <h2>"Education"</h2>
            {entries}
        </section>
    }
}
