//! Process Steps
//!
//! Numbered step list used on the service pages.

use leptos::prelude::*;

use crate::models::ProcessStep;

#[component]
pub fn ProcessSteps(steps: Vec<ProcessStep>) -> impl IntoView {
    view! {
        <section class="process-section">
            <h2>"How It Works"</h2>
            <ol class="process-steps">
                {steps.into_iter().map(|step| view! {
                    <li class="process-step">
                        <span class="process-step-number">{step.number}</span>
                        <div>
                            <h3>{step.title}</h3>
                            <p>{step.detail}</p>
                        </div>
                    </li>
                }).collect_view()}
            </ol>
        </section>
    }
}
