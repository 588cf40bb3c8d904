//! Feature Grid
//!
//! Card grid for the "why us" / facilities blocks on brochure pages.

use leptos::prelude::*;

use crate::models::Feature;

#[component]
pub fn FeatureGrid(features: Vec<Feature>) -> impl IntoView {
    view! {
        <section class="feature-section">
            <div class="feature-grid">
                {features.into_iter().map(|feature| view! {
                    <div class="feature-card">
                        <h3>{feature.title}</h3>
                        <p>{feature.detail}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}
