//! Call-To-Action Banner

use leptos::prelude::*;

use crate::models::Cta;

#[component]
pub fn CtaSection(cta: Cta) -> impl IntoView {
    view! {
        <section class="cta-section">
            <h2>{cta.heading}</h2>
            <p>{cta.text}</p>
            <a class="btn-primary" href=cta.button_href>{cta.button_label}</a>
        </section>
    }
}
