//! Page Hero
//!
//! Full-width banner with background image, title, and strapline.

use leptos::prelude::*;

#[component]
pub fn PageHero(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    #[prop(into)] image_src: String,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <img class="page-hero-image" src=image_src alt=title.clone()/>
            <div class="page-hero-overlay"></div>
            <div class="page-hero-content">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </div>
        </section>
    }
}
