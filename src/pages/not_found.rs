//! Not Found View

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <Title text="Page Not Found"/>

        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you're looking for doesn't exist or has moved."</p>
            <a class="btn-primary" href="/">"Back to the Home Page"</a>
        </section>
    }
}
