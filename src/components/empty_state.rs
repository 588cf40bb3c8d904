//! Empty Filter Result
//!
//! Shown when no record passes both filters. Not an error: it offers the
//! compound "Clear filters" reset, which restores both fields together.

use leptos::prelude::*;

#[component]
pub fn EmptyState(
    #[prop(into)] heading: String,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{heading}</h3>
            <p>"Try adjusting your search or filter to find what you're looking for."</p>
            <button class="btn-primary" on:click=move |_| on_clear.run(())>
                "Clear filters"
            </button>
        </div>
    }
}
