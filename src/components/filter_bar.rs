//! Filter Bar
//!
//! Category button group plus free-text search input, both writing into a
//! shared `FilterState` signal. The owning view derives its visible
//! records from that signal on every change; the bar itself never touches
//! the record collection.

use leptos::prelude::*;

use crate::filter::FilterState;
use crate::models::Category;

#[component]
pub fn FilterBar(
    categories: Vec<Category>,
    filter: RwSignal<FilterState>,
    #[prop(into)] search_placeholder: String,
) -> impl IntoView {
    let (search_focused, set_search_focused) = signal(false);

    view! {
        <section class="filter-bar">
            <div class="category-buttons">
                {categories.into_iter().map(|category| {
                    let id = category.id.clone();
                    let id_for_click = category.id.clone();
                    view! {
                        <button
                            class=move || {
                                if filter.get().selected_category == id {
                                    "category-btn active"
                                } else {
                                    "category-btn"
                                }
                            }
                            on:click=move |_| {
                                filter.update(|f| f.selected_category = id_for_click.clone())
                            }
                        >
                            {category.name}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class=move || {
                if search_focused.get() { "search-box focused" } else { "search-box" }
            }>
                <input
                    type="text"
                    placeholder=search_placeholder
                    prop:value=move || filter.get().search_term
                    on:input=move |ev| filter.update(|f| f.search_term = event_target_value(&ev))
                    on:focus=move |_| set_search_focused.set(true)
                    on:blur=move |_| set_search_focused.set(false)
                />
                // Clears the term only; the category keeps its selection
                <Show when=move || !filter.get().search_term.is_empty()>
                    <button
                        class="search-clear"
                        on:click=move |_| filter.update(|f| f.search_term.clear())
                    >
                        "✕"
                    </button>
                </Show>
            </div>
        </section>
    }
}
