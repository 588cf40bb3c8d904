//! Blog Page
//!
//! Filterable article grid. The featured subsection renders only while
//! both filter controls are at rest; the main grid recomputes from the
//! shared `FilterState` signal on every keystroke or category click.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EmptyState, FilterBar, NewsletterSignup, PageHero};
use crate::content;
use crate::filter::{compute_visible, FilterState, ALL_CATEGORIES};
use crate::models::BlogPost;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn BlogPage() -> impl IntoView {
    let store = use_site_store();
    let filter = RwSignal::new(FilterState::new());
    let categories = content::blog::categories();

    let visible = move || {
        let f = filter.get();
        compute_visible(&store.posts().get(), &f.selected_category, &f.search_term)
    };

    let featured = move || {
        store
            .posts()
            .get()
            .into_iter()
            .filter(|p| p.featured)
            .collect::<Vec<_>>()
    };

    let heading = {
        let categories = categories.clone();
        move || {
            let selected = filter.get().selected_category;
            if selected == ALL_CATEGORIES {
                "All Articles".to_string()
            } else {
                categories
                    .iter()
                    .find(|c| c.id == selected)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "All Articles".to_string())
            }
        }
    };

    view! {
        <Title text="Our Blog | Bookham Kitchens"/>

        <PageHero
            title="Our Blog"
            subtitle="Insights, ideas, and inspiration for your kitchen and home from the \
                      Bookham Kitchens team."
            image_src="/images/kitchen-2.jpg"
        />

        <FilterBar
            categories=categories.clone()
            filter=filter
            search_placeholder="Search articles..."
        />

        <Show when=move || filter.get().is_unfiltered()>
            <section class="featured-section">
                <h2>"Featured Articles"</h2>
                <div class="card-grid featured-grid">
                    <For
                        each=featured
                        key=|post| post.id.clone()
                        children=move |post| view! { <BlogCard post=post featured_badge=true/> }
                    />
                </div>
            </section>
        </Show>

        <section class="post-grid-section">
            <h2>{heading}</h2>
            {move || {
                if visible().is_empty() {
                    view! {
                        <EmptyState
                            heading="No articles found"
                            on_clear=move |_: ()| filter.update(|f| f.clear())
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            <For
                                each=visible
                                key=|post| post.id.clone()
                                children=move |post| {
                                    view! { <BlogCard post=post featured_badge=false/> }
                                }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>

        <NewsletterSignup/>
    }
}

#[component]
fn BlogCard(post: BlogPost, featured_badge: bool) -> impl IntoView {
    let category_label = post.category.replace('-', " ");

    view! {
        <a class="card blog-card" href=format!("/blog/{}", post.slug)>
            <div class="card-image">
                <img src=post.image_src alt=post.title.clone()/>
                <Show when=move || featured_badge>
                    <span class="featured-badge">"Featured"</span>
                </Show>
            </div>
            <div class="card-body">
                <div class="card-meta">
                    <span class="card-date">{post.date}</span>
                    <span class="card-category">{category_label}</span>
                </div>
                <h3>{post.title}</h3>
                <p>{post.excerpt}</p>
                <div class="card-footer">
                    <span class="card-author">"By " {post.author}</span>
                    <span class="card-readmore">"Read More"</span>
                </div>
            </div>
        </a>
    }
}
