//! Portfolio Page
//!
//! Filterable project grid. Same filter model as the blog, wired to the
//! portfolio categories and location-based search.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{EmptyState, FilterBar, PageHero};
use crate::content;
use crate::filter::{compute_visible, FilterState, ALL_CATEGORIES};
use crate::models::Project;
use crate::store::{use_site_store, SiteStateStoreFields};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let store = use_site_store();
    let filter = RwSignal::new(FilterState::new());
    let categories = content::portfolio::categories();

    let visible = move || {
        let f = filter.get();
        compute_visible(&store.projects().get(), &f.selected_category, &f.search_term)
    };

    let heading = {
        let categories = categories.clone();
        move || {
            let selected = filter.get().selected_category;
            if selected == ALL_CATEGORIES {
                "All Projects".to_string()
            } else {
                categories
                    .iter()
                    .find(|c| c.id == selected)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| "All Projects".to_string())
            }
        }
    };

    view! {
        <Title text="Our Portfolio | Bookham Kitchens"/>

        <PageHero
            title="Our Portfolio"
            subtitle="A selection of recent kitchens, bedrooms, and bespoke furniture \
                      projects completed across Surrey."
            image_src="/images/kitchen-6.jpg"
        />

        <FilterBar
            categories=categories.clone()
            filter=filter
            search_placeholder="Search projects..."
        />

        <section class="post-grid-section">
            <h2>{heading}</h2>
            {move || {
                if visible().is_empty() {
                    view! {
                        <EmptyState
                            heading="No projects found"
                            on_clear=move |_: ()| filter.update(|f| f.clear())
                        />
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="card-grid">
                            <For
                                each=visible
                                key=|project| project.id.clone()
                                children=move |project| view! { <ProjectCard project=project/> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let category_label = project.category.replace('-', " ");
    let featured = project.featured;

    view! {
        <a class="card project-card" href=project.project_url>
            <div class="card-image">
                <img src=project.image_src alt=project.title.clone()/>
                <Show when=move || featured>
                    <span class="featured-badge">"Featured"</span>
                </Show>
            </div>
            <div class="card-body">
                <div class="card-meta">
                    <span class="card-category">{category_label}</span>
                    <span class="card-date">{project.completed}</span>
                </div>
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="card-footer">
                    <span class="card-location">{project.location}</span>
                    <span class="card-readmore">"View Project"</span>
                </div>
            </div>
        </a>
    }
}
