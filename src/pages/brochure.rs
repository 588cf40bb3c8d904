//! Brochure Template View
//!
//! One component renders every service route from a `BrochurePage`
//! content record looked up by the route's `/:section/:page` params.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::{CtaSection, FeatureGrid, PageHero, ProcessSteps};
use crate::content::brochure;
use crate::markdown::render_markdown;
use crate::models::BrochurePage;
use crate::pages::NotFound;

#[component]
pub fn BrochureView() -> impl IntoView {
    let params = use_params_map();

    let page = move || {
        let map = params.get();
        let section = map.get("section").unwrap_or_default();
        let leaf = map.get("page").unwrap_or_default();
        brochure::find(&format!("{}/{}", section, leaf))
    };

    move || match page() {
        Some(page) => view! { <BrochureContent page=page/> }.into_any(),
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn BrochureContent(page: BrochurePage) -> impl IntoView {
    let site_name = if page.slug.starts_with("tennis") {
        "Grafton Tennis & Squash Club"
    } else {
        "Bookham Kitchens"
    };

    view! {
        <Title text=format!("{} | {}", page.title, site_name)/>

        <PageHero
            title=page.title.clone()
            subtitle=page.strapline.clone()
            image_src=page.hero_image.clone()
        />

        <section class="brochure-intro" inner_html=render_markdown(&page.intro)></section>

        <FeatureGrid features=page.features.clone()/>

        {(!page.steps.is_empty())
            .then(|| view! { <ProcessSteps steps=page.steps.clone()/> })}

        {page.testimonial.clone().map(|t| view! {
            <section class="testimonial-single">
                <blockquote class="testimonial">
                    <p class="testimonial-quote">{t.quote}</p>
                    <footer>
                        <span class="testimonial-name">{t.name}</span>
                        <span class="testimonial-location">{t.location}</span>
                    </footer>
                </blockquote>
            </section>
        })}

        <CtaSection cta=page.cta.clone()/>
    }
}
