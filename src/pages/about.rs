//! About Page

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{CtaSection, FeatureGrid, PageHero, TestimonialCarousel};
use crate::content::site;
use crate::markdown::render_markdown;
use crate::models::Cta;
use crate::store::{use_site_store, SiteStateStoreFields};

const STORY: &str = "\
Bookham Kitchens is a family-run business that has been designing, building, and \
installing kitchens across Surrey for over twenty years. What started as a two-person \
workshop in Great Bookham is now a full design studio with its own cabinet makers, \
sprayers, and fitting teams.\n\n\
We still work the same way we did on day one: one designer owns your project from the \
first home visit to the final fitting, and every cabinet is built for your room rather \
than pulled from a warehouse.";

#[component]
pub fn AboutPage() -> impl IntoView {
    let store = use_site_store();

    let cta = Cta {
        heading: "Ready to Transform Your Kitchen?".to_string(),
        text: "Visit the showroom or book a free design consultation with the team."
            .to_string(),
        button_label: "Get in Touch".to_string(),
        button_href: "/contact".to_string(),
    };

    view! {
        <Title text="About Bookham Kitchens"/>

        <PageHero
            title="About Bookham Kitchens"
            subtitle="A family business with a workshop, not a call centre."
            image_src="/images/kitchen-3.jpg"
        />

        <section class="about-story" inner_html=render_markdown(STORY)></section>

        <section class="about-values">
            <h2>"What We Stand For"</h2>
            <FeatureGrid features=site::values()/>
        </section>

        <section class="about-team">
            <h2>"Meet the Team"</h2>
            <div class="team-grid">
                {site::team().into_iter().map(|(name, role)| view! {
                    <div class="team-card">
                        <h3>{name}</h3>
                        <p>{role}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        {move || view! { <TestimonialCarousel testimonials=store.testimonials().get()/> }}

        <CtaSection cta=cta/>
    }
}
