//! Home Page
//!
//! Club hero, about teaser, facilities grid, latest news, membership CTA.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::CtaSection;
use crate::content::site::{self, CLUB_NAME};
use crate::models::Cta;

#[component]
pub fn HomePage() -> impl IntoView {
    let facilities = site::facilities();
    let news = site::news_items();

    let membership_cta = Cta {
        heading: "Join Grafton Today".to_string(),
        text: "Become a member of Grafton Tennis and Squash Club and enjoy access to our \
               excellent facilities, coaching programs, and social events."
            .to_string(),
        button_label: "View Membership Options".to_string(),
        button_href: "/contact".to_string(),
    };

    view! {
        <Title text=CLUB_NAME/>

        <section class="home-hero">
            <img
                class="home-hero-image"
                src="/images/hero-tennis.jpg"
                alt="Grafton Tennis and Squash Club courts"
            />
            <div class="home-hero-content">
                <h1>"Welcome to Grafton Tennis & Squash Club"</h1>
                <p>
                    "A premier sporting venue established in 1888, offering exceptional \
                     facilities for tennis and squash enthusiasts of all abilities."
                </p>
                <div class="hero-actions">
                    <a class="btn-primary" href="/contact">"Join Our Club"</a>
                    <a class="btn-ghost" href="/contact">"Contact Us"</a>
                </div>
            </div>
        </section>

        <section class="home-about">
            <h2>"A Club With History"</h2>
            <p>
                "Founded in 1888, Grafton Tennis and Squash Club has a rich history of \
                 providing exceptional sporting facilities to the community. Nestled in \
                 beautiful surroundings, our club combines tradition with modern amenities."
            </p>
            <p>
                "Whether you're a competitive player looking for match play, a beginner \
                 seeking coaching, or simply want to enjoy the social side of sport, \
                 Grafton has something for everyone."
            </p>
            <a class="text-link" href="/about">"More about the club"</a>
        </section>

        <section class="home-facilities">
            <h2>"Our Facilities"</h2>
            <p>
                "Grafton offers excellent facilities for both tennis and squash players, \
                 with well-maintained courts and a welcoming clubhouse."
            </p>
            <div class="card-grid">
                {facilities.into_iter().map(|facility| view! {
                    <div class="card facility-card">
                        <img src=facility.image_src alt=facility.title.clone()/>
                        <div class="card-body">
                            <h3>{facility.title}</h3>
                            <p>{facility.detail}</p>
                            <a class="text-link" href=facility.href>"Learn more"</a>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="home-news">
            <div class="section-heading-row">
                <h2>"Latest News"</h2>
                <a class="text-link" href="/blog">"View all news"</a>
            </div>
            <div class="card-grid">
                {news.into_iter().map(|item| view! {
                    <div class="card news-card">
                        <img src=item.image_src alt=item.title.clone()/>
                        <div class="card-body">
                            <span class="card-date">{item.date}</span>
                            <h3>{item.title}</h3>
                            <p>{item.excerpt}</p>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <CtaSection cta=membership_cta/>
    }
}
