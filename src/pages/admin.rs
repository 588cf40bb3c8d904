//! Admin Page (static mock-up)
//!
//! Demonstrates how the image library could be managed. No real upload
//! or storage logic: the uploader previews in memory only.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::ImageUploader;

/// Current image library, mirrored from the deployed assets
const IMAGE_LIBRARY: &[&str] = &[
    "tennis-courts.jpg",
    "tennis-courts-wide.jpg",
    "hero-tennis.jpg",
    "club-house.jpg",
    "squash-courts.jpg",
    "clubhouse-interior.jpg",
    "news-1.jpg",
    "news-2.jpg",
];

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <Title text="Admin Dashboard"/>

        <section class="admin-page">
            <div class="section-heading-row">
                <h1>"Admin Dashboard"</h1>
                <a class="text-link" href="/">"Return to Site"</a>
            </div>

            <div class="admin-panel">
                <h2>"Image Management"</h2>
                <p>
                    "This page demonstrates how you could manage images for your website. \
                     In a production environment, you would have a full-featured admin \
                     panel for content management."
                </p>

                <h3>"Current Image Library"</h3>
                <div class="image-library-grid">
                    {IMAGE_LIBRARY.iter().map(|filename| view! {
                        <figure class="library-image">
                            <img
                                src=format!("/images/{}", filename)
                                alt=format!("Library image {}", filename)
                            />
                            <figcaption>{*filename}</figcaption>
                        </figure>
                    }).collect_view()}
                </div>

                <h3>"Upload New Image"</h3>
                <ImageUploader/>
            </div>

            <div class="admin-panel">
                <h2>"Image Storage"</h2>
                <p>
                    "The deployed site serves images from local storage with framework \
                     image optimization. A production admin panel would typically move \
                     the library to object storage behind a CDN."
                </p>
            </div>
        </section>
    }
}
