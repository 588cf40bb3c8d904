//! Site Content Store
//!
//! Uses Leptos reactive_stores for field-level access to the content
//! collections. The collections are seeded once at mount and stay
//! immutable for the lifetime of the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::content;
use crate::models::{BlogPost, Project, Testimonial};

/// Site-wide content state
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// All blog posts, in display order
    pub posts: Vec<BlogPost>,
    /// All portfolio projects, in display order
    pub projects: Vec<Project>,
    /// Client testimonials for the carousel sections
    pub testimonials: Vec<Testimonial>,
}

impl SiteState {
    pub fn new() -> Self {
        Self {
            posts: content::blog::posts(),
            projects: content::portfolio::projects(),
            testimonials: content::site::testimonials(),
        }
    }
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}
