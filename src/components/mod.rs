//! UI Components
//!
//! Reusable Leptos components shared across the route views.

mod contact_form;
mod cta_section;
mod empty_state;
mod feature_grid;
mod filter_bar;
mod footer;
mod header;
mod image_uploader;
mod newsletter_signup;
mod page_hero;
mod process_steps;
mod testimonial_carousel;

pub use contact_form::ContactForm;
pub use cta_section::CtaSection;
pub use empty_state::EmptyState;
pub use feature_grid::FeatureGrid;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use header::Header;
pub use image_uploader::ImageUploader;
pub use newsletter_signup::NewsletterSignup;
pub use page_hero::PageHero;
pub use process_steps::ProcessSteps;
pub use testimonial_carousel::TestimonialCarousel;
