//! Route Views

mod about;
mod admin;
mod blog;
mod brochure;
mod contact;
mod home;
mod not_found;
mod portfolio;

pub use about::AboutPage;
pub use admin::AdminPage;
pub use blog::BlogPage;
pub use brochure::BrochureView;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use portfolio::PortfolioPage;
