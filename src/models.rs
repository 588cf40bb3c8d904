//! Content Models
//!
//! Data structures for the static content collections that drive the site.

use serde::{Deserialize, Serialize};

/// Blog post record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub image_src: String,
    pub date: String,
    pub author: String,
    pub category: String,
    pub slug: String,
    #[serde(default)]
    pub featured: bool,
}

/// Portfolio project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub category: String,
    pub location: String,
    #[serde(default)]
    pub featured: bool,
    pub project_url: String,
    pub completed: String,
}

/// Category entry for the filter button groups.
/// The `"all"` sentinel is always the first entry of a collection's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// Client testimonial shown in the carousel sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub name: String,
    pub location: String,
}

/// One card of a feature grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub detail: String,
}

/// One step of a numbered process list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    pub number: u8,
    pub title: String,
    pub detail: String,
}

/// Facility card on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub title: String,
    pub detail: String,
    pub image_src: String,
    pub href: String,
}

/// News card on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub excerpt: String,
    pub image_src: String,
    pub date: String,
}

/// Closing call-to-action banner of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    pub heading: String,
    pub text: String,
    pub button_label: String,
    pub button_href: String,
}

/// Content record behind one service route.
///
/// The live site repeated a near-identical page template across dozens of
/// route files; here every service route renders through one template
/// component driven by these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrochurePage {
    /// Route path relative to the site root, e.g. `kitchens/fitted`
    pub slug: String,
    pub title: String,
    pub strapline: String,
    pub hero_image: String,
    /// Markdown body copy rendered under the hero
    pub intro: String,
    pub features: Vec<Feature>,
    pub steps: Vec<ProcessStep>,
    pub testimonial: Option<Testimonial>,
    pub cta: Cta,
}
