//! Static Site Content
//!
//! All copy, collections, and category lists, defined once and immutable
//! for the lifetime of the page.

pub mod blog;
pub mod brochure;
pub mod portfolio;
pub mod site;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ALL_CATEGORIES;

    #[test]
    fn blog_post_ids_and_slugs_are_unique() {
        let posts = blog::posts();
        for post in &posts {
            assert_eq!(posts.iter().filter(|p| p.id == post.id).count(), 1);
            assert_eq!(posts.iter().filter(|p| p.slug == post.slug).count(), 1);
        }
    }

    #[test]
    fn every_blog_post_category_is_listed() {
        let ids: Vec<String> = blog::categories().into_iter().map(|c| c.id).collect();
        for post in blog::posts() {
            assert!(ids.contains(&post.category), "unlisted category {}", post.category);
        }
    }

    #[test]
    fn every_project_category_is_listed() {
        let ids: Vec<String> = portfolio::categories().into_iter().map(|c| c.id).collect();
        for project in portfolio::projects() {
            assert!(ids.contains(&project.category), "unlisted category {}", project.category);
        }
    }

    #[test]
    fn category_lists_lead_with_the_all_sentinel() {
        assert_eq!(blog::categories()[0].id, ALL_CATEGORIES);
        assert_eq!(portfolio::categories()[0].id, ALL_CATEGORIES);
    }

    #[test]
    fn featured_subsections_are_populated() {
        assert!(blog::posts().iter().any(|p| p.featured));
        assert!(portfolio::projects().iter().any(|p| p.featured));
    }

    #[test]
    fn brochure_slugs_are_unique_and_resolvable() {
        let pages = brochure::pages();
        for page in &pages {
            assert_eq!(pages.iter().filter(|p| p.slug == page.slug).count(), 1);
            assert!(brochure::find(&page.slug).is_some());
        }
        assert!(brochure::find("kitchens/unknown").is_none());
    }

    #[test]
    fn brochure_pages_carry_a_complete_template() {
        for page in brochure::pages() {
            assert!(!page.title.is_empty(), "{} has no title", page.slug);
            assert!(!page.intro.is_empty(), "{} has no intro", page.slug);
            assert!(!page.features.is_empty(), "{} has no features", page.slug);
            assert!(!page.cta.button_href.is_empty(), "{} has no CTA target", page.slug);
        }
    }
}
