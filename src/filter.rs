//! List Filtering
//!
//! Pure filtering over the static content collections. Two independent
//! criteria, combined conjunctively: a category selector (closed set,
//! exact match) and a free-text search term (case-insensitive substring
//! over a record's searchable fields).

use crate::models::{BlogPost, Project};

/// Sentinel category id meaning "no category narrowing"
pub const ALL_CATEGORIES: &str = "all";

/// Per-view filter state.
///
/// Owned by the view instance that created it and discarded with it;
/// both fields are freely settable at any time and every combination of
/// the two is a valid state.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// `ALL_CATEGORIES` or one id from the collection's category list
    pub selected_category: String,
    /// Raw search term. Deliberately not trimmed: the live site matched
    /// leading/trailing whitespace literally.
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while both controls are at rest. Featured subsections are
    /// shown only in this state.
    pub fn is_unfiltered(&self) -> bool {
        self.selected_category == ALL_CATEGORIES && self.search_term.is_empty()
    }

    /// Reset both fields together. The only compound transition in the
    /// model: "Clear filters" never resets one field without the other.
    pub fn clear(&mut self) {
        self.selected_category = ALL_CATEGORIES.to_string();
        self.search_term.clear();
    }
}

/// Records the filter can narrow
pub trait Searchable {
    /// Category id, matched exactly against the selected category
    fn category(&self) -> &str;
    /// Search targets, matched as lower-cased substrings
    fn search_fields(&self) -> [&str; 3];
}

impl Searchable for BlogPost {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.title, &self.excerpt, &self.author]
    }
}

impl Searchable for Project {
    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.location]
    }
}

/// Derive the visible subset of `records` for the given filter state.
///
/// A record is visible when it passes the category filter AND the search
/// filter. Input order is preserved and the input is never mutated; an
/// empty result is a normal outcome, not an error.
pub fn compute_visible<T>(records: &[T], selected_category: &str, search_term: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|r| selected_category == ALL_CATEGORIES || r.category() == selected_category)
        .filter(|r| {
            needle.is_empty()
                || r.search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_post(id: u32, title: &str, excerpt: &str, author: &str, category: &str) -> BlogPost {
        BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            image_src: format!("/images/post-{}.jpg", id),
            date: "May 15, 2023".to_string(),
            author: author.to_string(),
            category: category.to_string(),
            slug: format!("post-{}", id),
            featured: false,
        }
    }

    fn sample_posts() -> Vec<BlogPost> {
        vec![
            make_post(
                1,
                "5 Kitchen Design Trends for 2023",
                "Discover the latest kitchen design trends shaping modern homes.",
                "Sarah Richardson",
                "design-trends",
            ),
            make_post(
                2,
                "Maximizing Storage in Small Kitchens",
                "Clever storage solutions for limited kitchen space.",
                "James Bennett",
                "kitchen-tips",
            ),
        ]
    }

    #[test]
    fn identity_filter_returns_everything_in_order() {
        let posts = sample_posts();
        let visible = compute_visible(&posts, ALL_CATEGORIES, "");
        assert_eq!(visible, posts);
    }

    #[test]
    fn recomputation_is_idempotent() {
        let posts = sample_posts();
        let first = compute_visible(&posts, "kitchen-tips", "storage");
        let second = compute_visible(&posts, "kitchen-tips", "storage");
        assert_eq!(first, second);
    }

    #[test]
    fn category_filter_partitions_the_collection() {
        let posts = sample_posts();
        let trends = compute_visible(&posts, "design-trends", "");
        let tips = compute_visible(&posts, "kitchen-tips", "");
        assert!(trends.iter().all(|p| p.category == "design-trends"));
        assert!(tips.iter().all(|p| p.category == "kitchen-tips"));

        // Union over all categories reconstructs the input, each record once
        let mut union: Vec<BlogPost> = trends;
        union.extend(tips);
        assert_eq!(union.len(), posts.len());
        for post in &posts {
            assert_eq!(union.iter().filter(|p| p.id == post.id).count(), 1);
        }
    }

    #[test]
    fn search_matches_are_substrings_of_a_searchable_field() {
        let posts = sample_posts();
        let visible = compute_visible(&posts, ALL_CATEGORIES, "kitchen");
        assert!(!visible.is_empty());
        for post in &visible {
            let hit = post
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains("kitchen"));
            assert!(hit, "{} matched without a matching field", post.id);
        }
    }

    #[test]
    fn filters_are_conjunctive() {
        let posts = sample_posts();
        let combined = compute_visible(&posts, "kitchen-tips", "storage");
        let by_category = compute_visible(&posts, "kitchen-tips", "");
        let by_search = compute_visible(&posts, ALL_CATEGORIES, "storage");
        for post in &combined {
            assert!(by_category.contains(post));
            assert!(by_search.contains(post));
        }
        // and nothing passes the pair that fails either half
        for post in &by_category {
            if by_search.contains(post) {
                assert!(combined.contains(post));
            }
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let posts: Vec<BlogPost> = Vec::new();
        assert!(compute_visible(&posts, "design-trends", "anything").is_empty());
        assert!(compute_visible(&posts, ALL_CATEGORIES, "").is_empty());
    }

    #[test]
    fn search_term_matches_titles_case_insensitively() {
        // Scenario: "kitchen" appears in both titles despite mixed casing
        let posts = sample_posts();
        let visible = compute_visible(&posts, ALL_CATEGORIES, "kitchen");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[1].id, "2");
    }

    #[test]
    fn category_narrows_to_single_record() {
        let posts = sample_posts();
        let visible = compute_visible(&posts, "kitchen-tips", "");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");
    }

    #[test]
    fn conjunction_can_produce_empty_result() {
        // Category narrows to the first post, but "storage" matches none
        // of its fields: empty result, not an error.
        let posts = sample_posts();
        let visible = compute_visible(&posts, "design-trends", "storage");
        assert!(visible.is_empty());
    }

    #[test]
    fn search_covers_the_author_field() {
        let posts = sample_posts();
        let visible = compute_visible(&posts, ALL_CATEGORIES, "SARAH");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn search_term_whitespace_is_significant() {
        // The live site never trimmed the term; "  kitchen" only matches
        // a field that really contains that spacing.
        let posts = sample_posts();
        let visible = compute_visible(&posts, ALL_CATEGORIES, "  kitchen");
        assert!(visible.is_empty());
    }

    #[test]
    fn project_search_covers_the_location_field() {
        let project = Project {
            id: "1".to_string(),
            title: "Modern Shaker Kitchen".to_string(),
            description: "Custom cabinetry in a soft sage green finish.".to_string(),
            image_src: "/images/kitchen-1.jpg".to_string(),
            category: "fitted-kitchens".to_string(),
            location: "Guildford, Surrey".to_string(),
            featured: true,
            project_url: "/portfolio/modern-shaker-kitchen".to_string(),
            completed: "September 2022".to_string(),
        };
        let projects = vec![project];
        assert_eq!(compute_visible(&projects, ALL_CATEGORIES, "guildford").len(), 1);
        assert!(compute_visible(&projects, ALL_CATEGORIES, "leatherhead").is_empty());
    }

    #[test]
    fn clear_resets_both_fields_together() {
        let mut state = FilterState {
            selected_category: "kitchen-tips".to_string(),
            search_term: "storage".to_string(),
        };
        assert!(!state.is_unfiltered());
        state.clear();
        assert!(state.is_unfiltered());
        assert_eq!(state, FilterState::default());
    }
}
