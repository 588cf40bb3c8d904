//! Blog Collection
//!
//! The post list and its category set, carried over from the live site.

use crate::models::{BlogPost, Category};

/// Categories for the blog filter bar, `"all"` sentinel first
pub fn categories() -> Vec<Category> {
    [
        ("all", "All Categories"),
        ("design-trends", "Design Trends"),
        ("kitchen-tips", "Kitchen Tips"),
        ("renovations", "Renovations"),
        ("sustainability", "Sustainability"),
    ]
    .iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// All blog posts, in display order
pub fn posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "1".to_string(),
            title: "5 Kitchen Design Trends for 2023".to_string(),
            excerpt: "Discover the latest kitchen design trends that are shaping modern homes \
                      in 2023, from sustainable materials to smart technology integration."
                .to_string(),
            image_src: "/images/kitchen-6.jpg".to_string(),
            date: "May 15, 2023".to_string(),
            author: "Sarah Richardson".to_string(),
            category: "design-trends".to_string(),
            slug: "5-kitchen-design-trends-2023".to_string(),
            featured: true,
        },
        BlogPost {
            id: "2".to_string(),
            title: "How to Choose the Perfect Kitchen Worktop".to_string(),
            excerpt: "A comprehensive guide to selecting the right kitchen worktop material \
                      for your needs, considering durability, maintenance, and aesthetics."
                .to_string(),
            image_src: "/images/kitchen-1.jpg".to_string(),
            date: "April 22, 2023".to_string(),
            author: "David Richardson".to_string(),
            category: "kitchen-tips".to_string(),
            slug: "choose-perfect-kitchen-worktop".to_string(),
            featured: false,
        },
        BlogPost {
            id: "3".to_string(),
            title: "Maximizing Storage in Small Kitchens".to_string(),
            excerpt: "Clever storage solutions and design strategies to make the most of \
                      limited kitchen space without compromising on style or functionality."
                .to_string(),
            image_src: "/images/kitchen-3.jpg".to_string(),
            date: "March 18, 2023".to_string(),
            author: "James Bennett".to_string(),
            category: "kitchen-tips".to_string(),
            slug: "maximizing-storage-small-kitchens".to_string(),
            featured: true,
        },
        BlogPost {
            id: "4".to_string(),
            title: "The Benefits of Cabinet Refacing vs. Replacement".to_string(),
            excerpt: "Explore the pros and cons of cabinet refacing compared to full \
                      replacement to determine which option is best for your kitchen renovation."
                .to_string(),
            image_src: "/images/kitchen-5.jpeg".to_string(),
            date: "February 10, 2023".to_string(),
            author: "Sarah Richardson".to_string(),
            category: "renovations".to_string(),
            slug: "cabinet-refacing-vs-replacement".to_string(),
            featured: false,
        },
        BlogPost {
            id: "5".to_string(),
            title: "Sustainable Kitchen Design: Eco-Friendly Options".to_string(),
            excerpt: "Discover how to create an environmentally conscious kitchen with \
                      sustainable materials, energy-efficient appliances, and ethical design \
                      choices."
                .to_string(),
            image_src: "/images/kitchen-2.jpg".to_string(),
            date: "January 28, 2023".to_string(),
            author: "David Richardson".to_string(),
            category: "sustainability".to_string(),
            slug: "sustainable-kitchen-design".to_string(),
            featured: false,
        },
        BlogPost {
            id: "6".to_string(),
            title: "Creating the Perfect Kitchen Island".to_string(),
            excerpt: "Design considerations and inspirational ideas for incorporating a \
                      functional and beautiful kitchen island into your space."
                .to_string(),
            image_src: "/images/bookham-kitchen-suppliers-20.jpg".to_string(),
            date: "December 15, 2022".to_string(),
            author: "James Bennett".to_string(),
            category: "design-trends".to_string(),
            slug: "perfect-kitchen-island".to_string(),
            featured: false,
        },
    ]
}
