//! Site-Wide Content
//!
//! Navigation, footer details, and the shared collections (testimonials,
//! facilities, news) used by the home and about pages.

use crate::models::{Facility, Feature, NewsItem, Testimonial};

/// Header navigation, in display order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Kitchens", "/kitchens/fitted"),
    ("Portfolio", "/portfolio"),
    ("Tennis", "/tennis/playing"),
    ("Blog", "/blog"),
    ("About", "/about"),
    ("Contact", "/contact"),
];

/// Footer quick links
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("Tennis", "/tennis/playing"),
    ("Coaching", "/tennis/coaching"),
    ("Fitted Kitchens", "/kitchens/fitted"),
    ("Portfolio", "/portfolio"),
    ("News", "/blog"),
    ("Contact Us", "/contact"),
    ("About Us", "/about"),
];

pub const CLUB_NAME: &str = "Grafton Tennis & Squash Club";
pub const CLUB_TAGLINE: &str =
    "A premier tennis and squash club offering excellent facilities, coaching, and a vibrant \
     social scene.";
pub const CLUB_ADDRESS: &str = "Grafton Lane, Bromsgrove, Worcestershire, B61 7HA";
pub const CLUB_PHONE: &str = "01527 579200";
pub const CLUB_EMAIL: &str = "info@graftontennis.co.uk";

/// Client testimonials for the carousel sections
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Bookham Kitchens transformed our outdated kitchen into a stunning, \
                    functional space that has become the heart of our home. Their attention \
                    to detail and craftsmanship is unmatched, and the team was a pleasure to \
                    work with from start to finish."
                .to_string(),
            name: "Michael & Belinda Thompson".to_string(),
            location: "Weybridge, Surrey".to_string(),
        },
        Testimonial {
            quote: "From the first design visit to the final fitting, everything ran to \
                    schedule. The replacement doors gave us a brand-new kitchen at a fraction \
                    of the cost we expected."
                .to_string(),
            name: "Janet Harper".to_string(),
            location: "Guildford, Surrey".to_string(),
        },
        Testimonial {
            quote: "The spray-painted finish looks factory-new two years on. We recommend \
                    the team to everyone who asks about our kitchen."
                .to_string(),
            name: "Paul & Anita Rowe".to_string(),
            location: "Dorking, Surrey".to_string(),
        },
    ]
}

/// Home page facility cards
pub fn facilities() -> Vec<Facility> {
    vec![
        Facility {
            title: "Tennis Courts".to_string(),
            detail: "Our club features 6 all-weather courts, including 3 floodlit courts for \
                     evening play throughout the year."
                .to_string(),
            image_src: "/images/tennis-courts.jpg".to_string(),
            href: "/tennis/playing".to_string(),
        },
        Facility {
            title: "Squash Courts".to_string(),
            detail: "Our club provides 3 high-quality squash courts with excellent viewing \
                     areas for spectators."
                .to_string(),
            image_src: "/images/squash-courts.jpg".to_string(),
            href: "/tennis/playing".to_string(),
        },
        Facility {
            title: "Clubhouse".to_string(),
            detail: "Our welcoming clubhouse features a bar, social area, changing \
                     facilities, and a friendly atmosphere for members."
                .to_string(),
            image_src: "/images/clubhouse-interior.jpg".to_string(),
            href: "/about".to_string(),
        },
    ]
}

/// Home page news cards
pub fn news_items() -> Vec<NewsItem> {
    vec![
        NewsItem {
            title: "Summer League Registration Now Open".to_string(),
            excerpt: "Join our summer league for competitive match play throughout the \
                      season. All abilities welcome."
                .to_string(),
            image_src: "/images/news-1.jpg".to_string(),
            date: "June 2, 2023".to_string(),
        },
        NewsItem {
            title: "Junior Coaching Programme Expands".to_string(),
            excerpt: "Two new LTA-accredited coaches join the team, adding after-school \
                      sessions for ages 6 to 16."
                .to_string(),
            image_src: "/images/news-2.jpg".to_string(),
            date: "May 19, 2023".to_string(),
        },
        NewsItem {
            title: "Clubhouse Bar Refurbishment Complete".to_string(),
            excerpt: "The refurbished bar and social area reopen this weekend with an \
                      open evening for members and guests."
                .to_string(),
            image_src: "/images/news-3.jpg".to_string(),
            date: "May 5, 2023".to_string(),
        },
    ]
}

/// About page values grid
pub fn values() -> Vec<Feature> {
    vec![
        Feature {
            title: "Quality Craftsmanship".to_string(),
            detail: "Every cabinet is hand-built in our Surrey workshop and fitted to the \
                     millimetre by our own installers."
                .to_string(),
        },
        Feature {
            title: "Client-Focused Approach".to_string(),
            detail: "One designer owns your project from the first visit to the final \
                     fitting, so nothing is lost in handover."
                .to_string(),
        },
        Feature {
            title: "Honest Pricing".to_string(),
            detail: "Itemised, fixed quotations with no deposits taken until materials are \
                     ordered."
                .to_string(),
        },
    ]
}

/// About page team cards
pub fn team() -> Vec<(String, String)> {
    vec![
        ("David Richardson".to_string(), "Founder & Lead Designer".to_string()),
        ("Sarah Richardson".to_string(), "Design Director".to_string()),
        ("James Bennett".to_string(), "Installation Manager".to_string()),
    ]
}
