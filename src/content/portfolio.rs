//! Portfolio Collection
//!
//! Completed projects and their category set, carried over from the
//! live site.

use crate::models::{Category, Project};

/// Categories for the portfolio filter bar, `"all"` sentinel first
pub fn categories() -> Vec<Category> {
    [
        ("all", "All Projects"),
        ("fitted-kitchens", "Fitted Kitchens"),
        ("replacement-doors", "Replacement Doors"),
        ("cabinet-spray-painting", "Cabinet Spray Painting"),
        ("bedroom-furniture", "Bedroom Furniture"),
        ("home-office", "Home Office"),
        ("bespoke-furniture", "Bespoke Furniture"),
    ]
    .iter()
    .map(|(id, name)| Category {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// All portfolio projects, in display order
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_string(),
            title: "Modern Shaker Kitchen".to_string(),
            description: "A contemporary take on the classic shaker style, featuring custom \
                          cabinetry in a soft sage green finish."
                .to_string(),
            image_src: "/images/kitchen-1.jpg".to_string(),
            category: "fitted-kitchens".to_string(),
            location: "Guildford, Surrey".to_string(),
            featured: true,
            project_url: "/portfolio/modern-shaker-kitchen".to_string(),
            completed: "September 2022".to_string(),
        },
        Project {
            id: "2".to_string(),
            title: "Traditional Oak Kitchen".to_string(),
            description: "Classic oak cabinetry with granite worktops, designed for a period \
                          property in Leatherhead."
                .to_string(),
            image_src: "/images/kitchen-2.jpg".to_string(),
            category: "fitted-kitchens".to_string(),
            location: "Leatherhead, Surrey".to_string(),
            featured: false,
            project_url: "/portfolio/traditional-oak-kitchen".to_string(),
            completed: "July 2022".to_string(),
        },
        Project {
            id: "3".to_string(),
            title: "Sleek Handleless Kitchen".to_string(),
            description: "A minimalist kitchen design with handleless cabinetry and \
                          integrated appliances for a clean look."
                .to_string(),
            image_src: "/images/kitchen-3.jpg".to_string(),
            category: "fitted-kitchens".to_string(),
            location: "Woking, Surrey".to_string(),
            featured: true,
            project_url: "/portfolio/sleek-handleless-kitchen".to_string(),
            completed: "May 2022".to_string(),
        },
        Project {
            id: "4".to_string(),
            title: "Cabinet Door Refacing".to_string(),
            description: "Complete transformation of an existing kitchen with new cabinet \
                          doors and drawer fronts."
                .to_string(),
            image_src: "/images/kitchen-4.jpg.jpeg".to_string(),
            category: "replacement-doors".to_string(),
            location: "Bookham, Surrey".to_string(),
            featured: false,
            project_url: "/portfolio/cabinet-door-refacing".to_string(),
            completed: "April 2022".to_string(),
        },
        Project {
            id: "5".to_string(),
            title: "Spray Painted Kitchen Cabinets".to_string(),
            description: "Revitalized kitchen with professionally spray painted cabinets in a \
                          contemporary blue finish."
                .to_string(),
            image_src: "/images/kitchen-5.jpeg".to_string(),
            category: "cabinet-spray-painting".to_string(),
            location: "Dorking, Surrey".to_string(),
            featured: false,
            project_url: "/portfolio/spray-painted-kitchen".to_string(),
            completed: "March 2022".to_string(),
        },
        Project {
            id: "6".to_string(),
            title: "Luxury Kitchen with Island".to_string(),
            description: "A spacious kitchen featuring a large central island, quartz \
                          countertops, and high-end appliances."
                .to_string(),
            image_src: "/images/kitchen-6.jpg".to_string(),
            category: "fitted-kitchens".to_string(),
            location: "Esher, Surrey".to_string(),
            featured: true,
            project_url: "/portfolio/luxury-kitchen-island".to_string(),
            completed: "February 2022".to_string(),
        },
        Project {
            id: "7".to_string(),
            title: "Custom Bedroom Wardrobes".to_string(),
            description: "Built-in wardrobes designed to maximize storage while complementing \
                          the bedroom aesthetic."
                .to_string(),
            image_src: "/images/bedroom-cabinets-2.jpg".to_string(),
            category: "bedroom-furniture".to_string(),
            location: "Weybridge, Surrey".to_string(),
            featured: false,
            project_url: "/portfolio/custom-bedroom-wardrobes".to_string(),
            completed: "January 2022".to_string(),
        },
        Project {
            id: "8".to_string(),
            title: "Home Office Suite".to_string(),
            description: "A comprehensive home office solution with custom-built desk, \
                          shelving, and storage cabinets."
                .to_string(),
            image_src: "/images/custom-office-furniture-01.jpg".to_string(),
            category: "home-office".to_string(),
            location: "Reigate, Surrey".to_string(),
            featured: false,
            project_url: "/portfolio/home-office-suite".to_string(),
            completed: "December 2021".to_string(),
        },
        Project {
            id: "9".to_string(),
            title: "Bespoke TV Unit".to_string(),
            description: "Custom designed TV and media cabinet with integrated storage and \
                          cable management."
                .to_string(),
            image_src: "/images/custom-tv-unit-01.jpg".to_string(),
            category: "bespoke-furniture".to_string(),
            location: "Cobham, Surrey".to_string(),
            featured: false,
            project_url: "/portfolio/bespoke-tv-unit".to_string(),
            completed: "November 2021".to_string(),
        },
    ]
}
