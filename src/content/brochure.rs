//! Brochure Page Content
//!
//! One record per service route. The live site duplicated a near-identical
//! template across these routes; here the copy lives in data and a single
//! template component renders all of it.

use crate::models::{BrochurePage, Cta, Feature, ProcessStep, Testimonial};

fn feature(title: &str, detail: &str) -> Feature {
    Feature {
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn step(number: u8, title: &str, detail: &str) -> ProcessStep {
    ProcessStep {
        number,
        title: title.to_string(),
        detail: detail.to_string(),
    }
}

fn cta(heading: &str, text: &str, button_label: &str, button_href: &str) -> Cta {
    Cta {
        heading: heading.to_string(),
        text: text.to_string(),
        button_label: button_label.to_string(),
        button_href: button_href.to_string(),
    }
}

fn kitchens_cta() -> Cta {
    cta(
        "Ready to Transform Your Kitchen?",
        "Book a free design consultation and we'll visit your home, measure up, and talk \
         through ideas with no obligation.",
        "Book a Consultation",
        "/contact",
    )
}

/// Look up a brochure page by its route slug
pub fn find(slug: &str) -> Option<BrochurePage> {
    pages().into_iter().find(|p| p.slug == slug)
}

/// All brochure pages, one per service route
pub fn pages() -> Vec<BrochurePage> {
    vec![
        BrochurePage {
            slug: "kitchens/fitted".to_string(),
            title: "Bespoke Fitted Kitchens".to_string(),
            strapline: "Hand-built cabinetry designed around the way you cook and live."
                .to_string(),
            hero_image: "/images/kitchen-1.jpg".to_string(),
            intro: "Every fitted kitchen we make starts in our Surrey workshop, not a \
                    catalogue. Cabinets are built to your room's exact dimensions, so awkward \
                    corners and sloping ceilings become storage instead of wasted space.\n\n\
                    From shaker classics to handleless contemporary designs, we manage the \
                    whole project from survey to final fitting."
                .to_string(),
            features: vec![
                feature(
                    "Custom cabinetry",
                    "Built to the millimetre in our own workshop, in any style or finish.",
                ),
                feature(
                    "Premium worktops",
                    "Granite, quartz, and solid timber, templated and fitted by specialists.",
                ),
                feature(
                    "High-quality appliances",
                    "Supply-only or fully integrated appliances from leading manufacturers.",
                ),
                feature(
                    "Expert installation",
                    "Our own fitters handle plumbing, electrics, and finishing trades.",
                ),
            ],
            steps: vec![
                step(1, "Initial Consultation", "A free home visit to measure the space and talk through how you use it."),
                step(2, "Design & Planning", "Detailed drawings and an itemised fixed quotation for your approval."),
                step(3, "Manufacturing", "Cabinets are built and finished in our workshop while your room is prepared."),
                step(4, "Installation", "A dedicated fitting team completes the kitchen, typically within two weeks."),
            ],
            testimonial: Some(Testimonial {
                quote: "Bookham Kitchens transformed our outdated kitchen into a stunning, \
                        functional space that has become the heart of our home."
                    .to_string(),
                name: "Michael & Belinda Thompson".to_string(),
                location: "Weybridge, Surrey".to_string(),
            }),
            cta: kitchens_cta(),
        },
        BrochurePage {
            slug: "kitchens/design-process".to_string(),
            title: "The Kitchen Design Process".to_string(),
            strapline: "From first sketch to final fitting, one designer owns your project."
                .to_string(),
            hero_image: "/images/kitchen-2.jpg".to_string(),
            intro: "A kitchen only works when the design starts with the people using it. \
                    Our process is deliberately unhurried: we measure, listen, and draw \
                    before we ever talk about price."
                .to_string(),
            features: vec![
                feature("Free design visit", "No-obligation survey and consultation in your own home."),
                feature("Detailed drawings", "Plan, elevation, and perspective views of every proposal."),
                feature("Fixed quotations", "Itemised pricing agreed before any work begins."),
            ],
            steps: vec![
                step(1, "Initial Consultation", "We visit, measure, and discuss how the space needs to work."),
                step(2, "Design & Planning", "Your designer prepares drawings and a fixed quotation."),
                step(3, "Manufacturing", "Cabinetry is hand-built in our workshop to the agreed design."),
                step(4, "Installation", "Fitting, trades, and finishing are coordinated for you."),
            ],
            testimonial: None,
            cta: kitchens_cta(),
        },
        BrochurePage {
            slug: "kitchens/replacement-doors".to_string(),
            title: "Replacement Kitchen Doors".to_string(),
            strapline: "A new kitchen look at a fraction of the cost of a full refit.".to_string(),
            hero_image: "/images/kitchen-4.jpg.jpeg".to_string(),
            intro: "If your cabinets are sound, replacing just the doors and drawer fronts \
                    gives you a completely new kitchen without the upheaval of a full \
                    installation. Most door swaps are finished in two to three days."
                .to_string(),
            features: vec![
                feature("Made to measure", "Doors manufactured to fit your existing cabinets exactly."),
                feature("Hundreds of styles", "Shaker, slab, and in-frame designs in any colour."),
                feature("New hardware", "Soft-close hinges, runners, and handles fitted as standard."),
            ],
            steps: vec![
                step(1, "Survey", "We measure every door, drawer, and panel in your kitchen."),
                step(2, "Manufacture", "Replacement fronts are made to match your chosen style."),
                step(3, "Fitting", "Old fronts off, new fronts on, usually within three days."),
            ],
            testimonial: Some(Testimonial {
                quote: "The replacement doors gave us a brand-new kitchen at a fraction of \
                        the cost we expected."
                    .to_string(),
                name: "Janet Harper".to_string(),
                location: "Guildford, Surrey".to_string(),
            }),
            cta: kitchens_cta(),
        },
        BrochurePage {
            slug: "kitchens/cabinet-spray-painting".to_string(),
            title: "Cabinet Spray Painting".to_string(),
            strapline: "A factory-quality finish applied to the kitchen you already own."
                .to_string(),
            hero_image: "/images/kitchen-5.jpeg".to_string(),
            intro: "Spray painting is the most economical way to transform a tired kitchen. \
                    Doors are taken to our spray shop for a durable, factory-quality coating \
                    while frames are masked and finished in place."
                .to_string(),
            features: vec![
                feature("Any colour", "Full RAL and designer paint ranges, matched on request."),
                feature("Durable finish", "Hard-wearing two-pack coatings, not brush paint."),
                feature("Minimal disruption", "Most kitchens are completed within a week."),
            ],
            steps: vec![
                step(1, "Colour consultation", "Sample doors sprayed so you can approve the finish."),
                step(2, "Preparation", "Doors removed, degreased, keyed, and primed."),
                step(3, "Spraying & refit", "Coats applied in the spray shop, then everything refitted."),
            ],
            testimonial: Some(Testimonial {
                quote: "The spray-painted finish looks factory-new two years on.".to_string(),
                name: "Paul & Anita Rowe".to_string(),
                location: "Dorking, Surrey".to_string(),
            }),
            cta: kitchens_cta(),
        },
        BrochurePage {
            slug: "home-living/bespoke-furniture".to_string(),
            title: "Bespoke Furniture".to_string(),
            strapline: "Media units, bookcases, and one-off pieces built for your room."
                .to_string(),
            hero_image: "/images/custom-tv-unit-01.jpg".to_string(),
            intro: "The same workshop that builds our kitchens makes free-standing and \
                    fitted furniture for the rest of the house: TV and media walls, alcove \
                    units, window seats, and library shelving."
                .to_string(),
            features: vec![
                feature("Designed around you", "Every piece starts from your room and your storage needs."),
                feature("Cable management", "Media furniture built with power and cabling planned in."),
                feature("Matched finishes", "Painted, veneered, or solid timber to suit the room."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "Have a Piece in Mind?",
                "Send us a sketch or a photo of the space and we'll talk through what's possible.",
                "Start a Conversation",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "home-living/bedroom-cabinets".to_string(),
            title: "Bedroom Cabinets & Wardrobes".to_string(),
            strapline: "Fitted wardrobes that use every inch, floor to ceiling.".to_string(),
            hero_image: "/images/bedroom-cabinets-2.jpg".to_string(),
            intro: "Fitted bedroom furniture turns sloping ceilings, chimney breasts, and \
                    shallow alcoves into usable storage. Interiors are configured to your \
                    wardrobe, not a standard drawing."
                .to_string(),
            features: vec![
                feature("Floor-to-ceiling storage", "No dust gap on top, no dead corners inside."),
                feature("Configurable interiors", "Rails, drawers, shelves, and shoe storage where you need them."),
                feature("Sliding or hinged", "Door styles and finishes to suit the room."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "Ready to Declutter?",
                "Book a free bedroom survey and we'll design storage around what you actually own.",
                "Book a Survey",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "home-living/home-office".to_string(),
            title: "Home Office Furniture".to_string(),
            strapline: "Desks, shelving, and storage built for real working days.".to_string(),
            hero_image: "/images/custom-office-furniture-01.jpg".to_string(),
            intro: "A good home office hides the printer, swallows the paperwork, and still \
                    looks like part of your home when the laptop closes. We design and build \
                    complete office suites to fit the room you have."
                .to_string(),
            features: vec![
                feature("Built-in desks", "Worktops sized and heighted for your equipment."),
                feature("Concealed storage", "Filing and technology behind doors that match the room."),
                feature("Cable tidy as standard", "Grommets and trays planned in from the first drawing."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "Working From Home?",
                "Tell us about the space and we'll design an office that earns its keep.",
                "Get in Touch",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "building-services/extensions".to_string(),
            title: "Home Extensions".to_string(),
            strapline: "Single and double-storey extensions, managed end to end.".to_string(),
            hero_image: "/images/kitchen-6.jpg".to_string(),
            intro: "Many of our kitchen projects grow into extensions. Our building team \
                    handles the structural work, so the room and the kitchen that goes into \
                    it are designed together from day one."
                .to_string(),
            features: vec![
                feature("One point of contact", "Builders and kitchen designers on the same team."),
                feature("Planning support", "Drawings and applications handled for you."),
                feature("Guaranteed work", "Structural work insured and certificated."),
            ],
            steps: vec![
                step(1, "Feasibility", "A site visit to discuss scope, budget, and planning constraints."),
                step(2, "Design & permissions", "Architectural drawings and local-authority approvals."),
                step(3, "Build", "Groundworks to watertight shell, managed by our site foreman."),
                step(4, "Fit-out", "Kitchen, flooring, and decoration completed by our own trades."),
            ],
            testimonial: None,
            cta: cta(
                "Thinking of Extending?",
                "Book a feasibility visit and get a realistic view of cost and timescale.",
                "Book a Visit",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "building-services/renovations".to_string(),
            title: "Property Renovations".to_string(),
            strapline: "Whole-room and whole-house renovation by one accountable team."
                .to_string(),
            hero_image: "/images/kitchen-3.jpg".to_string(),
            intro: "From reconfiguring a tired ground floor to renovating a just-purchased \
                    property, we coordinate the trades, the schedule, and the budget so you \
                    deal with one company throughout."
                .to_string(),
            features: vec![
                feature("All trades in-house", "Carpentry, plumbing, electrics, plastering, decoration."),
                feature("Fixed schedule", "A written programme agreed before work starts."),
                feature("Dust control", "Floor protection and daily clean-downs on every job."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "Planning a Renovation?",
                "Walk us round the property and we'll put a plan and a price on it.",
                "Arrange a Walkround",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "building-services/kitchen-installation".to_string(),
            title: "Kitchen Installation".to_string(),
            strapline: "Fitting-only service for kitchens supplied by others.".to_string(),
            hero_image: "/images/kitchen-2.jpg".to_string(),
            intro: "Bought a kitchen elsewhere? Our fitting teams install third-party \
                    kitchens to the same standard as our own, including the plumbing, \
                    electrical, and finishing work the flat-pack instructions leave out."
                .to_string(),
            features: vec![
                feature("Experienced fitters", "The same teams that install our bespoke kitchens."),
                feature("All trades covered", "Gas, electrics, and plumbing certificated in-house."),
                feature("Template worktops", "Stone and solid-surface tops templated and fitted."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "Kitchen in Boxes?",
                "Send us the plan and we'll quote for a complete installation.",
                "Request a Quote",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "building-services/home-renovations".to_string(),
            title: "Home Renovations".to_string(),
            strapline: "Bathrooms, utility rooms, and the spaces between.".to_string(),
            hero_image: "/images/kitchen-5.jpeg".to_string(),
            intro: "Alongside kitchens we renovate the hard-working rooms around them: \
                    utility rooms, boot rooms, pantries, and bathrooms, built with the same \
                    cabinetry and the same fitters."
                .to_string(),
            features: vec![
                feature("Utility & boot rooms", "Storage-led designs that take pressure off the kitchen."),
                feature("Pantries & larders", "Shelved, lit, and ventilated walk-in storage."),
                feature("Bathrooms", "Full strip-out and refit with our own wet trades."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "One Room or the Whole Floor?",
                "Tell us what's on the list and we'll sequence it into one tidy project.",
                "Get in Touch",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "tennis/playing".to_string(),
            title: "Playing Tennis at Grafton".to_string(),
            strapline: "Six all-weather courts, three floodlit, open year round.".to_string(),
            hero_image: "/images/tennis-courts.jpg".to_string(),
            intro: "Founded in 1888, Grafton Tennis and Squash Club combines tradition with \
                    modern facilities. Members enjoy six all-weather courts, a full calendar \
                    of club sessions, and team tennis across all age groups.\n\n\
                    Whether you're a competitive player looking for match play, a beginner \
                    seeking coaching, or simply want to enjoy the social side of sport, \
                    Grafton has something for everyone."
                .to_string(),
            features: vec![
                feature("All-weather courts", "Six porous macadam courts, playable in every season."),
                feature("Floodlit evenings", "Three floodlit courts keep league play running all winter."),
                feature("Club sessions", "Organised social play four times a week, all standards welcome."),
                feature("Team tennis", "Men's, ladies', and mixed teams in local and county leagues."),
            ],
            steps: vec![],
            testimonial: None,
            cta: cta(
                "Join Our Club",
                "Become a member and enjoy access to our excellent facilities, coaching \
                 programs, and social events.",
                "View Membership Options",
                "/contact",
            ),
        },
        BrochurePage {
            slug: "tennis/coaching".to_string(),
            title: "Tennis Coaching".to_string(),
            strapline: "LTA-accredited coaching for every age and standard.".to_string(),
            hero_image: "/images/hero-tennis.jpg".to_string(),
            intro: "Our coaching team runs a full programme across the week: junior groups \
                    after school, adult improver sessions in the evenings, and individual \
                    coaching by arrangement. Non-members are welcome at all coached sessions."
                .to_string(),
            features: vec![
                feature("Junior Coaching", "After-school groups for ages 6 to 16, graded by stage not age."),
                feature("Adult Coaching", "Beginner and improver courses plus weekly cardio tennis."),
                feature("Private Coaching", "One-to-one sessions with LTA-accredited coaches."),
            ],
            steps: vec![
                step(1, "Book a taster", "Your first group session is free, no racket required."),
                step(2, "Get graded", "A coach places you in the right group for your stage."),
                step(3, "Play the programme", "Weekly sessions, holiday camps, and match play."),
            ],
            testimonial: None,
            cta: cta(
                "Ready to Pick Up a Racket?",
                "Book a free taster session with one of our coaches this week.",
                "Book a Taster",
                "/contact",
            ),
        },
    ]
}
