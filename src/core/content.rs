//! Static marketing copy for the studio site.

use crate::core::navigation::{NavItem, SectionId};

pub const STUDIO_NAME: &str = "BlinkPath";

pub const HERO_HEADLINE: &str =
    "We're a design studio for product and brand teams who mean business.";

pub const HERO_SUBTITLE: &str = "Global teams trust us to take on complex challenges, push creative boundaries, \
     and move fast when it matters most. We bring clarity, momentum, and a little heat to every project.";

pub const FLOWING_TEXT: &str = "Startups. Scale-ups. New bets. Big shifts. We work with teams navigating what's next\u{2014}launching, evolving, rebuilding. No two challenges are the same, but most share the same ambition. Move with purpose and don't waste time getting there. This is how we show up, every time. Where do we start?";

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem::new("Work", SectionId::Work),
    NavItem::new("Services", SectionId::Services),
    NavItem::new("Approach", SectionId::Approach),
    NavItem::new("About", SectionId::About),
    NavItem::new("Contact", SectionId::Contact),
];

pub const SOCIAL_LINKS: [&str; 3] = ["LinkedIn", "Twitter", "Dribbble"];

pub const CONTACT_TITLE: &str = "Contact us";
pub const CONTACT_LEAD: &str = "Have a project you'd like to talk about?";
pub const CONTACT_THANKS_TITLE: &str = "Thanks for reaching out!";
pub const CONTACT_THANKS_BODY: &str = "We'll be in touch shortly to talk about your project \
     and explore an opportunity to work together.";

pub const FOOTER_BLURB: &str = "We're a design studio for product and brand teams who mean business. \
     Global teams trust us to take on complex challenges and move fast when it matters most.";

/// A card rendered by one of the list sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentCard {
    /// Display index such as `"01"`.
    pub index: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image_url: Option<&'static str>,
}

impl ContentCard {
    const fn numbered(index: &'static str, title: &'static str, description: &'static str) -> Self {
        Self {
            index,
            title,
            description,
            tags: &[],
            image_url: None,
        }
    }

    const fn project(
        index: &'static str,
        title: &'static str,
        description: &'static str,
        tags: &'static [&'static str],
        image_url: &'static str,
    ) -> Self {
        Self {
            index,
            title,
            description,
            tags,
            image_url: Some(image_url),
        }
    }

    /// Caption form of the index, e.g. `(01)`.
    pub fn caption(&self) -> String {
        format!("({})", self.index)
    }
}

/// Header copy of a numbered section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionIntro {
    pub number: &'static str,
    pub title: &'static str,
    pub lead: Option<&'static str>,
}

pub const WORK_INTRO: SectionIntro = SectionIntro {
    number: "01",
    title: "Our Work",
    lead: Some(HERO_SUBTITLE),
};

pub const SERVICES_INTRO: SectionIntro = SectionIntro {
    number: "02",
    title: "Our Services",
    lead: Some(
        "Whatever we take on, whether it's a product, website, or brand, it's never just for show. \
         It's designed to work hard, deliver real value, and never coast on aesthetics.",
    ),
};

pub const APPROACH_INTRO: SectionIntro = SectionIntro {
    number: "03",
    title: "Our Approach",
    lead: Some(
        "Teams are different. Needs shift. And not every engagement looks the same. \
         That's why we shape our approach around how you work\u{2014}and what you're trying to achieve. \
         Then we help you move it forward.",
    ),
};

pub const ABOUT_INTRO: SectionIntro = SectionIntro {
    number: "04",
    title: "About us",
    lead: None,
};

pub const APPROACH_QUOTE: &str = "\"Every engagement is different. Our approach isn't\u{2014}disciplined, intentional, \
     and with a rhythm that keeps things moving.\"";

pub const WORKS: [ContentCard; 5] = [
    ContentCard::project(
        "01",
        "Everstream Analytics",
        "Data analytics platform redesign",
        &["UX/UI Design", "Product Strategy"],
        "https://images.unsplash.com/photo-1551434678-e076c223a692?auto=format&fit=crop&w=800&q=80",
    ),
    ContentCard::project(
        "02",
        "Center",
        "Enterprise collaboration tool",
        &["Design System", "UX Research"],
        "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&w=800&q=80",
    ),
    ContentCard::project(
        "03",
        "Flashpoint",
        "AI-powered security platform",
        &["AI UX", "Visual Design"],
        "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&w=800&q=80",
    ),
    ContentCard::project(
        "04",
        "Mirakl",
        "Marketplace technology solution",
        &["Web Presence", "UX/UI Design"],
        "https://images.unsplash.com/photo-1563013544-824ae1b704d3?auto=format&fit=crop&w=800&q=80",
    ),
    ContentCard::project(
        "05",
        "Intrepid",
        "Travel platform experience",
        &["Product Strategy", "Visual Design"],
        "https://images.unsplash.com/photo-1551650975-87deedd944c3?auto=format&fit=crop&w=800&q=80",
    ),
];

pub const SERVICES: [ContentCard; 7] = [
    ContentCard::numbered(
        "01",
        "UX/UI Design",
        "Digital product experiences that engage, convert, and keep users coming back. Every interface is crafted to bridge user needs with business goals\u{2014}clear, functional, and shaped to raise the bar in your space.",
    ),
    ContentCard::numbered(
        "02",
        "AI UX",
        "AI-driven experiences that help users work smarter, faster, and with confidence. Whether AI is the product or just powering part of it, what matters most is how it feels to use\u{2014}and whether people come back to it.",
    ),
    ContentCard::numbered(
        "03",
        "Digital Product Strategy",
        "From first insight to first build, we help teams get clear on priorities, align fast, and move with purpose. When the stakes are high, clarity around what\u{2014}and why\u{2014}you're building makes all the difference.",
    ),
    ContentCard::numbered(
        "04",
        "UX Research",
        "We dig into real user behavior to uncover the patterns, needs, and moments that shape better products. It's how we turn assumptions into alignment\u{2014}and decisions into outcomes.",
    ),
    ContentCard::numbered(
        "05",
        "Design Systems",
        "Scalable systems that bring consistency to design, efficiency to engineering, and alignment across teams. They speed up the work without watering down the craft.",
    ),
    ContentCard::numbered(
        "06",
        "Visual Design",
        "Brand systems that express who you are\u{2014}and how you want to be seen. Great design builds trust, drives recall, and moves your story forward.",
    ),
    ContentCard::numbered(
        "07",
        "Web Presence",
        "High-performing websites that anchor your go-to-market efforts and create a foundation for growth. Built for clarity, speed, and impact\u{2014}with a CMS your marketing team will actually love.",
    ),
];

pub const APPROACHES: [ContentCard; 3] = [
    ContentCard::numbered(
        "01",
        "Sprints",
        "Fast, focused engagements to explore, test, or move a critical piece forward\u{2014}without getting bogged down. Tightly scoped, clearly defined, and built to create momentum. You'll walk away with answers, direction, and something real to build on.",
    ),
    ContentCard::numbered(
        "02",
        "Projects",
        "End-to-end design support for a product, brand, or web experience\u{2014}with a defined scope and measurable outcomes. We lead from brief to build, aligning teams, shaping the vision, and driving toward a result you can launch with confidence.",
    ),
    ContentCard::numbered(
        "03",
        "Partnerships",
        "For companies that need more than a vendor\u{2014}they want a design partner. We embed with your team, stay close to the work, and evolve alongside the business. The result is consistency, speed, and strategic lift as you grow.",
    ),
];

pub const PRINCIPLES: [ContentCard; 4] = [
    ContentCard::numbered(
        "01",
        "Embrace Complexity",
        "We navigate intricate design challenges with care, crafting solutions that are both innovative and adaptable to a rapidly evolving world.",
    ),
    ContentCard::numbered(
        "02",
        "Insights Before Ideation",
        "We begin every engagement with a deep understanding of your users and goals, letting insights shape ideas that connect and push business forward.",
    ),
    ContentCard::numbered(
        "03",
        "Partners, Not Hired Hands",
        "We work side-by-side with your team, sharing a commitment to your success and building solutions together.",
    ),
    ContentCard::numbered(
        "04",
        "Beauty with Purpose",
        "We craft visually stunning designs that serve a strategic intent, merging aesthetic excellence with functional impact.",
    ),
];

/// Split a sentence into words for per-word animation.
///
/// Runs of whitespace never produce empty words.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Short label for a social network button (its initial).
pub fn social_initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}
