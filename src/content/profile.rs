//! Profile copy: achievements, current focus, and availability.

/// Headline number shown in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub number: &'static str,
    /// May contain `\n`; rendered with preserved line breaks.
    pub label: &'static str,
}

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement { number: "2+", label: "Years of\nexperience" },
    Achievement { number: "75,000+", label: "Lines of\ncode written" },
    Achievement { number: "1k+", label: "Cups of coffee\nconsumed" },
    Achievement { number: "100%", label: "Client Satisfaction" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusItem {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const CURRENTLY: [FocusItem; 3] = [
    FocusItem {
        title: "Building innovative web applications",
        detail: "Focusing on React, TypeScript, and modern web technologies",
    },
    FocusItem {
        title: "Learning advanced development patterns",
        detail: "Exploring microservices, cloud architecture, and performance optimization",
    },
    FocusItem {
        title: "Open to new opportunities",
        detail: "Looking for exciting projects and collaborations",
    },
];

pub const AVAILABLE_FOR: [&str; 4] = ["Web Development", "Mobile Apps", "UI/UX Design", "Consulting"];

pub const HERO_TRAITS: [&str; 3] = ["Coffee enthusiast", "Code lover", "Problem solver"];

pub const TAGLINE_ROLE: &str = "Full-Stack Developer & Designer";
