//! Project showcase table.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Lifecycle label shown on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    InDevelopment,
    Archived,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::InDevelopment => "In Development",
            Self::Archived => "Archived",
        }
    }

    /// Badge style variant for the status chip.
    #[must_use]
    pub fn badge_variant(self) -> &'static str {
        match self {
            Self::Live => "default",
            Self::InDevelopment => "secondary",
            Self::Archived => "outline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
    pub status: ProjectStatus,
    pub year: &'static str,
}

pub const PROJECTS: [ProjectEntry; 4] = [
    ProjectEntry {
        title: "Library Management System",
        description: "A comprehensive library management system with book tracking, member management, \
                      borrowing system, and administrative dashboard. Features real-time availability \
                      status and automated notifications.",
        technologies: &["PHP", "MySQL", "HTML5", "CSS3", "JavaScript"],
        image: "/assets/images/projects/Library-Management-System.png",
        link: "https://github.com/Allain-afk/library-management",
        status: ProjectStatus::Live,
        year: "2024",
    },
    ProjectEntry {
        title: "First Portfolio Design",
        description: "My initial portfolio website showcasing clean design principles and responsive \
                      layouts. Built with modern web technologies and smooth animations to create an \
                      engaging user experience.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Figma"],
        image: "/assets/images/projects/First-Portfolio-Design.png",
        link: "https://github.com/Allain-afk/first-portfolio",
        status: ProjectStatus::Live,
        year: "2023",
    },
    ProjectEntry {
        title: "JackMar Trading Website",
        description: "Professional trading platform website with real-time market data, user dashboard, \
                      and comprehensive trading tools. Features modern UI/UX design and responsive layout.",
        technologies: &["React", "TypeScript", "Tailwind CSS", "Node.js"],
        image: "/assets/images/projects/JackMar-Trading-Website.png",
        link: "https://github.com/Allain-afk/jackmar-trading",
        status: ProjectStatus::Live,
        year: "2024",
    },
    ProjectEntry {
        title: "Laundry Management System",
        description: "Digital solution for laundry business operations including order tracking, customer \
                      management, pricing calculator, and service scheduling with automated notifications.",
        technologies: &["PHP", "MySQL", "HTML5", "CSS3", "JavaScript"],
        image: "/assets/images/projects/Laundry-Management-System.png",
        link: "https://github.com/Allain-afk/laundry-management",
        status: ProjectStatus::Live,
        year: "2024",
    },
];
