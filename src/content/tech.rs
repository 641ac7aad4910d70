//! Technology badge assembly.
//!
//! The badge grid is the external list mapped through a name→icon lookup,
//! followed by a fixed supplemental list. The two are concatenated as-is;
//! a technology present in both appears twice.

#[cfg(test)]
#[path = "tech_test.rs"]
mod tech_test;

use crate::content::TechEntry;

/// Neutral tile class shared by every badge.
pub const BADGE_COLOR_CLASS: &str = "bg-gray-100";

/// Brand glyphs known to the badge grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechIcon {
    React,
    JavaScript,
    TypeScript,
    Python,
    Php,
    NodeJs,
    Html5,
    Css3,
    TailwindCss,
    Flutter,
    Dart,
    CPlusPlus,
    MySql,
    Git,
    GitHub,
    Vite,
    Vercel,
    Figma,
    Canva,
    /// Generic code glyph for unmapped names.
    Code,
}

impl TechIcon {
    /// Exact-name lookup; unknown names map to [`TechIcon::Code`].
    #[must_use]
    pub fn for_name(name: &str) -> Self {
        match name {
            "React" => Self::React,
            "JavaScript" => Self::JavaScript,
            "TypeScript" => Self::TypeScript,
            "Python" => Self::Python,
            "PHP" => Self::Php,
            "Node.js" => Self::NodeJs,
            "HTML5" => Self::Html5,
            "CSS3" => Self::Css3,
            "Tailwind CSS" => Self::TailwindCss,
            "Flutter" => Self::Flutter,
            "Dart" => Self::Dart,
            "C++" => Self::CPlusPlus,
            "MySQL" => Self::MySql,
            "Git" => Self::Git,
            "GitHub" => Self::GitHub,
            "Vite" => Self::Vite,
            "Vercel" => Self::Vercel,
            "Figma" => Self::Figma,
            "Canva" => Self::Canva,
            _ => Self::Code,
        }
    }

    /// Short mark drawn inside the badge glyph, or `None` for the generic glyph.
    #[must_use]
    pub fn monogram(self) -> Option<&'static str> {
        Some(match self {
            Self::React => "Re",
            Self::JavaScript => "JS",
            Self::TypeScript => "TS",
            Self::Python => "Py",
            Self::Php => "php",
            Self::NodeJs => "N",
            Self::Html5 => "5",
            Self::Css3 => "3",
            Self::TailwindCss => "Tw",
            Self::Flutter => "Fl",
            Self::Dart => "Da",
            Self::CPlusPlus => "C++",
            Self::MySql => "My",
            Self::Git => "Git",
            Self::GitHub => "GH",
            Self::Vite => "V",
            Self::Vercel => "▲",
            Self::Figma => "Fi",
            Self::Canva => "Ca",
            Self::Code => return None,
        })
    }

    /// Brand color as `#RRGGBB`.
    #[must_use]
    pub fn brand_color(self) -> &'static str {
        match self {
            Self::React => "#61DAFB",
            Self::JavaScript => "#F7DF1E",
            Self::TypeScript => "#3178C6",
            Self::Python => "#3776AB",
            Self::Php => "#777BB4",
            Self::NodeJs => "#339933",
            Self::Html5 => "#E34F26",
            Self::Css3 => "#1572B6",
            Self::TailwindCss => "#06B6D4",
            Self::Flutter => "#02569B",
            Self::Dart => "#0175C2",
            Self::CPlusPlus => "#00599C",
            Self::MySql => "#4479A1",
            Self::Git => "#F05032",
            Self::GitHub => "#181717",
            Self::Vite => "#646CFF",
            Self::Vercel => "#000000",
            Self::Figma => "#F24E1E",
            Self::Canva => "#00C4CC",
            Self::Code => "#4B5563",
        }
    }
}

/// Badges always appended after the external list.
pub const SUPPLEMENTAL: [(&str, TechIcon); 8] = [
    ("JavaScript", TechIcon::JavaScript),
    ("TypeScript", TechIcon::TypeScript),
    ("Node.js", TechIcon::NodeJs),
    ("Tailwind CSS", TechIcon::TailwindCss),
    ("Git", TechIcon::Git),
    ("GitHub", TechIcon::GitHub),
    ("Vite", TechIcon::Vite),
    ("Vercel", TechIcon::Vercel),
];

/// One tile of the technology grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TechBadge {
    pub name: String,
    pub icon: TechIcon,
    pub color_class: &'static str,
}

/// External entries (icon looked up by name) followed by [`SUPPLEMENTAL`].
#[must_use]
pub fn build_tech_badges(source: &[TechEntry]) -> Vec<TechBadge> {
    let external = source.iter().map(|entry| TechBadge {
        name: entry.name.clone(),
        icon: TechIcon::for_name(&entry.name),
        color_class: BADGE_COLOR_CLASS,
    });
    let supplemental = SUPPLEMENTAL.iter().map(|(name, icon)| TechBadge {
        name: (*name).to_owned(),
        icon: *icon,
        color_class: BADGE_COLOR_CLASS,
    });
    external.chain(supplemental).collect()
}
