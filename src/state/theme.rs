//! Light/dark theme mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two page themes. Light is the explicit fallback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Resolve a persisted value. Only the exact string `"dark"` selects
    /// dark mode; absent, corrupt, or unknown values fall back to light.
    #[must_use]
    pub fn resolve(persisted: Option<&str>) -> Self {
        match persisted {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted and document-marker form of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}
