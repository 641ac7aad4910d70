//! Static page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The base technology list comes from `data/portfolio.json`, embedded at
//! compile time. Everything else (projects, achievements, profile copy) is
//! literal data in this module tree. Nothing here is ever mutated.


pub mod profile;
pub mod projects;
pub mod tech;

use serde::Deserialize;

const PORTFOLIO_JSON: &str = include_str!("../../data/portfolio.json");

/// Failure to read the embedded content file.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One entry of the external technology list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TechEntry {
    pub name: String,
}

/// Externally sourced content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    #[serde(default)]
    pub tech_stack: Vec<TechEntry>,
}

impl PortfolioData {
    /// Parse content from a JSON document.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The embedded content, or empty content if it fails to parse.
    pub fn embedded() -> Self {
        Self::from_json(PORTFOLIO_JSON).unwrap_or_else(|err| {
            log::error!("{err}");
            Self::default()
        })
    }
}
