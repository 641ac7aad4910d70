//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio sections and read/write view state from
//! Leptos context providers installed by `App`. Side effects go through the
//! `Environment` capabilities, never through `web_sys` directly.

pub mod about;
pub mod contact_form;
pub mod contact_info;
pub mod footer;
pub mod hero;
pub mod nav_bar;
pub mod projects;
pub mod scroll_top;
pub mod tech_grid;
