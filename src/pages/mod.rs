//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page. It owns page-scoped resources (the scroll
//! listener) and delegates rendering to `components`.

pub mod home;
