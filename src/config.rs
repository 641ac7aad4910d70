//! Compile-time site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is shipped as static files, so identity, contact routing, and
//! behavioral constants are fixed at build time. Changing any of the
//! contact values changes the outbound `mailto:` contract.

use std::time::Duration;

/// Owner display name used in the brand mark, hero, and mail greeting.
pub const OWNER_NAME: &str = "Allain";

/// Document `<title>`.
pub const SITE_TITLE: &str = "Allain | Full-Stack Developer & Designer";

/// Fixed recipient of every contact-form message.
pub const CONTACT_EMAIL: &str = "allainralphlegaspi@gmail.com";

/// Subject used when the visitor leaves the subject field empty.
pub const FALLBACK_SUBJECT: &str = "Contact from Portfolio";

/// Delay between opening the mail client and clearing the form.
pub const FORM_RESET_DELAY: Duration = Duration::from_millis(1000);

/// Scroll offset, in pixels, past which the page counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Settings key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Resume asset path and the filename offered to the browser.
pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_DOWNLOAD_NAME: &str = "Allain_Resume.pdf";

pub const GITHUB_URL: &str = "https://github.com/Allain-afk";
pub const GITHUB_HANDLE: &str = "github.com/Allain-afk";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/allain-afk";
pub const LINKEDIN_HANDLE: &str = "www.linkedin.com/in/allain-afk";

/// Copyright holder shown in the footer.
pub const COPYRIGHT_LINE: &str = "© 2025 Allain-afk. All rights reserved.";

#[cfg(feature = "csr")]
pub const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};
