//! Browser capability seams and helpers shared across the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one environment concern behind a trait so state
//! transitions can be driven by in-memory fakes in tests. Browser
//! implementations are compiled under the `csr` feature; without it they
//! degrade to safe no-ops.

pub mod env;
pub mod mail;
pub mod mailto;
pub mod navigate;
pub mod scroll;
pub mod settings;
pub mod theme;
pub mod timer;

#[cfg(test)]
pub(crate) mod testing;
