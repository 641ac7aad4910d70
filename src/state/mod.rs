//! View state owned by the page.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `scroll`, `contact`) into plain value
//! types with named transition methods. Components hold them in `RwSignal`s
//! and call the transitions; no transition touches the browser directly.

pub mod contact;
pub mod scroll;
pub mod theme;
