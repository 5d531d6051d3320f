//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it composes the sections in order and
//! delegates rendering details to `components`.

pub mod home;
