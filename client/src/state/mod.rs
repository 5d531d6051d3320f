//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by owner (`theme` for the root, `nav` for the nav bar,
//! `contact` for the form) so each component depends on one small model.
//! `skills` is the one read-only dataset.

pub mod contact;
pub mod nav;
pub mod skills;
pub mod theme;
