//! Page section and chrome components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static copy from `content`; only `nav_bar` and `contact`
//! hold local state, and only `nav_bar` receives anything from its parent.

pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod icons;
pub mod line_chart;
pub mod nav_bar;
pub mod skills;
