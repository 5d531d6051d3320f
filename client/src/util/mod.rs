//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (theme class, scroll
//! listener, alert dialog) and chart math from component rendering so the
//! logic can be tested off-browser.

pub mod dark_mode;
pub mod dialog;
pub mod line_chart;
pub mod scroll;
