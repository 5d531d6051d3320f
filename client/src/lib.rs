//! # portfolio
//!
//! Leptos + WASM frontend for a single-page personal portfolio.
//!
//! This crate contains the root `App`, the page sections, the small local
//! state models behind them (theme flag, nav bar, contact form, skills
//! dataset), and the browser glue those models need. The `server` crate
//! renders it with the `ssr` feature; the WASM bundle hydrates it with the
//! `hydrate` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
