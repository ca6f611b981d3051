//! # anime-catalog
//!
//! Leptos + WASM frontend for the anime catalog.
//!
//! This crate contains the session store that bootstraps the signed-in user
//! once per mount, the cover-art grid that gates "add to collection" behind
//! that session, and the pages and REST helpers around them.

pub mod app;
pub mod components;
pub mod consts;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entrypoint: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
