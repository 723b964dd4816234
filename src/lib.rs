//! BlinkPath - design studio website
//!
//! A single-page marketing site with scroll-driven entrances and a contact
//! form, built with Leptos and WebAssembly. Server rendering and the contact
//! endpoint run on axum.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
