//! NEFRA Connections
//!
//! Browser client for the NEFRA networking site, built with Leptos (WASM).
//!
//! # Architecture
//!
//! Client-side rendered. Routing, page models, form rules and settings
//! persistence all come from `nefra-connect`; this crate binds them to the
//! DOM, `window.history`, `localStorage` and `IntersectionObserver`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
