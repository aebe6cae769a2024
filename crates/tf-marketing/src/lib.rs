//! Terafence Marketing Site
//!
//! Pages, components and server functions shared by the SSR binary and the
//! browser bundle that hydrates it.

pub mod api;
pub mod app;
mod components;
mod content;
mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
