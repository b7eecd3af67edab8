//! Web UI for smartsume
//!
//! A Yew-based single-page resume editor: form on the left, live layout
//! preview on the right, PDF export via a canvas rasterization of the
//! rendered document tree.

mod app;
mod components;
mod painter;
mod preview;

use wasm_bindgen::prelude::*;

/// Entry point for the WASM application.
#[wasm_bindgen(start)]
pub fn run_app() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Mount the Yew app
    yew::Renderer::<app::App>::new().render();
}
