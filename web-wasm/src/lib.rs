//! Bookshelf Scanner Web App (Leptos + WASM)

mod api;
mod app;
mod camera;
mod components;
mod config;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
