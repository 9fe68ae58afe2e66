//! PresenX - Yew WASM Frontend
//!
//! This crate provides the web UI: landing page, login and registration
//! forms, and the student and teacher dashboards.

mod app;
mod components;
mod logger;
mod pages;
mod services;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn main() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);

    yew::Renderer::<App>::new().render();
}
