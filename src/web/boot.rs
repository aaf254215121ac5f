//! WebAssembly entry point: picks the controller matching the loaded page.

use log::{info, Level};
use wasm_bindgen::prelude::wasm_bindgen;

use super::wiring;
use crate::config;

#[wasm_bindgen(start)]
pub fn start() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    // The two controllers never run on the same page; the deck container
    // decides which one this is.
    if document.get_element_by_id(config::DECK_ID).is_some() {
        info!("attaching deck page controller");
        wiring::init_deck(&window, &document);
    } else {
        info!("attaching landing page controller");
        wiring::init_landing(&window, &document);
    }
}
