//! Browser-side controllers for the course site's static pages: the
//! landing page (footer year stamp, copy-checkout-link button,
//! support-window text propagation) and the slide deck (dot navigation,
//! scroll/hash sync, keyboard paging, video playback hygiene).
//!
//! The controllers are written against the adapter traits in [`dom`] and
//! only the `web` module touches the real browser, so all behavior is
//! testable natively.

pub mod config;
pub mod dom;
pub mod pages {
    pub mod deck;
    pub mod landing;
}

#[cfg(target_arch = "wasm32")]
mod web {
    pub mod adapters;
    pub mod boot;
    pub mod wiring;
}

#[cfg(test)]
mod testing;
