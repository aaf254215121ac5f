//! Event wiring between the browser and the page controllers. Listener
//! closures hold the controller behind `Rc` and are forgotten; they live
//! for the rest of the page view.

use std::rc::Rc;

use chrono::{Datelike, Local};
use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, Window,
};

use super::adapters::{WebElement, WebLookup, WebPlatform};
use crate::config;
use crate::dom::PageKey;
use crate::pages::deck::{DeckPage, SlideVisibility};
use crate::pages::landing::LandingPage;

type WebDeck = DeckPage<WebLookup, WebPlatform>;

fn listen(target: &EventTarget, event: &str, handler: &js_sys::Function) {
    if let Err(err) = target.add_event_listener_with_callback(event, handler) {
        warn!("addEventListener({event}) failed: {err:?}");
    }
}

pub fn init_landing(window: &Window, document: &Document) {
    let lookup = WebLookup::new(document.clone());
    let platform = WebPlatform::new(window.clone());
    let page = Rc::new(LandingPage::initialize(
        &lookup,
        platform,
        Local::now().year(),
    ));

    let Some(copy_button) = document.get_element_by_id(config::COPY_BUTTON_ID) else {
        return;
    };
    let on_click =
        Closure::<dyn Fn(MouseEvent)>::new(move |_event: MouseEvent| page.handle_copy_click());
    listen(&copy_button, "click", on_click.as_ref().unchecked_ref());
    on_click.forget();
}

pub fn init_deck(window: &Window, document: &Document) {
    let lookup = WebLookup::new(document.clone());
    let platform = WebPlatform::new(window.clone());
    let Some(page) = DeckPage::initialize(&lookup, platform) else {
        info!("deck markup incomplete, controller not attached");
        return;
    };
    let page = Rc::new(page);
    page.schedule_initial_scroll();

    if let Ok(Some(nav)) = document.query_selector(config::DOTS_SELECTOR) {
        let page = page.clone();
        let on_click = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if page.handle_nav_click(&WebElement::new(target)) {
                event.prevent_default();
            }
        });
        listen(&nav, "click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }

    {
        let page = page.clone();
        let on_keydown = Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Some(key) = PageKey::from_key_name(&event.key()) {
                page.handle_key(key);
            }
        });
        listen(window, "keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    }

    {
        let page = page.clone();
        let doc = document.clone();
        let on_visibility =
            Closure::<dyn Fn()>::new(move || page.handle_visibility_change(doc.hidden()));
        listen(document, "visibilitychange", on_visibility.as_ref().unchecked_ref());
        on_visibility.forget();
    }

    observe_slides(document, &page);
}

/// Watches every slide's intersection with the deck viewport and feeds
/// plain visibility reports into the controller.
fn observe_slides(document: &Document, page: &Rc<WebDeck>) {
    let Some(deck) = document.get_element_by_id(config::DECK_ID) else {
        return;
    };

    let page = page.clone();
    let on_intersect = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let reports: Vec<SlideVisibility> = entries
                .iter()
                .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| SlideVisibility {
                    slide_id: entry.target().id(),
                    ratio: entry.intersection_ratio(),
                    intersecting: entry.is_intersecting(),
                })
                .collect();
            page.handle_intersections(&reports);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root(Some(&deck));
    let thresholds = js_sys::Array::new();
    for threshold in config::VISIBILITY_THRESHOLDS {
        thresholds.push(&JsValue::from_f64(threshold));
    }
    options.set_threshold(&thresholds);

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
        {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {err:?}");
                return;
            }
        };
    on_intersect.forget();

    let slides = document.get_elements_by_class_name(config::SLIDE_CLASS);
    for index in 0..slides.length() {
        if let Some(slide) = slides.item(index) {
            observer.observe(&slide);
        }
    }
}
