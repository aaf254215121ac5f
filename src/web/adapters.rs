//! `web_sys`-backed implementations of the `dom` adapter traits.

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Document, Element, HtmlVideoElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Window,
};

use crate::dom::{
    CopyDone, ElementLookup, ElementRef, EnvironmentError, Platform, ScrollMotion, VideoRef,
};

fn js_error_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[derive(Clone)]
pub struct WebElement(Element);

impl WebElement {
    pub fn new(inner: Element) -> Self {
        Self(inner)
    }
}

impl ElementRef for WebElement {
    fn element_id(&self) -> String {
        self.0.id()
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text_content(&self, value: &str) {
        self.0.set_text_content(Some(value));
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            warn!("setAttribute({name}) failed: {}", js_error_text(&err));
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn scroll_into_view(&self, motion: ScrollMotion) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match motion {
            ScrollMotion::Smooth => ScrollBehavior::Smooth,
            ScrollMotion::Instant => ScrollBehavior::Auto,
        });
        options.set_block(ScrollLogicalPosition::Start);
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Clone)]
pub struct WebVideo(HtmlVideoElement);

impl VideoRef for WebVideo {
    fn enforce_inline_muted(&self) {
        self.0.set_muted(true);
        // Attribute forms as well; strict mobile engines consult the markup
        // rather than the property when gating autoplay.
        for name in ["muted", "playsinline"] {
            if let Err(err) = self.0.set_attribute(name, "") {
                warn!("setAttribute({name}) failed: {}", js_error_text(&err));
            }
        }
    }

    fn play(&self) -> Result<(), EnvironmentError> {
        let promise = self
            .0
            .play()
            .map_err(|err| EnvironmentError::PlaybackRejected(js_error_text(&err)))?;
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                debug!("deferred play rejected: {}", js_error_text(&err));
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), EnvironmentError> {
        self.0
            .pause()
            .map_err(|err| EnvironmentError::PlaybackRejected(js_error_text(&err)))
    }
}

#[derive(Clone)]
pub struct WebLookup(Document);

impl WebLookup {
    pub fn new(document: Document) -> Self {
        Self(document)
    }
}

impl ElementLookup for WebLookup {
    type Elem = WebElement;
    type Video = WebVideo;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let collection = self.0.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .map(WebElement)
            .collect()
    }

    fn query_one(&self, selector: &str) -> Option<WebElement> {
        self.0.query_selector(selector).ok().flatten().map(WebElement)
    }

    fn videos(&self) -> Vec<WebVideo> {
        let collection = self.0.get_elements_by_tag_name("video");
        (0..collection.length())
            .filter_map(|index| collection.item(index))
            .filter_map(|element| element.dyn_into::<HtmlVideoElement>().ok())
            .map(WebVideo)
            .collect()
    }

    fn create_anchor(&self) -> Option<WebElement> {
        match self.0.create_element("a") {
            Ok(element) => Some(WebElement(element)),
            Err(err) => {
                warn!("createElement(a) failed: {}", js_error_text(&err));
                None
            }
        }
    }

    fn append_to(&self, parent: &WebElement, child: &WebElement) {
        if let Err(err) = parent.0.append_child(&child.0) {
            warn!("appendChild failed: {}", js_error_text(&err));
        }
    }
}

#[derive(Clone)]
pub struct WebPlatform(Window);

impl WebPlatform {
    pub fn new(window: Window) -> Self {
        Self(window)
    }
}

impl Platform for WebPlatform {
    fn alert(&self, message: &str) {
        if let Err(err) = self.0.alert_with_message(message) {
            warn!("alert failed: {}", js_error_text(&err));
        }
    }

    fn write_clipboard(&self, text: &str, done: CopyDone) {
        let clipboard = self.0.navigator().clipboard();
        if clipboard.is_undefined() {
            done(Err(EnvironmentError::ClipboardUnavailable));
            return;
        }
        let promise = clipboard.write_text(text);
        spawn_local(async move {
            let result = JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| EnvironmentError::ClipboardRejected(js_error_text(&err)));
            done(result);
        });
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, callback).forget();
    }

    fn after_next_frame(&self, callback: Box<dyn FnOnce()>) {
        let closure = Closure::once(move |_timestamp: f64| callback());
        if let Err(err) = self
            .0
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            warn!("requestAnimationFrame failed: {}", js_error_text(&err));
        }
        closure.forget();
    }

    fn fragment(&self) -> Option<String> {
        let hash = self.0.location().hash().ok()?;
        let id = hash.strip_prefix('#').unwrap_or(&hash);
        (!id.is_empty()).then(|| id.to_string())
    }

    fn replace_fragment(&self, fragment: &str) {
        let Ok(history) = self.0.history() else {
            return;
        };
        if let Err(err) =
            history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{fragment}")))
        {
            warn!("history.replaceState failed: {}", js_error_text(&err));
        }
    }
}
