//! Scripted fakes for the `dom` adapter traits, so controller behavior is
//! exercised natively without a browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::dom::{
    CopyDone, ElementLookup, ElementRef, EnvironmentError, Platform, ScrollMotion, VideoRef,
};

#[derive(Default)]
struct ElementState {
    id: String,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    scrolls: RefCell<Vec<ScrollMotion>>,
    children: RefCell<Vec<FakeElement>>,
}

#[derive(Clone, Default)]
pub struct FakeElement(Rc<ElementState>);

impl FakeElement {
    pub fn new(id: &str) -> Self {
        Self(Rc::new(ElementState {
            id: id.to_string(),
            ..ElementState::default()
        }))
    }

    pub fn with_class(self, class: &str) -> Self {
        self.0.classes.borrow_mut().push(class.to_string());
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        *self.0.text.borrow_mut() = text.to_string();
        self
    }

    pub fn children(&self) -> Vec<FakeElement> {
        self.0.children.borrow().clone()
    }

    pub fn scroll_log(&self) -> Vec<ScrollMotion> {
        self.0.scrolls.borrow().clone()
    }
}

impl ElementRef for FakeElement {
    fn element_id(&self) -> String {
        self.0.id.clone()
    }

    fn text_content(&self) -> String {
        self.0.text.borrow().clone()
    }

    fn set_text_content(&self, value: &str) {
        *self.0.text.borrow_mut() = value.to_string();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn has_class(&self, class: &str) -> bool {
        if self.0.classes.borrow().iter().any(|c| c == class) {
            return true;
        }
        self.0
            .attributes
            .borrow()
            .get("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    fn scroll_into_view(&self, motion: ScrollMotion) {
        self.0.scrolls.borrow_mut().push(motion);
    }
}

#[derive(Default)]
struct VideoState {
    inline_muted: Cell<bool>,
    play_calls: Cell<u32>,
    pause_calls: Cell<u32>,
    reject_play: Cell<bool>,
}

#[derive(Clone, Default)]
pub struct FakeVideo(Rc<VideoState>);

impl FakeVideo {
    pub fn reject_play(&self) {
        self.0.reject_play.set(true);
    }

    pub fn inline_muted(&self) -> bool {
        self.0.inline_muted.get()
    }

    pub fn play_calls(&self) -> u32 {
        self.0.play_calls.get()
    }

    pub fn pause_calls(&self) -> u32 {
        self.0.pause_calls.get()
    }
}

impl VideoRef for FakeVideo {
    fn enforce_inline_muted(&self) {
        self.0.inline_muted.set(true);
    }

    fn play(&self) -> Result<(), EnvironmentError> {
        self.0.play_calls.set(self.0.play_calls.get() + 1);
        if self.0.reject_play.get() {
            return Err(EnvironmentError::PlaybackRejected("autoplay blocked".into()));
        }
        Ok(())
    }

    fn pause(&self) -> Result<(), EnvironmentError> {
        self.0.pause_calls.set(self.0.pause_calls.get() + 1);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeLookup {
    by_id: RefCell<HashMap<String, FakeElement>>,
    slides: RefCell<Vec<FakeElement>>,
    selectors: RefCell<HashMap<String, FakeElement>>,
    videos: RefCell<Vec<FakeVideo>>,
}

impl FakeLookup {
    pub fn insert(&self, element: FakeElement) {
        self.by_id
            .borrow_mut()
            .insert(element.element_id(), element);
    }

    pub fn remove(&self, id: &str) {
        self.by_id.borrow_mut().remove(id);
    }

    /// Registered element by id; panics when absent (test convenience).
    pub fn get(&self, id: &str) -> FakeElement {
        self.by_id
            .borrow()
            .get(id)
            .cloned()
            .unwrap_or_else(|| panic!("no element with id {id:?}"))
    }

    pub fn add_slide(&self, slide: FakeElement) {
        self.insert(slide.clone());
        self.slides.borrow_mut().push(slide);
    }

    pub fn slide(&self, id: &str) -> FakeElement {
        self.slides
            .borrow()
            .iter()
            .find(|slide| slide.element_id() == id)
            .cloned()
            .unwrap_or_else(|| panic!("no slide with id {id:?}"))
    }

    pub fn set_selector(&self, selector: &str, element: FakeElement) {
        self.selectors
            .borrow_mut()
            .insert(selector.to_string(), element);
    }

    pub fn selector(&self, selector: &str) -> FakeElement {
        self.selectors
            .borrow()
            .get(selector)
            .cloned()
            .unwrap_or_else(|| panic!("no element for selector {selector:?}"))
    }

    pub fn add_video(&self, video: FakeVideo) {
        self.videos.borrow_mut().push(video);
    }

    pub fn videos_snapshot(&self) -> Vec<FakeVideo> {
        self.videos.borrow().clone()
    }
}

impl ElementLookup for FakeLookup {
    type Elem = FakeElement;
    type Video = FakeVideo;

    fn element_by_id(&self, id: &str) -> Option<FakeElement> {
        self.by_id.borrow().get(id).cloned()
    }

    fn elements_by_class(&self, class: &str) -> Vec<FakeElement> {
        self.slides
            .borrow()
            .iter()
            .filter(|slide| slide.has_class(class))
            .cloned()
            .collect()
    }

    fn query_one(&self, selector: &str) -> Option<FakeElement> {
        self.selectors.borrow().get(selector).cloned()
    }

    fn videos(&self) -> Vec<FakeVideo> {
        self.videos.borrow().clone()
    }

    fn create_anchor(&self) -> Option<FakeElement> {
        Some(FakeElement::default())
    }

    fn append_to(&self, parent: &FakeElement, child: &FakeElement) {
        parent.0.children.borrow_mut().push(child.clone());
    }
}

#[derive(Default)]
struct PlatformState {
    alerts: RefCell<Vec<String>>,
    clipboard: RefCell<Option<String>>,
    clipboard_error: RefCell<Option<EnvironmentError>>,
    timeouts: RefCell<Vec<(u32, Box<dyn FnOnce()>)>>,
    frames: RefCell<Vec<Box<dyn FnOnce()>>>,
    fragment: RefCell<Option<String>>,
    replaced: RefCell<Vec<String>>,
}

#[derive(Clone, Default)]
pub struct FakePlatform(Rc<PlatformState>);

impl FakePlatform {
    pub fn alerts(&self) -> Vec<String> {
        self.0.alerts.borrow().clone()
    }

    /// Last text successfully written to the clipboard, if any.
    pub fn clipboard(&self) -> Option<String> {
        self.0.clipboard.borrow().clone()
    }

    /// Makes the next clipboard write complete with `error`.
    pub fn fail_clipboard(&self, error: EnvironmentError) {
        *self.0.clipboard_error.borrow_mut() = Some(error);
    }

    /// Fires every pending timeout and returns their delays in order.
    pub fn fire_timeouts(&self) -> Vec<u32> {
        let pending: Vec<_> = self.0.timeouts.borrow_mut().drain(..).collect();
        let mut delays = Vec::with_capacity(pending.len());
        for (delay, callback) in pending {
            delays.push(delay);
            callback();
        }
        delays
    }

    pub fn fire_frame_callbacks(&self) {
        let pending: Vec<_> = self.0.frames.borrow_mut().drain(..).collect();
        for callback in pending {
            callback();
        }
    }

    pub fn pending_frame_callbacks(&self) -> usize {
        self.0.frames.borrow().len()
    }

    pub fn set_fragment(&self, fragment: &str) {
        *self.0.fragment.borrow_mut() = Some(fragment.to_string());
    }

    pub fn current_fragment(&self) -> Option<String> {
        self.0.fragment.borrow().clone()
    }

    pub fn replaced_fragments(&self) -> Vec<String> {
        self.0.replaced.borrow().clone()
    }
}

impl Platform for FakePlatform {
    fn alert(&self, message: &str) {
        self.0.alerts.borrow_mut().push(message.to_string());
    }

    fn write_clipboard(&self, text: &str, done: CopyDone) {
        match self.0.clipboard_error.borrow_mut().take() {
            Some(error) => done(Err(error)),
            None => {
                *self.0.clipboard.borrow_mut() = Some(text.to_string());
                done(Ok(()));
            }
        }
    }

    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        self.0.timeouts.borrow_mut().push((delay_ms, callback));
    }

    fn after_next_frame(&self, callback: Box<dyn FnOnce()>) {
        self.0.frames.borrow_mut().push(callback);
    }

    fn fragment(&self) -> Option<String> {
        self.0.fragment.borrow().clone()
    }

    fn replace_fragment(&self, fragment: &str) {
        *self.0.fragment.borrow_mut() = Some(fragment.to_string());
        self.0.replaced.borrow_mut().push(fragment.to_string());
    }
}
