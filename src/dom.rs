//! Adapter traits between the page controllers and the rendering surface.
//!
//! The controllers in [`crate::pages`] are written entirely against these
//! traits. In the browser they are backed by `web_sys` (see the `web`
//! module); in tests they are backed by scripted fakes, so every behavior
//! can be exercised natively.

use thiserror::Error;

/// Environment limitations the controllers tolerate rather than surface.
///
/// Callers decide what to do with these; current policy is one fallback
/// alert for a failed clipboard write and a debug log for everything else.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("clipboard API unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("media playback rejected: {0}")]
    PlaybackRejected(String),
}

/// How a scroll request should move the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    /// Jump without animation. Used for the load-time hash scroll, which
    /// runs after layout settles and must not visibly travel.
    Instant,
}

/// Keyboard paging directions on the deck page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKey {
    Next,
    Previous,
}

impl PageKey {
    /// Maps a DOM `KeyboardEvent.key` name to a paging direction.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowDown" | "PageDown" => Some(Self::Next),
            "ArrowUp" | "PageUp" => Some(Self::Previous),
            _ => None,
        }
    }
}

/// Handle to one element of the page.
pub trait ElementRef: Clone {
    fn element_id(&self) -> String;
    fn text_content(&self) -> String;
    fn set_text_content(&self, value: &str);
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn has_class(&self, class: &str) -> bool;
    fn scroll_into_view(&self, motion: ScrollMotion);
}

/// Handle to one embedded video.
pub trait VideoRef: Clone {
    /// Forces muted + inline playback, which strict mobile engines require
    /// before they allow autoplay at all.
    fn enforce_inline_muted(&self);
    fn play(&self) -> Result<(), EnvironmentError>;
    fn pause(&self) -> Result<(), EnvironmentError>;
}

/// Element discovery and construction on the current document.
pub trait ElementLookup {
    type Elem: ElementRef + 'static;
    type Video: VideoRef + 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Elem>;
    fn elements_by_class(&self, class: &str) -> Vec<Self::Elem>;
    fn query_one(&self, selector: &str) -> Option<Self::Elem>;
    fn videos(&self) -> Vec<Self::Video>;

    /// Creates a detached anchor element, or `None` if the surface refuses.
    fn create_anchor(&self) -> Option<Self::Elem>;
    fn append_to(&self, parent: &Self::Elem, child: &Self::Elem);
}

/// Completion callback for the asynchronous clipboard write.
pub type CopyDone = Box<dyn FnOnce(Result<(), EnvironmentError>)>;

/// Browser services consumed by the controllers beyond the document itself.
pub trait Platform: Clone {
    /// Blocking modal warning aimed at the page operator.
    fn alert(&self, message: &str);

    /// Writes `text` to the system clipboard and eventually invokes `done`.
    /// Only the caller's continuation is suspended; no other UI state waits
    /// on the result.
    fn write_clipboard(&self, text: &str, done: CopyDone);

    /// One-shot timer. Never cancelled; racing callbacks are tolerated.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);

    /// Runs `callback` after the next layout pass.
    fn after_next_frame(&self, callback: Box<dyn FnOnce()>);

    /// Current URL fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Replaces the URL fragment in place. Replacement, never a push, so
    /// fragment churn does not grow browser history.
    fn replace_fragment(&self, fragment: &str);
}
