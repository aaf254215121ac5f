//! Deck page controller: navigation dots, scroll/hash synchronization,
//! keyboard paging, and video playback hygiene for the slide deck.

use log::debug;

use crate::config;
use crate::dom::{ElementLookup, ElementRef, PageKey, Platform, ScrollMotion, VideoRef};

/// One slide's visibility report, as delivered by the intersection
/// observer. `ratio` is only meaningful while `intersecting` is true.
#[derive(Clone, Debug)]
pub struct SlideVisibility {
    pub slide_id: String,
    pub ratio: f64,
    pub intersecting: bool,
}

pub struct DeckPage<L: ElementLookup, P: Platform> {
    platform: P,
    slides: Vec<L::Elem>,
    slide_ids: Vec<String>,
    dots: Vec<L::Elem>,
    videos: Vec<L::Video>,
}

impl<L, P> DeckPage<L, P>
where
    L: ElementLookup,
    P: Platform + 'static,
{
    /// Discovers the deck markup and builds one navigation dot per slide.
    /// Returns `None` when the page has no deck, no slides, or no dot
    /// strip; the controller then performs no setup at all.
    pub fn initialize(lookup: &L, platform: P) -> Option<Self> {
        lookup.element_by_id(config::DECK_ID)?;
        let slides = lookup.elements_by_class(config::SLIDE_CLASS);
        if slides.is_empty() {
            return None;
        }
        let nav = lookup.query_one(config::DOTS_SELECTOR)?;

        let slide_ids: Vec<String> = slides.iter().map(ElementRef::element_id).collect();
        let mut dots = Vec::with_capacity(slides.len());
        for (index, slide_id) in slide_ids.iter().enumerate() {
            let dot = lookup.create_anchor()?;
            dot.set_attribute("class", config::DOT_CLASS);
            dot.set_attribute("href", &format!("#{slide_id}"));
            dot.set_attribute("aria-label", &format!("Go to slide {}", index + 1));
            dot.set_attribute(config::DOT_TARGET_ATTR, slide_id);
            lookup.append_to(&nav, &dot);
            dots.push(dot);
        }

        let videos = lookup.videos();
        for video in &videos {
            video.enforce_inline_muted();
        }

        let page = Self {
            platform,
            slides,
            slide_ids,
            dots,
            videos,
        };
        // The first slide is current until the observer reports otherwise.
        page.set_active(&page.slide_ids[0]);
        Some(page)
    }

    /// Marks the dot for `slide_id` current and clears every other dot.
    /// Total reassignment on each call keeps at most one dot current.
    pub fn set_active(&self, slide_id: &str) {
        for dot in &self.dots {
            let current = dot.attribute(config::DOT_TARGET_ATTR).as_deref() == Some(slide_id);
            dot.set_attribute("aria-current", if current { "true" } else { "false" });
        }
    }

    /// If the page loaded with a fragment naming a known slide, scrolls it
    /// into view without animation once layout has settled.
    pub fn schedule_initial_scroll(&self) {
        let Some(fragment) = self.platform.fragment() else {
            return;
        };
        let Some(slide) = self.slide_by_id(&fragment) else {
            return;
        };
        let slide = slide.clone();
        self.platform
            .after_next_frame(Box::new(move || slide.scroll_into_view(ScrollMotion::Instant)));
    }

    /// Handles a click inside the dot strip. Returns true when the click
    /// landed on a dot and was taken over (the caller must then suppress
    /// the default link navigation); the fragment is replaced rather than
    /// pushed so dot navigation does not grow history.
    pub fn handle_nav_click(&self, target: &L::Elem) -> bool {
        if !target.has_class(config::DOT_CLASS) {
            return false;
        }
        let Some(slide_id) = target.attribute(config::DOT_TARGET_ATTR) else {
            return false;
        };
        let Some(slide) = self.slide_by_id(&slide_id) else {
            return false;
        };
        slide.scroll_into_view(ScrollMotion::Smooth);
        self.platform.replace_fragment(&slide_id);
        true
    }

    /// Picks the most visible slide out of an intersection report and makes
    /// it current, syncing the URL fragment if it changed. Highest ratio
    /// wins; equal ratios resolve to the lowest slide index.
    pub fn handle_intersections(&self, reports: &[SlideVisibility]) {
        let mut best: Option<(usize, f64)> = None;
        for report in reports.iter().filter(|r| r.intersecting) {
            let Some(index) = self.slide_index(&report.slide_id) else {
                continue;
            };
            let wins = match best {
                None => true,
                Some((best_index, best_ratio)) => {
                    report.ratio > best_ratio || (report.ratio == best_ratio && index < best_index)
                }
            };
            if wins {
                best = Some((index, report.ratio));
            }
        }
        let Some((index, _)) = best else {
            return;
        };

        let slide_id = &self.slide_ids[index];
        self.set_active(slide_id);
        if self.platform.fragment().as_deref() != Some(slide_id.as_str()) {
            self.platform.replace_fragment(slide_id);
        }
    }

    /// Keyboard paging, clamped at both ends. The fragment is left alone;
    /// the intersection observer will sync it once the scroll settles.
    pub fn handle_key(&self, key: PageKey) {
        let Some(current) = self.active_index() else {
            return;
        };
        let target = match key {
            PageKey::Next => (current + 1).min(self.slides.len() - 1),
            PageKey::Previous => current.saturating_sub(1),
        };
        if target == current {
            return;
        }
        self.slides[target].scroll_into_view(ScrollMotion::Smooth);
    }

    /// Pauses every video when the tab goes hidden and retries playback
    /// when it comes back. Failures are expected under autoplay policies
    /// and are logged, not surfaced.
    pub fn handle_visibility_change(&self, hidden: bool) {
        for video in &self.videos {
            let result = if hidden { video.pause() } else { video.play() };
            if let Err(err) = result {
                debug!("video control ignored: {err}");
            }
        }
    }

    /// Index of the dot currently marked current, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.dots
            .iter()
            .position(|dot| dot.attribute("aria-current").as_deref() == Some("true"))
    }

    fn slide_index(&self, slide_id: &str) -> Option<usize> {
        self.slide_ids.iter().position(|id| id == slide_id)
    }

    fn slide_by_id(&self, slide_id: &str) -> Option<&L::Elem> {
        self.slide_index(slide_id).map(|index| &self.slides[index])
    }
}
