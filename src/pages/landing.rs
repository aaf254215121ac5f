//! Landing page controller: footer year stamp, the copy-checkout-link
//! button, and one-time support-window text propagation.

use log::warn;

use crate::config;
use crate::dom::{ElementLookup, ElementRef, Platform};

pub struct LandingPage<L: ElementLookup, P: Platform> {
    platform: P,
    buy_button: Option<L::Elem>,
    copy_button: Option<L::Elem>,
    idle_label: String,
}

impl<L, P> LandingPage<L, P>
where
    L: ElementLookup,
    P: Platform + 'static,
{
    /// Runs the one-shot initialization work (year stamp, support-window
    /// propagation) and captures the elements the click handler needs.
    /// Missing elements are skipped; they are optional page furniture.
    pub fn initialize(lookup: &L, platform: P, current_year: i32) -> Self {
        if let Some(year) = lookup.element_by_id(config::YEAR_ID) {
            year.set_text_content(&current_year.to_string());
        }

        propagate_support_window(lookup);

        let copy_button = lookup.element_by_id(config::COPY_BUTTON_ID);
        let idle_label = copy_button
            .as_ref()
            .map(|button| button.text_content().trim().to_string())
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| config::COPY_IDLE_LABEL.to_string());

        Self {
            platform,
            buy_button: lookup.element_by_id(config::BUY_BUTTON_ID),
            copy_button,
            idle_label,
        }
    }

    /// Click handler for the copy control. An unfilled checkout link is an
    /// operator configuration error and is alerted without touching the
    /// clipboard; a clipboard failure gets one fallback alert.
    pub fn handle_copy_click(&self) {
        let Some(copy_button) = self.copy_button.clone() else {
            return;
        };

        let link = self
            .buy_button
            .as_ref()
            .and_then(|button| button.attribute("href"))
            .unwrap_or_default();
        if link.is_empty() || link.contains(config::CHECKOUT_PLACEHOLDER) {
            self.platform.alert(config::CHECKOUT_UNSET_ALERT);
            return;
        }

        let platform = self.platform.clone();
        let idle_label = self.idle_label.clone();
        self.platform.write_clipboard(
            &link,
            Box::new(move |result| match result {
                Ok(()) => {
                    copy_button.set_text_content(config::COPIED_LABEL);
                    platform.set_timeout(
                        config::COPY_RESET_MS,
                        Box::new(move || copy_button.set_text_content(&idle_label)),
                    );
                }
                Err(err) => {
                    warn!("clipboard write failed: {err}");
                    platform.alert(config::COPY_FAILED_ALERT);
                }
            }),
        );
    }
}

/// Copies the operator-authored support-window string from its canonical
/// element into the two mirror locations. One-directional, once, and only
/// when all three elements exist and the source has been filled in.
fn propagate_support_window<L: ElementLookup>(lookup: &L) {
    let (Some(source), Some(pricing), Some(faq)) = (
        lookup.element_by_id(config::SUPPORT_SOURCE_ID),
        lookup.element_by_id(config::SUPPORT_PRICING_ID),
        lookup.element_by_id(config::SUPPORT_FAQ_ID),
    ) else {
        return;
    };

    let value = source.text_content().trim().to_string();
    if value.is_empty() || value.contains(config::SUPPORT_PLACEHOLDER) {
        return;
    }
    pricing.set_text_content(&value);
    faq.set_text_content(&value);
}
