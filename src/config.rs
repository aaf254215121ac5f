//! Markup contract and tuning constants shared by both page controllers.

// Landing page element ids
pub const YEAR_ID: &str = "year";
pub const BUY_BUTTON_ID: &str = "buyButton";
pub const COPY_BUTTON_ID: &str = "copyLinkBtn";
pub const SUPPORT_SOURCE_ID: &str = "supportWindowInline";
pub const SUPPORT_PRICING_ID: &str = "supportWindow";
pub const SUPPORT_FAQ_ID: &str = "supportWindowFaq";

// Deck page markup
pub const DECK_ID: &str = "deck";
pub const SLIDE_CLASS: &str = "slide";
pub const DOTS_SELECTOR: &str = ".dots";
pub const DOT_CLASS: &str = "dot";
pub const DOT_TARGET_ATTR: &str = "data-target";

// Tokens the page operator is expected to replace in index.html
pub const CHECKOUT_PLACEHOLDER: &str = "[STRIPE_CHECKOUT_LINK]";
pub const SUPPORT_PLACEHOLDER: &str = "[SET SUPPORT WINDOW]";

pub const COPY_IDLE_LABEL: &str = "Copy link";
pub const COPIED_LABEL: &str = "Copied";
pub const COPY_RESET_MS: u32 = 1200;

pub const CHECKOUT_UNSET_ALERT: &str = "Add your Stripe Checkout link in index.html first.";
pub const COPY_FAILED_ALERT: &str = "Copy failed. You can manually copy the link from the button.";

/// Intersection trigger points, so the active slide updates progressively
/// while the user scrolls instead of at a single crossing.
pub const VISIBILITY_THRESHOLDS: [f64; 3] = [0.55, 0.7, 0.85];
