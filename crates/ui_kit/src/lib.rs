//! Themeable UI component library for Leptos web applications.
//!
//! The crate owns the button component, the pure state-to-rendering mapping
//! behind it, and the stable class/attribute contract consumed by the theme
//! CSS layers under `themes/`. Styling flows entirely through `--ig-*`
//! custom properties supplied by a theme stylesheet; every consumed property
//! carries a sane fallback so the component degrades gracefully when a token
//! layer is missing.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod button;
mod model;

pub use button::{Button, BUTTON_HOST_TAG, IG_CLICK_EVENT, IG_CLICK_ORIGINAL_EVENT_KEY};
pub use model::{ButtonSize, ButtonState, ButtonType, ButtonVariant, BUTTON_BASE_CLASS};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{Button, ButtonSize, ButtonState, ButtonType, ButtonVariant, IG_CLICK_EVENT};
}
