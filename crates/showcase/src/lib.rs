//! Browser showcase for the component library.
//!
//! Renders every button variant, size, and state against the theme token
//! layers so visual changes can be reviewed in a live surface.

mod web_app;

pub use web_app::ShowcaseApp;

/// Mount the showcase into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
