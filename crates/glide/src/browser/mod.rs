//! Browser runtime for Glide.
//!
//! Adapts `web_sys` elements to the core [`FocusTarget`](glide_core::FocusTarget)
//! and [`Page`](glide_core::Page) capabilities and drives the input handler,
//! selector and animator from DOM events and animation frames.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod logger;

// Cross-platform modules
pub mod overlay;

#[cfg(target_arch = "wasm32")]
pub use app::Glide;
#[cfg(target_arch = "wasm32")]
pub use dom::{DomPage, DomTarget};
#[cfg(target_arch = "wasm32")]
pub use overlay::Overlay;
pub use overlay::{frame_properties, BASE_STYLE};
