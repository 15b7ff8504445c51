//! Glide: keyboard spatial navigation with an animated focus highlight.
//!
//! Arrow keys move focus to the nearest interactive element in the pressed
//! direction, and a fixed-position overlay glides from the old focus to the
//! new one. The platform-independent logic lives in `glide-core` and is
//! re-exported here; this crate adds the browser runtime.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { install } from './glide.js';
//!
//! async function main() {
//!     await init();
//!     const glide = install('{"transition_ms": 250}');
//!     // later
//!     glide.dispose();
//! }
//! ```

pub mod browser;
mod error;

pub use error::BrowserError;
pub use glide_core::*;

#[cfg(target_arch = "wasm32")]
pub use browser::Glide;
