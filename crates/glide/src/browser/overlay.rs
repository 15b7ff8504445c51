//! The focus highlight overlay element.
//!
//! One `div` per page, identified by the configured id. Its static look is
//! set once; position, size and corner radii are rewritten every frame.

use glide_core::OverlayFrame;

/// Style applied once when the overlay is created.
pub const BASE_STYLE: &str = "position: fixed; margin: 0; padding: 0; \
     box-sizing: border-box; pointer-events: none; z-index: 2147483647; \
     border: 3px solid rgba(66, 133, 244, 0.9); \
     box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.6), 0 0 12px rgba(66, 133, 244, 0.5); \
     background: transparent;";

/// Inline style properties for one frame, as `(property, value)` pairs.
#[must_use]
pub fn frame_properties(frame: &OverlayFrame) -> [(&'static str, String); 8] {
    let px = |v: f64| format!("{v:.2}px");
    let radii = frame.radii;
    [
        ("left", px(frame.rect.left)),
        ("top", px(frame.rect.top)),
        ("width", px(frame.rect.width.max(0.0))),
        ("height", px(frame.rect.height.max(0.0))),
        ("border-top-left-radius", px(radii.top_left)),
        ("border-top-right-radius", px(radii.top_right)),
        ("border-bottom-right-radius", px(radii.bottom_right)),
        ("border-bottom-left-radius", px(radii.bottom_left)),
    ]
}

#[cfg(target_arch = "wasm32")]
pub use dom::Overlay;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{frame_properties, BASE_STYLE};
    use crate::error::BrowserError;
    use glide_core::OverlayFrame;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    /// Handle to the overlay element.
    #[derive(Debug)]
    pub struct Overlay {
        element: HtmlElement,
    }

    impl Overlay {
        /// Find the overlay by id, or create it and append it to the body.
        pub fn install(document: &Document, id: &str) -> Result<Self, BrowserError> {
            if let Some(existing) = document.get_element_by_id(id) {
                if let Ok(element) = existing.dyn_into::<HtmlElement>() {
                    return Ok(Self { element });
                }
            }

            let element: HtmlElement = document
                .create_element("div")?
                .dyn_into()
                .map_err(|_| BrowserError::Js("created element is not an HTMLElement".into()))?;
            element.set_id(id);
            element.set_attribute("aria-hidden", "true")?;
            element.style().set_css_text(BASE_STYLE);

            let body = document.body().ok_or(BrowserError::NoBody)?;
            body.append_child(&element)?;
            Ok(Self { element })
        }

        /// Write one frame's geometry.
        pub fn apply(&self, frame: &OverlayFrame) {
            let style = self.element.style();
            for (property, value) in frame_properties(frame) {
                let _ = style.set_property(property, &value);
            }
        }

        /// Remove the overlay from the page.
        pub fn remove(&self) {
            self.element.remove();
        }

        /// The overlay element.
        pub const fn element(&self) -> &HtmlElement {
            &self.element
        }
    }
}
