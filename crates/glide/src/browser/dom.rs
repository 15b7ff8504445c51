//! `FocusTarget` and `Page` over the live DOM.

use crate::error::BrowserError;
use glide_core::css::{self, StyleVisibility};
use glide_core::{CornerRadius, ElementTraits, FocusTarget, Page, Rect, Size, FOCUSABLE_SELECTOR};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CssStyleDeclaration, Document, Element, EventTarget, FocusOptions, HtmlElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

/// A focusable HTML element.
#[derive(Debug, Clone)]
pub struct DomTarget(HtmlElement);

impl DomTarget {
    /// Wrap an element.
    pub const fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    /// Wrap an event target if it is an HTML element other than the body or
    /// the root element.
    pub fn from_event_target(target: Option<EventTarget>) -> Option<Self> {
        Self::from_active(target?.dyn_into::<Element>().ok()?)
    }

    /// Wrap a focused element, treating the body and the root element as
    /// "nothing focused".
    fn from_active(element: Element) -> Option<Self> {
        let tag = element.tag_name();
        if tag.eq_ignore_ascii_case("body") || tag.eq_ignore_ascii_case("html") {
            return None;
        }
        element.dyn_into::<HtmlElement>().ok().map(Self)
    }

    /// The wrapped element.
    pub const fn element(&self) -> &HtmlElement {
        &self.0
    }

    fn window(&self) -> Option<Window> {
        self.0.owner_document()?.default_view()
    }

    fn computed_style(window: &Window, element: &Element) -> Option<CssStyleDeclaration> {
        window.get_computed_style(element).ok().flatten()
    }
}

impl PartialEq for DomTarget {
    fn eq(&self, other: &Self) -> bool {
        let a: &JsValue = self.0.as_ref();
        let b: &JsValue = other.0.as_ref();
        a == b
    }
}

fn property(style: &CssStyleDeclaration, name: &str) -> String {
    style.get_property_value(name).unwrap_or_default()
}

fn visibility_of(style: &CssStyleDeclaration) -> StyleVisibility {
    StyleVisibility::from_computed(
        &property(style, "display"),
        &property(style, "visibility"),
        &property(style, "opacity"),
    )
}

impl FocusTarget for DomTarget {
    fn rect(&self) -> Option<Rect> {
        if !self.0.is_connected() {
            return None;
        }
        let r = self.0.get_bounding_client_rect();
        Some(Rect::new(r.left(), r.top(), r.right(), r.bottom()))
    }

    fn corner_radii(&self) -> CornerRadius {
        let (Some(window), Some(rect)) = (self.window(), self.rect()) else {
            return CornerRadius::ZERO;
        };
        let Some(style) = Self::computed_style(&window, &self.0) else {
            return CornerRadius::ZERO;
        };

        // Computed radii are in layout pixels; the bounding rect includes
        // transforms.
        let layout = Size::new(
            f64::from(self.0.offset_width()),
            f64::from(self.0.offset_height()),
        );
        let radius = |name: &str| css::parse_radius(&property(&style, name), layout);
        CornerRadius::new(
            radius("border-top-left-radius"),
            radius("border-top-right-radius"),
            radius("border-bottom-right-radius"),
            radius("border-bottom-left-radius"),
        )
        .rendered(layout, rect.size())
    }

    fn is_visible(&self) -> bool {
        let Some(window) = self.window() else {
            return false;
        };
        let Some(own) = Self::computed_style(&window, &self.0) else {
            return false;
        };

        let ancestors = std::iter::successors(self.0.parent_element(), Element::parent_element)
            .map(|ancestor| {
                Self::computed_style(&window, &ancestor)
                    .map_or(StyleVisibility::VISIBLE, |style| visibility_of(&style))
            });
        css::is_visible_in_chain(&visibility_of(&own), ancestors)
    }

    fn try_focus(&self) -> bool {
        let options = FocusOptions::new();
        options.set_prevent_scroll(true);
        if self.0.focus_with_options(&options).is_err() {
            return false;
        }
        self.0
            .owner_document()
            .and_then(|document| document.active_element())
            .is_some_and(|active| {
                let active: &JsValue = active.as_ref();
                let own: &JsValue = self.0.as_ref();
                active == own
            })
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        options.set_inline(ScrollLogicalPosition::Center);
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Read the focusable-predicate attributes off an element.
pub fn traits_of(element: &Element) -> ElementTraits {
    ElementTraits {
        tag: element.tag_name().to_ascii_lowercase(),
        has_href: element.has_attribute("href"),
        disabled: element.matches(":disabled").unwrap_or(false),
        tab_index: element.get_attribute("tabindex"),
        content_editable: element.get_attribute("contenteditable"),
        has_controls: element.has_attribute("controls"),
        input_type: element.get_attribute("type"),
    }
}

/// The top-level document.
#[derive(Debug, Clone)]
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// The page of the global `window`.
    pub fn current() -> Result<Self, BrowserError> {
        let window = web_sys::window().ok_or(BrowserError::NoWindow)?;
        let document = window.document().ok_or(BrowserError::NoDocument)?;
        Ok(Self { window, document })
    }

    pub const fn window(&self) -> &Window {
        &self.window
    }

    pub const fn document(&self) -> &Document {
        &self.document
    }
}

impl Page for DomPage {
    type Target = DomTarget;

    fn active_element(&self) -> Option<DomTarget> {
        DomTarget::from_active(self.document.active_element()?)
    }

    fn interactive_elements(&self) -> Vec<DomTarget> {
        let Ok(nodes) = self.document.query_selector_all(FOCUSABLE_SELECTOR) else {
            log::warn!("querySelectorAll rejected the focusable selector");
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .filter(|element| traits_of(element).is_focusable())
            .map(DomTarget)
            .collect()
    }

    fn viewport(&self) -> Size {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Size::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }
}
