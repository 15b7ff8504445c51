//! Candidate directory: the page capabilities the navigator relies on and the
//! predicate deciding which elements are focus candidates.

use crate::geometry::{CornerRadius, Rect, Size};

/// CSS selector matching every element that may be interactive.
///
/// This is a coarse prefilter for `querySelectorAll`; [`ElementTraits`]
/// makes the final decision (disabled controls, negative tab indices).
pub const FOCUSABLE_SELECTOR: &str = "a[href], area[href], button, input, select, textarea, \
     iframe, object, embed, audio[controls], video[controls], summary, details, \
     [tabindex], [contenteditable]";

/// An element that can receive focus.
///
/// Implementations are cheap handles (a DOM reference, an id); identity is
/// `PartialEq`.
pub trait FocusTarget: Clone + PartialEq {
    /// Current bounding rect in viewport coordinates, `None` if the element
    /// is no longer part of the page.
    fn rect(&self) -> Option<Rect>;

    /// Rendered corner radii, corrected for transforms and clamped.
    fn corner_radii(&self) -> CornerRadius;

    /// Whether the element is rendered (display, visibility, opacity).
    fn is_visible(&self) -> bool;

    /// Request focus. Returns `true` only if the element actually became the
    /// page's active element.
    fn try_focus(&self) -> bool;

    /// Smoothly scroll the element to the center of the viewport.
    fn scroll_into_view(&self);
}

/// The host page.
pub trait Page {
    /// Element handle type.
    type Target: FocusTarget;

    /// Element holding focus, `None` when nothing (or only the body) does.
    fn active_element(&self) -> Option<Self::Target>;

    /// Elements satisfying the focusable predicate, in document order.
    /// Visibility is not checked here.
    fn interactive_elements(&self) -> Vec<Self::Target>;

    /// Viewport size in pixels.
    fn viewport(&self) -> Size;
}

/// Visible focusable elements in document order.
///
/// Enumerated fresh on every call: the page may have changed since the last
/// key press.
pub fn list_focusable<P: Page>(page: &P) -> Vec<P::Target> {
    page.interactive_elements()
        .into_iter()
        .filter(|target| target.is_visible())
        .collect()
}

/// The attributes of an element that decide whether it is focusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTraits {
    /// Lowercase tag name
    pub tag: String,
    /// Has an `href` attribute
    pub has_href: bool,
    /// Has the `disabled` attribute (or property)
    pub disabled: bool,
    /// Raw `tabindex` attribute
    pub tab_index: Option<String>,
    /// Raw `contenteditable` attribute
    pub content_editable: Option<String>,
    /// Has the `controls` attribute (media)
    pub has_controls: bool,
    /// Raw `type` attribute (inputs)
    pub input_type: Option<String>,
}

impl ElementTraits {
    /// Traits for a bare element with the given tag.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    fn parsed_tab_index(&self) -> Option<i32> {
        self.tab_index.as_deref()?.trim().parse().ok()
    }

    /// Whether the element's own role makes it interactive.
    fn has_interactive_role(&self) -> bool {
        match self.tag.as_str() {
            "a" | "area" => self.has_href,
            "button" | "select" | "textarea" => !self.disabled,
            "input" => {
                !self.disabled
                    && !self
                        .input_type
                        .as_deref()
                        .is_some_and(|t| t.eq_ignore_ascii_case("hidden"))
            }
            "iframe" | "object" | "embed" | "summary" | "details" => true,
            "audio" | "video" => self.has_controls,
            _ => false,
        }
    }

    fn is_editable(&self) -> bool {
        self.content_editable
            .as_deref()
            .is_some_and(|v| !v.trim().eq_ignore_ascii_case("false"))
    }

    /// The focusable predicate.
    ///
    /// An explicit negative tab index always excludes the element. Otherwise
    /// it is focusable if its role is interactive, it carries a non-negative
    /// tab index, or it is content-editable.
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        match self.parsed_tab_index() {
            Some(index) if index < 0 => false,
            Some(_) => true,
            None => self.has_interactive_role() || self.is_editable(),
        }
    }
}
