//! Parsing of computed-style values read from the page.
//!
//! Computed values are already normalized by the browser (lengths in `px`,
//! keywords lowercase), so these parsers only need to cope with that subset.
//! Anything unrecognized falls back to a neutral value instead of failing.

use crate::geometry::Size;

/// Parse a computed length such as `"12px"`, `"12.5px"` or `"0"`.
#[must_use]
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value);
    number.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Resolve one radius component (`px` or `%` of `basis`).
fn resolve_component(component: &str, basis: f64) -> Option<f64> {
    component.strip_suffix('%').map_or_else(
        || parse_px(component),
        |pct| pct.trim().parse::<f64>().ok().map(|p| p / 100.0 * basis),
    )
}

/// Parse a computed `border-*-radius` longhand against the element's box.
///
/// Elliptical corners (`"10px 20px"`) report the smaller of the two radii,
/// the extent both axes share. Values that cannot be parsed yield 0.
#[must_use]
pub fn parse_radius(value: &str, size: Size) -> f64 {
    let mut parts = value.split_whitespace();
    let Some(first) = parts.next() else {
        return 0.0;
    };
    let second = parts.next().unwrap_or(first);
    match (
        resolve_component(first, size.width),
        resolve_component(second, size.height),
    ) {
        (Some(h), Some(v)) => h.min(v).max(0.0),
        _ => 0.0,
    }
}

/// Parse a computed `opacity`; missing or malformed values are opaque.
#[must_use]
pub fn parse_opacity(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map_or(1.0, |n| n.clamp(0.0, 1.0))
}

/// Computed style properties that decide whether an element is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleVisibility {
    /// `display: none`
    pub display_none: bool,
    /// `visibility: hidden | collapse`
    pub visibility_hidden: bool,
    /// Computed opacity, 0 to 1
    pub opacity: f64,
}

impl StyleVisibility {
    /// Fully visible style.
    pub const VISIBLE: Self = Self {
        display_none: false,
        visibility_hidden: false,
        opacity: 1.0,
    };

    /// Build from the raw computed `display`, `visibility` and `opacity`.
    #[must_use]
    pub fn from_computed(display: &str, visibility: &str, opacity: &str) -> Self {
        Self {
            display_none: display.trim() == "none",
            visibility_hidden: matches!(visibility.trim(), "hidden" | "collapse"),
            opacity: parse_opacity(opacity),
        }
    }

    /// Whether this style alone hides the element.
    #[must_use]
    pub fn hides(&self) -> bool {
        self.display_none || self.visibility_hidden || self.opacity <= 0.0
    }
}

impl Default for StyleVisibility {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Whether an element is visible given its own style followed by the chain of
/// its ancestors' styles (nearest first).
///
/// `display: none` and `opacity: 0` on any container hide the subtree.
/// `visibility` is inherited, so only the element's own computed value
/// counts: a visible child of a hidden parent is still rendered.
pub fn is_visible_in_chain<I>(own: &StyleVisibility, ancestors: I) -> bool
where
    I: IntoIterator<Item = StyleVisibility>,
{
    if own.hides() {
        return false;
    }
    ancestors
        .into_iter()
        .all(|style| !style.display_none && style.opacity > 0.0)
}
