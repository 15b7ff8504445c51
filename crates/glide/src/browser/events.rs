//! Browser event adaptation: keyboard modifiers and focus event endpoints.

use super::dom::DomTarget;
use glide_core::Modifiers;
use web_sys::{FocusEvent, KeyboardEvent};

/// Modifier state of a keyboard event.
pub fn modifiers_from(event: &KeyboardEvent) -> Modifiers {
    Modifiers::new(
        event.ctrl_key(),
        event.alt_key(),
        event.shift_key(),
        event.meta_key(),
    )
}

/// `(outgoing, incoming)` elements of a `focusin` event.
pub fn focus_in(event: &FocusEvent) -> (Option<DomTarget>, Option<DomTarget>) {
    (
        DomTarget::from_event_target(event.related_target()),
        DomTarget::from_event_target(event.target()),
    )
}

/// `(outgoing, incoming)` elements of a `focusout` event.
///
/// The incoming side is `None` when focus leaves the page or drops to the
/// body.
pub fn focus_out(event: &FocusEvent) -> (Option<DomTarget>, Option<DomTarget>) {
    (
        DomTarget::from_event_target(event.target()),
        DomTarget::from_event_target(event.related_target()),
    )
}
