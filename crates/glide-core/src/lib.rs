//! Core of Glide: keyboard spatial navigation and an animated focus highlight.
//!
//! This crate is platform independent. The page is reached only through the
//! [`Page`] and [`FocusTarget`] capabilities, and time is an injected
//! millisecond clock, so everything here runs natively in tests:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Rect relations: [`relate`], [`angle_between`], [`angular_distance`]
//! - Candidate directory: [`list_focusable`], [`ElementTraits`]
//! - Directional selection: [`Selector`]
//! - Keyboard handling: [`InputHandler`]
//! - Highlight animation: [`HighlightAnimator`]

mod animation;
mod config;
pub mod css;
mod direction;
mod directory;
mod error;
mod geometry;
mod highlight;
mod input;
mod relation;
mod selector;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use animation::{progress, Easing, Interpolate};
pub use config::{GlideConfig, KeyBindings};
pub use direction::Direction;
pub use directory::{list_focusable, ElementTraits, FocusTarget, Page, FOCUSABLE_SELECTOR};
pub use error::{ConfigError, UnknownDirection};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use highlight::{
    AnimationState, AnimatorConfig, HighlightAnimator, OverlayFrame, TransitionPhase,
};
pub use input::{Binding, InputHandler, KeyAction, KeyMap, Modifiers, ThrottleState};
pub use relation::{angle_between, angular_distance, relate, RectRelation};
pub use selector::{is_far_offscreen, Candidate, Selector, SelectorConfig};
