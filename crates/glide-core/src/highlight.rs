//! Focus highlight animation.
//!
//! The animator owns the only mutable animation state: which element is
//! focused, which one was focused before it, and when the switch happened.
//! Each frame the overlay geometry is a pure function of that state, the
//! clock, and the live rects of the two elements.

use crate::animation::{progress, Easing, Interpolate};
use crate::config::GlideConfig;
use crate::directory::FocusTarget;
use crate::geometry::{CornerRadius, Rect, Size};
use log::trace;

/// Geometry written to the overlay for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    /// Overlay box in viewport coordinates
    pub rect: Rect,
    /// Overlay corner radii
    pub radii: CornerRadius,
}

/// Animator tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorConfig {
    /// Transition duration (ms)
    pub duration_ms: f64,
    /// Margin around the viewport for the off-stage rect (px)
    pub offstage_margin: f64,
    /// Easing curve
    pub easing: Easing,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            offstage_margin: 100.0,
            easing: Easing::CubicOut,
        }
    }
}

impl From<&GlideConfig> for AnimatorConfig {
    fn from(config: &GlideConfig) -> Self {
        Self {
            duration_ms: config.transition_ms,
            offstage_margin: config.offstage_margin_px,
            easing: config.easing,
        }
    }
}

/// Mutable animation state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState<T> {
    /// Element currently focused
    pub target: Option<T>,
    /// Element focused immediately before `target`
    pub prev: Option<T>,
    /// When `target` last changed (ms)
    pub transition_start: f64,
}

impl<T> Default for AnimationState<T> {
    fn default() -> Self {
        Self {
            target: None,
            prev: None,
            transition_start: f64::NEG_INFINITY,
        }
    }
}

/// Where the highlight is in its transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionPhase<'a, T> {
    /// Resting on `target` (off-stage if `None`)
    Settled {
        /// Focused element
        target: Option<&'a T>,
    },
    /// Moving from `prev` to `target`
    Transitioning {
        /// Outgoing element
        prev: Option<&'a T>,
        /// Incoming element
        target: Option<&'a T>,
        /// Raw progress, 0 to 1 (exclusive)
        progress: f64,
    },
}

/// Drives the overlay toward the focused element.
#[derive(Debug, Clone)]
pub struct HighlightAnimator<T> {
    config: AnimatorConfig,
    state: AnimationState<T>,
}

impl<T: FocusTarget> HighlightAnimator<T> {
    /// Create an animator resting off-stage.
    #[must_use]
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            state: AnimationState::default(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &AnimationState<T> {
        &self.state
    }

    fn retarget(&mut self, prev: Option<T>, target: Option<T>, now: f64) {
        trace!("highlight transition starts at {now}");
        self.state.prev = prev;
        self.state.target = target;
        self.state.transition_start = now;
    }

    /// Record a focus change reported by focus events.
    ///
    /// Reported twice (focus-out then focus-in for the same move), the
    /// second report is ignored.
    pub fn on_focus_changed(&mut self, outgoing: Option<T>, incoming: Option<T>, now: f64) {
        if incoming == self.state.target {
            return;
        }
        let prev = outgoing.or_else(|| self.state.target.take());
        self.retarget(prev, incoming, now);
    }

    /// Compare the page's active element with the tracked target and start a
    /// transition if they differ.
    pub fn observe(&mut self, active: Option<T>, now: f64) {
        if active == self.state.target {
            return;
        }
        let prev = self.state.target.take();
        self.retarget(prev, active, now);
    }

    /// Normalized, un-eased progress at `now`.
    #[must_use]
    pub fn progress(&self, now: f64) -> f64 {
        progress(self.state.transition_start, now, self.config.duration_ms)
    }

    /// Eased blend factor at `now`, 0 at the transition start and 1 once the
    /// duration has elapsed.
    #[must_use]
    pub fn blend(&self, now: f64) -> f64 {
        self.config.easing.apply(self.progress(now))
    }

    /// Transition phase at `now`.
    #[must_use]
    pub fn phase(&self, now: f64) -> TransitionPhase<'_, T> {
        let p = self.progress(now);
        if p >= 1.0 {
            TransitionPhase::Settled {
                target: self.state.target.as_ref(),
            }
        } else {
            TransitionPhase::Transitioning {
                prev: self.state.prev.as_ref(),
                target: self.state.target.as_ref(),
                progress: p,
            }
        }
    }

    /// Off-stage rect: the viewport grown by the configured margin.
    #[must_use]
    pub fn offstage_rect(&self, viewport: Size) -> Rect {
        Rect::from_size(viewport).expand(self.config.offstage_margin)
    }

    fn geometry(&self, element: Option<&T>, viewport: Size) -> OverlayFrame {
        element
            .and_then(|el| {
                el.rect().map(|rect| OverlayFrame {
                    rect,
                    radii: el.corner_radii(),
                })
            })
            .unwrap_or(OverlayFrame {
                rect: self.offstage_rect(viewport),
                radii: CornerRadius::ZERO,
            })
    }

    /// Overlay geometry at `now` without observing focus.
    #[must_use]
    pub fn frame(&self, now: f64, viewport: Size) -> OverlayFrame {
        let to = self.geometry(self.state.target.as_ref(), viewport);
        let t = self.blend(now);
        if t >= 1.0 {
            return to;
        }
        let from = self.geometry(self.state.prev.as_ref(), viewport);
        OverlayFrame {
            rect: Rect::interpolate(&from.rect, &to.rect, t),
            radii: CornerRadius::interpolate(&from.radii, &to.radii, t),
        }
    }

    /// One animation frame: observe the active element, then compute the
    /// overlay geometry. Observation always precedes the computation so a
    /// focus change shows up in the same frame it is seen.
    pub fn tick(&mut self, now: f64, active: Option<T>, viewport: Size) -> OverlayFrame {
        self.observe(active, now);
        self.frame(now, viewport)
    }
}

impl<T: FocusTarget> Default for HighlightAnimator<T> {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}
