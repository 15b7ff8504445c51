//! Directional focus selection.
//!
//! Given the focused element and a direction, every other visible candidate
//! is related to the focused rect, filtered to the directional cone and the
//! viewport neighborhood, ranked, and focused in rank order until one focus
//! request actually sticks.

use crate::config::GlideConfig;
use crate::direction::Direction;
use crate::directory::{list_focusable, FocusTarget, Page};
use crate::geometry::{Rect, Size};
use crate::relation::{angular_distance, relate, RectRelation};
use log::{debug, trace};
use std::cmp::Ordering;

/// A candidate evaluated against the reference rect.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    /// The element
    pub target: T,
    /// Its rect at evaluation time
    pub rect: Rect,
    /// Its relation to the reference rect
    pub relation: RectRelation,
}

/// Tunables of the selection heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    /// Half-width of the directional cone (radians)
    pub cone_half_angle: f64,
    /// Allowed distance past a viewport edge for non-aligned candidates, as
    /// a fraction of the viewport dimension
    pub offscreen_tolerance: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            cone_half_angle: std::f64::consts::FRAC_PI_4,
            offscreen_tolerance: 0.2,
        }
    }
}

impl From<&GlideConfig> for SelectorConfig {
    fn from(config: &GlideConfig) -> Self {
        Self {
            cone_half_angle: config.cone_half_angle(),
            offscreen_tolerance: config.offscreen_tolerance,
        }
    }
}

/// Whether `rect` lies entirely more than `tolerance` viewport-fractions
/// past any edge of the viewport.
#[must_use]
pub fn is_far_offscreen(rect: &Rect, viewport: Size, tolerance: f64) -> bool {
    let dx = viewport.width * tolerance;
    let dy = viewport.height * tolerance;
    rect.right < -dx
        || rect.left > viewport.width + dx
        || rect.bottom < -dy
        || rect.top > viewport.height + dy
}

/// Ranking order: aligned first, then smaller distance, then smaller angular
/// distance from the raw center angle to the requested direction.
fn rank_order<T>(a: &Candidate<T>, b: &Candidate<T>, direction: Direction) -> Ordering {
    let heading = direction.angle();
    b.relation
        .are_aligned
        .cmp(&a.relation.are_aligned)
        .then_with(|| a.relation.distance.total_cmp(&b.relation.distance))
        .then_with(|| {
            angular_distance(a.relation.mid_angle, heading)
                .total_cmp(&angular_distance(b.relation.mid_angle, heading))
        })
}

/// Directional selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Selector {
    config: SelectorConfig,
}

impl Selector {
    /// Create a selector.
    #[must_use]
    pub const fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Whether a candidate survives the direction and off-screen filters.
    #[must_use]
    pub fn admits(&self, rect: &Rect, relation: &RectRelation, direction: Direction, viewport: Size) -> bool {
        if angular_distance(relation.min_angle, direction.angle()) > self.config.cone_half_angle {
            return false;
        }
        relation.are_aligned || !is_far_offscreen(rect, viewport, self.config.offscreen_tolerance)
    }

    /// Relate, filter and rank `candidates` against `reference`.
    ///
    /// `current`, if present among the candidates, is skipped. Candidates
    /// without geometry are skipped. Equal candidates keep document order.
    pub fn rank<T: FocusTarget>(
        &self,
        reference: &Rect,
        current: Option<&T>,
        candidates: Vec<T>,
        direction: Direction,
        viewport: Size,
    ) -> Vec<Candidate<T>> {
        let mut ranked: Vec<Candidate<T>> = candidates
            .into_iter()
            .filter(|target| current != Some(target))
            .filter_map(|target| {
                let rect = target.rect()?;
                let relation = relate(reference, &rect);
                self.admits(&rect, &relation, direction, viewport)
                    .then_some(Candidate {
                        target,
                        rect,
                        relation,
                    })
            })
            .collect();
        ranked.sort_by(|a, b| rank_order(a, b, direction));
        ranked
    }

    /// Move focus from the page's active element in `direction`.
    ///
    /// With nothing focused, the first candidate in document order is used
    /// instead of geometry. Returns the newly focused element, or `None` if
    /// no candidate accepted focus; in that case focus is unchanged.
    pub fn select_next<P: Page>(&self, page: &P, direction: Direction) -> Option<P::Target> {
        let candidates = list_focusable(page);
        let current = page.active_element();
        let reference = current.as_ref().and_then(FocusTarget::rect);

        let ordered: Vec<P::Target> = match (current.as_ref(), reference) {
            (Some(current), Some(reference)) => self
                .rank(&reference, Some(current), candidates, direction, page.viewport())
                .into_iter()
                .map(|candidate| candidate.target)
                .collect(),
            _ => candidates,
        };

        debug!(
            "navigate {direction}: {} candidate(s), from_focus={}",
            ordered.len(),
            reference.is_some()
        );

        let chosen = focus_first_accepting(ordered)?;
        chosen.scroll_into_view();
        Some(chosen)
    }
}

/// Focus candidates in order, stopping at the first whose focus request
/// sticks.
fn focus_first_accepting<T: FocusTarget>(ordered: Vec<T>) -> Option<T> {
    for (rank, target) in ordered.into_iter().enumerate() {
        if target.try_focus() {
            debug!("focused candidate at rank {rank}");
            return Some(target);
        }
        trace!("candidate at rank {rank} refused focus");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryPage;

    const VIEWPORT: Size = Size::new(1000.0, 800.0);

    fn page() -> MemoryPage {
        MemoryPage::new(VIEWPORT)
    }

    #[test]
    fn test_down_prefers_aligned_below() {
        let page = page();
        let a = page.add(Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = page.add(Rect::new(0.0, 150.0, 100.0, 250.0));
        let _c = page.add(Rect::new(300.0, 0.0, 400.0, 100.0));
        page.set_active(Some(&a));

        let chosen = Selector::default().select_next(&page, Direction::Down);
        assert_eq!(chosen, Some(b.clone()));
        assert_eq!(page.active(), Some(b.id()));
        assert_eq!(page.scrolled(), vec![b.id()]);
    }

    #[test]
    fn test_flush_wider_element_below_reachable_down() {
        let page = page();
        let a = page.add(Rect::new(0.0, 0.0, 100.0, 30.0));
        let b = page.add(Rect::new(0.0, 30.0, 300.0, 60.0));
        page.set_active(Some(&a));

        assert_eq!(Selector::default().select_next(&page, Direction::Right), None);
        assert_eq!(
            Selector::default().select_next(&page, Direction::Down),
            Some(b)
        );
        assert_eq!(
            Selector::default().select_next(&page, Direction::Up),
            Some(a)
        );
    }

    #[test]
    fn test_side_by_side_excluded_from_down_cone() {
        let page = page();
        let a = page.add(Rect::new(0.0, 0.0, 100.0, 100.0));
        let c = page.add(Rect::new(300.0, 0.0, 400.0, 100.0));
        page.set_active(Some(&a));

        let ranked = Selector::default().rank(
            &a.rect().unwrap(),
            Some(&a),
            vec![a.clone(), c],
            Direction::Down,
            VIEWPORT,
        );
        assert!(ranked.is_empty());
        assert_eq!(Selector::default().select_next(&page, Direction::Down), None);
        assert_eq!(page.active(), Some(a.id()));
    }

    #[test]
    fn test_no_focus_picks_document_order_first() {
        let page = page();
        let x = page.add(Rect::new(500.0, 500.0, 600.0, 600.0));
        let _y = page.add(Rect::new(0.0, 0.0, 10.0, 10.0));
        let _z = page.add(Rect::new(0.0, 700.0, 10.0, 710.0));

        for direction in Direction::ALL {
            page.set_active(None);
            let chosen = Selector::default().select_next(&page, direction);
            assert_eq!(chosen.map(|t| t.id()), Some(x.id()), "{direction}");
        }
    }

    #[test]
    fn test_ranking_aligned_before_closer_unaligned() {
        let reference = Rect::new(100.0, 100.0, 200.0, 200.0);
        let page = page();
        let far_aligned = page.add(Rect::new(100.0, 250.0, 200.0, 300.0));
        let near_aligned = page.add(Rect::new(150.0, 210.0, 250.0, 260.0));
        // Diagonal neighbor whose center is within the Down cone
        let unaligned = page.add(Rect::new(201.0, 201.0, 211.0, 240.0));

        let ranked = Selector::default().rank(
            &reference,
            None,
            vec![unaligned.clone(), far_aligned.clone(), near_aligned.clone()],
            Direction::Down,
            VIEWPORT,
        );
        let order: Vec<usize> = ranked.iter().map(|c| c.target.id()).collect();
        assert_eq!(order, vec![near_aligned.id(), far_aligned.id(), unaligned.id()]);
        assert_eq!(ranked[0].relation.distance, 10.0);
        assert_eq!(ranked[1].relation.distance, 50.0);
        assert!(!ranked[2].relation.are_aligned);
    }

    #[test]
    fn test_equal_distance_broken_by_angle() {
        let reference = Rect::new(100.0, 0.0, 200.0, 100.0);
        let page = page();
        // Both 50px below; the first is offset to the right
        let offset = page.add(Rect::new(190.0, 150.0, 290.0, 200.0));
        let straight = page.add(Rect::new(100.0, 150.0, 200.0, 200.0));

        let ranked = Selector::default().rank(
            &reference,
            None,
            vec![offset.clone(), straight.clone()],
            Direction::Down,
            VIEWPORT,
        );
        let order: Vec<usize> = ranked.iter().map(|c| c.target.id()).collect();
        assert_eq!(order, vec![straight.id(), offset.id()]);
    }

    #[test]
    fn test_far_aligned_above_never_excluded() {
        let page = page();
        let above = page.add(Rect::new(0.0, -50_000.0, 100.0, -49_900.0));
        let a = page.add(Rect::new(0.0, 300.0, 100.0, 400.0));
        page.set_active(Some(&a));

        assert_eq!(
            Selector::default().select_next(&page, Direction::Up),
            Some(above)
        );
    }

    #[test]
    fn test_far_unaligned_offscreen_dropped() {
        let page = page();
        let a = page.add(Rect::new(0.0, 300.0, 100.0, 400.0));
        // Up-and-right, well beyond the top edge plus 20%
        let _far = page.add(Rect::new(200.0, -2000.0, 260.0, -1900.0));
        page.set_active(Some(&a));
        assert_eq!(Selector::default().select_next(&page, Direction::Up), None);
    }

    #[test]
    fn test_near_unaligned_offscreen_kept() {
        let page = page();
        let a = page.add(Rect::new(0.0, 300.0, 100.0, 400.0));
        // Above the viewport but within 20% of its height (160px)
        let near = page.add(Rect::new(150.0, -150.0, 200.0, -100.0));
        page.set_active(Some(&a));
        assert_eq!(
            Selector::default().select_next(&page, Direction::Up),
            Some(near)
        );
    }

    #[test]
    fn test_refused_focus_falls_through() {
        let page = page();
        let a = page.add(Rect::new(0.0, 0.0, 100.0, 100.0));
        let stubborn = page.add(Rect::new(0.0, 120.0, 100.0, 200.0));
        let next = page.add(Rect::new(0.0, 300.0, 100.0, 400.0));
        stubborn.refuse_focus(true);
        page.set_active(Some(&a));

        assert_eq!(
            Selector::default().select_next(&page, Direction::Down),
            Some(next.clone())
        );
        assert_eq!(page.focus_attempts(), vec![stubborn.id(), next.id()]);
        assert_eq!(page.scrolled(), vec![next.id()]);
    }

    #[test]
    fn test_all_refuse_leaves_focus() {
        let page = page();
        let a = page.add(Rect::new(0.0, 0.0, 100.0, 100.0));
        let b = page.add(Rect::new(0.0, 120.0, 100.0, 200.0));
        b.refuse_focus(true);
        page.set_active(Some(&a));

        assert_eq!(Selector::default().select_next(&page, Direction::Down), None);
        assert_eq!(page.active(), Some(a.id()));
        assert!(page.scrolled().is_empty());
    }

    #[test]
    fn test_invisible_and_detached_skipped() {
        let page = page();
        let a = page.add(Rect::new(0.0, 0.0, 100.0, 100.0));
        let hidden = page.add(Rect::new(0.0, 110.0, 100.0, 150.0));
        let detached = page.add(Rect::new(0.0, 160.0, 100.0, 200.0));
        let visible = page.add(Rect::new(0.0, 400.0, 100.0, 500.0));
        hidden.set_visible(false);
        detached.detach();
        page.set_active(Some(&a));

        assert_eq!(
            Selector::default().select_next(&page, Direction::Down),
            Some(visible)
        );
        assert!(!page.focus_attempts().contains(&hidden.id()));
        assert!(!page.focus_attempts().contains(&detached.id()));
    }

    #[test]
    fn test_empty_page_is_noop() {
        let page = page();
        assert_eq!(Selector::default().select_next(&page, Direction::Left), None);
    }

    #[test]
    fn test_is_far_offscreen() {
        let vp = Size::new(1000.0, 1000.0);
        assert!(!is_far_offscreen(&Rect::new(0.0, 0.0, 10.0, 10.0), vp, 0.2));
        assert!(!is_far_offscreen(&Rect::new(0.0, 1100.0, 10.0, 1110.0), vp, 0.2));
        assert!(is_far_offscreen(&Rect::new(0.0, 1201.0, 10.0, 1210.0), vp, 0.2));
        assert!(is_far_offscreen(&Rect::new(-300.0, 0.0, -201.0, 10.0), vp, 0.2));
    }
}
