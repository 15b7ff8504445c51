//! How a candidate rectangle sits relative to a reference rectangle.

use crate::direction::Direction;
use crate::geometry::{Point, Rect};

/// Angle from `a` to `b` in radians, in `(-π, π]`.
#[must_use]
pub fn angle_between(a: Point, b: Point) -> f64 {
    let d = b - a;
    d.y.atan2(d.x)
}

/// Absolute shortest angular difference between two angles, in `[0, π]`.
#[must_use]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = b - a;
    d.sin().atan2(d.cos()).abs()
}

/// Relation of a candidate rect to the reference rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectRelation {
    /// Gap along the movement axis when aligned, else center-to-center distance.
    pub distance: f64,
    /// Whether the rects overlap on at least one axis.
    pub are_aligned: bool,
    /// Raw angle from the reference center to the candidate center.
    pub mid_angle: f64,
    /// Alignment-aware angle used for direction filtering.
    pub min_angle: f64,
}

/// Relate `candidate` to `reference`.
///
/// - Overlap on both axes: distance 0, aligned. If the rects only touch
///   along one side (flush neighbors), `min_angle` is the cardinal angle of
///   that side; otherwise `min_angle == mid_angle`.
/// - Overlap on one axis: distance is the gap along the other axis and
///   `min_angle` is the cardinal angle of the side the candidate is on.
/// - No overlap: center-to-center distance, `min_angle == mid_angle`.
#[must_use]
pub fn relate(reference: &Rect, candidate: &Rect) -> RectRelation {
    let mid_angle = angle_between(reference.center(), candidate.center());
    let stacked = reference.overlaps_horizontally(candidate);
    let side_by_side = reference.overlaps_vertically(candidate);

    match (stacked, side_by_side) {
        (true, true) => {
            let min_angle = match (
                reference.interiors_overlap_horizontally(candidate),
                reference.interiors_overlap_vertically(candidate),
            ) {
                (true, false) if candidate.top >= reference.bottom => Direction::Down.angle(),
                (true, false) => Direction::Up.angle(),
                (false, true) if candidate.left >= reference.right => Direction::Right.angle(),
                (false, true) => Direction::Left.angle(),
                _ => mid_angle,
            };
            RectRelation {
                distance: 0.0,
                are_aligned: true,
                mid_angle,
                min_angle,
            }
        }
        (true, false) => {
            let (distance, side) = if candidate.top > reference.bottom {
                (candidate.top - reference.bottom, Direction::Down)
            } else {
                (reference.top - candidate.bottom, Direction::Up)
            };
            RectRelation {
                distance,
                are_aligned: true,
                mid_angle,
                min_angle: side.angle(),
            }
        }
        (false, true) => {
            let (distance, side) = if candidate.left > reference.right {
                (candidate.left - reference.right, Direction::Right)
            } else {
                (reference.left - candidate.right, Direction::Left)
            };
            RectRelation {
                distance,
                are_aligned: true,
                mid_angle,
                min_angle: side.angle(),
            }
        }
        (false, false) => RectRelation {
            distance: reference.center().distance(&candidate.center()),
            are_aligned: false,
            mid_angle,
            min_angle: mid_angle,
        },
    }
}
