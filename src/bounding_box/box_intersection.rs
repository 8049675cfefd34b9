use nalgebra::Point2;

use crate::{
    intersection::segment_intersection,
    misc::{in_interval, FloatingPoint},
};

use super::BoundingBox;

/// Overlap classification between two axis aligned boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxIntersection {
    /// The boxes overlap with positive area.
    Intersection,
    /// The boxes only share an edge or a corner.
    Tangent,
    /// The boxes are separated.
    Disjoint,
}

/// Classify the bounding boxes of two sets of control points.
///
/// # Examples
/// ```
/// use nalgebra::Point2;
/// use bezier_intersection::prelude::{bbox_intersect, BoxIntersection};
///
/// let unit = [Point2::new(0., 0.), Point2::new(1., 1.)];
/// let shifted = [Point2::new(1., 0.5), Point2::new(2., 1.5)];
/// assert_eq!(bbox_intersect(&unit, &shifted), BoxIntersection::Tangent);
/// ```
pub fn bbox_intersect<T: FloatingPoint>(nodes1: &[Point2<T>], nodes2: &[Point2<T>]) -> BoxIntersection {
    match (
        BoundingBox::from_points(nodes1),
        BoundingBox::from_points(nodes2),
    ) {
        (Some(b1), Some(b2)) => b1.classify(&b2),
        _ => BoxIntersection::Disjoint,
    }
}

/// Classify the bounding box of `nodes` against the segment from `line_start` to `line_end`.
/// Only `Intersection` or `Disjoint` are returned.
pub fn bbox_line_intersect<T: FloatingPoint>(
    nodes: &[Point2<T>],
    line_start: &Point2<T>,
    line_end: &Point2<T>,
) -> BoxIntersection {
    let Some(bb) = BoundingBox::from_points(nodes) else {
        return BoxIntersection::Disjoint;
    };

    if bb.contains(line_start) || bb.contains(line_end) {
        return BoxIntersection::Intersection;
    }

    let (left, bottom) = (bb.min().x, bb.min().y);
    let (right, top) = (bb.max().x, bb.max().y);

    // A segment with no endpoint inside the box crosses at least two sides,
    // so the left side never decides the outcome.
    let sides = [
        (Point2::new(left, bottom), Point2::new(right, bottom)),
        (Point2::new(right, bottom), Point2::new(right, top)),
        (Point2::new(right, top), Point2::new(left, top)),
    ];

    let unit = |v: T| in_interval(v, T::zero(), T::one());
    let crosses = sides.iter().any(|(start, end)| {
        segment_intersection(start, end, line_start, line_end)
            .map(|(s, t)| unit(s) && unit(t))
            .unwrap_or(false)
    });

    if crosses {
        BoxIntersection::Intersection
    } else {
        BoxIntersection::Disjoint
    }
}

