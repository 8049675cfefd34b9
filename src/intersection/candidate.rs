use nalgebra::{Matrix2, Point2};

use crate::{
    bounding_box::{bbox_intersect, bbox_line_intersect, BoxIntersection},
    curve::BezierCurve2D,
    error::{IntersectionError, Result},
    misc::{as_f64, in_interval, solve2x2, vector_close, wiggle_interval, FloatingPoint},
};

use super::{parallel_different, segment_intersection, IntersectionOptions, SegmentView};

/// What to do with a candidate pair after one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PairOutcome {
    /// The pair is finished, any intersection has been recorded.
    Resolved,
    /// Both shapes must be subdivided and paired again.
    Subdivide,
}

/// Decide the fate of a candidate pair for one subdivision round.
pub(crate) fn resolve_pair<T: FloatingPoint>(
    first: &SegmentView<'_, T>,
    second: &SegmentView<'_, T>,
    options: &IntersectionOptions<T>,
    intersections: &mut Vec<(T, T)>,
) -> Result<PairOutcome> {
    let overlap = match (first.is_linearized(), second.is_linearized()) {
        (true, true) => {
            from_linearized(first, second, options, intersections)?;
            return Ok(PairOutcome::Resolved);
        }
        (true, false) => bbox_line_intersect(second.nodes, first.first_node(), first.last_node()),
        (false, true) => bbox_line_intersect(first.nodes, second.first_node(), second.last_node()),
        (false, false) => bbox_intersect(first.nodes, second.nodes),
    };

    match overlap {
        BoxIntersection::Disjoint => Ok(PairOutcome::Resolved),
        BoxIntersection::Tangent => {
            tangent_bbox_intersection(first, second, options, intersections);
            Ok(PairOutcome::Resolved)
        }
        BoxIntersection::Intersection => Ok(PairOutcome::Subdivide),
    }
}

/// Intersect two linearized pieces and record the refined parameters.
pub(crate) fn from_linearized<T: FloatingPoint>(
    first: &SegmentView<'_, T>,
    second: &SegmentView<'_, T>,
    options: &IntersectionOptions<T>,
    intersections: &mut Vec<(T, T)>,
) -> Result<()> {
    let hit = segment_intersection(
        first.first_node(),
        first.last_node(),
        second.first_node(),
        second.last_node(),
    );

    let Some((s, t)) = hit else {
        let disjoint = if first.is_line() && second.is_line() {
            parallel_different(
                first.first_node(),
                first.last_node(),
                second.first_node(),
                second.last_node(),
            )
        } else {
            bbox_intersect(
                first.original.control_points(),
                second.original.control_points(),
            ) == BoxIntersection::Disjoint
        };
        return if disjoint {
            Ok(())
        } else {
            Err(IntersectionError::SegmentsParallel)
        };
    };

    let leeway = options.parameter_leeway;
    let accept = |value: T, view: &SegmentView<'_, T>| {
        if view.is_line() {
            in_interval(value, T::zero(), T::one())
        } else {
            in_interval(value, -leeway, T::one() + leeway)
        }
    };
    if !accept(s, first) || !accept(t, second) {
        return Ok(());
    }

    let (s, t) = newton_refine(
        first.original_parameter(s),
        first.original,
        second.original_parameter(t),
        second.original,
    );

    match (
        wiggle_interval(s, options.wiggle),
        wiggle_interval(t, options.wiggle),
    ) {
        (Some(s), Some(t)) => {
            add_intersection(s, t, options.similar_ulps, intersections);
            Ok(())
        }
        _ => Err(IntersectionError::WiggleFailure {
            s: as_f64(s),
            t: as_f64(t),
        }),
    }
}

/// One Newton step towards `B1(s) == B2(t)`.
/// A zero residual or a singular Jacobian leaves the parameters unchanged.
pub fn newton_refine<T: FloatingPoint>(
    s: T,
    first: &BezierCurve2D<T>,
    t: T,
    second: &BezierCurve2D<T>,
) -> (T, T) {
    let residual = second.point_at(t) - first.point_at(s);
    if residual.iter().all(|v| *v == T::zero()) {
        return (s, t);
    }

    let jacobian = Matrix2::from_columns(&[first.hodograph_at(s), -second.hodograph_at(t)]);
    match solve2x2(&jacobian, &residual) {
        Some((ds, dt)) => (s + ds, t + dt),
        None => (s, t),
    }
}

/// Record `(s, t)` unless it is within `ulps` ULPs of an existing intersection.
///
/// # Example
/// ```
/// use bezier_intersection::prelude::add_intersection;
///
/// let mut intersections = vec![(0.5, 0.5)];
/// add_intersection(0.5, 0.5, 1, &mut intersections);
/// add_intersection(0.75, 0.25, 1, &mut intersections);
/// assert_eq!(intersections, vec![(0.5, 0.5), (0.75, 0.25)]);
/// ```
pub fn add_intersection<T: FloatingPoint>(
    s: T,
    t: T,
    ulps: usize,
    intersections: &mut Vec<(T, T)>,
) {
    let norm = (s * s + t * t).sqrt();
    let allowed = T::from_usize(ulps).unwrap() * norm.spacing();
    let known = intersections.iter().any(|&(existing_s, existing_t)| {
        let ds = s - existing_s;
        let dt = t - existing_t;
        (ds == T::zero() && dt == T::zero()) || (ds * ds + dt * dt).sqrt() <= allowed
    });
    if !known {
        intersections.push((s, t));
    }
}

/// Record the pair of end points when they coincide.
#[allow(clippy::too_many_arguments)]
fn endpoint_check<T: FloatingPoint>(
    first: &SegmentView<'_, T>,
    node_first: &Point2<T>,
    s: T,
    second: &SegmentView<'_, T>,
    node_second: &Point2<T>,
    t: T,
    options: &IntersectionOptions<T>,
    intersections: &mut Vec<(T, T)>,
) {
    if !vector_close(&node_first.coords, &node_second.coords, options.endpoint_tolerance) {
        return;
    }

    add_intersection(
        first.original_parameter(s),
        second.original_parameter(t),
        options.similar_ulps,
        intersections,
    );
}

/// Touching bounding boxes can only meet at shared end points.
pub(crate) fn tangent_bbox_intersection<T: FloatingPoint>(
    first: &SegmentView<'_, T>,
    second: &SegmentView<'_, T>,
    options: &IntersectionOptions<T>,
    intersections: &mut Vec<(T, T)>,
) {
    let (zero, one) = (T::zero(), T::one());
    let ends_first = [(first.first_node(), zero), (first.last_node(), one)];
    let ends_second = [(second.first_node(), zero), (second.last_node(), one)];
    for (node_first, s) in ends_first {
        for (node_second, t) in ends_second {
            endpoint_check(
                first,
                node_first,
                s,
                second,
                node_second,
                t,
                options,
                intersections,
            );
        }
    }
}
