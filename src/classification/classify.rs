use nalgebra::Vector2;

use crate::{
    curve::BezierCurve2D,
    error::{IntersectionError, Result},
    misc::{as_f64, cross_product, FloatingPoint, Sign},
};

use super::{Intersection, IntersectionClassification};

/// Determine which edge is on the inside of the intersection of two surfaces.
///
/// `edges1` and `edges2` are the boundaries of the two surfaces in counterclockwise order.
/// The edge preceding an edge is the previous one in the slice, wrapping around.
///
/// # Example
/// ```
/// use bezier_intersection::prelude::*;
/// use nalgebra::Point2;
///
/// let curve1 = BezierCurve2D::try_new(vec![
///     Point2::new(1., 0.),
///     Point2::new(1.75, 0.25),
///     Point2::new(2., 1.),
/// ]).unwrap();
/// let curve2 = BezierCurve2D::try_new(vec![
///     Point2::new(0., 0.),
///     Point2::new(1.6875, 0.0625),
///     Point2::new(2., 0.5),
/// ]).unwrap();
/// let intersection = Intersection::new(0, 0.25, 0, 0.5);
/// let classification = classify_intersection(&intersection, &[curve1], &[curve2]).unwrap();
/// assert_eq!(classification, IntersectionClassification::First);
/// ```
pub fn classify_intersection<T: FloatingPoint>(
    intersection: &Intersection<T>,
    edges1: &[BezierCurve2D<T>],
    edges2: &[BezierCurve2D<T>],
) -> Result<IntersectionClassification> {
    let (s, t) = (intersection.s(), intersection.t());
    if s == T::one() || t == T::one() {
        return Err(IntersectionError::EdgeEnd {
            s: as_f64(s),
            t: as_f64(t),
        });
    }

    let curve1 = edge(edges1, intersection.index_first())?;
    let curve2 = edge(edges2, intersection.index_second())?;
    let tangent1 = curve1.hodograph_at(s);
    let tangent2 = curve2.hodograph_at(t);

    let classification = if ignored_corner(intersection, &tangent1, &tangent2, edges1, edges2)? {
        IntersectionClassification::IgnoredCorner
    } else {
        let cross = cross_product(&tangent1, &tangent2);
        if cross < T::zero() {
            IntersectionClassification::First
        } else if cross > T::zero() {
            IntersectionClassification::Second
        } else {
            classify_tangent_intersection(intersection, curve1, &tangent1, curve2, &tangent2)?
        }
    };

    #[cfg(feature = "log")]
    log::debug!(
        "classified intersection ({}, {}) on edges ({}, {}) as {:?}",
        s,
        t,
        intersection.index_first(),
        intersection.index_second(),
        classification
    );

    Ok(classification)
}

fn edge<T: FloatingPoint>(edges: &[BezierCurve2D<T>], index: usize) -> Result<&BezierCurve2D<T>> {
    edges
        .get(index)
        .ok_or(IntersectionError::EdgeIndexOutOfRange {
            index,
            count: edges.len(),
        })
}

fn previous_edge<T: FloatingPoint>(edges: &[BezierCurve2D<T>], index: usize) -> Result<&BezierCurve2D<T>> {
    if edges.is_empty() {
        return Err(IntersectionError::EdgeIndexOutOfRange { index, count: 0 });
    }
    edge(edges, (index + edges.len() - 1) % edges.len())
}

/// Classify an intersection where the tangents are parallel, using curvature.
pub fn classify_tangent_intersection<T: FloatingPoint>(
    intersection: &Intersection<T>,
    curve1: &BezierCurve2D<T>,
    tangent1: &Vector2<T>,
    curve2: &BezierCurve2D<T>,
    tangent2: &Vector2<T>,
) -> Result<IntersectionClassification> {
    let (s, t) = (intersection.s(), intersection.t());
    let curvature1 = curve1.curvature_at(s, tangent1);
    let curvature2 = curve2.curvature_at(t, tangent2);
    let same_curvature = || IntersectionError::SameCurvature {
        s: as_f64(s),
        t: as_f64(t),
    };
    let bad_tangent = || IntersectionError::BadTangent {
        s: as_f64(s),
        t: as_f64(t),
    };

    if tangent1.dot(tangent2) < T::zero() {
        // Opposite directions: only an outward bend of both keeps the interiors apart.
        let sign1 = Sign::of(curvature1);
        let sign2 = Sign::of(curvature2);
        if sign1 == sign2 {
            if sign1 == Sign::Positive {
                Ok(IntersectionClassification::Opposed)
            } else {
                Err(bad_tangent())
            }
        } else {
            let delta = curvature1.abs() - curvature2.abs();
            if delta == T::zero() {
                Err(same_curvature())
            } else if sign1 == Sign::of(delta) {
                Ok(IntersectionClassification::Opposed)
            } else {
                Err(bad_tangent())
            }
        }
    } else if curvature1 > curvature2 {
        Ok(IntersectionClassification::TangentFirst)
    } else if curvature1 < curvature2 {
        Ok(IntersectionClassification::TangentSecond)
    } else {
        Err(same_curvature())
    }
}

/// Whether the surfaces only touch at a corner intersection.
/// Only corners at the start of an edge (`s == 0` or `t == 0`) are considered.
pub fn ignored_corner<T: FloatingPoint>(
    intersection: &Intersection<T>,
    tangent_s: &Vector2<T>,
    tangent_t: &Vector2<T>,
    edges1: &[BezierCurve2D<T>],
    edges2: &[BezierCurve2D<T>],
) -> Result<bool> {
    let zero = T::zero();
    match (intersection.s() == zero, intersection.t() == zero) {
        (true, true) => ignored_double_corner(intersection, tangent_s, tangent_t, edges1, edges2),
        (true, false) => {
            let previous = previous_edge(edges1, intersection.index_first())?;
            Ok(ignored_edge_corner(tangent_t, tangent_s, previous))
        }
        (false, true) => {
            let previous = previous_edge(edges2, intersection.index_second())?;
            Ok(ignored_edge_corner(tangent_s, tangent_t, previous))
        }
        (false, false) => Ok(false),
    }
}

/// Corner of one surface lying in the middle of an edge of the other.
fn ignored_edge_corner<T: FloatingPoint>(
    edge_tangent: &Vector2<T>,
    corner_tangent: &Vector2<T>,
    corner_previous_edge: &BezierCurve2D<T>,
) -> bool {
    if cross_product(edge_tangent, corner_tangent) > T::zero() {
        return false;
    }

    // outgoing direction of the edge that ends at the corner
    let alt_corner_tangent = -corner_previous_edge.hodograph_at(T::one());
    cross_product(edge_tangent, &alt_corner_tangent) <= T::zero()
}

/// Corners of both surfaces coincide.
fn ignored_double_corner<T: FloatingPoint>(
    intersection: &Intersection<T>,
    tangent_s: &Vector2<T>,
    tangent_t: &Vector2<T>,
    edges1: &[BezierCurve2D<T>],
    edges2: &[BezierCurve2D<T>],
) -> Result<bool> {
    let zero = T::zero();
    let alt_tangent_s = previous_edge(edges1, intersection.index_first())?.hodograph_at(T::one());

    // `tangent_t` between both edges of the first surface at the corner
    let cross1 = cross_product(tangent_s, tangent_t);
    if cross1 >= zero && cross_product(&alt_tangent_s, tangent_t) >= zero {
        return Ok(false);
    }

    let alt_tangent_t = -previous_edge(edges2, intersection.index_second())?.hodograph_at(T::one());
    let cross3 = cross_product(tangent_s, &alt_tangent_t);
    if cross3 >= zero && cross_product(&alt_tangent_s, &alt_tangent_t) >= zero {
        return Ok(false);
    }

    // the first surface may still be wedged between both edges of the second
    Ok(!(cross1 <= zero && cross3 >= zero))
}
