use nalgebra::Point2;

use crate::misc::{cross_product, FloatingPoint};

/// Intersect the lines through two segments.
///
/// Returns the parameters `(s, t)` with `start0 + s (end0 - start0) == start1 + t (end1 - start1)`,
/// which may lie outside of `[0, 1]`, or `None` if the segments are parallel.
///
/// # Example
/// ```
/// use nalgebra::Point2;
/// use bezier_intersection::prelude::segment_intersection;
///
/// let st = segment_intersection(
///     &Point2::new(0., 0.),
///     &Point2::new(2., 2.),
///     &Point2::new(0., 2.),
///     &Point2::new(2., 0.),
/// );
/// assert_eq!(st, Some((0.5, 0.5)));
/// ```
pub fn segment_intersection<T: FloatingPoint>(
    start0: &Point2<T>,
    end0: &Point2<T>,
    start1: &Point2<T>,
    end1: &Point2<T>,
) -> Option<(T, T)> {
    let delta0 = end0 - start0;
    let delta1 = end1 - start1;
    let cross_d0_d1 = cross_product(&delta0, &delta1);
    if cross_d0_d1 == T::zero() {
        return None;
    }

    let start_delta = start1 - start0;
    let s = cross_product(&start_delta, &delta1) / cross_d0_d1;
    let t = cross_product(&start_delta, &delta0) / cross_d0_d1;
    Some((s, t))
}

/// Check if two parallel segments are disjoint.
/// Either they lie on different lines or they share a line without overlapping.
pub fn parallel_different<T: FloatingPoint>(
    start0: &Point2<T>,
    end0: &Point2<T>,
    start1: &Point2<T>,
    end1: &Point2<T>,
) -> bool {
    let delta0 = end0 - start0;
    let line0_const = cross_product(&start0.coords, &delta0);
    let start1_against = cross_product(&start1.coords, &delta0);
    if line0_const != start1_against {
        return true;
    }

    // Same line: project segment 1 onto the parametrization of segment 0.
    let norm0_sq = delta0.dot(&delta0);
    let start_numer = (start1 - start0).dot(&delta0);
    let end_numer = (end1 - start0).dot(&delta0);

    let (s_min, s_max) = if start_numer <= end_numer {
        (start_numer, end_numer)
    } else {
        (end_numer, start_numer)
    };

    norm0_sq < s_min || s_max < T::zero()
}
