use crate::{
    classification::{classify_intersection, Intersection, IntersectionClassification},
    curve::BezierCurve2D,
    error::Result,
    misc::{FloatingPoint, Sign},
    region::{combine_intersections, IntersectionRegion},
    surface::{polynomial_sign, BezierSurface},
};

use super::IntersectionOptions;

/// Interchangeable implementation of the intersection algorithms.
///
/// Surfaces call into a strategy for every step of a surface-surface intersection,
/// so alternative search implementations can be swapped in at runtime.
pub trait IntersectionStrategy<T: FloatingPoint> {
    fn options(&self) -> &IntersectionOptions<T>;

    /// All parameter pairs `(s, t)` with `first(s) == second(t)`, deduplicated.
    fn all_intersections(
        &self,
        first: &BezierCurve2D<T>,
        second: &BezierCurve2D<T>,
    ) -> Result<Vec<(T, T)>>;

    /// Which surface's boundary is interior at the intersection.
    fn classify_intersection(
        &self,
        intersection: &Intersection<T>,
        edges1: &[BezierCurve2D<T>],
        edges2: &[BezierCurve2D<T>],
    ) -> Result<IntersectionClassification> {
        classify_intersection(intersection, edges1, edges2)
    }

    /// Assemble classified intersections into the regions common to both surfaces.
    fn combine_intersections(
        &self,
        intersections: &[Intersection<T>],
        surface1: &BezierSurface<T>,
        edges1: &[BezierCurve2D<T>; 3],
        surface2: &BezierSurface<T>,
        edges2: &[BezierCurve2D<T>; 3],
    ) -> Result<Vec<IntersectionRegion<T>>> {
        combine_intersections(
            intersections,
            surface1,
            edges1,
            surface2,
            edges2,
            self.options(),
        )
    }

    /// Sign of a polynomial given by Bernstein triangle coefficients over the reference triangle.
    fn polynomial_sign(&self, coefficients: &[T], degree: usize) -> Result<Sign> {
        polynomial_sign(coefficients, degree, self.options().max_sign_subdivisions)
    }
}
