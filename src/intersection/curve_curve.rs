use crate::{curve::BezierCurve2D, error::Result, misc::FloatingPoint};

use super::{IntersectionStrategy, Intersects};

impl<'a, T: FloatingPoint> Intersects<'a, &'a BezierCurve2D<T>> for BezierCurve2D<T> {
    type Output = Result<Vec<(T, T)>>;
    type Option = &'a dyn IntersectionStrategy<T>;

    /// Find all parameter pairs where the two curves meet
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let first = BezierCurve2D::try_new(vec![Point2::new(0., 0.), Point2::new(1., 1.)]).unwrap();
    /// let second = BezierCurve2D::try_new(vec![Point2::new(0., 1.), Point2::new(1., 0.)]).unwrap();
    /// let strategy = GeometricIntersection::default();
    /// let intersections = first.find_intersection(&second, &strategy).unwrap();
    /// assert_eq!(intersections, vec![(0.5, 0.5)]);
    /// ```
    fn find_intersection(&'a self, other: &'a BezierCurve2D<T>, strategy: Self::Option) -> Self::Output {
        strategy.all_intersections(self, other)
    }
}
