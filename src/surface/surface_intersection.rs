use itertools::iproduct;

use crate::{
    classification::Intersection,
    error::Result,
    intersection::{IntersectionStrategy, Intersects},
    misc::FloatingPoint,
    region::{handle_ends, verify_duplicates, IntersectionRegion},
};

use super::BezierSurface;

impl<T: FloatingPoint> BezierSurface<T> {
    /// Intersect two surfaces.
    ///
    /// Every pair of edges is intersected, intersections at the end of an edge
    /// are moved to the start of the next one, then the unique crossings are
    /// classified and assembled into regions.
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let surface1 = BezierSurface::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 0.),
    ///     Point2::new(0., 1.),
    /// ], 1).unwrap();
    /// let surface2 = BezierSurface::try_new(vec![
    ///     Point2::new(0.1, 0.1),
    ///     Point2::new(0.3, 0.1),
    ///     Point2::new(0.1, 0.3),
    /// ], 1).unwrap();
    /// let strategy = GeometricIntersection::default();
    /// let regions = surface1.intersect(&surface2, &strategy).unwrap();
    /// assert_eq!(regions, vec![IntersectionRegion::Surface(surface2.clone())]);
    /// ```
    pub fn intersect(
        &self,
        other: &Self,
        strategy: &dyn IntersectionStrategy<T>,
    ) -> Result<Vec<IntersectionRegion<T>>> {
        let edges1 = self.edges();
        let edges2 = other.edges();

        let mut uniques = vec![];
        let mut duplicates = vec![];
        for ((index1, edge1), (index2, edge2)) in
            iproduct!(edges1.iter().enumerate(), edges2.iter().enumerate())
        {
            for (s, t) in strategy.all_intersections(edge1, edge2)? {
                let (edge_end, intersection) = handle_ends(index1, s, index2, t);
                if edge_end {
                    duplicates.push(intersection);
                } else {
                    uniques.push(intersection);
                }
            }
        }

        verify_duplicates(&duplicates, &uniques, strategy.options().duplicate_tolerance)?;

        let classified = uniques
            .into_iter()
            .map(|intersection| {
                let classification = strategy.classify_intersection(&intersection, &edges1, &edges2)?;
                Ok(intersection.with_classification(classification))
            })
            .collect::<Result<Vec<Intersection<T>>>>()?;

        #[cfg(feature = "log")]
        log::debug!(
            "{} unique intersections, {} duplicates",
            classified.len(),
            duplicates.len()
        );

        strategy.combine_intersections(&classified, self, &edges1, other, &edges2)
    }
}

impl<'a, T: FloatingPoint> Intersects<'a, &'a BezierSurface<T>> for BezierSurface<T> {
    type Output = Result<Vec<IntersectionRegion<T>>>;
    type Option = &'a dyn IntersectionStrategy<T>;

    fn find_intersection(&'a self, other: &'a BezierSurface<T>, strategy: Self::Option) -> Self::Output {
        self.intersect(other, strategy)
    }
}
