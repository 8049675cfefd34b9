use crate::{
    curve::BezierCurve2D,
    intersection::IntersectionOptions,
    misc::{vector_close, FloatingPoint},
};

/// A closed region bounded by Bezier curves.
///
/// Each edge ends where the next one starts and the last edge ends where the first one starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurvedPolygon<T: FloatingPoint> {
    edges: Vec<BezierCurve2D<T>>,
}

impl<T: FloatingPoint> CurvedPolygon<T> {
    /// Create a new curved polygon
    /// # Failures
    /// - if there are less than two edges
    /// - if an edge does not end where the next one starts
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let lens = CurvedPolygon::try_new(vec![
    ///     BezierCurve2D::try_new(vec![
    ///         Point2::new(0., 0.),
    ///         Point2::new(1., -1.),
    ///         Point2::new(2., 0.),
    ///     ]).unwrap(),
    ///     BezierCurve2D::try_new(vec![
    ///         Point2::new(2., 0.),
    ///         Point2::new(1., 1.),
    ///         Point2::new(0., 0.),
    ///     ]).unwrap(),
    /// ]);
    /// assert!(lens.is_ok());
    ///
    /// let open = CurvedPolygon::try_new(vec![
    ///     BezierCurve2D::try_new(vec![Point2::new(0., 0.), Point2::new(1., 0.)]).unwrap(),
    ///     BezierCurve2D::try_new(vec![Point2::new(1., 0.), Point2::new(1., 1.)]).unwrap(),
    /// ]);
    /// assert!(open.is_err());
    /// ```
    pub fn try_new(edges: Vec<BezierCurve2D<T>>) -> anyhow::Result<Self> {
        let tolerance = IntersectionOptions::<T>::default().endpoint_tolerance;
        Self::try_new_with_tolerance(edges, tolerance)
    }

    /// [`CurvedPolygon::try_new`] with a relative tolerance for matching edge ends.
    pub fn try_new_with_tolerance(
        edges: Vec<BezierCurve2D<T>>,
        tolerance: T,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(
            edges.len() >= 2,
            "Too few edges for a curved polygon, got {}",
            edges.len()
        );

        for (index, edge) in edges.iter().enumerate() {
            let next = (index + 1) % edges.len();
            anyhow::ensure!(
                vector_close(
                    &edge.last_point().coords,
                    &edges[next].first_point().coords,
                    tolerance
                ),
                "Edge {} does not end where edge {} starts",
                index,
                next
            );
        }

        Ok(Self { edges })
    }

    /// Callers guarantee the edges form a closed boundary.
    pub(crate) fn new_unchecked(edges: Vec<BezierCurve2D<T>>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[BezierCurve2D<T>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<BezierCurve2D<T>> {
        self.edges
    }

    pub fn num_sides(&self) -> usize {
        self.edges.len()
    }
}
