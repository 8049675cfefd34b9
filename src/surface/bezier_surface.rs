use nalgebra::{Point2, Vector2};

use crate::{
    curve::BezierCurve2D,
    misc::FloatingPoint,
};

use super::{
    evaluate_barycentric, specialize_triangle, subdivide_triangle, triangle_node_count,
    triangle_node_index,
};

/// Planar Bezier triangle.
///
/// Control points are stored row by row, see [`triangle_node_index`].
/// The parameter domain is the reference triangle `s, t >= 0, s + t <= 1`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BezierSurface<T: FloatingPoint> {
    control_points: Vec<Point2<T>>,
    degree: usize,
}

impl<T: FloatingPoint> BezierSurface<T> {
    /// Create a new Bezier triangle
    /// # Failures
    /// - if the degree is zero
    /// - if the number of control points does not match the degree
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let surface = BezierSurface::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 0.),
    ///     Point2::new(0., 1.),
    /// ], 1);
    /// assert!(surface.is_ok());
    ///
    /// let surface = BezierSurface::try_new(vec![Point2::new(0., 0.), Point2::new(1., 0.)], 1);
    /// assert!(surface.is_err());
    /// ```
    pub fn try_new(control_points: Vec<Point2<T>>, degree: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(degree >= 1, "Degree must be at least 1");
        let expected = triangle_node_count(degree);
        anyhow::ensure!(
            control_points.len() == expected,
            "Invalid number of control points for degree {}: expected {}, got {}",
            degree,
            expected,
            control_points.len()
        );
        Ok(Self {
            control_points,
            degree,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn control_points(&self) -> &[Point2<T>] {
        &self.control_points
    }

    fn coords(&self) -> Vec<Vector2<T>> {
        self.control_points.iter().map(|p| p.coords).collect()
    }

    fn node(&self, j: usize, k: usize) -> &Point2<T> {
        &self.control_points[triangle_node_index(self.degree, j, k)]
    }

    /// Boundary curves in counterclockwise order:
    /// `t = 0` from `(0, 0)`, `s + t = 1` from `(1, 0)`, `s = 0` from `(0, 1)`.
    pub fn edges(&self) -> [BezierCurve2D<T>; 3] {
        let d = self.degree;
        let bottom = (0..=d).map(|j| *self.node(j, 0)).collect();
        let diagonal = (0..=d).map(|k| *self.node(d - k, k)).collect();
        let left = (0..=d).map(|k| *self.node(0, d - k)).collect();
        [
            BezierCurve2D::new_unchecked(bottom),
            BezierCurve2D::new_unchecked(diagonal),
            BezierCurve2D::new_unchecked(left),
        ]
    }

    /// Evaluate the surface at `(s, t)`.
    pub fn point_at(&self, s: T, t: T) -> Point2<T> {
        let weights = [T::one() - s - t, s, t];
        Point2::from(evaluate_barycentric(&self.coords(), self.degree, &weights))
    }

    /// Reparametrize onto the sub-triangle with barycentric corners `weights_a`, `weights_b`, `weights_c`.
    pub fn specialize(&self, weights_a: [T; 3], weights_b: [T; 3], weights_c: [T; 3]) -> Self {
        let corners = [weights_a, weights_b, weights_c];
        Self {
            control_points: specialize_triangle(&self.coords(), self.degree, &corners)
                .into_iter()
                .map(Point2::from)
                .collect(),
            degree: self.degree,
        }
    }

    /// Split into four sub-triangles at the edge midpoints.
    /// The second one is the center triangle, whose orientation is reversed.
    pub fn subdivide(&self) -> [Self; 4] {
        subdivide_points(&self.control_points, self.degree).map(|control_points| Self {
            control_points,
            degree: self.degree,
        })
    }

    /// Partial derivative with respect to `s` as a degree `d - 1` triangle.
    pub fn jacobian_s(&self) -> Vec<Vector2<T>> {
        self.jacobian_nodes(|j, k| (j + 1, k))
    }

    /// Partial derivative with respect to `t` as a degree `d - 1` triangle.
    pub fn jacobian_t(&self) -> Vec<Vector2<T>> {
        self.jacobian_nodes(|j, k| (j, k + 1))
    }

    fn jacobian_nodes<F: Fn(usize, usize) -> (usize, usize)>(&self, shift: F) -> Vec<Vector2<T>> {
        let d = self.degree;
        let scale = T::from_usize(d).unwrap();
        super::triangle::triangle_multi_indices(d - 1)
            .map(|(j, k)| {
                let (j1, k1) = shift(j, k);
                (self.node(j1, k1) - self.node(j, k)) * scale
            })
            .collect()
    }

    /// Both partial derivatives at `(s, t)`.
    pub fn jacobian_at(&self, s: T, t: T) -> (Vector2<T>, Vector2<T>) {
        let weights = [T::one() - s - t, s, t];
        let degree = self.degree - 1;
        (
            evaluate_barycentric(&self.jacobian_s(), degree, &weights),
            evaluate_barycentric(&self.jacobian_t(), degree, &weights),
        )
    }
}

/// Subdivide a triangle of points, see [`BezierSurface::subdivide`].
pub(crate) fn subdivide_points<T: FloatingPoint>(
    control_points: &[Point2<T>],
    degree: usize,
) -> [Vec<Point2<T>>; 4] {
    let coords: Vec<Vector2<T>> = control_points.iter().map(|p| p.coords).collect();
    subdivide_triangle::<T, Vector2<T>>(&coords, degree)
        .map(|nodes| nodes.into_iter().map(Point2::from).collect())
}
