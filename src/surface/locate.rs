use nalgebra::{Matrix2, Point2, Vector2};

use crate::{
    bounding_box::BoundingBox,
    misc::{solve2x2, vector_close, FloatingPoint},
};

use super::{bezier_surface::subdivide_points, triangle::subdivision_weights, BezierSurface};

/// Default number of subdivisions used by [`BezierSurface::locate`].
pub const LOCATE_DEPTH: usize = 20;

/// A sub-triangle retained while locating a point.
struct LocateCandidate<T: FloatingPoint> {
    /// `(s, t)` of the sub-triangle corners on the original surface
    corners: [Vector2<T>; 3],
    nodes: Vec<Point2<T>>,
}

impl<T: FloatingPoint> BezierSurface<T> {
    /// Find `(s, t)` with `self.point_at(s, t) == point`, or `None` if the point is not on the surface.
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    /// use approx::assert_relative_eq;
    ///
    /// let surface = BezierSurface::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(0., 2.),
    /// ], 1).unwrap();
    /// let (s, t) = surface.locate(&Point2::new(0.5, 0.25)).unwrap();
    /// assert_relative_eq!(s, 0.25, epsilon = 1e-12);
    /// assert_relative_eq!(t, 0.125, epsilon = 1e-12);
    /// assert!(surface.locate(&Point2::new(3., 3.)).is_none());
    /// ```
    pub fn locate(&self, point: &Point2<T>) -> Option<(T, T)> {
        self.locate_with_depth(point, LOCATE_DEPTH)
    }

    /// [`BezierSurface::locate`] with an explicit number of subdivisions.
    pub fn locate_with_depth(&self, point: &Point2<T>, depth: usize) -> Option<(T, T)> {
        let (zero, one) = (T::zero(), T::one());
        let mut candidates = vec![LocateCandidate {
            corners: [
                Vector2::new(zero, zero),
                Vector2::new(one, zero),
                Vector2::new(zero, one),
            ],
            nodes: self.control_points().to_vec(),
        }];

        let weights = subdivision_weights::<T>();
        for _ in 0..=depth {
            let mut next = vec![];
            for candidate in candidates {
                let inside = BoundingBox::from_points(&candidate.nodes)
                    .map(|bb| bb.contains(point))
                    .unwrap_or(false);
                if !inside {
                    continue;
                }

                let children = subdivide_points(&candidate.nodes, self.degree());
                for (corner_weights, nodes) in weights.iter().zip(children) {
                    let corners = corner_weights.map(|w| {
                        candidate.corners[0] * w[0]
                            + candidate.corners[1] * w[1]
                            + candidate.corners[2] * w[2]
                    });
                    next.push(LocateCandidate { corners, nodes });
                }
            }
            candidates = next;
        }

        if candidates.is_empty() {
            return None;
        }

        let three = T::from_f64(3.).unwrap();
        let total = candidates
            .iter()
            .map(|c| (c.corners[0] + c.corners[1] + c.corners[2]) / three)
            .fold(Vector2::zeros(), |acc, centroid| acc + centroid);
        let mean = total / T::from_usize(candidates.len()).unwrap();

        let (s, t) = self.newton_refine(point, mean.x, mean.y);
        let tolerance = T::from_f64(0.5f64.powi(47)).unwrap();
        if vector_close(&self.point_at(s, t).coords, &point.coords, tolerance) {
            Some((s, t))
        } else {
            Some(self.newton_refine(point, s, t))
        }
    }

    /// One Newton step towards `self.point_at(s, t) == point`.
    /// A zero residual or a singular Jacobian leaves the parameters unchanged.
    pub fn newton_refine(&self, point: &Point2<T>, s: T, t: T) -> (T, T) {
        let residual = point - self.point_at(s, t);
        if residual.iter().all(|v| *v == T::zero()) {
            return (s, t);
        }

        let (jac_s, jac_t) = self.jacobian_at(s, t);
        match solve2x2(&Matrix2::from_columns(&[jac_s, jac_t]), &residual) {
            Some((ds, dt)) => (s + ds, t + dt),
            None => (s, t),
        }
    }
}
