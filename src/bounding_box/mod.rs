pub mod box_intersection;

pub use box_intersection::*;

use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint, OVector};

use crate::misc::FloatingPoint;

/// A struct representing an axis aligned bounding box in D space.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    min: OVector<T, D>,
    max: OVector<T, D>,
}

impl<T: FloatingPoint, D: DimName> BoundingBox<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new bounding box from a minimum and maximum point.
    pub fn new(min: OVector<T, D>, max: OVector<T, D>) -> Self {
        let mut tmin = min.clone();
        let mut tmax = max.clone();

        for i in 0..D::dim() {
            tmin[i] = min[i].min(max[i]);
            tmax[i] = max[i].max(min[i]);
        }

        BoundingBox {
            min: tmin,
            max: tmax,
        }
    }

    /// Create the tightest bounding box around a set of control points.
    /// Returns `None` for an empty set.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::Point2;
    /// use bezier_intersection::prelude::BoundingBox;
    ///
    /// let nodes = [Point2::new(0., 1.), Point2::new(2., -1.), Point2::new(1., 3.)];
    /// let bb = BoundingBox::from_points(&nodes).unwrap();
    /// assert_eq!(bb.min().x, 0.);
    /// assert_eq!(bb.max().y, 3.);
    /// ```
    pub fn from_points(points: &[OPoint<T, D>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = first.coords.clone();
        let mut max = first.coords.clone();

        for point in rest {
            for i in 0..D::dim() {
                min[i] = min[i].min(point[i]);
                max[i] = max[i].max(point[i]);
            }
        }

        Some(Self { min, max })
    }

    pub fn min(&self) -> &OVector<T, D> {
        &self.min
    }

    pub fn max(&self) -> &OVector<T, D> {
        &self.max
    }

    /// Check if the bounding box contains a point, boundary included.
    /// # Examples
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use bezier_intersection::prelude::BoundingBox;
    /// let bb = BoundingBox::new(Vector2::from_element(0.), Vector2::from_element(1.));
    /// assert!(bb.contains(&Point2::new(0.5, 0.5)));
    /// assert!(bb.contains(&Point2::new(0., 1.0)));
    /// assert!(!bb.contains(&Point2::new(-1e-8, 0.5)));
    /// ```
    pub fn contains(&self, point: &OPoint<T, D>) -> bool {
        (0..D::dim()).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }

    /// Classify the overlap with another box using exact comparisons.
    pub fn classify(&self, other: &Self) -> BoxIntersection {
        let separated = (0..D::dim())
            .any(|i| other.max[i] < self.min[i] || self.max[i] < other.min[i]);
        if separated {
            return BoxIntersection::Disjoint;
        }

        let touching = (0..D::dim())
            .any(|i| other.max[i] == self.min[i] || self.max[i] == other.min[i]);
        if touching {
            BoxIntersection::Tangent
        } else {
            BoxIntersection::Intersection
        }
    }
}

#[cfg(test)]
mod tests;
