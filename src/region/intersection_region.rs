use crate::{curve::BezierCurve2D, misc::FloatingPoint, surface::BezierSurface};

use super::CurvedPolygon;

/// One connected piece of the intersection of two surfaces.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntersectionRegion<T: FloatingPoint> {
    /// One of the input surfaces lies entirely inside the other.
    Surface(BezierSurface<T>),
    /// A region bounded by pieces of the edges of both surfaces.
    CurvedPolygon(CurvedPolygon<T>),
}

impl<T: FloatingPoint> IntersectionRegion<T> {
    /// Boundary curves of the region in counterclockwise order.
    pub fn edges(&self) -> Vec<BezierCurve2D<T>> {
        match self {
            IntersectionRegion::Surface(surface) => surface.edges().to_vec(),
            IntersectionRegion::CurvedPolygon(polygon) => polygon.edges().to_vec(),
        }
    }

    pub fn as_surface(&self) -> Option<&BezierSurface<T>> {
        match self {
            IntersectionRegion::Surface(surface) => Some(surface),
            IntersectionRegion::CurvedPolygon(_) => None,
        }
    }

    pub fn as_curved_polygon(&self) -> Option<&CurvedPolygon<T>> {
        match self {
            IntersectionRegion::Surface(_) => None,
            IntersectionRegion::CurvedPolygon(polygon) => Some(polygon),
        }
    }
}
