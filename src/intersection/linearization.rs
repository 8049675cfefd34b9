use nalgebra::Point2;

use crate::{
    curve::{bisect_into, linearization_error, BezierCurve2D},
    misc::FloatingPoint,
};

/// A piece of a curve produced by repeated bisection.
/// Keeps the parameter range it covers on the original curve.
#[derive(Clone, Debug)]
pub struct SubdividedCurve<'a, T: FloatingPoint> {
    nodes: Vec<Point2<T>>,
    original: &'a BezierCurve2D<T>,
    start: T,
    end: T,
}

impl<'a, T: FloatingPoint> SubdividedCurve<'a, T> {
    /// The whole curve, covering `[0, 1]`.
    pub fn new(original: &'a BezierCurve2D<T>) -> Self {
        Self {
            nodes: original.control_points().to_vec(),
            original,
            start: T::zero(),
            end: T::one(),
        }
    }

    pub fn nodes(&self) -> &[Point2<T>] {
        &self.nodes
    }

    pub fn original(&self) -> &'a BezierCurve2D<T> {
        self.original
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn end(&self) -> T {
        self.end
    }

    pub fn linearization_error(&self) -> T {
        linearization_error(&self.nodes)
    }

    /// Bisect the parameter range.
    pub fn subdivide(&self) -> (Self, Self) {
        let mut scratch = vec![];
        let mut left = vec![];
        bisect_into(&self.nodes, &mut scratch, &mut left);
        let right = left.split_off(self.nodes.len());
        let middle = (self.start + self.end) * T::from_f64(0.5).unwrap();
        (
            Self {
                nodes: left,
                original: self.original,
                start: self.start,
                end: middle,
            },
            Self {
                nodes: right,
                original: self.original,
                start: middle,
                end: self.end,
            },
        )
    }
}

/// A subdivided curve close enough to its chord to be treated as a segment.
#[derive(Clone, Debug)]
pub struct Linearization<'a, T: FloatingPoint> {
    curve: SubdividedCurve<'a, T>,
    error: T,
}

impl<'a, T: FloatingPoint> Linearization<'a, T> {
    pub fn new(curve: SubdividedCurve<'a, T>, error: T) -> Self {
        Self { curve, error }
    }

    pub fn curve(&self) -> &SubdividedCurve<'a, T> {
        &self.curve
    }

    pub fn error(&self) -> T {
        self.error
    }

    pub fn start_node(&self) -> &Point2<T> {
        &self.curve.nodes[0]
    }

    pub fn end_node(&self) -> &Point2<T> {
        &self.curve.nodes[self.curve.nodes.len() - 1]
    }
}

/// Either a curve piece still being subdivided or one that has been linearized.
#[derive(Clone, Debug)]
pub enum Shape<'a, T: FloatingPoint> {
    Curve(SubdividedCurve<'a, T>),
    Linearized(Linearization<'a, T>),
}

impl<'a, T: FloatingPoint> Shape<'a, T> {
    /// Linearize `curve` if its error is below `threshold`.
    pub fn from_curve(curve: SubdividedCurve<'a, T>, threshold: T) -> Self {
        let error = curve.linearization_error();
        if error < threshold {
            Shape::Linearized(Linearization::new(curve, error))
        } else {
            Shape::Curve(curve)
        }
    }

    pub fn is_linearized(&self) -> bool {
        matches!(self, Shape::Linearized(_))
    }

    /// A linearization is final and subdivides to itself.
    pub fn subdivide(&self, threshold: T) -> Vec<Self> {
        match self {
            Shape::Curve(curve) => {
                let (left, right) = curve.subdivide();
                vec![
                    Self::from_curve(left, threshold),
                    Self::from_curve(right, threshold),
                ]
            }
            Shape::Linearized(_) => vec![self.clone()],
        }
    }

    pub(crate) fn view(&self) -> SegmentView<'_, T> {
        let (curve, error) = match self {
            Shape::Curve(curve) => (curve, None),
            Shape::Linearized(linearization) => (&linearization.curve, Some(linearization.error)),
        };
        SegmentView {
            nodes: &curve.nodes,
            original: curve.original,
            start: curve.start,
            end: curve.end,
            error,
        }
    }
}

/// Borrowed form of a candidate shape, shared by the owned and arena searches.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SegmentView<'a, T: FloatingPoint> {
    pub nodes: &'a [Point2<T>],
    pub original: &'a BezierCurve2D<T>,
    pub start: T,
    pub end: T,
    /// Linearization error, `None` while the piece is still curved.
    pub error: Option<T>,
}

impl<'a, T: FloatingPoint> SegmentView<'a, T> {
    pub fn is_linearized(&self) -> bool {
        self.error.is_some()
    }

    /// Exact lines have a zero linearization error.
    pub fn is_line(&self) -> bool {
        self.error == Some(T::zero())
    }

    pub fn first_node(&self) -> &'a Point2<T> {
        &self.nodes[0]
    }

    pub fn last_node(&self) -> &'a Point2<T> {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Map a parameter on this piece onto the original curve.
    pub fn original_parameter(&self, s: T) -> T {
        (T::one() - s) * self.start + s * self.end
    }
}
