use crate::misc::FloatingPoint;

/// Which boundary is interior to the intersection of two surfaces at a crossing point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntersectionClassification {
    /// The edge of the first surface continues into the second surface.
    First,
    /// The edge of the second surface continues into the first surface.
    Second,
    /// Tangent edges moving in opposite directions whose surfaces only touch.
    Opposed,
    /// Tangent edges where the first surface curves inside the second.
    TangentFirst,
    /// Tangent edges where the second surface curves inside the first.
    TangentSecond,
    /// A corner where the surfaces only touch.
    IgnoredCorner,
}

impl IntersectionClassification {
    /// Crossings where the boundary walk may start or continue.
    pub fn is_interior(&self) -> bool {
        match self {
            IntersectionClassification::First | IntersectionClassification::Second => true,
            IntersectionClassification::Opposed
            | IntersectionClassification::TangentFirst
            | IntersectionClassification::TangentSecond
            | IntersectionClassification::IgnoredCorner => false,
        }
    }
}

/// An intersection between edge `index_first` of the first surface at `s`
/// and edge `index_second` of the second surface at `t`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Intersection<T: FloatingPoint> {
    index_first: usize,
    s: T,
    index_second: usize,
    t: T,
    classification: Option<IntersectionClassification>,
}

impl<T: FloatingPoint> Intersection<T> {
    pub fn new(index_first: usize, s: T, index_second: usize, t: T) -> Self {
        Self {
            index_first,
            s,
            index_second,
            t,
            classification: None,
        }
    }

    pub fn with_classification(mut self, classification: IntersectionClassification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn index_first(&self) -> usize {
        self.index_first
    }

    pub fn s(&self) -> T {
        self.s
    }

    pub fn index_second(&self) -> usize {
        self.index_second
    }

    pub fn t(&self) -> T {
        self.t
    }

    pub fn classification(&self) -> Option<IntersectionClassification> {
        self.classification
    }

    /// Whether the intersection has been classified as a crossing into either surface.
    pub fn is_interior(&self) -> bool {
        self.classification
            .map(|c| c.is_interior())
            .unwrap_or(false)
    }
}
