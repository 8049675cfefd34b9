//! Error types for curve and surface intersection.

use thiserror::Error;

use crate::classification::IntersectionClassification;

/// Errors that can occur while intersecting curves or surfaces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntersectionError {
    /// Two linearized pieces are parallel and the configuration is not provably empty.
    #[error("line segments parallel")]
    SegmentsParallel,

    /// Tangent curves whose curvatures cannot be told apart.
    #[error("tangent curves have same curvature at s={s}, t={t}")]
    SameCurvature { s: f64, t: f64 },

    /// Curves are tangent, move in opposite directions and define overlapping arcs.
    #[error("curves moving in opposite direction but define overlapping arcs at s={s}, t={t}")]
    BadTangent { s: f64, t: f64 },

    /// Intersection classified at the terminal end of an edge.
    #[error("intersection occurs at the end of an edge: s={s}, t={t}")]
    EdgeEnd { s: f64, t: f64 },

    /// Candidates still remained after the maximum number of subdivisions.
    #[error("curve intersection failed to converge to approximately linear subdivisions after {0} iterations")]
    NoConvergence(usize),

    /// Too many candidate pairs survived a subdivision round.
    #[error("the number of candidate intersections is too high: {0} candidate pairs")]
    TooManyCandidates(usize),

    /// Boundary walk did not close after the maximum number of edges.
    #[error("the boundary of a curved polygon did not close after {0} edges")]
    TooManyEdges(usize),

    /// A polynomial sign was still undetermined after the maximum number of subdivisions.
    #[error("polynomial sign could not be determined after {0} subdivisions")]
    UndecidedSign(usize),

    /// A refined parameter landed outside the unit interval beyond tolerance.
    #[error("parameters outside of the unit interval after refinement: s={s}, t={t}")]
    WiggleFailure { s: f64, t: f64 },

    /// Two intersections assumed to be unique describe the same point.
    #[error("intersections {index_first} and {index_second} are not unique")]
    NonUniqueIntersection {
        index_first: usize,
        index_second: usize,
    },

    /// A duplicate corner intersection with no unique counterpart.
    #[error("duplicate intersection at s={s}, t={t} has no unique counterpart")]
    DuplicateNotFound { s: f64, t: f64 },

    /// A corner intersection duplicated an unexpected number of times for its position.
    #[error("intersection at s={s}, t={t} duplicated {count} times is not a valid corner")]
    InvalidCorner { count: usize, s: f64, t: f64 },

    /// Corner intersections may only be duplicated once or three times.
    #[error("unexpected duplicate count {count} for intersection at s={s}, t={t}")]
    UnexpectedDuplicateCount { count: usize, s: f64, t: f64 },

    /// Tangent-only intersections with differing classifications.
    #[error("non-interior intersections must all share one classification, got {0:?}")]
    HeterogeneousTangency(Vec<IntersectionClassification>),

    /// A non-interior classification that is not a tangency.
    #[error("unexpected classification {0:?} for a tangent-only intersection")]
    NotTangent(IntersectionClassification),

    /// Boundary walk tried to build an edge from nodes on different curves.
    #[error("start and end node not defined on same curve")]
    WrongCurve,

    /// Boundary walk reached an intersection which does not enter either surface.
    #[error("boundary walk requires an interior intersection, got {0:?}")]
    NotInterior(Option<IntersectionClassification>),

    /// An intersection refers to an edge which does not exist.
    #[error("edge index {index} is out of range for {count} edges")]
    EdgeIndexOutOfRange { index: usize, count: usize },

    /// A triangular coefficient array has the wrong size for its degree.
    #[error("expected {expected} nodes, got {actual}")]
    InvalidNodeCount { expected: usize, actual: usize },
}

/// Result type for intersection operations.
pub type Result<T> = std::result::Result<T, IntersectionError>;
