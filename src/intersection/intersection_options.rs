use crate::misc::FloatingPoint;

/// Hyperparameters shared by the intersection strategies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionOptions<T: FloatingPoint> {
    /// Maximum number of subdivision rounds before giving up on convergence.
    pub max_subdivisions: usize,
    /// Maximum number of candidate pairs allowed to survive a round.
    pub max_candidates: usize,
    /// Two parameter pairs closer than this many ULPs are the same intersection.
    pub similar_ulps: usize,
    /// A subdivided curve with a linearization error below this is treated as a segment.
    pub linearization_threshold: T,
    /// How far outside of `[0, 1]` a curved linearization may be hit.
    pub parameter_leeway: T,
    /// Refined parameters within this distance of `[0, 1]` are snapped onto it.
    pub wiggle: T,
    /// Relative tolerance for coincident curve end points.
    pub endpoint_tolerance: T,
    /// Relative tolerance to match duplicated corner intersections.
    pub duplicate_tolerance: T,
    /// Maximum number of edges in an assembled curved polygon.
    pub max_polygon_edges: usize,
    /// Maximum number of subdivisions when deciding the sign of a polynomial.
    pub max_sign_subdivisions: usize,
    /// Number of subdivisions used to locate a point on a surface.
    pub locate_depth: usize,
}

impl<T: FloatingPoint> Default for IntersectionOptions<T> {
    fn default() -> Self {
        Self {
            max_subdivisions: 20,
            max_candidates: 64,
            similar_ulps: 1,
            linearization_threshold: T::from_f64(0.5f64.powi(26)).unwrap(),
            parameter_leeway: T::from_f64(0.5f64.powi(16)).unwrap(),
            wiggle: T::from_f64(0.5f64.powi(44)).unwrap(),
            endpoint_tolerance: T::from_f64(0.5f64.powi(40)).unwrap(),
            duplicate_tolerance: T::from_f64(0.5f64.powi(40)).unwrap(),
            max_polygon_edges: 10,
            max_sign_subdivisions: 5,
            locate_depth: 20,
        }
    }
}

impl<T: FloatingPoint> IntersectionOptions<T> {
    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_similar_ulps(mut self, similar_ulps: usize) -> Self {
        self.similar_ulps = similar_ulps;
        self
    }

    pub fn with_linearization_threshold(mut self, linearization_threshold: T) -> Self {
        self.linearization_threshold = linearization_threshold;
        self
    }

    pub fn with_parameter_leeway(mut self, parameter_leeway: T) -> Self {
        self.parameter_leeway = parameter_leeway;
        self
    }

    pub fn with_wiggle(mut self, wiggle: T) -> Self {
        self.wiggle = wiggle;
        self
    }

    pub fn with_endpoint_tolerance(mut self, endpoint_tolerance: T) -> Self {
        self.endpoint_tolerance = endpoint_tolerance;
        self
    }

    pub fn with_duplicate_tolerance(mut self, duplicate_tolerance: T) -> Self {
        self.duplicate_tolerance = duplicate_tolerance;
        self
    }

    pub fn with_max_polygon_edges(mut self, max_polygon_edges: usize) -> Self {
        self.max_polygon_edges = max_polygon_edges;
        self
    }

    pub fn with_max_sign_subdivisions(mut self, max_sign_subdivisions: usize) -> Self {
        self.max_sign_subdivisions = max_sign_subdivisions;
        self
    }

    pub fn with_locate_depth(mut self, locate_depth: usize) -> Self {
        self.locate_depth = locate_depth;
        self
    }
}
