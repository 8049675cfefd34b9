use itertools::iproduct;

use crate::{
    curve::BezierCurve2D,
    error::{IntersectionError, Result},
    misc::FloatingPoint,
};

use super::{resolve_pair, IntersectionOptions, IntersectionStrategy, PairOutcome, Shape, SubdividedCurve};

/// Candidate pairs of shapes which may still intersect.
pub type CandidatePairs<'a, T> = Vec<(Shape<'a, T>, Shape<'a, T>)>;

/// Subdivision search over owned curve pieces.
#[derive(Clone, Debug, Default)]
pub struct GeometricIntersection<T: FloatingPoint> {
    options: IntersectionOptions<T>,
}

impl<T: FloatingPoint> GeometricIntersection<T> {
    pub fn new(options: IntersectionOptions<T>) -> Self {
        Self { options }
    }
}

impl<T: FloatingPoint> IntersectionStrategy<T> for GeometricIntersection<T> {
    fn options(&self) -> &IntersectionOptions<T> {
        &self.options
    }

    fn all_intersections(
        &self,
        first: &BezierCurve2D<T>,
        second: &BezierCurve2D<T>,
    ) -> Result<Vec<(T, T)>> {
        let threshold = self.options.linearization_threshold;
        let mut candidates = vec![(
            Shape::from_curve(SubdividedCurve::new(first), threshold),
            Shape::from_curve(SubdividedCurve::new(second), threshold),
        )];
        let mut intersections = vec![];

        for _ in 0..self.options.max_subdivisions {
            let accepted = intersect_one_round(&candidates, &self.options, &mut intersections)?;

            #[cfg(feature = "log")]
            log::trace!(
                "subdivision round: {} candidates, {} intersections",
                accepted.len(),
                intersections.len()
            );

            if accepted.len() > self.options.max_candidates {
                return Err(IntersectionError::TooManyCandidates(accepted.len()));
            }
            if accepted.is_empty() {
                return Ok(intersections);
            }
            candidates = accepted;
        }

        Err(IntersectionError::NoConvergence(
            self.options.max_subdivisions,
        ))
    }
}

/// Resolve or subdivide every candidate pair once.
pub fn intersect_one_round<'a, T: FloatingPoint>(
    candidates: &[(Shape<'a, T>, Shape<'a, T>)],
    options: &IntersectionOptions<T>,
    intersections: &mut Vec<(T, T)>,
) -> Result<CandidatePairs<'a, T>> {
    let threshold = options.linearization_threshold;
    let mut next = vec![];
    for (first, second) in candidates {
        let outcome = resolve_pair(&first.view(), &second.view(), options, intersections)?;
        if outcome == PairOutcome::Subdivide {
            next.extend(iproduct!(
                first.subdivide(threshold),
                second.subdivide(threshold)
            ));
        }
    }
    Ok(next)
}
