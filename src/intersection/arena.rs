use std::collections::BTreeSet;

use itertools::iproduct;
use nalgebra::Point2;

use crate::{
    curve::{bisect_into, linearization_error, BezierCurve2D},
    error::{IntersectionError, Result},
    misc::{FloatingPoint, Sign},
    surface::{accumulate_signs, subdivide_triangle_into, triangle_node_count},
};

use super::{resolve_pair, IntersectionOptions, IntersectionStrategy, PairOutcome, SegmentView};

/// Subdivision search over flat control point arenas.
///
/// Each round writes the subdivided pieces into a second arena and swaps the two,
/// so a call allocates a handful of buffers instead of one vector per piece.
/// Buffers live for a single call only.
#[derive(Clone, Debug, Default)]
pub struct ArenaIntersection<T: FloatingPoint> {
    options: IntersectionOptions<T>,
}

impl<T: FloatingPoint> ArenaIntersection<T> {
    pub fn new(options: IntersectionOptions<T>) -> Self {
        Self { options }
    }
}

/// A curve piece stored in an arena.
#[derive(Clone, Copy, Debug)]
struct Span<T> {
    offset: usize,
    len: usize,
    start: T,
    end: T,
    error: Option<T>,
}

#[derive(Clone, Debug)]
struct Arena<T: FloatingPoint> {
    nodes: Vec<Point2<T>>,
    spans: Vec<Span<T>>,
}

impl<T: FloatingPoint> Default for Arena<T> {
    fn default() -> Self {
        Self {
            nodes: vec![],
            spans: vec![],
        }
    }
}

impl<T: FloatingPoint> Arena<T> {
    /// The whole curve, linearized right away when it is already flat enough.
    fn root(curve: &BezierCurve2D<T>, threshold: T) -> Self {
        let nodes = curve.control_points().to_vec();
        let error = linearization_error(&nodes);
        let spans = vec![Span {
            offset: 0,
            len: nodes.len(),
            start: T::zero(),
            end: T::one(),
            error: (error < threshold).then_some(error),
        }];
        Self { nodes, spans }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.spans.clear();
    }

    fn view<'a>(&'a self, index: usize, original: &'a BezierCurve2D<T>) -> SegmentView<'a, T> {
        let span = self.spans[index];
        SegmentView {
            nodes: &self.nodes[span.offset..span.offset + span.len],
            original,
            start: span.start,
            end: span.end,
            error: span.error,
        }
    }
}

/// Indices of the pieces a span turned into in the next arena.
#[derive(Clone, Copy, Debug)]
struct Children {
    ids: [usize; 2],
    len: usize,
}

impl Children {
    fn as_slice(&self) -> &[usize] {
        &self.ids[..self.len]
    }
}

/// Subdivide span `index` into `next` unless it already was this round.
fn children<T: FloatingPoint>(
    current: &Arena<T>,
    index: usize,
    next: &mut Arena<T>,
    memo: &mut [Option<Children>],
    scratch: &mut Vec<Point2<T>>,
    threshold: T,
) -> Children {
    if let Some(known) = memo[index] {
        return known;
    }

    let span = current.spans[index];
    let nodes = &current.nodes[span.offset..span.offset + span.len];
    let first_id = next.spans.len();

    let result = if span.error.is_some() {
        let offset = next.nodes.len();
        next.nodes.extend_from_slice(nodes);
        next.spans.push(Span { offset, ..span });
        Children {
            ids: [first_id, first_id],
            len: 1,
        }
    } else {
        let base = next.nodes.len();
        bisect_into(nodes, scratch, &mut next.nodes);
        let middle = (span.start + span.end) * T::from_f64(0.5).unwrap();
        let halves = [
            (base, span.start, middle),
            (base + span.len, middle, span.end),
        ];
        for (offset, start, end) in halves {
            let error = linearization_error(&next.nodes[offset..offset + span.len]);
            next.spans.push(Span {
                offset,
                len: span.len,
                start,
                end,
                error: (error < threshold).then_some(error),
            });
        }
        Children {
            ids: [first_id, first_id + 1],
            len: 2,
        }
    };

    memo[index] = Some(result);
    result
}

impl<T: FloatingPoint> IntersectionStrategy<T> for ArenaIntersection<T> {
    fn options(&self) -> &IntersectionOptions<T> {
        &self.options
    }

    fn all_intersections(
        &self,
        first: &BezierCurve2D<T>,
        second: &BezierCurve2D<T>,
    ) -> Result<Vec<(T, T)>> {
        let threshold = self.options.linearization_threshold;
        let mut firsts = Arena::root(first, threshold);
        let mut seconds = Arena::root(second, threshold);
        let mut next_firsts = Arena::default();
        let mut next_seconds = Arena::default();
        let mut candidates = vec![(0, 0)];
        let mut next_candidates = vec![];
        let mut memo_first = vec![];
        let mut memo_second = vec![];
        let mut scratch = vec![];
        let mut intersections = vec![];

        for _ in 0..self.options.max_subdivisions {
            next_firsts.clear();
            next_seconds.clear();
            next_candidates.clear();
            memo_first.clear();
            memo_first.resize(firsts.spans.len(), None);
            memo_second.clear();
            memo_second.resize(seconds.spans.len(), None);

            for &(i, j) in candidates.iter() {
                let outcome = resolve_pair(
                    &firsts.view(i, first),
                    &seconds.view(j, second),
                    &self.options,
                    &mut intersections,
                )?;
                if outcome == PairOutcome::Subdivide {
                    let lefts = children(
                        &firsts,
                        i,
                        &mut next_firsts,
                        &mut memo_first,
                        &mut scratch,
                        threshold,
                    );
                    let rights = children(
                        &seconds,
                        j,
                        &mut next_seconds,
                        &mut memo_second,
                        &mut scratch,
                        threshold,
                    );
                    next_candidates.extend(iproduct!(
                        lefts.as_slice().iter().copied(),
                        rights.as_slice().iter().copied()
                    ));
                }
            }

            #[cfg(feature = "log")]
            log::trace!(
                "subdivision round: {} candidates over {} + {} nodes",
                next_candidates.len(),
                next_firsts.nodes.len(),
                next_seconds.nodes.len()
            );

            if next_candidates.len() > self.options.max_candidates {
                return Err(IntersectionError::TooManyCandidates(
                    next_candidates.len(),
                ));
            }
            if next_candidates.is_empty() {
                return Ok(intersections);
            }

            std::mem::swap(&mut firsts, &mut next_firsts);
            std::mem::swap(&mut seconds, &mut next_seconds);
            std::mem::swap(&mut candidates, &mut next_candidates);
        }

        Err(IntersectionError::NoConvergence(
            self.options.max_subdivisions,
        ))
    }

    /// Same decision procedure as the default, over one flat coefficient buffer per round.
    fn polynomial_sign(&self, coefficients: &[T], degree: usize) -> Result<Sign> {
        let count = triangle_node_count(degree);
        if coefficients.len() != count {
            return Err(IntersectionError::InvalidNodeCount {
                expected: count,
                actual: coefficients.len(),
            });
        }

        let max = self.options.max_sign_subdivisions;
        let mut polys = coefficients.to_vec();
        let mut next = Vec::with_capacity(4 * count);
        let mut signs = BTreeSet::new();
        for _ in 0..max {
            next.clear();
            for poly in polys.chunks(count) {
                let undecided = accumulate_signs(poly, degree, &mut signs);
                if signs.len() > 1 {
                    return Ok(Sign::Zero);
                }
                if undecided {
                    subdivide_triangle_into::<T, T>(poly, degree, &mut next);
                }
            }
            std::mem::swap(&mut polys, &mut next);
            if polys.is_empty() {
                break;
            }
        }

        if !polys.is_empty() {
            return Err(IntersectionError::UndecidedSign(max));
        }
        Ok(signs.into_iter().next().unwrap_or(Sign::Zero))
    }
}
