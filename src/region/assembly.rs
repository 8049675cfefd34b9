use std::{cmp::Ordering, collections::BTreeSet};

use crate::{
    classification::{Intersection, IntersectionClassification},
    curve::BezierCurve2D,
    error::{IntersectionError, Result},
    intersection::IntersectionOptions,
    misc::FloatingPoint,
    surface::BezierSurface,
};

use super::{CurvedPolygon, IntersectionRegion};

/// Which surface an edge of the boundary comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

/// A point on the boundary being walked.
///
/// Either one of the classified intersections or an artificial point at the start or end of an edge,
/// which only lies on the edge of one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Node<T> {
    first: Option<(usize, T)>,
    second: Option<(usize, T)>,
    classification: Option<IntersectionClassification>,
    /// position in the list of intersections
    known: Option<usize>,
}

impl<T: FloatingPoint> Node<T> {
    fn known(index: usize, intersection: &Intersection<T>) -> Self {
        Self {
            first: Some((intersection.index_first(), intersection.s())),
            second: Some((intersection.index_second(), intersection.t())),
            classification: intersection.classification(),
            known: Some(index),
        }
    }

    fn edge_end(side: Side, index: usize) -> Self {
        let end = Some((index, T::one()));
        match side {
            Side::First => Self {
                first: end,
                second: None,
                classification: Some(IntersectionClassification::First),
                known: None,
            },
            Side::Second => Self {
                first: None,
                second: end,
                classification: Some(IntersectionClassification::Second),
                known: None,
            },
        }
    }

    fn is(&self, index: usize) -> bool {
        self.known == Some(index)
    }

    fn side(&self) -> Result<Side> {
        match self.classification {
            Some(IntersectionClassification::First) => Ok(Side::First),
            Some(IntersectionClassification::Second) => Ok(Side::Second),
            other => Err(IntersectionError::NotInterior(other)),
        }
    }

    fn on(&self, side: Side) -> Option<(usize, T)> {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }
}

fn position<T: FloatingPoint>(intersection: &Intersection<T>, side: Side) -> (usize, T) {
    match side {
        Side::First => (intersection.index_first(), intersection.s()),
        Side::Second => (intersection.index_second(), intersection.t()),
    }
}

/// A piece of a surface edge between two parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
struct EdgeInfo<T> {
    side: Side,
    index: usize,
    start: T,
    end: T,
}

fn remove_unused(unused: &mut Vec<usize>, node: &Node<impl FloatingPoint>) {
    if let Some(index) = node.known {
        unused.retain(|&u| u != index);
    }
}

/// Move a node at the end of an edge to the start of the next edge,
/// replacing it by a known intersection at the same place if there is one.
fn to_front<T: FloatingPoint>(
    mut node: Node<T>,
    intersections: &[Intersection<T>],
    unused: &mut Vec<usize>,
) -> Node<T> {
    let (zero, one) = (T::zero(), T::one());
    let mut changed = false;
    if let Some((index, s)) = node.first {
        if s == one {
            node.first = Some(((index + 1) % 3, zero));
            changed = true;
        }
    }
    if let Some((index, t)) = node.second {
        if t == one {
            node.second = Some(((index + 1) % 3, zero));
            changed = true;
        }
    }

    if changed {
        let existing = intersections.iter().enumerate().find(|(_, other)| {
            node.first == Some(position(other, Side::First))
                || node.second == Some(position(other, Side::Second))
        });
        if let Some((index, other)) = existing {
            node = Node::known(index, other);
        }
    }

    remove_unused(unused, &node);
    node
}

/// The closest crossing further along the current edge of `side`, or the end of the edge.
/// Tangencies away from the end of the edge are skipped.
fn next_along<T: FloatingPoint>(
    node: &Node<T>,
    side: Side,
    intersections: &[Intersection<T>],
) -> Result<Node<T>> {
    let (index, param) = node.on(side).ok_or(IntersectionError::WrongCurve)?;
    let along_edge = intersections
        .iter()
        .enumerate()
        .filter(|(_, other)| {
            let (other_index, other_param) = position(other, side);
            other_index == index
                && other_param > param
                && (other_param >= T::one() || other.is_interior())
        })
        .min_by(|(_, a), (_, b)| {
            position(a, side)
                .1
                .partial_cmp(&position(b, side).1)
                .unwrap_or(Ordering::Equal)
        });

    Ok(match along_edge {
        Some((known, other)) => Node::known(known, other),
        None => Node::edge_end(side, index),
    })
}

/// The next node after `node` along the edge its classification points to.
fn get_next<T: FloatingPoint>(
    node: &Node<T>,
    intersections: &[Intersection<T>],
    unused: &mut Vec<usize>,
) -> Result<Node<T>> {
    let next = next_along(node, node.side()?, intersections)?;
    remove_unused(unused, &next);
    Ok(next)
}

/// Describe the edge piece between two consecutive nodes.
fn ends_to_curve<T: FloatingPoint>(start: &Node<T>, end: &Node<T>) -> Result<EdgeInfo<T>> {
    let side = start.side()?;
    let (index, start_param) = start.on(side).ok_or(IntersectionError::WrongCurve)?;
    match end.on(side) {
        Some((end_index, end_param)) if end_index == index => Ok(EdgeInfo {
            side,
            index,
            start: start_param,
            end: end_param,
        }),
        _ => Err(IntersectionError::WrongCurve),
    }
}

/// Whether the pieces are exactly the three edges of one surface.
fn is_whole_surface<T: FloatingPoint>(edge_info: &[EdgeInfo<T>], side: Side) -> bool {
    edge_info.len() == 3
        && (0..3).any(|offset| {
            edge_info.iter().enumerate().all(|(i, info)| {
                info.side == side
                    && info.index == (offset + i) % 3
                    && info.start == T::zero()
                    && info.end == T::one()
            })
        })
}

fn make_intersection<T: FloatingPoint>(
    edge_info: &[EdgeInfo<T>],
    surface1: &BezierSurface<T>,
    edges1: &[BezierCurve2D<T>; 3],
    surface2: &BezierSurface<T>,
    edges2: &[BezierCurve2D<T>; 3],
) -> IntersectionRegion<T> {
    if is_whole_surface(edge_info, Side::First) {
        return IntersectionRegion::Surface(surface1.clone());
    }
    if is_whole_surface(edge_info, Side::Second) {
        return IntersectionRegion::Surface(surface2.clone());
    }

    let edges = edge_info
        .iter()
        .map(|info| {
            let edges = match info.side {
                Side::First => edges1,
                Side::Second => edges2,
            };
            edges[info.index].specialize(info.start, info.end)
        })
        .collect();
    IntersectionRegion::CurvedPolygon(CurvedPolygon::new_unchecked(edges))
}

/// Walk the boundary from every interior crossing until it closes.
fn basic_interior_combine<T: FloatingPoint>(
    intersections: &[Intersection<T>],
    surface1: &BezierSurface<T>,
    edges1: &[BezierCurve2D<T>; 3],
    surface2: &BezierSurface<T>,
    edges2: &[BezierCurve2D<T>; 3],
    max_edges: usize,
) -> Result<Vec<IntersectionRegion<T>>> {
    let mut unused: Vec<usize> = intersections
        .iter()
        .enumerate()
        .filter(|(_, intersection)| intersection.is_interior())
        .map(|(index, _)| index)
        .collect();

    let mut result = vec![];
    while let Some(start) = unused.pop() {
        let start_node = Node::known(start, &intersections[start]);
        let mut next = get_next(&start_node, intersections, &mut unused)?;
        let mut edge_ends = vec![(start_node, next)];
        while !next.is(start) {
            let current = to_front(next, intersections, &mut unused);
            // corners are deduplicated onto the start of an edge, so moving to the front may close the loop
            if current.is(start) {
                break;
            }
            next = get_next(&current, intersections, &mut unused)?;
            edge_ends.push((current, next));
            if edge_ends.len() > max_edges {
                return Err(IntersectionError::TooManyEdges(edge_ends.len()));
            }
        }

        #[cfg(feature = "log")]
        log::debug!("closed boundary with {} edges", edge_ends.len());

        let edge_info = edge_ends
            .iter()
            .map(|(start, end)| ends_to_curve(start, end))
            .collect::<Result<Vec<_>>>()?;
        result.push(make_intersection(
            &edge_info, surface1, edges1, surface2, edges2,
        ));
    }
    Ok(result)
}

/// Without crossings the surfaces are either disjoint or one contains the other.
fn no_intersections<T: FloatingPoint>(
    surface1: &BezierSurface<T>,
    surface2: &BezierSurface<T>,
    depth: usize,
) -> Vec<IntersectionRegion<T>> {
    let corner1 = &surface1.control_points()[0];
    if surface2.locate_with_depth(corner1, depth).is_some() {
        return vec![IntersectionRegion::Surface(surface1.clone())];
    }
    let corner2 = &surface2.control_points()[0];
    if surface1.locate_with_depth(corner2, depth).is_some() {
        return vec![IntersectionRegion::Surface(surface2.clone())];
    }
    vec![]
}

/// With tangencies only, the surfaces either touch or one is tangent inside the other.
fn tangent_only_intersections<T: FloatingPoint>(
    intersections: &[Intersection<T>],
    surface1: &BezierSurface<T>,
    surface2: &BezierSurface<T>,
) -> Result<Vec<IntersectionRegion<T>>> {
    let all_types: BTreeSet<_> = intersections
        .iter()
        .filter_map(|intersection| intersection.classification())
        .collect();
    if all_types.len() != 1 {
        return Err(IntersectionError::HeterogeneousTangency(
            all_types.into_iter().collect(),
        ));
    }

    match all_types.into_iter().next() {
        Some(IntersectionClassification::Opposed)
        | Some(IntersectionClassification::IgnoredCorner) => Ok(vec![]),
        Some(IntersectionClassification::TangentFirst) => {
            Ok(vec![IntersectionRegion::Surface(surface1.clone())])
        }
        Some(IntersectionClassification::TangentSecond) => {
            Ok(vec![IntersectionRegion::Surface(surface2.clone())])
        }
        Some(other) => Err(IntersectionError::NotTangent(other)),
        None => Err(IntersectionError::HeterogeneousTangency(vec![])),
    }
}

/// Assemble classified intersections of the edges of two surfaces into the regions common to both.
///
/// Every intersection must have been classified and must lie strictly before the end of its edges.
pub fn combine_intersections<T: FloatingPoint>(
    intersections: &[Intersection<T>],
    surface1: &BezierSurface<T>,
    edges1: &[BezierCurve2D<T>; 3],
    surface2: &BezierSurface<T>,
    edges2: &[BezierCurve2D<T>; 3],
    options: &IntersectionOptions<T>,
) -> Result<Vec<IntersectionRegion<T>>> {
    if intersections.is_empty() {
        return Ok(no_intersections(surface1, surface2, options.locate_depth));
    }

    let result = basic_interior_combine(
        intersections,
        surface1,
        edges1,
        surface2,
        edges2,
        options.max_polygon_edges,
    )?;
    if !result.is_empty() {
        return Ok(result);
    }

    tangent_only_intersections(intersections, surface1, surface2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(
        index_first: usize,
        s: f64,
        index_second: usize,
        t: f64,
        classification: IntersectionClassification,
    ) -> Intersection<f64> {
        Intersection::new(index_first, s, index_second, t).with_classification(classification)
    }

    #[test]
    fn to_front_moves_edge_end() {
        let intersections = vec![classified(1, 0.5, 0, 0.5, IntersectionClassification::First)];
        let mut unused = vec![0];
        let node = to_front(Node::edge_end(Side::First, 2), &intersections, &mut unused);
        assert_eq!(node.first, Some((0, 0.)));
        assert_eq!(node.known, None);
        assert_eq!(unused, vec![0]);
    }

    #[test]
    fn to_front_prefers_known_intersection() {
        let intersections = vec![
            classified(1, 0.5, 0, 0.5, IntersectionClassification::First),
            classified(0, 0., 2, 0.25, IntersectionClassification::Second),
        ];
        let mut unused = vec![0, 1];
        let node = to_front(Node::edge_end(Side::First, 2), &intersections, &mut unused);
        assert!(node.is(1));
        assert_eq!(unused, vec![0]);
    }

    #[test]
    fn next_skips_tangencies() {
        let intersections = vec![
            classified(0, 0.25, 1, 0.5, IntersectionClassification::First),
            classified(0, 0.5, 2, 0.5, IntersectionClassification::TangentFirst),
            classified(0, 0.75, 0, 0.5, IntersectionClassification::Second),
        ];
        let mut unused = vec![2];
        let start = Node::known(0, &intersections[0]);
        let next = get_next(&start, &intersections, &mut unused).unwrap();
        assert!(next.is(2));
        assert!(unused.is_empty());

        let end = get_next(&next, &intersections, &mut unused).unwrap();
        assert_eq!(end, Node::edge_end(Side::Second, 0));
    }

    #[test]
    fn next_requires_interior() {
        let intersections = vec![classified(0, 0.5, 0, 0.5, IntersectionClassification::Opposed)];
        let node = Node::known(0, &intersections[0]);
        assert_eq!(
            get_next(&node, &intersections, &mut vec![]),
            Err(IntersectionError::NotInterior(Some(
                IntersectionClassification::Opposed
            )))
        );
    }

    #[test]
    fn edge_from_nodes() {
        let intersections = vec![
            classified(0, 0.25, 1, 0.5, IntersectionClassification::First),
            classified(0, 0.75, 2, 0.5, IntersectionClassification::Second),
        ];
        let start = Node::known(0, &intersections[0]);
        let end = Node::known(1, &intersections[1]);
        assert_eq!(
            ends_to_curve(&start, &end),
            Ok(EdgeInfo {
                side: Side::First,
                index: 0,
                start: 0.25,
                end: 0.75,
            })
        );
        assert_eq!(
            ends_to_curve(&end, &Node::edge_end(Side::Second, 1)),
            Err(IntersectionError::WrongCurve)
        );
    }

    #[test]
    fn whole_surface_in_any_rotation() {
        let info = |index| EdgeInfo {
            side: Side::Second,
            index,
            start: 0.,
            end: 1.,
        };
        assert!(is_whole_surface(&[info(1), info(2), info(0)], Side::Second));
        assert!(!is_whole_surface(&[info(1), info(2), info(0)], Side::First));
        assert!(!is_whole_surface(&[info(1), info(0), info(2)], Side::Second));
    }
}
