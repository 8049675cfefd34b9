use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{
    classification::Intersection,
    error::{IntersectionError, Result},
    misc::{as_f64, FloatingPoint},
};

/// Move an intersection at the end of an edge onto the start of the next edge.
///
/// Returns `true` with the moved intersection when `s` or `t` is exactly `1`,
/// since the same point is also found at parameter `0` of the next edge.
///
/// # Example
/// ```
/// use bezier_intersection::prelude::*;
///
/// let (edge_end, intersection) = handle_ends(2, 1., 0, 0.5);
/// assert!(edge_end);
/// assert_eq!(intersection, Intersection::new(0, 0., 0, 0.5));
/// ```
pub fn handle_ends<T: FloatingPoint>(
    index1: usize,
    s: T,
    index2: usize,
    t: T,
) -> (bool, Intersection<T>) {
    let (zero, one) = (T::zero(), T::one());
    let mut edge_end = false;
    let (index1, s) = if s == one {
        edge_end = true;
        ((index1 + 1) % 3, zero)
    } else {
        (index1, s)
    };
    let (index2, t) = if t == one {
        edge_end = true;
        ((index2 + 1) % 3, zero)
    } else {
        (index2, t)
    };
    (edge_end, Intersection::new(index1, s, index2, t))
}

/// Whether two intersections lie on the same edges at relatively close parameters.
pub fn same_intersection<T: FloatingPoint>(
    intersection1: &Intersection<T>,
    intersection2: &Intersection<T>,
    tolerance: T,
) -> bool {
    let close = |a: T, b: T| (a - b).abs() <= tolerance * b.abs();
    intersection1.index_first() == intersection2.index_first()
        && intersection1.index_second() == intersection2.index_second()
        && close(intersection1.s(), intersection2.s())
        && close(intersection1.t(), intersection2.t())
}

/// Check that corner intersections found on several edges are consistent.
///
/// Unique intersections must be pairwise distinct and every duplicate must match exactly one of them.
/// A corner of one surface on an edge of the other is found twice,
/// a corner shared by both surfaces is found four times.
pub fn verify_duplicates<T: FloatingPoint>(
    duplicates: &[Intersection<T>],
    uniques: &[Intersection<T>],
    tolerance: T,
) -> Result<()> {
    if let Some((index_first, index_second)) = (0..uniques.len())
        .tuple_combinations()
        .find(|&(i, j)| same_intersection(&uniques[i], &uniques[j], tolerance))
    {
        return Err(IntersectionError::NonUniqueIntersection {
            index_first,
            index_second,
        });
    }

    let mut counter = BTreeMap::new();
    for duplicate in duplicates {
        let matches = uniques
            .iter()
            .positions(|unique| same_intersection(duplicate, unique, tolerance))
            .collect_vec();
        match matches.as_slice() {
            [matched] => *counter.entry(*matched).or_insert(0usize) += 1,
            _ => {
                return Err(IntersectionError::DuplicateNotFound {
                    s: as_f64(duplicate.s()),
                    t: as_f64(duplicate.t()),
                })
            }
        }
    }

    let zero = T::zero();
    for (index, count) in counter {
        let unique = &uniques[index];
        let (s, t) = (unique.s(), unique.t());
        let valid = match count {
            1 => (s == zero) != (t == zero),
            3 => s == zero && t == zero,
            _ => {
                return Err(IntersectionError::UnexpectedDuplicateCount {
                    count,
                    s: as_f64(s),
                    t: as_f64(t),
                })
            }
        };
        if !valid {
            return Err(IntersectionError::InvalidCorner {
                count,
                s: as_f64(s),
                t: as_f64(t),
            });
        }
    }

    Ok(())
}
