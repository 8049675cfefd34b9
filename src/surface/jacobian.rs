use std::collections::BTreeSet;

use itertools::iproduct;

use crate::{
    error::{IntersectionError, Result},
    intersection::IntersectionStrategy,
    misc::{trinomial, FloatingPoint, Sign},
};

use super::{
    subdivide_triangle, triangle::triangle_multi_indices, triangle_node_count, triangle_node_index,
    BezierSurface,
};

impl<T: FloatingPoint> BezierSurface<T> {
    /// Bernstein coefficients of `det[B_s, B_t]` as a triangle of degree `2 (d - 1)`.
    pub fn jacobian_polynomial(&self) -> Vec<T> {
        let degree = self.degree() - 1;
        let bs = self.jacobian_s();
        let bt = self.jacobian_t();
        let component = |nodes: &[nalgebra::Vector2<T>], i: usize| -> Vec<T> {
            nodes.iter().map(|v| v[i]).collect()
        };

        let lhs = bernstein_product(&component(&bs, 0), &component(&bt, 1), degree);
        let rhs = bernstein_product(&component(&bs, 1), &component(&bt, 0), degree);
        lhs.into_iter().zip(rhs).map(|(a, b)| a - b).collect()
    }

    /// A surface is valid when its Jacobian is positive over the whole domain.
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let surface = BezierSurface::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(1., 0.),
    ///     Point2::new(0., 1.),
    /// ], 1).unwrap();
    /// let strategy = GeometricIntersection::default();
    /// assert!(surface.is_valid(&strategy).unwrap());
    /// ```
    pub fn is_valid(&self, strategy: &dyn IntersectionStrategy<T>) -> Result<bool> {
        let degree = 2 * (self.degree() - 1);
        let sign = strategy.polynomial_sign(&self.jacobian_polynomial(), degree)?;
        Ok(sign == Sign::Positive)
    }
}

/// Product of two Bernstein triangles of the same degree.
fn bernstein_product<T: FloatingPoint>(a: &[T], b: &[T], degree: usize) -> Vec<T> {
    let target = 2 * degree;
    let mut product = vec![T::zero(); triangle_node_count(target)];
    let indices: Vec<_> = triangle_multi_indices(degree).collect();

    for ((ia, &(ja, ka)), (ib, &(jb, kb))) in
        iproduct!(indices.iter().enumerate(), indices.iter().enumerate())
    {
        let weight = trinomial(degree - ja - ka, ja, ka) * trinomial(degree - jb - kb, jb, kb);
        product[triangle_node_index(target, ja + jb, ka + kb)] +=
            T::from_f64(weight).unwrap() * a[ia] * b[ib];
    }

    for (j, k) in triangle_multi_indices(target) {
        product[triangle_node_index(target, j, k)] /=
            T::from_f64(trinomial(target - j - k, j, k)).unwrap();
    }
    product
}

/// Add the signs of `poly` to `signs`.
/// Returns `true` when the coefficients have mixed signs and must be subdivided.
pub(crate) fn accumulate_signs<T: FloatingPoint>(
    poly: &[T],
    degree: usize,
    signs: &mut BTreeSet<Sign>,
) -> bool {
    for corner in [0, degree, poly.len() - 1] {
        signs.insert(Sign::of(poly[corner]));
    }

    let zero = T::zero();
    if poly.iter().all(|c| *c == zero) {
        signs.insert(Sign::Zero);
    } else if poly.iter().all(|c| *c > zero) {
        signs.insert(Sign::Positive);
    } else if poly.iter().all(|c| *c < zero) {
        signs.insert(Sign::Negative);
    } else {
        return true;
    }
    false
}

/// Sign of a polynomial over the reference triangle from its Bernstein coefficients.
///
/// Subdivides wherever the coefficients have mixed signs.
/// `Sign::Zero` is returned for mixed signs and for the zero polynomial.
pub fn polynomial_sign<T: FloatingPoint>(
    coefficients: &[T],
    degree: usize,
    max_subdivisions: usize,
) -> Result<Sign> {
    let count = triangle_node_count(degree);
    if coefficients.len() != count {
        return Err(IntersectionError::InvalidNodeCount {
            expected: count,
            actual: coefficients.len(),
        });
    }

    let mut polys = vec![coefficients.to_vec()];
    let mut signs = BTreeSet::new();
    for _ in 0..max_subdivisions {
        let mut undecided = vec![];
        for poly in polys {
            if accumulate_signs(&poly, degree, &mut signs) {
                undecided.push(poly);
            }
            if signs.len() > 1 {
                return Ok(Sign::Zero);
            }
        }

        polys = undecided
            .iter()
            .flat_map(|poly| subdivide_triangle::<T, T>(poly, degree))
            .collect();
        if polys.is_empty() {
            break;
        }
    }

    if !polys.is_empty() {
        return Err(IntersectionError::UndecidedSign(max_subdivisions));
    }
    Ok(signs.into_iter().next().unwrap_or(Sign::Zero))
}
