//! Bernstein triangle helpers shared by surfaces and by scalar polynomials.
//!
//! Nodes of a degree `d` triangle are stored row by row: row `k` holds the
//! `d + 1 - k` nodes with multi-index `(d - j - k, j, k)` for `j = 0..=d - k`.

use std::ops::{Add, Mul};

use crate::misc::FloatingPoint;

/// Values which can be blended with barycentric weights (scalars, vectors).
pub trait BarycentricNode<T>: Clone + Add<Output = Self> + Mul<T, Output = Self> {}

impl<T, V> BarycentricNode<T> for V where V: Clone + Add<Output = V> + Mul<T, Output = V> {}

/// Number of nodes in a triangle of the given degree.
pub fn triangle_node_count(degree: usize) -> usize {
    (degree + 1) * (degree + 2) / 2
}

/// Position of the node with multi-index `(degree - j - k, j, k)`.
pub fn triangle_node_index(degree: usize, j: usize, k: usize) -> usize {
    k * (2 * degree + 3 - k) / 2 + j
}

/// `(j, k)` pairs of a triangle in storage order.
pub(crate) fn triangle_multi_indices(degree: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..=degree).flat_map(move |k| (0..=degree - k).map(move |j| (j, k)))
}

/// Barycentric weights of the four sub-triangle corners produced by [`subdivide_triangle`].
pub(crate) fn subdivision_weights<T: FloatingPoint>() -> [[[T; 3]; 3]; 4] {
    let o = T::zero();
    let h = T::from_f64(0.5).unwrap();
    let l = T::one();
    [
        [[l, o, o], [h, h, o], [h, o, h]],
        [[o, h, h], [h, o, h], [h, h, o]],
        [[h, h, o], [o, l, o], [o, h, h]],
        [[h, o, h], [o, h, h], [o, o, l]],
    ]
}

/// Reduce a degree `degree` triangle to degree `degree - 1` with the weights `(λ1, λ2, λ3)`.
fn de_casteljau_round<T: FloatingPoint, V: BarycentricNode<T>>(
    nodes: &[V],
    degree: usize,
    weights: &[T; 3],
) -> Vec<V> {
    triangle_multi_indices(degree - 1)
        .map(|(j, k)| {
            nodes[triangle_node_index(degree, j, k)].clone() * weights[0]
                + nodes[triangle_node_index(degree, j + 1, k)].clone() * weights[1]
                + nodes[triangle_node_index(degree, j, k + 1)].clone() * weights[2]
        })
        .collect()
}

/// Evaluate a Bernstein triangle at barycentric coordinates `(λ1, λ2, λ3)`.
pub fn evaluate_barycentric<T: FloatingPoint, V: BarycentricNode<T>>(
    nodes: &[V],
    degree: usize,
    weights: &[T; 3],
) -> V {
    let mut current = nodes.to_vec();
    for d in (1..=degree).rev() {
        current = de_casteljau_round(&current, d, weights);
    }
    current.swap_remove(0)
}

/// Reparametrize onto the sub-triangle with the given corners (in barycentric coordinates).
pub fn specialize_triangle<T: FloatingPoint, V: BarycentricNode<T>>(
    nodes: &[V],
    degree: usize,
    corners: &[[T; 3]; 3],
) -> Vec<V> {
    triangle_multi_indices(degree)
        .map(|(j, k)| {
            let i = degree - j - k;
            let mut current = nodes.to_vec();
            let mut d = degree;
            for (count, weights) in [(i, &corners[0]), (j, &corners[1]), (k, &corners[2])] {
                for _ in 0..count {
                    current = de_casteljau_round(&current, d, weights);
                    d -= 1;
                }
            }
            current.swap_remove(0)
        })
        .collect()
}

/// Split a triangle into four at its edge midpoints.
/// Returned in order: corner at `λ1 = 1`, the inverted center triangle,
/// corner at `λ2 = 1`, corner at `λ3 = 1`.
pub fn subdivide_triangle<T: FloatingPoint, V: BarycentricNode<T>>(
    nodes: &[V],
    degree: usize,
) -> [Vec<V>; 4] {
    subdivision_weights::<T>().map(|corners| specialize_triangle(nodes, degree, &corners))
}

/// Append the four sub-triangles of [`subdivide_triangle`] to `out`, in the same order.
pub(crate) fn subdivide_triangle_into<T: FloatingPoint, V: BarycentricNode<T>>(
    nodes: &[V],
    degree: usize,
    out: &mut Vec<V>,
) {
    for corners in subdivision_weights::<T>() {
        out.extend(specialize_triangle(nodes, degree, &corners));
    }
}
