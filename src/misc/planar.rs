use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, Matrix2, OVector, Vector2};

use super::FloatingPoint;

/// Planar cross product `v.x * w.y - v.y * w.x`.
pub fn cross_product<T: FloatingPoint>(v: &Vector2<T>, w: &Vector2<T>) -> T {
    v.x * w.y - v.y * w.x
}

/// Solve a 2x2 linear system with partial pivoting on the first column.
/// Returns `None` when the system is singular.
pub fn solve2x2<T: FloatingPoint>(lhs: &Matrix2<T>, rhs: &Vector2<T>) -> Option<(T, T)> {
    let (a, b, c, d) = (lhs[(0, 0)], lhs[(0, 1)], lhs[(1, 0)], lhs[(1, 1)]);
    let (e, f) = (rhs.x, rhs.y);

    if c.abs() > a.abs() {
        let ratio = a / c;
        let denominator = b - ratio * d;
        if denominator == T::zero() {
            return None;
        }
        let y = (e - ratio * f) / denominator;
        let x = (f - d * y) / c;
        Some((x, y))
    } else {
        if a == T::zero() {
            return None;
        }
        let ratio = c / a;
        let denominator = d - ratio * b;
        if denominator == T::zero() {
            return None;
        }
        let y = (f - ratio * e) / denominator;
        let x = (e - b * y) / a;
        Some((x, y))
    }
}

/// Check if two vectors are equal up to a relative tolerance `eps`.
/// A zero vector is compared against `eps` absolutely.
pub fn vector_close<T: FloatingPoint, D: DimName>(
    v: &OVector<T, D>,
    w: &OVector<T, D>,
    eps: T,
) -> bool
where
    DefaultAllocator: Allocator<D>,
{
    let size1 = v.norm();
    let size2 = w.norm();
    if size1 == T::zero() {
        size2 <= eps
    } else if size2 == T::zero() {
        size1 <= eps
    } else {
        (v - w).norm() <= eps * size1.min(size2)
    }
}

/// Check if `value` lies in the closed interval `[start, end]`.
pub fn in_interval<T: FloatingPoint>(value: T, start: T, end: T) -> bool {
    start <= value && value <= end
}

/// Snap a parameter that lies within `wiggle` of the unit interval onto it.
/// Values within `wiggle` of an endpoint become that endpoint, values further outside are rejected.
pub fn wiggle_interval<T: FloatingPoint>(value: T, wiggle: T) -> Option<T> {
    let one = T::one();
    if -wiggle < value && value < wiggle {
        Some(T::zero())
    } else if wiggle <= value && value <= one - wiggle {
        Some(value)
    } else if one - wiggle < value && value < one + wiggle {
        Some(one)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solve_with_pivot() {
        let lhs = Matrix2::new(1., 2., 3., 4.);
        let (x, y) = solve2x2(&lhs, &Vector2::new(5., 6.)).unwrap();
        assert_relative_eq!(x, -4., epsilon = 1e-12);
        assert_relative_eq!(y, 4.5, epsilon = 1e-12);

        let lhs = Matrix2::new(2., 1., 1., 3.);
        let (x, y) = solve2x2(&lhs, &Vector2::new(5., 10.)).unwrap();
        assert_relative_eq!(x, 1., epsilon = 1e-12);
        assert_relative_eq!(y, 3., epsilon = 1e-12);
    }

    #[test]
    fn solve_singular() {
        assert!(solve2x2(&Matrix2::new(0., 1., 0., 2.), &Vector2::new(1., 1.)).is_none());
        assert!(solve2x2(&Matrix2::new(1., 2., 2., 4.), &Vector2::new(1., 1.)).is_none());
        assert!(solve2x2(&Matrix2::new(2., 4., 1., 2.), &Vector2::new(1., 1.)).is_none());
    }

    #[test]
    fn close_vectors() {
        let eps = 0.5f64.powi(40);
        let v = Vector2::new(1., 1.);
        assert!(vector_close(&v, &v, eps));
        assert!(vector_close(&v, &Vector2::new(1. + eps / 2., 1.), eps));
        assert!(!vector_close(&v, &Vector2::new(1. + 4. * eps, 1.), eps));
        assert!(vector_close(&Vector2::zeros(), &Vector2::new(eps, 0.), eps));
        assert!(!vector_close(&Vector2::new(0., 2. * eps), &Vector2::zeros(), eps));
    }

    #[test]
    fn wiggle() {
        let wiggle = 0.5f64.powi(44);
        assert_eq!(wiggle_interval(-0.5f64.powi(45), wiggle), Some(0.));
        assert_eq!(wiggle_interval(0.75, wiggle), Some(0.75));
        assert_eq!(wiggle_interval(1. + 0.5f64.powi(46), wiggle), Some(1.));
        assert_eq!(wiggle_interval(-0.5, wiggle), None);
        assert_eq!(wiggle_interval(1.5, wiggle), None);
    }
}
