use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint, OVector, Vector2};
use simba::scalar::SupersetOf;

use crate::misc::{cross_product, FloatingPoint, Invertible};

/// Bezier curve representation
/// By generics, it can be used for 2D or 3D curves with f32 or f64 scalar types
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "OPoint<T, D>: serde::Serialize",
        deserialize = "OPoint<T, D>: serde::Deserialize<'de>"
    ))
)]
pub struct BezierCurve<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    /// control points of the curve
    /// the degree of the curve is `# of control points - 1`
    control_points: Vec<OPoint<T, D>>,
}

/// 2D Bezier curve alias
pub type BezierCurve2D<T> = BezierCurve<T, Const<2>>;

/// 3D Bezier curve alias
pub type BezierCurve3D<T> = BezierCurve<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new Bezier curve
    /// # Failures
    /// - if the number of control points is less than 2
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let curve = BezierCurve2D::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(0.5, 1.),
    ///     Point2::new(1., 0.),
    /// ]);
    /// assert!(curve.is_ok());
    /// assert_eq!(curve.unwrap().degree(), 2);
    ///
    /// let point = BezierCurve2D::try_new(vec![Point2::new(0., 0.)]);
    /// assert!(point.is_err());
    /// ```
    pub fn try_new(control_points: Vec<OPoint<T, D>>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            control_points.len() >= 2,
            "Too few control points for curve, got {}",
            control_points.len()
        );
        Ok(Self { control_points })
    }

    /// Callers guarantee at least two control points.
    pub(crate) fn new_unchecked(control_points: Vec<OPoint<T, D>>) -> Self {
        Self { control_points }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn control_points(&self) -> &[OPoint<T, D>] {
        &self.control_points
    }

    pub fn first_point(&self) -> &OPoint<T, D> {
        &self.control_points[0]
    }

    pub fn last_point(&self) -> &OPoint<T, D> {
        &self.control_points[self.control_points.len() - 1]
    }

    /// Evaluate the curve at a given parameter by de Casteljau's algorithm
    pub fn point_at(&self, s: T) -> OPoint<T, D> {
        let coords = self.control_points.iter().map(|p| p.coords.clone()).collect();
        OPoint::from(de_casteljau(coords, s))
    }

    /// Evaluate the derivative of the curve with respect to its parameter
    pub fn hodograph_at(&self, s: T) -> OVector<T, D> {
        let differences = self
            .control_points
            .windows(2)
            .map(|w| &w[1] - &w[0])
            .collect();
        de_casteljau(differences, s) * T::from_usize(self.degree()).unwrap()
    }

    /// Reparametrize the curve onto the sub-interval `[start, end]`
    ///
    /// # Example
    /// ```
    /// use bezier_intersection::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let curve = BezierCurve2D::try_new(vec![
    ///     Point2::new(0., 0.),
    ///     Point2::new(0.5, 1.),
    ///     Point2::new(1., 0.),
    /// ]).unwrap();
    /// let left = curve.specialize(0., 0.5);
    /// assert_eq!(left.control_points(), &[
    ///     Point2::new(0., 0.),
    ///     Point2::new(0.25, 0.5),
    ///     Point2::new(0.5, 0.5),
    /// ]);
    /// ```
    pub fn specialize(&self, start: T, end: T) -> Self {
        let degree = self.degree();
        let control_points = (0..=degree)
            .map(|i| {
                let mut coords: Vec<_> = self.control_points.iter().map(|p| p.coords.clone()).collect();
                for _ in 0..(degree - i) {
                    de_casteljau_round(&mut coords, start);
                }
                for _ in 0..i {
                    de_casteljau_round(&mut coords, end);
                }
                OPoint::from(coords.swap_remove(0))
            })
            .collect();
        Self { control_points }
    }

    /// Split the curve at the middle of its parameter domain
    pub fn subdivide(&self) -> (Self, Self) {
        let mut scratch = vec![];
        let mut nodes = vec![];
        bisect_into(&self.control_points, &mut scratch, &mut nodes);
        let right = nodes.split_off(self.control_points.len());
        (
            Self {
                control_points: nodes,
            },
            Self {
                control_points: right,
            },
        )
    }

    /// Upper bound of the distance between the curve and the segment joining its end points
    pub fn linearization_error(&self) -> T {
        linearization_error(&self.control_points)
    }

    /// Cast the curve to a curve with another floating point type
    pub fn cast<F: FloatingPoint + SupersetOf<T>>(&self) -> BezierCurve<F, D> {
        BezierCurve {
            control_points: self
                .control_points
                .iter()
                .map(|p| p.clone().cast())
                .collect(),
        }
    }
}

impl<T: FloatingPoint> BezierCurve2D<T> {
    /// Signed curvature at `s`, given the tangent vector at the same parameter
    pub fn curvature_at(&self, s: T, tangent: &Vector2<T>) -> T {
        let n = self.control_points.len();
        if n == 2 {
            return T::zero();
        }

        let second_differences = self
            .control_points
            .windows(3)
            .map(|w| w[0].coords - w[1].coords * T::from_f64(2.).unwrap() + w[2].coords)
            .collect();
        let concavity = de_casteljau(second_differences, s) * T::from_usize((n - 1) * (n - 2)).unwrap();

        cross_product(tangent, &concavity) / tangent.norm().powi(3)
    }
}

impl<T: FloatingPoint, D: DimName> Invertible for BezierCurve<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn invert(&mut self) {
        self.control_points.reverse();
    }
}

/// Evaluate a polynomial in Bernstein form by repeated linear interpolation
fn de_casteljau<T: FloatingPoint, D: DimName>(mut coords: Vec<OVector<T, D>>, s: T) -> OVector<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    while coords.len() > 1 {
        de_casteljau_round(&mut coords, s);
    }
    coords.swap_remove(0)
}

fn de_casteljau_round<T: FloatingPoint, D: DimName>(coords: &mut Vec<OVector<T, D>>, s: T)
where
    DefaultAllocator: Allocator<D>,
{
    let r = T::one() - s;
    for i in 0..coords.len() - 1 {
        coords[i] = &coords[i] * r + &coords[i + 1] * s;
    }
    coords.pop();
}

/// Append both halves of the curve given by `nodes` split at the middle to `out`:
/// the first `nodes.len()` points are the left half, the rest the right half.
pub(crate) fn bisect_into<T: FloatingPoint, D: DimName>(
    nodes: &[OPoint<T, D>],
    scratch: &mut Vec<OPoint<T, D>>,
    out: &mut Vec<OPoint<T, D>>,
) where
    DefaultAllocator: Allocator<D>,
{
    let n = nodes.len();
    let half = T::from_f64(0.5).unwrap();
    scratch.clear();
    scratch.extend_from_slice(nodes);

    let offset = out.len();
    out.resize(offset + 2 * n, OPoint::origin());
    for round in 0..n {
        out[offset + round] = scratch[0].clone();
        out[offset + 2 * n - 1 - round] = scratch[n - 1 - round].clone();
        for i in 0..(n - 1 - round) {
            scratch[i] = OPoint::from((&scratch[i].coords + &scratch[i + 1].coords) * half);
        }
    }
}

/// Linearization error of the curve defined by `nodes`.
/// Bounds the distance to the chord by `d (d - 1) / 8` times the largest second difference,
/// which is exactly zero for lines and for evenly spaced collinear control points.
pub fn linearization_error<T: FloatingPoint, D: DimName>(nodes: &[OPoint<T, D>]) -> T
where
    DefaultAllocator: Allocator<D>,
{
    let degree = nodes.len().saturating_sub(1);
    if degree <= 1 {
        return T::zero();
    }

    let two = T::from_f64(2.).unwrap();
    let worst = nodes
        .windows(3)
        .map(|w| &w[0].coords - &w[1].coords * two + &w[2].coords)
        .fold(OVector::<T, D>::zeros(), |mut acc, second| {
            for i in 0..D::dim() {
                acc[i] = acc[i].max(second[i].abs());
            }
            acc
        });

    let multiplier = T::from_f64(0.125).unwrap() * T::from_usize(degree * (degree - 1)).unwrap();
    multiplier * worst.norm()
}
