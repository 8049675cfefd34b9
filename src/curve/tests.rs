use approx::assert_relative_eq;
use nalgebra::{Point2, Point3, Vector2};

use crate::prelude::*;

fn curve(points: &[[f64; 2]]) -> BezierCurve2D<f64> {
    BezierCurve2D::try_new(points.iter().map(|p| Point2::new(p[0], p[1])).collect()).unwrap()
}

#[test]
fn test_linearization_error_line() {
    let line = curve(&[[0., 0.], [1., 1.]]);
    assert_eq!(line.linearization_error(), 0.);
}

#[test]
fn test_linearization_error_degree_elevated_line() {
    let quadratic = curve(&[[0., 0.], [0.5, 1.], [1., 2.]]);
    assert_eq!(quadratic.linearization_error(), 0.);

    let quartic = curve(&[[0., 0.], [1., 0.5], [2., 1.], [3., 1.5], [4., 2.]]);
    assert_eq!(quartic.linearization_error(), 0.);
}

#[test]
fn test_linearization_error_hidden_linear() {
    // the control polygon folds back on its own line
    let quadratic = curve(&[[0., 0.], [6., 8.], [3., 4.]]);
    assert_eq!(quadratic.linearization_error(), 0.125 * 2. * 15.);
}

#[test]
fn test_linearization_error_quadratic() {
    let quadratic = curve(&[[0., 0.], [1., 1.], [5., 6.]]);
    assert_relative_eq!(quadratic.linearization_error(), 1.25);
}

#[test]
fn test_linearization_error_degree_five() {
    let quintic = curve(&[[0., 0.], [1., 1.], [7., 3.], [11., 8.], [15., 1.], [16., -3.]]);
    // second differences (5, 1), (-2, 3), (0, -12), (-3, 3): componentwise max (5, 12)
    assert_relative_eq!(quintic.linearization_error(), 0.125 * 5. * 4. * 13.);
}

#[test]
fn test_linearization_error_3d() {
    let quadratic = BezierCurve3D::try_new(vec![
        Point3::new(0., 0., 0.),
        Point3::new(1., 2., 2.),
        Point3::new(2., 0., 0.),
    ])
    .unwrap();
    // second difference (0, -4, -4)
    assert_relative_eq!(quadratic.linearization_error(), 0.25 * 32f64.sqrt());
}

#[test]
fn test_point_at_and_hodograph() {
    let quadratic = curve(&[[1., 0.], [1.75, 0.25], [2., 1.]]);
    let point = quadratic.point_at(0.25);
    assert_relative_eq!(point, Point2::new(1.34375, 0.15625));
    let tangent = quadratic.hodograph_at(0.25);
    assert_relative_eq!(tangent, Vector2::new(1.25, 0.75));
}

#[test]
fn test_curvature() {
    let line = curve(&[[0., 0.], [1., 1.]]);
    assert_eq!(line.curvature_at(0.5, &line.hodograph_at(0.5)), 0.);

    let arc = curve(&[[1., 0.], [1.5, 1.], [2., 0.]]);
    let tangent = arc.hodograph_at(0.5);
    assert_relative_eq!(tangent, Vector2::new(1., 0.));
    assert_relative_eq!(arc.curvature_at(0.5, &tangent), -4.);

    let reversed = arc.inverse();
    let tangent = reversed.hodograph_at(0.5);
    assert_relative_eq!(tangent, Vector2::new(-1., 0.));
    assert_relative_eq!(reversed.curvature_at(0.5, &tangent), 4.);
}

#[test]
fn test_subdivide_matches_specialize() {
    let cubic = curve(&[[0., 0.], [1., 3.], [2., -1.], [4., 1.]]);
    let (left, right) = cubic.subdivide();
    let expected_left = cubic.specialize(0., 0.5);
    let expected_right = cubic.specialize(0.5, 1.);
    for (a, b) in left.control_points().iter().zip(expected_left.control_points()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
    for (a, b) in right.control_points().iter().zip(expected_right.control_points()) {
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }
    assert_relative_eq!(left.last_point(), right.first_point());
    assert_relative_eq!(left.last_point(), &cubic.point_at(0.5), epsilon = 1e-12);
}

#[test]
fn test_specialize_evaluation() {
    let cubic = curve(&[[0., 0.], [1., 3.], [2., -1.], [4., 1.]]);
    let sub = cubic.specialize(0.25, 0.75);
    for u in [0., 0.3, 0.5, 1.] {
        let expected = cubic.point_at(0.25 + 0.5 * u);
        assert_relative_eq!(sub.point_at(u), expected, epsilon = 1e-12);
    }
}

#[test]
fn test_cast() {
    let quadratic = curve(&[[0., 0.], [0.5, 1.], [1., 0.]]);
    let single = quadratic.cast::<f32>();
    assert_relative_eq!(single.point_at(0.5), Point2::new(0.5f32, 0.5));
}
