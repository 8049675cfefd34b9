use nalgebra::{Point2, Vector2};

use super::*;
use crate::misc::FloatingPoint;

fn unit_square() -> Vec<Point2<f64>> {
    vec![
        Point2::new(0., 0.),
        Point2::new(1., 0.),
        Point2::new(1., 1.),
        Point2::new(0., 1.),
    ]
}

fn shifted(nodes: &[Point2<f64>], dx: f64, dy: f64) -> Vec<Point2<f64>> {
    nodes.iter().map(|p| p + Vector2::new(dx, dy)).collect()
}

#[test]
fn test_bbox_classification() {
    let square = unit_square();
    let cases = [
        ((0.5, 0.5), BoxIntersection::Intersection),
        ((100., 100.), BoxIntersection::Disjoint),
        ((1., 2.), BoxIntersection::Disjoint),
        ((1., 0.), BoxIntersection::Tangent),
        ((1. + 1f64.spacing(), 0.), BoxIntersection::Disjoint),
    ];
    for ((dx, dy), expected) in cases {
        let other = shifted(&square, dx, dy);
        assert_eq!(bbox_intersect(&square, &other), expected);
        assert_eq!(bbox_intersect(&other, &square), expected);
    }
}

#[test]
fn test_bbox_corner_touch_is_tangent() {
    let square = unit_square();
    let other = shifted(&square, 1., 1.);
    assert_eq!(bbox_intersect(&square, &other), BoxIntersection::Tangent);
}

#[test]
fn test_bbox_line_intersect() {
    let square = unit_square();
    let cases = [
        // start inside
        ((0.5, 0.5), (0.5, 1.5), BoxIntersection::Intersection),
        // end inside
        ((-1., 0.5), (0.5, 0.5), BoxIntersection::Intersection),
        // through bottom
        ((0.5, -0.5), (0.5, 1.5), BoxIntersection::Intersection),
        // through right
        ((-0.5, 0.5), (1.5, 0.5), BoxIntersection::Intersection),
        // through top
        ((-0.25, 0.5), (0.5, 1.25), BoxIntersection::Intersection),
        ((2., 2.), (2., 5.), BoxIntersection::Disjoint),
    ];
    for ((x0, y0), (x1, y1), expected) in cases {
        let result = bbox_line_intersect(&square, &Point2::new(x0, y0), &Point2::new(x1, y1));
        assert_eq!(result, expected);
    }
}

#[test]
fn test_bounding_box_from_points() {
    let bb = BoundingBox::from_points(&shifted(&unit_square(), -2., 3.)).unwrap();
    assert_eq!(bb.min(), &Vector2::new(-2., 3.));
    assert_eq!(bb.max(), &Vector2::new(-1., 4.));
    assert!(BoundingBox::<f64, nalgebra::Const<2>>::from_points(&[]).is_none());
}
