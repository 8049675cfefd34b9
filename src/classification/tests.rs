use nalgebra::Point2;

use crate::prelude::*;

fn curve(points: &[[f64; 2]]) -> BezierCurve2D<f64> {
    BezierCurve2D::try_new(points.iter().map(|p| Point2::new(p[0], p[1])).collect()).unwrap()
}

fn triangle(points: &[[f64; 2]; 3]) -> [BezierCurve2D<f64>; 3] {
    BezierSurface::try_new(points.iter().map(|p| Point2::new(p[0], p[1])).collect(), 1)
        .unwrap()
        .edges()
}

fn classify(
    intersection: &Intersection<f64>,
    first: &BezierCurve2D<f64>,
    second: &BezierCurve2D<f64>,
) -> Result<IntersectionClassification> {
    classify_intersection(
        intersection,
        std::slice::from_ref(first),
        std::slice::from_ref(second),
    )
}

#[test]
fn test_crossing() {
    let curve1 = curve(&[[1., 0.], [1.75, 0.25], [2., 1.]]);
    let curve2 = curve(&[[0., 0.], [1.6875, 0.0625], [2., 0.5]]);

    let intersection = Intersection::new(0, 0.25, 0, 0.5);
    assert_eq!(
        classify(&intersection, &curve1, &curve2),
        Ok(IntersectionClassification::First)
    );

    let swapped = Intersection::new(0, 0.5, 0, 0.25);
    assert_eq!(
        classify(&swapped, &curve2, &curve1),
        Ok(IntersectionClassification::Second)
    );
}

#[test]
fn test_edge_end() {
    let curve1 = curve(&[[0., 0.], [1., 1.]]);
    let curve2 = curve(&[[1., 1.], [2., 0.]]);
    let intersection = Intersection::new(0, 1., 0, 0.);
    assert_eq!(
        classify(&intersection, &curve1, &curve2),
        Err(IntersectionError::EdgeEnd { s: 1., t: 0. })
    );
}

#[test]
fn test_edge_out_of_range() {
    let line = curve(&[[0., 0.], [1., 1.]]);
    let intersection = Intersection::new(3, 0.5, 0, 0.5);
    assert_eq!(
        classify(&intersection, &line, &line),
        Err(IntersectionError::EdgeIndexOutOfRange { index: 3, count: 1 })
    );
}

#[test]
fn test_tangent_same_direction() {
    // both bend downward through (1, 1), the first one more sharply
    let sharp = curve(&[[0., 0.], [1., 2.], [2., 0.]]);
    let flat = curve(&[[0., 0.5], [1., 1.5], [2., 0.5]]);
    let intersection = Intersection::new(0, 0.5, 0, 0.5);

    assert_eq!(
        classify(&intersection, &sharp, &flat),
        Ok(IntersectionClassification::TangentSecond)
    );
    assert_eq!(
        classify(&intersection, &flat, &sharp),
        Ok(IntersectionClassification::TangentFirst)
    );
    assert_eq!(
        classify(&intersection, &sharp, &sharp),
        Err(IntersectionError::SameCurvature { s: 0.5, t: 0.5 })
    );
}

#[test]
fn test_tangent_opposite_direction() {
    let intersection = Intersection::new(0, 0.5, 0, 0.5);

    // curvatures +2 and +2
    let left = curve(&[[2., 0.], [1., 2.], [0., 0.]]);
    let right = curve(&[[0., 2.], [1., 0.], [2., 2.]]);
    assert_eq!(
        classify(&intersection, &left, &right),
        Ok(IntersectionClassification::Opposed)
    );

    // curvatures -2 and -2
    let right = curve(&[[0., 0.], [1., 2.], [2., 0.]]);
    let left = curve(&[[2., 2.], [1., 0.], [0., 2.]]);
    assert_eq!(
        classify(&intersection, &right, &left),
        Err(IntersectionError::BadTangent { s: 0.5, t: 0.5 })
    );
}

#[test]
fn test_tangent_opposite_mixed_curvature() {
    let intersection = Intersection::new(0, 0.5, 0, 0.5);

    // curvatures +2 and -1
    let left = curve(&[[2., 0.], [1., 2.], [0., 0.]]);
    let right = curve(&[[0., 0.5], [1., 1.5], [2., 0.5]]);
    assert_eq!(
        classify(&intersection, &left, &right),
        Ok(IntersectionClassification::Opposed)
    );

    // curvatures +1 and -2
    let left = curve(&[[2., 0.5], [1., 1.5], [0., 0.5]]);
    let right = curve(&[[0., 0.], [1., 2.], [2., 0.]]);
    assert_eq!(
        classify(&intersection, &left, &right),
        Err(IntersectionError::BadTangent { s: 0.5, t: 0.5 })
    );

    // curvatures +2 and -2
    let left = curve(&[[2., 0.], [1., 2.], [0., 0.]]);
    assert_eq!(
        classify(&intersection, &left, &right),
        Err(IntersectionError::SameCurvature { s: 0.5, t: 0.5 })
    );
}

#[test]
fn test_corner_on_edge() {
    let edges1 = triangle(&[[0., 0.], [1., 0.], [0., 1.]]);
    // the third edge passes through (1, 0) and enters the first surface
    let edges2 = triangle(&[[2., -0.5], [2., 1.], [0., 0.5]]);
    let intersection = Intersection::new(1, 0., 2, 0.5);
    assert_eq!(
        classify_intersection(&intersection, &edges1, &edges2),
        Ok(IntersectionClassification::First)
    );
}

#[test]
fn test_corner_touching_edge() {
    let edges1 = triangle(&[[0., 0.], [1., 0.], [0., 1.]]);
    // the third edge is x = 1 and the second surface lies to its right
    let edges2 = triangle(&[[1., -1.], [2., 0.], [1., 1.]]);
    let intersection = Intersection::new(1, 0., 2, 0.5);
    assert_eq!(
        classify_intersection(&intersection, &edges1, &edges2),
        Ok(IntersectionClassification::IgnoredCorner)
    );
    assert_eq!(
        ignored_corner(
            &intersection,
            &edges1[1].hodograph_at(0.),
            &edges2[2].hodograph_at(0.5),
            &edges1,
            &edges2
        ),
        Ok(true)
    );
}

#[test]
fn test_double_corner() {
    let edges1 = triangle(&[[0., 0.], [1., 0.], [0., 1.]]);
    let intersection = Intersection::new(0, 0., 0, 0.);

    // opposite quadrants only share the corner
    let outside = triangle(&[[0., 0.], [-1., 0.], [0., -1.]]);
    assert_eq!(
        classify_intersection(&intersection, &edges1, &outside),
        Ok(IntersectionClassification::IgnoredCorner)
    );

    // the first edge of the second surface points into the first one
    let inside = triangle(&[[0., 0.], [2., 1.], [1., 2.]]);
    assert_eq!(
        classify_intersection(&intersection, &edges1, &inside),
        Ok(IntersectionClassification::Second)
    );
}

#[test]
fn test_classification_interior() {
    assert!(IntersectionClassification::First.is_interior());
    assert!(IntersectionClassification::Second.is_interior());
    assert!(!IntersectionClassification::Opposed.is_interior());
    assert!(!IntersectionClassification::IgnoredCorner.is_interior());

    let intersection = Intersection::new(0, 0.5, 1, 0.5);
    assert!(!intersection.is_interior());
    assert!(intersection
        .with_classification(IntersectionClassification::Second)
        .is_interior());
}
