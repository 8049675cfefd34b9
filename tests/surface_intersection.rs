use approx::assert_relative_eq;
use bezier_intersection::prelude::*;
use nalgebra::Point2;

fn surface(points: &[[f64; 2]], degree: usize) -> BezierSurface<f64> {
    BezierSurface::try_new(points.iter().map(|p| Point2::new(p[0], p[1])).collect(), degree).unwrap()
}

fn strategies() -> Vec<Box<dyn IntersectionStrategy<f64>>> {
    vec![
        Box::new(GeometricIntersection::default()),
        Box::new(ArenaIntersection::default()),
    ]
}

/// Start points of the region's edges, rotated to begin at the one closest to `first`.
fn corners(region: &IntersectionRegion<f64>, first: &Point2<f64>) -> Vec<Point2<f64>> {
    let mut points: Vec<_> = region.edges().iter().map(|e| *e.first_point()).collect();
    let start = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| (*a - first).norm().total_cmp(&(*b - first).norm()))
        .map(|(i, _)| i)
        .unwrap();
    points.rotate_left(start);
    points
}

#[test]
fn overlapping_triangles() {
    let surface1 = surface(&[[0., 0.], [2., 0.], [0., 2.]], 1);
    let surface2 = surface(&[[0.5, 0.5], [3., 0.5], [0.5, 3.]], 1);

    for strategy in strategies() {
        let regions = surface1.intersect(&surface2, strategy.as_ref()).unwrap();
        assert_eq!(regions.len(), 1);
        let polygon = regions[0].as_curved_polygon().unwrap();
        assert_eq!(polygon.num_sides(), 3);

        let expected = [[0.5, 0.5], [1.5, 0.5], [0.5, 1.5]];
        let actual = corners(&regions[0], &Point2::new(0.5, 0.5));
        for (a, e) in actual.iter().zip(expected) {
            assert_relative_eq!(a.x, e[0], epsilon = 1e-12);
            assert_relative_eq!(a.y, e[1], epsilon = 1e-12);
        }
    }
}

#[test]
fn curved_edge_cuts_corner() {
    let surface1 = surface(
        &[[0., 0.], [1., 0.], [2., 0.], [0., 1.], [1.5, 1.5], [0., 2.]],
        2,
    );
    let surface2 = surface(&[[0.5, 0.5], [3., 0.5], [0.5, 3.]], 1);

    // the curved edge y = 3s - s^2 meets y = 0.5 and x = 0.5
    let sqrt7 = 7f64.sqrt();
    let (low, high) = ((3. - sqrt7) / 2., (sqrt7 - 1.) / 2.);
    let expected = [
        Point2::new(0.5, 0.5),
        Point2::new(2. - low - low * low, 0.5),
        Point2::new(0.5, 3. * high - high * high),
    ];

    for strategy in strategies() {
        let regions = surface1.intersect(&surface2, strategy.as_ref()).unwrap();
        assert_eq!(regions.len(), 1);
        let polygon = regions[0].as_curved_polygon().unwrap();
        assert_eq!(polygon.num_sides(), 3);
        assert!(CurvedPolygon::try_new(polygon.edges().to_vec()).is_ok());

        let actual = corners(&regions[0], &expected[0]);
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(*a, *e, epsilon = 1e-12);
        }
    }
}

/// Area enclosed by regions bounded by straight edges.
fn area(regions: &[IntersectionRegion<f64>]) -> f64 {
    regions
        .iter()
        .map(|region| {
            let points: Vec<_> = region.edges().iter().map(|e| *e.first_point()).collect();
            let twice: f64 = points
                .iter()
                .zip(points.iter().cycle().skip(1))
                .map(|(a, b)| a.x * b.y - b.x * a.y)
                .sum();
            twice / 2.
        })
        .sum()
}

#[test]
fn corner_on_axis_aligned_edge() {
    // the corner (1, 0) of the second triangle lies inside the bottom edge of the first
    let surface1 = surface(&[[0., 0.], [2., 0.], [0., 2.]], 1);
    let surface2 = surface(&[[1., 0.], [2., 1.], [0.5, 1.25]], 1);

    for strategy in strategies() {
        let regions = surface1.intersect(&surface2, strategy.as_ref()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_relative_eq!(area(&regions), 21. / 40., epsilon = 1e-12);
    }
}

#[test]
fn corners_on_edges_of_each_other() {
    // (0.5, 1) lies on the horizontal edge of the first triangle,
    // (1.25, 1) lies on the last edge of the second
    let surface1 = surface(&[[1.25, 1.25], [0.25, 1.], [1.25, 1.]], 1);
    let surface2 = surface(&[[0.25, 2.], [0.5, 1.], [1.5, 0.75]], 1);

    for strategy in strategies() {
        let regions = surface1.intersect(&surface2, strategy.as_ref()).unwrap();
        assert_eq!(regions.len(), 1);
        assert_relative_eq!(area(&regions), 63. / 680., epsilon = 1e-12);
    }
}

#[test]
fn contained_surface() {
    let outer = surface(&[[0., 0.], [1., 0.], [0., 1.]], 1);
    let inner = surface(&[[0.1, 0.1], [0.3, 0.1], [0.1, 0.3]], 1);

    for strategy in strategies() {
        assert_eq!(
            outer.intersect(&inner, strategy.as_ref()),
            Ok(vec![IntersectionRegion::Surface(inner.clone())])
        );
        assert_eq!(
            inner.intersect(&outer, strategy.as_ref()),
            Ok(vec![IntersectionRegion::Surface(inner.clone())])
        );
    }
}

#[test]
fn disjoint_surfaces() {
    let surface1 = surface(&[[0., 0.], [1., 0.], [0., 1.]], 1);
    let surface2 = surface(&[[5., 5.], [6., 5.], [5., 6.]], 1);
    for strategy in strategies() {
        assert_eq!(surface1.intersect(&surface2, strategy.as_ref()), Ok(vec![]));
    }
}

#[test]
fn identical_surfaces_fail() {
    let surface1 = surface(&[[0., 0.], [1., 0.], [0., 1.]], 1);
    for strategy in strategies() {
        assert_eq!(
            surface1.intersect(&surface1, strategy.as_ref()),
            Err(IntersectionError::SegmentsParallel)
        );
    }
}

#[test]
fn find_intersection_matches_intersect() {
    let surface1 = surface(&[[0., 0.], [2., 0.], [0., 2.]], 1);
    let surface2 = surface(&[[0.5, 0.5], [3., 0.5], [0.5, 3.]], 1);
    let strategy = ArenaIntersection::default();
    assert_eq!(
        surface1.find_intersection(&surface2, &strategy),
        surface1.intersect(&surface2, &strategy)
    );
}
