//! Property-based tests for the geometric helpers.
//!
//! These tests generate random points and verify metric and projection
//! invariants.

use graph_model::geometry::{
    chebyshev_distance, euclidean_distance, manhattan_distance, project_on_line, Aabb,
};
use nalgebra::Point3;
use proptest::prelude::*;

/// Generate a random point in a bounded range.
fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

proptest! {
    #[test]
    fn distances_are_non_negative(a in arb_point(), b in arb_point()) {
        prop_assert!(euclidean_distance(&a, &b) >= 0.0);
        prop_assert!(manhattan_distance(&a, &b) >= 0.0);
        prop_assert!(chebyshev_distance(&a, &b) >= 0.0);
    }

    #[test]
    fn distances_are_symmetric(a in arb_point(), b in arb_point()) {
        prop_assert!((euclidean_distance(&a, &b) - euclidean_distance(&b, &a)).abs() < 1e-9);
        prop_assert!((manhattan_distance(&a, &b) - manhattan_distance(&b, &a)).abs() < 1e-9);
        prop_assert!((chebyshev_distance(&a, &b) - chebyshev_distance(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn distance_to_self_is_zero(a in arb_point()) {
        prop_assert!(euclidean_distance(&a, &a).abs() < 1e-12);
    }

    /// The three norms are ordered: chebyshev ≤ euclidean ≤ manhattan.
    #[test]
    fn norm_ordering(a in arb_point(), b in arb_point()) {
        let euclidean = euclidean_distance(&a, &b);
        prop_assert!(chebyshev_distance(&a, &b) <= euclidean + 1e-9);
        prop_assert!(euclidean <= manhattan_distance(&a, &b) + 1e-9);
    }

    /// The projection foot is collinear with the line and its offset from
    /// the query point is perpendicular to the line direction.
    #[test]
    fn projection_is_perpendicular(p in arb_point(), a in arb_point(), b in arb_point()) {
        let foot = project_on_line(&p, &a, &b);
        let direction = b - a;
        if direction.norm_squared() == 0.0 {
            // Degenerate line: either endpoint is returned.
            prop_assert!((foot - a).norm() == 0.0);
        } else {
            let offset = p - foot;
            // Scale-insensitive perpendicularity check.
            let dot = offset.dot(&direction.normalize());
            prop_assert!(dot.abs() < 1e-5);
        }
    }

    /// Projecting the foot again is a fixed point.
    #[test]
    fn projection_is_idempotent(p in arb_point(), a in arb_point(), b in arb_point()) {
        let foot = project_on_line(&p, &a, &b);
        let again = project_on_line(&foot, &a, &b);
        prop_assert!((foot - again).norm() < 1e-6);
    }

    #[test]
    fn aabb_contains_both_corners(a in arb_point(), b in arb_point()) {
        let aabb = Aabb::new(a, b);
        prop_assert!(aabb.contains(&a));
        prop_assert!(aabb.contains(&b));
        prop_assert!(aabb.contains(&aabb.center()));
    }

    #[test]
    fn aabb_expand_contains_new_point(a in arb_point(), b in arb_point(), p in arb_point()) {
        let mut aabb = Aabb::new(a, b);
        aabb.expand_to(&p);
        prop_assert!(aabb.contains(&p));
        prop_assert!(aabb.contains(&a));
    }
}
