//! Heuristic distance functions used to order the search frontier.
//!
//! The actual metrics live in [`graph_model::geometry`]; this module
//! dispatches on the configured [`Heuristic`].
//!
//! # Example
//!
//! ```
//! use graph_astar::{compute_heuristic, Heuristic};
//! use nalgebra::Point3;
//!
//! let from = Point3::new(0.0, 0.0, 0.0);
//! let to = Point3::new(3.0, 4.0, 0.0);
//!
//! let euclidean = compute_heuristic(&from, &to, Heuristic::Euclidean);
//! assert!((euclidean - 5.0).abs() < 1e-10);
//!
//! let manhattan = compute_heuristic(&from, &to, Heuristic::Manhattan);
//! assert!((manhattan - 7.0).abs() < 1e-10);
//! ```

use graph_model::geometry;
use nalgebra::Point3;

use crate::config::Heuristic;

/// Computes the heuristic estimate between two positions.
///
/// Always non-negative. The engine multiplies the result by
/// `1 − balance` before ordering the frontier.
#[must_use]
pub fn compute_heuristic(from: &Point3<f64>, to: &Point3<f64>, heuristic: Heuristic) -> f64 {
    match heuristic {
        Heuristic::Euclidean => geometry::euclidean_distance(from, to),
        Heuristic::Manhattan => geometry::manhattan_distance(from, to),
        Heuristic::Chebyshev => geometry::chebyshev_distance(from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn euclidean_dispatch() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert_relative_eq!(
            compute_heuristic(&a, &b, Heuristic::Euclidean),
            3.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn manhattan_dispatch() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, -4.0, 5.0);
        assert_relative_eq!(
            compute_heuristic(&a, &b, Heuristic::Manhattan),
            12.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn chebyshev_dispatch() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, -4.0, 5.0);
        assert_relative_eq!(
            compute_heuristic(&a, &b, Heuristic::Chebyshev),
            5.0,
            epsilon = 1e-10
        );
    }

    #[test]
    fn all_heuristics_vanish_at_target() {
        let a = Point3::new(7.0, -2.0, 0.5);
        for h in [Heuristic::Euclidean, Heuristic::Manhattan, Heuristic::Chebyshev] {
            assert_relative_eq!(compute_heuristic(&a, &a, h), 0.0, epsilon = 1e-10);
        }
    }
}
