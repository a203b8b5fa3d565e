//! Geometric helpers shared by the graph model.
//!
//! Distances over [`Point3`] pairs, projection onto an infinite line, and an
//! axis-aligned bounding box. The search crate's heuristics delegate to the
//! distance family defined here.
//!
//! # Example
//!
//! ```
//! use graph_model::geometry::{euclidean_distance, manhattan_distance};
//! use nalgebra::Point3;
//!
//! let a = Point3::new(0.0, 0.0, 0.0);
//! let b = Point3::new(3.0, 4.0, 0.0);
//!
//! assert!((euclidean_distance(&a, &b) - 5.0).abs() < 1e-10);
//! assert!((manhattan_distance(&a, &b) - 7.0).abs() < 1e-10);
//! ```

use nalgebra::Point3;

/// Euclidean distance (L2 norm) between two points.
///
/// # Example
///
/// ```
/// use graph_model::geometry::euclidean_distance;
/// use nalgebra::Point3;
///
/// let d = euclidean_distance(&Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 2.0, 2.0));
/// assert!((d - 3.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn euclidean_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance(a, b)
}

/// Squared Euclidean distance between two points.
///
/// Avoids the square root when only relative ordering matters.
#[must_use]
pub fn squared_euclidean_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    nalgebra::distance_squared(a, b)
}

/// Manhattan distance (L1 norm): |dx| + |dy| + |dz|.
#[must_use]
pub fn manhattan_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs()
}

/// Chebyshev distance (L-infinity norm): max(|dx|, |dy|, |dz|).
#[must_use]
pub fn chebyshev_distance(a: &Point3<f64>, b: &Point3<f64>) -> f64 {
    (a.x - b.x)
        .abs()
        .max((a.y - b.y).abs())
        .max((a.z - b.z).abs())
}

/// Projects a point onto the infinite line through `a` and `b`.
///
/// Returns the foot of the perpendicular from `point` to the line. The foot
/// may lie outside the segment `[a, b]`. When `a` and `b` coincide the line
/// is degenerate and `a` is returned.
///
/// # Example
///
/// ```
/// use graph_model::geometry::project_on_line;
/// use nalgebra::Point3;
///
/// let a = Point3::new(0.0, 0.0, 0.0);
/// let b = Point3::new(10.0, 0.0, 0.0);
/// let p = Point3::new(3.0, 4.0, 0.0);
///
/// let foot = project_on_line(&p, &a, &b);
/// assert!((foot - Point3::new(3.0, 0.0, 0.0)).norm() < 1e-10);
/// ```
#[must_use]
pub fn project_on_line(point: &Point3<f64>, a: &Point3<f64>, b: &Point3<f64>) -> Point3<f64> {
    let direction = b - a;
    let denominator = direction.norm_squared();
    if denominator == 0.0 {
        return *a;
    }
    let t = (point - a).dot(&direction) / denominator;
    a + direction * t
}

/// An axis-aligned bounding box in world space.
///
/// Both corners are inclusive.
///
/// # Example
///
/// ```
/// use graph_model::geometry::Aabb;
/// use nalgebra::Point3;
///
/// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 2.0));
/// assert!(aabb.contains(&Point3::new(1.0, 1.0, 1.0)));
/// assert!(!aabb.contains(&Point3::new(3.0, 1.0, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3<f64>,
    /// Maximum corner.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Creates a bounding box from two corners.
    ///
    /// The corners are automatically ordered so `min ≤ max` on each axis.
    ///
    /// # Example
    ///
    /// ```
    /// use graph_model::geometry::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let aabb = Aabb::new(Point3::new(5.0, 0.0, 5.0), Point3::new(0.0, 5.0, 0.0));
    /// assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
    /// assert_eq!(aabb.max, Point3::new(5.0, 5.0, 5.0));
    /// ```
    #[must_use]
    pub fn new(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates a bounding box containing a single point.
    #[must_use]
    pub const fn from_point(point: Point3<f64>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Checks whether the box contains a point (inclusive on both corners).
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Expands the box to include a point.
    ///
    /// # Example
    ///
    /// ```
    /// use graph_model::geometry::Aabb;
    /// use nalgebra::Point3;
    ///
    /// let mut aabb = Aabb::from_point(Point3::new(1.0, 1.0, 1.0));
    /// aabb.expand_to(&Point3::new(-1.0, 4.0, 1.0));
    /// assert_eq!(aabb.min, Point3::new(-1.0, 1.0, 1.0));
    /// assert_eq!(aabb.max, Point3::new(1.0, 4.0, 1.0));
    /// ```
    pub fn expand_to(&mut self, point: &Point3<f64>) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }
}
