//! Graph vertices embedded in 3D space.
//!
//! A [`Node`] carries a world position, a passability flag, an optional
//! user payload, and its adjacency as lists of [`ArcId`] handles. Nodes are
//! owned by a [`Graph`](crate::Graph); handles stay stable for the life of
//! the graph.

use std::fmt;

use nalgebra::Point3;

use crate::arc::ArcId;
use crate::error::GraphError;
use crate::geometry::{self, Aabb};

/// Stable handle to a node inside a [`Graph`](crate::Graph).
///
/// Handle equality is identity: two handles compare equal iff they refer to
/// the same graph slot. Geometric equality is a separate notion, exposed
/// through [`Node::same_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex in 3D space with adjacency lists and an optional payload.
///
/// The payload type `S` is opaque to the library: it is stored at
/// construction and returned by reference, nothing more.
///
/// # Example
///
/// ```
/// use graph_model::Node;
/// use nalgebra::Point3;
///
/// let node = Node::with_payload(Point3::new(1.0, 2.0, 3.0), "antenna");
/// assert_eq!(node.payload(), Some(&"antenna"));
/// assert!(node.is_passable());
/// assert!(node.outgoing_arcs().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Node<S> {
    position: Point3<f64>,
    passable: bool,
    payload: Option<S>,
    pub(crate) incoming: Vec<ArcId>,
    pub(crate) outgoing: Vec<ArcId>,
}

impl<S> Node<S> {
    /// Creates a detached node at the given position, passable, no payload.
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            passable: true,
            payload: None,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Creates a detached node carrying a payload.
    #[must_use]
    pub const fn with_payload(position: Point3<f64>, payload: S) -> Self {
        Self {
            position,
            passable: true,
            payload: Some(payload),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Returns the node's position.
    #[must_use]
    pub const fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Returns whether the node may be traversed by a search.
    #[must_use]
    pub const fn is_passable(&self) -> bool {
        self.passable
    }

    /// Returns the payload, if one was set at construction.
    #[must_use]
    pub const fn payload(&self) -> Option<&S> {
        self.payload.as_ref()
    }

    /// Arcs ending at this node, in insertion order.
    #[must_use]
    pub fn incoming_arcs(&self) -> &[ArcId] {
        &self.incoming
    }

    /// Arcs starting at this node, in insertion order.
    #[must_use]
    pub fn outgoing_arcs(&self) -> &[ArcId] {
        &self.outgoing
    }

    /// Exact coordinate equality with another node.
    ///
    /// This is the geometric notion of equality; handle identity is
    /// [`NodeId`] equality.
    #[must_use]
    pub fn same_position(&self, other: &Self) -> bool {
        self.position == other.position
    }

    /// Euclidean distance to another node.
    ///
    /// Symmetric, non-negative, and zero iff the positions are equal.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        geometry::euclidean_distance(&self.position, &other.position)
    }

    /// Squared Euclidean distance to another node.
    #[must_use]
    pub fn squared_distance_to(&self, other: &Self) -> f64 {
        geometry::squared_euclidean_distance(&self.position, &other.position)
    }

    /// Manhattan distance to another node.
    #[must_use]
    pub fn manhattan_distance_to(&self, other: &Self) -> f64 {
        geometry::manhattan_distance(&self.position, &other.position)
    }

    /// Chebyshev (max-along-axis) distance to another node.
    #[must_use]
    pub fn chebyshev_distance_to(&self, other: &Self) -> f64 {
        geometry::chebyshev_distance(&self.position, &other.position)
    }

    pub(crate) fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
    }

    pub(crate) fn set_passable(&mut self, passable: bool) {
        self.passable = passable;
    }
}

/// Computes the bounding box of a collection of nodes.
///
/// # Errors
///
/// Returns [`GraphError::NoNodes`] if the collection is empty.
///
/// # Example
///
/// ```
/// use graph_model::{node, Node};
/// use nalgebra::Point3;
///
/// let nodes: Vec<Node<()>> = vec![
///     Node::new(Point3::new(0.0, 0.0, 0.0)),
///     Node::new(Point3::new(2.0, -1.0, 4.0)),
/// ];
///
/// let aabb = node::bounding_box(&nodes).unwrap();
/// assert_eq!(aabb.min, Point3::new(0.0, -1.0, 0.0));
/// assert_eq!(aabb.max, Point3::new(2.0, 0.0, 4.0));
/// ```
pub fn bounding_box<'a, S: 'a>(
    nodes: impl IntoIterator<Item = &'a Node<S>>,
) -> Result<Aabb, GraphError> {
    let mut iter = nodes.into_iter();
    let first = iter.next().ok_or(GraphError::NoNodes)?;
    let mut aabb = Aabb::from_point(first.position());
    for node in iter {
        aabb.expand_to(&node.position());
    }
    Ok(aabb)
}
