//! Data model for directed graphs embedded in 3D Euclidean space.
//!
//! This crate provides the foundational types for spatial graphs: nodes
//! with world positions and payloads, weighted directed arcs with cached
//! geometric lengths, and the [`Graph`] arena that owns both and keeps
//! adjacency symmetric.
//!
//! # Overview
//!
//! - **Nodes** ([`Node`], [`NodeId`]): vertices in 3D space carrying a
//!   passability flag, an opaque payload, and adjacency lists.
//! - **Arcs** ([`Arc`], [`ArcId`]): directed edges with a non-negative
//!   weight and a lazily cached Euclidean length; the traversal cost is
//!   `weight × length`.
//! - **Graph** ([`Graph`]): the owning container, with membership
//!   management, cascade setters, and spatial queries (closest node,
//!   closest arc, bounding box).
//! - **Geometry** ([`geometry`]): the distance family, line projection,
//!   and [`geometry::Aabb`].
//!
//! # Example
//!
//! ```
//! use graph_model::Graph;
//! use nalgebra::Point3;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node_at(Point3::new(3.0, 4.0, 0.0));
//! let ab = graph.add_arc_weighted(a, b, 2.0).unwrap();
//!
//! // Cost is weight × Euclidean length.
//! assert!((graph.arc_cost(ab).unwrap() - 10.0).abs() < 1e-10);
//!
//! // Moving an endpoint invalidates the cached length.
//! graph.set_position(b, Point3::new(0.0, 0.0, 1.0)).unwrap();
//! assert!((graph.arc_cost(ab).unwrap() - 2.0).abs() < 1e-10);
//! ```
//!
//! # Handles, not references
//!
//! Nodes and arcs refer to each other by [`NodeId`] / [`ArcId`] handles
//! into the graph's arena, which keeps the bidirectional node↔arc
//! relationship free of ownership cycles. Handles are stable: removal
//! tombstones the slot and never shifts surviving members, so iteration
//! follows insertion order and a stale handle can never alias a different
//! member.
//!
//! # Feature Flags
//!
//! - `serde`: serialization for the small value types (handles,
//!   [`geometry::Aabb`]).

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod arc;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod node;

pub use arc::{Arc, ArcId};
pub use error::GraphError;
pub use geometry::Aabb;
pub use graph::Graph;
pub use node::{Node, NodeId};
