//! Error types for graph operations.

use crate::arc::ArcId;
use crate::node::NodeId;

/// Errors that can occur while building or querying a graph.
///
/// # Example
///
/// ```
/// use graph_model::{Graph, GraphError, NodeId};
/// use nalgebra::Point3;
///
/// let mut graph: Graph<()> = Graph::new();
/// let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
/// graph.remove_node(a);
///
/// // A removed handle is no longer a member.
/// let err = graph.add_arc(a, a).unwrap_err();
/// assert!(matches!(err, GraphError::UnknownNode(_)));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// The node handle does not refer to a live member of this graph.
    ///
    /// Raised for handles that were never issued by this graph or whose
    /// node has since been removed.
    #[error("node {0} is not a member of this graph")]
    UnknownNode(NodeId),

    /// The arc handle does not refer to a live member of this graph.
    #[error("arc {0} is not a member of this graph")]
    UnknownArc(ArcId),

    /// Arc weights must be non-negative.
    #[error("arc weight must be non-negative, got {0}")]
    NegativeWeight(f64),

    /// A bounding box cannot be computed over zero nodes.
    #[error("bounding box requires at least one node")]
    NoNodes,
}

impl GraphError {
    /// Returns `true` if this is a stale or foreign handle error.
    #[must_use]
    pub const fn is_unknown_member(&self) -> bool {
        matches!(self, Self::UnknownNode(_) | Self::UnknownArc(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_node_display() {
        let err = GraphError::UnknownNode(NodeId::new(3));
        assert!(err.to_string().contains("node 3"));
        assert!(err.to_string().contains("not a member"));
        assert!(err.is_unknown_member());
    }

    #[test]
    fn unknown_arc_display() {
        let err = GraphError::UnknownArc(ArcId::new(7));
        assert!(err.to_string().contains("arc 7"));
        assert!(err.is_unknown_member());
    }

    #[test]
    fn negative_weight_display() {
        let err = GraphError::NegativeWeight(-2.5);
        assert!(err.to_string().contains("non-negative"));
        assert!(err.to_string().contains("-2.5"));
        assert!(!err.is_unknown_member());
    }

    #[test]
    fn no_nodes_display() {
        let err = GraphError::NoNodes;
        assert!(err.to_string().contains("at least one node"));
    }
}
