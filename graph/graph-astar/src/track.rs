//! Search records: back-linked path prefixes.
//!
//! A [`Track`] describes one way of reaching a node from the start of the
//! search: its end node, the arc taken last, a shared link to the parent
//! track one arc shorter, and the cumulative cost. The engine keeps tracks
//! alive through `Rc` links for as long as the frontier or any descendant
//! references them; when the search ends, only the chain reachable from
//! the winning track still matters.

use std::rc::Rc;

use graph_model::{ArcId, NodeId};

/// A path prefix from the search start to some frontier node.
#[derive(Debug)]
pub struct Track {
    end: NodeId,
    via: Option<ArcId>,
    parent: Option<Rc<Track>>,
    cost: f64,
    arcs_visited: usize,
}

impl Track {
    /// Creates the start track: zero cost, no parent.
    #[must_use]
    pub const fn start(end: NodeId) -> Self {
        Self {
            end,
            via: None,
            parent: None,
            cost: 0.0,
            arcs_visited: 0,
        }
    }

    /// Extends a track by one arc to a new end node.
    ///
    /// `cost` is the cumulative cost of the extended prefix, not the arc
    /// increment.
    #[must_use]
    pub fn extend(parent: &Rc<Self>, via: ArcId, end: NodeId, cost: f64) -> Self {
        Self {
            end,
            via: Some(via),
            parent: Some(Rc::clone(parent)),
            cost,
            arcs_visited: parent.arcs_visited + 1,
        }
    }

    /// Returns the node this track terminates at.
    #[must_use]
    pub const fn end(&self) -> NodeId {
        self.end
    }

    /// Returns the arc traversed last, or `None` for the start track.
    #[must_use]
    pub const fn via(&self) -> Option<ArcId> {
        self.via
    }

    /// Returns the parent track, one arc shorter.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Returns the cumulative cost from the start.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the number of arcs in this prefix (0 for the start track).
    #[must_use]
    pub const fn arcs_visited(&self) -> usize {
        self.arcs_visited
    }

    /// Frontier deduplication relation: two tracks are equivalent iff they
    /// terminate at the same node.
    #[must_use]
    pub fn shares_end_with(&self, other: &Self) -> bool {
        self.end == other.end
    }

    /// Walks the back-chain and returns the node sequence from the start.
    #[must_use]
    pub fn node_sequence(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.arcs_visited + 1);
        let mut current = Some(self);
        while let Some(track) = current {
            nodes.push(track.end);
            current = track.parent.as_deref();
        }
        nodes.reverse();
        nodes
    }

    /// Walks the back-chain and returns the arc sequence from the start.
    #[must_use]
    pub fn arc_sequence(&self) -> Vec<ArcId> {
        let mut arcs = Vec::with_capacity(self.arcs_visited);
        let mut current = Some(self);
        while let Some(track) = current {
            if let Some(via) = track.via {
                arcs.push(via);
            }
            current = track.parent.as_deref();
        }
        arcs.reverse();
        arcs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_model::Graph;
    use nalgebra::Point3;

    fn ids() -> (NodeId, NodeId, NodeId, ArcId, ArcId) {
        let mut graph: Graph<()> = Graph::new();
        let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
        let b = graph.add_node_at(Point3::new(1.0, 0.0, 0.0));
        let c = graph.add_node_at(Point3::new(2.0, 0.0, 0.0));
        let ab = graph.add_arc(a, b).unwrap();
        let bc = graph.add_arc(b, c).unwrap();
        (a, b, c, ab, bc)
    }

    #[test]
    fn start_track() {
        let (a, ..) = ids();
        let track = Track::start(a);
        assert_eq!(track.end(), a);
        assert_eq!(track.cost(), 0.0);
        assert_eq!(track.arcs_visited(), 0);
        assert!(track.via().is_none());
        assert!(track.parent().is_none());
    }

    #[test]
    fn extension_accumulates() {
        let (a, b, c, ab, bc) = ids();
        let start = Rc::new(Track::start(a));
        let middle = Rc::new(Track::extend(&start, ab, b, 1.0));
        let leaf = Track::extend(&middle, bc, c, 2.5);

        assert_eq!(leaf.end(), c);
        assert_eq!(leaf.cost(), 2.5);
        assert_eq!(leaf.arcs_visited(), 2);
        assert_eq!(leaf.via(), Some(bc));
    }

    #[test]
    fn sequences_run_start_to_end() {
        let (a, b, c, ab, bc) = ids();
        let start = Rc::new(Track::start(a));
        let middle = Rc::new(Track::extend(&start, ab, b, 1.0));
        let leaf = Track::extend(&middle, bc, c, 2.0);

        assert_eq!(leaf.node_sequence(), vec![a, b, c]);
        assert_eq!(leaf.arc_sequence(), vec![ab, bc]);
        assert_eq!(start.node_sequence(), vec![a]);
        assert!(start.arc_sequence().is_empty());
    }

    #[test]
    fn same_end_equivalence() {
        let (a, b, _, ab, _) = ids();
        let start = Rc::new(Track::start(a));
        let one = Track::extend(&start, ab, b, 1.0);
        let other = Track::extend(&start, ab, b, 4.0);
        assert!(one.shares_end_with(&other));
        assert!(!one.shares_end_with(&start));
    }
}
