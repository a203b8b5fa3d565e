//! The arena container that owns nodes and arcs.
//!
//! A [`Graph`] stores its nodes and arcs in tombstoned slot vectors:
//! handles stay stable for the life of the graph, iteration follows
//! insertion order, and removal never shifts surviving members. Adjacency
//! is kept symmetric by construction — an arc is inserted into its start
//! node's outgoing list and its end node's incoming list in the same
//! operation, and removal sweeps both.
//!
//! # Example
//!
//! ```
//! use graph_model::Graph;
//! use nalgebra::Point3;
//!
//! let mut graph: Graph<()> = Graph::new();
//! let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node_at(Point3::new(1.0, 0.0, 0.0));
//! let ab = graph.add_arc(a, b).unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert!((graph.arc_cost(ab).unwrap() - 1.0).abs() < 1e-10);
//! ```

use nalgebra::Point3;

use crate::arc::{Arc, ArcId};
use crate::error::GraphError;
use crate::geometry::{self, Aabb};
use crate::node::{self, Node, NodeId};

/// A directed graph embedded in 3D Euclidean space.
///
/// The graph exclusively owns its nodes and arcs; callers refer to them by
/// [`NodeId`] / [`ArcId`] handles. Mutations that touch graph-wide
/// invariants — moving a node, toggling passability, changing a weight —
/// go through the graph so that cached arc lengths are invalidated and
/// passability cascades are applied.
#[derive(Debug, Clone)]
pub struct Graph<S> {
    nodes: Vec<Option<Node<S>>>,
    arcs: Vec<Option<Arc>>,
    live_nodes: usize,
    live_arcs: usize,
}

impl<S> Default for Graph<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Graph<S> {
    /// Creates an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            arcs: Vec::new(),
            live_nodes: 0,
            live_arcs: 0,
        }
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Returns the number of live arcs.
    #[must_use]
    pub const fn arc_count(&self) -> usize {
        self.live_arcs
    }

    /// Returns `true` if the graph has no live nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Looks up a node by handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<S>> {
        self.nodes.get(id.index()).and_then(Option::as_ref)
    }

    /// Looks up an arc by handle.
    #[must_use]
    pub fn arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.index()).and_then(Option::as_ref)
    }

    /// Iterates over live nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|n| (NodeId::new(i), n)))
    }

    /// Iterates over live arcs in insertion order.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Arc)> {
        self.arcs
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|a| (ArcId::new(i), a)))
    }

    fn try_node(&self, id: NodeId) -> Result<&Node<S>, GraphError> {
        self.node(id).ok_or(GraphError::UnknownNode(id))
    }

    fn try_arc(&self, id: ArcId) -> Result<&Arc, GraphError> {
        self.arc(id).ok_or(GraphError::UnknownArc(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<S>> {
        self.nodes.get_mut(id.index()).and_then(Option::as_mut)
    }

    fn arc_mut(&mut self, id: ArcId) -> Option<&mut Arc> {
        self.arcs.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Inserts an externally constructed node and returns its handle.
    ///
    /// The node starts detached: any adjacency carried over from a clone is
    /// discarded, since arcs are only minted by this graph.
    pub fn add_node(&mut self, mut node: Node<S>) -> NodeId {
        node.incoming.clear();
        node.outgoing.clear();
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Some(node));
        self.live_nodes += 1;
        id
    }

    /// Creates a node at the given position and returns its handle.
    pub fn add_node_at(&mut self, position: Point3<f64>) -> NodeId {
        self.add_node(Node::new(position))
    }

    /// Creates an arc with weight 1.0 between two member nodes.
    ///
    /// Duplicate logical edges are permitted: calling this twice with the
    /// same endpoints yields two distinct arcs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is not a live
    /// member of this graph.
    pub fn add_arc(&mut self, start: NodeId, end: NodeId) -> Result<ArcId, GraphError> {
        self.add_arc_weighted(start, end, 1.0)
    }

    /// Creates an arc with the given weight between two member nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint is not a live
    /// member, or [`GraphError::NegativeWeight`] if `weight < 0` (NaN is
    /// rejected the same way).
    pub fn add_arc_weighted(
        &mut self,
        start: NodeId,
        end: NodeId,
        weight: f64,
    ) -> Result<ArcId, GraphError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::NegativeWeight(weight));
        }
        self.try_node(start)?;
        self.try_node(end)?;

        let id = ArcId::new(self.arcs.len());
        self.arcs.push(Some(Arc::new(start, end, weight)));
        self.live_arcs += 1;

        if let Some(node) = self.node_mut(start) {
            node.outgoing.push(id);
        }
        if let Some(node) = self.node_mut(end) {
            node.incoming.push(id);
        }
        Ok(id)
    }

    /// Creates two opposing arcs of equal weight between two member nodes.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Graph::add_arc_weighted`]; on error neither arc
    /// is inserted.
    pub fn add_bidirectional(
        &mut self,
        u: NodeId,
        v: NodeId,
        weight: f64,
    ) -> Result<(ArcId, ArcId), GraphError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::NegativeWeight(weight));
        }
        self.try_node(u)?;
        self.try_node(v)?;
        let forward = self.add_arc_weighted(u, v, weight)?;
        let backward = self.add_arc_weighted(v, u, weight)?;
        Ok((forward, backward))
    }

    /// Removes an arc and its adjacency entries on both endpoints.
    ///
    /// Returns `false` if the handle does not refer to a live arc; removal
    /// never propagates errors.
    pub fn remove_arc(&mut self, id: ArcId) -> bool {
        let Some(arc) = self.arcs.get_mut(id.index()).and_then(Option::take) else {
            return false;
        };
        self.live_arcs -= 1;
        if let Some(start) = self.node_mut(arc.start()) {
            start.outgoing.retain(|&a| a != id);
        }
        if let Some(end) = self.node_mut(arc.end()) {
            end.incoming.retain(|&a| a != id);
        }
        true
    }

    /// Removes a node, every incident arc, and the adjacency entries those
    /// arcs had on opposite endpoints.
    ///
    /// Returns `false` if the handle does not refer to a live node; removal
    /// never propagates errors.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let incident: Vec<ArcId> = match self.node(id) {
            Some(node) => node
                .incoming
                .iter()
                .chain(node.outgoing.iter())
                .copied()
                .collect(),
            None => return false,
        };
        for arc_id in incident {
            // A self-loop shows up in both lists; the second call is a no-op.
            self.remove_arc(arc_id);
        }
        if self
            .nodes
            .get_mut(id.index())
            .and_then(Option::take)
            .is_some()
        {
            self.live_nodes -= 1;
        }
        true
    }

    /// Empties the graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
        self.live_nodes = 0;
        self.live_arcs = 0;
    }

    /// Detaches a node from its neighbors' adjacency lists and clears its
    /// own lists.
    ///
    /// The incident arcs stay in the graph's arc list; use
    /// [`Graph::remove_node`] to sweep them as well.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the handle is not a live
    /// member.
    pub fn isolate(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.try_node(id)?;
        let (incoming, outgoing) = match self.node_mut(id) {
            Some(node) => (
                std::mem::take(&mut node.incoming),
                std::mem::take(&mut node.outgoing),
            ),
            None => return Err(GraphError::UnknownNode(id)),
        };
        for arc_id in outgoing {
            let opposite = match self.arc(arc_id) {
                Some(arc) => arc.end(),
                None => continue,
            };
            if let Some(node) = self.node_mut(opposite) {
                node.incoming.retain(|&a| a != arc_id);
            }
        }
        for arc_id in incoming {
            let opposite = match self.arc(arc_id) {
                Some(arc) => arc.start(),
                None => continue,
            };
            if let Some(node) = self.node_mut(opposite) {
                node.outgoing.retain(|&a| a != arc_id);
            }
        }
        Ok(())
    }

    /// Moves a node, invalidating the cached length of every incident arc.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the handle is not a live
    /// member.
    pub fn set_position(&mut self, id: NodeId, position: Point3<f64>) -> Result<(), GraphError> {
        let node = self.try_node(id)?;
        for &arc_id in node.incoming.iter().chain(node.outgoing.iter()) {
            if let Some(arc) = self.arc(arc_id) {
                arc.invalidate_length();
            }
        }
        if let Some(node) = self.node_mut(id) {
            node.set_position(position);
        }
        Ok(())
    }

    /// Sets a node's passability and cascades the flag to every incident
    /// arc.
    ///
    /// The cascade is one-way: changing an arc's passability afterwards
    /// does not restore or touch the node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the handle is not a live
    /// member.
    pub fn set_node_passable(&mut self, id: NodeId, passable: bool) -> Result<(), GraphError> {
        let incident: Vec<ArcId> = {
            let node = self.try_node(id)?;
            node.incoming
                .iter()
                .chain(node.outgoing.iter())
                .copied()
                .collect()
        };
        for arc_id in incident {
            if let Some(arc) = self.arc_mut(arc_id) {
                arc.set_passable(passable);
            }
        }
        if let Some(node) = self.node_mut(id) {
            node.set_passable(passable);
        }
        Ok(())
    }

    /// Sets an arc's passability. Does not propagate to its endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownArc`] if the handle is not a live
    /// member.
    pub fn set_arc_passable(&mut self, id: ArcId, passable: bool) -> Result<(), GraphError> {
        match self.arc_mut(id) {
            Some(arc) => {
                arc.set_passable(passable);
                Ok(())
            }
            None => Err(GraphError::UnknownArc(id)),
        }
    }

    /// Sets an arc's weight, invalidating its cached length.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownArc`] for a stale handle, or
    /// [`GraphError::NegativeWeight`] if `weight < 0`.
    pub fn set_arc_weight(&mut self, id: ArcId, weight: f64) -> Result<(), GraphError> {
        if weight < 0.0 || weight.is_nan() {
            return Err(GraphError::NegativeWeight(weight));
        }
        match self.arc_mut(id) {
            Some(arc) => {
                arc.set_weight(weight);
                Ok(())
            }
            None => Err(GraphError::UnknownArc(id)),
        }
    }

    /// Returns an arc's length, computing and caching it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownArc`] for a stale handle.
    pub fn arc_length(&self, id: ArcId) -> Result<f64, GraphError> {
        let arc = self.try_arc(id)?;
        if let Some(length) = arc.cached_length() {
            return Ok(length);
        }
        let start = self.try_node(arc.start())?;
        let end = self.try_node(arc.end())?;
        let length = geometry::euclidean_distance(&start.position(), &end.position());
        arc.store_length(length);
        Ok(length)
    }

    /// Returns an arc's traversal cost: `weight × length`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownArc`] for a stale handle.
    pub fn arc_cost(&self, id: ArcId) -> Result<f64, GraphError> {
        let weight = self.try_arc(id)?.weight();
        Ok(weight * self.arc_length(id)?)
    }

    /// Finds the first outgoing arc of `from` that ends at `to`.
    ///
    /// Linear scan in insertion order; matching is by handle, so two nodes
    /// at the same position are still distinct.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either handle is not a live
    /// member.
    pub fn arc_going_to(&self, from: NodeId, to: NodeId) -> Result<Option<ArcId>, GraphError> {
        self.try_node(to)?;
        let node = self.try_node(from)?;
        for &arc_id in &node.outgoing {
            if self.arc(arc_id).is_some_and(|a| a.end() == to) {
                return Ok(Some(arc_id));
            }
        }
        Ok(None)
    }

    /// Finds the first incoming arc of `to` that starts at `from`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either handle is not a live
    /// member.
    pub fn arc_coming_from(&self, to: NodeId, from: NodeId) -> Result<Option<ArcId>, GraphError> {
        self.try_node(from)?;
        let node = self.try_node(to)?;
        for &arc_id in &node.incoming {
            if self.arc(arc_id).is_some_and(|a| a.start() == from) {
                return Ok(Some(arc_id));
            }
        }
        Ok(None)
    }

    /// Returns the nodes reachable along one outgoing arc, in arc insertion
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] for a stale handle.
    pub fn successors(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        let node = self.try_node(id)?;
        Ok(node
            .outgoing
            .iter()
            .filter_map(|&a| self.arc(a).map(Arc::end))
            .collect())
    }

    /// Returns the nodes that reach this node along one arc, in arc
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] for a stale handle.
    pub fn predecessors(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        let node = self.try_node(id)?;
        Ok(node
            .incoming
            .iter()
            .filter_map(|&a| self.arc(a).map(Arc::start))
            .collect())
    }

    /// Returns the node itself plus all adjacent nodes in either direction,
    /// first-seen order, deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] for a stale handle.
    pub fn neighborhood(&self, id: NodeId) -> Result<Vec<NodeId>, GraphError> {
        let mut result = vec![id];
        for neighbor in self
            .successors(id)?
            .into_iter()
            .chain(self.predecessors(id)?)
        {
            if !result.contains(&neighbor) {
                result.push(neighbor);
            }
        }
        Ok(result)
    }

    /// Computes the bounding box of all nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NoNodes`] if the graph is empty.
    pub fn bounding_box(&self) -> Result<Aabb, GraphError> {
        node::bounding_box(self.nodes().map(|(_, n)| n))
    }

    /// Finds the node closest to a point by Euclidean distance.
    ///
    /// Linear scan; ties resolve to the first node in insertion order. With
    /// `passable_only`, impassable nodes are skipped. Returns `None` for an
    /// empty graph (or when every node is filtered out).
    ///
    /// # Example
    ///
    /// ```
    /// use graph_model::Graph;
    /// use nalgebra::Point3;
    ///
    /// let mut graph: Graph<()> = Graph::new();
    /// let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
    /// let b = graph.add_node_at(Point3::new(10.0, 0.0, 0.0));
    ///
    /// let (closest, distance) = graph.closest_node(&Point3::new(2.0, 0.0, 0.0), false).unwrap();
    /// assert_eq!(closest, a);
    /// assert!((distance - 2.0).abs() < 1e-10);
    /// # let _ = b;
    /// ```
    #[must_use]
    pub fn closest_node(&self, point: &Point3<f64>, passable_only: bool) -> Option<(NodeId, f64)> {
        let mut best: Option<(NodeId, f64)> = None;
        for (id, node) in self.nodes() {
            if passable_only && !node.is_passable() {
                continue;
            }
            let distance = geometry::euclidean_distance(point, &node.position());
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }
        best
    }

    /// Finds the arc whose supporting line passes closest to a point.
    ///
    /// The distance is measured to the projection of the point onto the
    /// infinite line through the arc's endpoints, so the foot of the
    /// perpendicular may fall outside the segment. Ties resolve to the
    /// first arc in insertion order. With `passable_only`, impassable arcs
    /// are skipped.
    #[must_use]
    pub fn closest_arc(&self, point: &Point3<f64>, passable_only: bool) -> Option<(ArcId, f64)> {
        let mut best: Option<(ArcId, f64)> = None;
        for (id, arc) in self.arcs() {
            if passable_only && !arc.is_passable() {
                continue;
            }
            let (Some(start), Some(end)) = (self.node(arc.start()), self.node(arc.end())) else {
                continue;
            };
            let foot = geometry::project_on_line(point, &start.position(), &end.position());
            let distance = geometry::euclidean_distance(point, &foot);
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((id, distance));
            }
        }
        best
    }
}
