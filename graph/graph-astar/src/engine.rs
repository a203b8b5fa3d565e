//! The A* search engine with stepwise control.
//!
//! [`AStar`] borrows a [`Graph`] for its whole lifetime and searches for a
//! minimum-cost path between two nodes. Callers either run
//! [`AStar::search_path`] to completion or drive the expansion one step at
//! a time with [`AStar::initialize`] and [`AStar::next_step`], inspecting
//! the frontier between steps.
//!
//! The frontier is a binary min-heap keyed by evaluation with lazy
//! invalidation, paired with a hash index from end node to the live entry;
//! the closed set is a hash map from end node to the expanded track. Each
//! step is `O(log n)` amortized.
//!
//! # Example
//!
//! ```
//! use graph_astar::{AStar, SearchConfig};
//! use graph_model::Graph;
//! use nalgebra::Point3;
//!
//! let mut graph: Graph<()> = Graph::new();
//! let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node_at(Point3::new(1.0, 0.0, 0.0));
//! let c = graph.add_node_at(Point3::new(2.0, 0.0, 0.0));
//! graph.add_arc(a, b).unwrap();
//! graph.add_arc(b, c).unwrap();
//!
//! let mut search = AStar::new(&graph, SearchConfig::default());
//! assert!(search.search_path(a, c).unwrap());
//!
//! let path = search.path_by_nodes().unwrap().unwrap();
//! assert_eq!(path, vec![a, b, c]);
//! ```

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::rc::Rc;

use graph_model::{ArcId, Graph, GraphError, Node, NodeId};
use nalgebra::Point3;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::heuristics::compute_heuristic;
use crate::track::Track;

/// A user-supplied heuristic: `(node, target) → estimated remaining cost`.
///
/// Must be non-negative; see [`SearchConfig::with_balance`] for the
/// admissibility caveats.
pub type HeuristicFn<'a, S> = dyn Fn(&Node<S>, &Node<S>) -> f64 + 'a;

/// Entry in the open-set priority queue.
///
/// Entries are never removed from the heap eagerly; replacing a node's
/// track bumps the sequence number in the open index, and stale entries
/// are skipped when popped.
struct OpenEntry {
    evaluation: f64,
    seq: u64,
    track: Rc<Track>,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is a max-heap);
        // evaluation ties pop in insertion order.
        other
            .evaluation
            .partial_cmp(&self.evaluation)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Cost and length of a found path.
///
/// # Example
///
/// ```
/// use graph_astar::{AStar, SearchConfig};
/// use graph_model::Graph;
/// use nalgebra::Point3;
///
/// let mut graph: Graph<()> = Graph::new();
/// let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
/// let b = graph.add_node_at(Point3::new(2.0, 0.0, 0.0));
/// graph.add_arc(a, b).unwrap();
///
/// let mut search = AStar::new(&graph, SearchConfig::default());
/// search.search_path(a, b).unwrap();
///
/// let summary = search.path_summary().unwrap().unwrap();
/// assert_eq!(summary.arc_count(), 1);
/// assert!((summary.total_cost() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSummary {
    arc_count: usize,
    total_cost: f64,
}

impl PathSummary {
    /// Returns the number of arcs in the path.
    #[must_use]
    pub const fn arc_count(&self) -> usize {
        self.arc_count
    }

    /// Returns the total path cost (sum of arc costs).
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

/// A* pathfinder over a spatial directed graph.
///
/// The engine holds a shared borrow of the graph, so the graph cannot be
/// mutated while any search — one-shot or stepwise — is in flight; drop
/// the engine to release it.
///
/// Evaluation parameters (heuristic, balance, target) are engine state,
/// never global: independent engines never interfere.
pub struct AStar<'a, S> {
    graph: &'a Graph<S>,
    config: SearchConfig,
    custom_heuristic: Option<Box<HeuristicFn<'a, S>>>,
    heap: BinaryHeap<OpenEntry>,
    /// End node → (cost, seq) of the live open entry for that node.
    open_index: HashMap<NodeId, (f64, u64)>,
    closed: HashMap<NodeId, Rc<Track>>,
    leaf: Option<Rc<Track>>,
    target: Option<NodeId>,
    step_count: Option<usize>,
    next_seq: u64,
}

impl<'a, S> AStar<'a, S> {
    /// Creates a new engine over the given graph and configuration.
    #[must_use]
    pub fn new(graph: &'a Graph<S>, config: SearchConfig) -> Self {
        Self {
            graph,
            config,
            custom_heuristic: None,
            heap: BinaryHeap::new(),
            open_index: HashMap::new(),
            closed: HashMap::new(),
            leaf: None,
            target: None,
            step_count: None,
            next_seq: 0,
        }
    }

    /// Replaces the configured heuristic with a user-supplied callback.
    ///
    /// The callback receives the frontier node and the target node and
    /// must return a non-negative estimate of the remaining cost.
    ///
    /// # Example
    ///
    /// ```
    /// use graph_astar::{AStar, SearchConfig};
    /// use graph_model::Graph;
    /// use nalgebra::Point3;
    ///
    /// let mut graph: Graph<()> = Graph::new();
    /// let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
    /// let b = graph.add_node_at(Point3::new(1.0, 0.0, 0.0));
    /// graph.add_arc(a, b).unwrap();
    ///
    /// // Zero heuristic: plain Dijkstra regardless of balance.
    /// let mut search = AStar::new(&graph, SearchConfig::default())
    ///     .with_heuristic_fn(|_, _| 0.0);
    /// assert!(search.search_path(a, b).unwrap());
    /// ```
    #[must_use]
    pub fn with_heuristic_fn(
        mut self,
        heuristic: impl Fn(&Node<S>, &Node<S>) -> f64 + 'a,
    ) -> Self {
        self.custom_heuristic = Some(Box::new(heuristic));
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the graph being searched.
    #[must_use]
    pub const fn graph(&self) -> &'a Graph<S> {
        self.graph
    }

    // ==================== State flags ====================

    /// Returns `true` once [`AStar::initialize`] has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.step_count.is_some()
    }

    /// Returns `true` once at least one step has executed.
    #[must_use]
    pub fn search_started(&self) -> bool {
        self.step_count.is_some_and(|steps| steps > 0)
    }

    /// Returns `true` once the search has started and the frontier is
    /// exhausted (either the target was reached or no path exists).
    #[must_use]
    pub fn search_ended(&self) -> bool {
        self.search_started() && self.open_index.is_empty()
    }

    /// Returns `true` if a path to the target has been found.
    #[must_use]
    pub const fn path_found(&self) -> bool {
        self.leaf.is_some()
    }

    /// Returns the number of steps executed, or `None` before
    /// [`AStar::initialize`].
    #[must_use]
    pub const fn steps(&self) -> Option<usize> {
        self.step_count
    }

    // ==================== Search control ====================

    /// Prepares a search from `start` to `end`.
    ///
    /// Clears the open and closed sets, binds the target, seeds the
    /// frontier with the zero-cost start track, and zeroes the step count.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] (wrapped) if either handle is
    /// not a live member of the graph.
    pub fn initialize(&mut self, start: NodeId, end: NodeId) -> Result<(), SearchError> {
        self.graph
            .node(start)
            .ok_or(GraphError::UnknownNode(start))?;
        self.graph.node(end).ok_or(GraphError::UnknownNode(end))?;

        self.heap.clear();
        self.open_index.clear();
        self.closed.clear();
        self.leaf = None;
        self.target = Some(end);
        self.step_count = Some(0);
        self.next_seq = 0;

        self.push_open(Rc::new(Track::start(start)))?;
        debug!(start = start.index(), goal = end.index(), "search initialized");
        Ok(())
    }

    /// Executes one expansion.
    ///
    /// Pops the open track with the minimum evaluation (ties resolve to
    /// the earliest inserted). If it terminates at the target, the search
    /// succeeds and the frontier is cleared. Otherwise its successors are
    /// propagated along passable outgoing arcs into passable nodes, with
    /// dominated tracks discarded and previously closed nodes reopened
    /// when a cheaper prefix appears.
    ///
    /// Returns `Ok(false)` when the frontier is exhausted — the search is
    /// over; either the target was already popped on an earlier step or
    /// there is no path.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NotInitialized`] before
    /// [`AStar::initialize`]; graph lookup failures propagate and leave
    /// the engine inspectable.
    pub fn next_step(&mut self) -> Result<bool, SearchError> {
        if self.step_count.is_none() {
            return Err(SearchError::NotInitialized);
        }
        let Some(target) = self.target else {
            return Err(SearchError::NotInitialized);
        };
        let Some(current) = self.pop_open() else {
            return Ok(false);
        };

        if current.end() == target {
            trace!(cost = current.cost(), "target reached");
            self.leaf = Some(current);
            self.heap.clear();
            self.open_index.clear();
            self.bump_step();
            return Ok(true);
        }

        self.propagate(&current)?;
        self.closed.insert(current.end(), current);
        self.bump_step();
        Ok(!self.open_index.is_empty())
    }

    /// Runs a complete search from `start` to `end`.
    ///
    /// Equivalent to [`AStar::initialize`] followed by [`AStar::next_step`]
    /// until the frontier is exhausted. The graph is already locked against
    /// mutation by the engine's borrow for as long as the engine lives.
    ///
    /// Returns whether a path was found; not finding one is a normal
    /// outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] (wrapped) if either handle is
    /// not a live member of the graph.
    pub fn search_path(&mut self, start: NodeId, end: NodeId) -> Result<bool, SearchError> {
        self.initialize(start, end)?;
        while self.next_step()? {}
        debug!(
            found = self.path_found(),
            steps = self.step_count.unwrap_or(0),
            "search finished"
        );
        Ok(self.path_found())
    }

    // ==================== Results ====================

    /// Returns the found path as a node sequence, or `None` if no path
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchNotEnded`] while the search is still
    /// running (or before it started).
    pub fn path_by_nodes(&self) -> Result<Option<Vec<NodeId>>, SearchError> {
        self.require_ended()?;
        Ok(self.leaf.as_ref().map(|leaf| leaf.node_sequence()))
    }

    /// Returns the found path as an arc sequence, or `None` if no path
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchNotEnded`] while the search is still
    /// running.
    pub fn path_by_arcs(&self) -> Result<Option<Vec<ArcId>>, SearchError> {
        self.require_ended()?;
        Ok(self.leaf.as_ref().map(|leaf| leaf.arc_sequence()))
    }

    /// Returns the found path as a coordinate sequence, or `None` if no
    /// path exists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchNotEnded`] while the search is still
    /// running.
    pub fn path_by_coordinates(&self) -> Result<Option<Vec<Point3<f64>>>, SearchError> {
        self.require_ended()?;
        let Some(leaf) = &self.leaf else {
            return Ok(None);
        };
        let mut coordinates = Vec::with_capacity(leaf.arcs_visited() + 1);
        for id in leaf.node_sequence() {
            let node = self.graph.node(id).ok_or(GraphError::UnknownNode(id))?;
            coordinates.push(node.position());
        }
        Ok(Some(coordinates))
    }

    /// Returns the arc count and total cost of the found path, or `None`
    /// if no path exists.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchNotEnded`] while the search is still
    /// running.
    pub fn path_summary(&self) -> Result<Option<PathSummary>, SearchError> {
        self.require_ended()?;
        Ok(self.leaf.as_ref().map(|leaf| PathSummary {
            arc_count: leaf.arcs_visited(),
            total_cost: leaf.cost(),
        }))
    }

    /// Debug view of the open set: one node sequence per live frontier
    /// entry, in insertion order.
    #[must_use]
    pub fn open_snapshot(&self) -> Vec<Vec<NodeId>> {
        let mut live: Vec<&OpenEntry> = self
            .heap
            .iter()
            .filter(|entry| {
                self.open_index
                    .get(&entry.track.end())
                    .is_some_and(|&(_, seq)| seq == entry.seq)
            })
            .collect();
        live.sort_by_key(|entry| entry.seq);
        live.iter().map(|entry| entry.track.node_sequence()).collect()
    }

    /// Debug view of the closed set: one node sequence per expanded entry,
    /// ordered by end-node handle.
    #[must_use]
    pub fn closed_snapshot(&self) -> Vec<Vec<NodeId>> {
        let mut entries: Vec<(&NodeId, &Rc<Track>)> = self.closed.iter().collect();
        entries.sort_by_key(|(id, _)| **id);
        entries
            .iter()
            .map(|(_, track)| track.node_sequence())
            .collect()
    }

    // ==================== Internals ====================

    fn require_ended(&self) -> Result<(), SearchError> {
        if self.step_count.is_none() {
            return Err(SearchError::NotInitialized);
        }
        if self.search_ended() {
            Ok(())
        } else {
            Err(SearchError::SearchNotEnded)
        }
    }

    fn bump_step(&mut self) {
        if let Some(steps) = self.step_count.as_mut() {
            *steps += 1;
        }
    }

    /// Expands one track: builds a successor along every passable outgoing
    /// arc into a passable node, applying the dominance and reopening
    /// rules.
    fn propagate(&mut self, current: &Rc<Track>) -> Result<(), SearchError> {
        let graph = self.graph;
        let node = graph
            .node(current.end())
            .ok_or(GraphError::UnknownNode(current.end()))?;

        for &arc_id in node.outgoing_arcs() {
            let arc = graph.arc(arc_id).ok_or(GraphError::UnknownArc(arc_id))?;
            let end = arc.end();
            let end_node = graph.node(end).ok_or(GraphError::UnknownNode(end))?;
            if !arc.is_passable() || !end_node.is_passable() {
                continue;
            }

            let cost = current.cost() + graph.arc_cost(arc_id)?;

            // A successor is dominated if either set already reaches the
            // same node at least as cheaply.
            if self.closed.get(&end).is_some_and(|t| t.cost() <= cost) {
                continue;
            }
            if self
                .open_index
                .get(&end)
                .is_some_and(|&(open_cost, _)| open_cost <= cost)
            {
                continue;
            }

            // Strictly better: reopen if closed, supersede any open entry.
            self.closed.remove(&end);
            trace!(from = current.end().index(), to = end.index(), cost, "frontier extended");
            self.push_open(Rc::new(Track::extend(current, arc_id, end, cost)))?;
        }
        Ok(())
    }

    fn push_open(&mut self, track: Rc<Track>) -> Result<(), SearchError> {
        let evaluation = self.evaluation(&track)?;
        let seq = self.next_seq;
        self.next_seq += 1;
        self.open_index.insert(track.end(), (track.cost(), seq));
        self.heap.push(OpenEntry {
            evaluation,
            seq,
            track,
        });
        Ok(())
    }

    /// Pops the live open entry with the minimum evaluation, skipping
    /// entries superseded since they were pushed.
    fn pop_open(&mut self) -> Option<Rc<Track>> {
        while let Some(entry) = self.heap.pop() {
            let end = entry.track.end();
            let live = self
                .open_index
                .get(&end)
                .is_some_and(|&(_, seq)| seq == entry.seq);
            if live {
                self.open_index.remove(&end);
                return Some(entry.track);
            }
        }
        None
    }

    /// The frontier ordering: `balance × cost + (1 − balance) × h`.
    fn evaluation(&self, track: &Track) -> Result<f64, SearchError> {
        let target = self.target.ok_or(SearchError::NotInitialized)?;
        let node = self
            .graph
            .node(track.end())
            .ok_or(GraphError::UnknownNode(track.end()))?;
        let goal = self
            .graph
            .node(target)
            .ok_or(GraphError::UnknownNode(target))?;

        let h = match &self.custom_heuristic {
            Some(heuristic) => heuristic(node, goal),
            None => compute_heuristic(&node.position(), &goal.position(), self.config.heuristic()),
        };
        let balance = self.config.balance();
        Ok(balance.mul_add(track.cost(), (1.0 - balance) * h))
    }
}
