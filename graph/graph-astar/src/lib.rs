//! Stepwise A* search over spatial directed graphs.
//!
//! This crate searches [`graph_model::Graph`] instances for minimum-cost
//! paths, with a tunable balance between pure Dijkstra (cost only) and
//! pure greedy best-first (heuristic only) frontier ordering.
//!
//! # Overview
//!
//! - **Engine** ([`AStar`]): owns the open/closed frontier, expands one
//!   track per step, reopens closed nodes when a cheaper prefix appears,
//!   and reconstructs results by walking the winning track's back-chain.
//! - **Control surface**: run [`AStar::search_path`] to completion, or
//!   drive [`AStar::initialize`] / [`AStar::next_step`] from your own loop
//!   and inspect [`AStar::open_snapshot`] / [`AStar::closed_snapshot`]
//!   between steps.
//! - **Configuration** ([`SearchConfig`], [`Heuristic`]): Euclidean,
//!   Manhattan, or Chebyshev estimates — or a user callback via
//!   [`AStar::with_heuristic_fn`] — and a `[0, 1]` balance.
//! - **Tracks** ([`Track`]): back-linked path prefixes shared by the
//!   frontier.
//!
//! # Quick Start
//!
//! ```
//! use graph_astar::{AStar, Heuristic, SearchConfig};
//! use graph_model::Graph;
//! use nalgebra::Point3;
//!
//! // Build a diamond with a cheap upper route and an expensive lower one.
//! let mut graph: Graph<()> = Graph::new();
//! let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node_at(Point3::new(1.0, 1.0, 0.0));
//! let c = graph.add_node_at(Point3::new(1.0, -1.0, 0.0));
//! let d = graph.add_node_at(Point3::new(2.0, 0.0, 0.0));
//! graph.add_arc(a, b).unwrap();
//! graph.add_arc(a, c).unwrap();
//! graph.add_arc(b, d).unwrap();
//! graph.add_arc_weighted(c, d, 100.0).unwrap();
//!
//! let config = SearchConfig::new().with_heuristic(Heuristic::Euclidean);
//! let mut search = AStar::new(&graph, config);
//!
//! assert!(search.search_path(a, d).unwrap());
//! assert_eq!(search.path_by_nodes().unwrap().unwrap(), vec![a, b, d]);
//! ```
//!
//! # Balance
//!
//! The frontier is ordered by `balance × cost + (1 − balance) ×
//! heuristic`:
//!
//! | Balance | Behavior |
//! |---------|----------|
//! | 1.0 | Dijkstra — minimum cost guaranteed, most expansions |
//! | 0.5 | Classical A* — minimum cost with an admissible, consistent heuristic |
//! | 0.0 | Greedy best-first — fastest, no cost guarantee |
//!
//! The search terminates as soon as the target is popped from the open
//! set, which yields the minimum-cost path only while the scaled
//! evaluation is monotone along paths. See
//! [`SearchConfig::with_balance`].
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. The engine borrows the graph shared
//! for its whole lifetime, so graph mutation during a search is rejected
//! at compile time. Cancellation is cooperative: stop calling
//! [`AStar::next_step`] and drop the engine.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod track;

pub use config::{Heuristic, SearchConfig};
pub use engine::{AStar, HeuristicFn, PathSummary};
pub use error::SearchError;
pub use heuristics::compute_heuristic;
pub use track::Track;
