//! Error types for search operations.

use graph_model::GraphError;

/// Errors that can occur while configuring or driving a search.
///
/// A search that ends without finding a path is **not** an error: it is
/// reported as `Ok(false)` from the search entry points and `Ok(None)` from
/// the result accessors.
///
/// # Example
///
/// ```
/// use graph_astar::SearchError;
///
/// let err = SearchError::InvalidBalance(1.5);
/// assert!(err.to_string().contains("[0, 1]"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A step or result was requested before `initialize` was called.
    #[error("search has not been initialized")]
    NotInitialized,

    /// A result accessor was called while the search is still running.
    #[error("search results are not available until the search has ended")]
    SearchNotEnded,

    /// The Dijkstra/heuristic balance must lie within `[0, 1]`.
    #[error("balance must be within [0, 1], got {0}")]
    InvalidBalance(f64),

    /// A graph lookup failed during the search.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl SearchError {
    /// Returns `true` if this is a state error (wrong time, not wrong
    /// input).
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(self, Self::NotInitialized | Self::SearchNotEnded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_model::Graph;
    use nalgebra::Point3;

    #[test]
    fn not_initialized_display() {
        let err = SearchError::NotInitialized;
        assert!(err.to_string().contains("not been initialized"));
        assert!(err.is_state_error());
    }

    #[test]
    fn search_not_ended_display() {
        let err = SearchError::SearchNotEnded;
        assert!(err.to_string().contains("until the search has ended"));
        assert!(err.is_state_error());
    }

    #[test]
    fn invalid_balance_display() {
        let err = SearchError::InvalidBalance(-0.25);
        assert!(err.to_string().contains("-0.25"));
        assert!(!err.is_state_error());
    }

    #[test]
    fn graph_error_passes_through() {
        let mut graph: Graph<()> = Graph::new();
        let a = graph.add_node_at(Point3::new(0.0, 0.0, 0.0));
        graph.remove_node(a);
        let graph_err = graph.add_arc(a, a).unwrap_err();
        let err: SearchError = graph_err.into();
        assert!(matches!(err, SearchError::Graph(GraphError::UnknownNode(id)) if id == a));
    }
}
