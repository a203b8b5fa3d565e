//! Configuration for the A* engine.
//!
//! # Example
//!
//! ```
//! use graph_astar::{Heuristic, SearchConfig};
//!
//! let config = SearchConfig::new()
//!     .with_heuristic(Heuristic::Manhattan)
//!     .with_balance(0.75)
//!     .unwrap();
//!
//! assert_eq!(config.heuristic(), Heuristic::Manhattan);
//! ```

use crate::error::SearchError;

/// Heuristic functions estimating the remaining cost to the target.
///
/// For the search to return minimum-cost paths the heuristic must never
/// overestimate the true remaining cost under the configured balance.
///
/// # Example
///
/// ```
/// use graph_astar::Heuristic;
///
/// // Euclidean is admissible whenever costs are geometric distances.
/// let h = Heuristic::default();
/// assert_eq!(h, Heuristic::Euclidean);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// Euclidean distance (L2 norm): straight-line distance.
    ///
    /// Admissible for unit-weight geometric graphs; the default.
    #[default]
    Euclidean,

    /// Manhattan distance (L1 norm): |dx| + |dy| + |dz|.
    ///
    /// Overestimates straight-line distance; admissible only on
    /// axis-aligned graphs.
    Manhattan,

    /// Chebyshev distance (L-infinity norm): max(|dx|, |dy|, |dz|).
    ///
    /// A lower bound on Euclidean distance; always admissible where
    /// Euclidean is.
    Chebyshev,
}

/// Configuration for a search: heuristic choice and Dijkstra/heuristic
/// balance.
///
/// The balance interpolates the ordering of the frontier:
///
/// - `1.0` — pure Dijkstra: expansion by cost alone.
/// - `0.0` — pure greedy best-first: expansion by heuristic alone.
/// - `0.5` — classical A*: the evaluation is `(g + h) / 2`, which orders
///   the frontier exactly like `f = g + h`.
///
/// # Example
///
/// ```
/// use graph_astar::SearchConfig;
///
/// let dijkstra = SearchConfig::dijkstra();
/// assert!((dijkstra.balance() - 1.0).abs() < 1e-10);
///
/// // Out-of-range balances fail immediately.
/// assert!(SearchConfig::new().with_balance(1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    heuristic: Heuristic,
    balance: f64,
}

impl SearchConfig {
    /// Creates a configuration with the defaults: Euclidean heuristic,
    /// balance 0.5.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
            balance: 0.5,
        }
    }

    /// Creates a pure-Dijkstra configuration (balance 1.0).
    ///
    /// Expansion order depends on cost alone; the heuristic is ignored.
    #[must_use]
    pub const fn dijkstra() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
            balance: 1.0,
        }
    }

    /// Creates a pure greedy best-first configuration (balance 0.0).
    ///
    /// Expansion order depends on the heuristic alone; costs are ignored
    /// until the result is reported.
    #[must_use]
    pub const fn greedy() -> Self {
        Self {
            heuristic: Heuristic::Euclidean,
            balance: 0.0,
        }
    }

    /// Sets the heuristic function.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets the Dijkstra/heuristic balance.
    ///
    /// With a balance other than 0.5 the effective scaling of cost against
    /// heuristic changes; minimum-cost results are only guaranteed while
    /// the scaled heuristic remains consistent. Callers picking aggressive
    /// balances trade optimality for expansion count.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidBalance`] for values outside `[0, 1]`
    /// (including NaN).
    pub fn with_balance(mut self, balance: f64) -> Result<Self, SearchError> {
        if !(0.0..=1.0).contains(&balance) {
            return Err(SearchError::InvalidBalance(balance));
        }
        self.balance = balance;
        Ok(self)
    }

    /// Returns the heuristic function.
    #[must_use]
    pub const fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Returns the Dijkstra/heuristic balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.heuristic(), Heuristic::Euclidean);
        assert_relative_eq!(config.balance(), 0.5, epsilon = 1e-10);
    }

    #[test]
    fn named_constructors() {
        assert_relative_eq!(SearchConfig::dijkstra().balance(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(SearchConfig::greedy().balance(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn builder() {
        let config = SearchConfig::new()
            .with_heuristic(Heuristic::Chebyshev)
            .with_balance(0.25)
            .unwrap();
        assert_eq!(config.heuristic(), Heuristic::Chebyshev);
        assert_relative_eq!(config.balance(), 0.25, epsilon = 1e-10);
    }

    #[test]
    fn balance_bounds_are_inclusive() {
        assert!(SearchConfig::new().with_balance(0.0).is_ok());
        assert!(SearchConfig::new().with_balance(1.0).is_ok());
    }

    #[test]
    fn out_of_range_balance_fails() {
        assert!(matches!(
            SearchConfig::new().with_balance(-0.01),
            Err(SearchError::InvalidBalance(_))
        ));
        assert!(matches!(
            SearchConfig::new().with_balance(1.01),
            Err(SearchError::InvalidBalance(_))
        ));
        assert!(matches!(
            SearchConfig::new().with_balance(f64::NAN),
            Err(SearchError::InvalidBalance(_))
        ));
    }

    #[test]
    fn heuristic_default_is_euclidean() {
        assert_eq!(Heuristic::default(), Heuristic::Euclidean);
    }
}
