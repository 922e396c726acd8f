//! The fixed catalogue of named pathfinding algorithms.
//!
//! Entries are labels only. Nothing in this crate executes them.

/// A textbook graph algorithm as shown to the user.
///
/// # Examples
/// ```
/// use wayfinder_core::ALGORITHM_CATALOG;
///
/// let first = ALGORITHM_CATALOG.first().expect("catalogue is non-empty");
/// assert_eq!(first.name, "Dijkstra");
/// assert_eq!(first.base_score, 90);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmDescriptor {
    /// Display name, also the key for explanation lookup.
    pub name: &'static str,
    /// Nominal time-complexity label.
    pub complexity: &'static str,
    /// Suitability score before any adjustment, in `0..=100`.
    pub base_score: u8,
}

impl AlgorithmDescriptor {
    const fn new(name: &'static str, complexity: &'static str, base_score: u8) -> Self {
        Self {
            name,
            complexity,
            base_score,
        }
    }
}

/// Catalogue order is significant: it breaks ties in the ranking.
pub const ALGORITHM_CATALOG: [AlgorithmDescriptor; 12] = [
    AlgorithmDescriptor::new("Dijkstra", "O((V + E) log V)", 90),
    AlgorithmDescriptor::new("A*", "O(E log V)", 88),
    AlgorithmDescriptor::new("BFS", "O(V + E)", 82),
    AlgorithmDescriptor::new("DFS", "O(V + E)", 65),
    AlgorithmDescriptor::new("Bellman-Ford", "O(V * E)", 70),
    AlgorithmDescriptor::new("Floyd-Warshall", "O(V^3)", 60),
    AlgorithmDescriptor::new("Prim", "O(E log V)", 78),
    AlgorithmDescriptor::new("Kruskal", "O(E log E)", 76),
    AlgorithmDescriptor::new("Bidirectional Dijkstra", "O((V + E) log V)", 85),
    AlgorithmDescriptor::new("Johnson", "O(V^2 log V + V * E)", 72),
    AlgorithmDescriptor::new("Ant Colony Optimization", "O(t * m * n^2)", 68),
    AlgorithmDescriptor::new("Naive Greedy", "O(n^2)", 55),
];
