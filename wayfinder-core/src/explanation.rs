//! Human-readable rationale for the top-ranked algorithm.

/// Sentence returned for every name without bespoke prose.
pub const FALLBACK_EXPLANATION: &str = "This algorithm offers a reasonable balance for the \
     selected points, though several alternatives scored similarly.";

const EXPLANATIONS: [(&str, &str); 5] = [
    (
        "Dijkstra",
        "Dijkstra suits a moderate number of stops: it explores outward from the start and \
         settles each point at its shortest known distance, giving exact results on \
         non-negative weights.",
    ),
    (
        "A*",
        "A* suits widely spread, sparse points: a straight-line distance heuristic steers the \
         search toward the goal so far fewer nodes are expanded than a blind search.",
    ),
    (
        "BFS",
        "BFS suits a handful of nearby points: with so few stops every leg costs roughly the \
         same, and a level-by-level search finds the route with the fewest hops.",
    ),
    (
        "Bidirectional Dijkstra",
        "Bidirectional Dijkstra suits larger point sets: searching from both ends at once and \
         meeting in the middle roughly halves the area explored.",
    ),
    (
        "Bellman-Ford",
        "Bellman-Ford tolerates negative edge weights and detects negative cycles, at the cost \
         of relaxing every edge repeatedly.",
    ),
];

/// Select the rationale shown for the algorithm called `name`.
///
/// Matching is exact. Names without bespoke prose, including names outside
/// the catalogue, yield [`FALLBACK_EXPLANATION`].
///
/// # Examples
/// ```
/// use wayfinder_core::{FALLBACK_EXPLANATION, explain};
///
/// assert!(explain("A*").starts_with("A* suits"));
/// assert_eq!(explain("Prim"), FALLBACK_EXPLANATION);
/// ```
#[must_use]
pub fn explain(name: &str) -> &'static str {
    EXPLANATIONS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map_or(FALLBACK_EXPLANATION, |(_, text)| text)
}
