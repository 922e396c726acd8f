//! Rank the algorithm catalogue against point-set statistics.
//!
//! The [`SuitabilityScorer`] trait produces a raw score per descriptor and
//! owns the shared ranking policy: clamp to `0..=100`, then stable-sort by
//! descending score so ties keep catalogue order.
//!
//! [`HeuristicScorer`] is the default implementation. It is illustrative
//! only: the adjustments look at coarse statistics and say nothing about how
//! any algorithm would perform on a real road graph.

use crate::{AlgorithmDescriptor, GraphStatistics};

/// Upper bound of every sanitised score.
pub const MAX_SCORE: u8 = 100;

/// A catalogue entry paired with its adjusted score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredAlgorithm {
    /// The scored catalogue entry.
    pub descriptor: AlgorithmDescriptor,
    /// Adjusted score in `0..=100`.
    pub score: u8,
}

/// Calculate suitability scores for catalogue entries.
///
/// Implementations supply [`SuitabilityScorer::raw_score`]; the provided
/// [`SuitabilityScorer::rank`] applies [`SuitabilityScorer::sanitise`] and a
/// stable descending sort, so every implementation yields one entry per
/// descriptor with a bounded score.
///
/// # Examples
///
/// ```rust
/// use wayfinder_core::{
///     ALGORITHM_CATALOG, AlgorithmDescriptor, GraphStatistics, SuitabilityScorer,
/// };
///
/// struct BaseOnly;
///
/// impl SuitabilityScorer for BaseOnly {
///     fn raw_score(&self, descriptor: &AlgorithmDescriptor, _stats: &GraphStatistics) -> i32 {
///         i32::from(descriptor.base_score)
///     }
/// }
///
/// let stats = GraphStatistics::from_parts(2, 0.1);
/// let ranking = BaseOnly.rank(&stats, &ALGORITHM_CATALOG);
/// assert_eq!(ranking.len(), ALGORITHM_CATALOG.len());
/// assert_eq!(ranking.first().map(|entry| entry.descriptor.name), Some("Dijkstra"));
/// ```
pub trait SuitabilityScorer: Send + Sync {
    /// Return an unclamped score for `descriptor` given `stats`.
    fn raw_score(&self, descriptor: &AlgorithmDescriptor, stats: &GraphStatistics) -> i32;

    /// Clamp a raw score into `0..=100`.
    #[must_use]
    fn sanitise(raw: i32) -> u8
    where
        Self: Sized,
    {
        u8::try_from(raw.clamp(0, i32::from(MAX_SCORE))).unwrap_or(0)
    }

    /// Score every descriptor and order the results best first.
    ///
    /// The sort is stable: equal scores keep their relative catalogue order.
    fn rank(
        &self,
        stats: &GraphStatistics,
        catalog: &[AlgorithmDescriptor],
    ) -> Vec<ScoredAlgorithm>
    where
        Self: Sized,
    {
        let mut ranking: Vec<ScoredAlgorithm> = catalog
            .iter()
            .map(|descriptor| ScoredAlgorithm {
                descriptor: *descriptor,
                score: Self::sanitise(self.raw_score(descriptor, stats)),
            })
            .collect();
        ranking.sort_by(|lhs, rhs| rhs.score.cmp(&lhs.score));
        ranking
    }
}

/// An additive adjustment applied to named catalogue entries.
#[derive(Debug, Clone, Copy)]
struct AdjustmentRule {
    targets: &'static [&'static str],
    applies: fn(&GraphStatistics) -> bool,
    delta: i32,
}

impl AdjustmentRule {
    fn adjustment_for(&self, name: &str, stats: &GraphStatistics) -> i32 {
        if self.targets.contains(&name) && (self.applies)(stats) {
            self.delta
        } else {
            0
        }
    }
}

const fn few_points(stats: &GraphStatistics) -> bool {
    stats.count <= 3
}

fn moderate_points(stats: &GraphStatistics) -> bool {
    (4..=7).contains(&stats.count)
}

fn wide_and_sparse(stats: &GraphStatistics) -> bool {
    stats.spread > 0.3 && stats.density < 10.0
}

const fn many_points(stats: &GraphStatistics) -> bool {
    stats.count > 7
}

const fn under_five_points(stats: &GraphStatistics) -> bool {
    stats.count < 5
}

const ADJUSTMENT_RULES: [AdjustmentRule; 5] = [
    AdjustmentRule {
        targets: &["BFS", "DFS"],
        applies: few_points,
        delta: 20,
    },
    AdjustmentRule {
        targets: &["Dijkstra"],
        applies: moderate_points,
        delta: 25,
    },
    AdjustmentRule {
        targets: &["A*"],
        applies: wide_and_sparse,
        delta: 25,
    },
    AdjustmentRule {
        targets: &["Bidirectional Dijkstra"],
        applies: many_points,
        delta: 20,
    },
    AdjustmentRule {
        targets: &["Floyd-Warshall"],
        applies: under_five_points,
        delta: -30,
    },
];

/// Rule-table scorer over count, spread and density.
///
/// | Condition | Applies to | Adjustment |
/// |---|---|---|
/// | `count <= 3` | BFS, DFS | +20 |
/// | `4 <= count <= 7` | Dijkstra | +25 |
/// | `spread > 0.3` and `density < 10` | A* | +25 |
/// | `count > 7` | Bidirectional Dijkstra | +20 |
/// | `count < 5` | Floyd-Warshall | -30 |
///
/// All matching adjustments are summed before the single clamp.
///
/// # Examples
/// ```
/// use wayfinder_core::{ALGORITHM_CATALOG, GraphStatistics, HeuristicScorer, SuitabilityScorer};
///
/// let stats = GraphStatistics::from_parts(3, 0.01);
/// let ranking = HeuristicScorer.rank(&stats, &ALGORITHM_CATALOG);
/// let top = ranking.first().expect("non-empty ranking");
/// assert_eq!((top.descriptor.name, top.score), ("BFS", 100));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    /// Sum of every rule adjustment that applies to `name`.
    #[must_use]
    pub fn adjustment(name: &str, stats: &GraphStatistics) -> i32 {
        sum_adjustments(&ADJUSTMENT_RULES, name, stats)
    }
}

fn sum_adjustments(rules: &[AdjustmentRule], name: &str, stats: &GraphStatistics) -> i32 {
    rules
        .iter()
        .map(|rule| rule.adjustment_for(name, stats))
        .sum()
}

impl SuitabilityScorer for HeuristicScorer {
    fn raw_score(&self, descriptor: &AlgorithmDescriptor, stats: &GraphStatistics) -> i32 {
        i32::from(descriptor.base_score) + Self::adjustment(descriptor.name, stats)
    }
}
