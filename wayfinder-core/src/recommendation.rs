//! The recommendation entry point.
//!
//! [`compute_recommendation`] refuses point sets with fewer than
//! [`MIN_ROUTE_POINTS`] entries, then derives statistics, ranks the
//! catalogue, picks the explanation for the winner and measures the path.

use thiserror::Error;

use crate::{
    ALGORITHM_CATALOG, AlgorithmDescriptor, Coordinate, GraphStatistics, HeuristicScorer,
    ScoredAlgorithm, SuitabilityScorer, explain, path_length_km,
};

/// Fewest points that define a path.
pub const MIN_ROUTE_POINTS: usize = 2;

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendationError {
    /// Too few points were supplied to define a path.
    #[error("at least {required} points are required to compute a route, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },
}

/// Ranked catalogue, rationale for the winner and path length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation {
    /// Every catalogue entry, best first.
    pub ranking: Vec<ScoredAlgorithm>,
    /// Explanation for the top-ranked entry.
    pub top_explanation: &'static str,
    /// Great-circle length of the path in kilometres.
    pub total_distance_km: f64,
    /// Statistics the ranking was computed from.
    pub statistics: GraphStatistics,
}

impl Recommendation {
    /// The top-ranked entry.
    #[must_use]
    pub fn recommended(&self) -> Option<&ScoredAlgorithm> {
        self.ranking.first()
    }

    /// The first `n` ranked entries, or all of them when fewer exist.
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredAlgorithm] {
        self.ranking.get(..n).unwrap_or(&self.ranking)
    }

    /// The path length formatted for display.
    #[must_use]
    pub fn formatted_distance(&self) -> String {
        format_distance_km(self.total_distance_km)
    }
}

/// Render a distance in kilometres with two decimals.
///
/// # Examples
/// ```
/// use wayfinder_core::format_distance_km;
///
/// assert_eq!(format_distance_km(343.127_9), "343.13 km");
/// ```
#[must_use]
pub fn format_distance_km(km: f64) -> String {
    format!("{km:.2} km")
}

/// Produces recommendations with a pluggable scorer.
///
/// # Examples
/// ```
/// use wayfinder_core::{Coordinate, HeuristicScorer, Recommender};
///
/// let recommender = Recommender::new(HeuristicScorer);
/// let points = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0)];
/// let recommendation = recommender.recommend(&points).expect("two points");
/// assert_eq!(recommendation.formatted_distance(), "111.19 km");
/// ```
#[derive(Debug, Clone)]
pub struct Recommender<S = HeuristicScorer>
where
    S: SuitabilityScorer,
{
    scorer: S,
    catalog: &'static [AlgorithmDescriptor],
}

impl Default for Recommender<HeuristicScorer> {
    fn default() -> Self {
        Self::new(HeuristicScorer)
    }
}

impl<S> Recommender<S>
where
    S: SuitabilityScorer,
{
    /// Construct a recommender over the built-in catalogue.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self::with_catalog(scorer, &ALGORITHM_CATALOG)
    }

    /// Construct a recommender over an explicit catalogue.
    #[must_use]
    pub const fn with_catalog(scorer: S, catalog: &'static [AlgorithmDescriptor]) -> Self {
        Self { scorer, catalog }
    }

    /// Rank the catalogue for `points` and measure the path through them.
    ///
    /// # Errors
    /// Returns [`RecommendationError::InsufficientPoints`] when fewer than
    /// [`MIN_ROUTE_POINTS`] points are supplied. Nothing is computed in that
    /// case.
    pub fn recommend(&self, points: &[Coordinate]) -> Result<Recommendation, RecommendationError> {
        let insufficient = RecommendationError::InsufficientPoints {
            required: MIN_ROUTE_POINTS,
            actual: points.len(),
        };
        if points.len() < MIN_ROUTE_POINTS {
            log::warn!("refusing to score {} point(s)", points.len());
            return Err(insufficient);
        }
        let statistics = GraphStatistics::from_points(points).ok_or(insufficient)?;
        let ranking = self.scorer.rank(&statistics, self.catalog);
        let top_explanation = ranking
            .first()
            .map_or(crate::FALLBACK_EXPLANATION, |top| explain(top.descriptor.name));
        log::debug!(
            "scored {} algorithms for {} points (spread {:.4}, density {:.2})",
            ranking.len(),
            statistics.count,
            statistics.spread,
            statistics.density
        );
        Ok(Recommendation {
            ranking,
            top_explanation,
            total_distance_km: path_length_km(points),
            statistics,
        })
    }
}

/// Recommend with the default [`HeuristicScorer`] and catalogue.
///
/// # Errors
/// Returns [`RecommendationError::InsufficientPoints`] for fewer than two
/// points.
pub fn compute_recommendation(
    points: &[Coordinate],
) -> Result<Recommendation, RecommendationError> {
    Recommender::<HeuristicScorer>::default().recommend(points)
}
