//! Core domain types for the Wayfinder route advisor.
//!
//! A caller collects an ordered [`PointSet`], and
//! [`compute_recommendation`] turns it into an illustrative ranking of
//! textbook pathfinding algorithms together with the great-circle length of
//! the path through the points.
//!
//! The ranking is a demo-grade heuristic over three geometric statistics
//! (point count, bounding-box spread and density). None of the catalogued
//! algorithms is executed, and no graph is built from the points.
//!
//! # Examples
//!
//! ```
//! use wayfinder_core::{Coordinate, compute_recommendation};
//!
//! # fn main() -> Result<(), wayfinder_core::RecommendationError> {
//! let points = [
//!     Coordinate::new(51.5, -0.12),
//!     Coordinate::new(48.85, 2.35),
//! ];
//! let recommendation = compute_recommendation(&points)?;
//! assert_eq!(recommendation.ranking.len(), 12);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod animation;
pub mod catalog;
pub mod distance;
pub mod explanation;
pub mod point;
pub mod preference;
pub mod recommendation;
pub mod scorer;
pub mod session;
pub mod statistics;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use animation::{
    AnimationConfig, AnimationState, AnimationStep, MAX_FRAMES_PER_LEG, MarkerAnimation,
    StepScheduler,
};
pub use catalog::{ALGORITHM_CATALOG, AlgorithmDescriptor};
pub use distance::{EARTH_RADIUS_KM, haversine_km, path_length_km};
pub use explanation::{FALLBACK_EXPLANATION, explain};
pub use point::{Coordinate, PointSet};
pub use preference::{ParseThemePreferenceError, ThemePreference};
pub use recommendation::{
    MIN_ROUTE_POINTS, Recommendation, RecommendationError, Recommender, compute_recommendation,
    format_distance_km,
};
pub use scorer::{HeuristicScorer, ScoredAlgorithm, SuitabilityScorer};
pub use session::Session;
pub use statistics::{DENSITY_EPSILON, GraphStatistics};
