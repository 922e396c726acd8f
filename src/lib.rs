//! Facade crate for the Wayfinder route advisor.
//!
//! This crate re-exports the recommendation core: point sets, the algorithm
//! catalogue, the suitability scorer, the session and the marker animation.
//! The scheduler test double is available behind the `test-support` feature.
//!
//! # Examples
//!
//! ```
//! use wayfinder_engine::{Coordinate, DENSITY_EPSILON, GraphStatistics};
//!
//! let point = Coordinate::new(10.0, 10.0);
//! let stats = GraphStatistics::from_points(&[point]).expect("one point");
//! assert!((stats.density - 1.0 / DENSITY_EPSILON).abs() < 1e-6);
//! ```

#![forbid(unsafe_code)]

pub use wayfinder_core::{
    ALGORITHM_CATALOG, AlgorithmDescriptor, AnimationConfig, AnimationState, AnimationStep,
    Coordinate, DENSITY_EPSILON, EARTH_RADIUS_KM, FALLBACK_EXPLANATION, GraphStatistics,
    HeuristicScorer, MAX_FRAMES_PER_LEG, MIN_ROUTE_POINTS, MarkerAnimation,
    ParseThemePreferenceError, PointSet, Recommendation, RecommendationError, Recommender,
    ScoredAlgorithm, Session, StepScheduler, SuitabilityScorer, ThemePreference,
    compute_recommendation, explain, format_distance_km, haversine_km, path_length_km,
};

#[cfg(feature = "test-support")]
pub use wayfinder_core::test_support;
