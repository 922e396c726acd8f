//! Per-user session state.
//!
//! A [`Session`] owns everything that would otherwise be ambient UI state:
//! the collected points, the most recent recommendation and the marker
//! animation. Operations take the session explicitly, so the decision core
//! can be exercised without any rendering surface.

use crate::{
    AnimationConfig, AnimationStep, Coordinate, HeuristicScorer, MarkerAnimation, PointSet,
    Recommendation, RecommendationError, Recommender, StepScheduler, SuitabilityScorer,
};

/// Points, last result and animation for one user session.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wayfinder_core::{AnimationConfig, AnimationStep, Coordinate, Session, StepScheduler};
///
/// struct Discard;
///
/// impl StepScheduler for Discard {
///     fn schedule(&mut self, _delay: Duration, _step: AnimationStep) {}
/// }
///
/// let mut session = Session::new(AnimationConfig::default());
/// session.add_point(Coordinate::new(51.5, -0.12));
/// assert!(session.compute_route(&mut Discard).is_err());
///
/// session.add_point(Coordinate::new(48.85, 2.35));
/// let recommendation = session.compute_route(&mut Discard).expect("two points");
/// assert_eq!(recommendation.ranking.len(), 12);
///
/// session.reset();
/// assert!(session.points().is_empty());
/// assert!(session.last_recommendation().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Session<S = HeuristicScorer>
where
    S: SuitabilityScorer,
{
    points: PointSet,
    recommender: Recommender<S>,
    last_recommendation: Option<Recommendation>,
    animation: MarkerAnimation,
}

impl Session<HeuristicScorer> {
    /// Start an empty session with the default recommender.
    #[must_use]
    pub fn new(config: AnimationConfig) -> Self {
        Self::with_recommender(Recommender::default(), config)
    }
}

impl Default for Session<HeuristicScorer> {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl<S> Session<S>
where
    S: SuitabilityScorer,
{
    /// Start an empty session with an explicit recommender.
    #[must_use]
    pub const fn with_recommender(recommender: Recommender<S>, config: AnimationConfig) -> Self {
        Self {
            points: PointSet::new(),
            recommender,
            last_recommendation: None,
            animation: MarkerAnimation::new(config),
        }
    }

    /// Append a point to the route.
    pub fn add_point(&mut self, coordinate: Coordinate) {
        self.points.push(coordinate);
    }

    /// Points collected so far.
    #[must_use]
    pub const fn points(&self) -> &PointSet {
        &self.points
    }

    /// Most recent successful recommendation.
    #[must_use]
    pub const fn last_recommendation(&self) -> Option<&Recommendation> {
        self.last_recommendation.as_ref()
    }

    /// The marker animation.
    #[must_use]
    pub const fn animation(&self) -> &MarkerAnimation {
        &self.animation
    }

    /// Recommend for the current points and animate the marker along them.
    ///
    /// A new run replaces any animation in progress.
    ///
    /// # Errors
    /// Returns [`RecommendationError::InsufficientPoints`] with fewer than
    /// two points; the stored recommendation and the animation are left
    /// untouched.
    pub fn compute_route(
        &mut self,
        scheduler: &mut dyn StepScheduler,
    ) -> Result<&Recommendation, RecommendationError> {
        let recommendation = self.recommender.recommend(self.points.as_slice())?;
        self.animation.start(self.points.as_slice(), scheduler);
        Ok(self.last_recommendation.insert(recommendation))
    }

    /// Forward a fired scheduler step to the animation.
    pub fn advance_animation(
        &mut self,
        step: AnimationStep,
        scheduler: &mut dyn StepScheduler,
    ) -> Option<Coordinate> {
        self.animation.advance(step, scheduler)
    }

    /// Clear points and results, and cancel the animation.
    pub fn reset(&mut self) {
        self.points.clear();
        self.last_recommendation = None;
        self.animation.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AnimationState;
    use crate::test_support::ManualScheduler;
    use rstest::{fixture, rstest};

    #[fixture]
    fn session() -> Session {
        let mut session = Session::default();
        session.add_point(Coordinate::new(0.0, 0.0));
        session.add_point(Coordinate::new(0.0, 0.01));
        session.add_point(Coordinate::new(0.01, 0.01));
        session
    }

    #[rstest]
    fn compute_route_stores_result_and_starts_animation(mut session: Session) {
        let mut scheduler = ManualScheduler::default();
        let top = session
            .compute_route(&mut scheduler)
            .expect("three points")
            .recommended()
            .map(|entry| entry.descriptor.name);
        assert_eq!(top, Some("BFS"));
        assert!(session.last_recommendation().is_some());
        assert_eq!(
            session.animation().state(),
            AnimationState::Animating { index: 0 }
        );
        assert_eq!(scheduler.len(), 1);
    }

    #[rstest]
    fn failed_compute_keeps_previous_state() {
        let mut session = Session::default();
        session.add_point(Coordinate::new(1.0, 1.0));
        let mut scheduler = ManualScheduler::default();

        let err = session.compute_route(&mut scheduler).expect_err("one point");
        assert_eq!(
            err,
            RecommendationError::InsufficientPoints {
                required: 2,
                actual: 1,
            }
        );
        assert!(session.last_recommendation().is_none());
        assert_eq!(session.animation().state(), AnimationState::Idle);
        assert!(scheduler.is_empty());
    }

    #[rstest]
    fn reset_clears_everything(mut session: Session) {
        let mut scheduler = ManualScheduler::default();
        session.compute_route(&mut scheduler).expect("three points");
        session.reset();

        assert!(session.points().is_empty());
        assert!(session.last_recommendation().is_none());
        assert_eq!(session.animation().state(), AnimationState::Idle);

        let (_, pending) = scheduler.pop().expect("step queued before reset");
        assert_eq!(session.advance_animation(pending, &mut scheduler), None);
    }
}
