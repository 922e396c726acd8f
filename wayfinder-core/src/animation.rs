//! Marker animation along a computed path.
//!
//! The animation is a small state machine (`Idle`, `Animating`, `Done`)
//! that never owns a timer. Each transition asks a [`StepScheduler`] to
//! deliver the next [`AnimationStep`] after a delay; the host feeds the step
//! back through [`MarkerAnimation::advance`] when it fires.
//!
//! Restarting or cancelling bumps a generation counter, so steps scheduled
//! for an earlier run are recognised as stale and ignored.

use std::time::Duration;

use crate::Coordinate;

/// Upper bound applied to [`AnimationConfig::frames_per_leg`].
pub const MAX_FRAMES_PER_LEG: usize = 1_000;

/// Tuning for [`MarkerAnimation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Delay between consecutive frames.
    pub step_delay: Duration,
    /// Interpolated frames per leg between consecutive points, clamped to
    /// `1..=MAX_FRAMES_PER_LEG`.
    pub frames_per_leg: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(50),
            frames_per_leg: 20,
        }
    }
}

/// Where the animation currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// No path is being animated.
    #[default]
    Idle,
    /// The marker sits on frame `index`.
    Animating {
        /// Current frame.
        index: usize,
    },
    /// The marker reached the final frame.
    Done,
}

/// A deferred request to move the marker to frame `index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationStep {
    /// Run the step belongs to.
    pub generation: u64,
    /// Frame to move to.
    pub index: usize,
}

/// Deliver animation steps after a delay.
///
/// Implementations typically wrap a UI timer. Delivery is the host's job:
/// when the delay elapses, pass the step to [`MarkerAnimation::advance`].
pub trait StepScheduler {
    /// Arrange for `step` to be delivered after `delay`.
    fn schedule(&mut self, delay: Duration, step: AnimationStep);
}

/// Step-by-step marker movement along a path.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wayfinder_core::{
///     AnimationConfig, AnimationState, AnimationStep, Coordinate, MarkerAnimation, StepScheduler,
/// };
///
/// #[derive(Default)]
/// struct Queue(Vec<AnimationStep>);
///
/// impl StepScheduler for Queue {
///     fn schedule(&mut self, _delay: Duration, step: AnimationStep) {
///         self.0.push(step);
///     }
/// }
///
/// let config = AnimationConfig { frames_per_leg: 1, ..AnimationConfig::default() };
/// let mut animation = MarkerAnimation::new(config);
/// let mut queue = Queue::default();
/// let path = [Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
///
/// animation.start(&path, &mut queue);
/// assert_eq!(animation.state(), AnimationState::Animating { index: 0 });
///
/// let step = queue.0.pop().expect("next step scheduled");
/// assert_eq!(animation.advance(step, &mut queue), Some(Coordinate::new(1.0, 1.0)));
/// assert_eq!(animation.state(), AnimationState::Done);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MarkerAnimation {
    config: AnimationConfig,
    frames: Vec<Coordinate>,
    state: AnimationState,
    generation: u64,
}

impl MarkerAnimation {
    /// Create an idle animation.
    #[must_use]
    pub const fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            frames: Vec::new(),
            state: AnimationState::Idle,
            generation: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Identifier of the current run.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Frames of the current run.
    #[must_use]
    pub fn frames(&self) -> &[Coordinate] {
        &self.frames
    }

    /// Marker position, if a run is active or finished.
    #[must_use]
    pub fn position(&self) -> Option<Coordinate> {
        match self.state {
            AnimationState::Idle => None,
            AnimationState::Animating { index } => self.frames.get(index).copied(),
            AnimationState::Done => self.frames.last().copied(),
        }
    }

    /// Begin animating along `path`, replacing any run in progress.
    ///
    /// Returns the marker's starting position. An empty path leaves the
    /// animation idle; a single point finishes immediately.
    pub fn start(
        &mut self,
        path: &[Coordinate],
        scheduler: &mut dyn StepScheduler,
    ) -> Option<Coordinate> {
        self.generation = self.generation.wrapping_add(1);
        self.frames = interpolate_frames(path, self.config.frames_per_leg);
        let Some(first) = self.frames.first().copied() else {
            self.state = AnimationState::Idle;
            return None;
        };
        if self.frames.len() == 1 {
            self.state = AnimationState::Done;
        } else {
            self.state = AnimationState::Animating { index: 0 };
            self.schedule_frame(1, scheduler);
        }
        Some(first)
    }

    /// Apply a fired step, returning the new marker position.
    ///
    /// Steps from an earlier run, steps received while not animating, and
    /// out-of-sequence steps are ignored and yield `None`.
    pub fn advance(
        &mut self,
        step: AnimationStep,
        scheduler: &mut dyn StepScheduler,
    ) -> Option<Coordinate> {
        let AnimationState::Animating { index } = self.state else {
            log::debug!("ignoring animation step {step:?} while {:?}", self.state);
            return None;
        };
        if step.generation != self.generation || step.index != index.saturating_add(1) {
            log::debug!(
                "ignoring stale animation step {step:?} (generation {}, frame {index})",
                self.generation
            );
            return None;
        }
        let frame = self.frames.get(step.index).copied()?;
        if step.index.saturating_add(1) >= self.frames.len() {
            self.state = AnimationState::Done;
        } else {
            self.state = AnimationState::Animating { index: step.index };
            self.schedule_frame(step.index.saturating_add(1), scheduler);
        }
        Some(frame)
    }

    /// Stop the current run and return to `Idle`.
    ///
    /// Steps already handed to the scheduler become stale.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.frames.clear();
        self.state = AnimationState::Idle;
    }

    fn schedule_frame(&self, index: usize, scheduler: &mut dyn StepScheduler) {
        scheduler.schedule(
            self.config.step_delay,
            AnimationStep {
                generation: self.generation,
                index,
            },
        );
    }
}

/// Expand `path` into evenly spaced frames along each leg.
///
/// Each leg contributes `frames_per_leg` frames starting at its first point;
/// the final point closes the sequence. The count is clamped to
/// `1..=MAX_FRAMES_PER_LEG`.
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "frames are linear interpolations between coordinates"
)]
fn interpolate_frames(path: &[Coordinate], frames_per_leg: usize) -> Vec<Coordinate> {
    let per_leg = frames_per_leg.clamp(1, MAX_FRAMES_PER_LEG);
    let capacity = path
        .len()
        .saturating_sub(1)
        .saturating_mul(per_leg)
        .saturating_add(1);
    let mut frames = Vec::with_capacity(capacity);
    for (from, to) in path.iter().zip(path.iter().skip(1)) {
        for frame in 0..per_leg {
            let t = frame as f64 / per_leg as f64;
            frames.push(Coordinate::new(
                from.lat + (to.lat - from.lat) * t,
                from.lng + (to.lng - from.lng) * t,
            ));
        }
    }
    if let Some(last) = path.last() {
        frames.push(*last);
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualScheduler;
    use rstest::{fixture, rstest};

    #[fixture]
    fn animation() -> MarkerAnimation {
        MarkerAnimation::new(AnimationConfig {
            step_delay: Duration::from_millis(10),
            frames_per_leg: 2,
        })
    }

    fn path() -> [Coordinate; 3] {
        [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(2.0, 2.0),
            Coordinate::new(2.0, 4.0),
        ]
    }

    #[rstest]
    fn interpolation_adds_midpoints() {
        let frames = interpolate_frames(&path(), 2);
        assert_eq!(
            frames,
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(2.0, 2.0),
                Coordinate::new(2.0, 3.0),
                Coordinate::new(2.0, 4.0),
            ]
        );
    }

    #[rstest]
    fn zero_frames_per_leg_visits_each_point() {
        let frames = interpolate_frames(&path(), 0);
        assert_eq!(frames, path().to_vec());
    }

    #[rstest]
    fn oversized_frames_per_leg_is_clamped() {
        let two_points = [Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
        let frames = interpolate_frames(&two_points, usize::MAX);
        assert_eq!(frames.len(), MAX_FRAMES_PER_LEG + 1);
        assert_eq!(frames.last(), Some(&Coordinate::new(1.0, 1.0)));
    }

    #[rstest]
    fn runs_to_completion(mut animation: MarkerAnimation) {
        let mut scheduler = ManualScheduler::default();
        assert_eq!(
            animation.start(&path(), &mut scheduler),
            Some(Coordinate::new(0.0, 0.0))
        );

        let mut visited = 1;
        while let Some((delay, step)) = scheduler.pop() {
            assert_eq!(delay, Duration::from_millis(10));
            assert!(animation.advance(step, &mut scheduler).is_some());
            visited += 1;
        }

        assert_eq!(visited, 5);
        assert_eq!(animation.state(), AnimationState::Done);
        assert_eq!(animation.position(), Some(Coordinate::new(2.0, 4.0)));
    }

    #[rstest]
    fn restart_makes_old_steps_stale(mut animation: MarkerAnimation) {
        let mut scheduler = ManualScheduler::default();
        animation.start(&path(), &mut scheduler);
        let (_, stale) = scheduler.pop().expect("first run step");

        animation.start(&path(), &mut scheduler);
        assert_eq!(animation.advance(stale, &mut scheduler), None);
        assert_eq!(animation.state(), AnimationState::Animating { index: 0 });
    }

    #[rstest]
    fn cancel_returns_to_idle(mut animation: MarkerAnimation) {
        let mut scheduler = ManualScheduler::default();
        animation.start(&path(), &mut scheduler);
        animation.cancel();
        let (_, step) = scheduler.pop().expect("pending step");

        assert_eq!(animation.advance(step, &mut scheduler), None);
        assert_eq!(animation.state(), AnimationState::Idle);
        assert_eq!(animation.position(), None);
        assert!(scheduler.is_empty());
    }

    #[rstest]
    fn single_point_finishes_immediately(mut animation: MarkerAnimation) {
        let mut scheduler = ManualScheduler::default();
        let start = animation.start(&[Coordinate::new(5.0, 5.0)], &mut scheduler);
        assert_eq!(start, Some(Coordinate::new(5.0, 5.0)));
        assert_eq!(animation.state(), AnimationState::Done);
        assert!(scheduler.is_empty());
    }

    #[rstest]
    fn empty_path_stays_idle(mut animation: MarkerAnimation) {
        let mut scheduler = ManualScheduler::default();
        assert_eq!(animation.start(&[], &mut scheduler), None);
        assert_eq!(animation.state(), AnimationState::Idle);
    }

    #[rstest]
    fn out_of_sequence_steps_are_ignored(mut animation: MarkerAnimation) {
        let mut scheduler = ManualScheduler::default();
        animation.start(&path(), &mut scheduler);
        let skipped = AnimationStep {
            generation: animation.generation(),
            index: 3,
        };
        assert_eq!(animation.advance(skipped, &mut scheduler), None);
        assert_eq!(animation.state(), AnimationState::Animating { index: 0 });
    }
}
