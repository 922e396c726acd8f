//! Test-only scheduler used by unit and behaviour tests.

use std::collections::VecDeque;
use std::time::Duration;

use crate::{AnimationStep, StepScheduler};

/// Queue-backed `StepScheduler` that never fires on its own.
///
/// Tests pop steps in scheduling order and feed them back to the animation.
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    pending: VecDeque<(Duration, AnimationStep)>,
}

impl ManualScheduler {
    /// Remove the oldest scheduled step.
    pub fn pop(&mut self) -> Option<(Duration, AnimationStep)> {
        self.pending.pop_front()
    }

    /// Number of steps waiting to fire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Report whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl StepScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, step: AnimationStep) {
        self.pending.push_back((delay, step));
    }
}
