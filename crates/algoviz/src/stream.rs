//! Pull-based driver shared by all simulators.
//!
//! A simulator is a state machine: each [`Simulate::advance`] call performs
//! one micro-operation of the algorithm (a comparison, a swap, a visit, ...)
//! and pushes the steps it produces. [`Steps`] turns that into an ordinary
//! iterator that only advances the simulator when its buffer runs dry, so
//! nothing is computed ahead of the consumer.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::model::Step;

/// Boxed step sequence handed out by the registry.
pub type StepStream = Box<dyn Iterator<Item = Step> + Send>;

/// Sink the simulators push steps into.
pub type StepBuffer = VecDeque<Step>;

pub trait Simulate {
    /// Registry id, used for logging.
    const ID: &'static str;

    /// Performs the next micro-operation, pushing zero or more steps.
    ///
    /// Returns `false` once the run is over; it is not called again after
    /// that.
    fn advance(&mut self, out: &mut StepBuffer) -> bool;
}

/// A finite, non-restartable sequence of steps produced by `S`.
pub struct Steps<S> {
    sim: S,
    pending: StepBuffer,
    finished: bool,
    emitted: usize,
}

impl<S: Simulate> Steps<S> {
    pub fn new(sim: S) -> Self {
        debug!(algorithm = S::ID, "simulation started");
        Self {
            sim,
            pending: VecDeque::new(),
            finished: false,
            emitted: 0,
        }
    }

    pub fn boxed(self) -> StepStream
    where
        S: Send + 'static,
    {
        Box::new(self)
    }
}

impl<S: Simulate> Iterator for Steps<S> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            if let Some(step) = self.pending.pop_front() {
                self.emitted += 1;
                trace!(algorithm = S::ID, index = self.emitted - 1, description = %step.description, "step");
                return Some(step);
            }
            if self.finished {
                return None;
            }
            if !self.sim.advance(&mut self.pending) {
                self.finished = true;
                debug!(
                    algorithm = S::ID,
                    steps = self.emitted + self.pending.len(),
                    "simulation complete"
                );
            }
        }
    }
}

impl<S: Simulate> std::iter::FusedIterator for Steps<S> {}
