//! Sweep scheduling.
//!
//! The scheduler is armed by `start` and disarmed by `stop` or by
//! extinction. A sweep in progress always runs to completion; disarming
//! only prevents the next one.

use crate::engine::{Simulation, SweepReport};
use crate::rng::RandomSource;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scheduler {
    armed: bool,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arms the scheduler. Returns `false` (and does nothing) if the
    /// simulation is not initialised or the scheduler is already armed.
    pub fn start<R: RandomSource>(&mut self, sim: &Simulation<R>) -> bool {
        if self.armed || !sim.is_initialized() {
            return false;
        }
        self.armed = true;
        true
    }

    /// Disarms the scheduler. Returns whether it was armed.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.armed, false)
    }

    /// Runs one sweep if armed, disarming on extinction.
    pub fn tick<R: RandomSource>(&mut self, sim: &mut Simulation<R>) -> Option<SweepReport> {
        if !self.armed {
            return None;
        }
        let report = sim.sweep()?;
        if report.extinct {
            self.armed = false;
        }
        Some(report)
    }
}
