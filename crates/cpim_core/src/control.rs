//! Control surface: the commands an operator can issue between sweeps.

use cpim_data::InitialCondition;
use serde::{Deserialize, Serialize};

use crate::engine::{Simulation, SweepReport};
use crate::rng::{RandomSource, SimRng};
use crate::scheduler::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Init(InitialCondition),
    Start,
    Stop,
    SetBirthRate(f64),
    SetDeathRate(f64),
    SetDifferentiationRate(f64),
    SetTemperature(f64),
    SetCoupling(f64),
    SetField(f64),
    SetNeighborhood(u8),
}

/// What a command changed, for the caller to react to (e.g. export on stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Initialized,
    Started,
    Stopped,
    ParameterChanged,
    Ignored,
}

/// Owns a simulation and its scheduler and routes commands to them.
pub struct Controller<R: RandomSource = SimRng> {
    pub simulation: Simulation<R>,
    pub scheduler: Scheduler,
}

impl<R: RandomSource> Controller<R> {
    #[must_use]
    pub fn new(simulation: Simulation<R>) -> Self {
        Self {
            simulation,
            scheduler: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Setters assign without validation; the caller constrains the range.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Init(initial) => {
                self.simulation.init(initial);
                Outcome::Initialized
            }
            Command::Start => {
                if self.scheduler.start(&self.simulation) {
                    Outcome::Started
                } else {
                    Outcome::Ignored
                }
            }
            Command::Stop => {
                if self.scheduler.stop() {
                    Outcome::Stopped
                } else {
                    Outcome::Ignored
                }
            }
            setter => {
                let params = self.simulation.params_mut();
                match setter {
                    Command::SetBirthRate(v) => params.birth_rate = v,
                    Command::SetDeathRate(v) => params.death_rate = v,
                    Command::SetDifferentiationRate(v) => params.differentiation_rate = v,
                    Command::SetTemperature(v) => params.temperature = v,
                    Command::SetCoupling(v) => params.coupling = v,
                    Command::SetField(v) => params.magnetic_field = v,
                    Command::SetNeighborhood(r) => params.neighborhood_radius = r,
                    Command::Init(_) | Command::Start | Command::Stop => return Outcome::Ignored,
                }
                tracing::debug!(command = ?setter, "Parameter updated");
                Outcome::ParameterChanged
            }
        }
    }

    /// One scheduling step: a sweep if armed, otherwise nothing.
    pub fn tick(&mut self) -> Option<SweepReport> {
        self.scheduler.tick(&mut self.simulation)
    }
}
