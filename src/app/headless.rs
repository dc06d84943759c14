use anyhow::Result;

use cpim_core::control::{Command, Outcome};

use crate::app::state::App;

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub generations: u64,
    pub occupied: usize,
    pub extinct: bool,
}

impl App {
    /// Runs without a terminal until extinction or the generation limit.
    ///
    /// An uninitialised lattice is seeded with the selected initial
    /// condition first. With no generation limit the run only ends on
    /// extinction.
    pub fn run_headless(&mut self) -> Result<RunSummary> {
        if !self.controller.simulation.is_initialized() {
            self.dispatch(Command::Init(self.selected_init));
        }
        if self.dispatch(Command::Start) != Outcome::Started {
            anyhow::bail!("Simulation could not be started");
        }

        while self.running && self.controller.is_running() {
            if self.step().is_none() {
                break;
            }
        }

        let sim = &self.controller.simulation;
        let summary = RunSummary {
            generations: sim.generation(),
            occupied: sim.census().occupied,
            extinct: sim.is_extinct(),
        };
        tracing::info!(
            generations = summary.generations,
            occupied = summary.occupied,
            extinct = summary.extinct,
            "Headless run finished"
        );
        Ok(summary)
    }
}
