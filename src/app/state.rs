use anyhow::Result;
use std::path::PathBuf;

use cpim_core::config::AppConfig;
use cpim_core::control::{Command, Controller, Outcome};
use cpim_core::engine::{Simulation, SweepReport};
use cpim_core::metrics::Metrics;
use cpim_core::snapshot::SweepObserver;
use cpim_data::InitialCondition;
use cpim_io::CensusLog;

pub struct App {
    pub running: bool,
    pub controller: Controller,
    pub metrics: Metrics,
    pub config: AppConfig,
    pub census_log: CensusLog,
    pub selected_init: InitialCondition,
    pub last_report: Option<SweepReport>,
    pub message: Option<String>,
    /// Write a PNG and a census line whenever a run is stopped.
    pub export_on_stop: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let simulation = Simulation::from_config(&config)?;
        let census_log = CensusLog::new(
            &PathBuf::from(&config.run.export_dir),
            config.fingerprint(),
            config.parameters,
        )
        .every(config.run.log_interval);
        Ok(Self {
            running: true,
            controller: Controller::new(simulation),
            metrics: Metrics::new(config.run.log_interval),
            selected_init: config.parameters.init_option,
            census_log,
            config,
            last_report: None,
            message: None,
            export_on_stop: true,
        })
    }

    pub fn export_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.run.export_dir)
    }

    fn generation_limit_reached(&self) -> bool {
        self.config
            .run
            .max_generations
            .is_some_and(|max| self.controller.simulation.generation() >= max)
    }

    /// Applies a command and performs its side effects on the app.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = self.controller.apply(command);
        match outcome {
            Outcome::Initialized => {
                self.metrics.reset();
                self.last_report = None;
                self.message = Some(format!("Initialized: {}", self.selected_init.label()));
            }
            Outcome::Started => {
                tracing::info!(
                    generation = self.controller.simulation.generation(),
                    "Simulation started"
                );
                self.message = Some("Running".to_string());
            }
            Outcome::Stopped => {
                tracing::info!(
                    generation = self.controller.simulation.generation(),
                    "Simulation stopped"
                );
                self.message = Some("Stopped".to_string());
                if self.export_on_stop {
                    self.export_or_report();
                }
            }
            Outcome::ParameterChanged => {
                self.census_log
                    .set_parameters(*self.controller.simulation.params());
            }
            Outcome::Ignored => {}
        }
        outcome
    }

    /// Writes the lattice image and appends a census record.
    pub fn export(&mut self) -> Result<PathBuf> {
        let sim = &self.controller.simulation;
        let snapshot = sim.snapshot();
        let path = cpim_io::export_snapshot(&self.export_dir(), &snapshot, sim.params())?;
        self.census_log.record(sim.generation(), sim.census())?;
        Ok(path)
    }

    pub fn export_or_report(&mut self) {
        match self.export() {
            Ok(path) => self.message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                self.message = Some(format!("Export failed: {e}"));
            }
        }
    }

    /// Runs one scheduled sweep and feeds it to metrics and the census log.
    pub fn step(&mut self) -> Option<SweepReport> {
        let report = self.controller.tick()?;
        self.metrics.record_sweep(&report);

        let lattice = self.controller.simulation.lattice();
        if let Err(e) = self.census_log.on_sweep(&report, lattice) {
            tracing::warn!(error = %e, "Census log write failed");
        }

        if report.extinct {
            self.message = Some(format!("Extinct at generation {}", report.generation));
        } else if self.generation_limit_reached() {
            self.dispatch(Command::Stop);
        }

        self.last_report = Some(report);
        Some(report)
    }
}
