//! # CPIM Core
//!
//! Simulation kernel of the contact process Ising model: a spatial
//! birth-death process on a periodic lattice whose occupants carry Ising
//! spins updated by single-spin-flip Metropolis dynamics.
//!
//! This crate contains:
//! - The lattice with incrementally maintained per-state counters
//! - Toroidal neighborhood queries (von Neumann and diamond stencils)
//! - The local interaction energy and Metropolis acceptance
//! - The asynchronous Monte Carlo sweep, its statistics and the
//!   extinction condition
//! - A scheduler and control surface for interactive front ends
//!
//! ## Example
//!
//! ```
//! use cpim_core::config::Parameters;
//! use cpim_core::engine::Simulation;
//! use cpim_core::rng::SimRng;
//! use cpim_data::InitialCondition;
//!
//! let mut sim = Simulation::new(64, 64, Parameters::default(), SimRng::seeded(42));
//! sim.init(InitialCondition::SpinBlock);
//! let report = sim.sweep().expect("initialized");
//! assert_eq!(report.generation, 1);
//! assert!(report.census.is_consistent(64 * 64));
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Operator commands and the controller that applies them
pub mod control;
/// Local Ising energy and Metropolis acceptance
pub mod energy;
/// The Monte Carlo sweep and the simulation context
pub mod engine;
/// Lattice grid and counters
pub mod lattice;
/// Run metrics and structured logging
pub mod metrics;
/// Toroidal neighbor queries
pub mod neighborhood;
/// Colors and glyphs for site states
pub mod palette;
/// Random number primitives
pub mod rng;
/// Sweep scheduling
pub mod scheduler;
/// Read-only lattice snapshots for renderers
pub mod snapshot;

pub use config::{AppConfig, Parameters};
pub use control::{Command, Controller, Outcome};
pub use engine::{Simulation, SweepReport};
pub use metrics::{init_logging, LogTarget, Metrics};
pub use palette::SitePalette;
pub use rng::{RandomSource, SimRng};
pub use snapshot::{LatticeSnapshot, SweepObserver};
