//! Monte Carlo sweep over the lattice.
//!
//! One generation is `W·H` visits to uniformly drawn sites. Visits are
//! applied in sequence and each one sees the result of all earlier visits
//! in the same sweep.

use std::time::{Duration, Instant};

use cpim_data::{Census, InitialCondition, SiteState};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, Parameters};
use crate::energy::{acceptance_probability, EnergyModel};
use crate::lattice::Lattice;
use crate::neighborhood::Neighborhood;
use crate::rng::{RandomSource, SimRng};
use crate::snapshot::LatticeSnapshot;

/// Outcome of a single site visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Unchanged,
    /// Vacant site colonized with a copy of a neighbor.
    Birth(SiteState),
    Death,
    /// Undifferentiated site acquired a spin.
    Differentiation(SiteState),
    /// Spin inverted by the Metropolis rule.
    Flip(SiteState),
}

/// Number of transitions of each kind during one sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepEvents {
    pub births: usize,
    pub deaths: usize,
    pub differentiations: usize,
    pub flips: usize,
}

impl SweepEvents {
    fn record(&mut self, visit: Visit) {
        match visit {
            Visit::Unchanged => {}
            Visit::Birth(_) => self.births += 1,
            Visit::Death => self.deaths += 1,
            Visit::Differentiation(_) => self.differentiations += 1,
            Visit::Flip(_) => self.flips += 1,
        }
    }
}

/// Statistics of one completed generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    pub generation: u64,
    pub census: Census,
    pub events: SweepEvents,
    pub duration: Duration,
    /// No occupied site remains; further sweeps cannot change the lattice.
    pub extinct: bool,
}

impl SweepReport {
    #[must_use]
    pub fn density(&self) -> f64 {
        self.census.density()
    }

    #[must_use]
    pub fn up_fraction(&self) -> Option<f64> {
        self.census.up_fraction()
    }

    #[must_use]
    pub fn down_fraction(&self) -> Option<f64> {
        self.census.down_fraction()
    }

    #[must_use]
    pub fn magnetization(&self) -> Option<f64> {
        self.census.magnetization()
    }
}

/// Everything a visit reads, fixed for the duration of a sweep.
struct VisitRules<'a> {
    params: Parameters,
    energy: EnergyModel,
    colonization: &'a Neighborhood,
}

/// Simulation context: lattice, parameters, random source and run flags.
///
/// Independent instances share nothing, so several can run side by side.
pub struct Simulation<R: RandomSource = SimRng> {
    lattice: Lattice,
    params: Parameters,
    rng: R,
    generation: u64,
    initialized: bool,
    colonization: Neighborhood,
}

impl Simulation<SimRng> {
    /// Builds a simulation from validated configuration. A configured seed
    /// gives a reproducible run; otherwise the wall clock seeds the RNG.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let rng = match config.lattice.seed {
            Some(seed) => SimRng::seeded(seed),
            None => SimRng::from_clock(),
        };
        tracing::info!(
            width = config.lattice.width,
            height = config.lattice.height,
            seed = rng.seed(),
            "Simulation created"
        );
        Ok(Self::new(
            config.lattice.width as usize,
            config.lattice.height as usize,
            config.parameters,
            rng,
        ))
    }
}

impl<R: RandomSource> Simulation<R> {
    #[must_use]
    pub fn new(width: usize, height: usize, params: Parameters, rng: R) -> Self {
        let colonization = Neighborhood::diamond(params.neighborhood_radius.max(1));
        Self {
            lattice: Lattice::new(width, height),
            params,
            rng,
            generation: 0,
            initialized: false,
            colonization,
        }
    }

    #[must_use]
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    #[must_use]
    pub fn census(&self) -> &Census {
        self.lattice.census()
    }

    #[must_use]
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Mutable parameters. Only reachable between sweeps.
    pub fn params_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.lattice.census().is_extinct()
    }

    /// Value copy of the grid for renderers and exporters.
    #[must_use]
    pub fn snapshot(&self) -> LatticeSnapshot {
        LatticeSnapshot::capture(&self.lattice, self.generation)
    }

    /// Writes one site without touching the generation or the
    /// initialisation gate. Counters stay consistent.
    pub fn place(&mut self, x: usize, y: usize, state: SiteState) {
        self.lattice.set(x, y, state);
    }

    /// Initialises from an explicit list of occupied sites on an otherwise
    /// vacant lattice. An empty list gives an initialised empty lattice.
    pub fn init_sites<I>(&mut self, sites: I) -> Census
    where
        I: IntoIterator<Item = (usize, usize, SiteState)>,
    {
        self.lattice.clear();
        for (x, y, state) in sites {
            self.lattice.set(x, y, state);
        }
        self.generation = 0;
        self.initialized = true;
        let census = *self.lattice.census();
        tracing::info!(
            policy = "explicit sites",
            occupied = census.occupied,
            up = census.up,
            down = census.down,
            "Lattice initialized"
        );
        census
    }

    /// Resets the lattice with `initial` and marks the run initialised.
    pub fn init(&mut self, initial: InitialCondition) -> Census {
        self.lattice.reset(initial, &mut self.rng);
        self.params.init_option = initial;
        self.generation = 0;
        self.initialized = true;
        let census = *self.lattice.census();
        tracing::info!(
            init_option = initial.option_number(),
            policy = initial.label(),
            occupied = census.occupied,
            up = census.up,
            down = census.down,
            "Lattice initialized"
        );
        census
    }

    /// Runs one generation of `W·H` random visits.
    ///
    /// Returns `None` without touching the lattice if it was never
    /// initialised.
    pub fn sweep(&mut self) -> Option<SweepReport> {
        if !self.initialized {
            tracing::debug!("Sweep requested before initialization, ignoring");
            return None;
        }
        let start = Instant::now();
        let params = self.params;
        self.refresh_neighborhood(params.neighborhood_radius);

        let rules = VisitRules {
            params,
            energy: EnergyModel::from(&params),
            colonization: &self.colonization,
        };
        let width = self.lattice.width();
        let height = self.lattice.height();
        let mut events = SweepEvents::default();

        for _ in 0..self.lattice.area() {
            let x = self.rng.below(width);
            let y = self.rng.below(height);
            let visit = apply_visit(&mut self.lattice, &mut self.rng, &rules, x, y);
            events.record(visit);
        }

        self.generation += 1;
        let census = *self.lattice.census();
        let report = SweepReport {
            generation: self.generation,
            census,
            events,
            duration: start.elapsed(),
            extinct: census.is_extinct(),
        };
        tracing::debug!(
            generation = report.generation,
            density = report.density(),
            up = census.up,
            down = census.down,
            magnetization = report.magnetization().unwrap_or(f64::NAN),
            births = events.births,
            deaths = events.deaths,
            flips = events.flips,
            "Sweep complete"
        );
        if report.extinct {
            tracing::info!(generation = report.generation, "Extinction: lattice is empty");
        }
        Some(report)
    }

    /// Applies the update rule to the site at `(x, y)` once, using the
    /// current parameters.
    pub fn visit(&mut self, x: usize, y: usize) -> Visit {
        let params = self.params;
        self.refresh_neighborhood(params.neighborhood_radius);
        let rules = VisitRules {
            params,
            energy: EnergyModel::from(&params),
            colonization: &self.colonization,
        };
        apply_visit(&mut self.lattice, &mut self.rng, &rules, x, y)
    }

    fn refresh_neighborhood(&mut self, radius: u8) {
        let radius = radius.max(1);
        if self.colonization.radius() != radius {
            self.colonization = Neighborhood::diamond(radius);
        }
    }
}

fn apply_visit<R: RandomSource>(
    lattice: &mut Lattice,
    rng: &mut R,
    rules: &VisitRules<'_>,
    x: usize,
    y: usize,
) -> Visit {
    let params = &rules.params;
    match lattice.get(x, y) {
        SiteState::Vacant => {
            let neighbor = rules.colonization.sample(lattice, x, y, rng);
            if rng.chance(params.birth_rate) && neighbor.is_occupied() {
                lattice.set(x, y, neighbor);
                Visit::Birth(neighbor)
            } else {
                Visit::Unchanged
            }
        }
        SiteState::Undifferentiated => {
            let total = params.death_rate + params.differentiation_rate;
            if total <= 0.0 {
                return Visit::Unchanged;
            }
            if rng.unit() < params.death_rate / total {
                if rng.chance(params.death_rate) {
                    lattice.set(x, y, SiteState::Vacant);
                    return Visit::Death;
                }
            } else if rng.chance(params.differentiation_rate) {
                let spin = SiteState::from_coin(rng.coin());
                lattice.set(x, y, spin);
                return Visit::Differentiation(spin);
            }
            Visit::Unchanged
        }
        state @ (SiteState::SpinUp | SiteState::SpinDown) => {
            if rng.chance(params.death_rate) {
                lattice.set(x, y, SiteState::Vacant);
                return Visit::Death;
            }
            let delta = rules.energy.flip_delta(lattice, x, y).unwrap_or(0.0);
            if delta < 0.0 || rng.unit() < acceptance_probability(delta, params.temperature) {
                let flipped = state.flipped();
                lattice.set(x, y, flipped);
                Visit::Flip(flipped)
            } else {
                Visit::Unchanged
            }
        }
    }
}
