use cpim_core::config::Parameters;
use cpim_core::engine::Simulation;
use cpim_core::rng::SimRng;
use cpim_data::{InitialCondition, SiteState};

type Placement = (usize, usize, SiteState);

#[allow(dead_code)]
pub struct SimulationBuilder {
    width: usize,
    height: usize,
    params: Parameters,
    seed: u64,
    initial: Option<InitialCondition>,
    placements: Vec<Placement>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        Self {
            width: 32,
            height: 32,
            params: Parameters::default(),
            seed: 42,
            initial: None,
            placements: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_params(mut self, params: Parameters) -> Self {
        self.params = params;
        self
    }

    pub fn with_rates(mut self, birth: f64, death: f64, differentiation: f64) -> Self {
        self.params.birth_rate = birth;
        self.params.death_rate = death;
        self.params.differentiation_rate = differentiation;
        self
    }

    pub fn with_ising(mut self, temperature: f64, coupling: f64) -> Self {
        self.params.temperature = temperature;
        self.params.coupling = coupling;
        self
    }

    pub fn with_radius(mut self, radius: u8) -> Self {
        self.params.neighborhood_radius = radius;
        self
    }

    pub fn with_initial(mut self, initial: InitialCondition) -> Self {
        self.initial = Some(initial);
        self
    }

    pub fn with_site(mut self, x: usize, y: usize, state: SiteState) -> Self {
        self.placements.push((x, y, state));
        self
    }

    pub fn build(self) -> Simulation {
        let mut sim = Simulation::new(
            self.width,
            self.height,
            self.params,
            SimRng::seeded(self.seed),
        );
        match self.initial {
            Some(initial) => {
                sim.init(initial);
                for (x, y, state) in self.placements {
                    sim.place(x, y, state);
                }
            }
            None if !self.placements.is_empty() => {
                sim.init_sites(self.placements);
            }
            None => {}
        }
        sim
    }
}
