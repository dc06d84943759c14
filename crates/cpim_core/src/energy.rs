//! Ising interaction energy of a spin site.
//!
//! `E(x, y) = s · (J · Σ s_n − B)` over the four orthogonal neighbors, where
//! sites without a spin contribute zero. Flipping the focal spin changes the
//! energy by `ΔE = −2·E`. With this sign convention a negative `J` favors
//! aligned neighbors.

use crate::config::Parameters;
use crate::lattice::Lattice;
use crate::neighborhood::four_neighbors;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyModel {
    pub coupling: f64,
    pub field: f64,
}

impl EnergyModel {
    #[must_use]
    pub fn new(coupling: f64, field: f64) -> Self {
        Self { coupling, field }
    }

    /// Net spin of the four neighbors: up count minus down count.
    #[inline]
    #[must_use]
    pub fn neighbor_spin(lattice: &Lattice, x: usize, y: usize) -> i32 {
        four_neighbors(lattice, x, y).iter().map(|s| s.spin()).sum()
    }

    /// Local energy of the site, or `None` if it holds no spin.
    #[inline]
    #[must_use]
    pub fn local_energy(&self, lattice: &Lattice, x: usize, y: usize) -> Option<f64> {
        let spin = lattice.get(x, y).spin();
        if spin == 0 {
            return None;
        }
        let sum = Self::neighbor_spin(lattice, x, y) as f64;
        Some(spin as f64 * (self.coupling * sum - self.field))
    }

    /// Energy change from inverting the focal spin with neighbors held fixed.
    #[inline]
    #[must_use]
    pub fn flip_delta(&self, lattice: &Lattice, x: usize, y: usize) -> Option<f64> {
        self.local_energy(lattice, x, y).map(|e| -2.0 * e)
    }
}

impl From<&Parameters> for EnergyModel {
    fn from(params: &Parameters) -> Self {
        Self::new(params.coupling, params.magnetic_field)
    }
}

/// Metropolis acceptance probability: 1 for `ΔE ≤ 0`, else `exp(−ΔE/T)`.
#[inline]
#[must_use]
pub fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta <= 0.0 {
        1.0
    } else {
        (-delta / temperature).exp()
    }
}
