use crate::engine::SweepReport;
use crate::lattice::Lattice;
use cpim_data::{Census, SiteState};
use serde::{Deserialize, Serialize};

/// Read-only copy of the grid taken after a completed sweep.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LatticeSnapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub cells: Vec<SiteState>,
}

impl LatticeSnapshot {
    #[must_use]
    pub fn capture(lattice: &Lattice, generation: u64) -> Self {
        Self {
            width: lattice.width(),
            height: lattice.height(),
            generation,
            cells: lattice.cells().to_vec(),
        }
    }

    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> SiteState {
        self.cells[y * self.width + x]
    }

    #[must_use]
    pub fn census(&self) -> Census {
        Census::scan(&self.cells)
    }
}

/// Receives every completed sweep with a borrow of the resulting lattice.
/// Observers that keep the grid take a [`LatticeSnapshot`] themselves.
pub trait SweepObserver {
    fn on_sweep(&mut self, report: &SweepReport, lattice: &Lattice) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_detached() {
        let mut lattice = Lattice::new(3, 2);
        lattice.set(2, 1, SiteState::SpinDown);
        let snap = LatticeSnapshot::capture(&lattice, 7);
        lattice.set(2, 1, SiteState::Vacant);
        assert_eq!(snap.get(2, 1), SiteState::SpinDown);
        assert_eq!(snap.generation, 7);
        assert_eq!(snap.census().down, 1);
    }
}
