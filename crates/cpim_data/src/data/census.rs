use crate::SiteState;
use serde::{Deserialize, Serialize};

/// Per-state site counters of a lattice.
///
/// `occupied + vacant` is the lattice area and
/// `up + down + undifferentiated` is `occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Census {
    pub occupied: usize,
    pub vacant: usize,
    pub up: usize,
    pub down: usize,
    pub undifferentiated: usize,
}

impl Census {
    /// Census of an all-vacant lattice with `area` sites.
    #[must_use]
    pub fn empty(area: usize) -> Self {
        Self {
            vacant: area,
            ..Self::default()
        }
    }

    /// Recount from a slice of states.
    #[must_use]
    pub fn scan(cells: &[SiteState]) -> Self {
        let mut census = Self::default();
        for &state in cells {
            census.add(state);
        }
        census
    }

    #[must_use]
    pub fn area(&self) -> usize {
        self.occupied + self.vacant
    }

    /// Adjust counters for one site moving from `from` to `to`.
    pub fn transition(&mut self, from: SiteState, to: SiteState) {
        if from == to {
            return;
        }
        self.remove(from);
        self.add(to);
    }

    fn add(&mut self, state: SiteState) {
        match state {
            SiteState::Vacant => self.vacant += 1,
            SiteState::Undifferentiated => {
                self.occupied += 1;
                self.undifferentiated += 1;
            }
            SiteState::SpinUp => {
                self.occupied += 1;
                self.up += 1;
            }
            SiteState::SpinDown => {
                self.occupied += 1;
                self.down += 1;
            }
        }
    }

    fn remove(&mut self, state: SiteState) {
        match state {
            SiteState::Vacant => self.vacant -= 1,
            SiteState::Undifferentiated => {
                self.occupied -= 1;
                self.undifferentiated -= 1;
            }
            SiteState::SpinUp => {
                self.occupied -= 1;
                self.up -= 1;
            }
            SiteState::SpinDown => {
                self.occupied -= 1;
                self.down -= 1;
            }
        }
    }

    #[must_use]
    pub fn is_consistent(&self, area: usize) -> bool {
        self.occupied + self.vacant == area
            && self.up + self.down + self.undifferentiated == self.occupied
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.occupied == 0
    }

    /// Fraction of the lattice that is occupied.
    #[must_use]
    pub fn density(&self) -> f64 {
        let area = self.area();
        if area == 0 {
            return 0.0;
        }
        self.occupied as f64 / area as f64
    }

    /// Share of occupied sites that are SpinUp. `None` when nothing is occupied.
    #[must_use]
    pub fn up_fraction(&self) -> Option<f64> {
        self.ratio(self.up)
    }

    /// Share of occupied sites that are SpinDown. `None` when nothing is occupied.
    #[must_use]
    pub fn down_fraction(&self) -> Option<f64> {
        self.ratio(self.down)
    }

    /// `(up - down) / occupied`. `None` when nothing is occupied.
    #[must_use]
    pub fn magnetization(&self) -> Option<f64> {
        if self.occupied == 0 {
            return None;
        }
        Some((self.up as f64 - self.down as f64) / self.occupied as f64)
    }

    fn ratio(&self, count: usize) -> Option<f64> {
        if self.occupied == 0 {
            None
        } else {
            Some(count as f64 / self.occupied as f64)
        }
    }
}
