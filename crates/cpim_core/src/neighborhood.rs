//! Neighbor enumeration under toroidal boundary conditions.
//!
//! A [`Neighborhood`] is a diamond stencil (all offsets with Manhattan
//! distance `1..=r`) built once and reused for every visit. Queries return
//! value copies of neighbor states and never mutate the lattice.

use crate::lattice::Lattice;
use crate::rng::RandomSource;
use cpim_data::SiteState;

/// Orthogonal offsets in `[N, S, E, W]` order.
pub const FOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];

/// Diamond-shaped stencil of radius `r`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    radius: u8,
    offsets: Vec<(i32, i32)>,
}

impl Neighborhood {
    /// All `(i, j) != (0, 0)` with `|i| + |j| <= radius`.
    #[must_use]
    pub fn diamond(radius: u8) -> Self {
        let r = radius as i32;
        let mut offsets = Vec::with_capacity(Self::member_count(radius));
        for i in -r..=r {
            for j in -r..=r {
                if (i == 0 && j == 0) || i.abs() + j.abs() > r {
                    continue;
                }
                offsets.push((i, j));
            }
        }
        Self { radius, offsets }
    }

    /// Radius-1 stencil, the four orthogonal neighbors.
    #[must_use]
    pub fn von_neumann() -> Self {
        Self::diamond(1)
    }

    /// Number of sites in a diamond of radius `r`: `2·r·(r+1)`.
    #[must_use]
    pub const fn member_count(radius: u8) -> usize {
        let r = radius as usize;
        2 * r * (r + 1)
    }

    #[must_use]
    pub fn radius(&self) -> u8 {
        self.radius
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[must_use]
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// States of every member around `(x, y)`.
    #[must_use]
    pub fn states(&self, lattice: &Lattice, x: usize, y: usize) -> Vec<SiteState> {
        self.offsets
            .iter()
            .map(|&(dx, dy)| lattice.get_offset(x, y, dx, dy))
            .collect()
    }

    /// State of one member drawn uniformly.
    #[inline]
    pub fn sample<R: RandomSource>(
        &self,
        lattice: &Lattice,
        x: usize,
        y: usize,
        rng: &mut R,
    ) -> SiteState {
        let (dx, dy) = self.offsets[rng.below(self.offsets.len())];
        lattice.get_offset(x, y, dx, dy)
    }
}

/// Wrapped coordinates of the `[N, S, E, W]` neighbors.
#[inline]
#[must_use]
pub fn four_neighbor_coords(lattice: &Lattice, x: usize, y: usize) -> [(usize, usize); 4] {
    FOUR_OFFSETS.map(|(dx, dy)| lattice.wrap(x, y, dx, dy))
}

/// States of the `[N, S, E, W]` neighbors.
#[inline]
#[must_use]
pub fn four_neighbors(lattice: &Lattice, x: usize, y: usize) -> [SiteState; 4] {
    FOUR_OFFSETS.map(|(dx, dy)| lattice.get_offset(x, y, dx, dy))
}
