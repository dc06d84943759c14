//! Toroidal lattice of site states with incrementally maintained counters.

use crate::rng::RandomSource;
use cpim_data::{Census, InitialCondition, SiteState};
use serde::{Deserialize, Serialize};

/// W×H periodic grid, stored row-major.
///
/// Every write goes through [`Lattice::set`], which adjusts the census in
/// the same step, so the counters never need a full rescan.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Lattice {
    width: usize,
    height: usize,
    cells: Vec<SiteState>,
    census: Census,
}

impl Lattice {
    /// All-vacant lattice. Both sides must be positive.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "lattice sides must be positive");
        let area = width * height;
        Self {
            width,
            height,
            cells: vec![SiteState::Vacant; area],
            census: Census::empty(area),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn census(&self) -> &Census {
        &self.census
    }

    /// Row-major view of every site.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[SiteState] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is off a {}x{} lattice",
            self.width,
            self.height
        );
        y * self.width + x
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> SiteState {
        self.cells[self.index(x, y)]
    }

    /// State at `(x + dx, y + dy)` with both coordinates wrapped.
    #[inline]
    #[must_use]
    pub fn get_offset(&self, x: usize, y: usize, dx: i32, dy: i32) -> SiteState {
        let (wx, wy) = self.wrap(x, y, dx, dy);
        self.get(wx, wy)
    }

    /// Writes `state` at `(x, y)` and returns the previous state.
    pub fn set(&mut self, x: usize, y: usize, state: SiteState) -> SiteState {
        let idx = self.index(x, y);
        let previous = std::mem::replace(&mut self.cells[idx], state);
        self.census.transition(previous, state);
        previous
    }

    /// Toroidal reduction of `(x + dx, y + dy)`.
    #[inline]
    #[must_use]
    pub fn wrap(&self, x: usize, y: usize, dx: i32, dy: i32) -> (usize, usize) {
        let wx = (x as i64 + dx as i64).rem_euclid(self.width as i64) as usize;
        let wy = (y as i64 + dy as i64).rem_euclid(self.height as i64) as usize;
        (wx, wy)
    }

    #[must_use]
    pub fn center(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// Sets every site Vacant and zeroes the counters.
    pub fn clear(&mut self) {
        self.cells.fill(SiteState::Vacant);
        self.census = Census::empty(self.area());
    }

    /// Clears the lattice and applies one seeding policy.
    pub fn reset<R: RandomSource>(&mut self, initial: InitialCondition, rng: &mut R) {
        self.clear();
        let (cx, cy) = self.center();
        match initial {
            InitialCondition::SingleSpin => {
                self.set(cx, cy, SiteState::from_coin(rng.coin()));
            }
            InitialCondition::SingleUndifferentiated => {
                self.set(cx, cy, SiteState::Undifferentiated);
            }
            InitialCondition::UndifferentiatedBlock => {
                self.fill_block(cx, cy, |_| SiteState::Undifferentiated, rng);
            }
            InitialCondition::SpinBlock => {
                self.fill_block(cx, cy, |rng| SiteState::from_coin(rng.coin()), rng);
            }
            InitialCondition::FullUndifferentiated => {
                self.cells.fill(SiteState::Undifferentiated);
                let area = self.area();
                self.census = Census {
                    occupied: area,
                    vacant: 0,
                    up: 0,
                    down: 0,
                    undifferentiated: area,
                };
            }
        }
    }

    fn fill_block<R, F>(&mut self, cx: usize, cy: usize, mut state: F, rng: &mut R)
    where
        R: RandomSource,
        F: FnMut(&mut R) -> SiteState,
    {
        let half = InitialCondition::BLOCK_HALF_WIDTH as i32;
        for dy in -half..=half {
            for dx in -half..=half {
                let (x, y) = self.wrap(cx, cy, dx, dy);
                let s = state(rng);
                self.set(x, y, s);
            }
        }
    }
}
