use serde::{Deserialize, Serialize};

/// State of a single lattice site.
///
/// Every cell holds exactly one tag. `Undifferentiated` is the transient
/// occupied state that exists before a site acquires a spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SiteState {
    #[default]
    Vacant,
    Undifferentiated,
    SpinUp,
    SpinDown,
}

impl SiteState {
    pub const ALL: [SiteState; 4] = [
        SiteState::Vacant,
        SiteState::Undifferentiated,
        SiteState::SpinUp,
        SiteState::SpinDown,
    ];

    /// Ising spin carried by the site: `+1`, `-1`, or `0` for sites without a spin.
    #[inline]
    #[must_use]
    pub fn spin(self) -> i32 {
        match self {
            SiteState::SpinUp => 1,
            SiteState::SpinDown => -1,
            SiteState::Vacant | SiteState::Undifferentiated => 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_occupied(self) -> bool {
        self != SiteState::Vacant
    }

    #[inline]
    #[must_use]
    pub fn has_spin(self) -> bool {
        matches!(self, SiteState::SpinUp | SiteState::SpinDown)
    }

    /// The opposite spin. Sites without a spin are returned unchanged.
    #[inline]
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SiteState::SpinUp => SiteState::SpinDown,
            SiteState::SpinDown => SiteState::SpinUp,
            other => other,
        }
    }

    /// Spin state from a coin toss: `true` is up.
    #[inline]
    #[must_use]
    pub fn from_coin(up: bool) -> Self {
        if up {
            SiteState::SpinUp
        } else {
            SiteState::SpinDown
        }
    }
}
