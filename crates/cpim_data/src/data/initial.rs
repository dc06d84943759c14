use serde::{Deserialize, Serialize};

/// Seeding policy applied when the lattice is (re)initialised.
///
/// Numbered 1 through 5 on the control surface and in `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum InitialCondition {
    /// One site at the center, SpinUp or SpinDown with equal probability.
    #[default]
    SingleSpin,
    /// One undifferentiated site at the center.
    SingleUndifferentiated,
    /// Centered square block of undifferentiated sites.
    UndifferentiatedBlock,
    /// Centered square block, each site an independent random spin.
    SpinBlock,
    /// Every site undifferentiated.
    FullUndifferentiated,
}

impl InitialCondition {
    pub const ALL: [InitialCondition; 5] = [
        InitialCondition::SingleSpin,
        InitialCondition::SingleUndifferentiated,
        InitialCondition::UndifferentiatedBlock,
        InitialCondition::SpinBlock,
        InitialCondition::FullUndifferentiated,
    ];

    /// Half-width of the centered seed block.
    pub const BLOCK_HALF_WIDTH: usize = 2;

    #[must_use]
    pub fn option_number(self) -> u8 {
        match self {
            InitialCondition::SingleSpin => 1,
            InitialCondition::SingleUndifferentiated => 2,
            InitialCondition::UndifferentiatedBlock => 3,
            InitialCondition::SpinBlock => 4,
            InitialCondition::FullUndifferentiated => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            InitialCondition::SingleSpin => "single spin",
            InitialCondition::SingleUndifferentiated => "single undifferentiated",
            InitialCondition::UndifferentiatedBlock => "undifferentiated block",
            InitialCondition::SpinBlock => "random spin block",
            InitialCondition::FullUndifferentiated => "full lattice",
        }
    }
}

impl TryFrom<u8> for InitialCondition {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InitialCondition::SingleSpin),
            2 => Ok(InitialCondition::SingleUndifferentiated),
            3 => Ok(InitialCondition::UndifferentiatedBlock),
            4 => Ok(InitialCondition::SpinBlock),
            5 => Ok(InitialCondition::FullUndifferentiated),
            other => anyhow::bail!("Initial condition must be in 1..=5, got {other}"),
        }
    }
}

impl From<InitialCondition> for u8 {
    fn from(value: InitialCondition) -> Self {
        value.option_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_numbers_round_trip() {
        for ic in InitialCondition::ALL {
            assert_eq!(InitialCondition::try_from(ic.option_number()).unwrap(), ic);
        }
    }

    #[test]
    fn test_out_of_range_option_rejected() {
        assert!(InitialCondition::try_from(0).is_err());
        assert!(InitialCondition::try_from(6).is_err());
    }

    #[test]
    fn test_serde_uses_option_number() {
        let json = serde_json::to_string(&InitialCondition::SpinBlock).unwrap();
        assert_eq!(json, "4");
        let parsed: InitialCondition = serde_json::from_str("5").unwrap();
        assert_eq!(parsed, InitialCondition::FullUndifferentiated);
        assert!(serde_json::from_str::<InitialCondition>("9").is_err());
    }
}
