//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to `config.toml`.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (override both)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [lattice]
//! width = 200
//! height = 200
//! seed = 42
//!
//! [parameters]
//! birth_rate = 1.0
//! death_rate = 0.05
//! differentiation_rate = 0.1
//! temperature = 0.5
//! coupling = -1.0
//! magnetic_field = 0.0
//! neighborhood_radius = 1
//! init_option = 1
//!
//! [run]
//! target_fps = 60
//! log_interval = 100
//! export_dir = "."
//! ```

use cpim_data::InitialCondition;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lattice geometry and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LatticeConfig {
    pub width: u16,
    pub height: u16,
    /// Fixed RNG seed. `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            seed: None,
        }
    }
}

/// Rates and constants read by a sweep.
///
/// Rates are per-visit probabilities, not rates in physical time.
/// The kernel copies this bundle at the start of every sweep, so
/// changes take effect from the next generation on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Parameters {
    pub birth_rate: f64,
    pub death_rate: f64,
    pub differentiation_rate: f64,
    /// Ising temperature `T`.
    pub temperature: f64,
    /// Ising coupling `J`. Negative aligns neighboring spins.
    pub coupling: f64,
    /// External field `B`.
    pub magnetic_field: f64,
    /// Manhattan radius of the colonization neighborhood.
    pub neighborhood_radius: u8,
    pub init_option: InitialCondition,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            birth_rate: 1.0,
            death_rate: 0.0,
            differentiation_rate: 0.1,
            temperature: 0.001,
            coupling: -1.0,
            magnetic_field: 0.0,
            neighborhood_radius: 1,
            init_option: InitialCondition::SingleSpin,
        }
    }
}

impl Parameters {
    /// Checks ranges that the kernel assumes but does not enforce.
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, rate) in [
            ("Birth rate", self.birth_rate),
            ("Death rate", self.death_rate),
            ("Differentiation rate", self.differentiation_rate),
        ] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&rate),
                "{name} must be in [0.0, 1.0], got {rate}"
            );
        }
        anyhow::ensure!(
            self.temperature.is_finite() && self.temperature > 0.0,
            "Temperature must be positive and finite"
        );
        anyhow::ensure!(self.coupling.is_finite(), "Coupling must be finite");
        anyhow::ensure!(
            self.magnetic_field.is_finite(),
            "Magnetic field must be finite"
        );
        anyhow::ensure!(
            self.neighborhood_radius > 0,
            "Neighborhood radius must be positive"
        );
        Ok(())
    }
}

/// Scheduling, logging and export settings of the application.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RunConfig {
    pub target_fps: u64,
    /// Generations between info-level progress lines.
    pub log_interval: u64,
    pub export_dir: String,
    /// Stop after this many generations (headless mode).
    pub max_generations: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            log_interval: 100,
            export_dir: ".".to_string(),
            max_generations: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub lattice: LatticeConfig,
    pub parameters: Parameters,
    pub run: RunConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a
    /// description of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.lattice.width > 0, "Lattice width must be positive");
        anyhow::ensure!(
            self.lattice.width <= 2048,
            "Lattice width too large (max 2048)"
        );
        anyhow::ensure!(self.lattice.height > 0, "Lattice height must be positive");
        anyhow::ensure!(
            self.lattice.height <= 2048,
            "Lattice height too large (max 2048)"
        );

        self.parameters.validate()?;
        let min_side = self.lattice.width.min(self.lattice.height) as usize;
        anyhow::ensure!(
            (self.parameters.neighborhood_radius as usize) * 2 < min_side,
            "Neighborhood radius {} does not fit a {}x{} lattice",
            self.parameters.neighborhood_radius,
            self.lattice.width,
            self.lattice.height
        );

        anyhow::ensure!(self.run.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.run.target_fps <= 240, "Target FPS too high (max 240)");
        anyhow::ensure!(self.run.log_interval > 0, "Log interval must be positive");
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file is missing or
    /// invalid. A missing file is created with the default values.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let default = Self::default();
                match toml::to_string(&default) {
                    Ok(toml_str) => {
                        if let Err(e) = std::fs::write(path, toml_str) {
                            tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "Could not serialize default config"),
                }
                return default;
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config, using defaults");
            }
        }
        Self::default()
    }

    /// Hex SHA-256 digest of the model parameters.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.parameters).as_bytes());
        hasher.update(format!("{}x{}", self.lattice.width, self.lattice.height).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_lattice_width() {
        let config = AppConfig {
            lattice: LatticeConfig {
                width: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_birth_rate() {
        let config = AppConfig {
            parameters: Parameters {
                birth_rate: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_temperature_rejected() {
        let config = AppConfig {
            parameters: Parameters {
                temperature: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_radius_must_fit_lattice() {
        let config = AppConfig {
            lattice: LatticeConfig {
                width: 4,
                height: 4,
                seed: None,
            },
            parameters: Parameters {
                neighborhood_radius: 2,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [lattice]
            width = 64
            height = 32

            [parameters]
            death_rate = 0.2
            init_option = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.lattice.width, 64);
        assert_eq!(config.lattice.height, 32);
        assert_eq!(config.parameters.death_rate, 0.2);
        assert_eq!(config.parameters.birth_rate, 1.0);
        assert_eq!(config.parameters.init_option, InitialCondition::SpinBlock);
        assert_eq!(config.run.target_fps, 60);
    }

    #[test]
    fn test_invalid_init_option_in_toml() {
        let result = AppConfig::from_toml("[parameters]\ninit_option = 7\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_fingerprint_tracks_parameters() {
        let a = AppConfig::default();
        let mut b = AppConfig::default();
        assert_eq!(a.fingerprint(), b.fingerprint());
        b.parameters.temperature = 2.0;
        assert_ne!(a.fingerprint(), b.fingerprint());
    }
}
