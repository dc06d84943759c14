//! Run metrics and structured logging setup.

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::engine::SweepReport;

/// Running totals over the sweeps of one run.
pub struct Metrics {
    sweep_count: u64,
    total_duration: Duration,
    log_interval: u64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Metrics {
    /// `log_interval` is the number of sweeps between info-level lines.
    #[must_use]
    pub fn new(log_interval: u64) -> Self {
        Self {
            sweep_count: 0,
            total_duration: Duration::ZERO,
            log_interval: log_interval.max(1),
        }
    }

    /// Records a completed sweep.
    pub fn record_sweep(&mut self, report: &SweepReport) {
        self.sweep_count += 1;
        self.total_duration += report.duration;

        if report.generation.is_multiple_of(self.log_interval) {
            tracing::info!(
                generation = report.generation,
                density = report.density(),
                up_fraction = report.up_fraction().unwrap_or(f64::NAN),
                down_fraction = report.down_fraction().unwrap_or(f64::NAN),
                magnetization = report.magnetization().unwrap_or(f64::NAN),
                duration_ms = report.duration.as_millis() as u64,
                "Simulation progress"
            );
        }
    }

    #[must_use]
    pub fn sweep_count(&self) -> u64 {
        self.sweep_count
    }

    /// Mean wall time per sweep, `None` before the first sweep.
    #[must_use]
    pub fn mean_sweep_duration(&self) -> Option<Duration> {
        if self.sweep_count == 0 {
            return None;
        }
        Some(self.total_duration / self.sweep_count as u32)
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.log_interval);
    }
}

/// Where log output goes.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Drop everything, used while the terminal UI owns the screen.
    Discard,
}

/// Initialize the tracing subscriber. `RUST_LOG` overrides the default
/// `info` level.
pub fn init_logging(target: LogTarget) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match target {
        LogTarget::Stderr => {
            builder.with_writer(std::io::stderr).try_init().ok();
        }
        LogTarget::File(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .ok();
        }
        LogTarget::Discard => {
            builder.with_writer(std::io::sink).try_init().ok();
        }
    }
    Ok(())
}
