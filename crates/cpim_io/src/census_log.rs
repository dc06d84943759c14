//! Append-only JSON-lines log of per-state site counts.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use cpim_core::config::Parameters;
use cpim_core::engine::SweepReport;
use cpim_core::lattice::Lattice;
use cpim_core::snapshot::SweepObserver;
use cpim_data::Census;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const CENSUS_FILE: &str = "census.jsonl";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CensusRecord {
    pub timestamp: DateTime<Utc>,
    pub generation: u64,
    pub density: f64,
    /// `(up - down) / occupied`, absent on an empty lattice.
    pub magnetization: Option<f64>,
    pub temperature: f64,
    pub coupling: f64,
    pub vacant: usize,
    pub undifferentiated: usize,
    pub up: usize,
    pub down: usize,
    pub area: usize,
    pub fingerprint: String,
}

impl CensusRecord {
    #[must_use]
    pub fn new(generation: u64, census: &Census, params: &Parameters, fingerprint: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            generation,
            density: census.density(),
            magnetization: census.magnetization(),
            temperature: params.temperature,
            coupling: params.coupling,
            vacant: census.vacant,
            undifferentiated: census.undifferentiated,
            up: census.up,
            down: census.down,
            area: census.area(),
            fingerprint: fingerprint.to_string(),
        }
    }

    /// Per-state counts add up to the lattice area.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.vacant + self.undifferentiated + self.up + self.down == self.area
    }
}

pub struct CensusLog {
    path: PathBuf,
    fingerprint: String,
    params: Parameters,
    /// Record every n-th generation when used as an observer.
    every: u64,
}

impl CensusLog {
    #[must_use]
    pub fn new(dir: &Path, fingerprint: impl Into<String>, params: Parameters) -> Self {
        Self {
            path: dir.join(CENSUS_FILE),
            fingerprint: fingerprint.into(),
            params,
            every: 1,
        }
    }

    #[must_use]
    pub fn every(mut self, generations: u64) -> Self {
        self.every = generations.max(1);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parameters stamped on later records.
    pub fn set_parameters(&mut self, params: Parameters) {
        self.params = params;
    }

    pub fn record(&self, generation: u64, census: &Census) -> Result<CensusRecord> {
        let record = CensusRecord::new(generation, census, &self.params, &self.fingerprint);
        self.append(&record)?;
        Ok(record)
    }

    pub fn append(&self, record: &CensusRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<CensusRecord>> {
        let file = std::fs::File::open(&self.path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            records.push(serde_json::from_str(&line)?);
        }
        Ok(records)
    }
}

impl SweepObserver for CensusLog {
    fn on_sweep(&mut self, report: &SweepReport, _lattice: &Lattice) -> anyhow::Result<()> {
        if report.generation.is_multiple_of(self.every) || report.extinct {
            self.record(report.generation, &report.census)?;
        }
        Ok(())
    }
}
