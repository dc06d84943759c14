//! Exported artifacts of a run: lattice images and census logs.

pub mod census_log;
pub mod error;
pub mod image;

pub use census_log::{CensusLog, CensusRecord};
pub use error::{IoError, Result};
pub use image::{export_snapshot, save_png, snapshot_file_name};
