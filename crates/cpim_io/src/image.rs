//! PNG export of lattice snapshots, one pixel per site.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use cpim_core::config::Parameters;
use cpim_core::palette::SitePalette;
use cpim_core::snapshot::LatticeSnapshot;

use crate::error::{IoError, Result};

/// File name keyed by the current temperature and coupling.
#[must_use]
pub fn snapshot_file_name(params: &Parameters) -> String {
    format!("T_{:.2}_J_{:.2}_.png", params.temperature, params.coupling)
}

/// Row-major RGB bytes of the snapshot.
#[must_use]
pub fn rgb_buffer(snapshot: &LatticeSnapshot) -> Vec<u8> {
    let mut img = Vec::with_capacity(snapshot.cells.len() * 3);
    for state in &snapshot.cells {
        img.extend_from_slice(&state.rgb());
    }
    img
}

/// Writes `snapshot` as an 8-bit RGB PNG.
pub fn save_png(path: &Path, snapshot: &LatticeSnapshot) -> Result<()> {
    if snapshot.width == 0
        || snapshot.height == 0
        || snapshot.cells.len() != snapshot.width * snapshot.height
    {
        return Err(IoError::validation(format!(
            "snapshot has {} cells for a {}x{} lattice",
            snapshot.cells.len(),
            snapshot.width,
            snapshot.height
        )));
    }
    let file = File::create(path)?;
    let w = BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, snapshot.width as u32, snapshot.height as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Fast);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&rgb_buffer(snapshot))?;
    writer.finish()?;
    Ok(())
}

/// Saves the snapshot into `dir` under [`snapshot_file_name`].
pub fn export_snapshot(
    dir: &Path,
    snapshot: &LatticeSnapshot,
    params: &Parameters,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(snapshot_file_name(params));
    save_png(&path, snapshot)
        .map_err(|e| e.with_context(format!("exporting {}", path.display())))?;
    tracing::info!(path = %path.display(), generation = snapshot.generation, "Snapshot saved");
    Ok(path)
}
