// File: crates/gross-chart/src/input.rs
// Summary: Input path resolution with the .csv/.cvs extension swap.

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
pub fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
