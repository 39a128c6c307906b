//! Component 3 – turning a `Snapshot` into files.
pub mod json;
pub mod sql;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `bytes` next to `path` first and move it into place, so a failed
/// run leaves nothing half-written behind.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Creating temporary file in {}", dir.display()))?;
    tmp.write_all(bytes)
        .with_context(|| format!("Writing {}", tmp.path().display()))?;
    tmp.persist(path)
        .with_context(|| format!("Moving output into {}", path.display()))?;
    Ok(())
}
