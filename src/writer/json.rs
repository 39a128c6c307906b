//! Dump the snapshot as pretty-printed JSON.

use anyhow::{Context, Result};
use std::path::Path;

use crate::model::Snapshot;

pub fn emit(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_vec_pretty(snapshot).context("Serialising snapshot")?;
    super::write_atomic(path, &json)
}
