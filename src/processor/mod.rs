//! Component 2 – the functional core.
//!
//! ISO rows first, then the IANA registry (which builds the description
//! index), then Scripts.txt resolved against that index.
pub mod interner;
pub mod ranges;
pub mod resolver;
pub mod schema;

use tracing::info;

use crate::model::{Snapshot, Sources};
use crate::parser::{iana, iso, scripts};
use schema::SchemaBuilder;

/// Runs every processing pass and returns a read-only snapshot for writers.
pub fn run(sources: &Sources) -> Snapshot {
    let mut schema = SchemaBuilder::new();

    for (code, subtag) in iso::parse_iso(&sources.iso) {
        schema.insert_iso(code, subtag);
    }

    let registry = iana::parse_registry(&sources.iana);
    if let Some(date) = registry.file_date {
        schema.set_file_date(date);
    }
    for record in &registry.records {
        schema.commit(record);
    }
    info!(
        "registry: {} records, {} rows",
        registry.records.len(),
        schema.row_count()
    );

    let stage = schema.seal();
    let spans = ranges::collapse(scripts::parse_scripts(&sources.scripts));
    let snapshot = stage.finish(&spans);

    info!(
        "snapshot {}: {} values, {} subtag rows, {} iso codes, {} script ranges, {} unresolved",
        snapshot.file_date.as_deref().unwrap_or("unknown"),
        snapshot.values.len(),
        snapshot.subtags.len(),
        snapshot.iso_map.len(),
        snapshot.script_map.len(),
        snapshot.unresolved.len()
    );
    snapshot
}
