//! The schema builder: sole owner of the interner and the output tables.
//!
//! Registry work happens on [`SchemaBuilder`]. Sealing it yields a
//! [`ScriptStage`], the only place the finished description index can be
//! used, so script ranges cannot be resolved before the registry is in.

use std::collections::BTreeMap;

use super::interner::Interner;
use super::resolver::{self, ScriptIndex, ScriptIndexBuilder};
use crate::model::{FieldValue, RawRecord, SCALAR_FIELDS, ScriptSpan, Snapshot, SubtagRow};

#[derive(Debug, Default)]
pub struct SchemaBuilder {
    interner: Interner,
    subtags: Vec<SubtagRow>,
    last_seq: u32,
    iso_map: BTreeMap<String, String>,
    scripts: ScriptIndexBuilder,
    file_date: Option<String>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write for a code wins.
    pub fn insert_iso(&mut self, iso: String, iana: String) {
        self.iso_map.insert(iso, iana);
    }

    pub fn set_file_date(&mut self, date: String) {
        self.file_date = Some(date);
    }

    fn next_seq(&mut self) -> u32 {
        self.last_seq += 1;
        self.last_seq
    }

    /// Materialises one registry record: one row, or one row per prefix.
    pub fn commit(&mut self, record: &RawRecord) {
        // every label and every value becomes addressable, used or not
        for (label, value) in record.fields() {
            self.interner.intern(label);
            match value {
                FieldValue::Scalar(s) => {
                    self.interner.intern(s);
                }
                FieldValue::List(items) => {
                    for item in items {
                        self.interner.intern(item);
                    }
                }
            }
        }

        let mut fields = [None; SCALAR_FIELDS.len()];
        for (col, name) in SCALAR_FIELDS.iter().enumerate() {
            fields[col] = record.scalar(name).and_then(|v| self.interner.get(v));
        }

        let prefixes = record.prefixes();
        if prefixes.is_empty() {
            let seq = self.next_seq();
            self.subtags.push(SubtagRow {
                seq,
                fields,
                prefix: None,
            });
        }
        for prefix in prefixes {
            let seq = self.next_seq();
            let prefix = self.interner.get(prefix);
            self.subtags.push(SubtagRow {
                seq,
                fields,
                prefix,
            });
        }

        if record.scalar("type") == Some("script") {
            if let (Some(description), Some(subtag)) =
                (record.scalar("description"), record.scalar("subtag"))
            {
                self.scripts.learn(description, subtag);
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.subtags.len()
    }

    /// Ends the registry phase and finalises the description index.
    pub fn seal(self) -> ScriptStage {
        ScriptStage {
            index: self.scripts.finish(),
            interner: self.interner,
            subtags: self.subtags,
            iso_map: self.iso_map,
            file_date: self.file_date,
        }
    }
}

/// Registry tables frozen, script map still to fill.
#[derive(Debug)]
pub struct ScriptStage {
    index: ScriptIndex,
    interner: Interner,
    subtags: Vec<SubtagRow>,
    iso_map: BTreeMap<String, String>,
    file_date: Option<String>,
}

impl ScriptStage {
    #[cfg(test)]
    fn index(&self) -> &ScriptIndex {
        &self.index
    }

    /// Resolves collapsed spans and produces the finished snapshot.
    pub fn finish(self, spans: &[ScriptSpan]) -> Snapshot {
        let resolution = resolver::resolve(&self.index, spans);

        let mut script_map = BTreeMap::new();
        let mut script_ends = BTreeMap::new();
        for range in resolution.ranges {
            script_ends.insert(range.to, range.from);
            script_map.insert(range.from, range);
        }

        Snapshot {
            file_date: self.file_date,
            values: self.interner.into_values(),
            subtags: self.subtags,
            iso_map: self.iso_map,
            script_map,
            script_ends,
            unresolved: resolution.unresolved,
        }
    }
}
