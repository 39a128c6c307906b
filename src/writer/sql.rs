//! Emit the snapshot as a replayable SQL statement stream.
//!
//! Layout mirrors an SQLite dump without the transaction wrapper: header,
//! drops, then each table (by name) with its rows, then the index.

use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;

use crate::model::{SCALAR_FIELDS, Snapshot};

const DROPS: &str = "\
DROP TABLE IF EXISTS zlsSubtagData;
DROP TABLE IF EXISTS zlsSubtags;
DROP TABLE IF EXISTS isoTagMap;
DROP TABLE IF EXISTS unicodeScriptMap;
";

const CREATE_ISO_TAG_MAP: &str = "\
CREATE TABLE isoTagMap (
\tiso TEXT PRIMARY KEY,
\tiana TEXT
);";

const CREATE_UNICODE_SCRIPT_MAP: &str = "\
CREATE TABLE unicodeScriptMap (fromCode INT PRIMARY KEY,
\ttoCode INT,
\tscript TEXT
);";

const CREATE_SUBTAG_DATA: &str = "\
CREATE TABLE zlsSubtagData (
\tid INTEGER PRIMARY KEY,
\tvalue TEXT
);";

const CREATE_INDEX: &str = "CREATE INDEX unicodeScriptMap_toCode ON unicodeScriptMap(toCode);";

pub fn emit(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let sql = render(snapshot).context("Rendering SQL")?;
    super::write_atomic(path, sql.as_bytes())
}

pub fn render(snapshot: &Snapshot) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    write_all(&mut out, snapshot)?;
    Ok(out)
}

fn write_all(out: &mut String, snap: &Snapshot) -> std::fmt::Result {
    writeln!(out, "-- {}", snap.file_date.as_deref().unwrap_or("unknown"))?;
    writeln!(out)?;
    writeln!(out, "-- This file is derived from the IANA Language Subtag Registry")?;
    writeln!(out)?;
    writeln!(out, "{DROPS}")?;

    writeln!(out, "{CREATE_ISO_TAG_MAP}")?;
    for (iso, iana) in &snap.iso_map {
        writeln!(out, "INSERT INTO \"isoTagMap\" VALUES({},{});", quote(iso), quote(iana))?;
    }

    writeln!(out, "{CREATE_UNICODE_SCRIPT_MAP}")?;
    for range in snap.script_map.values() {
        writeln!(
            out,
            "INSERT INTO \"unicodeScriptMap\" VALUES({},{},{});",
            range.from,
            range.to,
            quote(&range.script)
        )?;
    }

    writeln!(out, "{CREATE_SUBTAG_DATA}")?;
    for v in &snap.values {
        writeln!(out, "INSERT INTO \"zlsSubtagData\" VALUES({},{});", v.id, quote(&v.value))?;
    }

    writeln!(out, "{}", create_subtags())?;
    for row in &snap.subtags {
        let mut cols = vec![row.seq.to_string()];
        cols.extend(row.fields.iter().map(|f| id_or_null(*f)));
        cols.push(id_or_null(row.prefix));
        writeln!(out, "INSERT INTO \"zlsSubtags\" VALUES({});", cols.join(","))?;
    }

    writeln!(out, "{CREATE_INDEX}")
}

fn create_subtags() -> String {
    let mut cols = vec!["\tseq INTEGER PRIMARY KEY".to_string()];
    cols.extend(SCALAR_FIELDS.iter().map(|f| format!("\t{f} INT")));
    cols.push("\tprefix INT".to_string());
    format!("CREATE TABLE zlsSubtags (\n{}\n);", cols.join(",\n"))
}

fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn id_or_null(id: Option<u32>) -> String {
    id.map_or_else(|| "NULL".to_string(), |id| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InternedValue, ScriptRange, SubtagRow};

    fn sample() -> Snapshot {
        let mut snap = Snapshot {
            file_date: Some("20240307".into()),
            values: vec![
                InternedValue { id: 1, value: "type".into() },
                InternedValue { id: 2, value: "N'Ko".into() },
            ],
            subtags: vec![SubtagRow {
                seq: 1,
                fields: [None, None, Some(1), None, None, None, None, None, Some(2), None, None],
                prefix: None,
            }],
            ..Default::default()
        };
        snap.iso_map.insert("aar".into(), "aa".into());
        snap.script_map.insert(0x41, ScriptRange { from: 0x41, to: 0x5a, script: "Latn".into() });
        snap
    }

    #[test]
    fn test_header_and_drops_come_first() {
        let sql = render(&sample()).unwrap();
        assert!(sql.starts_with("-- 20240307\n\n-- This file is derived"));
        let drop = sql.find("DROP TABLE IF EXISTS zlsSubtags;").unwrap();
        let create = sql.find("CREATE TABLE").unwrap();
        assert!(drop < create);
        assert!(!sql.contains("BEGIN"));
        assert!(!sql.contains("COMMIT"));
        assert!(sql.trim_end().ends_with(CREATE_INDEX));
    }

    #[test]
    fn test_rows_and_quoting() {
        let sql = render(&sample()).unwrap();
        assert!(sql.contains("INSERT INTO \"isoTagMap\" VALUES('aar','aa');"));
        assert!(sql.contains("INSERT INTO \"unicodeScriptMap\" VALUES(65,90,'Latn');"));
        assert!(sql.contains("INSERT INTO \"zlsSubtagData\" VALUES(2,'N''Ko');"));
        assert!(sql.contains(
            "INSERT INTO \"zlsSubtags\" VALUES(1,NULL,NULL,1,NULL,NULL,NULL,NULL,NULL,2,NULL,NULL,NULL);"
        ));
    }

    #[test]
    fn test_subtags_table_columns() {
        let create = create_subtags();
        assert!(create.starts_with("CREATE TABLE zlsSubtags (\n\tseq INTEGER PRIMARY KEY,\n\tsubtag INT,"));
        assert!(create.contains("\tadded INT,"));
        assert!(create.ends_with("\tprefix INT\n);"));
    }

    #[test]
    fn test_missing_file_date() {
        let sql = render(&Snapshot::default()).unwrap();
        assert!(sql.starts_with("-- unknown\n"));
    }
}
