// upstream locations, fetched when no local copy is given on the command line
pub const ISO_URL: &str = "https://www.loc.gov/standards/iso639-2/ISO-639-2_utf-8.txt";
pub const IANA_URL: &str =
    "https://www.iana.org/assignments/language-subtag-registry/language-subtag-registry";
pub const SCRIPTS_URL: &str = "https://www.unicode.org/Public/UNIDATA/Scripts.txt";

/// Column order of `zlsSubtags`, minus `seq` and the trailing `prefix`.
pub const SCALAR_FIELDS: [&str; 11] = [
    "subtag",
    "tag",
    "type",
    "suppressscript",
    "scope",
    "preferredvalue",
    "macrolanguage",
    "added",
    "description",
    "deprecated",
    "comment",
];

/// The only multi-valued registry field.
pub const PREFIX: &str = "prefix";

/// Registry metadata key; the record carrying it is never emitted.
pub const FILE_DATE: &str = "filedate";

/// The registry published 2010-08-21 went out stamped 2010-08-17.
pub const FILE_DATE_FIXES: &[(&str, &str)] = &[("20100817", "20100821")];

/// Unicode script names whose IANA description differs.
pub const SCRIPT_OVERRIDES: &[(&str, &str)] = &[
    ("old italic", "Ital"),
    ("georgian", "Geor"),
    ("canadian aboriginal", "Cans"),
    ("phags pa", "Phag"),
    ("meetei mayek", "Mtai"),
    ("cuneiform", "Xsux"),
    ("nko", "Nkoo"),
];

/// Scripts.txt pseudo-scripts that say nothing about the language of a text.
pub const PSEUDO_SCRIPTS: [&str; 2] = ["Common", "Inherited"];

use serde::Serialize;
use std::collections::BTreeMap;

/// Raw text of the three upstream sources, as loaded.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub iso: String,
    pub iana: String,
    pub scripts: String,
}

/// A registry field value. `prefix` is always a list, everything else a scalar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

/// One `%%`-delimited registry entry, fields kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, FieldValue)>,
}

impl RawRecord {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn scalar(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(FieldValue::Scalar(s)) => Some(s),
            _ => None,
        }
    }

    pub fn prefixes(&self) -> &[String] {
        match self.get(PREFIX) {
            Some(FieldValue::List(items)) => items,
            _ => &[],
        }
    }

    /// Adds a field line. Prefixes accumulate; any other key keeps its first
    /// value and later lines are dropped. Returns whether the line was kept.
    pub fn push_field(&mut self, key: &str, value: &str) -> bool {
        let is_prefix = key == PREFIX;
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, FieldValue::List(items))) if is_prefix => {
                items.push(value.to_string());
                true
            }
            Some(_) => false,
            None => {
                let value = if is_prefix {
                    FieldValue::List(vec![value.to_string()])
                } else {
                    FieldValue::Scalar(value.to_string())
                };
                self.fields.push((key.to_string(), value));
                true
            }
        }
    }

    /// Appends a continuation line to `key` (the last element for a list).
    pub fn extend_field(&mut self, key: &str, text: &str) {
        let target = match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, FieldValue::Scalar(s))) => s,
            Some((_, FieldValue::List(items))) => match items.last_mut() {
                Some(last) => last,
                None => return,
            },
            None => return,
        };
        target.push(' ');
        target.push_str(text);
    }
}

/// Everything the registry parser pulls out of one registry text.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub file_date: Option<String>,
    pub records: Vec<RawRecord>,
}

/// `(start, end, script)` straight from Scripts.txt, closed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSpan {
    pub start: u32,
    pub end: u32,
    pub name: String,
}

impl ScriptSpan {
    pub fn new(start: u32, end: u32, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }
}

// ─────────────────────────────────────────────────────
// Output tables
// ─────────────────────────────────────────────────────

/// Row of `zlsSubtagData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternedValue {
    pub id: u32,
    pub value: String,
}

/// Row of `zlsSubtags`. Every column is an id into `zlsSubtagData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubtagRow {
    pub seq: u32,
    /// Indexed like [`SCALAR_FIELDS`].
    pub fields: [Option<u32>; 11],
    pub prefix: Option<u32>,
}

impl SubtagRow {
    pub fn field(&self, name: &str) -> Option<u32> {
        if name == PREFIX {
            return self.prefix;
        }
        let col = SCALAR_FIELDS.iter().position(|f| *f == name)?;
        self.fields[col]
    }
}

/// Row of `unicodeScriptMap`, tagged with the IANA subtag (`Latn`, not `Latin`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRange {
    pub from: u32,
    pub to: u32,
    pub script: String,
}

/// The finished, immutable data set handed to `writer`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Snapshot {
    pub file_date: Option<String>,
    pub values: Vec<InternedValue>,
    pub subtags: Vec<SubtagRow>,
    /// iso code → IANA subtag.
    pub iso_map: BTreeMap<String, String>,
    /// keyed by `from`.
    pub script_map: BTreeMap<u32, ScriptRange>,
    /// `to` → `from`, the secondary access path for containment lookups.
    #[serde(skip)]
    pub script_ends: BTreeMap<u32, u32>,
    /// Lower-cased Unicode script names that matched no IANA subtag.
    pub unresolved: Vec<String>,
}

impl Snapshot {
    /// Text behind an interned id.
    pub fn value(&self, id: u32) -> Option<&str> {
        let idx = id.checked_sub(1)? as usize;
        self.values.get(idx).map(|v| v.value.as_str())
    }

    /// Resolves a `zlsSubtags` column of `row` to its text.
    pub fn text(&self, row: &SubtagRow, field: &str) -> Option<&str> {
        self.value(row.field(field)?)
    }

    /// IANA script subtag whose range holds `code_point`.
    pub fn script_for(&self, code_point: u32) -> Option<&str> {
        let (_, from) = self.script_ends.range(code_point..).next()?;
        let range = self.script_map.get(from)?;
        (range.from <= code_point).then_some(range.script.as_str())
    }
}
