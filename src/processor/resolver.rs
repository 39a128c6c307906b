//! Joining Unicode script names to IANA script subtags.

use std::collections::HashMap;
use tracing::warn;

use crate::model::{SCRIPT_OVERRIDES, ScriptRange, ScriptSpan};

/// Lower-cased description → subtag, collected from `Type: script` records.
#[derive(Debug, Default)]
pub struct ScriptIndexBuilder {
    by_description: HashMap<String, String>,
}

impl ScriptIndexBuilder {
    /// First subtag registered under a description keeps it.
    pub fn learn(&mut self, description: &str, subtag: &str) {
        self.by_description
            .entry(description.to_lowercase())
            .or_insert_with(|| subtag.to_string());
    }

    /// Applies the override table on top of what the registry said.
    pub fn finish(mut self) -> ScriptIndex {
        for (name, subtag) in SCRIPT_OVERRIDES {
            self.by_description
                .insert(name.to_string(), subtag.to_string());
        }
        ScriptIndex {
            by_description: self.by_description,
        }
    }
}

/// Finalised lookup table; only reachable through [`ScriptIndexBuilder::finish`].
#[derive(Debug)]
pub struct ScriptIndex {
    by_description: HashMap<String, String>,
}

impl ScriptIndex {
    pub fn lookup(&self, script_name: &str) -> Option<&str> {
        self.by_description
            .get(&script_name.to_lowercase())
            .map(String::as_str)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.by_description.len()
    }
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub ranges: Vec<ScriptRange>,
    /// lower-cased names with no subtag
    pub unresolved: Vec<String>,
}

/// Tags each collapsed span with its IANA subtag. Spans that cannot be
/// matched are dropped and reported.
pub fn resolve(index: &ScriptIndex, spans: &[ScriptSpan]) -> Resolution {
    let mut out = Resolution::default();
    for span in spans {
        match index.lookup(&span.name) {
            Some(subtag) => out.ranges.push(ScriptRange {
                from: span.start,
                to: span.end,
                script: subtag.to_string(),
            }),
            None => {
                let name = span.name.to_lowercase();
                warn!(script = %name, "no matching IANA subtag");
                out.unresolved.push(name);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_without_registry_entry() {
        let index = ScriptIndexBuilder::default().finish();
        assert_eq!(index.lookup("Old Italic"), Some("Ital"));
        assert_eq!(index.lookup("NKo"), Some("Nkoo"));
        assert_eq!(index.len(), SCRIPT_OVERRIDES.len());
    }

    #[test]
    fn test_overrides_beat_registry() {
        let mut builder = ScriptIndexBuilder::default();
        builder.learn("Georgian", "Geok");
        builder.learn("Latin", "Latn");
        let index = builder.finish();
        assert_eq!(index.lookup("georgian"), Some("Geor"));
        assert_eq!(index.lookup("LATIN"), Some("Latn"));
    }

    #[test]
    fn test_first_description_wins() {
        let mut builder = ScriptIndexBuilder::default();
        builder.learn("Han", "Hani");
        builder.learn("han", "Hans");
        assert_eq!(builder.finish().lookup("Han"), Some("Hani"));
    }

    #[test]
    fn test_unresolved_spans_are_dropped() {
        let mut builder = ScriptIndexBuilder::default();
        builder.learn("Latin", "Latn");
        let index = builder.finish();

        let spans = vec![
            ScriptSpan::new(0x41, 0x7a, "Latin"),
            ScriptSpan::new(0x1e900, 0x1e95f, "Adlam"),
            ScriptSpan::new(0x10300, 0x1032f, "Old Italic"),
        ];
        let res = resolve(&index, &spans);

        assert_eq!(
            res.ranges,
            vec![
                ScriptRange { from: 0x41, to: 0x7a, script: "Latn".into() },
                ScriptRange { from: 0x10300, to: 0x1032f, script: "Ital".into() },
            ]
        );
        assert_eq!(res.unresolved, vec!["adlam".to_string()]);
    }
}
