//! Parser for the IANA language subtag registry.
//
//  Layout (RFC 5646 §3.1):
//
//      File-Date: 2024-03-07
//      %%
//      Type: language
//      Subtag: aa
//      Description: Afar
//      Added: 2005-10-16
//      %%
//      ...
//
//  `Key: value` starts a field, a line starting with a space continues the
//  previous one, `%%` closes the record. Anything else is ignored.

use tracing::debug;

use super::strip_bom;
use crate::model::{FILE_DATE, FILE_DATE_FIXES, RawRecord, Registry};

pub fn parse_registry(text: &str) -> Registry {
    let mut registry = Registry::default();
    let mut record = RawRecord::default();
    // key that continuation lines extend; None while the last field was dropped
    let mut current: Option<String> = None;
    let mut skip = false;

    for line in strip_bom(text).lines() {
        let line = line.trim_end();

        if let Some((key, value)) = split_field(line) {
            let key = normalize_key(key);
            let value = value.trim();
            if key == FILE_DATE {
                registry.file_date = Some(fix_file_date(value));
                skip = true;
                current = None;
                continue;
            }
            current = record.push_field(&key, value).then_some(key);
        } else if line.starts_with(' ') {
            if let Some(key) = &current {
                record.extend_field(key, line.trim_start());
            }
        } else if line == "%%" {
            let done = std::mem::take(&mut record);
            if !skip && !done.is_empty() {
                registry.records.push(done);
            }
            skip = false;
            current = None;
        }
    }
    if !skip && !record.is_empty() {
        registry.records.push(record);
    }

    debug!(
        "registry {:?}: {} records",
        registry.file_date,
        registry.records.len()
    );
    registry
}

/// `Key: value` where the key has no space in it.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    if key.is_empty() || key.contains(' ') {
        return None;
    }
    Some((key, value))
}

/// `Suppress-Script` → `suppressscript`
fn normalize_key(key: &str) -> String {
    key.to_lowercase().replace('-', "")
}

fn fix_file_date(value: &str) -> String {
    let date = value.replace('-', "");
    FILE_DATE_FIXES
        .iter()
        .find(|(wrong, _)| *wrong == date)
        .map(|(_, right)| right.to_string())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldValue;

    #[test]
    fn test_single_record() {
        let reg = parse_registry("Type: language\nSubtag: aa\nDescription: Afar\n%%\n");
        assert_eq!(reg.records.len(), 1);
        let rec = &reg.records[0];
        assert_eq!(rec.scalar("type"), Some("language"));
        assert_eq!(rec.scalar("subtag"), Some("aa"));
        assert_eq!(rec.scalar("description"), Some("Afar"));
    }

    #[test]
    fn test_file_date_record_is_skipped() {
        let reg = parse_registry("File-Date: 2024-03-07\n%%\nType: language\nSubtag: aa\n");
        assert_eq!(reg.file_date.as_deref(), Some("20240307"));
        assert_eq!(reg.records.len(), 1);
        assert_eq!(reg.records[0].scalar("subtag"), Some("aa"));
    }

    #[test]
    fn test_known_bad_file_date_is_corrected() {
        let reg = parse_registry("File-Date: 2010-08-17\n%%\n");
        assert_eq!(reg.file_date.as_deref(), Some("20100821"));
        assert!(reg.records.is_empty());
    }

    #[test]
    fn test_first_description_wins() {
        let reg = parse_registry(
            "Type: language\nSubtag: el\nDescription: A\nDescription: B\n  more B\n%%\n",
        );
        assert_eq!(reg.records[0].scalar("description"), Some("A"));
    }

    #[test]
    fn test_continuation_lines_join_with_spaces() {
        let reg = parse_registry(
            "Type: variant\nSubtag: x\nComment: first part\n  second part\n  third\n",
        );
        assert_eq!(
            reg.records[0].scalar("comment"),
            Some("first part second part third")
        );
    }

    #[test]
    fn test_prefix_is_multi_valued() {
        let reg = parse_registry(
            "Type: variant\nSubtag: 1901\nPrefix: de\nDescription: Traditional\nPrefix: gsw\n%%\n",
        );
        let rec = &reg.records[0];
        assert_eq!(
            rec.get("prefix"),
            Some(&FieldValue::List(vec!["de".into(), "gsw".into()]))
        );
        assert_eq!(rec.scalar("description"), Some("Traditional"));
    }

    #[test]
    fn test_keys_are_normalised() {
        let reg = parse_registry("Type: language\nSubtag: en\nSuppress-Script: Latn\n");
        assert_eq!(reg.records[0].scalar("suppressscript"), Some("Latn"));
    }

    #[test]
    fn test_irregular_lines_are_ignored() {
        let reg = parse_registry(
            "\u{feff}\nnot a field\n:empty key\nType: language\n\nSubtag: aa\n%%\n%%\n",
        );
        assert_eq!(reg.records.len(), 1);
        let fields: Vec<_> = reg.records[0].fields().map(|(k, _)| k).collect();
        assert_eq!(fields, vec!["type", "subtag"]);
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let reg = parse_registry("Type: language\nComment: see: RFC 5646\n");
        assert_eq!(reg.records[0].scalar("comment"), Some("see: RFC 5646"));
    }
}
