//! Parser for the Library of Congress ISO 639-2 code list.
//!
//! One language per line, pipe separated:
//! `bibliographic|terminologic|alpha-2|English name|French name`,
//! e.g. `ger|deu|de|German|allemand`. Only the first three columns matter.

use super::strip_bom;

/// `(iso code, IANA subtag)` pairs in source order.
///
/// The bibliographic code always maps to the third column; the terminologic
/// code does too when it is present. Lines with an empty third column, or
/// fewer than three columns, produce nothing.
pub fn parse_iso(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for line in strip_bom(text).lines() {
        let cols: Vec<&str> = line.split('|').collect();
        let [bibliographic, terminologic, iana, ..] = cols.as_slice() else {
            continue;
        };
        if iana.is_empty() {
            continue;
        }
        pairs.push((bibliographic.to_string(), iana.to_string()));
        if !terminologic.is_empty() {
            pairs.push((terminologic.to_string(), iana.to_string()));
        }
    }

    pairs
}
