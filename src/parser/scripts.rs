//! Parser for Unicode `Scripts.txt`.
//!
//! Data lines look like
//! `0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z`
//! or, for a single code point, `00AA          ; Latin # Lo       FEMININE ORDINAL INDICATOR`.

use regex::Regex;
use std::sync::LazyLock;

use super::strip_bom;
use crate::model::ScriptSpan;

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Fa-f0-9]+)(?:\.\.([A-Fa-f0-9]+))?\s*;\s*(\w+)").expect("valid regex")
});

/// Every range line, in file order. Underscores in script names become
/// spaces (`Old_Italic` → `Old Italic`) to line up with IANA descriptions.
pub fn parse_scripts(text: &str) -> Vec<ScriptSpan> {
    strip_bom(text).lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ScriptSpan> {
    let caps = RANGE.captures(line)?;
    let start = u32::from_str_radix(&caps[1], 16).ok()?;
    let end = match caps.get(2) {
        Some(m) => u32::from_str_radix(m.as_str(), 16).ok()?,
        None => start,
    };
    Some(ScriptSpan::new(start, end, caps[3].replace('_', " ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_and_single_lines() {
        let text = "\
# Scripts-15.1.0.txt
# comment line

0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
00AA          ; Latin # Lo       FEMININE ORDINAL INDICATOR
10300..1031F  ; Old_Italic # Lo  [32] OLD ITALIC LETTER A..OLD ITALIC LETTER UU
";
        let spans = parse_scripts(text);
        assert_eq!(
            spans,
            vec![
                ScriptSpan::new(0x41, 0x5a, "Latin"),
                ScriptSpan::new(0xaa, 0xaa, "Latin"),
                ScriptSpan::new(0x10300, 0x1031f, "Old Italic"),
            ]
        );
    }

    #[test]
    fn test_non_matching_lines_are_skipped() {
        assert!(parse_scripts("# 0041..005A ; Latin\n\nZZZZ ; Latin\n").is_empty());
    }
}
