//! Collapsing Scripts.txt lines into one interval per script run.

use crate::model::{PSEUDO_SCRIPTS, ScriptSpan};

/// Sorts by start and merges consecutive spans of the same script.
/// Scripts.txt groups lines by script, not by code point, so the sort is
/// what makes neighbours meet.
///
/// `Common`/`Inherited` spans are never emitted. One reaching past the end
/// of the current run closes it; one lying inside the run is ignored.
pub fn collapse(mut spans: Vec<ScriptSpan>) -> Vec<ScriptSpan> {
    spans.sort_by_key(|s| s.start);

    let mut merged: Vec<ScriptSpan> = Vec::with_capacity(spans.len());
    // whether the last merged span can still grow
    let mut open = false;
    for span in spans {
        let pseudo = PSEUDO_SCRIPTS.contains(&span.name.as_str());
        match merged.last_mut() {
            Some(acc) if open && pseudo => {
                if span.end > acc.end {
                    open = false;
                }
            }
            Some(acc) if open && acc.name == span.name => acc.end = acc.end.max(span.end),
            _ if pseudo => {}
            _ => {
                merged.push(span);
                open = true;
            }
        }
    }
    merged
}
