//! Extraction of text introduced by an edit.

use std::collections::HashSet;

use similar::{ChangeTag, TextDiff};

/// Return the text segments present in `new_text` but not in `old_text`.
///
/// The diff is line-based; contiguous runs of inserted lines are collected
/// into a single addition so that local context survives for similarity
/// matching. Lines that also occur somewhere in `old_text` are treated as
/// moved rather than added. Whitespace-only insertions are discarded.
pub fn extract_additions(old_text: &str, new_text: &str) -> Vec<String> {
    if new_text.is_empty() {
        return Vec::new();
    }
    if old_text.is_empty() {
        return vec![new_text.to_string()];
    }

    let old_lines: HashSet<&str> = old_text.lines().map(str::trim).collect();

    let diff = TextDiff::from_lines(old_text, new_text);
    let mut additions = Vec::new();
    let mut run = String::new();

    let mut flush = |run: &mut String| {
        if !run.trim().is_empty() {
            additions.push(std::mem::take(run));
        } else {
            run.clear();
        }
    };

    for change in diff.iter_all_changes() {
        match change.tag() {
            ChangeTag::Insert => {
                // A line the old text already had elsewhere is a move, not
                // an addition; it also breaks the contiguous run.
                if old_lines.contains(change.value().trim()) {
                    flush(&mut run);
                } else {
                    run.push_str(change.value());
                }
            }
            ChangeTag::Equal | ChangeTag::Delete => flush(&mut run),
        }
    }
    flush(&mut run);

    additions
}
