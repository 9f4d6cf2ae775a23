//! Similarity scoring between an addition and the current page body.

use similar::{DiffOp, TextDiff};

use super::additions::extract_additions;
use super::normalize::normalize_wikitext;

/// Matching runs shorter than this are coincidental character overlap, not
/// shared content.
const MIN_MATCH_RUN: usize = 4;

/// Normalized additions below this length are too short to score reliably.
pub const MIN_ADDITION_LEN: usize = 20;

/// How much of `addition` is still present in `body`, in [0, 1].
///
/// Character-level diff between the two strings; runs of at least
/// [`MIN_MATCH_RUN`] common characters count as matched. 1.0 means the
/// addition appears verbatim. Both inputs are expected to be normalized.
pub fn containment_score(addition: &str, body: &str) -> f64 {
    let addition_len = addition.chars().count();
    if addition_len == 0 {
        return 1.0;
    }
    if body.is_empty() {
        return 0.0;
    }
    if body.contains(addition) {
        return 1.0;
    }

    let diff = TextDiff::from_chars(addition, body);
    let matched: usize = diff
        .ops()
        .iter()
        .filter_map(|op| match op {
            DiffOp::Equal { len, .. } if *len >= MIN_MATCH_RUN => Some(*len),
            _ => None,
        })
        .sum();

    matched as f64 / addition_len as f64
}

/// Outcome of comparing one revision's additions against the current body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupersededOutcome {
    /// No addition was long enough to evaluate.
    NoEvaluableAdditions,
    /// Every evaluated addition is still present above the threshold.
    AdditionsIntact,
    /// At least one addition has been overwritten or removed.
    Superseded,
}

/// Decide whether the additions of an edit survive in the current body.
///
/// Conservative on purpose: anything that cannot be scored (no additions,
/// short additions, empty current body after normalization) counts as
/// inconclusive rather than superseded.
pub fn additions_superseded(
    parent_wikitext: &str,
    pending_wikitext: &str,
    current_wikitext: &str,
    threshold: f64,
) -> SupersededOutcome {
    let additions = extract_additions(parent_wikitext, pending_wikitext);
    if additions.is_empty() {
        return SupersededOutcome::NoEvaluableAdditions;
    }

    let body = normalize_wikitext(current_wikitext);
    if body.is_empty() {
        return SupersededOutcome::NoEvaluableAdditions;
    }

    let mut evaluated = 0usize;
    for addition in &additions {
        let normalized = normalize_wikitext(addition);
        if normalized.chars().count() < MIN_ADDITION_LEN {
            continue;
        }
        evaluated += 1;
        if containment_score(&normalized, &body) < threshold {
            return SupersededOutcome::Superseded;
        }
    }

    if evaluated == 0 {
        SupersededOutcome::NoEvaluableAdditions
    } else {
        SupersededOutcome::AdditionsIntact
    }
}
