//! Wikitext comparison utilities: normalization, addition extraction, and
//! similarity scoring for superseded-edit detection.

mod additions;
mod normalize;
mod similarity;

pub use additions::extract_additions;
pub use normalize::normalize_wikitext;
pub use similarity::{
    additions_superseded, containment_score, MIN_ADDITION_LEN, SupersededOutcome,
};
