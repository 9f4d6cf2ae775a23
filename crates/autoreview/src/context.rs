//! Shared context passed to all check functions.
//!
//! A [`CheckContext`] is assembled by the caller from already-fetched data:
//! revision bodies, editor profile, externally computed quality scores, and
//! the per-wiki configuration. Checks are pure functions of the context and
//! never mutate it, so one context can be evaluated any number of times with
//! byte-identical results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::AutoreviewConfig;
use crate::error::Result;

/// The pending revision under review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionData {
    /// Revision identifier.
    pub revid: u64,

    /// Wikitext of the parent revision (empty for new pages).
    #[serde(default)]
    pub parent_wikitext: String,

    /// Wikitext of this revision.
    pub wikitext: String,

    /// Net byte-size change relative to the parent revision.
    pub byte_delta: i64,

    /// When the edit was made.
    pub timestamp: DateTime<Utc>,

    /// Username of the editor.
    pub editor: String,

    /// Rendering lint indicators counted on the parent revision.
    #[serde(default)]
    pub render_errors_old: u32,

    /// Rendering lint indicators counted on this revision.
    #[serde(default)]
    pub render_errors_new: u32,
}

/// The page the revision belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    /// Page identifier.
    pub pageid: u64,

    /// Page title.
    pub title: String,

    /// Wikitext of the current (latest) revision of the page.
    pub current_wikitext: String,

    /// Whether the page is a biography of a living person.
    #[serde(default)]
    pub is_living_person: bool,

    /// Namespace number (0 = articles).
    #[serde(default)]
    pub namespace: i32,
}

/// Reputation data about the editor, when a profile is available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditorProfile {
    /// Total edit count across all namespaces.
    pub edit_count: u64,

    /// Edit count in the article namespace.
    #[serde(default)]
    pub article_edit_count: u64,

    /// Number of warnings on the editor's talk page.
    #[serde(default)]
    pub warning_count: u32,

    /// Whether the editor is currently blocked.
    #[serde(default)]
    pub blocked: bool,

    /// When the block expires, if the block is temporary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_expiry: Option<DateTime<Utc>>,

    /// Whether the account previously operated as an automated account.
    #[serde(default)]
    pub former_bot: bool,

    /// Days since the account was registered, as of the edit.
    #[serde(default)]
    pub account_age_days: u32,
}

impl EditorProfile {
    /// Whether the editor's block is in force at the given instant.
    ///
    /// A block without an expiry is indefinite.
    pub fn is_blocked_at(&self, when: DateTime<Utc>) -> bool {
        self.blocked && self.block_expiry.map_or(true, |expiry| expiry > when)
    }
}

/// Externally computed quality predictions for the edit.
///
/// Every field may be absent: the upstream prediction service is best
/// effort, and checks treat missing scores as inconclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EditScores {
    /// Probability the edit is damaging, in [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damaging: Option<f64>,

    /// Probability the edit was made in good faith, in [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goodfaith: Option<f64>,

    /// Predicted article quality class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_class: Option<String>,

    /// Numeric article quality score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
}

/// Everything a check may read while evaluating one pending revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckContext {
    /// The revision under review.
    pub revision: RevisionData,

    /// The page the revision belongs to.
    pub page: PageData,

    /// The editor's profile, when one could be resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_profile: Option<EditorProfile>,

    /// Quality predictions for the edit, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<EditScores>,

    /// Per-wiki thresholds and enabled-check set.
    #[serde(default)]
    pub config: AutoreviewConfig,
}

impl CheckContext {
    /// Create a context for a revision and page with default configuration.
    pub fn new(revision: RevisionData, page: PageData) -> Self {
        Self {
            revision,
            page,
            editor_profile: None,
            scores: None,
            config: AutoreviewConfig::default(),
        }
    }

    /// Attach an editor profile.
    pub fn with_editor_profile(mut self, profile: EditorProfile) -> Self {
        self.editor_profile = Some(profile);
        self
    }

    /// Attach quality scores.
    pub fn with_scores(mut self, scores: EditScores) -> Self {
        self.scores = Some(scores);
        self
    }

    /// Set the configuration.
    pub fn with_config(mut self, config: AutoreviewConfig) -> Self {
        self.config = config;
        self
    }

    /// Deserialize a context from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
