//! Per-wiki configuration for the autoreview engine.
//!
//! All thresholds live here and are passed into every evaluation through the
//! [`CheckContext`](crate::context::CheckContext); there is no process-wide
//! state. A missing threshold never becomes an auto-approval: the check that
//! needed it reports a neutral result instead.

use serde::{Deserialize, Serialize};

use crate::error::{AutoreviewError, Result};

/// Cutoffs for externally computed edit quality scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Highest damaging probability that still allows approval.
    pub max_damaging: f64,
    /// Lowest goodfaith probability that still allows approval.
    pub min_goodfaith: f64,
}

impl ScoreThresholds {
    /// Check that both cutoffs are probabilities.
    fn validate(&self, label: &str) -> Result<()> {
        for (name, value) in [
            ("max_damaging", self.max_damaging),
            ("min_goodfaith", self.min_goodfaith),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AutoreviewError::Config(format!(
                    "{label}.{name} must be in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Reputation bar an editor must clear for trust-based approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustRequirements {
    /// Minimum total edit count.
    pub min_edit_count: u64,
    /// Maximum number of warnings on the editor's talk page.
    pub max_warning_count: u32,
    /// Minimum account age in days.
    pub min_account_age_days: u32,
}

impl Default for TrustRequirements {
    fn default() -> Self {
        Self {
            min_edit_count: 500,
            max_warning_count: 0,
            min_account_age_days: 90,
        }
    }
}

/// Per-wiki autoreview configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoreviewConfig {
    /// Score cutoffs for ordinary pages. Absent means the score check
    /// cannot approve anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_thresholds: Option<ScoreThresholds>,

    /// Stricter score cutoffs for biographies of living persons. Absent
    /// means the score check never approves a BLP edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blp_score_thresholds: Option<ScoreThresholds>,

    /// Similarity ratio below which an addition counts as superseded.
    #[serde(default = "default_similarity_threshold")]
    pub superseded_similarity_threshold: f64,

    /// Net byte removal beyond which an edit counts as a large deletion.
    #[serde(default = "default_large_deletion_bytes")]
    pub large_deletion_bytes: i64,

    /// Reputation requirements for the editor trust check.
    #[serde(default)]
    pub trust: TrustRequirements,

    /// Ids of checks to run. Empty means all checks; unknown ids are
    /// ignored. Execution always follows the canonical order, not the
    /// order given here.
    #[serde(default)]
    pub enabled_checks: Vec<String>,
}

fn default_similarity_threshold() -> f64 {
    0.8
}

fn default_large_deletion_bytes() -> i64 {
    5000
}

impl Default for AutoreviewConfig {
    fn default() -> Self {
        Self {
            score_thresholds: Some(ScoreThresholds {
                max_damaging: 0.1,
                min_goodfaith: 0.9,
            }),
            blp_score_thresholds: Some(ScoreThresholds {
                max_damaging: 0.05,
                min_goodfaith: 0.95,
            }),
            superseded_similarity_threshold: default_similarity_threshold(),
            large_deletion_bytes: default_large_deletion_bytes(),
            trust: TrustRequirements::default(),
            enabled_checks: Vec::new(),
        }
    }
}

impl AutoreviewConfig {
    /// Validate threshold ranges.
    ///
    /// The engine itself tolerates any configuration (bad values degrade to
    /// neutral results); this is for callers that want to reject obviously
    /// broken settings up front.
    pub fn validate(&self) -> Result<()> {
        if let Some(thresholds) = &self.score_thresholds {
            thresholds.validate("score_thresholds")?;
        }
        if let Some(thresholds) = &self.blp_score_thresholds {
            thresholds.validate("blp_score_thresholds")?;
        }
        if !(0.0..=1.0).contains(&self.superseded_similarity_threshold) {
            return Err(AutoreviewError::Config(format!(
                "superseded_similarity_threshold must be in [0, 1], got {}",
                self.superseded_similarity_threshold
            )));
        }
        if self.large_deletion_bytes < 0 {
            return Err(AutoreviewError::Config(format!(
                "large_deletion_bytes must be non-negative, got {}",
                self.large_deletion_bytes
            )));
        }
        Ok(())
    }

    /// Score thresholds applicable to a page, honouring the stricter BLP
    /// pair on biographies of living persons.
    pub fn thresholds_for(&self, is_living_person: bool) -> Option<ScoreThresholds> {
        if is_living_person {
            self.blp_score_thresholds
        } else {
            self.score_thresholds
        }
    }
}
