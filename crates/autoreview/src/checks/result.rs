//! Check result types.

use serde::{Deserialize, Serialize};

use super::CheckId;

/// Machine-stable reason codes attached to check results and decisions.
///
/// These are part of the serialized surface; callers key UI copy and
/// statistics on them, so they never change meaning.
pub mod reasons {
    pub const RENDER_ERRORS: &str = "render-errors";
    pub const RENDER_CLEAN: &str = "render-clean";
    pub const SUPERSEDED: &str = "superseded";
    pub const ADDITIONS_INTACT: &str = "additions-intact";
    pub const NO_ADDITIONS: &str = "no-additions";
    pub const BLOCKED: &str = "blocked";
    pub const NOT_BLOCKED: &str = "not-blocked";
    pub const NO_PROFILE: &str = "no-profile";
    pub const INVALID_ISBN: &str = "invalid-isbn";
    pub const ISBN_OK: &str = "isbn-ok";
    pub const BLP: &str = "blp";
    pub const NOT_BLP: &str = "not-blp";
    pub const LARGE_DELETION: &str = "large-deletion";
    pub const DELETION_OK: &str = "deletion-ok";
    pub const TRUSTED_EDITOR: &str = "trusted-editor";
    pub const UNTRUSTED_EDITOR: &str = "untrusted-editor";
    pub const SCORES_OK: &str = "scores-ok";
    pub const SCORES_UNAVAILABLE: &str = "scores-unavailable";
    pub const SCORES_BELOW_THRESHOLD: &str = "scores-below-threshold";
    pub const SCORES_NOT_CONFIGURED: &str = "scores-not-configured";
    pub const NO_SIGNAL: &str = "no-signal";
}

/// Verdict of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Evidence supports approval.
    Ok,
    /// Evidence supports rejection.
    Fail,
    /// Neutral or inconclusive; defer to later checks or to a human.
    NotOk,
}

impl CheckStatus {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CheckStatus::Ok => "Ok",
            CheckStatus::Fail => "Fail",
            CheckStatus::NotOk => "Not ok",
        }
    }
}

/// Result from running a single check against one context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Which check produced this result.
    pub check: CheckId,

    /// The verdict.
    pub status: CheckStatus,

    /// Machine-stable reason code (see [`reasons`]).
    pub reason: String,

    /// Human-readable explanation.
    pub label: String,
}

impl CheckResult {
    /// Result supporting approval.
    pub fn ok(check: CheckId, reason: &str, label: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Ok,
            reason: reason.to_string(),
            label: label.into(),
        }
    }

    /// Result supporting rejection.
    pub fn fail(check: CheckId, reason: &str, label: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            reason: reason.to_string(),
            label: label.into(),
        }
    }

    /// Neutral result.
    pub fn not_ok(check: CheckId, reason: &str, label: impl Into<String>) -> Self {
        Self {
            check,
            status: CheckStatus::NotOk,
            reason: reason.to_string(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&CheckStatus::NotOk).unwrap(),
            "\"not_ok\""
        );
        assert_eq!(serde_json::to_string(&CheckStatus::Ok).unwrap(), "\"ok\"");
    }

    #[test]
    fn test_result_round_trip() {
        let result = CheckResult::fail(
            CheckId::InvalidIsbn,
            reasons::INVALID_ISBN,
            "The edit contains invalid ISBN(s): 0-306-40615-3.",
        );
        let json = serde_json::to_string(&result).unwrap();
        let parsed: CheckResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
