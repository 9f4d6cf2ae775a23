//! The autoreview checks: identifiers, the check capability, and the
//! canonical registry.
//!
//! Checks are independent of each other: each reads only the shared
//! [`CheckContext`](crate::context::CheckContext) and emits one
//! [`CheckResult`]. The pipeline order is fixed here, not by configuration.

mod content;
mod editor;
mod policy;
mod result;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::context::CheckContext;

pub use content::{InvalidIsbnCheck, NewRenderErrorsCheck, SupersededAdditionsCheck};
pub use editor::{BlockedUserCheck, EditorTrustCheck};
pub use policy::{LargeDeletionCheck, LivingPersonCheck, QualityScoresCheck};
pub use result::{reasons, CheckResult, CheckStatus};

/// Identifier of an autoreview check. The variant order is the canonical
/// pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    /// The edit newly breaks page rendering.
    NewRenderErrors,
    /// The edit's content has already been overwritten by later edits.
    SupersededAdditions,
    /// The editor is currently blocked.
    BlockedUser,
    /// The edit introduces syntactically invalid ISBNs.
    InvalidIsbn,
    /// The page is a biography of a living person.
    LivingPerson,
    /// The edit removes a large amount of content.
    LargeDeletion,
    /// The editor clears the reputation bar.
    EditorTrust,
    /// Quality scores are within the configured cutoffs.
    QualityScores,
}

/// All checks in canonical execution order.
pub const CANONICAL_ORDER: [CheckId; 8] = [
    CheckId::NewRenderErrors,
    CheckId::SupersededAdditions,
    CheckId::BlockedUser,
    CheckId::InvalidIsbn,
    CheckId::LivingPerson,
    CheckId::LargeDeletion,
    CheckId::EditorTrust,
    CheckId::QualityScores,
];

impl CheckId {
    /// Stable string identifier used in configuration and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::NewRenderErrors => "new-render-errors",
            CheckId::SupersededAdditions => "superseded-additions",
            CheckId::BlockedUser => "blocked-user",
            CheckId::InvalidIsbn => "invalid-isbn",
            CheckId::LivingPerson => "living-person",
            CheckId::LargeDeletion => "large-deletion",
            CheckId::EditorTrust => "editor-trust",
            CheckId::QualityScores => "quality-scores",
        }
    }

    /// Parse a string identifier. Unknown identifiers yield `None` and are
    /// ignored by the pipeline.
    pub fn parse(id: &str) -> Option<Self> {
        CANONICAL_ORDER.iter().copied().find(|c| c.as_str() == id)
    }

    /// Human-readable check title.
    pub fn title(&self) -> &'static str {
        match self {
            CheckId::NewRenderErrors => "New render errors",
            CheckId::SupersededAdditions => "Superseded additions",
            CheckId::BlockedUser => "User block status",
            CheckId::InvalidIsbn => "ISBN checksum validation",
            CheckId::LivingPerson => "Biography of a living person",
            CheckId::LargeDeletion => "Large deletion",
            CheckId::EditorTrust => "Editor trust",
            CheckId::QualityScores => "Edit quality scores",
        }
    }

    /// Whether an `Ok` from this check approves the edit. Only the tail of
    /// the pipeline may approve; the early checks exist to reject.
    pub fn decides_approval(&self) -> bool {
        matches!(
            self,
            CheckId::LivingPerson
                | CheckId::LargeDeletion
                | CheckId::EditorTrust
                | CheckId::QualityScores
        )
    }
}

impl std::fmt::Display for CheckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability implemented by every check.
pub trait Check {
    /// Identifier of this check.
    fn id(&self) -> CheckId;

    /// Evaluate the check against one context. Pure: no I/O, no mutation.
    fn run(&self, context: &CheckContext) -> CheckResult;
}

/// Build the full check registry in canonical order.
///
/// Iteration order of the returned map is the pipeline execution order.
pub fn registry() -> IndexMap<CheckId, Box<dyn Check>> {
    let checks: Vec<Box<dyn Check>> = vec![
        Box::new(NewRenderErrorsCheck),
        Box::new(SupersededAdditionsCheck),
        Box::new(BlockedUserCheck),
        Box::new(InvalidIsbnCheck),
        Box::new(LivingPersonCheck),
        Box::new(LargeDeletionCheck),
        Box::new(EditorTrustCheck),
        Box::new(QualityScoresCheck),
    ];

    checks.into_iter().map(|check| (check.id(), check)).collect()
}
