//! The autoreview pipeline: ordered check execution, short-circuiting, and
//! decision assembly.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checks::{self, reasons, Check, CheckId, CheckResult, CheckStatus};
use crate::context::CheckContext;

/// Final verdict for one pending revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The edit can be approved automatically.
    Approve,
    /// The edit must not be approved.
    Reject,
    /// No check produced a definitive verdict; a human decides.
    ManualReview,
}

impl Outcome {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Approve => "Would be auto-approved",
            Outcome::Reject => "Cannot be auto-approved",
            Outcome::ManualReview => "Requires human review",
        }
    }
}

/// Pipeline output for one (revision, configuration) pair.
///
/// Constructed once per evaluation and never mutated afterwards; safe for
/// callers to serialize and cache keyed by revision id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The aggregated verdict.
    pub outcome: Outcome,

    /// Reason code of the deciding check, or `blp`/`no-signal` when no
    /// check decided.
    pub reason: String,

    /// Every executed check's result, in execution order, including the
    /// ones that did not decide the outcome.
    pub trace: Vec<CheckResult>,
}

impl Decision {
    fn new(outcome: Outcome, reason: impl Into<String>, trace: Vec<CheckResult>) -> Self {
        Self {
            outcome,
            reason: reason.into(),
            trace,
        }
    }
}

/// The autoreview decision engine.
///
/// Holds the check registry; one engine can evaluate any number of
/// contexts, sequentially or from multiple threads, since evaluation is
/// pure.
pub struct Autoreview {
    registry: IndexMap<CheckId, Box<dyn Check>>,
}

impl Autoreview {
    /// Create an engine with the full canonical check registry.
    pub fn new() -> Self {
        Self {
            registry: checks::registry(),
        }
    }

    /// Evaluate one context and produce exactly one [`Decision`].
    ///
    /// Checks run in canonical order, restricted to the configuration's
    /// enabled set (empty set means all; unknown identifiers are ignored).
    /// The first `Fail` rejects; the first `Ok` from an approval check
    /// approves; otherwise the edit goes to manual review, with reason
    /// `blp` when the BLP check flagged the page and `no-signal` otherwise.
    pub fn evaluate(&self, context: &CheckContext) -> Decision {
        let enabled = enabled_set(&context.config.enabled_checks);
        let mut trace = Vec::new();

        for (id, check) in &self.registry {
            if let Some(enabled) = &enabled {
                if !enabled.contains(id) {
                    continue;
                }
            }

            let result = check.run(context);
            let status = result.status;
            let reason = result.reason.clone();
            trace.push(result);

            match status {
                CheckStatus::Fail => {
                    return Decision::new(Outcome::Reject, reason, trace);
                }
                CheckStatus::Ok if id.decides_approval() => {
                    return Decision::new(Outcome::Approve, reason, trace);
                }
                _ => {}
            }
        }

        let blp_flagged = trace
            .iter()
            .any(|result| result.check == CheckId::LivingPerson && result.reason == reasons::BLP);

        if blp_flagged {
            Decision::new(Outcome::ManualReview, reasons::BLP, trace)
        } else {
            Decision::new(Outcome::ManualReview, reasons::NO_SIGNAL, trace)
        }
    }

    /// Run one check by identifier, outside the pipeline. `None` for an
    /// unknown identifier.
    pub fn run_single_check(&self, id: &str, context: &CheckContext) -> Option<CheckResult> {
        let id = CheckId::parse(id)?;
        Some(self.registry.get(&id)?.run(context))
    }
}

impl Default for Autoreview {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate a context with a fresh engine. Convenience for one-shot
/// callers.
pub fn evaluate(context: &CheckContext) -> Decision {
    Autoreview::new().evaluate(context)
}

fn enabled_set(ids: &[String]) -> Option<HashSet<CheckId>> {
    if ids.is_empty() {
        return None;
    }
    Some(ids.iter().filter_map(|id| CheckId::parse(id)).collect())
}
