//! Policy checks: BLP routing, large deletions, and score thresholds.

use crate::context::CheckContext;

use super::result::{reasons, CheckResult};
use super::{Check, CheckId};

/// Flags biographies of living persons. Never fails and never approves:
/// its only effect is that an undecided pipeline ends in manual review with
/// reason `blp` instead of `no-signal`.
pub struct LivingPersonCheck;

impl Check for LivingPersonCheck {
    fn id(&self) -> CheckId {
        CheckId::LivingPerson
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        if context.page.is_living_person {
            return CheckResult::not_ok(
                self.id(),
                reasons::BLP,
                "The page is a biography of a living person; stricter review applies.",
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::NOT_BLP,
            "The page is not a biography of a living person.",
        )
    }
}

/// Fails when the edit removes more bytes than the configured threshold.
pub struct LargeDeletionCheck;

impl Check for LargeDeletionCheck {
    fn id(&self) -> CheckId {
        CheckId::LargeDeletion
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let delta = context.revision.byte_delta;
        let threshold = context.config.large_deletion_bytes;

        if delta < 0 && delta.unsigned_abs() > threshold.unsigned_abs() {
            return CheckResult::fail(
                self.id(),
                reasons::LARGE_DELETION,
                format!(
                    "The edit removes {} bytes (threshold {}).",
                    delta.unsigned_abs(),
                    threshold
                ),
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::DELETION_OK,
            "The edit does not remove a large amount of content.",
        )
    }
}

/// Approves when externally computed damaging/goodfaith scores clear the
/// configured cutoffs. Never fails: a poor score alone defers to manual
/// review rather than auto-rejecting.
///
/// BLP pages use the separate, stricter BLP threshold pair. Missing scores
/// or missing thresholds are inconclusive (fail closed).
pub struct QualityScoresCheck;

impl Check for QualityScoresCheck {
    fn id(&self) -> CheckId {
        CheckId::QualityScores
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let Some(thresholds) = context.config.thresholds_for(context.page.is_living_person)
        else {
            return CheckResult::not_ok(
                self.id(),
                reasons::SCORES_NOT_CONFIGURED,
                "No score thresholds configured for this page class.",
            );
        };

        let scores = context.scores.as_ref();
        let (Some(damaging), Some(goodfaith)) = (
            scores.and_then(|s| s.damaging),
            scores.and_then(|s| s.goodfaith),
        ) else {
            return CheckResult::not_ok(
                self.id(),
                reasons::SCORES_UNAVAILABLE,
                "Quality scores are unavailable for this edit.",
            );
        };

        if damaging <= thresholds.max_damaging && goodfaith >= thresholds.min_goodfaith {
            return CheckResult::ok(
                self.id(),
                reasons::SCORES_OK,
                format!(
                    "Scores are within thresholds (damaging {damaging:.3} <= \
                     {:.3}, goodfaith {goodfaith:.3} >= {:.3}).",
                    thresholds.max_damaging, thresholds.min_goodfaith
                ),
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::SCORES_BELOW_THRESHOLD,
            format!(
                "Scores do not clear the thresholds (damaging {damaging:.3}, \
                 goodfaith {goodfaith:.3})."
            ),
        )
    }
}
