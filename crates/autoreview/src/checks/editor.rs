//! Checks over the editor: block status and reputation.

use crate::context::CheckContext;

use super::result::{reasons, CheckResult};
use super::{Check, CheckId};

/// Fails when the editor is blocked at the time of the edit. A missing
/// profile is inconclusive, not rejection evidence.
pub struct BlockedUserCheck;

impl Check for BlockedUserCheck {
    fn id(&self) -> CheckId {
        CheckId::BlockedUser
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let Some(profile) = &context.editor_profile else {
            return CheckResult::not_ok(
                self.id(),
                reasons::NO_PROFILE,
                "No editor profile available; block status could not be verified.",
            );
        };

        if profile.is_blocked_at(context.revision.timestamp) {
            return CheckResult::fail(
                self.id(),
                reasons::BLOCKED,
                format!("Editor '{}' is blocked.", context.revision.editor),
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::NOT_BLOCKED,
            "The editor is not blocked.",
        )
    }
}

/// Approves based on editor reputation alone, independent of content
/// scores. Never fails: a low-reputation editor is not itself rejection
/// evidence.
pub struct EditorTrustCheck;

impl Check for EditorTrustCheck {
    fn id(&self) -> CheckId {
        CheckId::EditorTrust
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let Some(profile) = &context.editor_profile else {
            return CheckResult::not_ok(
                self.id(),
                reasons::NO_PROFILE,
                "No editor profile available; trust could not be evaluated.",
            );
        };

        let requirements = &context.config.trust;
        let trusted = profile.edit_count >= requirements.min_edit_count
            && !profile.is_blocked_at(context.revision.timestamp)
            && profile.warning_count <= requirements.max_warning_count
            && !profile.former_bot
            && u64::from(profile.account_age_days)
                >= u64::from(requirements.min_account_age_days);

        if trusted {
            return CheckResult::ok(
                self.id(),
                reasons::TRUSTED_EDITOR,
                format!(
                    "Editor meets the reputation bar ({} edits, {} in articles, \
                     {} warnings, account {} days old).",
                    profile.edit_count,
                    profile.article_edit_count,
                    profile.warning_count,
                    profile.account_age_days
                ),
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::UNTRUSTED_EDITOR,
            "Editor does not meet the reputation bar for trust-based approval.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use crate::config::TrustRequirements;
    use crate::context::{EditorProfile, PageData, RevisionData};
    use chrono::{TimeZone, Utc};

    fn context_with_profile(profile: EditorProfile) -> CheckContext {
        let revision = RevisionData {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
            editor: "Example".to_string(),
            ..RevisionData::default()
        };
        CheckContext::new(revision, PageData::default()).with_editor_profile(profile)
    }

    fn trusted_profile() -> EditorProfile {
        EditorProfile {
            edit_count: 50_000,
            article_edit_count: 30_000,
            warning_count: 0,
            blocked: false,
            block_expiry: None,
            former_bot: false,
            account_age_days: 2_000,
        }
    }

    #[test]
    fn test_block_check_fails_for_blocked_editor() {
        let ctx = context_with_profile(EditorProfile {
            blocked: true,
            ..trusted_profile()
        });
        let result = BlockedUserCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, reasons::BLOCKED);
    }

    #[test]
    fn test_block_check_neutral_for_expired_block() {
        let expiry = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let ctx = context_with_profile(EditorProfile {
            blocked: true,
            block_expiry: Some(expiry),
            ..trusted_profile()
        });
        assert_eq!(BlockedUserCheck.run(&ctx).status, CheckStatus::NotOk);
    }

    #[test]
    fn test_block_check_neutral_without_profile() {
        let ctx = CheckContext::new(RevisionData::default(), PageData::default());
        let result = BlockedUserCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::NotOk);
        assert_eq!(result.reason, reasons::NO_PROFILE);
    }

    #[test]
    fn test_trust_check_approves_established_editor() {
        let ctx = context_with_profile(trusted_profile());
        let result = EditorTrustCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::Ok);
        assert_eq!(result.reason, reasons::TRUSTED_EDITOR);
    }

    #[test]
    fn test_trust_check_neutral_for_new_account() {
        let ctx = context_with_profile(EditorProfile {
            account_age_days: 3,
            ..trusted_profile()
        });
        assert_eq!(EditorTrustCheck.run(&ctx).status, CheckStatus::NotOk);
    }

    #[test]
    fn test_trust_check_neutral_for_warned_editor() {
        let ctx = context_with_profile(EditorProfile {
            warning_count: 2,
            ..trusted_profile()
        });
        assert_eq!(EditorTrustCheck.run(&ctx).status, CheckStatus::NotOk);
    }

    #[test]
    fn test_trust_check_neutral_for_former_bot() {
        let ctx = context_with_profile(EditorProfile {
            former_bot: true,
            ..trusted_profile()
        });
        assert_eq!(EditorTrustCheck.run(&ctx).status, CheckStatus::NotOk);
    }

    #[test]
    fn test_trust_check_respects_configured_minimums() {
        let mut ctx = context_with_profile(EditorProfile {
            edit_count: 120,
            ..trusted_profile()
        });
        ctx.config.trust = TrustRequirements {
            min_edit_count: 100,
            max_warning_count: 0,
            min_account_age_days: 30,
        };
        assert_eq!(EditorTrustCheck.run(&ctx).status, CheckStatus::Ok);
    }
}
