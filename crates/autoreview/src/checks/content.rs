//! Checks over the edit's content: rendering damage, superseded additions,
//! and invalid ISBNs.

use crate::context::CheckContext;
use crate::isbn::find_invalid_isbns;
use crate::wikitext::{additions_superseded, extract_additions, SupersededOutcome};

use super::result::{reasons, CheckResult};
use super::{Check, CheckId};

/// Fails when the revision renders with more lint indicators than its
/// parent did. An edit that newly breaks rendering is never auto-approved.
pub struct NewRenderErrorsCheck;

impl Check for NewRenderErrorsCheck {
    fn id(&self) -> CheckId {
        CheckId::NewRenderErrors
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let old = context.revision.render_errors_old;
        let new = context.revision.render_errors_new;

        if new > old {
            return CheckResult::fail(
                self.id(),
                reasons::RENDER_ERRORS,
                format!(
                    "The edit introduces new rendering errors ({old} before, {new} after)."
                ),
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::RENDER_CLEAN,
            "The edit does not introduce new rendering errors.",
        )
    }
}

/// Fails when content this revision added has since been overwritten or
/// removed: approving it would approve text that no longer exists on the
/// page.
///
/// Runs early and stays conservative: anything inconclusive defers instead
/// of failing.
pub struct SupersededAdditionsCheck;

impl Check for SupersededAdditionsCheck {
    fn id(&self) -> CheckId {
        CheckId::SupersededAdditions
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let outcome = additions_superseded(
            &context.revision.parent_wikitext,
            &context.revision.wikitext,
            &context.page.current_wikitext,
            context.config.superseded_similarity_threshold,
        );

        match outcome {
            SupersededOutcome::Superseded => CheckResult::fail(
                self.id(),
                reasons::SUPERSEDED,
                "The additions from this revision have been superseded or removed \
                 in the latest version.",
            ),
            SupersededOutcome::AdditionsIntact => CheckResult::not_ok(
                self.id(),
                reasons::ADDITIONS_INTACT,
                "The additions from this revision are still present in the latest version.",
            ),
            SupersededOutcome::NoEvaluableAdditions => CheckResult::not_ok(
                self.id(),
                reasons::NO_ADDITIONS,
                "The revision has no additions to evaluate.",
            ),
        }
    }
}

/// Fails when the edit introduces an ISBN-shaped string whose checksum is
/// wrong. Only additions are scanned; invalid ISBNs already present in the
/// parent revision are not this edit's fault.
pub struct InvalidIsbnCheck;

impl Check for InvalidIsbnCheck {
    fn id(&self) -> CheckId {
        CheckId::InvalidIsbn
    }

    fn run(&self, context: &CheckContext) -> CheckResult {
        let additions = extract_additions(
            &context.revision.parent_wikitext,
            &context.revision.wikitext,
        );

        let mut invalid: Vec<String> = Vec::new();
        for addition in &additions {
            invalid.extend(find_invalid_isbns(addition));
        }

        if !invalid.is_empty() {
            return CheckResult::fail(
                self.id(),
                reasons::INVALID_ISBN,
                format!("The edit contains invalid ISBN(s): {}.", invalid.join(", ")),
            );
        }

        CheckResult::not_ok(
            self.id(),
            reasons::ISBN_OK,
            "No new invalid ISBNs detected.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckStatus;
    use crate::context::{PageData, RevisionData};

    fn context_with_revision(revision: RevisionData, page: PageData) -> CheckContext {
        CheckContext::new(revision, page)
    }

    #[test]
    fn test_render_check_fails_on_new_errors() {
        let ctx = context_with_revision(
            RevisionData {
                render_errors_old: 1,
                render_errors_new: 3,
                ..RevisionData::default()
            },
            PageData::default(),
        );
        let result = NewRenderErrorsCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, reasons::RENDER_ERRORS);
    }

    #[test]
    fn test_render_check_neutral_when_errors_fixed() {
        let ctx = context_with_revision(
            RevisionData {
                render_errors_old: 2,
                render_errors_new: 0,
                ..RevisionData::default()
            },
            PageData::default(),
        );
        assert_eq!(NewRenderErrorsCheck.run(&ctx).status, CheckStatus::NotOk);
    }

    #[test]
    fn test_superseded_check_fails_on_vanished_addition() {
        let ctx = context_with_revision(
            RevisionData {
                parent_wikitext: "intro paragraph\n".to_string(),
                wikitext: "intro paragraph\nThe bridge opened to traffic in May 1937.\n"
                    .to_string(),
                ..RevisionData::default()
            },
            PageData {
                current_wikitext: "a fully rewritten article about something else\n".to_string(),
                ..PageData::default()
            },
        );
        let result = SupersededAdditionsCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::Fail);
        assert_eq!(result.reason, reasons::SUPERSEDED);
    }

    #[test]
    fn test_superseded_check_neutral_on_pure_deletion() {
        let ctx = context_with_revision(
            RevisionData {
                parent_wikitext: "keep this\nremove this\n".to_string(),
                wikitext: "keep this\n".to_string(),
                ..RevisionData::default()
            },
            PageData {
                current_wikitext: "keep this\n".to_string(),
                ..PageData::default()
            },
        );
        let result = SupersededAdditionsCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::NotOk);
        assert_eq!(result.reason, reasons::NO_ADDITIONS);
    }

    #[test]
    fn test_superseded_check_neutral_when_addition_survives() {
        let addition = "The bridge opened to traffic in May 1937.";
        let ctx = context_with_revision(
            RevisionData {
                parent_wikitext: "intro paragraph\n".to_string(),
                wikitext: format!("intro paragraph\n{addition}\n"),
                ..RevisionData::default()
            },
            PageData {
                current_wikitext: format!("new intro\n{addition}\nclosing section\n"),
                ..PageData::default()
            },
        );
        let result = SupersededAdditionsCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::NotOk);
        assert_eq!(result.reason, reasons::ADDITIONS_INTACT);
    }

    #[test]
    fn test_isbn_check_fails_on_introduced_invalid_isbn() {
        let ctx = context_with_revision(
            RevisionData {
                parent_wikitext: "existing text\n".to_string(),
                wikitext: "existing text\nCited from ISBN 0-306-40615-3.\n".to_string(),
                ..RevisionData::default()
            },
            PageData::default(),
        );
        let result = InvalidIsbnCheck.run(&ctx);
        assert_eq!(result.status, CheckStatus::Fail);
        assert!(result.label.contains("0-306-40615-3"));
    }

    #[test]
    fn test_isbn_check_ignores_preexisting_invalid_isbn() {
        let ctx = context_with_revision(
            RevisionData {
                parent_wikitext: "Bad cite ISBN 0-306-40615-3 here.\n".to_string(),
                wikitext: "Bad cite ISBN 0-306-40615-3 here.\nNew harmless sentence.\n"
                    .to_string(),
                ..RevisionData::default()
            },
            PageData::default(),
        );
        assert_eq!(InvalidIsbnCheck.run(&ctx).status, CheckStatus::NotOk);
    }

    #[test]
    fn test_isbn_check_neutral_on_valid_isbn() {
        let ctx = context_with_revision(
            RevisionData {
                parent_wikitext: "text\n".to_string(),
                wikitext: "text\nSee ISBN 978-0-306-40615-7.\n".to_string(),
                ..RevisionData::default()
            },
            PageData::default(),
        );
        assert_eq!(InvalidIsbnCheck.run(&ctx).status, CheckStatus::NotOk);
    }
}
