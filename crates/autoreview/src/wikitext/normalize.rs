//! Wikitext normalization for similarity comparison.
//!
//! This is deliberately not a wikitext parser. It strips the markup that
//! churns between revisions (references, templates, link syntax, table
//! scaffolding) so that textual comparison reflects prose content. It is
//! lossy by design: a missed similarity only defers an edit to a human,
//! while a false match could approve vanished content.

use once_cell::sync::Lazy;
use regex::Regex;

static COMMENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static REF_PAIR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<ref[^>]*>.*?</ref>").unwrap());
static REF_SELF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<ref[^>]*/>").unwrap());
static TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{[^{}]*\}\}").unwrap());
static CATEGORY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[\[Category:[^\]]+\]\]").unwrap());
static FILE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[\[(?:File|Image):[^\]]+\]\]").unwrap());
static PIPED_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[[^\]|]+\|([^\]]+)\]\]").unwrap());
static PLAIN_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());
static QUOTE_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"'{2,}").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize wikitext to a canonical form for comparison.
///
/// Guaranteed idempotent: `normalize_wikitext(&normalize_wikitext(x))`
/// equals `normalize_wikitext(x)` for any input. Unparseable fragments are
/// left in place and compared as opaque text.
pub fn normalize_wikitext(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    // Stripping one layer of markup can expose another (nested templates,
    // markup split by comments), so run passes until a fixpoint. Each
    // changing pass strictly shrinks the text, so this terminates.
    let mut current = strip_pass(text);
    loop {
        let next = strip_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_pass(text: &str) -> String {
    let text = COMMENT_RE.replace_all(text, "");
    let text = REF_PAIR_RE.replace_all(&text, "");
    let text = REF_SELF_RE.replace_all(&text, "");
    let text = TEMPLATE_RE.replace_all(&text, "");
    let text = CATEGORY_RE.replace_all(&text, "");
    let text = FILE_LINK_RE.replace_all(&text, "");
    let text = PIPED_LINK_RE.replace_all(&text, "$1");
    let text = PLAIN_LINK_RE.replace_all(&text, "$1");
    let text = QUOTE_RUN_RE.replace_all(&text, "");
    let text = unify_quotes(&text);

    let kept: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !is_format_noise(line))
        .collect();

    WHITESPACE_RE.replace_all(&kept.join("\n"), " ").trim().to_string()
}

/// Map curly quote variants to their straight equivalents.
fn unify_quotes(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            _ => c,
        })
        .collect()
}

/// Lines made only of table/heading punctuation carry no prose.
fn is_format_noise(line: &str) -> bool {
    !line.is_empty()
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | '=' | '!' | '+') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_wikitext(""), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(
            normalize_wikitext("some   text\n\n  over lines"),
            "some text over lines"
        );
    }

    #[test]
    fn test_strips_references() {
        let text = "Fact.<ref name=\"a\">Source</ref> More.<ref name=\"b\"/>";
        assert_eq!(normalize_wikitext(text), "Fact. More.");
    }

    #[test]
    fn test_strips_nested_templates() {
        let text = "Before {{infobox|a={{nested|x}}|b=1}} after";
        assert_eq!(normalize_wikitext(text), "Before after");
    }

    #[test]
    fn test_strips_comments_and_categories() {
        let text = "Text<!-- hidden\nnote --> end\n[[Category:History]]";
        assert_eq!(normalize_wikitext(text), "Text end");
    }

    #[test]
    fn test_unwraps_links() {
        assert_eq!(
            normalize_wikitext("See [[Main Page|the main page]] and [[Help]]."),
            "See the main page and Help."
        );
    }

    #[test]
    fn test_strips_bold_italic_markup() {
        assert_eq!(normalize_wikitext("'''Bold''' and ''italic''"), "Bold and italic");
    }

    #[test]
    fn test_unifies_curly_quotes() {
        assert_eq!(
            normalize_wikitext("\u{201C}quoted\u{201D} and don\u{2019}t"),
            "\"quoted\" and don't"
        );
    }

    #[test]
    fn test_drops_table_noise_lines() {
        let text = "{|\n|-\nprose row\n|-\n|}\n== Heading ==";
        let normalized = normalize_wikitext(text);
        assert!(normalized.contains("prose row"));
        assert!(!normalized.contains("|-"));
    }

    #[test]
    fn test_idempotent_on_markup_heavy_text() {
        let text = "'''Intro''' {{cite|{{deep|x}}}} [[a|b]]<ref>r</ref>\n|-\ntail";
        let once = normalize_wikitext(text);
        assert_eq!(normalize_wikitext(&once), once);
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize_wikitext("plain sentence"), "plain sentence");
    }
}
