//! ISBN checksum validation and detection of ISBN-shaped strings.
//!
//! Detection is anchored on an `ISBN` marker the way editors actually write
//! citations (`ISBN 0-306-40615-2`, `isbn=9780306406157`). Digit groups with
//! the wrong length are not considered ISBNs at all; only strings that are
//! syntactically ISBN-10/13 shaped and fail their checksum are reported.

use once_cell::sync::Lazy;
use regex::Regex;

static ISBN_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bisbn\s*[=:]?\s*").unwrap());
static YEAR_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+\d{4}([^0-9]|$)").unwrap());

/// Validate an ISBN-10 checksum.
///
/// Expects separators already removed. The check digit may be `X` (value
/// 10) in the final position only. Valid iff the weighted sum with weights
/// 10..1 is divisible by 11.
pub fn validate_isbn_10(isbn: &str) -> bool {
    let chars: Vec<char> = isbn.chars().collect();
    if chars.len() != 10 {
        return false;
    }

    let mut sum = 0u32;
    for (i, &c) in chars.iter().enumerate() {
        let value = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'X' | 'x' if i == 9 => 10,
            _ => return false,
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

/// Validate an ISBN-13 checksum.
///
/// Expects separators already removed. Requires 13 digits with a `978` or
/// `979` prefix; valid iff the alternating 1,3-weighted sum is divisible
/// by 10.
pub fn validate_isbn_13(isbn: &str) -> bool {
    if isbn.len() != 13
        || !isbn.bytes().all(|b| b.is_ascii_digit())
        || !(isbn.starts_with("978") || isbn.starts_with("979"))
    {
        return false;
    }

    let sum: u32 = isbn
        .bytes()
        .enumerate()
        .map(|(i, b)| (b - b'0') as u32 * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    sum % 10 == 0
}

/// Find ISBN-shaped strings in `text` and return the ones whose checksum
/// fails, as written (separators preserved).
pub fn find_invalid_isbns(text: &str) -> Vec<String> {
    let mut invalid = Vec::new();

    for marker in ISBN_MARKER_RE.find_iter(text) {
        let Some(raw) = take_candidate(&text[marker.end()..]) else {
            continue;
        };
        let clean: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();

        let shaped_and_valid = match clean.len() {
            10 if is_isbn_10_shaped(&clean) => Some(validate_isbn_10(&clean)),
            13 if is_isbn_13_shaped(&clean) => Some(validate_isbn_13(&clean)),
            _ => None,
        };

        if shaped_and_valid == Some(false) {
            invalid.push(raw.to_string());
        }
    }

    invalid
}

fn is_isbn_10_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[..9].iter().all(u8::is_ascii_digit)
        && (bytes[9].is_ascii_digit() || bytes[9] == b'X' || bytes[9] == b'x')
}

// Prefix violations are left to the checksum validator: a 13-digit string
// after an ISBN marker is an ISBN claim either way.
fn is_isbn_13_shaped(s: &str) -> bool {
    s.len() == 13 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Take the digit/separator run following an ISBN marker, stopping at the
/// first free-standing year token (e.g. `ISBN 0-306-40615-2 1984`).
fn take_candidate(rest: &str) -> Option<&str> {
    let allowed = |c: char| {
        c.is_ascii_digit() || c == 'X' || c == 'x' || c == '-' || c.is_whitespace()
    };

    let run_end = rest
        .char_indices()
        .take(30)
        .take_while(|&(_, c)| allowed(c))
        .last()
        .map(|(i, c)| i + c.len_utf8())?;

    let mut candidate = rest[..run_end].trim();
    if let Some(year) = YEAR_TOKEN_RE.find(candidate) {
        candidate = candidate[..year.start()].trim_end();
    }

    if candidate.is_empty() {
        None
    } else {
        Some(candidate)
    }
}
