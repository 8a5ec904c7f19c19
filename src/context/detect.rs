//! Detection of the modifiable token under the cursor.
//!
//! A single line is scanned for three token kinds in fixed priority order:
//! date stamps like `[2024-3-15 Fri]`, checkbox markers like `- [x]`, and
//! TODO-style headline keywords. The first rule that matches with the cursor
//! in the right place wins.

use std::sync::LazyLock;

use regex::Regex;

use super::keywords::KeywordSet;

/// A date stamp anywhere in the line: `[YYYY-M-D]` with an optional
/// three-letter weekday. Month and day are not zero-padded.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\d{4}-\d{1,2}-\d{1,2}( [A-Za-z]{3})?\]").unwrap());

/// A checkbox marker anchored at the start of the line, with an optional
/// list dash before it. Group 1 is the state character.
static CHECKBOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]*-?[ \t]*\[([ xXoO<>vV/-])\]").unwrap());

/// The kind of token found under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Date,
    TaskKeyword,
    Checkbox,
}

/// A half-open byte range `[start, end)` within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Zero-based line number in the document.
    pub line: u32,
    /// Byte offset of the first byte of the token within the line.
    pub start: usize,
    /// Byte offset one past the last byte of the token.
    pub end: usize,
}

/// A token found under the cursor, ready to be mutated.
///
/// Created fresh on every detection and never modified afterwards; mutation
/// derives a new span value instead of adjusting this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedContext {
    pub kind: TokenKind,
    /// The exact matched substring of the line.
    pub text: String,
    pub span: Span,
}

/// Find the modifiable token under `cursor` (a byte offset into `line`).
///
/// Rules are tried in order:
///
/// 1. Date stamps: every match in the line is checked; the one whose span
///    strictly contains the cursor wins. No match containing the cursor
///    falls through to rule 2.
/// 2. Checkbox: at most one match, anchored at the line start. Containment
///    is inclusive of the trailing edge, so a cursor sitting just after the
///    closing bracket still counts. If the line has a checkbox but the
///    cursor is elsewhere, detection stops with no result rather than
///    trying rule 3.
/// 3. Headline keyword: any cursor position on a matching line yields the
///    keyword context; the span covers the keyword text only.
///
/// A cursor past the end of the line is clamped to the line length, and a
/// cursor inside a multi-byte character is snapped back to its boundary.
pub fn detect(
    line: &str,
    line_number: u32,
    cursor: usize,
    keywords: &KeywordSet,
) -> Option<DetectedContext> {
    let cursor = snap_to_char_boundary(line, cursor.min(line.len()));

    for m in DATE_RE.find_iter(line) {
        if m.start() <= cursor && cursor < m.end() {
            return Some(DetectedContext {
                kind: TokenKind::Date,
                text: m.as_str().to_string(),
                span: Span {
                    line: line_number,
                    start: m.start(),
                    end: m.end(),
                },
            });
        }
    }

    if let Some(caps) = CHECKBOX_RE.captures(line) {
        // Both groups always participate in a match of this pattern.
        let whole = caps.get(0).unwrap();
        let state = caps.get(1).unwrap();
        if whole.start() <= cursor && cursor <= whole.end() {
            // The context covers the bracketed marker, not the list prefix.
            return Some(DetectedContext {
                kind: TokenKind::Checkbox,
                text: line[state.start() - 1..state.end() + 1].to_string(),
                span: Span {
                    line: line_number,
                    start: state.start() - 1,
                    end: state.end() + 1,
                },
            });
        }
        // A checkbox line never falls through to keyword matching.
        return None;
    }

    let caps = keywords.header_pattern()?.captures(line)?;
    let word = caps.get(2).unwrap();
    Some(DetectedContext {
        kind: TokenKind::TaskKeyword,
        text: word.as_str().to_string(),
        span: Span {
            line: line_number,
            start: word.start(),
            end: word.end(),
        },
    })
}

/// Walk backwards from `cursor` until it lands on a UTF-8 char boundary.
fn snap_to_char_boundary(line: &str, mut cursor: usize) -> usize {
    while cursor > 0 && !line.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
