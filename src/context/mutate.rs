//! Computing the replacement for a detected token.

use super::datetime;
use super::detect::{DetectedContext, Span, TokenKind};
use super::keywords::KeywordSet;

/// Which way to cycle the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Checkbox states in cycling order. The lookup is case-insensitive
/// (lowercase `x`, `o` and `v` normalize to their uppercase slots).
pub const CHECKBOX_STATES: [char; 8] = [' ', 'X', 'O', '/', '<', '>', 'V', '-'];

/// Compute the replacement text and target span for a detected token.
///
/// Returns `None` only when the token cannot be adjusted at all, which
/// happens for date stamps whose digits do not name a real calendar day
/// (e.g. `[2024-2-30]`). The caller treats that the same as "no context".
pub fn mutate(
    ctx: &DetectedContext,
    direction: Direction,
    keywords: &KeywordSet,
) -> Option<(String, Span)> {
    match ctx.kind {
        TokenKind::Date => {
            let shifted = datetime::shift(&ctx.text, direction)?;
            Some((shifted, ctx.span))
        }
        TokenKind::TaskKeyword => {
            let next = keywords.cycle(&ctx.text, direction);
            if next.is_empty() {
                // Dropping the keyword leaves its separator space behind;
                // widen the span by one byte to take that space with it.
                let span = Span {
                    end: ctx.span.end + 1,
                    ..ctx.span
                };
                Some((next, span))
            } else {
                Some((next, ctx.span))
            }
        }
        TokenKind::Checkbox => {
            // ctx.text is the bracketed marker, e.g. "[x]"; the state
            // character sits between the brackets. Replace only that slot.
            let state = ctx
                .text
                .strip_prefix('[')
                .and_then(|t| t.strip_suffix(']'))
                .and_then(|t| t.chars().next())
                .map(|c| c.to_ascii_uppercase());
            let next = match state.and_then(|c| CHECKBOX_STATES.iter().position(|&s| s == c)) {
                // Cycling always advances; stepping the sequence in reverse
                // on Backward is not currently supported.
                Some(idx) => CHECKBOX_STATES[(idx + 1) % CHECKBOX_STATES.len()],
                // Unrecognized states reset to unchecked.
                None => ' ',
            };
            let span = Span {
                line: ctx.span.line,
                start: ctx.span.start + 1,
                end: ctx.span.end - 1,
            };
            Some((next.to_string(), span))
        }
    }
}
