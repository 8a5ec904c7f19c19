//! `workspace/executeCommand` handling for the cycling commands.

use serde_json::Value;
use tower_lsp::lsp_types::{Position, Range, TextEdit, Url};

use crate::context::{detect, mutate, Direction, KeywordSet};
use crate::document::DocumentState;

pub const INCREMENT_COMMAND: &str = "orgcycle.increment";
pub const DECREMENT_COMMAND: &str = "orgcycle.decrement";

/// Command identifiers advertised in the server capabilities.
pub fn all_commands() -> Vec<String> {
    vec![INCREMENT_COMMAND.to_string(), DECREMENT_COMMAND.to_string()]
}

/// Map a command identifier onto a cycling direction.
pub fn direction_for_command(command: &str) -> Option<Direction> {
    match command {
        INCREMENT_COMMAND => Some(Direction::Forward),
        DECREMENT_COMMAND => Some(Direction::Backward),
        _ => None,
    }
}

/// Decode the `[uri, position]` argument list sent by the client.
pub fn decode_arguments(arguments: &[Value]) -> Option<(Url, Position)> {
    let uri = serde_json::from_value(arguments.first()?.clone()).ok()?;
    let position = serde_json::from_value(arguments.get(1)?.clone()).ok()?;
    Some((uri, position))
}

/// Compute the edit that cycles the token under the cursor.
///
/// Returns `None` when there is nothing to modify at the position: no token
/// under the cursor, a position outside the document, or a date stamp that
/// does not name a real calendar day.
pub fn cycle_at_position(
    state: &DocumentState,
    position: Position,
    direction: Direction,
    keywords: &KeywordSet,
) -> Option<TextEdit> {
    let line = state.line_index.line(position.line)?;
    let line_start = state.line_index.line_start(position.line)?;
    let cursor = state.line_index.position_to_offset(position)? - line_start;

    let ctx = detect(line, position.line, cursor, keywords)?;
    let (new_text, span) = mutate(&ctx, direction, keywords)?;

    // A span widened to consume a separator space can poke past the end of
    // a line that has nothing after the keyword.
    let end = span.end.min(line.len());

    let range = Range::new(
        state.line_index.offset_to_position(line_start + span.start),
        state.line_index.offset_to_position(line_start + end),
    );
    Some(TextEdit { range, new_text })
}
