use expect_test::expect;
use orgcycle::{
    cycle_at_position, detect, Direction, DocumentState, KeywordSet, TokenKind,
};
use tower_lsp::lsp_types::{Position, TextEdit};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Format the detection result for a cursor position as one line:
///   <kind> "<text>" @ <start>..<end>
fn describe(line: &str, cursor: usize) -> String {
    describe_with(line, cursor, &KeywordSet::default())
}

fn describe_with(line: &str, cursor: usize, keywords: &KeywordSet) -> String {
    match detect(line, 0, cursor, keywords) {
        Some(ctx) => {
            let kind = match ctx.kind {
                TokenKind::Date => "Date",
                TokenKind::TaskKeyword => "TaskKeyword",
                TokenKind::Checkbox => "Checkbox",
            };
            format!("{} {:?} @ {}..{}", kind, ctx.text, ctx.span.start, ctx.span.end)
        }
        None => "no context".to_string(),
    }
}

/// Apply a single-line edit to a document (ASCII fixtures only, so UTF-16
/// columns and byte offsets coincide).
fn apply(text: &str, edit: &TextEdit) -> String {
    let mut lines: Vec<String> = text.split('\n').map(|l| l.to_string()).collect();
    let line = &lines[edit.range.start.line as usize];
    let start = edit.range.start.character as usize;
    let end = edit.range.end.character as usize;
    let patched = format!("{}{}{}", &line[..start], edit.new_text, &line[end..]);
    lines[edit.range.start.line as usize] = patched;
    lines.join("\n")
}

/// Run one cycling command against a one-line document and return the result.
fn cycled(line: &str, cursor: u32, direction: Direction) -> String {
    cycled_with(line, cursor, direction, &KeywordSet::default())
}

fn cycled_with(line: &str, cursor: u32, direction: Direction, keywords: &KeywordSet) -> String {
    let state = DocumentState::new(line.to_string(), 0);
    match cycle_at_position(&state, Position::new(0, cursor), direction, keywords) {
        Some(edit) => apply(line, &edit),
        None => "(no change)".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

#[test]
fn detects_date_under_cursor() {
    let actual = describe("Meeting [2024-3-15 Fri] notes", 12);
    let expected = expect![[r#"Date "[2024-3-15 Fri]" @ 8..23"#]];
    expected.assert_eq(&actual);
}

#[test]
fn cursor_outside_the_date_finds_nothing() {
    let actual = describe("Meeting [2024-3-15 Fri] notes", 25);
    let expected = expect![[r#"no context"#]];
    expected.assert_eq(&actual);
}

#[test]
fn detects_the_date_the_cursor_is_in() {
    let actual = describe("from [2024-1-1] to [2024-2-2]", 21);
    let expected = expect![[r#"Date "[2024-2-2]" @ 19..29"#]];
    expected.assert_eq(&actual);
}

#[test]
fn detects_checkbox_marker() {
    let actual = describe("- [ ] buy milk", 3);
    let expected = expect![[r#"Checkbox "[ ]" @ 2..5"#]];
    expected.assert_eq(&actual);
}

#[test]
fn checkbox_blocks_keyword_matching() {
    // Cursor past the marker on a checkbox line: no context, even though
    // the line is otherwise scanned for keywords.
    let actual = describe("- [ ] buy milk", 10);
    let expected = expect![[r#"no context"#]];
    expected.assert_eq(&actual);
}

#[test]
fn detects_headline_keyword_anywhere_on_the_line() {
    let actual = describe("** DONE write report", 15);
    let expected = expect![[r#"TaskKeyword "DONE" @ 3..7"#]];
    expected.assert_eq(&actual);
}

#[test]
fn respects_a_configured_keyword_table() {
    let keywords = KeywordSet::new(vec!["IDEA".to_string(), "SHIPPED".to_string()]);
    let actual = describe_with("* IDEA rewrite it in rust", 0, &keywords);
    let expected = expect![[r#"TaskKeyword "IDEA" @ 2..6"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Cycling
// ---------------------------------------------------------------------------

#[test]
fn increments_a_date() {
    let actual = cycled("Meeting [2024-3-15 Fri] notes", 12, Direction::Forward);
    let expected = expect![[r#"Meeting [2024-3-16 Sat] notes"#]];
    expected.assert_eq(&actual);
}

#[test]
fn date_increment_then_decrement_round_trips() {
    let line = "pay rent [2024-6-10]";
    let forward = cycled(line, 12, Direction::Forward);
    let back = cycled(&forward, 12, Direction::Backward);
    assert_eq!(back, line);
}

#[test]
fn decrements_across_a_month_boundary() {
    let actual = cycled("due [2024-3-1]", 6, Direction::Backward);
    let expected = expect![[r#"due [2024-2-29]"#]];
    expected.assert_eq(&actual);
}

#[test]
fn checks_a_checkbox() {
    let actual = cycled("- [ ] buy milk", 3, Direction::Forward);
    let expected = expect![[r#"- [X] buy milk"#]];
    expected.assert_eq(&actual);
}

#[test]
fn checkbox_states_cycle_back_around() {
    let mut line = "- [ ] errands".to_string();
    for _ in 0..8 {
        line = cycled(&line, 3, Direction::Forward);
    }
    assert_eq!(line, "- [ ] errands");
}

#[test]
fn advances_a_todo_keyword() {
    let actual = cycled("* TODO water plants", 4, Direction::Forward);
    let expected = expect![[r#"* DONE water plants"#]];
    expected.assert_eq(&actual);
}

#[test]
fn cycling_past_the_last_keyword_removes_it() {
    // The separator space goes with the keyword; one space remains between
    // the stars and the title, not two.
    let actual = cycled("* DONE water plants", 4, Direction::Forward);
    let expected = expect![[r#"* water plants"#]];
    expected.assert_eq(&actual);
}

#[test]
fn removing_a_trailing_keyword_leaves_a_single_space() {
    let keywords = KeywordSet::new(vec!["TODO".to_string()]);
    let actual = cycled_with("* TODO", 3, Direction::Forward, &keywords);
    let expected = expect![[r#"* "#]];
    expected.assert_eq(&actual);
}

#[test]
fn plain_text_is_left_alone() {
    let actual = cycled("nothing interesting here", 5, Direction::Forward);
    let expected = expect![[r#"(no change)"#]];
    expected.assert_eq(&actual);
}

#[test]
fn impossible_date_is_left_alone() {
    let actual = cycled("broken [2024-2-31] stamp", 10, Direction::Forward);
    let expected = expect![[r#"(no change)"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Multi-line documents
// ---------------------------------------------------------------------------

#[test]
fn edits_only_the_cursor_line() {
    let doc = "* TODO one\n* TODO two\n* TODO three";
    let state = DocumentState::new(doc.to_string(), 0);
    let edit = cycle_at_position(
        &state,
        Position::new(1, 4),
        Direction::Forward,
        &KeywordSet::default(),
    )
    .unwrap();
    let actual = apply(doc, &edit);
    let expected = expect![[r#"
        * TODO one
        * DONE two
        * TODO three"#]];
    expected.assert_eq(&actual);
}

#[test]
fn position_beyond_the_document_is_ignored() {
    let state = DocumentState::new("* TODO one".to_string(), 0);
    assert!(cycle_at_position(
        &state,
        Position::new(5, 0),
        Direction::Forward,
        &KeywordSet::default(),
    )
    .is_none());
}
