//! The configurable ordered TODO keyword list.

use regex::Regex;

use super::mutate::Direction;

/// Keyword list used when no configuration is found.
pub const DEFAULT_KEYWORDS: &[&str] = &["TODO", "DONE"];

/// An ordered list of recognized task-status keywords, plus the compiled
/// headline pattern built from it.
///
/// The cycle walked by [`KeywordSet::cycle`] is the configured list with one
/// extra implicit state between the last and first entries: "no keyword",
/// rendered as the empty string. Cycling forward off the last keyword (or
/// backward off the first) therefore removes the keyword entirely.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
    header: Option<Regex>,
}

impl KeywordSet {
    pub fn new(keywords: Vec<String>) -> Self {
        let header = if keywords.is_empty() {
            None
        } else {
            let alternation = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            // The alternation is built from escaped literals, so this
            // pattern always compiles.
            Some(
                Regex::new(&format!(r"^(\s*\*+\s+)({alternation})(?:\b|\[|$)")).unwrap(),
            )
        };
        Self { keywords, header }
    }

    /// The headline pattern: outline stars, whitespace, then one keyword
    /// followed by a word boundary, `[`, or end of line. Group 2 is the
    /// keyword itself. `None` when the keyword list is empty.
    pub fn header_pattern(&self) -> Option<&Regex> {
        self.header.as_ref()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// The next keyword in the cycle, or the empty string for the implicit
    /// "no keyword" state.
    ///
    /// A keyword not present in the list (possible only if the list changed
    /// between detection and mutation) restarts the cycle at the first entry.
    pub fn cycle(&self, keyword: &str, direction: Direction) -> String {
        let states = self.keywords.len() + 1;
        let Some(pos) = self.keywords.iter().position(|k| k == keyword) else {
            return self.keywords.first().cloned().unwrap_or_default();
        };
        let next = match direction {
            Direction::Forward => (pos + 1) % states,
            Direction::Backward => (pos + states - 1) % states,
        };
        self.keywords.get(next).cloned().unwrap_or_default()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}
