//! Match highlighting for rendered suggestions.

use regex::RegexBuilder;
use skiff_types::{HighlightSpan, Suggestion};

/// Locate one case-insensitive literal occurrence of `query` inside `text`
/// and record its byte span. Metacharacters in the query are escaped before
/// the pattern is built; a suggestion with no match is shown unsegmented.
#[must_use]
pub fn highlight(text: &str, query: &str) -> Suggestion {
    if query.is_empty() {
        return Suggestion::plain(text);
    }

    let matched = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
        .and_then(|pattern| pattern.find(text))
        .map(|found| HighlightSpan {
            start: found.start(),
            end: found.end(),
        });

    Suggestion {
        text: text.to_string(),
        matched,
    }
}
