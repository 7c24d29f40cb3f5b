//! Test fixtures and helpers

use crate::config::SearchConfig;
use crate::registry::CommandRegistry;
use crate::suggest::AutocompleteSource;
use crate::{Error, Result};
use skiff_types::CommandEntry;

pub fn entry(
    name: Option<&str>,
    url: &str,
    template: Option<&str>,
    suggestions: &[&str],
) -> CommandEntry {
    CommandEntry {
        name: name.map(ToString::to_string),
        url: url.to_string(),
        search_template: template.map(ToString::to_string),
        suggestions: suggestions.iter().map(ToString::to_string).collect(),
    }
}

/// Registry exercising every classifier branch: relative and absolute
/// templates, a path-position placeholder, hidden sub-commands, reserved
/// keys, and an exact key shadowing a path split of its parent.
pub fn test_registry() -> CommandRegistry {
    CommandRegistry::from_entries(vec![
        (
            "g".to_string(),
            entry(
                Some("github"),
                "https://github.com",
                Some("/search?q={}"),
                &["g/trending", "g/pulls"],
            ),
        ),
        (
            "y".to_string(),
            entry(
                Some("youtube"),
                "https://www.youtube.com",
                Some("/results?search_query={}"),
                &[],
            ),
        ),
        (
            "r".to_string(),
            entry(
                Some("reddit"),
                "https://www.reddit.com",
                Some("/search/?q={}"),
                &["r/rust", "r/linux"],
            ),
        ),
        (
            "r/nn".to_string(),
            entry(None, "https://nn.example.org", None, &[]),
        ),
        (
            "f".to_string(),
            entry(
                Some("forums"),
                "https://news.ycombinator.com",
                Some("https://hn.algolia.com/?q={}"),
                &["f/hn", "f/lobsters"],
            ),
        ),
        (
            "f/hn".to_string(),
            entry(None, "https://news.ycombinator.com", None, &[]),
        ),
        (
            "wp".to_string(),
            entry(Some("wiki"), "https://en.wikipedia.org", Some("/wiki/{}"), &[]),
        ),
        (
            "0".to_string(),
            entry(Some("localhost"), "http://localhost", None, &[]),
        ),
    ])
    .unwrap()
}

pub fn test_config() -> SearchConfig {
    SearchConfig::default()
}

/// Source returning a fixed phrase list for any search.
pub struct StaticSource(pub Vec<String>);

impl StaticSource {
    pub fn of(phrases: &[&str]) -> Self {
        Self(phrases.iter().map(ToString::to_string).collect())
    }
}

impl AutocompleteSource for StaticSource {
    async fn complete(&self, _search: &str) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

/// Source that always fails.
pub struct FailingSource;

impl AutocompleteSource for FailingSource {
    async fn complete(&self, _search: &str) -> Result<Vec<String>> {
        Err(Error::Config("autocomplete offline".to_string()))
    }
}
