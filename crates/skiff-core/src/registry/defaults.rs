//! Built-in command set.
//!
//! Covers the everyday destinations of the start page. `"0"` and `"r"` are
//! the reserved keys the classifier routes specially; nameless entries are
//! hidden sub-commands reachable by exact key only.

use skiff_types::CommandEntry;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[allow(clippy::too_many_lines)] // a single literal table
pub(super) fn builtin_commands() -> Vec<(String, CommandEntry)> {
    vec![
        (
            "g".to_string(),
            CommandEntry {
                name: Some("github".to_string()),
                url: "https://github.com".to_string(),
                search_template: Some("/search?q={}".to_string()),
                suggestions: strings(&["g/trending", "g/pulls", "g/issues"]),
            },
        ),
        (
            "y".to_string(),
            CommandEntry {
                name: Some("youtube".to_string()),
                url: "https://www.youtube.com".to_string(),
                search_template: Some("/results?search_query={}".to_string()),
                suggestions: Vec::new(),
            },
        ),
        (
            "r".to_string(),
            CommandEntry {
                name: Some("reddit".to_string()),
                url: "https://www.reddit.com".to_string(),
                search_template: Some("/search/?q={}".to_string()),
                suggestions: strings(&["r/rust", "r/linux", "r/selfhosted"]),
            },
        ),
        (
            "f".to_string(),
            CommandEntry {
                name: Some("forums".to_string()),
                url: "https://news.ycombinator.com".to_string(),
                search_template: Some("https://hn.algolia.com/?q={}".to_string()),
                suggestions: strings(&["f/hn", "f/lobsters", "f/tildes"]),
            },
        ),
        (
            "f/hn".to_string(),
            CommandEntry {
                url: "https://news.ycombinator.com".to_string(),
                ..CommandEntry::default()
            },
        ),
        (
            "f/lobsters".to_string(),
            CommandEntry {
                url: "https://lobste.rs".to_string(),
                ..CommandEntry::default()
            },
        ),
        (
            "f/tildes".to_string(),
            CommandEntry {
                url: "https://tildes.net".to_string(),
                ..CommandEntry::default()
            },
        ),
        (
            "w".to_string(),
            CommandEntry {
                name: Some("wiki".to_string()),
                url: "https://en.wikipedia.org".to_string(),
                search_template: Some("/w/index.php?search={}".to_string()),
                suggestions: Vec::new(),
            },
        ),
        (
            "a".to_string(),
            CommandEntry {
                name: Some("ai".to_string()),
                url: "https://claude.ai".to_string(),
                search_template: Some("/new?q={}".to_string()),
                suggestions: strings(&["a/chatgpt", "a/perplexity"]),
            },
        ),
        (
            "a/chatgpt".to_string(),
            CommandEntry {
                url: "https://chatgpt.com".to_string(),
                search_template: Some("/?q={}".to_string()),
                ..CommandEntry::default()
            },
        ),
        (
            "a/perplexity".to_string(),
            CommandEntry {
                url: "https://www.perplexity.ai".to_string(),
                search_template: Some("/search/new?q={}".to_string()),
                ..CommandEntry::default()
            },
        ),
        (
            "m".to_string(),
            CommandEntry {
                name: Some("maps".to_string()),
                url: "https://www.openstreetmap.org".to_string(),
                search_template: Some("/search?query={}".to_string()),
                suggestions: Vec::new(),
            },
        ),
        (
            "c".to_string(),
            CommandEntry {
                name: Some("crates".to_string()),
                url: "https://crates.io".to_string(),
                search_template: Some("/search?q={}".to_string()),
                suggestions: Vec::new(),
            },
        ),
        (
            "d".to_string(),
            CommandEntry {
                name: Some("docs".to_string()),
                url: "https://docs.rs".to_string(),
                search_template: Some("/releases/search?query={}".to_string()),
                suggestions: Vec::new(),
            },
        ),
        (
            "0".to_string(),
            CommandEntry {
                name: Some("localhost".to_string()),
                url: "http://localhost".to_string(),
                ..CommandEntry::default()
            },
        ),
    ]
}
