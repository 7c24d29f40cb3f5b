//! Query classification for the search overlay.
//!
//! Turns raw input text into a destination. Resolution precedence, first
//! match wins with no backtracking:
//!
//! 1. URL-shaped text navigates literally (`https://` prepended if bare).
//! 2. The full text as an exact registry key resolves to that entry's URL.
//! 3. Split on the first search delimiter: key + encoded search text
//!    substituted into the entry's template.
//! 4. Split on the first path delimiter: key + path appended to the entry's
//!    origin, with the reserved keys `"0"` and `"r"` routed specially.
//! 5. Everything else becomes a default web search.

use crate::config::{PLACEHOLDER, SearchConfig};
use crate::registry::CommandRegistry;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use skiff_types::{CommandEntry, ResolvedQuery};
use std::sync::LazyLock;
use url::Url;

/// Characters kept literal by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Optional scheme, dotted host, optional port, optional path, no spaces.
static URL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(https?://)?[\w-]+(\.[\w-]+)+\.?(:\d+)?(/\S*)?$")
        .expect("URL shape pattern compiles")
});

static HAS_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+://").expect("scheme pattern compiles"));

/// Classify one raw input string. Returns `None` for empty or
/// whitespace-only input; callers suppress any destination and close an
/// open suggestion surface. Everything else resolves to *some* URL, in the
/// worst case the default web search.
#[must_use]
pub fn classify(
    raw: &str,
    registry: &CommandRegistry,
    config: &SearchConfig,
) -> Option<ResolvedQuery> {
    let query = raw.trim();
    if query.is_empty() {
        return None;
    }

    // URL-shaped text goes straight to the address bar. This runs before
    // any delimiter split so a bare host carrying a path segment is never
    // mistaken for a command lookup.
    if URL_SHAPE.is_match(query) {
        let url = if HAS_SCHEME.is_match(query) {
            query.to_string()
        } else {
            format!("https://{query}")
        };
        return Some(ResolvedQuery {
            query: query.to_string(),
            url,
            ..ResolvedQuery::default()
        });
    }

    // The full text as an exact key beats any split; templates do not
    // apply here.
    if let Some(entry) = registry.lookup(query) {
        return Some(ResolvedQuery {
            query: query.to_string(),
            url: entry.url.clone(),
            key: Some(query.to_string()),
            ..ResolvedQuery::default()
        });
    }

    if let Some(resolved) = split_on_search(query, registry, config) {
        return Some(resolved);
    }

    if let Some(resolved) = split_on_path(query, registry, config) {
        return Some(resolved);
    }

    Some(ResolvedQuery {
        query: query.to_string(),
        url: fill_template(&config.default_search_template, query),
        search: Some(query.to_string()),
        ..ResolvedQuery::default()
    })
}

/// Split on the first search delimiter and resolve the entry's template.
fn split_on_search(
    query: &str,
    registry: &CommandRegistry,
    config: &SearchConfig,
) -> Option<ResolvedQuery> {
    let delimiter = config.command_search_delimiter;
    let (key, rest) = query.split_once(delimiter)?;
    let entry = registry.lookup(key)?;
    let search = rest.trim();
    let url = search_destination(entry, search)?;
    Some(ResolvedQuery {
        query: query.to_string(),
        url,
        key: Some(key.to_string()),
        search: Some(search.to_string()),
        split_by: Some(delimiter),
        ..ResolvedQuery::default()
    })
}

/// Split on the first path delimiter and route to the entry's origin.
fn split_on_path(
    query: &str,
    registry: &CommandRegistry,
    config: &SearchConfig,
) -> Option<ResolvedQuery> {
    let delimiter = config.command_path_delimiter;
    let (key, path) = query.split_once(delimiter)?;
    let entry = registry.lookup(key)?;
    let url = path_destination(key, path, entry)?;
    Some(ResolvedQuery {
        query: query.to_string(),
        url,
        key: Some(key.to_string()),
        path: Some(path.to_string()),
        split_by: Some(delimiter),
        ..ResolvedQuery::default()
    })
}

/// Resolve the entry's search template against its base URL and substitute
/// the encoded search text. An entry without a template searches its base
/// URL directly.
fn search_destination(entry: &CommandEntry, search: &str) -> Option<String> {
    let base = Url::parse(&entry.url).ok()?;
    let template = entry.search_template.as_deref().unwrap_or("");
    let resolved = base.join(template).ok()?;
    // The URL parser percent-encodes braces that land in path position;
    // restore the placeholder so substitution can find it.
    let href = resolved.as_str().replace("%7B%7D", PLACEHOLDER);
    Some(fill_template(&href, search))
}

/// Reserved keys route specially: `"0"` is loopback-by-port and `"r"`
/// addresses a subreddit. Every other key lands on the command's origin
/// plus the path.
fn path_destination(key: &str, path: &str, entry: &CommandEntry) -> Option<String> {
    match key {
        "0" => Some(format!("http://localhost:{path}")),
        "r" => Some(format!("https://www.reddit.com/r/{path}")),
        _ => {
            let origin = Url::parse(&entry.url).ok()?.origin().ascii_serialization();
            Some(format!("{origin}/{path}"))
        }
    }
}

/// Replace every placeholder occurrence with the percent-encoded search
/// text.
#[must_use]
pub fn fill_template(template: &str, search: &str) -> String {
    template.replace(PLACEHOLDER, &encode_component(search))
}

/// `encodeURIComponent`-equivalent percent encoding.
#[must_use]
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}
