//! Shared types for the skiff start page.
//!
//! This crate provides the data model used across skiff-core and skiff-tui:
//! registry entries, classified queries, suggestions with highlight spans,
//! and the widget payloads served by the start-page backend.

use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a Vec that may be null or missing (both become empty vec)
fn deserialize_null_as_empty_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// One registry record. The command key lives outside the entry (it is the
/// registry's map key); an entry without a `name` is a hidden sub-command,
/// addressable but never listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandEntry {
    /// Display label. `None` marks a hidden sub-command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Base destination URL (required, absolute).
    pub url: String,

    /// URL template with a `{}` placeholder, relative to `url` or absolute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_template: Option<String>,

    /// Static suggestion strings, either bare search terms or
    /// fully-qualified "key+delimiter+term" strings.
    #[serde(default, deserialize_with = "deserialize_null_as_empty_vec")]
    pub suggestions: Vec<String>,
}

impl CommandEntry {
    /// Whether the entry appears in command listings.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.name.is_some()
    }
}

/// Result of classifying one raw input string. Created fresh on every input
/// event and every submit; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedQuery {
    /// Original text, trimmed.
    pub query: String,

    /// Final destination URL.
    pub url: String,

    /// Matched command key, when a registry entry was involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Trailing path segment captured by a path-delimiter split.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Trailing search text captured by a search-delimiter split, or the
    /// full text when the query fell through to the default web search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// Delimiter that produced the match; the suggestion provider uses it
    /// to reconstruct fully-qualified suggestion strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_by: Option<char>,
}

/// Byte range of the highlighted match inside a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
}

/// One rendered suggestion: literal text plus the pre-computed span of the
/// case-insensitive match of the committed query, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<HighlightSpan>,
}

impl Suggestion {
    /// A suggestion shown unsegmented (no match found).
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            matched: None,
        }
    }
}

/// Payload of the backend's `GET /weather`. All fields are null until the
/// backend completes its first upstream fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
    pub temp: Option<f64>,
}

/// Payload of the backend's `GET /spotify`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub is_active: bool,
    pub track: Option<Track>,
}

/// Currently-playing track as reported by the backend. Durations and
/// progress are in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub track_id: String,
    pub title: String,
    pub release_date: String,
    pub artist: String,
    pub image: String,
    pub is_playing: bool,
    pub explicit: bool,
    pub duration: u64,
    pub progress: u64,
}
