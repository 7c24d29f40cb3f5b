//! Flat command registry.
//!
//! Keys are opaque strings; a key containing the path delimiter (e.g.
//! `"f/hn"`) is an ordinary entry, not a tree node. Lookups are exact and
//! case-sensitive. The registry is read-only after construction.

mod defaults;

use crate::{Error, Result};
use serde::Deserialize;
use skiff_types::CommandEntry;
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;
use url::Url;

#[derive(Debug)]
pub struct CommandRegistry {
    /// Entries in declaration order, for stable listings.
    entries: Vec<(String, CommandEntry)>,
    index: HashMap<String, usize>,
}

/// Wire format of one `commands.json` record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommandRecord {
    key: String,
    #[serde(flatten)]
    entry: CommandEntry,
}

impl CommandRegistry {
    /// Build a registry from `(key, entry)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on a duplicate key.
    pub fn from_entries(pairs: Vec<(String, CommandEntry)>) -> Result<Self> {
        let mut index = HashMap::with_capacity(pairs.len());
        for (position, (key, _)) in pairs.iter().enumerate() {
            if index.insert(key.clone(), position).is_some() {
                return Err(Error::Config(format!("duplicate command key '{key}'")));
            }
        }
        Ok(Self {
            entries: pairs,
            index,
        })
    }

    /// The built-in command set.
    ///
    /// # Panics
    ///
    /// Panics if the built-in set contains a duplicate key, which would be a
    /// programming error caught by the registry tests.
    #[must_use]
    pub fn defaults() -> Self {
        Self::from_entries(defaults::builtin_commands())
            .expect("built-in command set has unique keys")
    }

    /// Load the registry: the user's `commands.json` when present, the
    /// built-in set otherwise. The result is validated either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// entry fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let registry = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let records: Vec<CommandRecord> = serde_json::from_str(&content)?;
            Self::from_entries(
                records
                    .into_iter()
                    .map(|record| (record.key, record.entry))
                    .collect(),
            )?
        } else {
            Self::defaults()
        };
        registry.validate()?;
        Ok(registry)
    }

    /// Exact-key lookup; no normalization.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&CommandEntry> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    /// All entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CommandEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Named entries only; hidden sub-commands never appear in listings.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &CommandEntry)> {
        self.iter().filter(|(_, entry)| entry.is_visible())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject entries the classifier cannot resolve. The registry is static
    /// and trusted, so defects surface at startup rather than query time.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the offending key when a base URL does
    /// not parse or a relative template has no usable join base.
    pub fn validate(&self) -> Result<()> {
        for (key, entry) in self.iter() {
            let base = Url::parse(&entry.url).map_err(|e| {
                Error::Config(format!("command '{key}': invalid url '{}': {e}", entry.url))
            })?;

            if let Some(template) = entry.search_template.as_deref() {
                base.join(template).map_err(|e| {
                    Error::Config(format!(
                        "command '{key}': searchTemplate '{template}' does not resolve: {e}"
                    ))
                })?;
                if !template.contains(crate::config::PLACEHOLDER) {
                    warn!("command '{key}': searchTemplate has no {{}} placeholder");
                }
            }
        }
        Ok(())
    }
}
