//! Suggestion assembly for the search overlay.
//!
//! Merges a matched command's static suggestions with external autocomplete
//! results, bounded by the configured limit. External failures are local:
//! they produce an empty list, never an error for the caller.

mod ddg;
mod highlight;

pub use ddg::DdgAutocomplete;
pub use highlight::highlight;

use crate::Result;
use crate::config::SearchConfig;
use crate::registry::CommandRegistry;
use skiff_types::ResolvedQuery;
use tracing::debug;

/// External autocomplete source. Implementations may be slow or fail; the
/// provider treats both as "no external results".
pub trait AutocompleteSource {
    fn complete(&self, search: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Assemble the candidate list for a classified query.
///
/// Static suggestions come from the command matching the full query text.
/// When the query carries search text and the list is still below the
/// limit, the external source is consulted; results echoing the search text
/// itself are dropped, and results for a search-delimiter query are
/// re-qualified as `key + delimiter + result` so activating them resolves
/// through the same command.
pub async fn suggest<S: AutocompleteSource + Sync>(
    resolved: &ResolvedQuery,
    registry: &CommandRegistry,
    config: &SearchConfig,
    source: &S,
) -> Vec<String> {
    let mut list = registry
        .lookup(&resolved.query)
        .map(|entry| entry.suggestions.clone())
        .unwrap_or_default();

    let search = resolved.search.as_deref().unwrap_or("");
    if !search.is_empty() && list.len() < config.suggestion_limit {
        let external = match source.complete(search).await {
            Ok(phrases) => phrases,
            Err(e) => {
                debug!("autocomplete lookup failed: {e}");
                Vec::new()
            }
        };

        for phrase in external {
            if phrase.eq_ignore_ascii_case(search) {
                continue;
            }
            match (&resolved.key, resolved.split_by) {
                (Some(key), Some(delimiter)) => list.push(format!("{key}{delimiter}{phrase}")),
                _ => list.push(phrase),
            }
        }
    }

    list.truncate(config.suggestion_limit);
    list
}
