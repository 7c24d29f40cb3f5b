//! Overlay lifecycle and suggestion state.
//!
//! The controller owns everything mutable about the search overlay: the
//! input text, the focus position and the rendered suggestion list. Async
//! suggestion passes come back through [`Overlay::apply_suggestions`],
//! which enforces the staleness guard: a pass is applied only when the
//! current input still classifies to the query it was issued for. In-flight
//! passes are never cancelled, only discarded on arrival.

use crate::config::SearchConfig;
use crate::parse::classify;
use crate::registry::CommandRegistry;
use crate::suggest::highlight;
use skiff_types::{ResolvedQuery, Suggestion};
use std::sync::Arc;
use tracing::debug;

/// Focus position inside the open overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Input,
    Suggestion(usize),
}

/// Where a resolved destination should open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    SameTab,
    NewTab,
}

/// A destination ready for the host opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
    pub target: NavTarget,
}

/// One issued suggestion pass: the classification at call start plus the
/// query text it was captured for. The caller resolves it asynchronously
/// and hands the result back with the captured query.
#[derive(Debug, Clone)]
pub struct SuggestionPass {
    pub query: String,
    pub resolved: ResolvedQuery,
}

pub struct Overlay {
    registry: Arc<CommandRegistry>,
    config: Arc<SearchConfig>,
    open: bool,
    input: String,
    suggestions: Vec<Suggestion>,
    focus: Focus,
    /// Armed by `open_on_trigger`; checked on the next frame tick.
    trigger_check: bool,
}

impl Overlay {
    #[must_use]
    pub fn new(registry: Arc<CommandRegistry>, config: Arc<SearchConfig>) -> Self {
        Self {
            registry,
            config,
            open: false,
            input: String::new(),
            suggestions: Vec::new(),
            focus: Focus::Input,
            trigger_check: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Open on the first qualifying keypress while closed.
    pub fn open_on_trigger(&mut self) {
        if self.open {
            return;
        }
        self.open = true;
        self.trigger_check = true;
    }

    /// Frame tick after opening: a trigger keystroke that left no input
    /// behind closes the overlay again.
    pub fn frame_tick(&mut self) {
        if self.trigger_check {
            self.trigger_check = false;
            if self.input.is_empty() {
                self.close();
            }
        }
    }

    /// Close unconditionally, clearing input and suggestions.
    pub fn close(&mut self) {
        self.open = false;
        self.input.clear();
        self.suggestions.clear();
        self.focus = Focus::Input;
        self.trigger_check = false;
    }

    /// Record new input text and classify it. Returns the suggestion pass
    /// to resolve asynchronously, or `None` when the input is empty (the
    /// overlay closes).
    pub fn input_changed(&mut self, text: impl Into<String>) -> Option<SuggestionPass> {
        self.input = text.into();
        self.focus = Focus::Input;
        match classify(&self.input, &self.registry, &self.config) {
            Some(resolved) => Some(SuggestionPass {
                query: resolved.query.clone(),
                resolved,
            }),
            None => {
                self.close();
                None
            }
        }
    }

    /// Apply an asynchronously resolved suggestion list. `pass_query` is
    /// the query captured when the pass was issued; the list is discarded
    /// whole when the current input no longer classifies to that query.
    /// Returns whether the list was applied.
    pub fn apply_suggestions(&mut self, pass_query: &str, list: &[String]) -> bool {
        let Some(current) = classify(&self.input, &self.registry, &self.config) else {
            debug!("discarding suggestion pass for '{pass_query}': input cleared");
            return false;
        };
        if current.query != pass_query {
            debug!(
                "discarding stale suggestion pass for '{pass_query}' (input is '{}')",
                current.query
            );
            return false;
        }

        self.suggestions = list
            .iter()
            .map(|text| highlight(text, &current.query))
            .collect();
        if let Focus::Suggestion(index) = self.focus
            && index >= self.suggestions.len()
        {
            self.focus = Focus::Input;
        }
        true
    }

    /// Move focus forward: input to first suggestion; past the last
    /// suggestion focus falls back to the input.
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.suggestions.is_empty() => Focus::Suggestion(0),
            Focus::Suggestion(index) if index + 1 < self.suggestions.len() => {
                Focus::Suggestion(index + 1)
            }
            _ => Focus::Input,
        };
    }

    /// Move focus backward: the first suggestion returns focus to the
    /// input; from the input focus wraps to the last suggestion.
    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Input if !self.suggestions.is_empty() => {
                Focus::Suggestion(self.suggestions.len() - 1)
            }
            Focus::Suggestion(index) if index > 0 => Focus::Suggestion(index - 1),
            _ => Focus::Input,
        };
    }

    /// Text that would be committed right now: the focused suggestion's
    /// literal text, or the raw input.
    #[must_use]
    pub fn committed_text(&self) -> &str {
        match self.focus {
            Focus::Suggestion(index) => self
                .suggestions
                .get(index)
                .map_or(self.input.as_str(), |s| s.text.as_str()),
            Focus::Input => &self.input,
        }
    }

    /// Submit the committed text. The overlay closes either way; empty
    /// input yields no navigation.
    pub fn submit(&mut self) -> Option<Navigation> {
        let text = self.committed_text().to_string();
        let navigation = self.resolve_navigation(&text);
        self.close();
        navigation
    }

    /// Activate one suggestion by pointer.
    pub fn activate_suggestion(&mut self, index: usize) -> Option<Navigation> {
        let text = self.suggestions.get(index)?.text.clone();
        let navigation = self.resolve_navigation(&text);
        self.close();
        navigation
    }

    fn resolve_navigation(&self, text: &str) -> Option<Navigation> {
        let resolved = classify(text, &self.registry, &self.config)?;
        let target = if self.config.open_links_in_new_tab {
            NavTarget::NewTab
        } else {
            NavTarget::SameTab
        };
        Some(Navigation {
            url: resolved.url,
            target,
        })
    }
}
