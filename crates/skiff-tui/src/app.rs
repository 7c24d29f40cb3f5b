//! Application state for the TUI.

use skiff_core::config::SearchConfig;
use skiff_core::overlay::{Overlay, SuggestionPass};
use skiff_core::registry::CommandRegistry;
use skiff_core::widgets::ProgressTracker;
use skiff_core::{PlayerState, WeatherSnapshot};
use std::sync::Arc;

/// Main application state
pub struct App {
    pub registry: Arc<CommandRegistry>,
    pub config: Arc<SearchConfig>,
    pub overlay: Overlay,
    pub weather: WeatherSnapshot,
    pub player: PlayerState,
    pub progress: ProgressTracker,
    pub should_quit: bool,
}

impl App {
    pub fn new(registry: Arc<CommandRegistry>, config: Arc<SearchConfig>) -> Self {
        let overlay = Overlay::new(Arc::clone(&registry), Arc::clone(&config));
        Self {
            registry,
            config,
            overlay,
            weather: WeatherSnapshot::default(),
            player: PlayerState::default(),
            progress: ProgressTracker::new(),
            should_quit: false,
        }
    }

    /// Append one character to the overlay input.
    pub fn push_input_char(&mut self, c: char) -> Option<SuggestionPass> {
        let mut text = self.overlay.input().to_string();
        text.push(c);
        self.overlay.input_changed(text)
    }

    /// Delete the last character of the overlay input. Deleting the final
    /// character empties the input and closes the overlay.
    pub fn pop_input_char(&mut self) -> Option<SuggestionPass> {
        let mut text = self.overlay.input().to_string();
        text.pop();
        self.overlay.input_changed(text)
    }
}
