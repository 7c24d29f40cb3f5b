//! Search overlay: centered input plus the suggestion list.
//!
//! Suggestions arrive with pre-computed highlight spans; this module only
//! turns spans into styled segments.

use super::{ACCENT, TEXT, TEXT_SUBTLE};
use crate::app::App;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use skiff_core::Suggestion;
use skiff_core::overlay::Focus;

pub fn render_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    let chunks = Layout::vertical([
        Constraint::Percentage(40),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .split(area);

    render_input(frame, chunks[1], app);
    render_suggestions(frame, chunks[2], app);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.overlay.focus() == Focus::Input {
        Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(TEXT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::styled(app.overlay.input().to_string(), style))
            .alignment(Alignment::Center),
        area,
    );
}

fn render_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let focus = app.overlay.focus();
    let lines: Vec<Line> = app
        .overlay
        .suggestions()
        .iter()
        .enumerate()
        .map(|(index, suggestion)| {
            suggestion_line(suggestion, focus == Focus::Suggestion(index))
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn suggestion_line(suggestion: &Suggestion, focused: bool) -> Line<'_> {
    let base = if focused {
        Style::new().fg(ACCENT).add_modifier(Modifier::REVERSED)
    } else {
        Style::new().fg(TEXT)
    };
    // The matched segment is rendered subtle, the rest in the base style.
    let match_style = if focused { base } else { base.fg(TEXT_SUBTLE) };

    match suggestion.matched {
        Some(span) => Line::from(vec![
            Span::styled(&suggestion.text[..span.start], base),
            Span::styled(&suggestion.text[span.start..span.end], match_style),
            Span::styled(&suggestion.text[span.end..], base),
        ]),
        None => Line::styled(suggestion.text.as_str(), base),
    }
}
