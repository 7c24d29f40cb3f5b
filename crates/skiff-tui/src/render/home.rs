//! Home view: clock, weather, now-playing and the command grid.

use super::{ACCENT, TEXT, TEXT_SUBTLE};
use crate::app::App;
use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use skiff_core::widgets::{describe, fmt_time, temperature};

/// Commands per grid row, as on the original start page.
const GRID_COLUMNS: usize = 7;

pub fn render_home(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Percentage(35),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(frame.area());

    render_clock_and_weather(frame, chunks[0], app);
    render_player(frame, chunks[1], app);
    render_commands(frame, chunks[2], app);
}

fn render_clock_and_weather(frame: &mut Frame, area: Rect, app: &App) {
    let now = Local::now();
    let lines = vec![
        Line::default(),
        Line::styled(
            now.format("%H:%M").to_string(),
            Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(now.format("%A, %-d %B").to_string(), Style::new().fg(TEXT_SUBTLE)),
        Line::default(),
        Line::styled(
            format!("{} · {}°", describe(&app.weather), temperature(&app.weather)),
            Style::new().fg(TEXT),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_player(frame: &mut Frame, area: Rect, app: &App) {
    let Some(track) = app.player.track.as_ref().filter(|_| app.player.is_active) else {
        frame.render_widget(
            Paragraph::new(Line::styled("nothing playing", Style::new().fg(TEXT_SUBTLE)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    };

    let live = app.progress.live_ms(&app.player);
    let state = if track.is_playing { "♪" } else { "⏸" };
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{state} "), Style::new().fg(TEXT_SUBTLE)),
            Span::styled(track.title.clone(), Style::new().fg(ACCENT)),
            Span::styled(format!("  {}", track.artist), Style::new().fg(TEXT)),
        ]),
        Line::styled(
            format!("{} / {}", fmt_time(live), fmt_time(track.duration)),
            Style::new().fg(TEXT_SUBTLE),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_commands(frame: &mut Frame, area: Rect, app: &App) {
    let cells: Vec<(String, String)> = app
        .registry
        .visible()
        .map(|(key, entry)| {
            (
                key.to_string(),
                entry.name.clone().unwrap_or_default(),
            )
        })
        .collect();

    let mut lines = vec![Line::default()];
    for row in cells.chunks(GRID_COLUMNS) {
        let mut spans = Vec::new();
        for (key, name) in row {
            spans.push(Span::styled(
                format!("{key:>3} "),
                Style::new().fg(TEXT_SUBTLE),
            ));
            spans.push(Span::styled(format!("{name:<12}"), Style::new().fg(TEXT)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}
