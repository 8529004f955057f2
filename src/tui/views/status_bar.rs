//! Status bar view
//!
//! Shows the last action's status and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

const HINTS: &str = " Tab/↑↓:Field  Enter:Action  F1-F4:Buttons  Esc:Quit ";

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![];

    if let Some(ref message) = app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Green),
        ));
    }

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(HINTS.chars().count());

    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(HINTS, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
