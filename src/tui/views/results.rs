//! Results and expense log panes

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the result block (empty until the first expense)
pub fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.session.result_block().unwrap_or_default();
    let color = match app.session.results() {
        Some(summary) if summary.goal_reached => Color::Green,
        Some(_) => Color::Yellow,
        None => Color::White,
    };

    let paragraph = Paragraph::new(text).style(Style::default().fg(color)).block(
        Block::default()
            .title(" Results ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(paragraph, area);
}

/// Render the expense log, newest lines kept visible
pub fn render_expense_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Expense List ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let visible = block.inner(area).height as usize;

    let log = app.session.expense_log();
    let skip = log.len().saturating_sub(visible);
    let lines: Vec<Line> = log
        .iter()
        .skip(skip)
        .map(|entry| Line::from(entry.as_str()))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
