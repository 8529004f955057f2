//! Form view
//!
//! Renders the five labelled inputs and the button list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Field;
use crate::tui::app::{Action, App};

/// Render the input fields
pub fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Personal Finance Manager ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label_width = Field::ALL
        .iter()
        .map(|f| f.prompt().len())
        .max()
        .unwrap_or(0);

    for field in Field::ALL {
        let row = field.index() as u16;
        if row >= inner.height {
            break;
        }
        let row_area = Rect::new(inner.x, inner.y + row, inner.width, 1);
        let input = app
            .input(field)
            .clone()
            .label(format!("{:<width$}", field.prompt(), width = label_width))
            .focused(field == app.focused);
        frame.render_widget(input, row_area);
    }
}

/// Render the button list; the button Enter triggers is highlighted
pub fn render_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let enter_action = Action::for_field(app.focused);

    let lines: Vec<Line> = Action::ALL
        .iter()
        .map(|action| {
            let style = if *action == enter_action {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:<3}", action.key_hint()),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(format!(" {} ", action.label()), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Actions ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(paragraph, area);
}
