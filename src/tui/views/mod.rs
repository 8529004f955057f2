//! TUI Views module
//!
//! Renders the form, the button list, the results and expense log panes, the
//! status bar and any pending notification.

pub mod form;
pub mod results;
pub mod status_bar;

use ratatui::Frame;

use super::app::App;
use super::layout::{centered_rect_fixed, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    form::render_inputs(frame, app, layout.form);
    form::render_buttons(frame, app, layout.buttons);
    results::render_results(frame, app, layout.results);
    results::render_expense_log(frame, app, layout.expense_log);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = centered_rect_fixed(64, 5, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}
