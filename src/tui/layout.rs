//! Layout definitions for the TUI
//!
//! Left column: form inputs, buttons, results. Right column: expense log.
//! A one-line status bar runs along the bottom.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Five labelled inputs
    pub form: Rect,
    /// Button list with key hints
    pub buttons: Rect,
    /// Result block
    pub results: Rect,
    /// Expense log
    pub expense_log: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // 5 inputs + borders
                Constraint::Length(6), // 4 buttons + borders
                Constraint::Min(5),    // 3 result lines + borders
            ])
            .split(horizontal[0]);

        Self {
            form: left[0],
            buttons: left[1],
            results: left[2],
            expense_log: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Create a fixed-size centered rect for popups
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_fit() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = AppLayout::new(area);
        assert_eq!(layout.form.height, 7);
        assert_eq!(layout.buttons.height, 6);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 29);
        assert_eq!(layout.expense_log.height, 29);
    }

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = centered_rect_fixed(200, 5, Rect::new(0, 0, 80, 24));
        assert_eq!(r.width, 80);
        assert_eq!(r.x, 0);
        assert_eq!(r.y, 9);
    }
}
