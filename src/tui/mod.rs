//! Terminal User Interface module
//!
//! A single-screen form built with ratatui: income, budget, savings goal and
//! expense inputs, four action buttons, the expense log and the results pane.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
