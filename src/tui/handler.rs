//! Event handler for the TUI
//!
//! Routes key events to focus changes, text editing, or form actions.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{Action, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match key.code {
        // Quit
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // Focus
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),

        // Buttons
        KeyCode::F(1) => app.perform(Action::AddExpense),
        KeyCode::F(2) => app.perform(Action::UpdateIncome),
        KeyCode::F(3) => app.perform(Action::UpdateBudget),
        KeyCode::F(4) => app.perform(Action::UpdateSavingsGoal),
        KeyCode::Enter => {
            let action = Action::for_field(app.focused);
            app.perform(action);
        }

        // Editing
        KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            app.focused_input_mut().insert(c)
        }
        KeyCode::Backspace => app.focused_input_mut().backspace(),
        KeyCode::Delete => app.focused_input_mut().delete(),
        KeyCode::Left => app.focused_input_mut().move_left(),
        KeyCode::Right => app.focused_input_mut().move_right(),
        KeyCode::Home => app.focused_input_mut().move_start(),
        KeyCode::End => app.focused_input_mut().move_end(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, Money};
    use crate::services::{FinanceSession, UpdatePolicy};

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn new_app() -> App {
        App::new(FinanceSession::new(UpdatePolicy::Replace, "Rs"))
    }

    #[test]
    fn test_typing_fills_focused_input() {
        let mut app = new_app();
        type_text(&mut app, "1000");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "80");
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "800");

        assert_eq!(app.input(Field::Income).value(), "1000");
        assert_eq!(app.input(Field::Budget).value(), "8800");
    }

    #[test]
    fn test_full_form_flow() {
        let mut app = new_app();
        type_text(&mut app, "500");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "500");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "100");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "rent");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "450");
        press(&mut app, KeyCode::Enter);

        let summary = app.session.results().unwrap();
        assert_eq!(summary.remaining_budget, Money::from_units(50));
        assert!(!summary.goal_reached);
        assert_eq!(app.session.expense_log(), ["rent: Rs450.0"]);

        // edit income then press F2
        app.focused = Field::Income;
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "1000");
        press(&mut app, KeyCode::F(2));

        let state = app.session.state().unwrap();
        assert_eq!(state.income(), Money::from_units(550));
        assert!(state.expenses().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = new_app();
        handle_event(
            &mut app,
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        )
        .unwrap();
        assert!(app.should_quit);
        assert_eq!(app.input(Field::Income).value(), "");
    }

    #[test]
    fn test_modified_keys_do_not_type() {
        let mut app = new_app();
        let key = |c, modifiers| Event::Key(KeyEvent::new(KeyCode::Char(c), modifiers));

        handle_event(&mut app, key('a', KeyModifiers::CONTROL)).unwrap();
        handle_event(&mut app, key('x', KeyModifiers::ALT)).unwrap();
        assert_eq!(app.input(Field::Income).value(), "");

        handle_event(&mut app, key('R', KeyModifiers::SHIFT)).unwrap();
        handle_event(&mut app, key('s', KeyModifiers::NONE)).unwrap();
        assert_eq!(app.input(Field::Income).value(), "Rs");
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tick_is_harmless() {
        let mut app = new_app();
        handle_event(&mut app, Event::Tick).unwrap();
        handle_event(&mut app, Event::Resize(80, 24)).unwrap();
        assert!(!app.should_quit);
    }
}
