//! Application state for the TUI
//!
//! The App struct holds everything needed for rendering and handling events:
//! the finance session, the editable inputs, focus, and pending notifications.

use crate::error::FinanceResult;
use crate::models::Field;
use crate::services::{FinanceSession, Outcome};

use super::widgets::{Notification, NotificationQueue, TextInput};

/// The four buttons of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddExpense,
    UpdateIncome,
    UpdateBudget,
    UpdateSavingsGoal,
}

impl Action {
    /// Buttons in display order
    pub const ALL: [Action; 4] = [
        Action::AddExpense,
        Action::UpdateIncome,
        Action::UpdateBudget,
        Action::UpdateSavingsGoal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddExpense => "Add Expense",
            Self::UpdateIncome => "Update Income",
            Self::UpdateBudget => "Update Budget",
            Self::UpdateSavingsGoal => "Update Savings Goal",
        }
    }

    /// Function key bound to the button
    pub fn key_hint(&self) -> &'static str {
        match self {
            Self::AddExpense => "F1",
            Self::UpdateIncome => "F2",
            Self::UpdateBudget => "F3",
            Self::UpdateSavingsGoal => "F4",
        }
    }

    /// The button Enter triggers while a field is focused
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Income => Self::UpdateIncome,
            Field::Budget => Self::UpdateBudget,
            Field::SavingsGoal => Self::UpdateSavingsGoal,
            Field::ExpenseCategory | Field::ExpenseAmount => Self::AddExpense,
        }
    }
}

/// Main application state
pub struct App {
    /// The finance session behind the form
    pub session: FinanceSession,

    /// Editable inputs, indexed by [`Field::index`]
    pub inputs: [TextInput; 5],

    /// Which input has focus
    pub focused: Field,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Pending warning and error toasts
    pub notifications: NotificationQueue,

    /// Status message for the last successful action
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App around a session
    pub fn new(session: FinanceSession) -> Self {
        let inputs = Field::ALL.map(|field| {
            let mut input = TextInput::new().label(field.prompt());
            input.set_content(session.field(field));
            input
        });

        Self {
            session,
            inputs,
            focused: Field::Income,
            should_quit: false,
            notifications: NotificationQueue::new(),
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_previous(&mut self) {
        self.focused = self.focused.previous();
    }

    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focused.index()]
    }

    /// Run a button action against the session
    ///
    /// Advisories become warning toasts and failures error toasts; a failed
    /// action leaves the session and the inputs untouched.
    pub fn perform(&mut self, action: Action) {
        for field in Field::ALL {
            let value = self.inputs[field.index()].value().to_string();
            self.session.set_field(field, value);
        }

        let result: FinanceResult<Outcome> = match action {
            Action::AddExpense => self.session.add_expense(),
            Action::UpdateIncome => self.session.update_income(),
            Action::UpdateBudget => self.session.update_budget(),
            Action::UpdateSavingsGoal => self.session.update_savings_goal(),
        };

        match result {
            Ok(outcome) => {
                if let Some(advisory) = outcome.advisory {
                    self.notifications.push(Notification::warning(advisory.message()));
                }
                self.status_message = Some(format!("{} done", action.label()));
                self.reload_inputs();
            }
            Err(e) => {
                self.status_message = None;
                self.notifications.push(Notification::error(e.to_string()));
            }
        }
    }

    /// Periodic housekeeping
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
    }

    fn reload_inputs(&mut self) {
        for field in Field::ALL {
            let current = self.session.field(field);
            let input = &mut self.inputs[field.index()];
            if input.value() != current {
                input.set_content(current);
            }
        }
    }
}
