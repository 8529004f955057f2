//! Finance session
//!
//! The controller every shell drives. It keeps the raw text of the five form
//! inputs, the finance state (absent until the first expense is added), the
//! append-only expense log and the update policy.
//!
//! Each operation parses everything it needs before touching any state, so a
//! malformed input rejects the whole operation and leaves the session as it
//! was.

use crate::config::settings::Settings;
use crate::display::{format_expense_entry, format_result_block};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetAdvisory, Field, FinanceState, Money, Summary};

use super::update::{self, Revision, UpdatePolicy};

/// Raw text of the five form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputs {
    values: [String; 5],
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn clear(&mut self, field: Field) {
        self.values[field.index()].clear();
    }

    /// Fields paired with their current text, in form order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }

    /// Parse a numeric field
    pub fn parse(&self, field: Field) -> FinanceResult<Money> {
        let input = self.get(field);
        Money::parse(input).map_err(|e| {
            tracing::warn!(%field, input, error = %e, "rejected numeric input");
            FinanceError::invalid_number(field, input)
        })
    }
}

/// Result of a successful session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Derived figures after the operation
    pub summary: Summary,
    /// Advisory raised if a new state was built with `budget > income`
    pub advisory: Option<BudgetAdvisory>,
    /// Log line appended by an add-expense operation
    pub log_entry: Option<String>,
}

/// A single user's finance session
#[derive(Debug, Clone)]
pub struct FinanceSession {
    form: FormInputs,
    state: Option<FinanceState>,
    expense_log: Vec<String>,
    policy: UpdatePolicy,
    currency_symbol: String,
}

impl FinanceSession {
    /// Create an empty session
    pub fn new(policy: UpdatePolicy, currency_symbol: impl Into<String>) -> Self {
        Self {
            form: FormInputs::new(),
            state: None,
            expense_log: Vec::new(),
            policy,
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Create an empty session configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.update_policy(), settings.currency_symbol.clone())
    }

    pub fn form(&self) -> &FormInputs {
        &self.form
    }

    pub fn field(&self, field: Field) -> &str {
        self.form.get(field)
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// The current finance state, if any expense has been added yet
    pub fn state(&self) -> Option<&FinanceState> {
        self.state.as_ref()
    }

    pub fn policy(&self) -> UpdatePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: UpdatePolicy) {
        self.policy = policy;
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Every expense log line added so far, oldest first
    pub fn expense_log(&self) -> &[String] {
        &self.expense_log
    }

    /// The expense log as text, one newline-terminated line per entry
    pub fn expense_log_text(&self) -> String {
        self.expense_log
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Record the expense currently in the category and amount fields
    ///
    /// The first call creates the finance state from the income, budget and
    /// savings goal fields. On success the category and amount fields are
    /// cleared.
    pub fn add_expense(&mut self) -> FinanceResult<Outcome> {
        let amount = self.form.parse(Field::ExpenseAmount)?;
        let category = self.form.get(Field::ExpenseCategory).to_string();

        let (mut state, advisory, created) = match self.state.take() {
            Some(state) => (state, None, false),
            None => {
                let (state, advisory) = self.initial_state()?;
                (state, advisory, true)
            }
        };

        if let Err(e) = state.add_expense(category, amount) {
            tracing::warn!(%amount, error = %e, "expense rejected");
            if !created {
                self.state = Some(state);
            }
            return Err(e);
        }
        if created {
            tracing::info!(
                income = %state.income(),
                budget = %state.budget(),
                savings_goal = %state.savings_goal(),
                "finance state created"
            );
        }

        let entry = state
            .expenses()
            .last()
            .map(|expense| format_expense_entry(expense, &self.currency_symbol));
        let summary = state.summary();
        self.state = Some(state);

        if let Some(line) = &entry {
            self.expense_log.push(line.clone());
        }
        self.form.clear(Field::ExpenseCategory);
        self.form.clear(Field::ExpenseAmount);

        Ok(Outcome {
            summary,
            advisory,
            log_entry: entry,
        })
    }

    /// Rebuild the state with the income field's value
    pub fn update_income(&mut self) -> FinanceResult<Outcome> {
        self.revise(Field::Income, "income", update::update_income)
    }

    /// Rebuild the state with the budget field's value
    pub fn update_budget(&mut self) -> FinanceResult<Outcome> {
        self.revise(Field::Budget, "budget", update::update_budget)
    }

    /// Rebuild the state with the savings goal field's value
    pub fn update_savings_goal(&mut self) -> FinanceResult<Outcome> {
        self.revise(Field::SavingsGoal, "savings goal", update::update_savings_goal)
    }

    /// Derived figures of the current state
    pub fn results(&self) -> Option<Summary> {
        self.state.as_ref().map(FinanceState::summary)
    }

    /// The three-line result block for the current state
    pub fn result_block(&self) -> Option<String> {
        self.results()
            .map(|summary| format_result_block(&summary, &self.currency_symbol))
    }

    fn initial_state(&self) -> FinanceResult<(FinanceState, Option<BudgetAdvisory>)> {
        let income = self.form.parse(Field::Income)?;
        let budget = self.form.parse(Field::Budget)?;
        let savings_goal = self.form.parse(Field::SavingsGoal)?;
        Ok(FinanceState::create(income, budget, savings_goal))
    }

    fn revise(
        &mut self,
        field: Field,
        operation: &'static str,
        apply: fn(&FinanceState, Money, UpdatePolicy) -> FinanceResult<Revision>,
    ) -> FinanceResult<Outcome> {
        let Some(current) = self.state.as_ref() else {
            tracing::warn!(operation, "update rejected: no finance state yet");
            return Err(FinanceError::Uninitialized { operation });
        };
        let value = self.form.parse(field)?;

        let Revision { state, advisory } =
            apply(current, value, self.policy).inspect_err(|e| {
                tracing::warn!(operation, error = %e, "update rejected");
            })?;
        let summary = state.summary();
        self.state = Some(state);

        Ok(Outcome {
            summary,
            advisory,
            log_entry: None,
        })
    }
}

impl Default for FinanceSession {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
