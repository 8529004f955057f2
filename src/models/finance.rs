//! Finance state model
//!
//! Holds the income, budget ceiling, savings goal and the ordered list of
//! recorded expenses, and derives remaining budget, savings progress and
//! whether the savings goal is reached. The derived figures are recomputed
//! from the expense list on every query.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinanceError, FinanceResult};

use super::expense::Expense;
use super::money::Money;

/// Message surfaced when the budget exceeds the income
pub const BUDGET_ADVISORY_MESSAGE: &str =
    "Enter a valid budget (should be less than or equal to income).";

/// Advisory raised when a state is created with `budget > income`
///
/// Advisories never block construction; the shell decides how to show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetAdvisory {
    pub income: Money,
    pub budget: Money,
}

impl BudgetAdvisory {
    /// Returns an advisory if `budget` exceeds `income`
    pub fn check(income: Money, budget: Money) -> Option<Self> {
        (budget > income).then_some(Self { income, budget })
    }

    /// How far the budget exceeds the income
    pub fn overage(&self) -> Money {
        self.budget - self.income
    }

    pub fn message(&self) -> &'static str {
        BUDGET_ADVISORY_MESSAGE
    }
}

impl fmt::Display for BudgetAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Snapshot of the derived figures of a [`FinanceState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_expenses: Money,
    pub remaining_budget: Money,
    pub savings_progress: Money,
    pub goal_reached: bool,
}

/// The single finance record of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceState {
    income: Money,
    budget: Money,
    savings_goal: Money,
    expenses: Vec<Expense>,
}

impl FinanceState {
    /// Create a state with an empty expense list
    ///
    /// Returns a [`BudgetAdvisory`] alongside the state when `budget > income`.
    pub fn create(
        income: Money,
        budget: Money,
        savings_goal: Money,
    ) -> (Self, Option<BudgetAdvisory>) {
        Self::with_expenses(income, budget, savings_goal, Vec::new())
    }

    /// Create a state that keeps this state's expenses but uses new figures
    pub fn revised(
        &self,
        income: Money,
        budget: Money,
        savings_goal: Money,
    ) -> (Self, Option<BudgetAdvisory>) {
        Self::with_expenses(income, budget, savings_goal, self.expenses.clone())
    }

    fn with_expenses(
        income: Money,
        budget: Money,
        savings_goal: Money,
        expenses: Vec<Expense>,
    ) -> (Self, Option<BudgetAdvisory>) {
        let advisory = BudgetAdvisory::check(income, budget);
        if let Some(advisory) = &advisory {
            tracing::warn!(
                income = %income,
                budget = %budget,
                overage = %advisory.overage(),
                "budget exceeds income"
            );
        }

        let state = Self {
            income,
            budget,
            savings_goal,
            expenses,
        };
        (state, advisory)
    }

    /// Append an expense; no validation of category or sign
    ///
    /// Fails without recording anything if the new total would leave the
    /// range given by [`MAX_CENTS`](super::money::MAX_CENTS).
    pub fn add_expense(
        &mut self,
        category: impl Into<String>,
        amount: Money,
    ) -> FinanceResult<()> {
        if self.total_expenses().checked_add(amount).is_none() {
            return Err(FinanceError::OutOfRange {
                operation: "add expense",
            });
        }

        let expense = Expense::new(category, amount);
        tracing::debug!(category = expense.category(), amount = %amount, "expense recorded");
        self.expenses.push(expense);
        Ok(())
    }

    /// Sum of all recorded expense amounts (zero when empty)
    ///
    /// Every running total stays in range, so the sum cannot overflow.
    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// `budget - total_expenses`, not clamped
    pub fn remaining_budget(&self) -> Money {
        self.budget - self.total_expenses()
    }

    /// `income - total_expenses`, not clamped
    pub fn savings_progress(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// True when savings progress is at least the savings goal
    pub fn is_savings_goal_reached(&self) -> bool {
        self.savings_progress() >= self.savings_goal
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    pub fn savings_goal(&self) -> Money {
        self.savings_goal
    }

    /// Recorded expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Compute all derived figures at once
    pub fn summary(&self) -> Summary {
        let total_expenses = self.total_expenses();
        let savings_progress = self.income - total_expenses;
        Summary {
            total_expenses,
            remaining_budget: self.budget - total_expenses,
            savings_progress,
            goal_reached: savings_progress >= self.savings_goal,
        }
    }
}
