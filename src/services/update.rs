//! Income, budget and savings goal updates
//!
//! Updates never mutate the current state. Each one takes the current state by
//! reference and returns a [`Revision`] holding the state the caller should
//! keep from now on.
//!
//! Under [`UpdatePolicy::Replace`] the revision is a fresh state built from the
//! edited figure and the current values of the other two, with income reduced
//! by the expenses recorded so far (income and budget updates only). The
//! expense list is not carried forward. A reduced income outside the
//! [`MAX_CENTS`](crate::models::MAX_CENTS) range is an error.
//!
//! Under [`UpdatePolicy::Preserve`] only the edited figure changes and the
//! expense list is carried forward unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{BudgetAdvisory, FinanceState, Money};

/// How an update treats the recorded expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Rebuild the state and drop recorded expenses
    #[default]
    Replace,
    /// Change one figure and keep recorded expenses
    Preserve,
}

impl UpdatePolicy {
    /// Policy for a "carry expenses on update" switch
    pub fn from_carry_expenses(carry: bool) -> Self {
        if carry {
            Self::Preserve
        } else {
            Self::Replace
        }
    }
}

/// The state produced by an update, plus any advisory raised building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub state: FinanceState,
    pub advisory: Option<BudgetAdvisory>,
}

impl From<(FinanceState, Option<BudgetAdvisory>)> for Revision {
    fn from((state, advisory): (FinanceState, Option<BudgetAdvisory>)) -> Self {
        Self { state, advisory }
    }
}

/// Set a new income
pub fn update_income(
    state: &FinanceState,
    new_income: Money,
    policy: UpdatePolicy,
) -> FinanceResult<Revision> {
    let revision: Revision = match policy {
        UpdatePolicy::Replace => FinanceState::create(
            net_of_expenses(new_income, state, "update income")?,
            state.budget(),
            state.savings_goal(),
        ),
        UpdatePolicy::Preserve => state.revised(new_income, state.budget(), state.savings_goal()),
    }
    .into();
    log_revision("income", policy, &revision);
    Ok(revision)
}

/// Set a new budget
pub fn update_budget(
    state: &FinanceState,
    new_budget: Money,
    policy: UpdatePolicy,
) -> FinanceResult<Revision> {
    let revision: Revision = match policy {
        UpdatePolicy::Replace => FinanceState::create(
            net_of_expenses(state.income(), state, "update budget")?,
            new_budget,
            state.savings_goal(),
        ),
        UpdatePolicy::Preserve => state.revised(state.income(), new_budget, state.savings_goal()),
    }
    .into();
    log_revision("budget", policy, &revision);
    Ok(revision)
}

/// Set a new savings goal
pub fn update_savings_goal(
    state: &FinanceState,
    new_goal: Money,
    policy: UpdatePolicy,
) -> FinanceResult<Revision> {
    let revision: Revision = match policy {
        UpdatePolicy::Replace => FinanceState::create(state.income(), state.budget(), new_goal),
        UpdatePolicy::Preserve => state.revised(state.income(), state.budget(), new_goal),
    }
    .into();
    log_revision("savings goal", policy, &revision);
    Ok(revision)
}

/// `income` minus the expenses recorded in `state`, kept in range
fn net_of_expenses(
    income: Money,
    state: &FinanceState,
    operation: &'static str,
) -> FinanceResult<Money> {
    income
        .checked_sub(state.total_expenses())
        .ok_or(FinanceError::OutOfRange { operation })
}

fn log_revision(what: &str, policy: UpdatePolicy, revision: &Revision) {
    tracing::info!(
        field = what,
        ?policy,
        income = %revision.state.income(),
        budget = %revision.state.budget(),
        savings_goal = %revision.state.savings_goal(),
        expenses = revision.state.expenses().len(),
        "finance state revised"
    );
}
