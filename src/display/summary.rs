//! Result block formatting
//!
//! The result pane shows remaining budget, savings progress and whether the
//! savings goal is reached.

use crate::models::{BudgetAdvisory, FinanceState, Summary};

/// Format the three-line result block (no trailing newline)
pub fn format_result_block(summary: &Summary, symbol: &str) -> String {
    format!(
        "Remaining budget: {sym}{}\nSavings progress: {sym}{}\nSavings goal reached: {}",
        summary.remaining_budget.format_compact(),
        summary.savings_progress.format_compact(),
        if summary.goal_reached { "Yes" } else { "No" },
        sym = symbol,
    )
}

/// Format the configured figures of a state
pub fn format_state_details(state: &FinanceState, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Income:       {}\n", state.income().format_with_symbol(symbol)));
    output.push_str(&format!("Budget:       {}\n", state.budget().format_with_symbol(symbol)));
    output.push_str(&format!(
        "Savings goal: {}\n",
        state.savings_goal().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Expenses:     {} recorded, {} total\n",
        state.expenses().len(),
        state.total_expenses().format_with_symbol(symbol)
    ));
    output
}

/// Format a budget advisory as a single warning line
pub fn format_advisory(advisory: &BudgetAdvisory) -> String {
    format!("Warning: {}", advisory.message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_result_block() {
        let summary = Summary {
            total_expenses: Money::from_units(200),
            remaining_budget: Money::from_units(600),
            savings_progress: Money::from_units(800),
            goal_reached: true,
        };
        assert_eq!(
            format_result_block(&summary, "Rs"),
            "Remaining budget: Rs600\nSavings progress: Rs800\nSavings goal reached: Yes"
        );
    }

    #[test]
    fn test_format_result_block_rounding_and_negatives() {
        let summary = Summary {
            total_expenses: Money::from_cents(55050),
            remaining_budget: Money::from_cents(-5050),
            savings_progress: Money::from_cents(1),
            goal_reached: false,
        };
        assert_eq!(
            format_result_block(&summary, "Rs"),
            "Remaining budget: Rs-50.5\nSavings progress: Rs0.01\nSavings goal reached: No"
        );
    }

    #[test]
    fn test_format_state_details() {
        let (mut state, _) = FinanceState::create(
            Money::from_units(1000),
            Money::from_units(800),
            Money::from_units(200),
        );
        state.add_expense("food", Money::from_units(150)).unwrap();
        let output = format_state_details(&state, "Rs");
        assert!(output.contains("Income:       Rs1000.00"));
        assert!(output.contains("1 recorded, Rs150.00 total"));
    }

    #[test]
    fn test_format_advisory() {
        let advisory = BudgetAdvisory::check(Money::from_units(1), Money::from_units(2)).unwrap();
        assert_eq!(
            format_advisory(&advisory),
            "Warning: Enter a valid budget (should be less than or equal to income)."
        );
    }
}
