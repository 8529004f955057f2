//! One-shot calculation command
//!
//! Fills the form from command-line arguments, adds each expense in order and
//! prints the expense log and the final result block.

use std::io::Write;

use clap::Args;

use crate::display::{format_advisory, format_result_block};
use crate::error::FinanceResult;
use crate::models::{Field, FinanceState};
use crate::services::FinanceSession;

/// Arguments of the `calc` command
#[derive(Debug, Clone, Args)]
pub struct CalcArgs {
    /// Income (e.g., "1000" or "1000.50")
    #[arg(long, allow_hyphen_values = true)]
    pub income: String,

    /// Budget ceiling
    #[arg(long, allow_hyphen_values = true)]
    pub budget: String,

    /// Savings goal
    #[arg(long, allow_hyphen_values = true)]
    pub goal: String,

    /// Expense as CATEGORY=AMOUNT (repeatable, applied in order)
    #[arg(short, long = "expense", value_parser = parse_expense_arg)]
    pub expenses: Vec<(String, String)>,
}

/// Split a `CATEGORY=AMOUNT` argument at its last `=`
pub fn parse_expense_arg(arg: &str) -> Result<(String, String), String> {
    arg.rsplit_once('=')
        .map(|(category, amount)| (category.to_string(), amount.to_string()))
        .ok_or_else(|| format!("expected CATEGORY=AMOUNT, got '{}'", arg))
}

/// Handle the calc command
pub fn handle_calc_command<W: Write>(
    session: &mut FinanceSession,
    args: CalcArgs,
    out: &mut W,
) -> FinanceResult<()> {
    session.set_field(Field::Income, args.income);
    session.set_field(Field::Budget, args.budget);
    session.set_field(Field::SavingsGoal, args.goal);

    if args.expenses.is_empty() {
        let form = session.form();
        let (state, advisory) = FinanceState::create(
            form.parse(Field::Income)?,
            form.parse(Field::Budget)?,
            form.parse(Field::SavingsGoal)?,
        );
        if let Some(advisory) = &advisory {
            writeln!(out, "{}", format_advisory(advisory))?;
        }
        writeln!(
            out,
            "{}",
            format_result_block(&state.summary(), session.currency_symbol())
        )?;
        return Ok(());
    }

    for (category, amount) in args.expenses {
        session.set_field(Field::ExpenseCategory, category);
        session.set_field(Field::ExpenseAmount, amount);
        let outcome = session.add_expense()?;
        if let Some(advisory) = &outcome.advisory {
            writeln!(out, "{}", format_advisory(advisory))?;
        }
        if let Some(entry) = &outcome.log_entry {
            writeln!(out, "{}", entry)?;
        }
    }

    if let Some(block) = session.result_block() {
        writeln!(out, "{}", block)?;
    }
    Ok(())
}
