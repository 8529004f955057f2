//! Expense display formatting
//!
//! Formats recorded expenses as log lines and as a table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Expense, Money};

/// Format one expense log line (without trailing newline)
///
/// `food: Rs150.0`
pub fn format_expense_entry(expense: &Expense, symbol: &str) -> String {
    format!(
        "{}: {}{}",
        expense.category(),
        symbol,
        expense.amount().format_entry()
    )
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format recorded expenses as a table with a total row
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let mut rows: Vec<ExpenseRow> = expenses
        .iter()
        .enumerate()
        .map(|(i, expense)| ExpenseRow {
            index: (i + 1).to_string(),
            category: expense.category().to_string(),
            amount: expense.amount().format_with_symbol(symbol),
        })
        .collect();

    let total: Money = expenses.iter().map(Expense::amount).sum();
    rows.push(ExpenseRow {
        index: String::new(),
        category: "Total".to_string(),
        amount: total.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
