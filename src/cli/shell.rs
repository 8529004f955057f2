//! Line-oriented finance shell
//!
//! Reads one command per line, drives a [`FinanceSession`] and prints what the
//! form would show: expense log lines, the result block, warnings and errors.
//! A failed command prints an error and the loop carries on.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::display::{format_advisory, format_expense_table, format_state_details};
use crate::error::FinanceResult;
use crate::models::Field;
use crate::services::{FinanceSession, Outcome};

const HELP: &str = "\
Commands:
  income <amount>          Set the income field
  budget <amount>          Set the budget field
  goal <amount>            Set the savings goal field
  category <text>          Set the expense category field
  amount <amount>          Set the expense amount field
  add [<category> <amount>]
                           Add the expense in the category and amount fields
  update income|budget|goal
                           Rebuild the finances with the field's new value
  show                     Show the result block
  list                     Show recorded expenses as a table
  log                      Show the expense log
  fields                   Show the current field values
  help                     Show this help
  quit                     Leave the shell
";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set(Field, String),
    Add(Option<(String, String)>),
    Update(Field),
    Show,
    List,
    Log,
    Fields,
    Help,
    Quit,
}

/// Errors in the command line itself (not in the finance operation)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line; blank lines and `#` comments yield `None`
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "income" => ShellCommand::Set(Field::Income, rest.to_string()),
        "budget" => ShellCommand::Set(Field::Budget, rest.to_string()),
        "goal" | "savings" => ShellCommand::Set(Field::SavingsGoal, rest.to_string()),
        "category" => ShellCommand::Set(Field::ExpenseCategory, rest.to_string()),
        "amount" => ShellCommand::Set(Field::ExpenseAmount, rest.to_string()),
        "add" => {
            if rest.is_empty() {
                ShellCommand::Add(None)
            } else {
                // the last word is the amount, everything before it the category
                let (category, amount) = rest
                    .rsplit_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("add [<category> <amount>]"))?;
                ShellCommand::Add(Some((category.trim().to_string(), amount.to_string())))
            }
        }
        "update" => match rest.to_ascii_lowercase().as_str() {
            "income" => ShellCommand::Update(Field::Income),
            "budget" => ShellCommand::Update(Field::Budget),
            "goal" | "savings" | "savings goal" => ShellCommand::Update(Field::SavingsGoal),
            _ => return Err(CommandError::Usage("update income|budget|goal")),
        },
        "show" | "results" => ShellCommand::Show,
        "list" => ShellCommand::List,
        "log" => ShellCommand::Log,
        "fields" => ShellCommand::Fields,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

/// Run the shell until end of input or `quit`
///
/// With `interactive` set a prompt is printed before each line.
pub fn run_shell<R: BufRead, W: Write>(
    session: &mut FinanceSession,
    input: R,
    out: &mut W,
    interactive: bool,
) -> FinanceResult<()> {
    if interactive {
        writeln!(out, "Personal Finance Manager. Type 'help' for commands.")?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(session, command, out)?,
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
    }

    Ok(())
}

/// Execute a single command, printing its output
///
/// Finance errors are printed, not returned; only output failures propagate.
pub fn execute<W: Write>(
    session: &mut FinanceSession,
    command: ShellCommand,
    out: &mut W,
) -> FinanceResult<()> {
    let result = match command {
        ShellCommand::Set(field, value) => {
            session.set_field(field, value);
            return Ok(());
        }
        ShellCommand::Add(fields) => {
            if let Some((category, amount)) = fields {
                session.set_field(Field::ExpenseCategory, category);
                session.set_field(Field::ExpenseAmount, amount);
            }
            session.add_expense()
        }
        ShellCommand::Update(Field::Income) => session.update_income(),
        ShellCommand::Update(Field::Budget) => session.update_budget(),
        ShellCommand::Update(_) => session.update_savings_goal(),
        ShellCommand::Show => {
            match session.result_block() {
                Some(block) => writeln!(out, "{}", block)?,
                None => writeln!(out, "No finances recorded yet. Add an expense first.")?,
            }
            return Ok(());
        }
        ShellCommand::List => {
            match session.state() {
                Some(state) => {
                    write!(out, "{}", format_state_details(state, session.currency_symbol()))?;
                    write!(
                        out,
                        "{}",
                        format_expense_table(state.expenses(), session.currency_symbol())
                    )?;
                }
                None => writeln!(out, "No finances recorded yet. Add an expense first.")?,
            }
            return Ok(());
        }
        ShellCommand::Log => {
            if session.expense_log().is_empty() {
                writeln!(out, "Expense log is empty.")?;
            } else {
                write!(out, "{}", session.expense_log_text())?;
            }
            return Ok(());
        }
        ShellCommand::Fields => {
            for (field, value) in session.form().iter() {
                writeln!(out, "{:<17} {}", format!("{}:", field), value)?;
            }
            return Ok(());
        }
        ShellCommand::Help => {
            write!(out, "{}", HELP)?;
            return Ok(());
        }
        ShellCommand::Quit => return Ok(()),
    };

    match result {
        Ok(outcome) => print_outcome(session, &outcome, out),
        Err(e) => {
            writeln!(out, "Error: {}", e)?;
            Ok(())
        }
    }
}

/// Print the advisory, log entry and result block of an outcome
pub fn print_outcome<W: Write>(
    session: &FinanceSession,
    outcome: &Outcome,
    out: &mut W,
) -> FinanceResult<()> {
    if let Some(advisory) = &outcome.advisory {
        writeln!(out, "{}", format_advisory(advisory))?;
    }
    if let Some(entry) = &outcome.log_entry {
        writeln!(out, "{}", entry)?;
    }
    if let Some(block) = session.result_block() {
        writeln!(out, "{}", block)?;
    }
    Ok(())
}
