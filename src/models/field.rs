//! Input fields collected by the shells
//!
//! The finance form has five text inputs. Every shell (terminal form, line
//! shell, one-shot calculator) addresses them through this enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Income,
    Budget,
    SavingsGoal,
    ExpenseCategory,
    ExpenseAmount,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::Income,
        Field::Budget,
        Field::SavingsGoal,
        Field::ExpenseCategory,
        Field::ExpenseAmount,
    ];

    /// Position of this field in [`Field::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Income => 0,
            Self::Budget => 1,
            Self::SavingsGoal => 2,
            Self::ExpenseCategory => 3,
            Self::ExpenseAmount => 4,
        }
    }

    /// Prompt shown next to the input
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Income => "Enter your income",
            Self::Budget => "Enter your budget",
            Self::SavingsGoal => "Enter your savings goal",
            Self::ExpenseCategory => "Enter expense category",
            Self::ExpenseAmount => "Enter expense amount",
        }
    }

    /// The field following this one, wrapping around
    pub fn next(&self) -> Field {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The field preceding this one, wrapping around
    pub fn previous(&self) -> Field {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Budget => write!(f, "budget"),
            Self::SavingsGoal => write!(f, "savings goal"),
            Self::ExpenseCategory => write!(f, "expense category"),
            Self::ExpenseAmount => write!(f, "expense amount"),
        }
    }
}
