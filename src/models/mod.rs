//! Core data models for the finance tracker
//!
//! This module contains the data structures of the finance domain: money
//! amounts, expenses, the finance state with its derived figures, and the
//! input fields the shells collect.

pub mod expense;
pub mod field;
pub mod finance;
pub mod money;

pub use expense::Expense;
pub use field::Field;
pub use finance::{BudgetAdvisory, FinanceState, Summary, BUDGET_ADVISORY_MESSAGE};
pub use money::{Money, MoneyParseError, MAX_CENTS};
