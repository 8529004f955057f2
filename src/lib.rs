//! Finance Tracker - personal income, budget and savings calculator
//!
//! This library provides the core of a single-user finance tracker: an
//! income figure, a budget ceiling, a savings goal and a list of categorized
//! expenses, from which it derives the remaining budget, the savings progress
//! and whether the savings goal is reached.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Money, expenses and the finance state
//! - `services`: Update policies and the form-driven session
//! - `display`: Text rendering of expenses and results
//! - `cli`: Line shell and one-shot calculator
//! - `tui`: Terminal form
//!
//! # Example
//!
//! ```rust
//! use finance_tracker::models::{Field, FinanceState, Money};
//! use finance_tracker::services::{FinanceSession, UpdatePolicy};
//!
//! let mut session = FinanceSession::new(UpdatePolicy::Replace, "Rs");
//! session.set_field(Field::Income, "1000");
//! session.set_field(Field::Budget, "800");
//! session.set_field(Field::SavingsGoal, "200");
//! session.set_field(Field::ExpenseCategory, "food");
//! session.set_field(Field::ExpenseAmount, "150");
//! session.add_expense()?;
//!
//! let state: &FinanceState = session.state().unwrap();
//! assert_eq!(state.remaining_budget(), Money::from_units(650));
//! # Ok::<(), finance_tracker::FinanceError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;

pub use error::{FinanceError, FinanceResult};
