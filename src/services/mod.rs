//! Business logic layer
//!
//! `update` holds the pure income/budget/goal revision rules; `session` is the
//! controller the shells drive (form inputs, lazily created state, expense
//! log).

pub mod session;
pub mod update;

pub use session::{FinanceSession, FormInputs, Outcome};
pub use update::{update_budget, update_income, update_savings_goal, Revision, UpdatePolicy};
