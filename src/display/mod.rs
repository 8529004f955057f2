//! Display formatting for terminal output
//!
//! Provides the text renderings shared by the shells: expense log lines, the
//! expense table, the result block and advisories.

pub mod expense;
pub mod summary;

pub use expense::{format_expense_entry, format_expense_table};
pub use summary::{format_advisory, format_result_block, format_state_details};
