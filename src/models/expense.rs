//! Expense model
//!
//! A single categorized outflow. Expenses are immutable once recorded and are
//! owned by the [`FinanceState`](super::FinanceState) that holds them.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// A categorized expense
///
/// Neither the category text nor the sign of the amount is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    category: String,
    amount: Money,
}

impl Expense {
    /// Create a new expense
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}
