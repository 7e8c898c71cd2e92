use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single cash movement. The stored amount is always non-negative; the
/// sign is carried by [`Direction`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub direction: Direction,
    pub amount: Decimal,
    pub category: String,
    /// Display reference to a bank account ("HDFC (ending 1234)"), or any
    /// free-form label when no account is linked.
    pub account: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Deposit,
    Withdrawal,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Deposit => "deposit",
            Direction::Withdrawal => "withdrawal",
        }
    }
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        direction: Direction,
        amount: Decimal,
        category: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            direction,
            amount,
            category: category.into(),
            account: account.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Amount with the direction applied: positive for deposits, negative
    /// for withdrawals.
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Deposit => self.amount,
            Direction::Withdrawal => -self.amount,
        }
    }
}
