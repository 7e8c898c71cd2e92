use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a bank account whose balance moves with linked transactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankAccount {
    pub id: Uuid,
    pub bank_name: String,
    /// Last four digits, kept as entered for display.
    pub account_number: String,
    pub kind: AccountKind,
    pub balance: Decimal,
    pub interest_rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountKind {
    Savings,
    Current,
    FixedDeposit,
    RecurringDeposit,
    Other,
}

impl AccountKind {
    pub const ALL: [AccountKind; 5] = [
        AccountKind::Savings,
        AccountKind::Current,
        AccountKind::FixedDeposit,
        AccountKind::RecurringDeposit,
        AccountKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
            AccountKind::FixedDeposit => "Fixed Deposit",
            AccountKind::RecurringDeposit => "Recurring Deposit",
            AccountKind::Other => "Other",
        }
    }
}

impl BankAccount {
    pub fn new(
        bank_name: impl Into<String>,
        account_number: impl Into<String>,
        kind: AccountKind,
        balance: Decimal,
        interest_rate: Decimal,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            bank_name: bank_name.into(),
            account_number: account_number.into(),
            kind,
            balance,
            interest_rate,
            notes: None,
            last_updated: as_of,
        }
    }

    /// Display form used by transactions to reference this account.
    pub fn display_ref(&self) -> String {
        format!("{} (ending {})", self.bank_name, self.account_number)
    }

    pub fn credit(&mut self, amount: Decimal, as_of: NaiveDate) {
        self.balance += amount;
        self.last_updated = as_of;
    }

    /// Debits the balance, clamping at zero rather than going negative.
    pub fn debit(&mut self, amount: Decimal, as_of: NaiveDate) {
        self.balance = (self.balance - amount).max(Decimal::ZERO);
        self.last_updated = as_of;
    }
}
