use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a loan account tracked against its repayment schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Loan {
    pub id: Uuid,
    pub kind: LoanKind,
    pub lender: String,
    /// Last four digits, kept as entered for display.
    pub account_number: String,
    pub original_amount: Decimal,
    pub outstanding_amount: Decimal,
    pub interest_rate: Decimal,
    pub start_date: NaiveDate,
    pub tenure_months: u32,
    /// Fixed periodic installment amount.
    pub emi_amount: Decimal,
    pub next_payment_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LoanKind {
    Home,
    Car,
    Personal,
    Education,
    Business,
    Other,
}

impl LoanKind {
    pub const ALL: [LoanKind; 6] = [
        LoanKind::Home,
        LoanKind::Car,
        LoanKind::Personal,
        LoanKind::Education,
        LoanKind::Business,
        LoanKind::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LoanKind::Home => "Home Loan",
            LoanKind::Car => "Car Loan",
            LoanKind::Personal => "Personal Loan",
            LoanKind::Education => "Education Loan",
            LoanKind::Business => "Business Loan",
            LoanKind::Other => "Other",
        }
    }
}

impl Loan {
    pub fn amount_repaid(&self) -> Decimal {
        self.original_amount - self.outstanding_amount
    }

    /// Repaid share of the original amount as a percentage; zero when the
    /// original amount is zero.
    pub fn progress_percent(&self) -> Decimal {
        if self.original_amount.is_zero() {
            Decimal::ZERO
        } else {
            self.amount_repaid() / self.original_amount * Decimal::ONE_HUNDRED
        }
    }

    /// Days from `today` until the next EMI; negative when overdue.
    pub fn days_until_payment(&self, today: NaiveDate) -> i64 {
        (self.next_payment_date - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn home_loan(original: Decimal, outstanding: Decimal) -> Loan {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        Loan {
            id: Uuid::new_v4(),
            kind: LoanKind::Home,
            lender: "SBI".into(),
            account_number: "5544".into(),
            original_amount: original,
            outstanding_amount: outstanding,
            interest_rate: dec!(8.5),
            start_date: date,
            tenure_months: 240,
            emi_amount: dec!(25000),
            next_payment_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            notes: None,
            last_updated: date,
        }
    }

    #[test]
    fn progress_tracks_repaid_share() {
        let loan = home_loan(dec!(1000000), dec!(750000));
        assert_eq!(loan.amount_repaid(), dec!(250000));
        assert_eq!(loan.progress_percent(), dec!(25));
    }

    #[test]
    fn progress_is_zero_for_zero_original_amount() {
        let loan = home_loan(Decimal::ZERO, Decimal::ZERO);
        assert_eq!(loan.progress_percent(), Decimal::ZERO);
    }
}
