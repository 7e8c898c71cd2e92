use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a credit card with its limit and current outstanding amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditCard {
    pub id: Uuid,
    pub issuer: String,
    /// Last four digits, kept as entered for display.
    pub card_number: String,
    pub network: CardNetwork,
    pub credit_limit: Decimal,
    pub outstanding_amount: Decimal,
    pub due_date: NaiveDate,
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardNetwork {
    Visa,
    Mastercard,
    Rupay,
    Amex,
    Other,
}

impl CardNetwork {
    pub const ALL: [CardNetwork; 5] = [
        CardNetwork::Visa,
        CardNetwork::Mastercard,
        CardNetwork::Rupay,
        CardNetwork::Amex,
        CardNetwork::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardNetwork::Visa => "Visa",
            CardNetwork::Mastercard => "Mastercard",
            CardNetwork::Rupay => "Rupay",
            CardNetwork::Amex => "American Express",
            CardNetwork::Other => "Other",
        }
    }
}

/// Presentation bands for credit utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationBand {
    /// Below 50%.
    Low,
    /// 50% inclusive to 80% exclusive.
    Medium,
    /// 80% and above.
    High,
}

impl CreditCard {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        issuer: impl Into<String>,
        card_number: impl Into<String>,
        network: CardNetwork,
        credit_limit: Decimal,
        outstanding_amount: Decimal,
        due_date: NaiveDate,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            issuer: issuer.into(),
            card_number: card_number.into(),
            network,
            credit_limit,
            outstanding_amount,
            due_date,
            last_updated: as_of,
        }
    }

    pub fn display_ref(&self) -> String {
        format!("{} ({})", self.issuer, self.card_number)
    }

    /// Outstanding share of the limit as a percentage. A zero limit yields
    /// zero rather than an error.
    pub fn utilization_percent(&self) -> Decimal {
        if self.credit_limit.is_zero() {
            Decimal::ZERO
        } else {
            self.outstanding_amount / self.credit_limit * Decimal::ONE_HUNDRED
        }
    }

    pub fn available_credit(&self) -> Decimal {
        self.credit_limit - self.outstanding_amount
    }

    pub fn utilization_band(&self) -> UtilizationBand {
        let pct = self.utilization_percent();
        if pct >= Decimal::from(80) {
            UtilizationBand::High
        } else if pct >= Decimal::from(50) {
            UtilizationBand::Medium
        } else {
            UtilizationBand::Low
        }
    }

    /// Days from `today` until the payment due date; negative when overdue.
    pub fn days_until_due(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn card(limit: Decimal, outstanding: Decimal) -> CreditCard {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        CreditCard::new(
            "ICICI",
            "9876",
            CardNetwork::Visa,
            limit,
            outstanding,
            date,
            date,
        )
    }

    #[test]
    fn utilization_is_zero_for_zero_limit() {
        let card = card(Decimal::ZERO, dec!(5000));
        assert_eq!(card.utilization_percent(), Decimal::ZERO);
        assert_eq!(card.utilization_band(), UtilizationBand::Low);
    }

    #[test]
    fn utilization_bands_split_at_fifty_and_eighty() {
        assert_eq!(
            card(dec!(1000), dec!(499)).utilization_band(),
            UtilizationBand::Low
        );
        assert_eq!(
            card(dec!(1000), dec!(500)).utilization_band(),
            UtilizationBand::Medium
        );
        assert_eq!(
            card(dec!(1000), dec!(799)).utilization_band(),
            UtilizationBand::Medium
        );
        assert_eq!(
            card(dec!(1000), dec!(800)).utilization_band(),
            UtilizationBand::High
        );
    }

    #[test]
    fn days_until_due_counts_from_today() {
        let card = card(dec!(1000), dec!(100));
        let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
        assert_eq!(card.days_until_due(today), 3);
    }
}
