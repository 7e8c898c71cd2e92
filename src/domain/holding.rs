use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A demat (dematerialized securities) position: share count plus the
/// cost-basis and market-price bookkeeping needed for profit/loss views.
///
/// `purchase_price` is the quantity-weighted average across all buys of the
/// symbol. Values derived from it (purchase value, current value, P/L) are
/// recomputed on every read and never persisted, so they cannot drift from
/// the base fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Holding {
    pub id: Uuid,
    /// Uppercase ticker, the unique merge key within the portfolio.
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    /// Weighted-average purchase price per share.
    pub purchase_price: Decimal,
    pub current_price: Decimal,
    /// Date of the most recent purchase.
    pub purchase_date: NaiveDate,
    pub last_updated: NaiveDate,
}

impl Holding {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        quantity: u32,
        purchase_price: Decimal,
        current_price: Decimal,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            symbol: symbol.into().trim().to_uppercase(),
            name: name.into(),
            quantity,
            purchase_price,
            current_price,
            purchase_date,
            last_updated: purchase_date,
        }
    }

    pub fn purchase_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.purchase_price
    }

    pub fn current_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.current_price
    }

    pub fn profit_loss(&self) -> Decimal {
        self.current_value() - self.purchase_value()
    }

    /// Profit/loss relative to the purchase value as a percentage; zero when
    /// nothing was invested.
    pub fn profit_loss_percent(&self) -> Decimal {
        let invested = self.purchase_value();
        if invested.is_zero() {
            Decimal::ZERO
        } else {
            self.profit_loss() / invested * Decimal::ONE_HUNDRED
        }
    }

    pub fn set_current_price(&mut self, price: Decimal, as_of: NaiveDate) {
        self.current_price = price;
        self.last_updated = as_of;
    }
}
