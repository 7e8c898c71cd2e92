use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{BankAccount, CreditCard, Holding, Loan, Transaction};
use crate::errors::LedgerError;

/// Owns the five record collections for a single user's ledger. Mutations
/// validate their input before touching any state; queries live in
/// [`crate::ledger::summary`].
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub bank_accounts: Vec<BankAccount>,
    pub credit_cards: Vec<CreditCard>,
    pub holdings: Vec<Holding>,
    pub loans: Vec<Loan>,
    pub transactions: Vec<Transaction>,
}

/// Input for a stock purchase, the only mutation with merge semantics.
#[derive(Debug, Clone)]
pub struct PurchaseOrder {
    pub symbol: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub current_price: Decimal,
    pub date: NaiveDate,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    // --- bank accounts ---

    pub fn add_bank_account(&mut self, account: BankAccount) -> Result<Uuid, LedgerError> {
        if account.bank_name.trim().is_empty() {
            return Err(LedgerError::validation("Bank name cannot be empty"));
        }
        if account.account_number.trim().is_empty() {
            return Err(LedgerError::validation("Account number cannot be empty"));
        }
        let id = account.id;
        self.bank_accounts.push(account);
        Ok(id)
    }

    pub fn bank_account(&self, id: Uuid) -> Option<&BankAccount> {
        self.bank_accounts.iter().find(|account| account.id == id)
    }

    pub fn bank_account_mut(&mut self, id: Uuid) -> Option<&mut BankAccount> {
        self.bank_accounts
            .iter_mut()
            .find(|account| account.id == id)
    }

    pub fn remove_bank_account(&mut self, id: Uuid) -> Option<BankAccount> {
        let index = self
            .bank_accounts
            .iter()
            .position(|account| account.id == id)?;
        Some(self.bank_accounts.remove(index))
    }

    // --- credit cards ---

    pub fn add_credit_card(&mut self, card: CreditCard) -> Result<Uuid, LedgerError> {
        if card.issuer.trim().is_empty() {
            return Err(LedgerError::validation("Card issuer cannot be empty"));
        }
        if card.card_number.trim().is_empty() {
            return Err(LedgerError::validation("Card number cannot be empty"));
        }
        let id = card.id;
        self.credit_cards.push(card);
        Ok(id)
    }

    pub fn credit_card_mut(&mut self, id: Uuid) -> Option<&mut CreditCard> {
        self.credit_cards.iter_mut().find(|card| card.id == id)
    }

    pub fn remove_credit_card(&mut self, id: Uuid) -> Option<CreditCard> {
        let index = self.credit_cards.iter().position(|card| card.id == id)?;
        Some(self.credit_cards.remove(index))
    }

    // --- holdings ---

    /// Applies a stock purchase. A first buy of a symbol creates the holding;
    /// a repeat buy merges into the existing one with a quantity-weighted
    /// average price:
    ///
    /// `new_avg = (old_qty * old_price + qty * price) / (old_qty + qty)`
    ///
    /// The merged holding takes the latest purchase date and current price.
    /// Returns the created-or-merged record. Invalid input is rejected
    /// before any mutation.
    pub fn apply_purchase(&mut self, order: PurchaseOrder) -> Result<Holding, LedgerError> {
        let symbol = order.symbol.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(LedgerError::validation("Stock symbol cannot be empty"));
        }
        if order.quantity == 0 {
            return Err(LedgerError::validation("Quantity must be greater than zero"));
        }

        if let Some(existing) = self
            .holdings
            .iter_mut()
            .find(|holding| holding.symbol == symbol)
        {
            let merged_quantity = existing
                .quantity
                .checked_add(order.quantity)
                .ok_or_else(|| {
                    LedgerError::validation("Total share quantity exceeds the supported maximum")
                })?;
            let old_quantity = Decimal::from(existing.quantity);
            let bought = Decimal::from(order.quantity);
            let new_quantity = Decimal::from(merged_quantity);
            existing.purchase_price =
                (old_quantity * existing.purchase_price + bought * order.price) / new_quantity;
            existing.quantity = merged_quantity;
            existing.current_price = order.current_price;
            existing.purchase_date = order.date;
            existing.last_updated = order.date;
            tracing::info!(
                symbol = %symbol,
                quantity = order.quantity,
                "merged repeat purchase into existing holding"
            );
            Ok(existing.clone())
        } else {
            let holding = Holding::new(
                symbol,
                order.name,
                order.quantity,
                order.price,
                order.current_price,
                order.date,
            );
            self.holdings.push(holding.clone());
            Ok(holding)
        }
    }

    pub fn holding_by_symbol(&self, symbol: &str) -> Option<&Holding> {
        let symbol = symbol.trim().to_uppercase();
        self.holdings.iter().find(|holding| holding.symbol == symbol)
    }

    /// Updates a holding's market price; derived values follow on read.
    pub fn update_price(
        &mut self,
        symbol: &str,
        price: Decimal,
        as_of: NaiveDate,
    ) -> Result<(), LedgerError> {
        let key = symbol.trim().to_uppercase();
        let holding = self
            .holdings
            .iter_mut()
            .find(|holding| holding.symbol == key)
            .ok_or_else(|| LedgerError::not_found(format!("holding `{key}`")))?;
        holding.set_current_price(price, as_of);
        Ok(())
    }

    pub fn remove_holding(&mut self, id: Uuid) -> Option<Holding> {
        let index = self.holdings.iter().position(|holding| holding.id == id)?;
        Some(self.holdings.remove(index))
    }

    // --- loans ---

    pub fn add_loan(&mut self, loan: Loan) -> Result<Uuid, LedgerError> {
        if loan.lender.trim().is_empty() {
            return Err(LedgerError::validation("Lender name cannot be empty"));
        }
        if loan.account_number.trim().is_empty() {
            return Err(LedgerError::validation("Account number cannot be empty"));
        }
        let id = loan.id;
        self.loans.push(loan);
        Ok(id)
    }

    pub fn loan_mut(&mut self, id: Uuid) -> Option<&mut Loan> {
        self.loans.iter_mut().find(|loan| loan.id == id)
    }

    pub fn remove_loan(&mut self, id: Uuid) -> Option<Loan> {
        let index = self.loans.iter().position(|loan| loan.id == id)?;
        Some(self.loans.remove(index))
    }

    // --- transactions ---

    /// Records a transaction. When the account reference matches a bank
    /// account's display form the balance is credited or debited, with
    /// debits clamped at zero.
    pub fn record_transaction(&mut self, transaction: Transaction) -> Result<Uuid, LedgerError> {
        if transaction.amount < Decimal::ZERO {
            return Err(LedgerError::validation("Amount cannot be negative"));
        }
        let id = transaction.id;
        let linked = self
            .bank_accounts
            .iter_mut()
            .find(|account| account.display_ref() == transaction.account);
        if let Some(account) = linked {
            match transaction.direction {
                crate::domain::Direction::Deposit => {
                    account.credit(transaction.amount, transaction.date)
                }
                crate::domain::Direction::Withdrawal => {
                    account.debit(transaction.amount, transaction.date)
                }
            }
        }
        self.transactions.push(transaction);
        Ok(id)
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        Some(self.transactions.remove(index))
    }
}
