use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::{BankAccount, CreditCard, Holding, Loan, Transaction};
use crate::errors::LedgerError;
use crate::ledger::{Ledger, PurchaseOrder};
use crate::storage::{Collection, StorageBackend};

/// Facade that coordinates the in-memory ledger with its persistence
/// collaborator. Every mutation runs against a working copy and is only
/// committed once the affected collections are saved; a failed save leaves
/// the in-memory state at the last persisted snapshot and restores any
/// collection file written earlier in the same commit.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerManager {
    /// Loads the persisted collections and wraps them with the backend.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self, LedgerError> {
        let ledger = storage.load()?;
        Ok(Self { ledger, storage })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn commit<T>(
        &mut self,
        collections: &[Collection],
        op: impl FnOnce(&mut Ledger) -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        let snapshot = self.ledger.clone();
        let value = match op(&mut self.ledger) {
            Ok(value) => value,
            Err(err) => {
                self.ledger = snapshot;
                return Err(err);
            }
        };
        for (index, &collection) in collections.iter().enumerate() {
            if let Err(err) = self.storage.save_collection(&self.ledger, collection) {
                tracing::warn!(error = %err, "save failed, rolling back in-memory state");
                self.ledger = snapshot;
                // Collections written earlier in this commit are re-saved from
                // the snapshot so disk never holds a half-applied mutation.
                for &written in &collections[..index] {
                    if let Err(restore_err) =
                        self.storage.save_collection(&self.ledger, written)
                    {
                        tracing::warn!(
                            error = %restore_err,
                            collection = ?written,
                            "could not restore previously saved collection"
                        );
                    }
                }
                return Err(err);
            }
        }
        Ok(value)
    }

    // --- bank accounts ---

    pub fn add_bank_account(&mut self, account: BankAccount) -> Result<Uuid, LedgerError> {
        self.commit(&[Collection::BankAccounts], |ledger| {
            ledger.add_bank_account(account)
        })
    }

    pub fn update_bank_account(
        &mut self,
        id: Uuid,
        mutator: impl FnOnce(&mut BankAccount),
    ) -> Result<(), LedgerError> {
        self.commit(&[Collection::BankAccounts], |ledger| {
            let account = ledger
                .bank_account_mut(id)
                .ok_or_else(|| LedgerError::not_found(format!("bank account {id}")))?;
            mutator(account);
            Ok(())
        })
    }

    pub fn remove_bank_account(&mut self, id: Uuid) -> Result<BankAccount, LedgerError> {
        self.commit(&[Collection::BankAccounts], |ledger| {
            ledger
                .remove_bank_account(id)
                .ok_or_else(|| LedgerError::not_found(format!("bank account {id}")))
        })
    }

    // --- credit cards ---

    pub fn add_credit_card(&mut self, card: CreditCard) -> Result<Uuid, LedgerError> {
        self.commit(&[Collection::CreditCards], |ledger| {
            ledger.add_credit_card(card)
        })
    }

    pub fn update_credit_card(
        &mut self,
        id: Uuid,
        mutator: impl FnOnce(&mut CreditCard),
    ) -> Result<(), LedgerError> {
        self.commit(&[Collection::CreditCards], |ledger| {
            let card = ledger
                .credit_card_mut(id)
                .ok_or_else(|| LedgerError::not_found(format!("credit card {id}")))?;
            mutator(card);
            Ok(())
        })
    }

    pub fn remove_credit_card(&mut self, id: Uuid) -> Result<CreditCard, LedgerError> {
        self.commit(&[Collection::CreditCards], |ledger| {
            ledger
                .remove_credit_card(id)
                .ok_or_else(|| LedgerError::not_found(format!("credit card {id}")))
        })
    }

    // --- holdings ---

    pub fn apply_purchase(&mut self, order: PurchaseOrder) -> Result<Holding, LedgerError> {
        self.commit(&[Collection::Holdings], |ledger| ledger.apply_purchase(order))
    }

    pub fn update_price(
        &mut self,
        symbol: &str,
        price: Decimal,
        as_of: chrono::NaiveDate,
    ) -> Result<(), LedgerError> {
        self.commit(&[Collection::Holdings], |ledger| {
            ledger.update_price(symbol, price, as_of)
        })
    }

    pub fn remove_holding(&mut self, id: Uuid) -> Result<Holding, LedgerError> {
        self.commit(&[Collection::Holdings], |ledger| {
            ledger
                .remove_holding(id)
                .ok_or_else(|| LedgerError::not_found(format!("holding {id}")))
        })
    }

    // --- loans ---

    pub fn add_loan(&mut self, loan: Loan) -> Result<Uuid, LedgerError> {
        self.commit(&[Collection::Loans], |ledger| ledger.add_loan(loan))
    }

    pub fn update_loan(
        &mut self,
        id: Uuid,
        mutator: impl FnOnce(&mut Loan),
    ) -> Result<(), LedgerError> {
        self.commit(&[Collection::Loans], |ledger| {
            let loan = ledger
                .loan_mut(id)
                .ok_or_else(|| LedgerError::not_found(format!("loan {id}")))?;
            mutator(loan);
            Ok(())
        })
    }

    pub fn remove_loan(&mut self, id: Uuid) -> Result<Loan, LedgerError> {
        self.commit(&[Collection::Loans], |ledger| {
            ledger
                .remove_loan(id)
                .ok_or_else(|| LedgerError::not_found(format!("loan {id}")))
        })
    }

    // --- transactions ---

    /// Recording a transaction may also move a linked bank balance, so both
    /// collections are persisted together.
    pub fn record_transaction(&mut self, transaction: Transaction) -> Result<Uuid, LedgerError> {
        self.commit(
            &[Collection::Transactions, Collection::BankAccounts],
            |ledger| ledger.record_transaction(transaction),
        )
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Result<Transaction, LedgerError> {
        self.commit(&[Collection::Transactions], |ledger| {
            ledger
                .remove_transaction(id)
                .ok_or_else(|| LedgerError::not_found(format!("transaction {id}")))
        })
    }
}
