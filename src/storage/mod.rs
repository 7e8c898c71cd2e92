pub mod json_backend;

use crate::{errors::LedgerError, ledger::Ledger};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// The five persisted collections, each stored as its own JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    BankAccounts,
    CreditCards,
    Holdings,
    Loans,
    Transactions,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::BankAccounts,
        Collection::CreditCards,
        Collection::Holdings,
        Collection::Loans,
        Collection::Transactions,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::BankAccounts => "bank_accounts.json",
            Collection::CreditCards => "credit_cards.json",
            Collection::Holdings => "demat_holdings.json",
            Collection::Loans => "loan_accounts.json",
            Collection::Transactions => "transactions.json",
        }
    }
}

/// Abstraction over persistence backends storing ledger collections.
///
/// A save failure must surface before the in-memory mutation is considered
/// committed; [`crate::core::LedgerManager`] relies on this to roll back.
pub trait StorageBackend: Send + Sync {
    /// Loads all collections; missing files yield empty collections.
    fn load(&self) -> Result<Ledger>;
    /// Persists every collection.
    fn save(&self, ledger: &Ledger) -> Result<()>;
    /// Persists a single collection.
    fn save_collection(&self, ledger: &Ledger, collection: Collection) -> Result<()>;
}

pub use json_backend::JsonStorage;
