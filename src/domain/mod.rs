//! Flat domain records for the five ledger collections.

pub mod bank_account;
pub mod credit_card;
pub mod holding;
pub mod loan;
pub mod transaction;

pub use bank_account::{AccountKind, BankAccount};
pub use credit_card::{CardNetwork, CreditCard, UtilizationBand};
pub use holding::Holding;
pub use loan::{Loan, LoanKind};
pub use transaction::{Direction, Transaction};
