//! Interactive menu shell. This layer only prompts, formats, and renders;
//! every computation comes from [`crate::ledger`] and every mutation goes
//! through [`crate::core::LedgerManager`].

pub mod accounts;
pub mod cards;
pub mod dashboard;
pub mod format;
pub mod holdings;
pub mod loans;
pub mod transactions;

use dialoguer::{theme::ColorfulTheme, Select};
use thiserror::Error;

use crate::core::LedgerManager;
use crate::errors::LedgerError;
use crate::storage::JsonStorage;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type CliResult<T> = Result<T, CliError>;

const MAIN_MENU: [&str; 7] = [
    "Dashboard",
    "Bank Accounts",
    "Credit Cards",
    "Demat Holdings",
    "Loan Accounts",
    "Transactions",
    "Quit",
];

/// Runs the main menu loop until the user quits.
pub fn run_cli() -> CliResult<()> {
    let storage = JsonStorage::new_default()?;
    let mut manager = LedgerManager::open(Box::new(storage))?;
    format::print_header("Personal Finance Tracker");

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Main menu")
            .items(&MAIN_MENU)
            .default(0)
            .interact()?;
        match choice {
            0 => dashboard::show(manager.ledger()),
            1 => accounts::menu(&mut manager)?,
            2 => cards::menu(&mut manager)?,
            3 => holdings::menu(&mut manager)?,
            4 => loans::menu(&mut manager)?,
            5 => transactions::menu(&mut manager)?,
            _ => break,
        }
    }
    Ok(())
}

/// Presents `labels` plus a trailing "Cancel" entry; `None` means cancel.
pub(crate) fn select_from(prompt: &str, labels: &[String]) -> CliResult<Option<usize>> {
    let mut items: Vec<&str> = labels.iter().map(String::as_str).collect();
    items.push("Cancel");
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    if choice == labels.len() {
        Ok(None)
    } else {
        Ok(Some(choice))
    }
}
