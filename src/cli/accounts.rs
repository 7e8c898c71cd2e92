use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;

use crate::core::LedgerManager;
use crate::domain::{AccountKind, BankAccount};

use super::format::{money, print_error, print_header, print_info, print_success};
use super::{select_from, CliResult};

const MENU: [&str; 5] = [
    "Add account",
    "List accounts",
    "Edit account",
    "Delete account",
    "Back",
];

pub fn menu(manager: &mut LedgerManager) -> CliResult<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Bank accounts")
            .items(&MENU)
            .default(0)
            .interact()?;
        match choice {
            0 => add(manager)?,
            1 => list(manager),
            2 => edit(manager)?,
            3 => delete(manager)?,
            _ => return Ok(()),
        }
    }
}

fn prompt_kind(current: Option<AccountKind>) -> CliResult<AccountKind> {
    let labels: Vec<&str> = AccountKind::ALL.iter().map(|kind| kind.label()).collect();
    let default = current
        .and_then(|kind| AccountKind::ALL.iter().position(|k| *k == kind))
        .unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Account type")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(AccountKind::ALL[choice])
}

fn add(manager: &mut LedgerManager) -> CliResult<()> {
    let bank_name: String = Input::new().with_prompt("Bank name").interact_text()?;
    let account_number: String = Input::new()
        .with_prompt("Account number (last 4 digits)")
        .interact_text()?;
    let kind = prompt_kind(None)?;
    let balance: Decimal = Input::new().with_prompt("Current balance").interact_text()?;
    let interest_rate: Decimal = Input::new()
        .with_prompt("Interest rate (%)")
        .interact_text()?;
    let notes: String = Input::new()
        .with_prompt("Notes")
        .allow_empty(true)
        .interact_text()?;

    let mut account = BankAccount::new(
        bank_name,
        account_number,
        kind,
        balance,
        interest_rate,
        Local::now().date_naive(),
    );
    if !notes.trim().is_empty() {
        account.notes = Some(notes);
    }
    let label = account.display_ref();
    match manager.add_bank_account(account) {
        Ok(_) => print_success(&format!("Added {label}")),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn list(manager: &LedgerManager) {
    let accounts = &manager.ledger().bank_accounts;
    if accounts.is_empty() {
        print_info("No bank accounts added yet.");
        return;
    }
    print_header("Bank Accounts");
    for account in accounts {
        print_info(&format!(
            "  {:<28} {:<18} {:<14} rate {}%  updated {}",
            account.display_ref(),
            account.kind.label(),
            money(account.balance),
            account.interest_rate,
            account.last_updated
        ));
    }
}

fn pick(manager: &LedgerManager, prompt: &str) -> CliResult<Option<uuid::Uuid>> {
    let accounts = &manager.ledger().bank_accounts;
    if accounts.is_empty() {
        print_info("No bank accounts added yet.");
        return Ok(None);
    }
    let labels: Vec<String> = accounts.iter().map(BankAccount::display_ref).collect();
    Ok(select_from(prompt, &labels)?.map(|index| accounts[index].id))
}

fn edit(manager: &mut LedgerManager) -> CliResult<()> {
    let Some(id) = pick(manager, "Edit which account?")? else {
        return Ok(());
    };
    let Some(current) = manager
        .ledger()
        .bank_accounts
        .iter()
        .find(|account| account.id == id)
        .cloned()
    else {
        return Ok(());
    };

    let bank_name: String = Input::new()
        .with_prompt("Bank name")
        .default(current.bank_name.clone())
        .interact_text()?;
    let account_number: String = Input::new()
        .with_prompt("Account number")
        .default(current.account_number.clone())
        .interact_text()?;
    let kind = prompt_kind(Some(current.kind))?;
    let balance: Decimal = Input::new()
        .with_prompt("Current balance")
        .default(current.balance)
        .interact_text()?;
    let interest_rate: Decimal = Input::new()
        .with_prompt("Interest rate (%)")
        .default(current.interest_rate)
        .interact_text()?;

    let today = Local::now().date_naive();
    let result = manager.update_bank_account(id, |account| {
        account.bank_name = bank_name;
        account.account_number = account_number;
        account.kind = kind;
        account.balance = balance;
        account.interest_rate = interest_rate;
        account.last_updated = today;
    });
    match result {
        Ok(()) => print_success("Updated account details"),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn delete(manager: &mut LedgerManager) -> CliResult<()> {
    let Some(id) = pick(manager, "Delete which account?")? else {
        return Ok(());
    };
    let confirmed = Confirm::new()
        .with_prompt("Delete this account?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match manager.remove_bank_account(id) {
        Ok(removed) => print_success(&format!("Deleted {}", removed.display_ref())),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}
