use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;

use crate::core::LedgerManager;
use crate::domain::{BankAccount, Direction, Transaction};
use crate::ledger::{category_totals, filter_transactions, monthly_flows, TransactionFilter};

use super::format::{money, print_error, print_header, print_info, print_success, signed_money};
use super::{select_from, CliResult};

const MENU: [&str; 5] = [
    "Add transaction",
    "Transaction history",
    "Monthly summary",
    "Delete transaction",
    "Back",
];

const CATEGORIES: [&str; 9] = [
    "Salary",
    "Investment",
    "Savings",
    "Bills",
    "Shopping",
    "Food",
    "Transport",
    "Entertainment",
    "Other",
];

pub fn menu(manager: &mut LedgerManager) -> CliResult<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Transactions")
            .items(&MENU)
            .default(0)
            .interact()?;
        match choice {
            0 => add(manager)?,
            1 => history(manager)?,
            2 => monthly_summary(manager),
            3 => delete(manager)?,
            _ => return Ok(()),
        }
    }
}

fn prompt_direction() -> CliResult<Direction> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Transaction type")
        .items(&["deposit", "withdrawal"])
        .default(0)
        .interact()?;
    Ok(if choice == 0 {
        Direction::Deposit
    } else {
        Direction::Withdrawal
    })
}

fn prompt_account(manager: &LedgerManager) -> CliResult<String> {
    let accounts = &manager.ledger().bank_accounts;
    if accounts.is_empty() {
        return Ok("Default".into());
    }
    let labels: Vec<String> = accounts.iter().map(BankAccount::display_ref).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Account")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(labels[choice].clone())
}

/// A deposit credits the referenced bank account; a withdrawal debits it,
/// never below zero.
fn add(manager: &mut LedgerManager) -> CliResult<()> {
    let date: NaiveDate = Input::new()
        .with_prompt("Transaction date (YYYY-MM-DD)")
        .default(Local::now().date_naive())
        .interact_text()?;
    let direction = prompt_direction()?;
    let amount: Decimal = Input::new().with_prompt("Amount").interact_text()?;
    let category_index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .items(&CATEGORIES)
        .default(0)
        .interact()?;
    let account = prompt_account(manager)?;
    let notes: String = Input::new()
        .with_prompt("Notes/description")
        .allow_empty(true)
        .interact_text()?;

    let mut txn = Transaction::new(date, direction, amount, CATEGORIES[category_index], account);
    if !notes.trim().is_empty() {
        txn = txn.with_notes(notes);
    }
    match manager.record_transaction(txn) {
        Ok(_) => print_success(&format!(
            "Added {} of {}",
            direction.label(),
            money(amount)
        )),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn prompt_filter() -> CliResult<TransactionFilter> {
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Filter by type")
        .items(&["all", "deposits only", "withdrawals only"])
        .default(0)
        .interact()?;
    let direction = match choice {
        1 => Some(Direction::Deposit),
        2 => Some(Direction::Withdrawal),
        _ => None,
    };
    Ok(TransactionFilter {
        direction,
        ..TransactionFilter::default()
    })
}

fn history(manager: &LedgerManager) -> CliResult<()> {
    let transactions = &manager.ledger().transactions;
    if transactions.is_empty() {
        print_info("No transactions recorded yet.");
        return Ok(());
    }
    let filter = prompt_filter()?;
    let mut matched = filter_transactions(transactions, &filter);
    // Newest first.
    matched.sort_by(|a, b| b.date.cmp(&a.date));
    print_header("Transaction History");
    for txn in matched {
        print_info(&format!(
            "  {}  {}  {:<14} {:<16} {}",
            txn.date,
            signed_money(txn.signed_amount()),
            txn.category,
            txn.account,
            txn.notes.as_deref().unwrap_or("")
        ));
    }
    Ok(())
}

fn monthly_summary(manager: &LedgerManager) {
    let transactions = &manager.ledger().transactions;
    if transactions.is_empty() {
        print_info("No transactions recorded yet.");
        return;
    }
    print_header("Monthly Income vs Expense");
    for flow in monthly_flows(transactions) {
        print_info(&format!(
            "  {}  income {}  expense {}  net {}",
            flow.month,
            money(flow.deposits),
            money(flow.withdrawals),
            signed_money(flow.net())
        ));
    }
    for direction in [Direction::Withdrawal, Direction::Deposit] {
        let mut totals = category_totals(transactions, direction);
        if totals.is_empty() {
            continue;
        }
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        print_header(match direction {
            Direction::Withdrawal => "Spending by Category",
            Direction::Deposit => "Income by Category",
        });
        for entry in totals {
            print_info(&format!("  {:<20} {}", entry.category, money(entry.total)));
        }
    }
}

fn delete(manager: &mut LedgerManager) -> CliResult<()> {
    let transactions = &manager.ledger().transactions;
    if transactions.is_empty() {
        print_info("No transactions recorded yet.");
        return Ok(());
    }
    let labels: Vec<String> = transactions
        .iter()
        .map(|txn| {
            format!(
                "{} {} {} ({})",
                txn.date,
                txn.direction.label(),
                money(txn.amount),
                txn.category
            )
        })
        .collect();
    let Some(index) = select_from("Delete which transaction?", &labels)? else {
        return Ok(());
    };
    let id = transactions[index].id;
    let confirmed = Confirm::new()
        .with_prompt("Delete this transaction?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match manager.remove_transaction(id) {
        Ok(_) => print_success("Transaction deleted"),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}
