use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::LedgerManager;
use crate::domain::{Loan, LoanKind};
use crate::ledger::{loan_summary, total_emi};

use super::format::{money, percent, print_error, print_header, print_info, print_success};
use super::{select_from, CliResult};

const MENU: [&str; 5] = [
    "Add loan",
    "List loans",
    "Edit loan",
    "Delete loan",
    "Back",
];

pub fn menu(manager: &mut LedgerManager) -> CliResult<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Loan accounts")
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

fn prompt_kind(current: Option<LoanKind>) -> CliResult<LoanKind> {
    let labels: Vec<&str> = LoanKind::ALL.iter().map(|kind| kind.label()).collect();
    let default = current
        .and_then(|kind| LoanKind::ALL.iter().position(|k| *k == kind))
        .unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Loan type")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(LoanKind::ALL[choice])
}

fn add(manager: &mut LedgerManager) -> CliResult<()> {
    let kind = prompt_kind(None)?;
    let lender: String = Input::new().with_prompt("Lender name").interact_text()?;
    let account_number: String = Input::new()
        .with_prompt("Loan account number (last 4 digits)")
        .interact_text()?;
    let original_amount: Decimal = Input::new()
        .with_prompt("Original loan amount")
        .interact_text()?;
    let outstanding_amount: Decimal = Input::new()
        .with_prompt("Outstanding amount")
        .interact_text()?;
    let interest_rate: Decimal = Input::new()
        .with_prompt("Interest rate (%)")
        .interact_text()?;
    let start_date: NaiveDate = Input::new()
        .with_prompt("Loan start date (YYYY-MM-DD)")
        .interact_text()?;
    let tenure_months: u32 = Input::new()
        .with_prompt("Tenure (in months)")
        .default(36)
        .interact_text()?;
    let emi_amount: Decimal = Input::new().with_prompt("EMI amount").interact_text()?;
    let next_payment_date: NaiveDate = Input::new()
        .with_prompt("Next payment date (YYYY-MM-DD)")
        .interact_text()?;

    let loan = Loan {
        id: Uuid::new_v4(),
        kind,
        lender,
        account_number,
        original_amount,
        outstanding_amount,
        interest_rate,
        start_date,
        tenure_months,
        emi_amount,
        next_payment_date,
        notes: None,
        last_updated: Local::now().date_naive(),
    };
    let label = format!("{} from {}", loan.kind.label(), loan.lender);
    match manager.add_loan(loan) {
        Ok(_) => print_success(&format!("Added {label}")),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn list(manager: &LedgerManager) {
    let loans = &manager.ledger().loans;
    if loans.is_empty() {
        print_info("No loan accounts added yet.");
        return;
    }
    print_header("Your Loan Accounts");
    let today = Local::now().date_naive();
    for loan in loans {
        print_info(&format!(
            "  {:<16} {:<20} outstanding {} of {}  EMI {} ({} days)  repaid {}",
            loan.kind.label(),
            loan.lender,
            money(loan.outstanding_amount),
            money(loan.original_amount),
            money(loan.emi_amount),
            loan.days_until_payment(today),
            percent(loan.progress_percent())
        ));
    }
    let summary = loan_summary(loans);
    print_info(&format!(
        "  Borrowed {}  repaid {} ({})  EMI total {}",
        money(summary.total_borrowed),
        money(summary.total_repaid),
        percent(summary.progress_percent),
        money(total_emi(loans))
    ));
}

fn pick(manager: &LedgerManager, prompt: &str) -> CliResult<Option<Uuid>> {
    let loans = &manager.ledger().loans;
    if loans.is_empty() {
        print_info("No loan accounts added yet.");
        return Ok(None);
    }
    let labels: Vec<String> = loans
        .iter()
        .map(|loan| format!("{} - {}", loan.kind.label(), loan.lender))
        .collect();
    Ok(select_from(prompt, &labels)?.map(|index| loans[index].id))
}

fn edit(manager: &mut LedgerManager) -> CliResult<()> {
    let Some(id) = pick(manager, "Edit which loan?")? else {
        return Ok(());
    };
    let Some(current) = manager
        .ledger()
        .loans
        .iter()
        .find(|loan| loan.id == id)
        .cloned()
    else {
        return Ok(());
    };

    let outstanding_amount: Decimal = Input::new()
        .with_prompt("Outstanding amount")
        .default(current.outstanding_amount)
        .interact_text()?;
    let emi_amount: Decimal = Input::new()
        .with_prompt("EMI amount")
        .default(current.emi_amount)
        .interact_text()?;
    let next_payment_date: NaiveDate = Input::new()
        .with_prompt("Next payment date (YYYY-MM-DD)")
        .default(current.next_payment_date)
        .interact_text()?;

    let today = Local::now().date_naive();
    let result = manager.update_loan(id, |loan| {
        loan.outstanding_amount = outstanding_amount;
        loan.emi_amount = emi_amount;
        loan.next_payment_date = next_payment_date;
        loan.last_updated = today;
    });
    match result {
        Ok(()) => print_success("Updated loan details"),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn delete(manager: &mut LedgerManager) -> CliResult<()> {
    let Some(id) = pick(manager, "Delete which loan?")? else {
        return Ok(());
    };
    let confirmed = Confirm::new()
        .with_prompt("Delete this loan?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match manager.remove_loan(id) {
        Ok(removed) => print_success(&format!("Deleted {} loan", removed.kind.label())),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}
