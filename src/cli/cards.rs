use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;

use crate::core::LedgerManager;
use crate::domain::{CardNetwork, CreditCard};

use super::format::{money, print_error, print_header, print_info, print_success, utilization_label};
use super::{select_from, CliResult};

const MENU: [&str; 5] = [
    "Add card",
    "List cards",
    "Edit card",
    "Delete card",
    "Back",
];

pub fn menu(manager: &mut LedgerManager) -> CliResult<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Credit cards")
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

fn prompt_network(current: Option<CardNetwork>) -> CliResult<CardNetwork> {
    let labels: Vec<&str> = CardNetwork::ALL.iter().map(|n| n.label()).collect();
    let default = current
        .and_then(|network| CardNetwork::ALL.iter().position(|n| *n == network))
        .unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Card type")
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(CardNetwork::ALL[choice])
}

fn add(manager: &mut LedgerManager) -> CliResult<()> {
    let issuer: String = Input::new().with_prompt("Card issuer").interact_text()?;
    let card_number: String = Input::new()
        .with_prompt("Card number (last 4 digits)")
        .interact_text()?;
    let network = prompt_network(None)?;
    let credit_limit: Decimal = Input::new().with_prompt("Credit limit").interact_text()?;
    let outstanding: Decimal = Input::new()
        .with_prompt("Outstanding amount")
        .interact_text()?;
    let due_date: NaiveDate = Input::new()
        .with_prompt("Payment due date (YYYY-MM-DD)")
        .interact_text()?;

    let card = CreditCard::new(
        issuer,
        card_number,
        network,
        credit_limit,
        outstanding,
        due_date,
        Local::now().date_naive(),
    );
    let label = card.display_ref();
    match manager.add_credit_card(card) {
        Ok(_) => print_success(&format!("Added {label}")),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn list(manager: &LedgerManager) {
    let cards = &manager.ledger().credit_cards;
    if cards.is_empty() {
        print_info("No credit cards added yet.");
        return;
    }
    print_header("Credit Cards");
    let today = Local::now().date_naive();
    for card in cards {
        print_info(&format!(
            "  {:<26} {:<18} due {} of {}  utilization {}  payment {} ({} days)",
            card.display_ref(),
            card.network.label(),
            money(card.outstanding_amount),
            money(card.credit_limit),
            utilization_label(card.utilization_percent(), card.utilization_band()),
            card.due_date,
            card.days_until_due(today)
        ));
    }
}

fn pick(manager: &LedgerManager, prompt: &str) -> CliResult<Option<uuid::Uuid>> {
    let cards = &manager.ledger().credit_cards;
    if cards.is_empty() {
        print_info("No credit cards added yet.");
        return Ok(None);
    }
    let labels: Vec<String> = cards.iter().map(CreditCard::display_ref).collect();
    Ok(select_from(prompt, &labels)?.map(|index| cards[index].id))
}

fn edit(manager: &mut LedgerManager) -> CliResult<()> {
    let Some(id) = pick(manager, "Edit which card?")? else {
        return Ok(());
    };
    let Some(current) = manager
        .ledger()
        .credit_cards
        .iter()
        .find(|card| card.id == id)
        .cloned()
    else {
        return Ok(());
    };

    let issuer: String = Input::new()
        .with_prompt("Card issuer")
        .default(current.issuer.clone())
        .interact_text()?;
    let network = prompt_network(Some(current.network))?;
    let credit_limit: Decimal = Input::new()
        .with_prompt("Credit limit")
        .default(current.credit_limit)
        .interact_text()?;
    let outstanding: Decimal = Input::new()
        .with_prompt("Outstanding amount")
        .default(current.outstanding_amount)
        .interact_text()?;
    let due_date: NaiveDate = Input::new()
        .with_prompt("Payment due date (YYYY-MM-DD)")
        .default(current.due_date)
        .interact_text()?;

    let today = Local::now().date_naive();
    let result = manager.update_credit_card(id, |card| {
        card.issuer = issuer;
        card.network = network;
        card.credit_limit = credit_limit;
        card.outstanding_amount = outstanding;
        card.due_date = due_date;
        card.last_updated = today;
    });
    match result {
        Ok(()) => print_success("Updated card details"),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn delete(manager: &mut LedgerManager) -> CliResult<()> {
    let Some(id) = pick(manager, "Delete which card?")? else {
        return Ok(());
    };
    let confirmed = Confirm::new()
        .with_prompt("Delete this card?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match manager.remove_credit_card(id) {
        Ok(removed) => print_success(&format!("Deleted {}", removed.display_ref())),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}
