use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use rust_decimal::Decimal;

use crate::core::LedgerManager;
use crate::ledger::{portfolio_summary, PurchaseOrder};

use super::format::{money, percent, print_error, print_header, print_info, print_success};
use super::{select_from, CliResult};

const MENU: [&str; 5] = [
    "Record purchase",
    "List holdings",
    "Update prices",
    "Delete holding",
    "Back",
];

pub fn menu(manager: &mut LedgerManager) -> CliResult<()> {
    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Demat holdings")
            .items(&MENU)
            .default(0)
            .interact()?;
        match choice {
            0 => record_purchase(manager)?,
            1 => list(manager),
            2 => update_prices(manager)?,
            3 => delete(manager)?,
            _ => return Ok(()),
        }
    }
}

/// A repeat buy of an existing symbol merges into the holding with a
/// weighted-average price instead of creating a duplicate row.
fn record_purchase(manager: &mut LedgerManager) -> CliResult<()> {
    let symbol: String = Input::new()
        .with_prompt("Stock symbol (e.g. RELIANCE)")
        .interact_text()?;
    let name: String = Input::new()
        .with_prompt("Stock name (e.g. Reliance Industries Ltd)")
        .interact_text()?;
    let quantity: u32 = Input::new()
        .with_prompt("Quantity (number of shares)")
        .interact_text()?;
    let price: Decimal = Input::new()
        .with_prompt("Purchase price (per share)")
        .interact_text()?;
    let current_price: Decimal = Input::new()
        .with_prompt("Current market price (per share)")
        .interact_text()?;
    let date: NaiveDate = Input::new()
        .with_prompt("Purchase date (YYYY-MM-DD)")
        .default(Local::now().date_naive())
        .interact_text()?;

    match manager.apply_purchase(PurchaseOrder {
        symbol,
        name,
        quantity,
        price,
        current_price,
        date,
    }) {
        Ok(holding) => print_success(&format!(
            "{}: {} shares at avg {}",
            holding.symbol,
            holding.quantity,
            money(holding.purchase_price)
        )),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}

fn list(manager: &LedgerManager) {
    let holdings = &manager.ledger().holdings;
    if holdings.is_empty() {
        print_info("No stock holdings added yet.");
        return;
    }
    print_header("Your Stock Holdings");
    for holding in holdings {
        print_info(&format!(
            "  {:<10} {:<28} {:>6} sh  avg {}  now {}  P/L {} ({})",
            holding.symbol,
            holding.name,
            holding.quantity,
            money(holding.purchase_price),
            money(holding.current_price),
            money(holding.profit_loss()),
            percent(holding.profit_loss_percent())
        ));
    }
    let summary = portfolio_summary(holdings);
    print_info(&format!(
        "  Invested {}  current {}  P/L {} ({})",
        money(summary.total_investment),
        money(summary.total_current_value),
        money(summary.total_profit_loss),
        percent(summary.total_profit_loss_percent)
    ));
}

fn update_prices(manager: &mut LedgerManager) -> CliResult<()> {
    let holdings = manager.ledger().holdings.clone();
    if holdings.is_empty() {
        print_info("No stock holdings added yet.");
        return Ok(());
    }
    let today = Local::now().date_naive();
    for holding in holdings {
        let price: Decimal = Input::new()
            .with_prompt(format!(
                "Current price for {} ({})",
                holding.symbol, holding.name
            ))
            .default(holding.current_price)
            .interact_text()?;
        if let Err(err) = manager.update_price(&holding.symbol, price, today) {
            print_error(&err.to_string());
        }
    }
    print_success("Updated holding prices");
    Ok(())
}

fn delete(manager: &mut LedgerManager) -> CliResult<()> {
    let holdings = &manager.ledger().holdings;
    if holdings.is_empty() {
        print_info("No stock holdings added yet.");
        return Ok(());
    }
    let labels: Vec<String> = holdings
        .iter()
        .map(|holding| format!("{} ({})", holding.name, holding.symbol))
        .collect();
    let Some(index) = select_from("Delete which holding?", &labels)? else {
        return Ok(());
    };
    let id = holdings[index].id;
    let confirmed = Confirm::new()
        .with_prompt("Delete this holding?")
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }
    match manager.remove_holding(id) {
        Ok(removed) => print_success(&format!("Deleted {}", removed.symbol)),
        Err(err) => print_error(&err.to_string()),
    }
    Ok(())
}
