use chrono::NaiveDate;
use fintrack_core::{
    errors::LedgerError,
    ledger::{Ledger, PurchaseOrder},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn order(symbol: &str, quantity: u32, price: Decimal, day: u32) -> PurchaseOrder {
    PurchaseOrder {
        symbol: symbol.into(),
        name: format!("{symbol} Ltd"),
        quantity,
        price,
        current_price: price,
        date: date(day),
    }
}

#[test]
fn repeat_buy_yields_exact_weighted_average() {
    let mut ledger = Ledger::new();
    ledger.apply_purchase(order("INFY", 10, dec!(100), 1)).unwrap();
    let merged = ledger.apply_purchase(order("INFY", 10, dec!(200), 2)).unwrap();

    assert_eq!(merged.quantity, 20);
    assert_eq!(merged.purchase_price, dec!(150));
    assert_eq!(merged.purchase_value(), dec!(3000));
    assert_eq!(ledger.holdings.len(), 1);
}

#[test]
fn merge_is_case_insensitive_on_symbol() {
    let mut ledger = Ledger::new();
    ledger.apply_purchase(order("rel", 5, dec!(80), 1)).unwrap();
    let merged = ledger.apply_purchase(order("REL", 5, dec!(120), 2)).unwrap();

    assert_eq!(ledger.holdings.len(), 1);
    assert_eq!(merged.symbol, "REL");
    assert_eq!(merged.quantity, 10);
    assert_eq!(merged.purchase_price, dec!(100));
}

#[test]
fn different_symbols_never_merge() {
    let mut ledger = Ledger::new();
    ledger.apply_purchase(order("TCS", 3, dec!(3500), 1)).unwrap();
    ledger.apply_purchase(order("WIPRO", 3, dec!(450), 1)).unwrap();
    assert_eq!(ledger.holdings.len(), 2);
}

#[test]
fn merge_takes_latest_date_and_market_price() {
    let mut ledger = Ledger::new();
    ledger.apply_purchase(order("HDFC", 4, dec!(1500), 3)).unwrap();
    let mut second = order("HDFC", 2, dec!(1650), 9);
    second.current_price = dec!(1700);
    let merged = ledger.apply_purchase(second).unwrap();

    assert_eq!(merged.purchase_date, date(9));
    assert_eq!(merged.current_price, dec!(1700));
}

#[test]
fn invalid_purchase_is_rejected_before_any_mutation() {
    let mut ledger = Ledger::new();
    ledger.apply_purchase(order("ITC", 10, dec!(400), 1)).unwrap();

    let err = ledger
        .apply_purchase(order("ITC", 0, dec!(500), 2))
        .expect_err("zero quantity must be rejected");
    assert!(matches!(err, LedgerError::Validation(_)));

    let holding = ledger.holding_by_symbol("ITC").expect("holding survives");
    assert_eq!(holding.quantity, 10);
    assert_eq!(holding.purchase_price, dec!(400));
}

#[test]
fn deleting_a_holding_leaves_the_rest_untouched() {
    let mut ledger = Ledger::new();
    ledger.apply_purchase(order("TCS", 3, dec!(3500), 1)).unwrap();
    let kept = ledger.apply_purchase(order("WIPRO", 8, dec!(450), 1)).unwrap();
    let doomed_id = ledger.holding_by_symbol("TCS").unwrap().id;

    let removed = ledger.remove_holding(doomed_id).expect("remove TCS");
    assert_eq!(removed.symbol, "TCS");
    assert_eq!(ledger.holdings.len(), 1);

    let survivor = ledger.holding_by_symbol("WIPRO").unwrap();
    assert_eq!(survivor.purchase_value(), kept.purchase_value());
    assert_eq!(survivor.current_value(), kept.current_value());
    assert_eq!(survivor.profit_loss(), kept.profit_loss());
}
