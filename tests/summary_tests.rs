use chrono::NaiveDate;
use fintrack_core::{
    domain::{AccountKind, BankAccount, CardNetwork, CreditCard, Direction, Loan, LoanKind, Transaction},
    ledger::{monthly_flows, net_worth, running_balance, Ledger, PurchaseOrder},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn account(balance: Decimal) -> BankAccount {
    BankAccount::new(
        "HDFC",
        "1234",
        AccountKind::Savings,
        balance,
        dec!(3.5),
        date(1, 1),
    )
}

fn card(limit: Decimal, outstanding: Decimal) -> CreditCard {
    CreditCard::new(
        "ICICI",
        "9876",
        CardNetwork::Visa,
        limit,
        outstanding,
        date(1, 20),
        date(1, 1),
    )
}

fn loan(original: Decimal, outstanding: Decimal) -> Loan {
    Loan {
        id: Uuid::new_v4(),
        kind: LoanKind::Car,
        lender: "SBI".into(),
        account_number: "5544".into(),
        original_amount: original,
        outstanding_amount: outstanding,
        interest_rate: dec!(9),
        start_date: date(1, 1),
        tenure_months: 60,
        emi_amount: dec!(12000),
        next_payment_date: date(2, 5),
        notes: None,
        last_updated: date(1, 1),
    }
}

#[test]
fn net_worth_is_zero_for_empty_collections() {
    let summary = net_worth(&Ledger::new());
    assert_eq!(summary.bank_balance, Decimal::ZERO);
    assert_eq!(summary.demat_value, Decimal::ZERO);
    assert_eq!(summary.credit_debt, Decimal::ZERO);
    assert_eq!(summary.loan_debt, Decimal::ZERO);
    assert_eq!(summary.net_worth, Decimal::ZERO);
}

#[test]
fn net_worth_is_assets_minus_liabilities() {
    let mut ledger = Ledger::new();
    ledger.add_bank_account(account(dec!(50000))).unwrap();
    ledger.add_bank_account(account(dec!(25000))).unwrap();
    ledger
        .apply_purchase(PurchaseOrder {
            symbol: "INFY".into(),
            name: "Infosys".into(),
            quantity: 10,
            price: dec!(1400),
            current_price: dec!(1500),
            date: date(1, 2),
        })
        .unwrap();
    ledger.add_credit_card(card(dec!(100000), dec!(20000))).unwrap();
    ledger.add_loan(loan(dec!(500000), dec!(300000))).unwrap();

    let summary = net_worth(&ledger);
    assert_eq!(summary.bank_balance, dec!(75000));
    assert_eq!(summary.demat_value, dec!(15000));
    assert_eq!(summary.credit_debt, dec!(20000));
    assert_eq!(summary.loan_debt, dec!(300000));
    assert_eq!(
        summary.net_worth,
        summary.bank_balance + summary.demat_value - summary.credit_debt - summary.loan_debt
    );
    assert_eq!(summary.net_worth, dec!(-230000));
}

#[test]
fn running_balance_accumulates_in_date_order() {
    let transactions = vec![
        Transaction::new(date(1, 1), Direction::Deposit, dec!(100), "Salary", "Cash"),
        Transaction::new(date(1, 2), Direction::Withdrawal, dec!(30), "Food", "Cash"),
        Transaction::new(date(1, 3), Direction::Deposit, dec!(20), "Other", "Cash"),
    ];
    let balances: Vec<Decimal> = running_balance(&transactions)
        .into_iter()
        .map(|point| point.balance)
        .collect();
    assert_eq!(balances, vec![dec!(100), dec!(70), dec!(90)]);
}

#[test]
fn running_balance_sorts_unordered_input_by_date() {
    let transactions = vec![
        Transaction::new(date(1, 3), Direction::Deposit, dec!(20), "Other", "Cash"),
        Transaction::new(date(1, 1), Direction::Deposit, dec!(100), "Salary", "Cash"),
        Transaction::new(date(1, 2), Direction::Withdrawal, dec!(30), "Food", "Cash"),
    ];
    let balances: Vec<Decimal> = running_balance(&transactions)
        .into_iter()
        .map(|point| point.balance)
        .collect();
    assert_eq!(balances, vec![dec!(100), dec!(70), dec!(90)]);
}

#[test]
fn oversized_withdrawal_clamps_linked_balance_to_zero() {
    let mut ledger = Ledger::new();
    let id = ledger.add_bank_account(account(dec!(200))).unwrap();
    let account_ref = ledger.bank_account(id).unwrap().display_ref();
    let txn = Transaction::new(
        date(1, 5),
        Direction::Withdrawal,
        dec!(500),
        "Shopping",
        account_ref,
    );
    ledger.record_transaction(txn).unwrap();
    assert_eq!(ledger.bank_account(id).unwrap().balance, Decimal::ZERO);
    // The transaction itself keeps its full amount.
    assert_eq!(ledger.transactions[0].amount, dec!(500));
}

#[test]
fn linked_deposit_credits_the_account() {
    let mut ledger = Ledger::new();
    let id = ledger.add_bank_account(account(dec!(200))).unwrap();
    let account_ref = ledger.bank_account(id).unwrap().display_ref();
    let txn = Transaction::new(date(1, 5), Direction::Deposit, dec!(300), "Salary", account_ref);
    ledger.record_transaction(txn).unwrap();
    assert_eq!(ledger.bank_account(id).unwrap().balance, dec!(500));
}

#[test]
fn monthly_bucket_nets_deposits_against_withdrawals() {
    let transactions = vec![
        Transaction::new(date(3, 1), Direction::Deposit, dec!(50), "Salary", "Cash"),
        Transaction::new(date(3, 10), Direction::Deposit, dec!(70), "Other", "Cash"),
        Transaction::new(date(3, 15), Direction::Withdrawal, dec!(20), "Food", "Cash"),
        Transaction::new(date(4, 1), Direction::Deposit, dec!(5), "Salary", "Cash"),
    ];
    let flows = monthly_flows(&transactions);
    assert_eq!(flows.len(), 2);
    assert_eq!(flows[0].month, "2024-03");
    assert_eq!(flows[0].deposits, dec!(120));
    assert_eq!(flows[0].withdrawals, dec!(20));
    assert_eq!(flows[0].net(), dec!(100));
    assert_eq!(flows[1].month, "2024-04");
}

#[test]
fn zero_divisors_yield_zero_percentages() {
    assert_eq!(
        card(Decimal::ZERO, dec!(9999)).utilization_percent(),
        Decimal::ZERO
    );
    assert_eq!(
        loan(Decimal::ZERO, Decimal::ZERO).progress_percent(),
        Decimal::ZERO
    );
}
