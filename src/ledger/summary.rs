//! Pure aggregations over the ledger collections. Every function here is a
//! read-only pass; empty input yields zeroed or empty output, never an error.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{Direction, Holding, Loan, Transaction};
use crate::ledger::Ledger;

/// The five quantities behind the dashboard's headline metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetWorthSummary {
    pub bank_balance: Decimal,
    pub demat_value: Decimal,
    pub credit_debt: Decimal,
    pub loan_debt: Decimal,
    pub net_worth: Decimal,
}

/// Computes net worth as assets (bank balances + portfolio value) minus
/// liabilities (card outstanding + loan outstanding).
pub fn net_worth(ledger: &Ledger) -> NetWorthSummary {
    let bank_balance: Decimal = ledger
        .bank_accounts
        .iter()
        .map(|account| account.balance)
        .sum();
    let demat_value: Decimal = ledger
        .holdings
        .iter()
        .map(|holding| holding.current_value())
        .sum();
    let credit_debt: Decimal = ledger
        .credit_cards
        .iter()
        .map(|card| card.outstanding_amount)
        .sum();
    let loan_debt: Decimal = ledger.loans.iter().map(|loan| loan.outstanding_amount).sum();
    NetWorthSummary {
        bank_balance,
        demat_value,
        credit_debt,
        loan_debt,
        net_worth: bank_balance + demat_value - credit_debt - loan_debt,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub total_investment: Decimal,
    pub total_current_value: Decimal,
    pub total_profit_loss: Decimal,
    pub total_profit_loss_percent: Decimal,
}

pub fn portfolio_summary(holdings: &[Holding]) -> PortfolioSummary {
    let total_investment: Decimal = holdings.iter().map(Holding::purchase_value).sum();
    let total_current_value: Decimal = holdings.iter().map(Holding::current_value).sum();
    let total_profit_loss = total_current_value - total_investment;
    let total_profit_loss_percent = if total_investment.is_zero() {
        Decimal::ZERO
    } else {
        total_profit_loss / total_investment * Decimal::ONE_HUNDRED
    };
    PortfolioSummary {
        total_investment,
        total_current_value,
        total_profit_loss,
        total_profit_loss_percent,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanSummary {
    pub total_borrowed: Decimal,
    pub total_repaid: Decimal,
    pub total_outstanding: Decimal,
    pub progress_percent: Decimal,
}

pub fn loan_summary(loans: &[Loan]) -> LoanSummary {
    let total_borrowed: Decimal = loans.iter().map(|loan| loan.original_amount).sum();
    let total_outstanding: Decimal = loans.iter().map(|loan| loan.outstanding_amount).sum();
    let total_repaid = total_borrowed - total_outstanding;
    let progress_percent = if total_borrowed.is_zero() {
        Decimal::ZERO
    } else {
        total_repaid / total_borrowed * Decimal::ONE_HUNDRED
    };
    LoanSummary {
        total_borrowed,
        total_repaid,
        total_outstanding,
        progress_percent,
    }
}

pub fn total_emi(loans: &[Loan]) -> Decimal {
    loans.iter().map(|loan| loan.emi_amount).sum()
}

/// One point of the cumulative balance trend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
}

/// Cumulative balance over time: transactions stable-sorted by date
/// ascending (ties keep insertion order), deposits added and withdrawals
/// subtracted into a prefix sum.
pub fn running_balance(transactions: &[Transaction]) -> Vec<BalancePoint> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|txn| txn.date);
    let mut balance = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|txn| {
            balance += txn.signed_amount();
            BalancePoint {
                date: txn.date,
                balance,
            }
        })
        .collect()
}

/// Deposits and withdrawals summed per `YYYY-MM` bucket, in first-seen
/// month order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyFlow {
    pub month: String,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
}

impl MonthlyFlow {
    pub fn net(&self) -> Decimal {
        self.deposits - self.withdrawals
    }
}

pub fn monthly_flows(transactions: &[Transaction]) -> Vec<MonthlyFlow> {
    let mut flows: Vec<MonthlyFlow> = Vec::new();
    for txn in transactions {
        let month = txn.date.format("%Y-%m").to_string();
        let index = match flows.iter().position(|flow| flow.month == month) {
            Some(index) => index,
            None => {
                flows.push(MonthlyFlow {
                    month,
                    deposits: Decimal::ZERO,
                    withdrawals: Decimal::ZERO,
                });
                flows.len() - 1
            }
        };
        let flow = &mut flows[index];
        match txn.direction {
            Direction::Deposit => flow.deposits += txn.amount,
            Direction::Withdrawal => flow.withdrawals += txn.amount,
        }
    }
    flows
}

/// Per-category sum for one direction, in first-seen category order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

pub fn category_totals(transactions: &[Transaction], direction: Direction) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for txn in transactions.iter().filter(|txn| txn.direction == direction) {
        match totals.iter_mut().find(|entry| entry.category == txn.category) {
            Some(entry) => entry.total += txn.amount,
            None => totals.push(CategoryTotal {
                category: txn.category.clone(),
                total: txn.amount,
            }),
        }
    }
    totals
}

/// Optional criteria for the transaction history view; `None` means
/// "no restriction".
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub direction: Option<Direction>,
    pub category: Option<String>,
    pub account: Option<String>,
}

pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &TransactionFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|txn| filter.direction.map_or(true, |dir| txn.direction == dir))
        .filter(|txn| {
            filter
                .category
                .as_ref()
                .map_or(true, |category| &txn.category == category)
        })
        .filter(|txn| {
            filter
                .account
                .as_ref()
                .map_or(true, |account| &txn.account == account)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn holding(symbol: &str, quantity: u32, purchase: Decimal, current: Decimal) -> Holding {
        Holding::new(
            symbol,
            format!("{symbol} Ltd"),
            quantity,
            purchase,
            current,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
    }

    fn loan(original: Decimal, outstanding: Decimal, emi: Decimal) -> Loan {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Loan {
            id: Uuid::new_v4(),
            kind: crate::domain::LoanKind::Personal,
            lender: "SBI".into(),
            account_number: "5544".into(),
            original_amount: original,
            outstanding_amount: outstanding,
            interest_rate: dec!(9),
            start_date: date,
            tenure_months: 36,
            emi_amount: emi,
            next_payment_date: NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            notes: None,
            last_updated: date,
        }
    }

    fn txn(day: u32, direction: Direction, amount: Decimal, category: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            direction,
            amount,
            category,
            "Cash",
        )
    }

    #[test]
    fn portfolio_summary_totals_a_mixed_book() {
        let holdings = vec![
            holding("INFY", 10, dec!(1400), dec!(1500)),
            holding("TCS", 2, dec!(3500), dec!(3000)),
        ];
        let summary = portfolio_summary(&holdings);
        assert_eq!(summary.total_investment, dec!(21000));
        assert_eq!(summary.total_current_value, dec!(21000));
        assert_eq!(summary.total_profit_loss, Decimal::ZERO);
        assert_eq!(summary.total_profit_loss_percent, Decimal::ZERO);

        let gains = portfolio_summary(&holdings[..1]);
        assert_eq!(gains.total_profit_loss, dec!(1000));
        assert_eq!(
            gains.total_profit_loss_percent,
            dec!(1000) / dec!(14000) * Decimal::ONE_HUNDRED
        );
    }

    #[test]
    fn portfolio_summary_of_nothing_is_all_zero() {
        let summary = portfolio_summary(&[]);
        assert_eq!(summary.total_investment, Decimal::ZERO);
        assert_eq!(summary.total_current_value, Decimal::ZERO);
        assert_eq!(summary.total_profit_loss, Decimal::ZERO);
        assert_eq!(summary.total_profit_loss_percent, Decimal::ZERO);
    }

    #[test]
    fn loan_summary_totals_progress_across_loans() {
        let loans = vec![
            loan(dec!(500000), dec!(300000), dec!(12000)),
            loan(dec!(100000), dec!(0), dec!(5000)),
        ];
        let summary = loan_summary(&loans);
        assert_eq!(summary.total_borrowed, dec!(600000));
        assert_eq!(summary.total_outstanding, dec!(300000));
        assert_eq!(summary.total_repaid, dec!(300000));
        assert_eq!(summary.progress_percent, dec!(50));
        assert_eq!(total_emi(&loans), dec!(17000));
    }

    #[test]
    fn loan_summary_of_nothing_is_all_zero() {
        let summary = loan_summary(&[]);
        assert_eq!(summary.total_borrowed, Decimal::ZERO);
        assert_eq!(summary.total_repaid, Decimal::ZERO);
        assert_eq!(summary.total_outstanding, Decimal::ZERO);
        assert_eq!(summary.progress_percent, Decimal::ZERO);
    }

    #[test]
    fn running_balance_is_empty_for_no_transactions() {
        assert!(running_balance(&[]).is_empty());
    }

    #[test]
    fn running_balance_keeps_insertion_order_for_same_date() {
        let transactions = vec![
            txn(1, Direction::Deposit, dec!(10), "A"),
            txn(1, Direction::Withdrawal, dec!(4), "B"),
        ];
        let points = running_balance(&transactions);
        assert_eq!(points[0].balance, dec!(10));
        assert_eq!(points[1].balance, dec!(6));
    }

    #[test]
    fn category_totals_preserve_first_seen_order() {
        let transactions = vec![
            txn(1, Direction::Withdrawal, dec!(30), "Food"),
            txn(2, Direction::Withdrawal, dec!(10), "Transport"),
            txn(3, Direction::Withdrawal, dec!(20), "Food"),
            txn(4, Direction::Deposit, dec!(99), "Salary"),
        ];
        let totals = category_totals(&transactions, Direction::Withdrawal);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Food");
        assert_eq!(totals[0].total, dec!(50));
        assert_eq!(totals[1].category, "Transport");
    }

    #[test]
    fn filter_matches_all_set_criteria() {
        let transactions = vec![
            txn(1, Direction::Deposit, dec!(10), "Salary"),
            txn(2, Direction::Withdrawal, dec!(5), "Food"),
        ];
        let filter = TransactionFilter {
            direction: Some(Direction::Withdrawal),
            category: Some("Food".into()),
            account: None,
        };
        let matched = filter_transactions(&transactions, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category, "Food");
    }
}
