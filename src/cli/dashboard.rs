//! Read-only overview assembled from the summary aggregations.

use crate::domain::Direction;
use crate::ledger::{
    self, category_totals, loan_summary, monthly_flows, net_worth, portfolio_summary,
    running_balance, total_emi,
};

use super::format::{
    money, percent, print_header, print_info, print_metric, signed_money, utilization_label,
};

const TREND_POINTS: usize = 10;

pub fn show(ledger: &ledger::Ledger) {
    print_header("Financial Dashboard");
    let summary = net_worth(ledger);
    print_metric("Total Bank Balance", &money(summary.bank_balance));
    print_metric("Demat Portfolio Value", &money(summary.demat_value));
    print_metric("Credit Card Debt", &money(summary.credit_debt));
    print_metric("Loan Debt", &money(summary.loan_debt));
    print_metric("Net Worth", &signed_money(summary.net_worth));

    if !ledger.bank_accounts.is_empty() {
        print_header("Bank Accounts");
        for account in &ledger.bank_accounts {
            print_info(&format!(
                "  {:<28} {:<18} {}",
                account.display_ref(),
                account.kind.label(),
                money(account.balance)
            ));
        }
    }

    if !ledger.credit_cards.is_empty() {
        print_header("Credit Utilization");
        for card in &ledger.credit_cards {
            print_info(&format!(
                "  {:<28} used {} of {}  ({})",
                card.display_ref(),
                money(card.outstanding_amount),
                money(card.credit_limit),
                utilization_label(card.utilization_percent(), card.utilization_band()),
            ));
        }
    }

    if !ledger.holdings.is_empty() {
        print_header("Portfolio Performance");
        let portfolio = portfolio_summary(&ledger.holdings);
        print_metric("Total Investment", &money(portfolio.total_investment));
        print_metric("Current Value", &money(portfolio.total_current_value));
        print_metric(
            "Profit/Loss",
            &format!(
                "{} ({})",
                signed_money(portfolio.total_profit_loss),
                percent(portfolio.total_profit_loss_percent)
            ),
        );
    }

    if !ledger.loans.is_empty() {
        print_header("Loan Repayment Progress");
        let loans = loan_summary(&ledger.loans);
        print_metric("Total Borrowed", &money(loans.total_borrowed));
        print_metric("Total Repaid", &money(loans.total_repaid));
        print_metric("Outstanding", &money(loans.total_outstanding));
        print_metric("Progress", &percent(loans.progress_percent));
        print_metric("Monthly EMI Total", &money(total_emi(&ledger.loans)));
    }

    if !ledger.transactions.is_empty() {
        print_header("Account Balance Trend");
        let trend = running_balance(&ledger.transactions);
        for point in trend.iter().rev().take(TREND_POINTS).rev() {
            print_info(&format!("  {}  {}", point.date, signed_money(point.balance)));
        }

        print_header("Monthly Income vs Expense");
        for flow in monthly_flows(&ledger.transactions) {
            print_info(&format!(
                "  {}  in {}  out {}  net {}",
                flow.month,
                money(flow.deposits),
                money(flow.withdrawals),
                signed_money(flow.net())
            ));
        }

        let mut spending = category_totals(&ledger.transactions, Direction::Withdrawal);
        if !spending.is_empty() {
            // Largest categories first.
            spending.sort_by(|a, b| b.total.cmp(&a.total));
            print_header("Spending by Category");
            for entry in spending {
                print_info(&format!("  {:<20} {}", entry.category, money(entry.total)));
            }
        }
    }
    println!();
}
