//! The ledger value owning the five record collections, plus the pure
//! aggregation functions computed over them.

pub mod book;
pub mod summary;

pub use book::{Ledger, PurchaseOrder};
pub use summary::{
    category_totals, filter_transactions, loan_summary, monthly_flows, net_worth,
    portfolio_summary, running_balance, total_emi, BalancePoint, CategoryTotal, LoanSummary,
    MonthlyFlow, NetWorthSummary, PortfolioSummary, TransactionFilter,
};
