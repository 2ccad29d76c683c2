//! Expense queries: record filters, predicate factories, and period totals.

pub mod filters;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod totals;

pub use filters::{by_category, by_days_period, filter};
pub use ledger::ExpenseLedger;
pub use totals::{category_expenses, total_by_period};
