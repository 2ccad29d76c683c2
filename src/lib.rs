#![doc(test(attr(deny(warnings))))]

//! Expense Ledger filters and sums day-stamped, categorized expense records,
//! and ships a small set of helpers describing boxed numbers.

pub mod boxes;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod utils;

pub use domain::{DaysPeriod, Record};
pub use errors::{LedgerError, LedgerResult};
pub use ledger::{
    by_category, by_days_period, category_expenses, filter, total_by_period, ExpenseLedger,
};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
