//! Single-pass aggregation over record slices.
//!
//! Amounts are accumulated strictly in input order so that floating-point
//! totals are reproducible across calls.

use crate::domain::{DaysPeriod, Record};
use crate::errors::{LedgerError, LedgerResult};

/// Sums the amounts of every record whose day falls inside `period`.
pub fn total_by_period(records: &[Record], period: DaysPeriod) -> f64 {
    records
        .iter()
        .filter(|record| period.contains(record.day))
        .fold(0.0, |total, record| total + record.amount)
}

/// Sums the amounts of records in `category` that fall inside `period`.
///
/// Fails with [`LedgerError::UnknownCategory`] when no record at all, regardless
/// of day, belongs to `category`. A known category with nothing inside the
/// period yields `Ok(0.0)`.
pub fn category_expenses(
    records: &[Record],
    period: DaysPeriod,
    category: &str,
) -> LedgerResult<f64> {
    let mut has_category = false;
    let mut total = 0.0;
    for record in records.iter().filter(|record| record.category == category) {
        has_category = true;
        if period.contains(record.day) {
            total += record.amount;
        }
    }

    if !has_category {
        return Err(LedgerError::UnknownCategory(category.to_string()));
    }
    Ok(total)
}
