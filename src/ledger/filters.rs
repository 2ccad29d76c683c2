//! Record selection: a generic filter plus predicate factories.

use crate::domain::{DaysPeriod, Record};

/// Returns the records accepted by `predicate`, preserving their order.
pub fn filter<P>(records: &[Record], predicate: P) -> Vec<Record>
where
    P: Fn(&Record) -> bool,
{
    records
        .iter()
        .filter(|&record| predicate(record))
        .cloned()
        .collect()
}

/// Builds a predicate accepting records whose day falls inside `period`.
pub fn by_days_period(period: DaysPeriod) -> impl Fn(&Record) -> bool + Clone + Send + Sync {
    move |record| period.contains(record.day)
}

/// Builds a predicate accepting records in exactly `category` (case-sensitive).
pub fn by_category(
    category: impl Into<String>,
) -> impl Fn(&Record) -> bool + Clone + Send + Sync {
    let category = category.into();
    move |record| record.category == category
}
