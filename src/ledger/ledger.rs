use crate::domain::{DaysPeriod, Record};
use crate::errors::LedgerResult;

use super::filters::{by_category, by_days_period, filter};
use super::totals::{category_expenses, total_by_period};

/// Read-only view answering expense queries over a borrowed record slice.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseLedger<'a> {
    records: &'a [Record],
}

impl<'a> ExpenseLedger<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &'a [Record] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category names in the order they first appear.
    pub fn categories(&self) -> Vec<&'a str> {
        let mut seen: Vec<&'a str> = Vec::new();
        for record in self.records {
            if !seen.contains(&record.category.as_str()) {
                seen.push(&record.category);
            }
        }
        seen
    }

    pub fn filter<P>(&self, predicate: P) -> Vec<Record>
    where
        P: Fn(&Record) -> bool,
    {
        filter(self.records, predicate)
    }

    pub fn in_period(&self, period: DaysPeriod) -> Vec<Record> {
        self.filter(by_days_period(period))
    }

    pub fn in_category(&self, category: &str) -> Vec<Record> {
        self.filter(by_category(category))
    }

    pub fn total_by_period(&self, period: DaysPeriod) -> f64 {
        total_by_period(self.records, period)
    }

    pub fn category_expenses(&self, period: DaysPeriod, category: &str) -> LedgerResult<f64> {
        category_expenses(self.records, period, category)
    }
}

impl<'a> From<&'a [Record]> for ExpenseLedger<'a> {
    fn from(records: &'a [Record]) -> Self {
        Self::new(records)
    }
}

impl<'a> From<&'a Vec<Record>> for ExpenseLedger<'a> {
    fn from(records: &'a Vec<Record>) -> Self {
        Self::new(records.as_slice())
    }
}
