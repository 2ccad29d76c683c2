//! Value types describing expense records and the day ranges used to query them.

use serde::{Deserialize, Serialize};

/// One dated, categorized expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub day: i32,
    pub amount: f64,
    pub category: String,
}

impl Record {
    pub fn new(day: i32, amount: f64, category: impl Into<String>) -> Self {
        Self {
            day,
            amount,
            category: category.into(),
        }
    }
}

/// Inclusive range of days. A period whose `from` lies after `to` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysPeriod {
    pub from: i32,
    pub to: i32,
}

impl DaysPeriod {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Returns `true` when `day` lies within both bounds.
    pub fn contains(&self, day: i32) -> bool {
        day >= self.from && day <= self.to
    }

    /// Returns `true` when no day can satisfy the period.
    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}
