use tracing::{debug, warn};

use crate::domain::{DaysPeriod, Record};
use crate::ledger::ExpenseLedger;

use super::{ServiceError, ServiceResult};

pub struct ExpenseService;

impl ExpenseService {
    pub fn total_by_period(records: &[Record], period: DaysPeriod) -> f64 {
        let total = ExpenseLedger::new(records).total_by_period(period);
        debug!(from = period.from, to = period.to, total, "computed period total");
        total
    }

    pub fn category_expenses(
        records: &[Record],
        period: DaysPeriod,
        category: &str,
    ) -> ServiceResult<f64> {
        match ExpenseLedger::new(records).category_expenses(period, category) {
            Ok(total) => {
                debug!(
                    category,
                    from = period.from,
                    to = period.to,
                    total,
                    "computed category total"
                );
                Ok(total)
            }
            Err(err) => {
                warn!(
                    category,
                    records = records.len(),
                    "category not present in records"
                );
                Err(ServiceError::from(err))
            }
        }
    }

    /// Per-category totals inside `period`, one entry per category in first-seen order.
    pub fn category_breakdown(records: &[Record], period: DaysPeriod) -> Vec<(String, f64)> {
        let ledger = ExpenseLedger::new(records);
        let in_period = ledger.in_period(period);
        let breakdown: Vec<(String, f64)> = ledger
            .categories()
            .into_iter()
            .map(|category| {
                let total = in_period
                    .iter()
                    .filter(|record| record.category == category)
                    .fold(0.0, |total, record| total + record.amount);
                (category.to_string(), total)
            })
            .collect();
        debug!(
            categories = breakdown.len(),
            from = period.from,
            to = period.to,
            "computed category breakdown"
        );
        breakdown
    }
}
