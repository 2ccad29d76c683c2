mod common;

use expense_ledger::{
    by_category, by_days_period, category_expenses, filter, total_by_period, DaysPeriod,
    ExpenseLedger, LedgerError, Record,
};
use proptest::prelude::*;

use common::month_of_records;

#[test]
fn filter_by_days_period_selects_inclusive_range() {
    let records = month_of_records();
    let selected = filter(&records, by_days_period(DaysPeriod::new(1, 11)));
    assert_eq!(
        selected,
        vec![
            Record::new(1, 15.0, "grocery"),
            Record::new(11, 300.0, "utility-bills"),
        ]
    );
}

#[test]
fn filter_by_category_keeps_order() {
    let records = month_of_records();
    let days: Vec<i32> = filter(&records, by_category("grocery"))
        .iter()
        .map(|record| record.day)
        .collect();
    assert_eq!(days, vec![1, 12]);
}

#[test]
fn filter_with_no_match_is_empty_not_absent() {
    let records = month_of_records();
    assert_eq!(filter(&records, by_category("travel")), Vec::<Record>::new());
}

#[test]
fn total_by_period_sums_in_range_only() {
    let records = vec![Record::new(1, 10.0, "food"), Record::new(20, 5.0, "food")];
    assert_eq!(total_by_period(&records, DaysPeriod::new(1, 1)), 10.0);
    assert_eq!(total_by_period(&month_of_records(), DaysPeriod::new(1, 31)), 1943.0);
}

#[test]
fn category_expenses_distinguishes_unknown_from_empty() {
    let records = vec![Record::new(1, 10.0, "food")];
    assert_eq!(
        category_expenses(&records, DaysPeriod::new(5, 10), "food"),
        Ok(0.0)
    );
    assert_eq!(
        category_expenses(&records, DaysPeriod::new(5, 10), "entertainment"),
        Err(LedgerError::UnknownCategory("entertainment".into()))
    );
}

#[test]
fn category_expenses_ignores_period_when_checking_existence() {
    let records = month_of_records();
    let total = category_expenses(&records, DaysPeriod::new(1, 5), "rent")
        .expect("rent exists on day 28");
    assert_eq!(total, 0.0);
}

#[test]
fn repeated_queries_are_identical() {
    let records = month_of_records();
    let ledger = ExpenseLedger::new(&records);
    let period = DaysPeriod::new(10, 27);
    assert_eq!(ledger.total_by_period(period), ledger.total_by_period(period));
    assert_eq!(
        ledger.category_expenses(period, "grocery"),
        ledger.category_expenses(period, "grocery")
    );
    assert_eq!(ledger.in_period(period), ledger.in_period(period));
}

fn arb_record() -> impl Strategy<Value = Record> {
    (
        -5i32..40,
        0.0f64..1_000.0,
        prop::sample::select(vec!["food", "rent", "travel", "Food"]),
    )
        .prop_map(|(day, amount, category)| Record::new(day, amount, category))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: filtering yields a subsequence of the input made only of matching records.
    #[test]
    fn filter_returns_ordered_matching_subsequence(
        records in prop::collection::vec(arb_record(), 0..50),
        from in -5i32..40,
        to in -5i32..40,
    ) {
        let period = DaysPeriod::new(from, to);
        let predicate = by_days_period(period);
        let selected = filter(&records, predicate.clone());

        prop_assert!(selected.len() <= records.len());
        prop_assert!(selected.iter().all(|record| predicate(record)));

        let mut remaining = records.iter();
        for record in &selected {
            prop_assert!(remaining.any(|candidate| candidate == record));
        }
    }

    /// Property: the period total equals an in-order sum over the filtered records.
    #[test]
    fn total_matches_filtered_sum(
        records in prop::collection::vec(arb_record(), 0..50),
        from in -5i32..40,
        to in -5i32..40,
    ) {
        let period = DaysPeriod::new(from, to);
        let expected = filter(&records, by_days_period(period))
            .iter()
            .fold(0.0, |total, record| total + record.amount);
        prop_assert_eq!(total_by_period(&records, period), expected);
    }

    /// Property: an inverted period never selects anything.
    #[test]
    fn inverted_period_is_always_empty(
        records in prop::collection::vec(arb_record(), 0..50),
        to in -5i32..39,
        gap in 1i32..10,
    ) {
        let period = DaysPeriod::new(to + gap, to);
        prop_assert!(filter(&records, by_days_period(period)).is_empty());
        prop_assert_eq!(total_by_period(&records, period), 0.0);
    }
}
