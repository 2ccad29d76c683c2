use expense_ledger::Record;

const FIXTURE: &str = r#"[
    {"day": 1,  "amount": 15.0,   "category": "grocery"},
    {"day": 11, "amount": 300.0,  "category": "utility-bills"},
    {"day": 12, "amount": 28.0,   "category": "grocery"},
    {"day": 26, "amount": 300.0,  "category": "university"},
    {"day": 28, "amount": 1300.0, "category": "rent"}
]"#;

/// Month of expenses shared by the integration suites.
pub fn month_of_records() -> Vec<Record> {
    serde_json::from_str(FIXTURE).expect("parse record fixture")
}
