pub mod record;

pub use record::{DaysPeriod, Record};
