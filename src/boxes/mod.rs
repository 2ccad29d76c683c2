//! Human-readable descriptions of plain and boxed numbers.
//!
//! The shapes a caller can hand over are closed: [`Boxed`] enumerates them and
//! every description is an exhaustive match over it.

use serde::{Deserialize, Serialize};

/// Anything that carries an integer.
pub trait NumberBox {
    fn number(&self) -> i32;
}

/// A number stored as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FancyNumber {
    n: String,
}

impl FancyNumber {
    pub fn new(n: impl Into<String>) -> Self {
        Self { n: n.into() }
    }

    pub fn value(&self) -> &str {
        &self.n
    }
}

/// A box whose contents are text. Only [`FancyBox::Number`] is known to hold a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FancyBox {
    Number(FancyNumber),
    Other(String),
}

impl FancyBox {
    pub fn value(&self) -> &str {
        match self {
            FancyBox::Number(number) => number.value(),
            FancyBox::Other(value) => value,
        }
    }
}

impl From<FancyNumber> for FancyBox {
    fn from(number: FancyNumber) -> Self {
        FancyBox::Number(number)
    }
}

/// Every shape accepted by [`describe_anything`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Boxed {
    Float(f64),
    Int(i64),
    NumberBox(i32),
    Fancy(FancyBox),
    Other,
}

impl NumberBox for i32 {
    fn number(&self) -> i32 {
        *self
    }
}

pub fn describe_number(f: f64) -> String {
    format!("This is the number {:.1}", f)
}

pub fn describe_number_box(nb: &impl NumberBox) -> String {
    format!(
        "This is a box containing the number {:.1}",
        f64::from(nb.number())
    )
}

/// Integer held by a fancy number, or `0` for other boxes and unparseable text.
pub fn extract_fancy_number(fnb: &FancyBox) -> i32 {
    match fnb {
        FancyBox::Number(number) => number.value().parse().unwrap_or(0),
        FancyBox::Other(_) => 0,
    }
}

pub fn describe_fancy_number_box(fnb: &FancyBox) -> String {
    let value = match fnb {
        FancyBox::Number(number) => number.value().parse::<f64>().unwrap_or(0.0),
        FancyBox::Other(_) => 0.0,
    };
    format!("This is a fancy box containing the number {:.1}", value)
}

pub fn describe_anything(item: &Boxed) -> String {
    match item {
        Boxed::Float(f) => describe_number(*f),
        Boxed::Int(i) => describe_number(*i as f64),
        Boxed::NumberBox(n) => describe_number_box(n),
        Boxed::Fancy(fnb) => describe_fancy_number_box(fnb),
        Boxed::Other => "Return to sender".to_string(),
    }
}
