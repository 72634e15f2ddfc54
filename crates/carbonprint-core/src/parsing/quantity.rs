use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Quantity assumed when a product's quantity text cannot be read.
pub const DEFAULT_QUANTITY: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUnit {
    Gram,
    Kilogram,
    Millilitre,
    Litre,
}

impl QuantityUnit {
    /// Factor to grams (mass) or millilitres (volume).
    pub fn factor(self) -> Decimal {
        match self {
            QuantityUnit::Gram | QuantityUnit::Millilitre => Decimal::ONE,
            QuantityUnit::Kilogram | QuantityUnit::Litre => Decimal::ONE_THOUSAND,
        }
    }
}

impl fmt::Display for QuantityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantityUnit::Gram => write!(f, "g"),
            QuantityUnit::Kilogram => write!(f, "kg"),
            QuantityUnit::Millilitre => write!(f, "ml"),
            QuantityUnit::Litre => write!(f, "l"),
        }
    }
}

/// Unit tokens in match order. `g` is tried before `kg`, and a token only
/// has to prefix the remaining text.
const UNIT_TOKENS: &[(&str, QuantityUnit)] = &[
    ("g", QuantityUnit::Gram),
    ("kg", QuantityUnit::Kilogram),
    ("ml", QuantityUnit::Millilitre),
    ("l", QuantityUnit::Litre),
];

/// An amount with its unit as written, e.g. "1.5 kg".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity {
    pub amount: Decimal,
    pub unit: QuantityUnit,
}

impl Quantity {
    /// Amount in grams or millilitres, `None` on overflow.
    pub fn normalized(&self) -> Option<Decimal> {
        self.amount.checked_mul(self.unit.factor())
    }
}

/// Find the first "<number> <unit>" occurrence in a free-text quantity.
///
/// Handles formats like:
/// - "500 g" -> 500 g
/// - "1.5kg" -> 1.5 kg
/// - "6 x 330 ml" -> 330 ml
/// - "1,5 l" -> 5 l (the comma is not a decimal separator here)
pub fn parse_quantity(text: &str) -> Option<Quantity> {
    let bytes = text.as_bytes();

    for start in 0..bytes.len() {
        if !bytes[start].is_ascii_digit() {
            continue;
        }

        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        // Optional fraction, only when at least one digit follows the dot
        if end + 1 < bytes.len() && bytes[end] == b'.' && bytes[end + 1].is_ascii_digit() {
            end += 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
        }

        let rest = text[end..].trim_start();
        let Some(unit) = match_unit(rest) else {
            continue;
        };

        // Digit runs too long for a Decimal end the search
        let amount = Decimal::from_str(&text[start..end]).ok()?;
        return Some(Quantity { amount, unit });
    }

    None
}

fn match_unit(rest: &str) -> Option<QuantityUnit> {
    UNIT_TOKENS.iter().find_map(|(token, unit)| {
        let head = rest.get(..token.len())?;
        head.eq_ignore_ascii_case(token).then_some(*unit)
    })
}

/// Normalize a quantity text to grams or millilitres.
///
/// Never fails: text without a recognizable quantity, a zero amount, or an
/// amount too large to represent yields [`DEFAULT_QUANTITY`].
pub fn normalize_quantity(text: &str) -> Decimal {
    match parse_quantity(text).and_then(|q| q.normalized()) {
        Some(value) if value > Decimal::ZERO => value.normalize(),
        Some(_) => {
            tracing::debug!(quantity = text, "non-positive quantity, using default");
            DEFAULT_QUANTITY
        }
        None => {
            tracing::debug!(quantity = text, "unrecognized quantity, using default");
            DEFAULT_QUANTITY
        }
    }
}
