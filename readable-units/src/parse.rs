//! Readable-value parsing - split "256 Mbps" into a number and a unit
//!
//! One algorithm serves every domain; the domain only supplies its unit
//! table through [`UnitKind`].

use std::fmt;
use std::sync::LazyLock;
use regex::Regex;
use tracing::{debug, trace};
use readable_core::{Number, RawValue, ReadableError};
use crate::unit::{alias_catalogue, UnitKind};

/// Lenient real-number check: sign, digits, optional point, optional exponent
static REAL_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?\s*$")
        .expect("Invalid real number regex")
});

/// Strict numeric literal accepted as the magnitude of a readable value
static NUMBER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9.]+$").expect("Invalid number literal regex"));

/// A magnitude tagged with the unit it was written in
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<U> {
    number: Number,
    unit: U,
    default_unit: Option<U>,
}

impl<U: UnitKind> Parsed<U> {
    pub fn number(&self) -> &Number {
        &self.number
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    pub fn default_unit(&self) -> Option<U> {
        self.default_unit
    }

    /// Exact magnitude expressed in `to`
    pub fn convert_to(&self, to: U) -> Number {
        self.unit.coefficient(to).apply(&self.number)
    }
}

impl<U: UnitKind> fmt::Display for Parsed<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.name().is_empty() {
            write!(f, "{}", self.number)
        } else {
            write!(f, "{} {}", self.number, self.unit.name())
        }
    }
}

/// Check whether `s` reads as a real number
pub fn is_real_number(s: &str) -> bool {
    REAL_NUMBER.is_match(s)
}

/// Parse a raw readable value into a number and the unit it is expressed in
///
/// Text that is a bare number takes `default_unit`; otherwise the unit is
/// recognized from the end of the text, trying units in the domain's
/// declared order.
pub fn parse_readable<U: UnitKind>(
    raw: RawValue,
    default_unit: Option<U>,
) -> Result<Parsed<U>, ReadableError> {
    let text = raw.to_text().ok_or_else(|| {
        ReadableError::type_condition("readable value must be a string").with_value(raw.to_string())
    })?;

    let (number_str, unit) = split_unit(&text, default_unit)?;
    let number = to_number(number_str)?;

    debug!(value = %text, unit = ?unit, "parsed readable value");

    Ok(Parsed { number, unit, default_unit })
}

fn split_unit<U: UnitKind>(
    text: &str,
    default_unit: Option<U>,
) -> Result<(&str, U), ReadableError> {
    // Surrounding whitespace is tolerated here but not by the strict literal check
    if is_real_number(text.trim()) {
        return match default_unit {
            Some(unit) => Ok((text, unit)),
            None => Err(ReadableError::unit_not_found(text, alias_catalogue::<U>())),
        };
    }

    for &unit in U::try_order() {
        let Some(found) = unit.matcher().find(text) else {
            continue;
        };

        let number = &text[..found.start()];
        if !is_real_number(number) {
            trace!(value = %text, unit = ?unit, prefix = number, "unit alias matched a non-number prefix");
            continue;
        }

        return Ok((number, unit));
    }

    Err(ReadableError::unit_not_found(text, alias_catalogue::<U>()))
}

fn to_number(number_str: &str) -> Result<Number, ReadableError> {
    if !NUMBER_LITERAL.is_match(number_str) {
        return Err(
            ReadableError::parameter("human-readable value should only include a number")
                .with_value(number_str),
        );
    }

    Ok(Number::from_str(number_str)?)
}
