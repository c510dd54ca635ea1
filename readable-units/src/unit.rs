//! Unit abstraction shared by every domain, alias pattern compilation,
//! and exact conversion coefficients

use std::fmt;
use std::num::NonZeroU32;
use regex::{Regex, RegexBuilder};
use readable_core::{NonZeroNumber, Number, ReadableError};

/// A unit of one closed domain (bit rates, durations)
///
/// Implementors are plain `Copy` enums; their alias tables and compiled
/// matchers are process-wide statics.
pub trait UnitKind: Copy + Eq + fmt::Debug + 'static {
    /// Units in the order they are tried against input text.
    /// Longer, more specific aliases come before generic short ones.
    fn try_order() -> &'static [Self];

    /// Units in catalogue order, used for alias lookup and error payloads
    fn catalogue() -> &'static [Self];

    /// Display name ("Kbps", "seconds")
    fn name(self) -> &'static str;

    /// Alias patterns that all denote this unit
    fn aliases(self) -> &'static [&'static str];

    /// Compiled alternation of this unit's aliases, anchored at the end of input
    fn matcher(self) -> &'static Regex;

    /// Multiplier converting a magnitude in `self` into a magnitude in `to`
    fn coefficient(self, to: Self) -> Coefficient;
}

/// A unit given either directly or by one of its aliases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitArg<'a, U> {
    Unit(U),
    Alias(&'a str),
}

impl<'a, U> From<&'a str> for UnitArg<'a, U> {
    fn from(alias: &'a str) -> Self {
        UnitArg::Alias(alias)
    }
}

impl<'a, U> From<&'a String> for UnitArg<'a, U> {
    fn from(alias: &'a String) -> Self {
        UnitArg::Alias(alias.as_str())
    }
}

/// Build one matcher from a unit's alias list
///
/// The result is the alternation of `\s?{alias}$` for every alias, so the
/// unit token must sit at the end of the input.
pub fn compile_aliases(aliases: &[&str], case_insensitive: bool) -> Result<Regex, regex::Error> {
    let pattern = aliases
        .iter()
        .map(|alias| format!(r"\s?{}$", alias))
        .collect::<Vec<_>>()
        .join("|");

    RegexBuilder::new(&pattern)
        .case_insensitive(case_insensitive)
        .build()
}

/// Comma-separated list of every alias of every unit in catalogue order
pub fn alias_catalogue<U: UnitKind>() -> String {
    U::catalogue()
        .iter()
        .map(|unit| unit.aliases().join(", "))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a unit argument to a unit of the domain
///
/// An alias string resolves to the first unit (catalogue order) whose
/// matcher consumes the whole trimmed string.
pub fn normalize_unit<U: UnitKind>(arg: UnitArg<'_, U>) -> Result<U, ReadableError> {
    let alias = match arg {
        UnitArg::Unit(unit) => return Ok(unit),
        UnitArg::Alias(alias) => alias.trim(),
    };

    U::catalogue()
        .iter()
        .copied()
        .find(|unit| unit.matcher().find(alias).is_some_and(|m| m.start() == 0))
        .ok_or_else(|| ReadableError::unit_not_found(alias, alias_catalogue::<U>()))
}

/// Non-zero base for a coefficient, checked when the constant is built
pub const fn radix(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(n) => n,
        None => panic!("coefficient base must be non-zero"),
    }
}

/// Exact conversion factor kept as an integer ratio
///
/// Applying it multiplies by the numerator and divides once by the
/// denominator, so a conversion rounds at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Coefficient {
    numer: Number,
    denom: NonZeroNumber,
}

impl Coefficient {
    pub fn one() -> Self {
        Coefficient {
            numer: Number::from_i64(1),
            denom: NonZeroNumber::one(),
        }
    }

    /// `base^exp`; negative exponents land in the denominator
    pub fn power(base: NonZeroU32, exp: i32) -> Self {
        let magnitude = NonZeroNumber::from(base).pow(exp.unsigned_abs());
        if exp >= 0 {
            Coefficient { numer: magnitude.get().clone(), denom: NonZeroNumber::one() }
        } else {
            Coefficient { numer: Number::from_i64(1), denom: magnitude }
        }
    }

    /// `numer_base^numer_exp / denom_base^denom_exp`
    pub fn ratio(numer_base: NonZeroU32, numer_exp: u32, denom_base: NonZeroU32, denom_exp: u32) -> Self {
        Coefficient {
            numer: NonZeroNumber::from(numer_base).pow(numer_exp).get().clone(),
            denom: NonZeroNumber::from(denom_base).pow(denom_exp),
        }
    }

    pub fn mul(&self, other: &Coefficient) -> Self {
        Coefficient {
            numer: self.numer.mul(&other.numer),
            denom: self.denom.mul(&other.denom),
        }
    }

    pub fn numerator(&self) -> &Number {
        &self.numer
    }

    pub fn denominator(&self) -> &Number {
        self.denom.get()
    }

    /// Scale `value` by this coefficient
    pub fn apply(&self, value: &Number) -> Number {
        let scaled = value.mul(&self.numer);
        if self.denom.is_one() {
            return scaled;
        }
        scaled.div_nonzero(&self.denom)
    }
}
