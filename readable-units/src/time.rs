//! Durations - "90 seconds", "12m40s", "1 hour 12 minutes 40 seconds"
//!
//! The radix chain day -> hour -> minute -> second -> millisecond ->
//! microsecond (x24, x60, x60, x1000, x1000) is modelled with three
//! independent exponents per unit: powers of 24, 60 and 1000.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Add;
use std::str::FromStr;
use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use readable_core::{NonZeroNumber, Number, RawValue, ReadableError};
use crate::parse::{parse_readable, Parsed};
use crate::style::HumanReadableStyle;
use crate::unit::{compile_aliases, normalize_unit, radix, Coefficient, UnitArg, UnitKind};

const HOURS_PER_DAY: NonZeroU32 = radix(24);
const SIXTY: NonZeroU32 = radix(60);
const THOUSAND: NonZeroU32 = radix(1000);

/// A time unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
}

/// Matchers indexed by `TimeUnit::index`
static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TimeUnit::ALL
        .iter()
        .map(|unit| compile_aliases(unit.aliases(), true).expect("Invalid time alias regex"))
        .collect()
});

/// One `<number><unit>` component of a composite duration
static COMPOSITE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\s*[a-zA-Z]+").expect("Invalid duration token regex"));

impl TimeUnit {
    /// Every unit, largest first
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Day,
        TimeUnit::Hour,
        TimeUnit::Minute,
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Microsecond,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Power of 1000 below the second
    pub fn thousand_factor(self) -> i32 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Microsecond => 2,
            _ => 0,
        }
    }

    /// Power of 60 below the hour
    pub fn sixty_factor(self) -> i32 {
        match self {
            TimeUnit::Day | TimeUnit::Hour => 0,
            TimeUnit::Minute => 1,
            _ => 2,
        }
    }

    /// Power of 24 below the day
    pub fn day_factor(self) -> i32 {
        match self {
            TimeUnit::Day => 0,
            _ => 1,
        }
    }
}

impl UnitKind for TimeUnit {
    fn try_order() -> &'static [Self] {
        &Self::ALL
    }

    fn catalogue() -> &'static [Self] {
        &Self::ALL
    }

    fn name(self) -> &'static str {
        match self {
            TimeUnit::Day => "days",
            TimeUnit::Hour => "hours",
            TimeUnit::Minute => "minutes",
            TimeUnit::Second => "seconds",
            TimeUnit::Millisecond => "milliseconds",
            TimeUnit::Microsecond => "microseconds",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            TimeUnit::Day => &["d", "day", "days"],
            TimeUnit::Hour => &["h", "hour", "hours"],
            TimeUnit::Minute => &["m", "min", "mins", "minute", "minutes"],
            TimeUnit::Second => &["s", "sec", "secs", "second", "seconds"],
            TimeUnit::Millisecond => &["ms", "msec", "msecs", "millisecond", "milliseconds"],
            TimeUnit::Microsecond => &["us", "usec", "usecs", "microsecond", "microseconds"],
        }
    }

    fn matcher(self) -> &'static Regex {
        &MATCHERS[self.index()]
    }

    fn coefficient(self, to: Self) -> Coefficient {
        Coefficient::power(HOURS_PER_DAY, to.day_factor() - self.day_factor())
            .mul(&Coefficient::power(SIXTY, to.sixty_factor() - self.sixty_factor()))
            .mul(&Coefficient::power(THOUSAND, to.thousand_factor() - self.thousand_factor()))
    }
}

impl From<TimeUnit> for UnitArg<'_, TimeUnit> {
    fn from(unit: TimeUnit) -> Self {
        UnitArg::Unit(unit)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validation bound: readable text or an already parsed value
#[derive(Debug, Clone, Copy)]
pub enum Bound<'a> {
    Text(&'a str),
    Time(&'a Time),
}

impl<'a> From<&'a str> for Bound<'a> {
    fn from(text: &'a str) -> Self {
        Bound::Text(text)
    }
}

impl<'a> From<&'a Time> for Bound<'a> {
    fn from(time: &'a Time) -> Self {
        Bound::Time(time)
    }
}

impl Bound<'_> {
    fn resolve(self) -> Result<Time, ReadableError> {
        match self {
            Bound::Text(text) => Time::new(text, None),
            Bound::Time(time) => Ok(time.clone()),
        }
    }
}

/// A duration parsed from human-readable text
#[derive(Debug, Clone)]
pub struct Time {
    parsed: Parsed<TimeUnit>,
}

impl Time {
    /// Parse a readable duration
    ///
    /// Text holding several `<number><unit>` components is summed; the
    /// result is expressed in the unit of the last component.
    pub fn new<'a>(
        readable_value: impl Into<RawValue>,
        default_unit: Option<UnitArg<'a, TimeUnit>>,
    ) -> Result<Self, ReadableError> {
        let default_unit = default_unit.map(normalize_unit).transpose()?;
        let raw = readable_value.into();

        if let Some(text) = raw.as_text() {
            let tokens: Vec<&str> = COMPOSITE_TOKEN.find_iter(text).map(|m| m.as_str()).collect();
            if tokens.len() > 1 {
                return Self::parse_composite(&tokens, default_unit);
            }
        }

        let parsed = parse_readable(raw, default_unit)?;
        Ok(Time { parsed })
    }

    /// Sum components right to left, accumulator on the left
    fn parse_composite(tokens: &[&str], default_unit: Option<TimeUnit>) -> Result<Self, ReadableError> {
        debug!(components = tokens.len(), "parsing composite duration");

        let mut total: Option<Time> = None;
        for token in tokens.iter().rev() {
            let component = Time {
                parsed: parse_readable(RawValue::from(*token), default_unit)?,
            };
            total = Some(match total {
                None => component,
                Some(sum) => sum.checked_add(&component)?,
            });
        }

        total.ok_or_else(|| ReadableError::parameter("empty composite duration"))
    }

    /// Alias catalogue in lookup order
    pub fn text_units() -> Vec<(TimeUnit, &'static [&'static str])> {
        TimeUnit::ALL.iter().map(|&unit| (unit, unit.aliases())).collect()
    }

    pub fn number(&self) -> &Number {
        self.parsed.number()
    }

    pub fn unit(&self) -> TimeUnit {
        self.parsed.unit()
    }

    pub fn default_unit(&self) -> Option<TimeUnit> {
        self.parsed.default_unit()
    }

    /// Exact magnitude in `unit`
    pub fn convert_to(&self, unit: TimeUnit) -> Number {
        self.parsed.convert_to(unit)
    }

    fn as_f64(&self, unit: TimeUnit) -> f64 {
        self.convert_to(unit).to_f64()
    }

    // ========== Accessors ==========

    pub fn days(&self) -> f64 {
        self.as_f64(TimeUnit::Day)
    }

    pub fn hours(&self) -> f64 {
        self.as_f64(TimeUnit::Hour)
    }

    pub fn minutes(&self) -> f64 {
        self.as_f64(TimeUnit::Minute)
    }

    pub fn seconds(&self) -> f64 {
        self.as_f64(TimeUnit::Second)
    }

    pub fn milliseconds(&self) -> f64 {
        self.as_f64(TimeUnit::Millisecond)
    }

    pub fn microseconds(&self) -> f64 {
        self.as_f64(TimeUnit::Microsecond)
    }

    /// Magnitude in a unit given as a unit value or an alias ("ms")
    pub fn get_as<'a>(&self, unit: impl Into<UnitArg<'a, TimeUnit>>) -> Result<f64, ReadableError> {
        let unit = normalize_unit(unit.into())?;
        Ok(self.as_f64(unit))
    }

    /// Sum expressed in the left operand's unit
    pub fn checked_add(&self, other: &Time) -> Result<Time, ReadableError> {
        let unit = self.unit();
        let sum = self.number().add(&other.convert_to(unit));
        Time::new(sum.to_plain_string(), Some(UnitArg::Unit(unit)))
    }

    /// Check that the value lies in the closed interval `[min, max]`
    pub fn validate<'a>(&self, min: Option<Bound<'a>>, max: Option<Bound<'a>>) -> Result<(), ReadableError> {
        if let Some(min) = min {
            let min = min.resolve()?;
            if *self < min {
                return Err(ReadableError::parameter("time value is too low")
                    .with_expected(format!("greater than or equal to {}", min))
                    .with_value(self.to_string()));
            }
        }

        if let Some(max) = max {
            let max = max.resolve()?;
            if *self > max {
                return Err(ReadableError::parameter("time value is too high")
                    .with_expected(format!("less than or equal to {}", max))
                    .with_value(self.to_string()));
            }
        }

        Ok(())
    }

    /// Break the value down into days, hours, ... microseconds
    pub fn to_humanreadable(&self, style: HumanReadableStyle) -> String {
        let components = [
            (TimeUnit::Day, None),
            (TimeUnit::Hour, Some(HOURS_PER_DAY)),
            (TimeUnit::Minute, Some(SIXTY)),
            (TimeUnit::Second, Some(SIXTY)),
            (TimeUnit::Millisecond, Some(THOUSAND)),
            (TimeUnit::Microsecond, Some(THOUSAND)),
        ];

        let one = Number::from_i64(1);
        let items: Vec<String> = components
            .iter()
            .filter_map(|&(unit, modulus)| {
                let whole = self.convert_to(unit).floor();
                let within = match modulus {
                    Some(m) => wrap(&whole, m),
                    None => whole,
                };
                (within >= one).then(|| format!("{}{}", within, unit_label(unit, style)))
            })
            .collect();

        if items.is_empty() {
            let unit = self.default_unit().unwrap_or_else(|| self.unit());
            return format!("0 {}", unit.name());
        }

        items.join(" ")
    }
}

/// Reduce an integral `value` into `0..modulus`
fn wrap(value: &Number, modulus: NonZeroU32) -> Number {
    let modulus = NonZeroNumber::from(modulus);
    let wraps = value.div_nonzero(&modulus).floor();
    value.sub(&wraps.mul(modulus.get()))
}

fn unit_label(unit: TimeUnit, style: HumanReadableStyle) -> String {
    match style {
        HumanReadableStyle::Full => format!(" {}", unit.name()),
        HumanReadableStyle::Short | HumanReadableStyle::Abbr => unit.name()[..1].to_string(),
    }
}

impl FromStr for Time {
    type Err = ReadableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::new(s, None)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parsed)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        // Compare canonical microsecond values
        self.convert_to(TimeUnit::Microsecond) == other.convert_to(TimeUnit::Microsecond)
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.convert_to(TimeUnit::Microsecond).cmp(&other.convert_to(TimeUnit::Microsecond))
    }
}

impl Add for &Time {
    type Output = Result<Time, ReadableError>;

    fn add(self, other: &Time) -> Self::Output {
        self.checked_add(other)
    }
}

impl Add for Time {
    type Output = Result<Time, ReadableError>;

    fn add(self, other: Time) -> Self::Output {
        self.checked_add(&other)
    }
}
