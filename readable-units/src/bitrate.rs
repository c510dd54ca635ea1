//! Bit rates - "256 Mbps", "2.5 Kibit/s", "10 bits per second"
//!
//! Nine units in two prefix families: decimal (k = 1000) and binary
//! (k = 1024), each scaled by `k^factor`.

use std::cmp::Ordering;
use std::fmt;
use std::num::NonZeroU32;
use std::ops::Add;
use std::str::FromStr;
use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use readable_core::{Number, RawValue, ReadableError};
use crate::parse::{parse_readable, Parsed};
use crate::style::HumanReadableStyle;
use crate::unit::{alias_catalogue, compile_aliases, normalize_unit, radix, Coefficient, UnitArg, UnitKind};

/// "bits/s", "bit per sec", "bits per second", ...
macro_rules! bits_per_second {
    () => {
        r"bits?(/|\s?per\s?)(s|sec|second)"
    };
}

const DECIMAL_K: NonZeroU32 = radix(1000);
const BINARY_K: NonZeroU32 = radix(1024);

/// A bit rate unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitRateUnit {
    Bps,
    Kbps,
    Kibps,
    Mbps,
    Mibps,
    Gbps,
    Gibps,
    Tbps,
    Tibps,
}

/// Try order: prefixed units first so plain "bps" never shadows them
const TRY_ORDER: [BitRateUnit; 9] = [
    BitRateUnit::Kbps,
    BitRateUnit::Kibps,
    BitRateUnit::Mbps,
    BitRateUnit::Mibps,
    BitRateUnit::Gbps,
    BitRateUnit::Gibps,
    BitRateUnit::Tbps,
    BitRateUnit::Tibps,
    BitRateUnit::Bps,
];

/// Matchers indexed by `BitRateUnit::index`
static MATCHERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BitRateUnit::ALL
        .iter()
        .map(|unit| compile_aliases(unit.aliases(), false).expect("Invalid bit rate alias regex"))
        .collect()
});

impl BitRateUnit {
    /// Every unit in declaration order
    pub const ALL: [BitRateUnit; 9] = [
        BitRateUnit::Bps,
        BitRateUnit::Kbps,
        BitRateUnit::Kibps,
        BitRateUnit::Mbps,
        BitRateUnit::Mibps,
        BitRateUnit::Gbps,
        BitRateUnit::Gibps,
        BitRateUnit::Tbps,
        BitRateUnit::Tibps,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Size of one prefix step: 1000 for decimal units, 1024 for binary ones
    pub fn k_size(self) -> NonZeroU32 {
        match self {
            BitRateUnit::Kibps | BitRateUnit::Mibps | BitRateUnit::Gibps | BitRateUnit::Tibps => BINARY_K,
            _ => DECIMAL_K,
        }
    }

    /// Number of prefix steps above plain bits per second
    pub fn factor(self) -> u32 {
        match self {
            BitRateUnit::Bps => 0,
            BitRateUnit::Kbps | BitRateUnit::Kibps => 1,
            BitRateUnit::Mbps | BitRateUnit::Mibps => 2,
            BitRateUnit::Gbps | BitRateUnit::Gibps => 3,
            BitRateUnit::Tbps | BitRateUnit::Tibps => 4,
        }
    }

    /// Long form used by the full humanreadable style
    pub fn full_unit_expr(self) -> &'static str {
        match self {
            BitRateUnit::Bps => "bits per second",
            BitRateUnit::Kbps => "kilobits per second",
            BitRateUnit::Kibps => "kibibits per second",
            BitRateUnit::Mbps => "megabits per second",
            BitRateUnit::Mibps => "mebibits per second",
            BitRateUnit::Gbps => "gigabits per second",
            BitRateUnit::Gibps => "gibibits per second",
            BitRateUnit::Tbps => "terabits per second",
            BitRateUnit::Tibps => "tebibits per second",
        }
    }
}

impl UnitKind for BitRateUnit {
    fn try_order() -> &'static [Self] {
        &TRY_ORDER
    }

    fn catalogue() -> &'static [Self] {
        &TRY_ORDER
    }

    fn name(self) -> &'static str {
        match self {
            BitRateUnit::Bps => "bps",
            BitRateUnit::Kbps => "Kbps",
            BitRateUnit::Kibps => "Kibps",
            BitRateUnit::Mbps => "Mbps",
            BitRateUnit::Mibps => "Mibps",
            BitRateUnit::Gbps => "Gbps",
            BitRateUnit::Gibps => "Gibps",
            BitRateUnit::Tbps => "Tbps",
            BitRateUnit::Tibps => "Tibps",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            BitRateUnit::Bps => &["bps", bits_per_second!()],
            BitRateUnit::Kbps => &["[kK]bps", concat!("[kK]", bits_per_second!())],
            BitRateUnit::Kibps => &["[kK]ibps", concat!("[kK]i", bits_per_second!())],
            BitRateUnit::Mbps => &["[mM]bps", concat!("[mM]", bits_per_second!())],
            BitRateUnit::Mibps => &["[mM]ibps", concat!("[mM]i", bits_per_second!())],
            BitRateUnit::Gbps => &["[gG]bps", concat!("[gG]", bits_per_second!())],
            BitRateUnit::Gibps => &["[gG]ibps", concat!("[gG]i", bits_per_second!())],
            BitRateUnit::Tbps => &["[tT]bps", concat!("[tT]", bits_per_second!())],
            BitRateUnit::Tibps => &["[tT]ibps", concat!("[tT]i", bits_per_second!())],
        }
    }

    fn matcher(self) -> &'static Regex {
        &MATCHERS[self.index()]
    }

    fn coefficient(self, to: Self) -> Coefficient {
        if self.k_size() == to.k_size() {
            Coefficient::power(self.k_size(), self.factor() as i32 - to.factor() as i32)
        } else {
            Coefficient::ratio(self.k_size(), self.factor(), to.k_size(), to.factor())
        }
    }
}

impl From<BitRateUnit> for UnitArg<'_, BitRateUnit> {
    fn from(unit: BitRateUnit) -> Self {
        UnitArg::Unit(unit)
    }
}

impl fmt::Display for BitRateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A bit rate parsed from human-readable text
#[derive(Debug, Clone)]
pub struct BitsPerSecond {
    parsed: Parsed<BitRateUnit>,
}

impl BitsPerSecond {
    /// Parse a readable bit rate
    ///
    /// `default_unit` applies when the text is a bare number.
    pub fn new<'a>(
        readable_value: impl Into<RawValue>,
        default_unit: Option<UnitArg<'a, BitRateUnit>>,
    ) -> Result<Self, ReadableError> {
        let default_unit = default_unit.map(normalize_unit).transpose()?;
        let parsed = parse_readable(readable_value.into(), default_unit)?;
        Ok(BitsPerSecond { parsed })
    }

    /// Alias catalogue in lookup order
    pub fn text_units() -> Vec<(BitRateUnit, &'static [&'static str])> {
        TRY_ORDER.iter().map(|&unit| (unit, unit.aliases())).collect()
    }

    pub fn number(&self) -> &Number {
        self.parsed.number()
    }

    pub fn unit(&self) -> BitRateUnit {
        self.parsed.unit()
    }

    pub fn default_unit(&self) -> Option<BitRateUnit> {
        self.parsed.default_unit()
    }

    /// Exact magnitude in `unit`
    pub fn convert_to(&self, unit: BitRateUnit) -> Number {
        self.parsed.convert_to(unit)
    }

    fn as_f64(&self, unit: BitRateUnit) -> f64 {
        self.convert_to(unit).to_f64()
    }

    // ========== Accessors ==========

    pub fn bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Bps)
    }

    pub fn byte_per_sec(&self) -> f64 {
        self.bps() / 8.0
    }

    pub fn kilo_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Kbps)
    }

    pub fn kilo_byte_per_sec(&self) -> f64 {
        self.kilo_bps() / 8.0
    }

    pub fn kibi_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Kibps)
    }

    pub fn kibi_byte_per_sec(&self) -> f64 {
        self.kibi_bps() / 8.0
    }

    pub fn mega_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Mbps)
    }

    pub fn mega_byte_per_sec(&self) -> f64 {
        self.mega_bps() / 8.0
    }

    pub fn mebi_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Mibps)
    }

    pub fn mebi_byte_per_sec(&self) -> f64 {
        self.mebi_bps() / 8.0
    }

    pub fn giga_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Gbps)
    }

    pub fn giga_byte_per_sec(&self) -> f64 {
        self.giga_bps() / 8.0
    }

    pub fn gibi_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Gibps)
    }

    pub fn gibi_byte_per_sec(&self) -> f64 {
        self.gibi_bps() / 8.0
    }

    pub fn tera_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Tbps)
    }

    pub fn tera_byte_per_sec(&self) -> f64 {
        self.tera_bps() / 8.0
    }

    pub fn tebi_bps(&self) -> f64 {
        self.as_f64(BitRateUnit::Tibps)
    }

    pub fn tebi_byte_per_sec(&self) -> f64 {
        self.tebi_bps() / 8.0
    }

    /// Magnitude in a unit given as a unit value or an alias ("kbps")
    pub fn get_as<'a>(&self, unit: impl Into<UnitArg<'a, BitRateUnit>>) -> Result<f64, ReadableError> {
        let unit = normalize_unit(unit.into())?;
        Ok(self.as_f64(unit))
    }

    /// Sum expressed in the left operand's unit
    pub fn checked_add(&self, other: &BitsPerSecond) -> Result<BitsPerSecond, ReadableError> {
        let unit = self.unit();
        let sum = self.number().add(&other.convert_to(unit));
        BitsPerSecond::new(sum.to_plain_string(), Some(UnitArg::Unit(unit)))
    }

    /// Render with the largest unit of the same prefix family that keeps
    /// the magnitude at or above 1
    pub fn to_humanreadable(&self, style: HumanReadableStyle) -> Result<String, ReadableError> {
        let k_size = self.unit().k_size();
        let mut family: Vec<BitRateUnit> = BitRateUnit::ALL
            .iter()
            .copied()
            .filter(|unit| unit.k_size() == k_size)
            .collect();
        family.sort_by_key(|unit| std::cmp::Reverse(unit.factor()));

        for unit in family {
            let number = self.as_f64(unit);
            if number < 1.0 {
                continue;
            }

            let label = match style {
                HumanReadableStyle::Full => unit.full_unit_expr(),
                HumanReadableStyle::Short | HumanReadableStyle::Abbr => unit.name(),
            };
            debug!(value = %self, unit = %unit, "selected display unit");
            return Ok(format!("{:.1} {}", number, label));
        }

        Err(ReadableError::unit_not_found(self.to_string(), alias_catalogue::<BitRateUnit>()))
    }
}

impl FromStr for BitsPerSecond {
    type Err = ReadableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitsPerSecond::new(s, None)
    }
}

impl fmt::Display for BitsPerSecond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.parsed)
    }
}

impl PartialEq for BitsPerSecond {
    fn eq(&self, other: &Self) -> bool {
        // Compare canonical bps values
        self.convert_to(BitRateUnit::Bps) == other.convert_to(BitRateUnit::Bps)
    }
}

impl Eq for BitsPerSecond {}

impl PartialOrd for BitsPerSecond {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitsPerSecond {
    fn cmp(&self, other: &Self) -> Ordering {
        self.convert_to(BitRateUnit::Bps).cmp(&other.convert_to(BitRateUnit::Bps))
    }
}

impl Add for &BitsPerSecond {
    type Output = Result<BitsPerSecond, ReadableError>;

    fn add(self, other: &BitsPerSecond) -> Self::Output {
        self.checked_add(other)
    }
}

impl Add for BitsPerSecond {
    type Output = Result<BitsPerSecond, ReadableError>;

    fn add(self, other: BitsPerSecond) -> Self::Output {
        self.checked_add(&other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readable_core::ErrorKind;

    fn bps(value: &str) -> BitsPerSecond {
        BitsPerSecond::new(value, None).unwrap()
    }

    const KILO: f64 = 1e3;
    const MEGA: f64 = 1e6;
    const GIGA: f64 = 1e9;
    const TERA: f64 = 1e12;
    const KIBI: f64 = 1024.0;
    const MEBI: f64 = 1024.0 * 1024.0;
    const GIBI: f64 = 1024.0 * 1024.0 * 1024.0;
    const TEBI: f64 = 1024.0 * 1024.0 * 1024.0 * 1024.0;

    #[test]
    fn test_constructor_errors() {
        let cases: [(RawValue, ErrorKind); 12] = [
            ("10".into(), ErrorKind::UnitNotFound),
            (RawValue::Null, ErrorKind::TypeCondition),
            (true.into(), ErrorKind::TypeCondition),
            (f64::NAN.into(), ErrorKind::TypeCondition),
            ("".into(), ErrorKind::UnitNotFound),
            ("a".into(), ErrorKind::UnitNotFound),
            ("1k0 ".into(), ErrorKind::UnitNotFound),
            ("10kb".into(), ErrorKind::UnitNotFound),
            ("-2m".into(), ErrorKind::UnitNotFound),
            ("2m".into(), ErrorKind::UnitNotFound),
            ("2ms".into(), ErrorKind::UnitNotFound),
            ("two Gbps".into(), ErrorKind::UnitNotFound),
        ];
        for (value, kind) in cases {
            let shown = value.to_string();
            let err = BitsPerSecond::new(value, None).unwrap_err();
            assert_eq!(err.kind(), kind, "input {:?}", shown);
        }
    }

    #[test]
    fn test_non_number_prefix_is_parameter_error() {
        let err = BitsPerSecond::new("two Gbps", None).unwrap_err();
        assert!(err.is_parameter_error());

        let err = BitsPerSecond::new("1.2.3 Gbps", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnitNotFound);

        let err = BitsPerSecond::new("1.2.3", Some(BitRateUnit::Gbps.into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnitNotFound);
    }

    #[test]
    fn test_display() {
        assert_eq!(bps("2 Kbps").to_string(), "2 Kbps");
        assert_eq!(bps("+1.25Kbps").to_string(), "1.25 Kbps");
    }

    #[test]
    fn test_eq() {
        assert_eq!(bps("5 bps"), bps("5.0 bit/s"));
        assert_eq!(bps("5.0 bit/s"), bps("5 bits/sec"));
        assert_eq!(bps("60000bps"), bps("60 Kbps"));
        assert_ne!(bps("1 bps"), bps("2 bps"));
        assert_eq!(bps("10 bits per second"), bps("10bps"));
    }

    #[test]
    fn test_add() {
        let sum = (bps("1Kbps") + bps("1 Kbits/sec")).unwrap();
        assert_eq!(sum, bps("2 Kbps"));
        assert_eq!(sum.unit(), BitRateUnit::Kbps);

        let sum = (&bps("1 Kibps") + &bps("1024 bps")).unwrap();
        assert_eq!(sum.to_string(), "2 Kibps");
    }

    #[test]
    fn test_less_than() {
        assert!(bps("20 Gbps") < bps("32Gbps"));
        assert!(bps("20 Gibps") < bps("32Gbps"));
        assert!(bps("20 Gibps") <= bps("32Gbps"));
        assert!(!(bps("40 Gibps") < bps("32Gbps")));
        assert!(bps("40 Gibps") > bps("32Gbps"));
    }

    #[test]
    fn test_bps() {
        let cases = [
            ("2bps", 2.0),
            ("2 bps", 2.0),
            ("2kbps", 2.0 * KILO),
            ("2 Kbps", 2.0 * KILO),
            ("+1.25Kbps", 1.25 * KILO),
            ("2.5 Kibit/s", 2.5 * KIBI),
            ("2Mbps", 2.0 * MEGA),
            ("2 Mbps", 2.0 * MEGA),
            ("2.5 Mibit/s", 2.5 * MEBI),
            ("2Gbps", 2.0 * GIGA),
            ("2 Gbps", 2.0 * GIGA),
            ("2.5 Gibit/s", 2.5 * GIBI),
            ("2Tbps", 2.0 * TERA),
            ("2 Tbps", 2.0 * TERA),
            ("2.5 Tibit/s", 2.5 * TEBI),
        ];
        for (value, expected) in cases {
            let v = bps(value);
            assert_eq!(v.bps(), expected, "input {}", value);
            assert_eq!(v.byte_per_sec(), v.bps() / 8.0);
        }
    }

    #[test]
    fn test_kilo_and_kibi() {
        let kilo = [
            ("2bps", 2.0 / KILO),
            ("2Kbps", 2.0),
            ("2Mbps", 2.0 * KILO),
            ("2Gbps", 2.0 * MEGA),
            ("2Tbps", 2.0 * GIGA),
            ("2Kibps", 2.0 * KIBI / KILO),
            ("2Mibps", 2.0 * MEBI / KILO),
            ("2Gibps", 2.0 * GIBI / KILO),
            ("2Tibps", 2.0 * TEBI / KILO),
        ];
        for (value, expected) in kilo {
            let v = bps(value);
            assert_eq!(v.kilo_bps(), expected, "input {}", value);
            assert_eq!(v.kilo_byte_per_sec(), v.kilo_bps() / 8.0);
        }

        let kibi = [
            ("2Kbps", 2.0 * KILO / KIBI),
            ("2Mbps", 2.0 * MEGA / KIBI),
            ("2Gbps", 2.0 * GIGA / KIBI),
            ("2Tbps", 2.0 * TERA / KIBI),
            ("2Kibps", 2.0),
            ("2Mibps", 2.0 * KIBI),
            ("2Gibps", 2.0 * MEBI),
            ("2Tibps", 2.0 * GIBI),
        ];
        for (value, expected) in kibi {
            let v = bps(value);
            assert_eq!(v.kibi_bps(), expected, "input {}", value);
            assert_eq!(v.kibi_byte_per_sec(), v.kibi_bps() / 8.0);
        }
    }

    #[test]
    fn test_mega_giga_tera() {
        assert_eq!(bps("2bps").mega_bps(), 2e-6);
        assert_eq!(bps("2Gbps").mega_bps(), 2000.0);
        assert_eq!(bps("2Mibps").mega_bps(), 2.0 * MEBI / MEGA);
        assert_eq!(bps("2Kibps").mebi_bps(), 2.0 / KIBI);
        assert_eq!(bps("2Gbps").mebi_bps(), 2.0 * GIGA / MEBI);

        assert_eq!(bps("2Tbps").giga_bps(), 2000.0);
        assert_eq!(bps("2Gibps").giga_bps(), 2.0 * GIBI / GIGA);
        assert_eq!(bps("2Tibps").gibi_bps(), 2048.0);
        assert_eq!(bps("2Tbps").gibi_bps(), 2.0 * TERA / GIBI);

        assert_eq!(bps("2Gbps").tera_bps(), 2e-3);
        assert_eq!(bps("2Tibps").tera_bps(), 2.0 * TEBI / TERA);
        assert_eq!(bps("2Gibps").tebi_bps(), 2.0 / KIBI);
        assert_eq!(bps("2Tbps").tebi_bps(), 2.0 * TERA / TEBI);
        assert_eq!(bps("2Tbps").tebi_byte_per_sec(), bps("2Tbps").tebi_bps() / 8.0);
    }

    #[test]
    fn test_default_unit() {
        let v = BitsPerSecond::new("2", Some(BitRateUnit::Kbps.into())).unwrap();
        assert_eq!(v.kilo_bps(), 2.0);
        let v = BitsPerSecond::new("2", Some("kbps".into())).unwrap();
        assert_eq!(v.kilo_bps(), 2.0);
        let v = BitsPerSecond::new("2", Some(BitRateUnit::Mbps.into())).unwrap();
        assert_eq!(v.kilo_bps(), 2000.0);
        let v = BitsPerSecond::new("2", Some("mbps".into())).unwrap();
        assert_eq!(v.kilo_bps(), 2000.0);
    }

    #[test]
    fn test_unknown_default_unit() {
        let err = BitsPerSecond::new("2", Some("furlongs".into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnitNotFound);
        assert_eq!(err.value(), Some("furlongs"));
    }

    #[test]
    fn test_get_as() {
        let cases: [(&str, UnitArg<'_, BitRateUnit>); 11] = [
            ("2bps", BitRateUnit::Bps.into()),
            ("2Kbps", BitRateUnit::Kbps.into()),
            ("2Kibps", BitRateUnit::Kibps.into()),
            ("2Mbps", BitRateUnit::Mbps.into()),
            ("2Mibps", BitRateUnit::Mibps.into()),
            ("2Gbps", BitRateUnit::Gbps.into()),
            ("2Gbps", "gbps".into()),
            ("2Gibps", BitRateUnit::Gibps.into()),
            ("2Tbps", BitRateUnit::Tbps.into()),
            ("2Tbps", "tbps".into()),
            ("2Tibps", BitRateUnit::Tibps.into()),
        ];
        for (value, unit) in cases {
            let v = BitsPerSecond::new(value, Some(unit)).unwrap();
            assert_eq!(v.get_as(unit).unwrap(), 2.0, "input {}", value);
        }
    }

    #[test]
    fn test_get_as_alias_forms() {
        let v = bps("1 Mbps");
        assert_eq!(v.get_as("Kbit/s").unwrap(), 1000.0);
        assert_eq!(v.get_as("bits per second").unwrap(), 1e6);
        assert!(v.get_as("parsecs").is_err());
    }

    #[test]
    fn test_to_humanreadable() {
        let cases = [
            ("1bps", HumanReadableStyle::Full, "1.0 bits per second"),
            ("100Mbps", HumanReadableStyle::Full, "100.0 megabits per second"),
            ("123456 Mbps", HumanReadableStyle::Full, "123.5 gigabits per second"),
            ("1Gibps", HumanReadableStyle::Full, "1.0 gibibits per second"),
            ("1Gibps", HumanReadableStyle::Short, "1.0 Gibps"),
            ("2048 Kibps", HumanReadableStyle::Abbr, "2.0 Mibps"),
        ];
        for (value, style, expected) in cases {
            assert_eq!(bps(value).to_humanreadable(style).unwrap(), expected);
        }
    }

    #[test]
    fn test_to_humanreadable_below_family_minimum() {
        let err = bps("0.5 Kibps").to_humanreadable(HumanReadableStyle::Full).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnitNotFound);
    }

    #[test]
    fn test_from_str() {
        let v: BitsPerSecond = "256 Mbps".parse().unwrap();
        assert_eq!(v.unit(), BitRateUnit::Mbps);
        assert!("256".parse::<BitsPerSecond>().is_err());
    }

    #[test]
    fn test_coefficients() {
        assert_eq!(
            BitRateUnit::Kibps.coefficient(BitRateUnit::Kbps).apply(&Number::from_i64(2)).to_f64(),
            2.048
        );
        assert_eq!(
            BitRateUnit::Kbps.coefficient(BitRateUnit::Mbps).apply(&Number::from_i64(2)).to_f64(),
            0.002
        );
    }

    #[test]
    fn test_prefix_families() {
        assert_eq!(BitRateUnit::Bps.k_size().get(), 1000);
        assert_eq!(BitRateUnit::Mibps.k_size().get(), 1024);
        assert_eq!(BitRateUnit::Tibps.factor(), 4);
    }

    #[test]
    fn test_text_units() {
        let units = BitsPerSecond::text_units();
        assert_eq!(units.len(), 9);
        assert_eq!(units[0].0, BitRateUnit::Kbps);
        assert_eq!(units[8].0, BitRateUnit::Bps);
        assert_eq!(units[8].1[0], "bps");
    }
}
