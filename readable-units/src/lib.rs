//! Readable Units - Human-readable magnitudes
//!
//! Parses text such as "256 Mbps" or "1 hour 12 minutes 40 seconds" into a
//! number and a unit, converts exactly between units of the same domain and
//! renders values back to readable text.
//!
//! Domains:
//! - Bit rates (bps, Kbps, Kibps, ... Tibps)
//! - Durations (days, hours, minutes, seconds, milliseconds, microseconds)

mod unit;
mod parse;
mod bitrate;
mod time;
mod style;

pub use unit::{compile_aliases, normalize_unit, Coefficient, UnitArg, UnitKind};
pub use parse::{is_real_number, parse_readable, Parsed};
pub use bitrate::{BitRateUnit, BitsPerSecond};
pub use time::{Bound, Time, TimeUnit};
pub use style::HumanReadableStyle;
