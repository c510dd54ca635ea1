//! Output styles for humanreadable rendering

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use readable_core::ReadableError;

/// How unit labels are spelled when a value is rendered back to text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HumanReadableStyle {
    /// Long unit names: "megabits per second", " hours"
    #[default]
    Full,
    /// Short unit names: "Mbps", "h"
    Short,
    /// Same labels as `Short`
    Abbr,
}

impl HumanReadableStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HumanReadableStyle::Full => "full",
            HumanReadableStyle::Short => "short",
            HumanReadableStyle::Abbr => "abbr",
        }
    }
}

impl fmt::Display for HumanReadableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HumanReadableStyle {
    type Err = ReadableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(HumanReadableStyle::Full),
            "short" => Ok(HumanReadableStyle::Short),
            "abbr" => Ok(HumanReadableStyle::Abbr),
            _ => Err(ReadableError::parameter("unknown humanreadable style")
                .with_expected("full, short or abbr")
                .with_value(s)),
        }
    }
}
