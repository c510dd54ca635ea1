//! One conversion request, shared by the one-shot commands and `serve`

use serde::{Deserialize, Serialize};
use tracing::debug;
use readable_core::{Number, RawValue, ReadableError};
use readable_units::{BitsPerSecond, Bound, HumanReadableStyle, Time, UnitArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Bps,
    Time,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub domain: Domain,
    #[serde(default)]
    pub value: RawValue,
    #[serde(default)]
    pub default_unit: Option<String>,
    #[serde(default, rename = "as")]
    pub as_unit: Option<String>,
    #[serde(default)]
    pub style: HumanReadableStyle,
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
}

/// Outcome of a successful request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Parsed value as "{number} {unit}"
    pub value: String,
    pub number: Number,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humanreadable: Option<String>,
}

impl Conversion {
    /// Plain-text form: the converted magnitude if one was asked for
    pub fn render(&self) -> String {
        match (&self.converted, &self.humanreadable) {
            (Some(converted), _) => converted.to_string(),
            (None, Some(text)) => text.clone(),
            (None, None) => self.value.clone(),
        }
    }
}

pub fn handle(request: &Request) -> Result<Conversion, ReadableError> {
    debug!(domain = ?request.domain, value = %request.value, "handling request");

    let default_unit = request.default_unit.as_deref();
    match request.domain {
        Domain::Bps => {
            if request.min.is_some() || request.max.is_some() {
                return Err(ReadableError::parameter("bounds are only supported for durations")
                    .with_value("bps"));
            }

            let value = BitsPerSecond::new(request.value.clone(), default_unit.map(UnitArg::Alias))?;
            let converted = request.as_unit.as_deref().map(|unit| value.get_as(unit)).transpose()?;
            let humanreadable = match converted {
                Some(_) => None,
                None => Some(value.to_humanreadable(request.style)?),
            };

            Ok(Conversion {
                value: value.to_string(),
                number: value.number().clone(),
                unit: value.unit().to_string(),
                converted,
                humanreadable,
            })
        }
        Domain::Time => {
            let value = Time::new(request.value.clone(), default_unit.map(UnitArg::Alias))?;
            value.validate(
                request.min.as_deref().map(Bound::from),
                request.max.as_deref().map(Bound::from),
            )?;

            let converted = request.as_unit.as_deref().map(|unit| value.get_as(unit)).transpose()?;
            let humanreadable = match converted {
                Some(_) => None,
                None => Some(value.to_humanreadable(request.style)),
            };

            Ok(Conversion {
                value: value.to_string(),
                number: value.number().clone(),
                unit: value.unit().to_string(),
                converted,
                humanreadable,
            })
        }
    }
}
