//! Structured errors for readable-value parsing
//!
//! Every failure carries a human-readable message plus the structured
//! fields a caller needs to react programmatically: the offending value,
//! what was expected, and the catalogue of units that would have matched.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const TYPE_CONDITION: &str = "TYPE_CONDITION";
    pub const UNIT_NOT_FOUND: &str = "UNIT_NOT_FOUND";
    pub const PARAMETER_CONDITION: &str = "PARAMETER_CONDITION";
}

/// Error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input is not string-like (null, boolean, NaN)
    TypeCondition,
    /// No unit alias matched and no usable default unit was supplied
    UnitNotFound,
    /// Malformed numeric literal, or a value outside caller-supplied bounds
    ParameterCondition,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::TypeCondition => codes::TYPE_CONDITION,
            ErrorKind::UnitNotFound => codes::UNIT_NOT_FOUND,
            ErrorKind::ParameterCondition => codes::PARAMETER_CONDITION,
        }
    }
}

/// Structured error returned by every parse, convert and validate call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadableError {
    /// Machine-readable kind
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// The offending value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Description of what was expected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    /// Comma-separated catalogue of recognized unit aliases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_units: Option<String>,
}

impl ReadableError {
    /// Create a new error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            value: None,
            expected: None,
            available_units: None,
        }
    }

    /// Builder: attach the offending value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder: describe the expectation that was violated
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Builder: attach the unit catalogue
    pub fn with_available_units(mut self, units: impl Into<String>) -> Self {
        self.available_units = Some(units.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn type_condition(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeCondition, message)
    }

    pub fn unit_not_found(value: impl Into<String>, available_units: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnitNotFound, "unit not found")
            .with_value(value)
            .with_available_units(available_units)
    }

    pub fn parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParameterCondition, message)
    }

    // ========== Accessors ==========

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    pub fn available_units(&self) -> Option<&str> {
        self.available_units.as_deref()
    }

    /// True for parameter errors, including the unit-not-found specialization
    pub fn is_parameter_error(&self) -> bool {
        matches!(self.kind, ErrorKind::ParameterCondition | ErrorKind::UnitNotFound)
    }

    pub fn is_type_error(&self) -> bool {
        self.kind == ErrorKind::TypeCondition
    }
}

impl std::fmt::Display for ReadableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        let mut extras: Vec<String> = Vec::new();
        if let Some(ref expected) = self.expected {
            extras.push(format!("expected={}", expected));
        }
        if let Some(ref value) = self.value {
            extras.push(format!("value={}", value));
        }
        if let Some(ref units) = self.available_units {
            extras.push(format!("available-units={}", units));
        }

        if !extras.is_empty() {
            write!(f, ": {}", extras.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ReadableError {}

impl From<NumberError> for ReadableError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => {
                Self::parameter("human-readable value should only include a number").with_value(s)
            }
        }
    }
}
