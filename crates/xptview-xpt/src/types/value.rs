//! Decoded cell values.

use serde::{Serialize, Serializer};

use super::MissingValue;

/// A decoded numeric cell: a finite double or a missing value.
///
/// IBM floats cannot encode NaN or infinity, so a present value is always
/// finite. Missing values serialize as JSON null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// A present, finite value.
    Value(f64),
    /// A SAS missing value.
    Missing(MissingValue),
}

impl NumericValue {
    /// True if this is a missing value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    /// True if a value is present.
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The numeric value, if present.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(*v),
            Self::Missing(_) => None,
        }
    }

    /// The missing-value code, if missing.
    #[must_use]
    pub fn missing_type(&self) -> Option<MissingValue> {
        match self {
            Self::Value(_) => None,
            Self::Missing(m) => Some(*m),
        }
    }
}

impl Serialize for NumericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_f64(*v),
            Self::Missing(_) => serializer.serialize_none(),
        }
    }
}

/// A decoded cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum XptValue {
    /// Character value with trailing padding stripped.
    Char(String),
    /// Numeric value or missing.
    Num(NumericValue),
}

impl XptValue {
    /// Create a character value.
    pub fn character(value: impl Into<String>) -> Self {
        Self::Char(value.into())
    }

    /// Create a present numeric value.
    #[must_use]
    pub fn numeric(value: f64) -> Self {
        Self::Num(NumericValue::Value(value))
    }

    /// Create a standard missing numeric value.
    #[must_use]
    pub fn numeric_missing() -> Self {
        Self::Num(NumericValue::Missing(MissingValue::Standard))
    }

    /// Create a missing numeric value with a specific code.
    #[must_use]
    pub fn numeric_missing_with(missing: MissingValue) -> Self {
        Self::Num(NumericValue::Missing(missing))
    }

    /// True if this is a missing numeric value.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Num(n) if n.is_missing())
    }

    /// The numeric value, if this is a present numeric cell.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => n.value(),
            Self::Char(_) => None,
        }
    }

    /// The character value, if this is a character cell.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Char(s) => Some(s),
            Self::Num(_) => None,
        }
    }
}

impl Serialize for XptValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Char(s) => serializer.serialize_str(s),
            Self::Num(n) => n.serialize(serializer),
        }
    }
}
