//! Variable (column) definitions.

use serde::Serialize;

/// Variable storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum XptType {
    /// Numeric variable (IBM floating point, 1-8 bytes).
    #[serde(rename = "Numeric")]
    Num,
    /// Character variable (single-byte text, 1-200 bytes).
    #[serde(rename = "Character")]
    Char,
}

impl XptType {
    /// Map a NAMESTR type code (1=NUMERIC, 2=CHAR) to a type.
    #[must_use]
    pub fn from_ntype(ntype: i16) -> Option<Self> {
        match ntype {
            1 => Some(Self::Num),
            2 => Some(Self::Char),
            _ => None,
        }
    }

    /// Maximum declared byte length for this type.
    #[must_use]
    pub const fn max_length(self) -> u16 {
        match self {
            Self::Num => 8,
            Self::Char => 200,
        }
    }
}

impl std::fmt::Display for XptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Num => write!(f, "Numeric"),
            Self::Char => write!(f, "Character"),
        }
    }
}

/// A variable parsed from a NAMESTR record.
///
/// Column order within a dataset is significant: it declares the row byte
/// layout left to right and the display column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XptColumn {
    /// Variable name (8 characters maximum, trailing spaces trimmed).
    pub name: String,
    /// Variable label (40 characters maximum).
    pub label: Option<String>,
    /// Storage type.
    #[serde(rename = "type")]
    pub data_type: XptType,
    /// Declared byte length within an observation row.
    #[serde(rename = "byteLength")]
    pub length: u16,
    /// Declared byte offset within an observation row.
    #[serde(rename = "byteOffset")]
    pub position: usize,
}

impl XptColumn {
    /// Create a numeric column with the full 8-byte length.
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            data_type: XptType::Num,
            length: 8,
            position: 0,
        }
    }

    /// Create a character column with the given length.
    pub fn character(name: impl Into<String>, length: u16) -> Self {
        Self {
            name: name.into(),
            label: None,
            data_type: XptType::Char,
            length,
            position: 0,
        }
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the declared byte length.
    #[must_use]
    pub fn with_length(mut self, length: u16) -> Self {
        self.length = length;
        self
    }
}
