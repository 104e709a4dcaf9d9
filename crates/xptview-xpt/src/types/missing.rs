//! SAS missing value codes.

/// A SAS numeric missing value.
///
/// SAS distinguishes 28 missing values: the standard missing (`.`), the
/// underscore missing (`._`), and the lettered specials (`.A` through `.Z`).
/// In transport files a missing value is stored as a tag byte in the first
/// byte of the numeric field with all remaining bytes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingValue {
    /// Standard missing (`.`), tag byte `0x2E`.
    Standard,
    /// Underscore missing (`._`), tag byte `0x5F`.
    Underscore,
    /// Special missing (`.A`-`.Z`), tag bytes `0x41`-`0x5A`.
    Special(char),
}

impl MissingValue {
    /// Interpret the first byte of a numeric field as a missing-value tag.
    ///
    /// Returns `None` for bytes that are not a recognized tag. Callers must
    /// additionally confirm the remaining fraction bytes are all zero; a tag
    /// byte with a non-zero fraction is an ordinary IBM float.
    #[must_use]
    pub fn from_tag_byte(byte: u8) -> Option<Self> {
        match byte {
            0x2E => Some(Self::Standard),
            0x5F => Some(Self::Underscore),
            b'A'..=b'Z' => Some(Self::Special(byte as char)),
            _ => None,
        }
    }

    /// The tag byte for this missing value.
    #[must_use]
    pub fn tag_byte(self) -> u8 {
        match self {
            Self::Standard => 0x2E,
            Self::Underscore => 0x5F,
            Self::Special(letter) => letter as u8,
        }
    }

    /// SAS display form: `.`, `._`, or `.A`-`.Z`.
    #[must_use]
    pub fn display_code(self) -> String {
        match self {
            Self::Standard => ".".to_string(),
            Self::Underscore => "._".to_string(),
            Self::Special(letter) => format!(".{letter}"),
        }
    }
}

impl std::fmt::Display for MissingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_code())
    }
}
