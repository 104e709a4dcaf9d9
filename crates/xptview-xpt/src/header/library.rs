//! Library header record handling.
//!
//! The library header is the first set of records in an XPT file.
//!
//! # Structure
//!
//! 1. Fixed header: `HEADER RECORD*******LIBRARY HEADER RECORD!!!!!!!...`
//! 2. Real header (80 bytes): SAS version, OS, created datetime
//! 3. Second header (80 bytes): Modified datetime

use crate::error::{Result, XptError};
use crate::record::RECORD_LEN;

/// Library header prefix.
pub const LIBRARY_HEADER_PREFIX: &str = "HEADER RECORD*******LIBRARY HEADER RECORD!!!!!!!";

/// Informational library metadata parsed from the real headers.
///
/// Used only to confirm the file is a transport file; errors in these fields
/// are non-fatal and default to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryInfo {
    /// SAS version string.
    pub sas_version: String,
    /// Operating system name.
    pub os_name: String,
    /// Created datetime string (ddMMMyy:hh:mm:ss).
    pub created: String,
    /// Modified datetime string.
    pub modified: String,
}

/// Validate that a record starts with the library header prefix.
///
/// Fails with `InvalidHeader` when the magic marker is absent; this is how
/// a non-transport file with an `.xpt` extension is rejected.
pub fn validate_library_header(record: &[u8]) -> Result<()> {
    if record.len() < RECORD_LEN {
        return Err(XptError::invalid_header("record too short"));
    }
    if !record.starts_with(LIBRARY_HEADER_PREFIX.as_bytes()) {
        return Err(XptError::invalid_header(
            "LIBRARY HEADER marker absent; not a transport file",
        ));
    }
    Ok(())
}

/// Parse the library real header (first 80 bytes after the fixed header).
///
/// # Structure
///
/// | Offset | Length | Field       | Description              |
/// |--------|--------|-------------|--------------------------|
/// | 0-7    | 8      | sas_symbol1 | "SAS     "               |
/// | 8-15   | 8      | sas_symbol2 | "SAS     "               |
/// | 16-23  | 8      | saslib      | "SASLIB  "               |
/// | 24-31  | 8      | sasver      | SAS version              |
/// | 32-39  | 8      | sas_os      | Operating system         |
/// | 40-63  | 24     | blanks      | Spaces                   |
/// | 64-79  | 16     | created     | Created datetime         |
///
/// All fields are informational and default to empty on malformed content.
#[must_use]
pub fn parse_real_header(record: &[u8]) -> LibraryInfo {
    LibraryInfo {
        sas_version: read_string(record, 24, 8),
        os_name: read_string(record, 32, 8),
        created: read_string(record, 64, 16),
        modified: String::new(), // filled from the second header
    }
}

/// Parse the second header record (modified datetime at offset 0-15).
#[must_use]
pub fn parse_second_header(record: &[u8]) -> String {
    read_string(record, 0, 16)
}

/// Read a string from a byte slice, trimming trailing spaces and NULs.
pub(crate) fn read_string(data: &[u8], offset: usize, len: usize) -> String {
    data.get(offset..offset + len)
        .map(|slice| {
            String::from_utf8_lossy(slice)
                .trim_end_matches([' ', '\0'])
                .to_string()
        })
        .unwrap_or_default()
}
