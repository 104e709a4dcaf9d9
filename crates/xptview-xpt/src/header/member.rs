//! Member header record handling.
//!
//! Each dataset (member) in an XPT file has its own set of header records.
//!
//! # Structure
//!
//! 1. Member header: `HEADER RECORD*******MEMBER  HEADER RECORD!!!!!!!...`
//!    (NAMESTR record length at offset 74-77)
//! 2. DSCRPTR header: `HEADER RECORD*******DSCRPTR HEADER RECORD!!!!!!!...`
//! 3. Member data (80 bytes): dataset name, version, created datetime
//! 4. Member second (80 bytes): modified datetime, label, type
//! 5. NAMESTR header (variable count at offset 54-57)
//! 6. NAMESTR records, padded to a record boundary
//! 7. OBS header: `HEADER RECORD*******OBS     HEADER RECORD!!!!!!!...`
//! 8. Observation data

use crate::error::{Result, XptError};
use crate::header::library::read_string;
use crate::header::namestr::{NAMESTR_LEN, NAMESTR_LEN_VAX};

/// Member header prefix.
pub const MEMBER_HEADER_PREFIX: &str = "HEADER RECORD*******MEMBER  HEADER RECORD!!!!!!!";

/// DSCRPTR header prefix.
pub const DSCRPTR_HEADER_PREFIX: &str = "HEADER RECORD*******DSCRPTR HEADER RECORD!!!!!!!";

/// NAMESTR header prefix.
pub const NAMESTR_HEADER_PREFIX: &str = "HEADER RECORD*******NAMESTR HEADER RECORD!!!!!!!";

/// OBS header prefix.
pub const OBS_HEADER_PREFIX: &str = "HEADER RECORD*******OBS     HEADER RECORD!!!!!!!";

/// True if a record opens a new member section.
#[must_use]
pub fn is_member_header(record: &[u8]) -> bool {
    record.starts_with(MEMBER_HEADER_PREFIX.as_bytes())
}

/// Validate a member header record.
pub fn validate_member_header(record: &[u8], offset: usize) -> Result<()> {
    if !is_member_header(record) {
        return Err(XptError::invalid_member(
            offset,
            "expected MEMBER header record",
        ));
    }
    Ok(())
}

/// Validate a DSCRPTR header record.
pub fn validate_dscrptr_header(record: &[u8], offset: usize) -> Result<()> {
    if !record.starts_with(DSCRPTR_HEADER_PREFIX.as_bytes()) {
        return Err(XptError::invalid_member(
            offset,
            "expected DSCRPTR header record",
        ));
    }
    Ok(())
}

/// Validate a NAMESTR header record.
pub fn validate_namestr_header(record: &[u8], offset: usize) -> Result<()> {
    if !record.starts_with(NAMESTR_HEADER_PREFIX.as_bytes()) {
        return Err(XptError::invalid_member(
            offset,
            "expected NAMESTR header record",
        ));
    }
    Ok(())
}

/// Validate an OBS header record.
pub fn validate_obs_header(record: &[u8], offset: usize) -> Result<()> {
    if !record.starts_with(OBS_HEADER_PREFIX.as_bytes()) {
        return Err(XptError::invalid_member(
            offset,
            "expected OBS header record",
        ));
    }
    Ok(())
}

/// Parse the NAMESTR record length from a member header record.
///
/// The length is 4 ASCII digits at offset 74-77: 140 (standard) or 136
/// (VAX/VMS, shorter reserved tail).
pub fn parse_namestr_len(record: &[u8], offset: usize) -> Result<usize> {
    let text = read_string(record, 74, 4);
    let len = text
        .trim()
        .parse::<usize>()
        .map_err(|_| XptError::invalid_member(offset, "unparseable NAMESTR record length"))?;
    if len != NAMESTR_LEN && len != NAMESTR_LEN_VAX {
        return Err(XptError::invalid_member(
            offset,
            format!("unsupported NAMESTR record length {len}"),
        ));
    }
    Ok(len)
}

/// Parse the variable count from a NAMESTR header record.
///
/// The count is 4 ASCII digits at offset 54-57.
pub fn parse_variable_count(record: &[u8], offset: usize) -> Result<usize> {
    let text = read_string(record, 54, 4);
    text.trim()
        .parse::<usize>()
        .map_err(|_| XptError::invalid_member(offset, "unparseable variable count"))
}

/// Parse the dataset name from a member data record (offset 8-15).
pub fn parse_dataset_name(record: &[u8], offset: usize) -> Result<String> {
    let name = read_string(record, 8, 8);
    if name.is_empty() {
        return Err(XptError::invalid_member(offset, "empty dataset name"));
    }
    Ok(name)
}

/// Parse the created datetime string from a member data record (offset 64-79).
#[must_use]
pub fn parse_member_created(record: &[u8]) -> Option<String> {
    non_empty(read_string(record, 64, 16))
}

/// Parse the modified datetime string from a member second record (offset 0-15).
#[must_use]
pub fn parse_member_modified(record: &[u8]) -> Option<String> {
    non_empty(read_string(record, 0, 16))
}

/// Parse the dataset label from a member second record (offset 32-71).
#[must_use]
pub fn parse_dataset_label(record: &[u8]) -> Option<String> {
    non_empty(read_string(record, 32, 40))
}

/// Parse the dataset type from a member second record (offset 72-79).
#[must_use]
pub fn parse_dataset_type(record: &[u8]) -> Option<String> {
    non_empty(read_string(record, 72, 8))
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}
