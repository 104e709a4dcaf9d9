//! NAMESTR record parsing.
//!
//! The NAMESTR record describes a single variable in an XPT dataset.
//! Each NAMESTR is 140 bytes (or 136 bytes for VAX/VMS).
//!
//! # NAMESTR Structure (fields read here)
//!
//! | Offset | Field   | Type     | Description                    |
//! |--------|---------|----------|--------------------------------|
//! | 0-1    | ntype   | short    | 1=NUMERIC, 2=CHAR              |
//! | 4-5    | nlng    | short    | Variable length in observation |
//! | 6-7    | nvar0   | short    | Variable number                |
//! | 8-15   | nname   | char[8]  | Variable name                  |
//! | 16-55  | nlabel  | char[40] | Variable label                 |
//! | 84-87  | npos    | long     | Position in observation        |
//!
//! Format/informat descriptors at offsets 56-83 are presentation metadata
//! and are not decoded here. All integers are big-endian.

use crate::error::{Result, XptError};
use crate::header::library::read_string;
use crate::types::{XptColumn, XptType};

/// Standard NAMESTR length.
pub const NAMESTR_LEN: usize = 140;

/// VAX/VMS NAMESTR length (shorter reserved section).
pub const NAMESTR_LEN_VAX: usize = 136;

/// Parse a single NAMESTR record into a column descriptor.
///
/// # Arguments
/// * `data` - Byte slice containing the NAMESTR data
/// * `index` - Variable index (for error messages and name fallback)
pub fn parse_namestr(data: &[u8], index: usize) -> Result<XptColumn> {
    if data.len() < 88 {
        return Err(XptError::invalid_field(
            index,
            format!("descriptor too short: {} bytes", data.len()),
        ));
    }

    let ntype = read_i16(data, 0);
    let data_type = XptType::from_ntype(ntype)
        .ok_or_else(|| XptError::invalid_field(index, format!("invalid type code {ntype}")))?;

    let length = read_i16(data, 4);
    if length <= 0 {
        return Err(XptError::invalid_field(index, "variable length is zero"));
    }
    let length = length as u16;
    if length > data_type.max_length() {
        return Err(XptError::invalid_field(
            index,
            format!(
                "length {length} exceeds the {} byte maximum",
                data_type.max_length()
            ),
        ));
    }

    // Unnamed variables get a positional fallback rather than failing
    let mut name = read_string(data, 8, 8);
    if name.is_empty() {
        name = format!("VAR{}", index + 1);
    }

    let label = read_string(data, 16, 40);

    let position = read_i32(data, 84);
    if position < 0 {
        return Err(XptError::invalid_field(
            index,
            format!("negative row position {position}"),
        ));
    }

    Ok(XptColumn {
        name,
        label: if label.is_empty() { None } else { Some(label) },
        data_type,
        length,
        position: position as usize,
    })
}

/// Parse `var_count` NAMESTR records from a contiguous block.
///
/// # Arguments
/// * `data` - Byte slice containing all NAMESTR data
/// * `var_count` - Number of variables
/// * `namestr_len` - Length of each NAMESTR (140 or 136)
///
/// Order is preserved exactly as declared; it defines the row byte layout
/// and the display column order.
pub fn parse_namestr_records(
    data: &[u8],
    var_count: usize,
    namestr_len: usize,
) -> Result<Vec<XptColumn>> {
    let mut columns = Vec::with_capacity(var_count);

    for idx in 0..var_count {
        let offset = idx * namestr_len;
        let record = data
            .get(offset..offset + namestr_len)
            .ok_or_else(|| XptError::invalid_field(idx, "descriptor block out of bounds"))?;
        columns.push(parse_namestr(record, idx)?);
    }

    Ok(columns)
}

/// Read a big-endian i16 from data.
fn read_i16(data: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([data[offset], data[offset + 1]])
}

/// Read a big-endian i32 from data.
fn read_i32(data: &[u8], offset: usize) -> i32 {
    i32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_namestr(ntype: i16, length: i16, name: &str, label: &str, position: i32) -> Vec<u8> {
        let mut buf = vec![0u8; NAMESTR_LEN];
        buf[0..2].copy_from_slice(&ntype.to_be_bytes());
        buf[4..6].copy_from_slice(&length.to_be_bytes());
        let mut padded_name = [b' '; 8];
        padded_name[..name.len()].copy_from_slice(name.as_bytes());
        buf[8..16].copy_from_slice(&padded_name);
        let mut padded_label = [b' '; 40];
        padded_label[..label.len()].copy_from_slice(label.as_bytes());
        buf[16..56].copy_from_slice(&padded_label);
        buf[84..88].copy_from_slice(&position.to_be_bytes());
        buf
    }

    #[test]
    fn test_parse_numeric() {
        let raw = raw_namestr(1, 8, "AGE", "Age in Years", 0);
        let col = parse_namestr(&raw, 0).unwrap();
        assert_eq!(col.name, "AGE");
        assert_eq!(col.label.as_deref(), Some("Age in Years"));
        assert_eq!(col.data_type, XptType::Num);
        assert_eq!(col.length, 8);
        assert_eq!(col.position, 0);
    }

    #[test]
    fn test_parse_character() {
        let raw = raw_namestr(2, 20, "USUBJID", "", 8);
        let col = parse_namestr(&raw, 0).unwrap();
        assert_eq!(col.data_type, XptType::Char);
        assert_eq!(col.length, 20);
        assert_eq!(col.label, None);
        assert_eq!(col.position, 8);
    }

    #[test]
    fn test_invalid_type_code() {
        let raw = raw_namestr(5, 8, "X", "", 0);
        let err = parse_namestr(&raw, 3).unwrap_err();
        assert!(matches!(
            err,
            XptError::InvalidFieldDescriptor { index: 3, .. }
        ));
    }

    #[test]
    fn test_zero_length() {
        let raw = raw_namestr(1, 0, "X", "", 0);
        assert!(parse_namestr(&raw, 0).is_err());
    }

    #[test]
    fn test_length_limits_per_type() {
        // Numerics cap at 8 bytes, characters at 200
        assert!(parse_namestr(&raw_namestr(1, 9, "X", "", 0), 0).is_err());
        assert!(parse_namestr(&raw_namestr(1, 8, "X", "", 0), 0).is_ok());
        assert!(parse_namestr(&raw_namestr(2, 201, "X", "", 0), 0).is_err());
        assert!(parse_namestr(&raw_namestr(2, 200, "X", "", 0), 0).is_ok());
    }

    #[test]
    fn test_short_numeric_lengths_allowed() {
        for length in 2..=8 {
            assert!(parse_namestr(&raw_namestr(1, length, "N", "", 0), 0).is_ok());
        }
    }

    #[test]
    fn test_blank_name_fallback() {
        let raw = raw_namestr(1, 8, "", "", 0);
        let col = parse_namestr(&raw, 4).unwrap();
        assert_eq!(col.name, "VAR5");
    }

    #[test]
    fn test_too_short_descriptor() {
        let err = parse_namestr(&[0u8; 40], 0).unwrap_err();
        assert!(matches!(err, XptError::InvalidFieldDescriptor { .. }));
    }

    #[test]
    fn test_parse_multiple_preserves_order() {
        let mut data = Vec::new();
        data.extend_from_slice(&raw_namestr(1, 8, "AGE", "", 0));
        data.extend_from_slice(&raw_namestr(2, 1, "SEX", "", 8));
        data.extend_from_slice(&raw_namestr(2, 40, "RACE", "", 9));

        let columns = parse_namestr_records(&data, 3, NAMESTR_LEN).unwrap();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].name, "AGE");
        assert_eq!(columns[1].name, "SEX");
        assert_eq!(columns[2].name, "RACE");
        assert_eq!(columns[2].position, 9);
    }

    #[test]
    fn test_parse_multiple_out_of_bounds() {
        let data = raw_namestr(1, 8, "AGE", "", 0);
        assert!(parse_namestr_records(&data, 2, NAMESTR_LEN).is_err());
    }

    #[test]
    fn test_vax_namestr_length() {
        // VAX records are 136 bytes; the decoded fields sit below offset 88
        let mut data = raw_namestr(1, 8, "AGE", "", 0);
        data.truncate(NAMESTR_LEN_VAX);
        let columns = parse_namestr_records(&data, 1, NAMESTR_LEN_VAX).unwrap();
        assert_eq!(columns[0].name, "AGE");
    }
}
