//! Test support: synthesizes transport byte streams for decoder tests.
#![allow(dead_code)] // each test binary uses a different subset
//!
//! The decoder crate is read-only, so the fixtures here hand-build the
//! record layout: fixed headers, NAMESTR records, observation blocks, and
//! the IBM floating-point encoding for numeric cells.

use xptview_xpt::{MissingValue, NumericValue, XptColumn, XptType, XptValue};

pub const RECORD_LEN: usize = 80;
pub const NAMESTR_LEN: usize = 140;

pub const LIBRARY_HEADER_PREFIX: &str = "HEADER RECORD*******LIBRARY HEADER RECORD!!!!!!!";
pub const MEMBER_HEADER_PREFIX: &str = "HEADER RECORD*******MEMBER  HEADER RECORD!!!!!!!";
pub const DSCRPTR_HEADER_PREFIX: &str = "HEADER RECORD*******DSCRPTR HEADER RECORD!!!!!!!";
pub const NAMESTR_HEADER_PREFIX: &str = "HEADER RECORD*******NAMESTR HEADER RECORD!!!!!!!";
pub const OBS_HEADER_PREFIX: &str = "HEADER RECORD*******OBS     HEADER RECORD!!!!!!!";

/// A dataset specification for fixture building.
pub struct FixtureDataset {
    pub name: String,
    pub label: Option<String>,
    pub columns: Vec<XptColumn>,
    pub rows: Vec<Vec<XptValue>>,
}

impl FixtureDataset {
    pub fn new(name: &str, columns: Vec<XptColumn>) -> Self {
        Self {
            name: name.to_string(),
            label: None,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn with_rows(mut self, rows: Vec<Vec<XptValue>>) -> Self {
        self.rows = rows;
        self
    }
}

/// Build a complete transport file from dataset specifications.
pub fn build_xpt(datasets: &[FixtureDataset]) -> Vec<u8> {
    let mut out = library_records();
    for dataset in datasets {
        out.extend_from_slice(&member_records(dataset));
    }
    out
}

/// The three library header records that open every transport file.
pub fn library_records() -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&fixed_header(LIBRARY_HEADER_PREFIX));

    let mut real = [b' '; RECORD_LEN];
    write_str(&mut real, 0, "SAS");
    write_str(&mut real, 8, "SAS");
    write_str(&mut real, 16, "SASLIB");
    write_str(&mut real, 24, "9.4");
    write_str(&mut real, 32, "LINUX");
    write_str(&mut real, 64, "15MAR24:14:30:45");
    out.extend_from_slice(&real);

    let mut second = [b' '; RECORD_LEN];
    write_str(&mut second, 0, "15MAR24:14:30:45");
    out.extend_from_slice(&second);

    out
}

/// All records for one member: headers, NAMESTR block, observations.
pub fn member_records(dataset: &FixtureDataset) -> Vec<u8> {
    let mut out = Vec::new();

    let mut member = fixed_header(MEMBER_HEADER_PREFIX);
    write_str(&mut member, 64, "0160");
    write_str(&mut member, 74, "0140");
    out.extend_from_slice(&member);

    out.extend_from_slice(&fixed_header(DSCRPTR_HEADER_PREFIX));

    let mut data = [b' '; RECORD_LEN];
    write_str(&mut data, 0, "SAS");
    write_str(&mut data, 8, &dataset.name);
    write_str(&mut data, 16, "SASDATA");
    write_str(&mut data, 24, "9.4");
    write_str(&mut data, 32, "LINUX");
    write_str(&mut data, 64, "15MAR24:14:30:45");
    out.extend_from_slice(&data);

    let mut second = [b' '; RECORD_LEN];
    write_str(&mut second, 0, "16MAR24:09:15:00");
    if let Some(label) = &dataset.label {
        write_str(&mut second, 32, label);
    }
    write_str(&mut second, 72, "DATA");
    out.extend_from_slice(&second);

    let mut namestr_header = fixed_header(NAMESTR_HEADER_PREFIX);
    write_str(&mut namestr_header, 54, &format!("{:04}", dataset.columns.len()));
    out.extend_from_slice(&namestr_header);

    let mut block = Vec::new();
    let mut position = 0usize;
    for (idx, column) in dataset.columns.iter().enumerate() {
        block.extend_from_slice(&namestr_record(column, idx as u16 + 1, position as u32));
        position += column.length as usize;
    }
    pad_to_record(&mut block);
    out.extend_from_slice(&block);

    out.extend_from_slice(&fixed_header(OBS_HEADER_PREFIX));

    let mut observations = Vec::new();
    for row in &dataset.rows {
        assert_eq!(row.len(), dataset.columns.len(), "fixture row arity");
        for (value, column) in row.iter().zip(&dataset.columns) {
            observations.extend_from_slice(&encode_cell(value, column));
        }
    }
    pad_to_record(&mut observations);
    out.extend_from_slice(&observations);

    out
}

/// A fixed `HEADER RECORD*******...` record with the standard zero filler.
pub fn fixed_header(prefix: &str) -> [u8; RECORD_LEN] {
    let mut record = [b' '; RECORD_LEN];
    let bytes = prefix.as_bytes();
    record[..bytes.len()].copy_from_slice(bytes);
    for slot in &mut record[48..78] {
        *slot = b'0';
    }
    record
}

/// One 140-byte NAMESTR record for a column.
pub fn namestr_record(column: &XptColumn, varnum: u16, position: u32) -> [u8; NAMESTR_LEN] {
    let mut buf = [0u8; NAMESTR_LEN];
    let ntype: i16 = match column.data_type {
        XptType::Num => 1,
        XptType::Char => 2,
    };
    buf[0..2].copy_from_slice(&ntype.to_be_bytes());
    buf[4..6].copy_from_slice(&(column.length as i16).to_be_bytes());
    buf[6..8].copy_from_slice(&(varnum as i16).to_be_bytes());
    write_padded(&mut buf[8..16], &column.name);
    write_padded(&mut buf[16..56], column.label.as_deref().unwrap_or(""));
    buf[84..88].copy_from_slice(&(position as i32).to_be_bytes());
    buf
}

/// Encode a cell to its field bytes.
pub fn encode_cell(value: &XptValue, column: &XptColumn) -> Vec<u8> {
    let len = column.length as usize;
    match value {
        XptValue::Char(text) => {
            let mut out = vec![b' '; len];
            let bytes = text.as_bytes();
            let take = bytes.len().min(len);
            out[..take].copy_from_slice(&bytes[..take]);
            out
        }
        XptValue::Num(numeric) => {
            let full = match numeric {
                NumericValue::Value(v) => ieee_to_ibm(*v),
                NumericValue::Missing(m) => encode_missing(*m),
            };
            full[..len].to_vec()
        }
    }
}

/// Encode an IEEE double as IBM long floating point (truncating rounding).
pub fn ieee_to_ibm(value: f64) -> [u8; 8] {
    if value == 0.0 {
        return [0u8; 8];
    }

    let sign = value < 0.0;
    let mut magnitude = value.abs();

    // Normalize to fraction in [1/16, 1): magnitude = fraction * 16^exponent
    let mut exponent = 0i32;
    while magnitude >= 1.0 {
        magnitude /= 16.0;
        exponent += 1;
    }
    while magnitude < 0.0625 {
        magnitude *= 16.0;
        exponent -= 1;
    }
    assert!((-64..=63).contains(&exponent), "value outside IBM range");

    let fraction = (magnitude * (1u64 << 56) as f64) as u64;

    let mut bytes = [0u8; 8];
    bytes[0] = (exponent + 64) as u8 | if sign { 0x80 } else { 0 };
    for (idx, slot) in bytes[1..].iter_mut().enumerate() {
        *slot = ((fraction >> (8 * (6 - idx))) & 0xFF) as u8;
    }
    bytes
}

/// Encode a SAS missing value: tag byte, zero fraction.
pub fn encode_missing(missing: MissingValue) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    bytes[0] = missing.tag_byte();
    bytes
}

/// Pad a block to the next record boundary with spaces.
pub fn pad_to_record(block: &mut Vec<u8>) {
    while !block.len().is_multiple_of(RECORD_LEN) {
        block.push(b' ');
    }
}

fn write_str(record: &mut [u8; RECORD_LEN], offset: usize, value: &str) {
    let bytes = value.as_bytes();
    record[offset..offset + bytes.len()].copy_from_slice(bytes);
}

fn write_padded(target: &mut [u8], value: &str) {
    target.fill(b' ');
    let bytes = value.as_bytes();
    let take = bytes.len().min(target.len());
    target[..take].copy_from_slice(&bytes[..take]);
}
