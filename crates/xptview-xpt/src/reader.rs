//! XPT file decoding.
//!
//! The decoder is a pure function over an in-memory byte buffer: no I/O, no
//! shared state, no suspension points. [`read_xpt`] is a thin filesystem
//! wrapper for callers that start from a path.

use std::fs;
use std::path::Path;

use crate::error::{Result, XptError};
use crate::float::{ibm_to_ieee, is_missing};
use crate::header::{
    LibraryInfo, is_member_header, parse_dataset_label, parse_dataset_name, parse_dataset_type,
    parse_member_created, parse_member_modified, parse_namestr_len, parse_namestr_records,
    parse_real_header, parse_second_header, parse_variable_count, validate_dscrptr_header,
    validate_library_header, validate_member_header, validate_namestr_header, validate_obs_header,
};
use crate::record::{RECORD_LEN, RecordCursor};
use crate::types::{NumericValue, PREVIEW_ROWS, XptColumn, XptDataset, XptFile, XptType, XptValue};

/// Read and decode an XPT file from a path.
///
/// Reads the whole file into memory, then runs the pure decoder. The file
/// handle is released before decoding begins, on success and failure alike.
pub fn read_xpt(path: &Path) -> Result<XptFile> {
    let data = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            XptError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            XptError::Io(e)
        }
    })?;
    parse_xpt(&data, path.display().to_string())
}

/// Decode a transport file from bytes.
///
/// `path` is carried through to the result for display purposes only; the
/// bytes are the single source of truth. Decoding is deterministic: the same
/// buffer always yields a structurally identical [`XptFile`].
///
/// # Errors
///
/// Fails with the first fatal error encountered; there is no partial-dataset
/// recovery. A malformed member aborts the whole parse, since silently
/// dropping a dataset would misrepresent the file contents.
pub fn parse_xpt(data: &[u8], path: impl Into<String>) -> Result<XptFile> {
    let mut cursor = RecordCursor::new(data);
    let _info = parse_library_header(&mut cursor)?;

    let mut datasets = Vec::new();
    while cursor.bytes_remaining() >= RECORD_LEN {
        let Some(record) = cursor.peek_record() else {
            break;
        };
        if !is_member_header(record) {
            // All-fill records are benign end-of-file padding; anything else
            // where a member is expected is corrupt framing.
            if is_fill_record(record) {
                break;
            }
            return Err(XptError::invalid_member(
                cursor.offset(),
                "expected MEMBER header record",
            ));
        }
        datasets.push(parse_member(&mut cursor)?);
    }
    // Fewer than 80 trailing bytes: tolerated short final padding.

    Ok(XptFile {
        path: path.into(),
        datasets,
    })
}

/// Parse the informational library metadata from the top of a buffer.
///
/// Validates the transport magic marker like [`parse_xpt`] does, and returns
/// the SAS version, OS, and created/modified strings the header carries.
pub fn parse_library_info(data: &[u8]) -> Result<LibraryInfo> {
    let mut cursor = RecordCursor::new(data);
    parse_library_header(&mut cursor)
}

/// Validate the library header records and collect their metadata.
fn parse_library_header(cursor: &mut RecordCursor<'_>) -> Result<LibraryInfo> {
    if cursor.bytes_remaining() < RECORD_LEN * 3 {
        return Err(XptError::invalid_header(
            "file too small to hold a library header",
        ));
    }

    let header = cursor.read_record()?;
    validate_library_header(header)?;

    // Informational only: malformed content degrades to empty strings.
    let mut info = parse_real_header(cursor.read_record()?);
    info.modified = parse_second_header(cursor.read_record()?);
    Ok(info)
}

/// Decode one member section: headers, NAMESTR block, observations.
fn parse_member(cursor: &mut RecordCursor<'_>) -> Result<XptDataset> {
    let member_offset = cursor.offset();
    let member_header = cursor.read_record()?;
    validate_member_header(member_header, member_offset)?;
    let namestr_len = parse_namestr_len(member_header, member_offset)?;

    let offset = cursor.offset();
    validate_dscrptr_header(cursor.read_record()?, offset)?;

    let offset = cursor.offset();
    let member_data = cursor.read_record()?;
    let name = parse_dataset_name(member_data, offset)?;
    let created = parse_member_created(member_data);

    let member_second = cursor.read_record()?;
    let modified = parse_member_modified(member_second);
    let label = parse_dataset_label(member_second);
    let dataset_type = parse_dataset_type(member_second);

    let offset = cursor.offset();
    let namestr_header = cursor.read_record()?;
    validate_namestr_header(namestr_header, offset)?;
    let var_count = parse_variable_count(namestr_header, offset)?;

    let block_len = var_count
        .checked_mul(namestr_len)
        .ok_or_else(|| XptError::invalid_member(offset, "NAMESTR block length overflows"))?;
    let namestr_block = cursor.read_block(block_len)?;
    cursor.align_to_record();
    let mut columns = parse_namestr_records(namestr_block, var_count, namestr_len)?;

    let offset = cursor.offset();
    validate_obs_header(cursor.read_record()?, offset)?;

    let row_len = resolve_row_layout(&mut columns)?;
    let block = take_observation_block(cursor);
    let (rows, observation_count) = parse_observations(block, row_len, &columns);

    Ok(XptDataset {
        name,
        label,
        dataset_type,
        created,
        modified,
        observation_count,
        columns,
        rows,
    })
}

/// Fix up column positions and compute the row byte length.
///
/// Column order defines the row layout left to right. Declared NAMESTR
/// positions are verified against that layout; writers that leave every
/// position zeroed get the cumulative layout assigned instead. Any other
/// disagreement is inconsistent row geometry.
fn resolve_row_layout(columns: &mut [XptColumn]) -> Result<usize> {
    let mut row_len = 0usize;
    for column in columns.iter() {
        row_len = row_len
            .checked_add(column.length as usize)
            .ok_or_else(|| XptError::row_layout("row byte length overflows"))?;
    }

    let declared_unset = columns.iter().all(|col| col.position == 0);
    let mut offset = 0usize;
    for column in columns.iter_mut() {
        if declared_unset {
            column.position = offset;
        } else if column.position != offset {
            return Err(XptError::row_layout(format!(
                "variable {} declares offset {} but the row layout places it at {}",
                column.name, column.position, offset
            )));
        }
        offset += column.length as usize;
    }

    Ok(row_len)
}

/// Consume records up to the next member header (or end of stream) and
/// return them as one observation block.
///
/// A trailing chunk shorter than one record is included: real-world files
/// sometimes ship a short final padding block, and row slicing discards it.
fn take_observation_block<'a>(cursor: &mut RecordCursor<'a>) -> &'a [u8] {
    let rest = cursor.rest();
    let start = cursor.offset();

    let mut stop = rest.len();
    let mut offset = 0usize;
    while offset + RECORD_LEN <= rest.len() {
        if is_member_header(&rest[offset..offset + RECORD_LEN]) {
            stop = offset;
            break;
        }
        offset += RECORD_LEN;
    }

    cursor.seek(start + stop);
    &rest[..stop]
}

/// Slice an observation block into rows and decode the preview window.
///
/// Returns the decoded rows (capped at [`PREVIEW_ROWS`]) and the true total
/// observation count. Rows are read back to back; trailing bytes shorter
/// than one row are padding and are discarded. Trailing all-blank rows are
/// also discarded: record-boundary padding and trailing fill records are
/// indistinguishable from blank rows once the block is sliced.
fn parse_observations(
    block: &[u8],
    row_len: usize,
    columns: &[XptColumn],
) -> (Vec<Vec<XptValue>>, usize) {
    if row_len == 0 {
        // Degenerate member with no variables: no rows, not an error.
        return (Vec::new(), 0);
    }

    let mut total = block.len() / row_len;
    while total > 0 {
        let start = (total - 1) * row_len;
        if block[start..start + row_len].iter().all(|&b| b == b' ') {
            total -= 1;
        } else {
            break;
        }
    }

    let preview = total.min(PREVIEW_ROWS);
    let mut rows = Vec::with_capacity(preview);
    for idx in 0..preview {
        let row_bytes = &block[idx * row_len..(idx + 1) * row_len];
        rows.push(parse_row(row_bytes, columns));
    }

    (rows, total)
}

/// Decode a single row into positionally aligned values.
fn parse_row(row_bytes: &[u8], columns: &[XptColumn]) -> Vec<XptValue> {
    columns
        .iter()
        .map(|column| {
            let start = column.position;
            let end = start + column.length as usize;
            let field = &row_bytes[start..end];
            match column.data_type {
                XptType::Char => XptValue::Char(decode_char(field)),
                XptType::Num => XptValue::Num(decode_numeric(field)),
            }
        })
        .collect()
}

/// Decode a character field, stripping trailing padding.
///
/// Empty after trimming maps to an empty string, not a missing value.
fn decode_char(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches([' ', '\0'])
        .to_string()
}

/// Decode a numeric field.
///
/// The missing-value check runs on the raw bytes before anything else; the
/// tag patterns also parse as structurally valid IBM floats, so order
/// matters. Short numerics (2-8 bytes) store the high-order bytes of the
/// 8-byte representation and are zero-extended before conversion.
fn decode_numeric(bytes: &[u8]) -> NumericValue {
    if let Some(missing) = is_missing(bytes) {
        return NumericValue::Missing(missing);
    }

    let mut buf = [0u8; 8];
    let len = bytes.len().min(8);
    buf[..len].copy_from_slice(&bytes[..len]);

    NumericValue::Value(ibm_to_ieee(buf))
}

/// True if every byte is transport fill (space or NUL).
fn is_fill_record(record: &[u8]) -> bool {
    record.iter().all(|&b| b == b' ' || b == 0)
}
