//! XPT header record parsing.
//!
//! This module handles the various header records in an XPT file:
//! - Library headers (file-level metadata and the transport magic marker)
//! - Member headers (dataset-level metadata)
//! - NAMESTR records (variable definitions)
//! - OBS header (marks start of observation data)

pub mod datetime;
pub mod library;
pub mod member;
pub mod namestr;

// Re-export commonly used items
pub use datetime::parse_xpt_datetime;
pub use library::{
    LIBRARY_HEADER_PREFIX, LibraryInfo, parse_real_header, parse_second_header,
    validate_library_header,
};
pub use member::{
    DSCRPTR_HEADER_PREFIX, MEMBER_HEADER_PREFIX, NAMESTR_HEADER_PREFIX, OBS_HEADER_PREFIX,
    is_member_header, parse_dataset_label, parse_dataset_name, parse_dataset_type,
    parse_member_created, parse_member_modified, parse_namestr_len, parse_variable_count,
    validate_dscrptr_header, validate_member_header, validate_namestr_header, validate_obs_header,
};
pub use namestr::{NAMESTR_LEN, NAMESTR_LEN_VAX, parse_namestr, parse_namestr_records};
