//! SAS transport datetime strings.
//!
//! Header datetimes use the `ddMMMyy:hh:mm:ss` form with an uppercase month
//! abbreviation, e.g. `15MAR24:14:30:45`. The two-digit year pivots at 60:
//! SAS software predates 1960, so `60`-`99` mean 19xx and `00`-`59` mean
//! 20xx.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a SAS `ddMMMyy:hh:mm:ss` datetime string.
///
/// Returns `None` on malformed input; header datetimes are informational
/// and never fail a parse.
#[must_use]
pub fn parse_xpt_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.len() != 16 {
        return None;
    }

    let day: u32 = text.get(0..2)?.parse().ok()?;
    let month = month_number(text.get(2..5)?)?;
    let year_two: i32 = text.get(5..7)?.parse().ok()?;
    let year = if year_two >= 60 {
        1900 + year_two
    } else {
        2000 + year_two
    };

    let rest = text.get(7..)?;
    let mut parts = rest.strip_prefix(':')?.splitn(3, ':');
    let hour: u32 = parts.next()?.parse().ok()?;
    let minute: u32 = parts.next()?.parse().ok()?;
    let second: u32 = parts.next()?.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)
}

fn month_number(abbrev: &str) -> Option<u32> {
    let month = match abbrev.to_ascii_uppercase().as_str() {
        "JAN" => 1,
        "FEB" => 2,
        "MAR" => 3,
        "APR" => 4,
        "MAY" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AUG" => 8,
        "SEP" => 9,
        "OCT" => 10,
        "NOV" => 11,
        "DEC" => 12,
        _ => return None,
    };
    Some(month)
}
