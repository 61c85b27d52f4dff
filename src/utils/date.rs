use chrono::{DateTime, NaiveDate};

use crate::consts::DATE_FORMAT;

/// Parse a submission date. Accepts YYYY-MM-DD, YYYYMMDD and RFC 3339 timestamps.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Some(d);
    }
    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
