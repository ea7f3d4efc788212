//! Date-range values on the wire are calendar dates only (`YYYY-MM-DD`).
//!
//! The observation API filters by whole days. Time-of-day is dropped here so
//! that it can never narrow a range near its boundaries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::DashboardError;

pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Strict parser for values read back from a query string.
pub fn parse_filter_param(value: &str) -> Result<NaiveDate, DashboardError> {
    NaiveDate::parse_from_str(value.trim(), FILTER_DATE_FORMAT)
        .map_err(|_| DashboardError::InvalidDateFormat(value.to_string()))
}

/// Lenient parser for UI input: RFC 3339 date-times are moved to UTC first,
/// naive date-times and plain dates are taken as they are.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, FILTER_DATE_FORMAT).ok()
}

pub fn format_filter_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(FILTER_DATE_FORMAT).to_string())
}

/// Fails closed: anything unparseable becomes `None`, never a partial string.
pub fn to_filter_param(value: Option<&str>) -> Option<String> {
    format_filter_date(value.and_then(parse_date_input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn null_stays_null() {
        assert_eq!(to_filter_param(None), None);
        assert_eq!(format_filter_date(None), None);
    }

    #[test]
    fn date_times_lose_their_time_component() {
        assert_eq!(to_filter_param(Some("2022-01-21T11:31:35.490Z")), Some("2022-01-21".to_string()));
        assert_eq!(to_filter_param(Some("2022-01-21T23:59:00")), Some("2022-01-21".to_string()));
        assert_eq!(to_filter_param(Some("2022-01-21")), Some("2022-01-21".to_string()));
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        assert_eq!(to_filter_param(Some("2022-01-22T00:30:00+02:00")), Some("2022-01-21".to_string()));
    }

    #[test]
    fn garbage_fails_closed() {
        assert_eq!(to_filter_param(Some("")), None);
        assert_eq!(to_filter_param(Some("21/01/2022")), None);
        assert_eq!(to_filter_param(Some("2022-13-01")), None);
    }

    #[test]
    fn strict_parser_reports_the_offending_value() {
        assert_eq!(parse_filter_param("2021-07-31"), Ok(NaiveDate::from_ymd_opt(2021, 7, 31).unwrap()));
        assert_eq!(
            parse_filter_param("2021-07-31T10:00:00Z"),
            Err(DashboardError::InvalidDateFormat("2021-07-31T10:00:00Z".to_string()))
        );
    }
}
