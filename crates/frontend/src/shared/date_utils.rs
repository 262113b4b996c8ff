/// Utilities for date and time formatting
///
/// Timestamps arrive as RFC 3339 strings and are shown in US notation.
use chrono::DateTime;

/// Format an RFC 3339 timestamp as `MM/DD/YYYY, hh:mm:ss AM`, in the
/// timestamp's own offset
/// Example: "2023-08-01T14:05:09.123Z" -> "08/01/2023, 02:05:09 PM"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(datetime) => datetime.format("%m/%d/%Y, %I:%M:%S %p").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2023-08-01T14:05:09.123456789Z"),
            "08/01/2023, 02:05:09 PM"
        );
        assert_eq!(
            format_datetime("2023-12-31T00:30:00+02:00"),
            "12/31/2023, 12:30:00 AM"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
