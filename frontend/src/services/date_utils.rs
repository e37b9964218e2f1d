use chrono::DateTime;

/// Format an RFC 3339 timestamp for the shift banner, e.g. "June 5, 2025 at 9:05 AM".
///
/// The offset carried by the timestamp is kept, so the register shows the
/// time it was opened in its own timezone. Unparseable input is returned as-is.
pub fn format_opened_at(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%B %-d, %Y at %-I:%M %p").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_opened_at() {
        assert_eq!(
            format_opened_at("2025-06-05T09:05:00-04:00"),
            "June 5, 2025 at 9:05 AM"
        );
        assert_eq!(
            format_opened_at("2025-12-24T17:30:00Z"),
            "December 24, 2025 at 5:30 PM"
        );
    }

    #[test]
    fn test_format_opened_at_falls_back_to_raw_text() {
        assert_eq!(format_opened_at("yesterday"), "yesterday");
    }
}
