use chrono::DateTime;

/// Render an RFC 3339 timestamp as a short human date. Falls back to the
/// raw string for anything the backend sends that does not parse.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_timestamp("2024-01-15T10:30:00Z"), "Jan 15, 2024");
    }

    #[test]
    fn passes_through_unparseable_input() {
        assert_eq!(format_timestamp("2024-01-01"), "2024-01-01");
        assert_eq!(format_timestamp(""), "");
    }
}
