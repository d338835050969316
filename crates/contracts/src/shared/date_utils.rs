use chrono::NaiveDate;

/// Parses an ISO `YYYY-MM-DD` date, also accepting a trailing time part.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Formats an ISO date as "15 March 2024". Unparseable input is returned as is.
pub fn format_long_date(s: &str) -> String {
    match parse_iso_date(s) {
        Some(d) => d.format("%-d %B %Y").to_string(),
        None => s.to_string(),
    }
}

/// Formats an ISO date as "Mar 2024".
pub fn format_month_year(s: &str) -> String {
    match parse_iso_date(s) {
        Some(d) => d.format("%b %Y").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2024-03-15"), "15 March 2024");
        assert_eq!(format_long_date("2023-11-02T09:30:00Z"), "2 November 2023");
    }

    #[test]
    fn test_format_month_year() {
        assert_eq!(format_month_year("2025-01-20"), "Jan 2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_long_date("spring term"), "spring term");
        assert!(parse_iso_date("2024-13-01").is_none());
    }
}
