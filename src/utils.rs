use crate::constants::{DEFAULT_DATA_FILE, DISPLAY_DATE_FORMAT};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Get the price data file from environment variable or use default
pub fn get_data_file() -> PathBuf {
    std::env::var("DATA_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE))
}

/// Format a date in the external DD/MM/YYYY representation
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Validate the `year` query parameter.
///
/// Accepted when the raw value contains four consecutive digits whose value
/// falls in 1000-3999 (leading digit 1-3). Anything else is a bad request
/// before the query engine runs.
pub fn is_valid_year(raw: &str) -> bool {
    raw.as_bytes()
        .windows(4)
        .any(|w| (b'1'..=b'3').contains(&w[0]) && w.iter().all(u8::is_ascii_digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_year() {
        assert!(is_valid_year("2023"));
        assert!(is_valid_year("1000"));
        assert!(is_valid_year("3999"));
        // Any run of four digits in range counts, even with surrounding text
        assert!(is_valid_year("x1999"));

        assert!(!is_valid_year(""));
        assert!(!is_valid_year("202"));
        assert!(!is_valid_year("20x3"));
        assert!(!is_valid_year("0999"));
        assert!(!is_valid_year("4000"));
        assert!(!is_valid_year("year"));
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
        assert_eq!(format_display_date(date), "05/04/2023");
    }

    #[test]
    fn display_format_round_trips() {
        for raw in ["05/04/2023", "31/12/1999", "01/01/3000", "29/02/2024"] {
            let date = NaiveDate::parse_from_str(raw, DISPLAY_DATE_FORMAT).unwrap();
            assert_eq!(format_display_date(date), raw);
        }
    }
}
