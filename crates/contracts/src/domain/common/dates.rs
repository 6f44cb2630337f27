//! Date helpers shared by several forms

use chrono::NaiveDate;

use crate::shared::metadata::FormWarning;

pub const DATE_RANGE_MESSAGE: &str = "La fecha final no puede ser anterior a la fecha inicial";

/// Parse the date part of `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM[:SS]`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    let date = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `end` must not precede `start` when both are present
pub fn check_date_range(start: &str, end: Option<&str>) -> Result<(), FormWarning> {
    let (Some(start), Some(end)) = (parse_date(start), end.and_then(parse_date)) else {
        return Ok(());
    };
    if end < start {
        Err(FormWarning::new(DATE_RANGE_MESSAGE))
    } else {
        Ok(())
    }
}

/// Cut an ISO date-time to `YYYY-MM-DDTHH:MM` for datetime-local inputs
pub fn truncate_datetime(value: &str) -> String {
    value.chars().take(16).collect()
}

/// `YYYY-MM-DD` for date inputs
pub fn date_input(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// `DD/MM/YYYY` for tables; unparsable input is returned unchanged
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-15"), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(
            parse_date("2024-03-15T10:30:00"),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("15/03/2024"), None);
    }

    #[test]
    fn test_check_date_range() {
        assert!(check_date_range("2024-01-10", None).is_ok());
        assert!(check_date_range("2024-01-10", Some("")).is_ok());
        assert!(check_date_range("2024-01-10", Some("2024-01-10")).is_ok());
        let err = check_date_range("2024-01-10", Some("2024-01-09")).unwrap_err();
        assert_eq!(err.message, DATE_RANGE_MESSAGE);
    }

    #[test]
    fn test_truncate_and_format() {
        assert_eq!(truncate_datetime("2024-05-01T08:15:30.123"), "2024-05-01T08:15");
        assert_eq!(truncate_datetime("2024-05-01"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T08:15"), "01/05/2024");
        assert_eq!(format_date("pronto"), "pronto");
        assert_eq!(date_input("2024-05-01T00:00:00.000+00:00"), "2024-05-01");
    }
}
