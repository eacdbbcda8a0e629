use chrono::{DateTime, Local, TimeZone};

/// `YYYY-MM-DD HH:MM:SS`, 24-hour, no offset, no fractional seconds
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time as `YYYY-MM-DD HH:MM:SS`
pub fn get_current_datetime() -> String {
    format_timestamp(&Local::now())
}

pub fn format_timestamp<Tz>(timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.format(DATETIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use regex::Regex;

    #[test]
    fn test_current_datetime_shape() {
        let pattern = Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("valid regex");
        let now = get_current_datetime();
        assert!(pattern.is_match(&now), "unexpected format: {}", now);
    }

    #[test]
    fn test_format_timestamp_zero_pads() {
        let timestamp = Utc
            .with_ymd_and_hms(2024, 3, 7, 5, 4, 9)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_timestamp(&timestamp), "2024-03-07 05:04:09");
    }

    #[test]
    fn test_format_timestamp_24_hour_clock() {
        let timestamp = Utc
            .with_ymd_and_hms(1999, 12, 31, 23, 59, 59)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_timestamp(&timestamp), "1999-12-31 23:59:59");
    }
}
