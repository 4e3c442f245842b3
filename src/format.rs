/// Display formatting for delivery dates and times
///
/// Orders store their delivery date and time as already formatted strings,
/// so the format is applied exactly once, at submission.

use crate::error::{ConfigError, ConfigResult};
use chrono::{NaiveDate, NaiveTime};
use std::fmt::Write;

/// Day/month/year, as rendered by pt-BR devices
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Two-digit hour and minute
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// strftime patterns used to render delivery dates and times
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFormat {
    date_format: String,
    time_format: String,
}

impl Default for DeliveryFormat {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl DeliveryFormat {
    /// Build a format, rejecting patterns chrono cannot render for a
    /// date (respectively a time of day)
    pub fn new(date_format: &str, time_format: &str) -> ConfigResult<Self> {
        let sample_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let sample_time = NaiveTime::MIN;

        let mut probe = String::new();
        if write!(probe, "{}", sample_date.format(date_format)).is_err() {
            return Err(ConfigError::InvalidFormat {
                kind: "date",
                format: date_format.to_string(),
            });
        }
        probe.clear();
        if write!(probe, "{}", sample_time.format(time_format)).is_err() {
            return Err(ConfigError::InvalidFormat {
                kind: "time",
                format: time_format.to_string(),
            });
        }

        Ok(Self {
            date_format: date_format.to_string(),
            time_format: time_format.to_string(),
        })
    }

    /// Render a delivery date
    pub fn date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        // Patterns are checked in `new`; the default never fails.
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            out = date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        out
    }

    /// Render a delivery time
    pub fn time(&self, time: NaiveTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", time.format(&self.time_format)).is_err() {
            out = time.format(DEFAULT_TIME_FORMAT).to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format() {
        let format = DeliveryFormat::default();
        let date = NaiveDate::from_ymd_opt(2026, 10, 8).unwrap();
        let time = NaiveTime::from_hms_opt(7, 5, 42).unwrap();

        assert_eq!(format.date(date), "08/10/2026");
        assert_eq!(format.time(time), "07:05");
    }

    #[test]
    fn test_custom_format() {
        let format = DeliveryFormat::new("%Y-%m-%d", "%Hh%M").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let time = NaiveTime::from_hms_opt(18, 30, 0).unwrap();

        assert_eq!(format.date(date), "2026-01-31");
        assert_eq!(format.time(time), "18h30");
    }

    #[test]
    fn test_invalid_formats_rejected() {
        assert!(matches!(
            DeliveryFormat::new("%Q", DEFAULT_TIME_FORMAT),
            Err(ConfigError::InvalidFormat { kind: "date", .. })
        ));
        // A time-of-day field cannot be rendered from a bare date
        assert!(DeliveryFormat::new("%H", DEFAULT_TIME_FORMAT).is_err());
        assert!(matches!(
            DeliveryFormat::new(DEFAULT_DATE_FORMAT, "%Y"),
            Err(ConfigError::InvalidFormat { kind: "time", .. })
        ));
    }
}
