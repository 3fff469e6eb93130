use chrono::{Days, NaiveDate};

/// Wire format of every date sent to the report service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default value of both date inputs: the day before `today`.
pub fn default_report_date(today: NaiveDate) -> String {
    today
        .checked_sub_days(Days::new(1))
        .unwrap_or(today)
        .format(DATE_FORMAT)
        .to_string()
}

/// Parses a `YYYY-MM-DD` input value.
pub fn parse_report_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // chrono accepts unpadded fields; the wire format does not.
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
