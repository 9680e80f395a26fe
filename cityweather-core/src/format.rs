use chrono::{DateTime, Local, TimeZone};

pub const UNKNOWN: &str = "N/A";

/// Format epoch seconds as local `HH:MM`, or `N/A` when absent.
pub fn format_epoch_seconds(ts: Option<i64>) -> String {
    format_epoch_seconds_in(ts, &Local)
}

pub fn format_epoch_seconds_in<Tz>(ts: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(tz).format("%H:%M").to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// `value` followed by `suffix`, or `N/A` when absent.
pub(crate) fn or_unknown<T: std::fmt::Display>(value: Option<T>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{v}{suffix}"),
        None => UNKNOWN.to_string(),
    }
}
