//! Date and time helpers for the booking form.
//!
//! The form collects a date as `YYYY-MM-DD` and a time as `HH:mm` (24h),
//! both interpreted in the device's local time zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Walk lengths a booking may use, in minutes.
pub const ALLOWED_DURATIONS: [u32; 4] = [30, 45, 60, 90];

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));
static TIME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid regex"));

pub fn is_allowed_duration(minutes: u32) -> bool {
    ALLOWED_DURATIONS.contains(&minutes)
}

/// Strips every non-digit character.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Live-formats partial input towards `YYYY-MM-DD`.
pub fn format_date_input(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(8).collect();
    let (year, rest) = digits.split_at(digits.len().min(4));
    let (month, day) = rest.split_at(rest.len().min(2));

    let mut out = year.to_string();
    if !month.is_empty() {
        out.push('-');
        out.push_str(month);
    }
    if !day.is_empty() {
        out.push('-');
        out.push_str(day);
    }
    out
}

/// Live-formats partial input towards `HH:mm`, clamping complete fields to 23 and 59.
pub fn format_time_input(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(4).collect();
    let (hour, minute) = digits.split_at(digits.len().min(2));

    let hour = clamp_field(hour, 23);
    if minute.is_empty() {
        return hour;
    }
    format!("{}:{}", hour, clamp_field(minute, 59))
}

fn clamp_field(field: &str, max: u32) -> String {
    if field.len() != 2 {
        return field.to_string();
    }
    let value = field.parse::<u32>().unwrap_or(0).min(max);
    format!("{:02}", value)
}

/// Format-only check; `2026-13-45` passes.
pub fn is_valid_date(s: &str) -> bool {
    DATE_RE.is_match(s)
}

/// Format-only check; `99:99` passes.
pub fn is_valid_time(s: &str) -> bool {
    TIME_RE.is_match(s)
}

pub fn is_future(instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    instant > now
}

/// Combines form fields into a UTC instant, reading them as local time.
///
/// Returns `None` for malformed or impossible dates and times, and for local
/// times skipped by a DST transition.
pub fn build_start_time(date: &str, time: &str) -> Option<DateTime<Utc>> {
    build_start_time_in(&Local, date, time)
}

/// [`build_start_time`] for an explicit time zone.
pub fn build_start_time_in<Tz: TimeZone>(tz: &Tz, date: &str, time: &str) -> Option<DateTime<Utc>> {
    if !is_valid_date(date) || !is_valid_time(time) {
        return None;
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    let local = NaiveDateTime::new(date, time);

    tz.from_local_datetime(&local)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
