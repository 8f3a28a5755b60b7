//! Parsing of loosely typed terminal input.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use pawwalk_core::booking::schedule::{
    build_start_time, format_date_input, format_time_input, is_valid_date, is_valid_time,
};

/// Turns `date` and `time` (digits are enough) into a UTC instant in local time.
pub fn start_time(date: &str, time: &str) -> Result<DateTime<Utc>> {
    let date = format_date_input(date);
    let time = format_time_input(time);

    if !is_valid_date(&date) {
        bail!("Enter the date as YYYY-MM-DD");
    }
    if !is_valid_time(&time) {
        bail!("Enter the time as HH:MM");
    }

    match build_start_time(&date, &time) {
        Some(start) => Ok(start),
        None => bail!("{} {} is not a valid local time", date, time),
    }
}
