//! Date utilities: timezone-aware "today" and human date formatting.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar day in an IANA timezone like "Asia/Kolkata".
pub fn today_in(tz: &str) -> Result<NaiveDate> {
    date_in(Utc::now(), tz)
}

/// Calendar day of `now` as seen from `tz`.
pub fn date_in(now: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// "Feb 1, 2026"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// "February 1, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
