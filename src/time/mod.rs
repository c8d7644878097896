//! Time module
//!
//! The engine measures time as days since J2000 (JD 2451545.0,
//! 2000-01-01T12:00:00). This module converts between that scale and
//! calendar datetimes, and renders elapsed time for display.
//!
//! The TT/UTC offset (about a minute) is ignored; at the accuracy of the
//! low-precision planetary elements it is irrelevant.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

use crate::constants::{DAY_S, J2000};

/// Error type for time operations
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("Time out of range: {0} days since J2000")]
    OutOfRange(f64),
}

/// Result type for time operations
pub type Result<T> = std::result::Result<T, TimeError>;

// Evaluated at compile time, so an invalid literal fails the build
const J2000_DATETIME: NaiveDateTime = {
    let date = match NaiveDate::from_ymd_opt(2000, 1, 1) {
        Some(date) => date,
        None => panic!("invalid J2000 date"),
    };
    let noon = match NaiveTime::from_hms_opt(12, 0, 0) {
        Some(time) => time,
        None => panic!("invalid J2000 time"),
    };
    NaiveDateTime::new(date, noon)
};

/// The J2000 epoch as a UTC datetime
pub fn j2000_epoch() -> DateTime<Utc> {
    J2000_DATETIME.and_utc()
}

/// Days elapsed since J2000 at `datetime`
pub fn days_since_j2000(datetime: DateTime<Utc>) -> f64 {
    let elapsed = datetime.signed_duration_since(j2000_epoch());
    match elapsed.num_microseconds() {
        Some(us) => us as f64 / 1.0e6 / DAY_S,
        None => elapsed.num_milliseconds() as f64 / 1.0e3 / DAY_S,
    }
}

/// Julian date for `t` days since J2000
pub fn julian_date(t: f64) -> f64 {
    J2000 + t
}

/// UTC datetime `t` days after J2000
///
/// # Errors
///
/// [`TimeError::OutOfRange`] when `t` is not finite or falls outside the
/// range chrono can represent (roughly ±262,000 years).
pub fn datetime_from_days(t: f64) -> Result<DateTime<Utc>> {
    if !t.is_finite() {
        return Err(TimeError::OutOfRange(t));
    }
    let millis = (t * DAY_S * 1.0e3).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::OutOfRange(t));
    }
    Duration::try_milliseconds(millis as i64)
        .and_then(|offset| j2000_epoch().checked_add_signed(offset))
        .ok_or(TimeError::OutOfRange(t))
}

/// Short human-readable offset such as `+3 yrs 12 days` or `-1.25 Kyrs`
///
/// Years are counted as 365 days. Offsets of a thousand years or more are
/// truncated to two decimals in thousands (`Kyrs`) or millions (`Myrs`).
///
/// ```rust
/// use orrery::time::format_offset;
///
/// assert_eq!(format_offset(40.7), "+40 days");
/// assert_eq!(format_offset(-400.0), "-1 yrs 35 days");
/// assert_eq!(format_offset(365.0 * 12_345.0), "+12.34 Kyrs");
/// ```
pub fn format_offset(t: f64) -> String {
    let sign = if t < 0.0 { '-' } else { '+' };
    let t = t.abs();
    let years = (t / 365.0).floor();
    let days = (t % 365.0).floor();

    let body = if years >= 1.0e6 {
        format!("{} Myrs", (years / 1.0e4).floor() / 100.0)
    } else if years >= 1.0e3 {
        format!("{} Kyrs", (years / 10.0).floor() / 100.0)
    } else if years >= 10.0 {
        format!("{} yrs", years)
    } else if years >= 1.0 {
        format!("{} yrs {} days", years, days)
    } else {
        format!("{} days", days)
    };
    format!("{}{}", sign, body)
}
