//! Calendar arithmetic on `NaiveDateTime`
//!
//! Offsets shift by whole units; month-based units clamp to the end of the
//! target month the way calendar pickers do (Jan 31 + 1M = Feb 28/29).
//! Weeks start on Monday.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use super::error::TimeError;
use super::unit::{RelativeTime, TimeUnit};

/// Timestamp format of every resolved bound
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which end of the unit a resolved bound snaps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Floor to the first second of the unit
    Start,
    /// Ceil to the last second of the unit
    End,
}

pub fn format_time(time: NaiveDateTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Resolve a relative spec against `now`, snapped to `edge` of its unit
pub fn resolve_relative(
    relative: &RelativeTime,
    now: NaiveDateTime,
    edge: Edge,
) -> Result<String, TimeError> {
    let shifted = shift(now, relative.offset()?, relative.unit)?;
    let snapped = snap(shifted, relative.unit, edge)?;
    Ok(format_time(snapped))
}

pub fn snap(time: NaiveDateTime, unit: TimeUnit, edge: Edge) -> Result<NaiveDateTime, TimeError> {
    match edge {
        Edge::Start => start_of(time, unit),
        Edge::End => end_of(time, unit),
    }
}

/// Move `time` by `offset` whole units
pub fn shift(time: NaiveDateTime, offset: i64, unit: TimeUnit) -> Result<NaiveDateTime, TimeError> {
    let out_of_range = || TimeError::OutOfRange { amount: offset, unit };

    let seconds_per_unit = match unit {
        TimeUnit::Second => Some(1),
        TimeUnit::Minute => Some(60),
        TimeUnit::Hour => Some(3_600),
        TimeUnit::Day => Some(86_400),
        TimeUnit::Week => Some(604_800),
        TimeUnit::Month | TimeUnit::Quarter | TimeUnit::Year => None,
    };

    if let Some(per_unit) = seconds_per_unit {
        let delta = offset
            .checked_mul(per_unit)
            .and_then(TimeDelta::try_seconds)
            .ok_or_else(out_of_range)?;
        return time.checked_add_signed(delta).ok_or_else(out_of_range);
    }

    let months_per_unit = match unit {
        TimeUnit::Quarter => 3,
        TimeUnit::Year => 12,
        _ => 1,
    };
    let months = offset.checked_mul(months_per_unit).ok_or_else(out_of_range)?;
    let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| out_of_range())?;
    let shifted = if months >= 0 {
        time.checked_add_months(Months::new(magnitude))
    } else {
        time.checked_sub_months(Months::new(magnitude))
    };
    shifted.ok_or_else(out_of_range)
}

/// First second of the unit containing `time`
pub fn start_of(time: NaiveDateTime, unit: TimeUnit) -> Result<NaiveDateTime, TimeError> {
    let date = time.date();
    let start = match unit {
        TimeUnit::Second => date.and_hms_opt(time.hour(), time.minute(), time.second()),
        TimeUnit::Minute => date.and_hms_opt(time.hour(), time.minute(), 0),
        TimeUnit::Hour => date.and_hms_opt(time.hour(), 0, 0),
        TimeUnit::Day => date.and_hms_opt(0, 0, 0),
        TimeUnit::Week => {
            let back = i64::from(date.weekday().num_days_from_monday());
            TimeDelta::try_days(back)
                .and_then(|d| date.checked_sub_signed(d))
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        }
        TimeUnit::Month => first_of_month(date.year(), date.month()),
        TimeUnit::Quarter => first_of_month(date.year(), (date.month0() / 3) * 3 + 1),
        TimeUnit::Year => first_of_month(date.year(), 1),
    };
    start.ok_or(TimeError::OutOfRange { amount: 0, unit })
}

/// Last whole second of the unit containing `time`
pub fn end_of(time: NaiveDateTime, unit: TimeUnit) -> Result<NaiveDateTime, TimeError> {
    let next = shift(start_of(time, unit)?, 1, unit)?;
    TimeDelta::try_seconds(1)
        .and_then(|one| next.checked_sub_signed(one))
        .ok_or(TimeError::OutOfRange { amount: 1, unit })
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}
