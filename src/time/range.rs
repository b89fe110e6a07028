//! Named relative ranges ("today", "last7Days", ...)

use chrono::NaiveDateTime;
use std::str::FromStr;
use super::error::TimeError;
use super::relative::{format_time, shift, snap, Edge};
use super::unit::TimeUnit;

/// Expands a named range token into a concrete `[start, end]` pair
pub trait TimeRangeConverter {
    fn convert(&self, token: &str, now: NaiveDateTime) -> Result<[String; 2], TimeError>;
}

/// A named range relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonRange {
    Today,
    Yesterday,
    ThisWeek,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisQuarter,
    LastQuarter,
    ThisYear,
    LastYear,
    /// The last N calendar days, today included
    LastDays(u32),
}

impl FromStr for CommonRange {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let range = match lower.as_str() {
            "today" => CommonRange::Today,
            "yesterday" => CommonRange::Yesterday,
            "thisweek" => CommonRange::ThisWeek,
            "lastweek" => CommonRange::LastWeek,
            "thismonth" => CommonRange::ThisMonth,
            "lastmonth" => CommonRange::LastMonth,
            "thisquarter" => CommonRange::ThisQuarter,
            "lastquarter" => CommonRange::LastQuarter,
            "thisyear" => CommonRange::ThisYear,
            "lastyear" => CommonRange::LastYear,
            other => other
                .strip_prefix("last")
                .and_then(|rest| rest.strip_suffix("days"))
                .and_then(|n| n.parse::<u32>().ok())
                .filter(|&n| n > 0)
                .map(CommonRange::LastDays)
                .ok_or_else(|| TimeError::UnknownRange(s.to_string()))?,
        };
        Ok(range)
    }
}

impl CommonRange {
    pub fn bounds(self, now: NaiveDateTime) -> Result<(NaiveDateTime, NaiveDateTime), TimeError> {
        let (offset, unit) = match self {
            CommonRange::Today => (0, TimeUnit::Day),
            CommonRange::Yesterday => (-1, TimeUnit::Day),
            CommonRange::ThisWeek => (0, TimeUnit::Week),
            CommonRange::LastWeek => (-1, TimeUnit::Week),
            CommonRange::ThisMonth => (0, TimeUnit::Month),
            CommonRange::LastMonth => (-1, TimeUnit::Month),
            CommonRange::ThisQuarter => (0, TimeUnit::Quarter),
            CommonRange::LastQuarter => (-1, TimeUnit::Quarter),
            CommonRange::ThisYear => (0, TimeUnit::Year),
            CommonRange::LastYear => (-1, TimeUnit::Year),
            CommonRange::LastDays(days) => {
                let first = shift(now, 1 - i64::from(days), TimeUnit::Day)?;
                return Ok((snap(first, TimeUnit::Day, Edge::Start)?, snap(now, TimeUnit::Day, Edge::End)?));
            }
        };
        let anchor = shift(now, offset, unit)?;
        Ok((snap(anchor, unit, Edge::Start)?, snap(anchor, unit, Edge::End)?))
    }
}

/// Default converter: calendar-aligned ranges formatted as `YYYY-MM-DD HH:mm:ss`
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarRanges;

impl TimeRangeConverter for CalendarRanges {
    fn convert(&self, token: &str, now: NaiveDateTime) -> Result<[String; 2], TimeError> {
        let (start, end) = token.parse::<CommonRange>()?.bounds(now)?;
        Ok([format_time(start), format_time(end)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TIME_FORMAT;

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2024-03-13 15:42:10", TIME_FORMAT).unwrap()
    }

    fn convert(token: &str) -> [String; 2] {
        CalendarRanges.convert(token, now()).unwrap()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("last7Days".parse::<CommonRange>().unwrap(), CommonRange::LastDays(7));
        assert_eq!("last7days".parse::<CommonRange>().unwrap(), CommonRange::LastDays(7));
        assert_eq!("thisQuarter".parse::<CommonRange>().unwrap(), CommonRange::ThisQuarter);
        assert!("last0Days".parse::<CommonRange>().is_err());
        assert!(matches!("soon".parse::<CommonRange>(), Err(TimeError::UnknownRange(t)) if t == "soon"));
    }

    #[test]
    fn test_day_ranges() {
        assert_eq!(convert("today"), ["2024-03-13 00:00:00", "2024-03-13 23:59:59"]);
        assert_eq!(convert("yesterday"), ["2024-03-12 00:00:00", "2024-03-12 23:59:59"]);
        assert_eq!(convert("last7days"), ["2024-03-07 00:00:00", "2024-03-13 23:59:59"]);
    }

    #[test]
    fn test_calendar_ranges() {
        assert_eq!(convert("lastWeek"), ["2024-03-04 00:00:00", "2024-03-10 23:59:59"]);
        assert_eq!(convert("thisMonth"), ["2024-03-01 00:00:00", "2024-03-31 23:59:59"]);
        assert_eq!(convert("lastQuarter"), ["2023-10-01 00:00:00", "2023-12-31 23:59:59"]);
        assert_eq!(convert("thisYear"), ["2024-01-01 00:00:00", "2024-12-31 23:59:59"]);
    }
}
