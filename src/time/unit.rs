//! Relative time specification types

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::board::ParseEnumError;
use super::error::TimeError;

/// Calendar unit of a relative time offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeUnit::Second => write!(f, "s"),
            TimeUnit::Minute => write!(f, "m"),
            TimeUnit::Hour => write!(f, "h"),
            TimeUnit::Day => write!(f, "d"),
            TimeUnit::Week => write!(f, "w"),
            TimeUnit::Month => write!(f, "M"),
            TimeUnit::Quarter => write!(f, "Q"),
            TimeUnit::Year => write!(f, "y"),
        }
    }
}

impl FromStr for TimeUnit {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Short tokens are case-sensitive: "M" is month, "m" is minute
        match s {
            "s" => return Ok(TimeUnit::Second),
            "m" => return Ok(TimeUnit::Minute),
            "h" => return Ok(TimeUnit::Hour),
            "d" => return Ok(TimeUnit::Day),
            "w" => return Ok(TimeUnit::Week),
            "M" => return Ok(TimeUnit::Month),
            "Q" => return Ok(TimeUnit::Quarter),
            "y" => return Ok(TimeUnit::Year),
            _ => {}
        }
        match s.to_lowercase().trim_end_matches('s') {
            "second" => Ok(TimeUnit::Second),
            "minute" => Ok(TimeUnit::Minute),
            "hour" => Ok(TimeUnit::Hour),
            "day" => Ok(TimeUnit::Day),
            "week" => Ok(TimeUnit::Week),
            "month" => Ok(TimeUnit::Month),
            "quarter" => Ok(TimeUnit::Quarter),
            "year" => Ok(TimeUnit::Year),
            _ => Err(ParseEnumError { kind: "time unit", input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for TimeUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TimeUnit::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for TimeUnit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Sign applied to a relative amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Into the past ("-")
    #[default]
    Ago,
    /// Into the future ("+")
    Later,
}

impl Direction {
    /// `None` when the signed amount does not fit in an `i64`
    pub fn apply(self, amount: i64) -> Option<i64> {
        match self {
            Direction::Ago => amount.checked_neg(),
            Direction::Later => Some(amount),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ago => write!(f, "-"),
            Direction::Later => write!(f, "+"),
        }
    }
}

impl FromStr for Direction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Direction::Ago),
            "+" | "" => Ok(Direction::Later),
            _ => Err(ParseEnumError { kind: "direction", input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Direction::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A moment expressed relative to "now": `direction * amount` units away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RelativeTime {
    pub amount: i64,
    pub unit: TimeUnit,
    #[serde(default)]
    pub direction: Direction,
}

impl RelativeTime {
    /// Signed offset in units
    pub fn offset(&self) -> Result<i64, TimeError> {
        self.direction.apply(self.amount).ok_or(TimeError::OutOfRange {
            amount: self.amount,
            unit: self.unit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tokens_are_case_sensitive() {
        assert_eq!("M".parse::<TimeUnit>().unwrap(), TimeUnit::Month);
        assert_eq!("m".parse::<TimeUnit>().unwrap(), TimeUnit::Minute);
        assert_eq!("Q".parse::<TimeUnit>().unwrap(), TimeUnit::Quarter);
    }

    #[test]
    fn test_unit_long_names() {
        assert_eq!("days".parse::<TimeUnit>().unwrap(), TimeUnit::Day);
        assert_eq!("Week".parse::<TimeUnit>().unwrap(), TimeUnit::Week);
        assert_eq!("years".parse::<TimeUnit>().unwrap(), TimeUnit::Year);
        assert!("fortnight".parse::<TimeUnit>().is_err());
    }

    #[test]
    fn test_relative_offset_sign() {
        let rel: RelativeTime =
            serde_json::from_str(r#"{"amount": 7, "unit": "d", "direction": "-"}"#).unwrap();
        assert_eq!(rel.offset(), Ok(-7));

        let rel: RelativeTime =
            serde_json::from_str(r#"{"amount": 2, "unit": "M", "direction": "+"}"#).unwrap();
        assert_eq!(rel.offset(), Ok(2));
        assert_eq!(rel.unit, TimeUnit::Month);
    }
}
