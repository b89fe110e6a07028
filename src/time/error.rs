use std::fmt;
use super::unit::TimeUnit;

/// Errors that can occur while turning relative time specs into timestamps
#[derive(Debug, Clone, PartialEq)]
pub enum TimeError {
    /// A named range token nobody knows how to expand
    UnknownRange(String),
    /// Shifting by the given amount leaves chrono's representable range
    OutOfRange { amount: i64, unit: TimeUnit },
}

impl fmt::Display for TimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeError::UnknownRange(token) => write!(f, "Unknown relative time range '{}'", token),
            TimeError::OutOfRange { amount, unit } => {
                write!(f, "Time offset {}{} is out of range", amount, unit)
            }
        }
    }
}

impl std::error::Error for TimeError {}
