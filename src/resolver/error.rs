use std::fmt;
use crate::time::TimeError;

/// Errors that can occur while resolving a filter widget's values
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A date filter whose selected form carries no data
    /// (e.g. a relative bound without its relative spec)
    MalformedDateSpec { reason: String },
    /// A relative bound or named range could not be turned into a timestamp
    Time(TimeError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MalformedDateSpec { reason } => write!(f, "Malformed date filter: {}", reason),
            ResolveError::Time(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Time(err) => Some(err),
            ResolveError::MalformedDateSpec { .. } => None,
        }
    }
}

impl From<TimeError> for ResolveError {
    fn from(err: TimeError) -> Self {
        ResolveError::Time(err)
    }
}
