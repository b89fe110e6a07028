//! Relative time resolution (verb module)
//!
//! Turns the relative parts of date filters into concrete timestamps:
//! - `unit` - relative spec types (amount, unit, direction)
//! - `relative` - shift and snap a moment to a unit boundary
//! - `range` - named ranges and the `TimeRangeConverter` seam

mod unit;
mod relative;
mod range;
mod error;

pub use unit::{Direction, RelativeTime, TimeUnit};
pub use relative::{end_of, format_time, resolve_relative, shift, snap, start_of, Edge, TIME_FORMAT};
pub use range::{CalendarRanges, CommonRange, TimeRangeConverter};
pub use error::TimeError;
