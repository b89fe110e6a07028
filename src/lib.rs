//! boardquery - Resolve dashboard filter widgets into chart-data requests
//!
//! Given a board snapshot (widgets, views, saved charts), this library works
//! out what each chart widget must ask the backend for: the chart's own query
//! plus the filters and variables contributed by the board's filter widgets
//! and link (click-to-filter) events.
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `board/` - snapshot types (Board, Widget, DataChart, View)
//! - `query/` - request types (RequestParams, ChartRequestFilter, BoardLinkFilter)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML / JSON → Board
//! - `time/` - relative time specs → timestamps
//! - `resolver/` - filter widgets + target widget → ResolvedFilters
//! - `builder/` - Board + widget id → RequestParams
//!
//! Everything is a pure function over the snapshot; issuing the requests is
//! left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use boardquery::{parser, build_board_requests, BuildContext};
//!
//! let board = parser::parse_file("board.json")?;
//! let requests = build_board_requests(&board, &BuildContext::now());
//! ```

pub mod board;
pub mod query;
pub mod time;
pub mod resolver;
pub mod builder;
pub mod parser;
pub mod error;

// Re-export commonly used types
pub use board::{Board, DataChart, FieldCategory, FilterWidgetContent, SqlOperator, ValueType, View, Widget, WidgetFilter};
pub use query::{BoardLinkFilter, ChartRequestFilter, FilterValue, PageInfo, PageOverrides, RequestParams, Variables};
pub use time::{CalendarRanges, TimeError, TimeRangeConverter};
pub use resolver::{resolve_filters_for_widget, resolve_values, ResolveContext, ResolveError, ResolvedFilters};
pub use builder::{
    build_board_requests, build_chart_widget_request, try_build_chart_widget_request, BuildContext,
    BuildError, BuildOptions, ErrorReporter, LinkFanOut, RequestBuilder, ViewConfigTransformer,
};
pub use error::ParseError;
