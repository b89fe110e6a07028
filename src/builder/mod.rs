//! Request assembly (verb module)
//!
//! Board snapshot + widget id → `RequestParams`, through the collaborator
//! seams in `base`, `view` and `report`.

mod build;
mod base;
mod view;
mod report;
mod context;
mod error;

pub use build::{build_board_requests, build_chart_widget_request, try_build_chart_widget_request};
pub use base::{ChartConfigBuilder, RequestBuilder};
pub use view::{JsonViewConfig, ViewConfigTransformer};
pub use report::{ErrorReporter, TracingReporter};
pub use context::{BuildContext, BuildOptions, LinkFanOut};
pub use error::BuildError;
