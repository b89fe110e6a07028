//! Chart-data request types (noun module)

mod request;
mod link;

pub use request::{
    Aggregator, ChartRequestFilter, FilterValue, FunctionColumn, GroupBy, Order, PageInfo,
    RequestParams, Variables, ViewConfigPatch,
};
pub use link::{BoardLinkFilter, PageOverrides};
