mod resolve;
mod values;
mod types;
mod error;

pub use resolve::resolve_filters_for_widget;
pub use values::{date_values, resolve_values};
pub use types::{ResolveContext, ResolvedFilters};
pub use error::ResolveError;
