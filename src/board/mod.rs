//! Board snapshot types (noun module)

mod types;
mod widget;
mod chart;
mod view;
mod snapshot;

pub use types::{AggOperator, FieldCategory, ParseEnumError, SqlOperator, ValueType, WidgetKind};
pub use widget::{
    scalar_to_string, DateMode, FilterDate, FilterToWidget, FilterWidgetContent, RelatedView,
    Relation, RelationConfig, RelativeOrExact, TimeBound, TimeSpec, Widget, WidgetConfig,
    WidgetContent, WidgetFilter,
};
pub use chart::{
    ChartConfig, ChartSettings, ComputedField, DataChart, DataChartConfig, DataSection,
    FieldFilter, FieldSort, GroupColumn, PagingSettings, SectionField, SectionKind, SortDirection,
};
pub use view::View;
pub use snapshot::Board;
