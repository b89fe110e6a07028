use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use crate::board::{scalar_to_string, AggOperator, SortDirection, SqlOperator, ValueType};

/// Variable name to substituted values
pub type Variables = BTreeMap<String, Vec<String>>;

/// A single filter value tagged with its semantic type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterValue {
    pub value: Value,
    pub value_type: ValueType,
}

impl FilterValue {
    pub fn new(value: impl Into<Value>, value_type: ValueType) -> Self {
        Self { value: value.into(), value_type }
    }

    /// The value as it is substituted into a variable
    pub fn to_query_string(&self) -> String {
        scalar_to_string(&self.value)
    }
}

/// A normalized filter clause understood by the backend query layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequestFilter {
    pub agg_operator: Option<AggOperator>,
    pub column: String,
    pub sql_operator: SqlOperator,
    pub values: Vec<FilterValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregator {
    pub column: String,
    pub sql_operator: AggOperator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub column: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub column: String,
    pub operator: SortDirection,
    #[serde(default)]
    pub agg_operator: Option<AggOperator>,
}

/// A computed column shipped with the query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionColumn {
    pub alias: String,
    pub snippet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_total: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// View-level settings merged over a base request; present keys overwrite
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfigPatch {
    #[serde(default)]
    pub cache: Option<bool>,
    #[serde(default)]
    pub cache_expires: Option<u64>,
    #[serde(default)]
    pub concurrency_control: Option<bool>,
    #[serde(default)]
    pub concurrency_control_mode: Option<String>,
}

/// The query sent to the chart-data backend for one chart widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    pub view_id: String,
    #[serde(default)]
    pub aggregators: Vec<Aggregator>,
    #[serde(default)]
    pub groups: Vec<GroupBy>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub filters: Vec<ChartRequestFilter>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub function_columns: Vec<FunctionColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub params: Variables,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_expires: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency_control: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concurrency_control_mode: Option<String>,
}

impl RequestParams {
    pub fn apply_view_config(&mut self, patch: ViewConfigPatch) {
        if patch.cache.is_some() {
            self.cache = patch.cache;
        }
        if patch.cache_expires.is_some() {
            self.cache_expires = patch.cache_expires;
        }
        if patch.concurrency_control.is_some() {
            self.concurrency_control = patch.concurrency_control;
        }
        if patch.concurrency_control_mode.is_some() {
            self.concurrency_control_mode = patch.concurrency_control_mode;
        }
    }

    /// Override the page number only; other pagination fields stay as built.
    /// No-op for requests without pagination.
    pub fn set_page_no(&mut self, page_no: u32) {
        if let Some(page_info) = self.page_info.as_mut() {
            page_info.page_no = Some(page_no);
        }
    }
}
