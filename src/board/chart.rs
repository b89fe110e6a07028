//! Saved chart definitions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::types::{AggOperator, SqlOperator, ValueType};

/// A saved chart: a view plus chart-type configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataChart {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub view_id: String,
    #[serde(default)]
    pub config: DataChartConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataChartConfig {
    #[serde(default)]
    pub chart_config: ChartConfig,
    #[serde(default)]
    pub computed_fields: Vec<ComputedField>,
    /// When false, aggregate rows are selected as plain columns
    #[serde(default = "default_aggregation")]
    pub aggregation: bool,
}

impl Default for DataChartConfig {
    fn default() -> Self {
        Self {
            chart_config: ChartConfig::default(),
            computed_fields: Vec::new(),
            aggregation: true,
        }
    }
}

fn default_aggregation() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub datas: Vec<DataSection>,
    #[serde(default)]
    pub settings: ChartSettings,
}

/// One drop zone of the chart editor ("dimensions", "metrics", "filters", ...)
#[derive(Debug, Clone, Deserialize)]
pub struct DataSection {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default)]
    pub rows: Vec<SectionField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Group,
    Aggregate,
    Filter,
    Color,
    Info,
    Size,
    Mixed,
}

impl SectionKind {
    /// Sections whose rows become GROUP BY columns
    pub fn is_grouping(self) -> bool {
        matches!(self, SectionKind::Group | SectionKind::Color)
    }

    /// Sections whose rows are selected as (possibly aggregated) values
    pub fn is_value(self) -> bool {
        matches!(
            self,
            SectionKind::Aggregate | SectionKind::Size | SectionKind::Info | SectionKind::Mixed
        )
    }
}

/// A column placed in a section
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionField {
    pub col_name: String,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
    #[serde(default)]
    pub aggregate: Option<AggOperator>,
    #[serde(default)]
    pub sort: Option<FieldSort>,
    #[serde(default)]
    pub filter: Option<FieldFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldSort {
    #[serde(rename = "type")]
    pub direction: SortDirection,
}

/// The chart's own filter condition on a column
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldFilter {
    pub sql_operator: SqlOperator,
    #[serde(default)]
    pub values: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartSettings {
    #[serde(default)]
    pub paging: Option<PagingSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingSettings {
    #[serde(default)]
    pub enable_paging: bool,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    100
}

/// A chart-level calculated column
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedField {
    pub id: String,
    pub expression: String,
    #[serde(rename = "type", default)]
    pub value_type: ValueType,
}

/// A GROUP BY column of a chart, in section order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupColumn {
    pub col_name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

impl DataChart {
    /// All rows of all sections, section order first
    pub fn fields(&self) -> impl Iterator<Item = (SectionKind, &SectionField)> + '_ {
        self.config
            .chart_config
            .datas
            .iter()
            .flat_map(|section| section.rows.iter().map(move |row| (section.kind, row)))
    }

    pub fn paging(&self) -> Option<&PagingSettings> {
        self.config
            .chart_config
            .settings
            .paging
            .as_ref()
            .filter(|p| p.enable_paging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_data_chart() {
        let chart: DataChart = serde_json::from_value(json!({
            "id": "dc1",
            "viewId": "v1",
            "config": {
                "chartConfig": {
                    "datas": [
                        { "key": "dimension", "type": "group", "rows": [{ "colName": "region", "type": "STRING" }] },
                        { "key": "metrics", "type": "aggregate", "rows": [{ "colName": "sales", "type": "NUMERIC", "aggregate": "SUM", "sort": { "type": "DESC" } }] }
                    ],
                    "settings": { "paging": { "enablePaging": true, "pageSize": 20 } }
                },
                "computedFields": [{ "id": "margin", "expression": "[sales] - [cost]", "type": "NUMERIC" }]
            }
        }))
        .unwrap();

        assert!(chart.config.aggregation);
        assert_eq!(chart.fields().count(), 2);
        assert_eq!(chart.paging().map(|p| p.page_size), Some(20));
        let (kind, metric) = chart.fields().nth(1).unwrap();
        assert_eq!(kind, SectionKind::Aggregate);
        assert_eq!(metric.aggregate, Some(AggOperator::Sum));
        assert_eq!(metric.sort.as_ref().map(|s| s.direction), Some(SortDirection::Desc));
    }

    #[test]
    fn test_disabled_paging_is_ignored() {
        let chart: DataChart = serde_json::from_value(json!({
            "id": "dc1",
            "viewId": "v1",
            "config": { "chartConfig": { "settings": { "paging": { "enablePaging": false } } } }
        }))
        .unwrap();
        assert!(chart.paging().is_none());
    }
}
