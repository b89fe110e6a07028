//! Base request building from a saved chart's own configuration

use crate::board::{DataChart, GroupColumn, SectionKind};
use crate::query::{
    Aggregator, ChartRequestFilter, FilterValue, FunctionColumn, GroupBy, Order, PageInfo,
    RequestParams,
};

/// Builds the request a chart issues on its own, before any board filters
pub trait RequestBuilder {
    fn build(&self, chart: &DataChart) -> RequestParams;

    /// The chart's GROUP BY columns in section order
    fn group_columns(&self, chart: &DataChart) -> Vec<GroupColumn>;
}

/// Default builder reading the chart editor's sections
///
/// - group/color rows become groups (plain columns when aggregation is off)
/// - value rows become aggregators when they carry an aggregate, columns otherwise
/// - filter rows with a condition become the chart's own filters
/// - any row with a sort becomes an order
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartConfigBuilder;

impl RequestBuilder for ChartConfigBuilder {
    fn build(&self, chart: &DataChart) -> RequestParams {
        let aggregation = chart.config.aggregation;
        let mut request = RequestParams {
            view_id: chart.view_id.clone(),
            ..Default::default()
        };

        for (kind, field) in chart.fields() {
            let column = field.col_name.clone();
            let aggregate = field.aggregate.filter(|_| aggregation);

            if kind.is_grouping() {
                if aggregation {
                    request.groups.push(GroupBy { column: column.clone() });
                } else {
                    request.columns.push(column.clone());
                }
            }

            if kind.is_value() {
                match aggregate {
                    Some(op) => request.aggregators.push(Aggregator {
                        column: column.clone(),
                        sql_operator: op,
                    }),
                    None => request.columns.push(column.clone()),
                }
            }

            if kind == SectionKind::Filter {
                if let Some(condition) = &field.filter {
                    request.filters.push(ChartRequestFilter {
                        agg_operator: aggregate,
                        column: column.clone(),
                        sql_operator: condition.sql_operator,
                        values: condition
                            .values
                            .iter()
                            .map(|v| FilterValue { value: v.clone(), value_type: field.value_type })
                            .collect(),
                    });
                }
            }

            if let Some(sort) = &field.sort {
                request.orders.push(Order {
                    column,
                    operator: sort.direction,
                    agg_operator: aggregate.filter(|_| kind.is_value()),
                });
            }
        }

        request.function_columns = chart
            .config
            .computed_fields
            .iter()
            .map(|f| FunctionColumn { alias: f.id.clone(), snippet: f.expression.clone() })
            .collect();

        request.page_info = chart.paging().map(|paging| PageInfo {
            page_no: Some(1),
            page_size: Some(paging.page_size),
            count_total: Some(true),
            total: None,
        });

        request
    }

    fn group_columns(&self, chart: &DataChart) -> Vec<GroupColumn> {
        chart
            .fields()
            .filter(|(kind, _)| kind.is_grouping())
            .map(|(_, field)| GroupColumn {
                col_name: field.col_name.clone(),
                value_type: field.value_type,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{AggOperator, SortDirection, SqlOperator, ValueType};
    use serde_json::json;

    fn sales_chart(aggregation: bool) -> DataChart {
        serde_json::from_value(json!({
            "id": "dc1",
            "viewId": "v1",
            "config": {
                "aggregation": aggregation,
                "chartConfig": {
                    "datas": [
                        { "type": "group", "rows": [{ "colName": "region", "type": "STRING" }, { "colName": "year", "type": "DATE" }] },
                        { "type": "aggregate", "rows": [{ "colName": "sales", "type": "NUMERIC", "aggregate": "SUM", "sort": { "type": "DESC" } }] },
                        { "type": "filter", "rows": [
                            { "colName": "status", "type": "STRING", "filter": { "sqlOperator": "NOT_IN", "values": ["void"] } },
                            { "colName": "channel", "type": "STRING" }
                        ] },
                        { "type": "color", "rows": [{ "colName": "segment", "type": "STRING" }] }
                    ],
                    "settings": { "paging": { "enablePaging": true, "pageSize": 25 } }
                },
                "computedFields": [{ "id": "margin", "expression": "[sales] - [cost]" }]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_build_aggregated_chart() {
        let request = ChartConfigBuilder.build(&sales_chart(true));

        assert_eq!(request.view_id, "v1");
        let groups: Vec<_> = request.groups.iter().map(|g| g.column.as_str()).collect();
        assert_eq!(groups, vec!["region", "year", "segment"]);
        assert_eq!(request.aggregators, vec![Aggregator { column: "sales".into(), sql_operator: AggOperator::Sum }]);
        assert!(request.columns.is_empty());
        assert_eq!(request.filters, vec![ChartRequestFilter {
            agg_operator: None,
            column: "status".into(),
            sql_operator: SqlOperator::NotIn,
            values: vec![FilterValue::new("void", ValueType::String)],
        }]);
        assert_eq!(request.orders, vec![Order {
            column: "sales".into(),
            operator: SortDirection::Desc,
            agg_operator: Some(AggOperator::Sum),
        }]);
        assert_eq!(request.function_columns, vec![FunctionColumn { alias: "margin".into(), snippet: "[sales] - [cost]".into() }]);
        assert_eq!(request.page_info.unwrap().page_size, Some(25));
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_build_without_aggregation_selects_columns() {
        let request = ChartConfigBuilder.build(&sales_chart(false));
        assert!(request.groups.is_empty());
        assert!(request.aggregators.is_empty());
        assert_eq!(request.columns, vec!["region", "year", "sales", "segment"]);
        assert_eq!(request.orders[0].agg_operator, None);
    }

    #[test]
    fn test_group_columns_in_section_order() {
        let columns = ChartConfigBuilder.group_columns(&sales_chart(true));
        assert_eq!(columns, vec![
            GroupColumn { col_name: "region".into(), value_type: ValueType::String },
            GroupColumn { col_name: "year".into(), value_type: ValueType::Date },
            GroupColumn { col_name: "segment".into(), value_type: ValueType::String },
        ]);
    }
}
