//! Integration tests for date filter widgets

mod common;

use boardquery::board::{DateMode, FilterDate, TimeSpec};
use boardquery::time::TimeError;
use boardquery::{
    resolve_values, try_build_chart_widget_request, BuildContext, CalendarRanges, FilterValue,
    PageOverrides, ResolveContext, TimeRangeConverter, ValueType, WidgetFilter,
};
use chrono::NaiveDateTime;
use common::{filter_widget, fixed_now, sales_board_with};
use serde_json::json;

fn common_filter(token: &str) -> WidgetFilter {
    WidgetFilter {
        operator_type: DateMode::Common,
        filter_date: Some(FilterDate { common_time: Some(token.into()), ..Default::default() }),
        ..Default::default()
    }
}

#[test]
fn test_common_range_equals_direct_conversion() {
    let ctx = ResolveContext::new(fixed_now());
    let values = resolve_values(ValueType::Date, &common_filter("last7days"), &ctx).unwrap().unwrap();
    let [start, end] = CalendarRanges.convert("last7days", fixed_now()).unwrap();

    assert_eq!(values, vec![
        FilterValue::new(start, ValueType::Date),
        FilterValue::new(end, ValueType::Date),
    ]);
}

#[test]
fn test_exact_start_only_is_single_value() {
    let ctx = ResolveContext::new(fixed_now());
    let filter = WidgetFilter {
        filter_date: Some(FilterDate {
            start_time: Some(TimeSpec::exact("2023-01-01 00:00:00")),
            ..Default::default()
        }),
        ..Default::default()
    };

    let values = resolve_values(ValueType::Date, &filter, &ctx).unwrap().unwrap();

    assert_eq!(values, vec![FilterValue::new("2023-01-01 00:00:00", ValueType::Date)]);
}

/// Converter with a fiscal calendar nobody else knows about
struct FiscalRanges;

impl TimeRangeConverter for FiscalRanges {
    fn convert(&self, token: &str, _now: NaiveDateTime) -> Result<[String; 2], TimeError> {
        match token {
            "fiscalYear" => Ok(["2023-04-01 00:00:00".into(), "2024-03-31 23:59:59".into()]),
            other => Err(TimeError::UnknownRange(other.into())),
        }
    }
}

#[test]
fn test_named_range_uses_injected_converter() {
    let board = sales_board_with(vec![filter_widget(
        "f_fiscal",
        "c_sales",
        false,
        "field",
        "order_date",
        "DATE",
        json!({ "sqlOperator": "BETWEEN", "operatorType": "common", "filterDate": { "commonTime": "fiscalYear" } }),
    )]);
    let ctx = BuildContext::new(fixed_now()).with_time_ranges(&FiscalRanges);

    let request = try_build_chart_widget_request("c_sales", &board, None, &PageOverrides::none(), &ctx).unwrap();

    let fiscal = request.filters.iter().find(|f| f.column == "order_date").unwrap();
    assert_eq!(fiscal.values, vec![
        FilterValue::new("2023-04-01 00:00:00", ValueType::Date),
        FilterValue::new("2024-03-31 23:59:59", ValueType::Date),
    ]);
}

#[test]
fn test_unknown_range_does_not_break_the_request() {
    let board = sales_board_with(vec![filter_widget(
        "f_someday",
        "c_sales",
        true,
        "field",
        "order_date",
        "DATE",
        json!({ "operatorType": "common", "filterDate": { "commonTime": "someday" } }),
    )]);
    let ctx = BuildContext::new(fixed_now());

    let request = try_build_chart_widget_request("c_sales", &board, None, &PageOverrides::none(), &ctx).unwrap();

    let columns: Vec<_> = request.filters.iter().map(|f| f.column.as_str()).collect();
    assert_eq!(columns, vec!["region", "status"]);
}

#[test]
fn test_relative_range_on_board() {
    let board = sales_board_with(vec![filter_widget(
        "f_this_week",
        "c_sales",
        false,
        "field",
        "order_date",
        "DATE",
        json!({
            "sqlOperator": "BETWEEN",
            "filterDate": {
                "startTime": { "relativeOrExact": "relative", "relative": { "amount": 0, "unit": "w", "direction": "-" } },
                "endTime": { "relativeOrExact": "relative", "relative": { "amount": 0, "unit": "w", "direction": "+" } }
            }
        }),
    )]);
    let ctx = BuildContext::new(fixed_now());

    let request = try_build_chart_widget_request("c_sales", &board, None, &PageOverrides::none(), &ctx).unwrap();

    let week = request.filters.iter().find(|f| f.column == "order_date").unwrap();
    assert_eq!(week.values, vec![
        FilterValue::new("2024-03-11 00:00:00", ValueType::Date),
        FilterValue::new("2024-03-17 23:59:59", ValueType::Date),
    ]);
}
