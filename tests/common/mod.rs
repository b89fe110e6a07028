//! Shared test utilities for integration tests

use std::cell::RefCell;
use boardquery::time::TIME_FORMAT;
use boardquery::{parser, Board, BuildError, ErrorReporter, Widget};
use chrono::NaiveDateTime;
use serde_json::{json, Value};

/// Load a board snapshot from the tests/test_data directory
pub fn load_fixture(name: &str) -> Board {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// The moment every date test resolves against (a Wednesday)
pub fn fixed_now() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-03-13 15:42:10", TIME_FORMAT).unwrap()
}

/// Error reporter that remembers every report
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub errors: RefCell<Vec<BuildError>>,
}

impl RecordingReporter {
    pub fn count(&self) -> usize {
        self.errors.borrow().len()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &BuildError) {
        self.errors.borrow_mut().push(error.clone());
    }
}

// =============================================================================
// Widget builders
// =============================================================================

pub fn chart_widget(id: &str, data_chart: &str, view: &str) -> Widget {
    serde_json::from_value(json!({
        "id": id,
        "datachartId": data_chart,
        "viewIds": [view],
        "config": { "type": "chart" }
    }))
    .unwrap()
}

/// A filter widget with one relation and one related view on `v_sales`
pub fn filter_widget(
    id: &str,
    target: &str,
    covered: bool,
    category: &str,
    field: &str,
    value_type: &str,
    widget_filter: Value,
) -> Widget {
    serde_json::from_value(json!({
        "id": id,
        "relations": [{ "targetId": target, "config": { "filterToWidget": { "widgetFilterCovered": covered } } }],
        "config": {
            "type": "filter",
            "content": {
                "fieldValueType": value_type,
                "relatedViews": [{ "viewId": "v_sales", "fieldValue": field, "filterFieldCategory": category }],
                "widgetFilter": widget_filter
            }
        }
    }))
    .unwrap()
}

/// The sales fixture with extra widgets appended
pub fn sales_board_with(extra: Vec<Widget>) -> Board {
    let mut board = load_fixture("sales_board.yaml");
    board.widgets.extend(extra);
    board
}
