//! Integration tests for board-wide request building

mod common;

use boardquery::{build_board_requests, parser, BuildContext, BuildError};
use common::{fixed_now, load_fixture, RecordingReporter};

#[test]
fn test_builds_every_buildable_chart_in_board_order() {
    let board = load_fixture("sales_board.yaml");
    let reporter = RecordingReporter::default();
    let ctx = BuildContext::new(fixed_now()).with_reporter(&reporter);

    let requests = build_board_requests(&board, &ctx);

    // c_sales, c_country; c_orphan is skipped
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].groups[0].column, "region");
    assert_eq!(requests[1].groups[0].column, "country");

    assert_eq!(reporter.count(), 1);
    assert!(matches!(
        &reporter.errors.borrow()[0],
        BuildError::DataChartNotFound { widget, .. } if widget == "c_orphan"
    ));
}

#[test]
fn test_board_without_charts_builds_nothing() {
    let board = parser::parse_str("widgets:\n  - id: m1\n    config: { type: media }\n").unwrap();
    let reporter = RecordingReporter::default();
    let ctx = BuildContext::new(fixed_now()).with_reporter(&reporter);

    assert!(build_board_requests(&board, &ctx).is_empty());
    assert_eq!(reporter.count(), 0);
}

#[test]
fn test_requests_serialize_for_the_backend() {
    let board = load_fixture("sales_board.yaml");
    let requests = build_board_requests(&board, &BuildContext::new(fixed_now()));

    let json = serde_json::to_value(&requests[0]).unwrap();
    assert_eq!(json["viewId"], "v_sales");
    assert_eq!(json["filters"][0]["column"], "region");
    assert_eq!(json["filters"][0]["values"][1]["value"], "west");
    assert_eq!(json["params"]["city"][0], "Paris");
    assert_eq!(json["pageInfo"]["pageSize"], 50);
    assert_eq!(json["aggregators"][0]["sqlOperator"], "SUM");
}

#[test]
fn test_json_snapshot_matches_yaml() {
    let yaml = load_fixture("sales_board.yaml");
    let json = parser::parse_json(&serde_json::json!({
        "widgets": [
            { "id": "c_sales", "datachartId": "dc_sales", "viewIds": ["v_sales"], "config": { "type": "chart" } }
        ],
        "views": [{ "id": "v_sales" }],
        "dataCharts": [{ "id": "dc_sales", "viewId": "v_sales" }]
    }).to_string())
    .unwrap();

    assert_eq!(json.get_widget("c_sales").unwrap().data_chart_id(), yaml.get_widget("c_sales").unwrap().data_chart_id());
    assert_eq!(build_board_requests(&json, &BuildContext::new(fixed_now())).len(), 1);
}
