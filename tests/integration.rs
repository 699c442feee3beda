//! Integration tests for the workload statistics engine.
//!
//! This test suite drives the engine end to end through the HTTP router:
//! - Full statistics reports over all three periods
//! - Single-period rankings and the differential display policy
//! - Balancing plans
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use fonici_stats::api::{AppState, create_router};
use fonici_stats::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/fonici").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn entries(data: &[(&str, i64)]) -> Value {
    Value::Array(
        data.iter()
            .map(|(name, count)| json!({ "name": name, "shift_count": count }))
            .collect(),
    )
}

fn studio_snapshot() -> Value {
    json!({
        "last_month": entries(&[("Marco", 6), ("Luca", 9), ("Giulia", 9), ("Sara", 2)]),
        "last_quadrimester": entries(&[("Marco", 30), ("Luca", 28), ("Giulia", 35), ("Sara", 12)]),
        "last_year": entries(&[("Marco", 95), ("Luca", 80), ("Giulia", 101), ("Sara", 40)])
    })
}

fn names(table: &Value) -> Vec<String> {
    table
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["engineer_name"].as_str().unwrap().to_string())
        .collect()
}

fn ranking_for<'a>(report: &'a Value, period: &str) -> &'a Value {
    report["rankings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["period"] == period)
        .unwrap_or_else(|| panic!("No ranking for period {}", period))
}

// =============================================================================
// SECTION 1: Statistics report
// =============================================================================

#[tokio::test]
async fn test_report_contains_three_rankings_in_dashboard_order() {
    let (status, report) = post(create_router_for_test(), "/statistics", studio_snapshot()).await;

    assert_eq!(status, StatusCode::OK);
    let periods: Vec<&str> = report["rankings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["period"].as_str().unwrap())
        .collect();
    assert_eq!(periods, vec!["last_month", "last_quadrimester", "last_year"]);
    assert_eq!(report["title"], "Statistiche Fonici");
}

#[tokio::test]
async fn test_report_month_ranking_hides_differentials() {
    let (_, report) = post(create_router_for_test(), "/statistics", studio_snapshot()).await;

    let month = ranking_for(&report, "last_month");
    assert_eq!(month["title"], "Utilizzo Ultimo Mese");
    assert_eq!(month["differential_display"], "hidden");
    assert_eq!(names(&month["entries"]), vec!["Luca", "Giulia", "Marco", "Sara"]);
    for entry in month["entries"].as_array().unwrap() {
        assert!(entry.get("differential_from_leader").is_none());
    }
}

#[tokio::test]
async fn test_report_year_ranking_shows_differentials() {
    let (_, report) = post(create_router_for_test(), "/statistics", studio_snapshot()).await;

    let year = ranking_for(&report, "last_year");
    assert_eq!(year["differential_display"], "shown");
    assert_eq!(names(&year["entries"]), vec!["Giulia", "Marco", "Luca", "Sara"]);

    let year_entries = year["entries"].as_array().unwrap();
    assert!(year_entries[0].get("differential_from_leader").is_none());
    assert_eq!(year_entries[1]["differential_from_leader"], 6);
    assert_eq!(year_entries[2]["differential_from_leader"], 21);
    assert_eq!(year_entries[3]["differential_from_leader"], 61);
    let ranks: Vec<i64> = year_entries.iter().map(|e| e["rank"].as_i64().unwrap()).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_report_balancing_over_last_year() {
    let (_, report) = post(create_router_for_test(), "/statistics", studio_snapshot()).await;

    // total = 316, mean = 79
    let balancing = &report["balancing"];
    assert_eq!(balancing["period"], "last_year");
    assert_eq!(balancing["total_shifts"], 316);
    assert_eq!(
        Decimal::from_str(balancing["ideal_mean"].as_str().unwrap()).unwrap(),
        Decimal::from(79)
    );

    let suggestions = balancing["suggestions"].as_array().unwrap();
    assert_eq!(names(&balancing["suggestions"]), vec!["Sara", "Giulia", "Marco", "Luca"]);
    let deltas: Vec<i64> = suggestions.iter().map(|s| s["delta"].as_i64().unwrap()).collect();
    assert_eq!(deltas, vec![39, -22, -16, -1]);
    assert!(suggestions.iter().all(|s| s["suggested_shift_count"] == 79));
}

#[tokio::test]
async fn test_report_chart_series_match_rankings() {
    let (_, report) = post(create_router_for_test(), "/statistics", studio_snapshot()).await;

    let series = report["chart_series"].as_array().unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series[2]["title"], "Grafico Ultimo Anno");
    assert_eq!(
        names(&series[2]["points"]),
        names(&ranking_for(&report, "last_year")["entries"])
    );
}

#[tokio::test]
async fn test_report_audit_trace_records_every_step() {
    let (_, report) = post(create_router_for_test(), "/statistics", studio_snapshot()).await;

    let steps = report["audit_trace"]["steps"].as_array().unwrap();
    let rule_ids: Vec<&str> = steps.iter().map(|s| s["rule_id"].as_str().unwrap()).collect();
    assert_eq!(
        rule_ids,
        vec!["period_ranking", "period_ranking", "period_ranking", "workload_balancing"]
    );
    assert!(report["report_id"].as_str().is_some());
}

// =============================================================================
// SECTION 2: Single-period rankings
// =============================================================================

#[tokio::test]
async fn test_ranking_ties_keep_input_order() {
    let body = json!({
        "period": "last_quadrimester",
        "entries": entries(&[("A", 10), ("B", 10), ("C", 5)])
    });

    let (status, ranking) = post(create_router_for_test(), "/rankings", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&ranking["entries"]), vec!["A", "B", "C"]);
    assert_eq!(ranking["entries"][1]["differential_from_leader"], 0);
    assert_eq!(ranking["entries"][2]["differential_from_leader"], 5);
}

#[tokio::test]
async fn test_ranking_empty_entries_returns_empty_table() {
    let body = json!({ "period": "last_month", "entries": [] });

    let (status, ranking) = post(create_router_for_test(), "/rankings", body).await;

    assert_eq!(status, StatusCode::OK);
    assert!(ranking["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_ranking_month_can_opt_into_differentials() {
    let body = json!({
        "period": "last_month",
        "entries": entries(&[("A", 3), ("B", 7)]),
        "include_differential": true
    });

    let (_, ranking) = post(create_router_for_test(), "/rankings", body).await;

    assert_eq!(ranking["differential_display"], "shown");
    assert_eq!(ranking["entries"][1]["differential_from_leader"], 4);
}

#[tokio::test]
async fn test_ranking_year_can_opt_out_of_differentials() {
    let body = json!({
        "period": "last_year",
        "entries": entries(&[("A", 3), ("B", 7)]),
        "include_differential": false
    });

    let (_, ranking) = post(create_router_for_test(), "/rankings", body).await;

    assert_eq!(ranking["differential_display"], "hidden");
    assert!(ranking["entries"][1].get("differential_from_leader").is_none());
}

// =============================================================================
// SECTION 3: Balancing
// =============================================================================

#[tokio::test]
async fn test_balancing_three_engineers() {
    let body = json!({ "entries": entries(&[("A", 10), ("B", 20), ("C", 30)]) });

    let (status, plan) = post(create_router_for_test(), "/balancing", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&plan["suggestions"]), vec!["A", "C", "B"]);
    assert_eq!(plan["suggestions"][0]["delta"], 10);
    assert_eq!(plan["suggestions"][1]["delta"], -10);
    assert_eq!(plan["suggestions"][2]["delta"], 0);
}

#[tokio::test]
async fn test_balancing_single_idle_engineer() {
    let body = json!({ "period": "last_month", "entries": entries(&[("A", 0)]) });

    let (status, plan) = post(create_router_for_test(), "/balancing", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["period"], "last_month");
    assert_eq!(plan["suggestions"][0]["suggested_shift_count"], 0);
    assert_eq!(plan["suggestions"][0]["delta"], 0);
}

#[tokio::test]
async fn test_balancing_delta_is_consistent_with_target() {
    // mean = 20.5, rounded half-to-even to 20
    let body = json!({ "entries": entries(&[("A", 20), ("B", 21)]) });

    let (_, plan) = post(create_router_for_test(), "/balancing", body).await;

    for s in plan["suggestions"].as_array().unwrap() {
        let current = s["current_shift_count"].as_i64().unwrap();
        let suggested = s["suggested_shift_count"].as_i64().unwrap();
        assert_eq!(suggested, 20);
        assert_eq!(s["delta"].as_i64().unwrap(), suggested - current);
    }
}

// =============================================================================
// SECTION 4: Error cases
// =============================================================================

#[tokio::test]
async fn test_negative_shift_count_returns_invalid_input() {
    let body = json!({ "entries": entries(&[("A", 4), ("B", -2)]) });

    let (status, error) = post(create_router_for_test(), "/rankings", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
    assert!(error["message"].as_str().unwrap().contains("'B'"));
}

#[tokio::test]
async fn test_duplicate_engineer_returns_invalid_input() {
    let mut snapshot = studio_snapshot();
    snapshot["last_quadrimester"] = entries(&[("Marco", 3), ("Marco", 4)]);

    let (status, error) = post(create_router_for_test(), "/statistics", snapshot).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_empty_year_returns_empty_input() {
    let mut snapshot = studio_snapshot();
    snapshot["last_year"] = json!([]);

    let (status, error) = post(create_router_for_test(), "/statistics", snapshot).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "EMPTY_INPUT");
}

#[tokio::test]
async fn test_unknown_period_returns_malformed_json() {
    let body = json!({ "period": "last_week", "entries": [] });

    let (status, error) = post(create_router_for_test(), "/rankings", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_shift_count_returns_validation_error() {
    let body = json!({ "entries": [{ "name": "A" }] });

    let (status, error) = post(create_router_for_test(), "/balancing", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}
