//! HTTP request handlers for the statistics API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_statistics_report, calculate_balancing, rank_with_display};
use crate::error::EngineError;
use crate::models::{DifferentialDisplay, PeriodRanking, PeriodSnapshot};

use super::request::{BalancingRequest, RankingRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/statistics", post(statistics_handler))
        .route("/rankings", post(rankings_handler))
        .route("/balancing", post(balancing_handler))
        .with_state(state)
}

/// Handler for POST /statistics endpoint.
///
/// Accepts a provider snapshot and returns the full statistics report.
async fn statistics_handler(
    State(state): State<AppState>,
    payload: Result<Json<PeriodSnapshot>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statistics request");

    let snapshot = match payload {
        Ok(Json(snapshot)) => snapshot,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match build_statistics_report(&snapshot, state.config().config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                report_id = %report.report_id,
                periods = report.rankings.len(),
                engineers = report.balancing.engineer_count,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Statistics report completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /rankings endpoint.
///
/// Ranks a single list of shift counts. The differential display comes from
/// the request when given, otherwise from the configured view of the period.
async fn rankings_handler(
    State(state): State<AppState>,
    payload: Result<Json<RankingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ranking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = state.config();
    let differential = match (request.include_differential, request.period) {
        (Some(include), _) => DifferentialDisplay::from(include),
        (None, Some(period)) => config.differential_display(period),
        (None, None) => DifferentialDisplay::Hidden,
    };
    let title = request
        .period
        .map(|period| {
            config
                .view(period)
                .map_or_else(|| period.to_string(), |view| view.title.clone())
        })
        .unwrap_or_default();

    match rank_with_display(&request.entries, differential) {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                engineers = entries.len(),
                differential = ?differential,
                "Ranking completed successfully"
            );
            json_response(
                StatusCode::OK,
                PeriodRanking {
                    period: request.period,
                    title,
                    differential_display: differential,
                    entries,
                },
            )
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /balancing endpoint.
///
/// Computes the balancing plan for a list of shift counts.
async fn balancing_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalancingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balancing request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let period = request
        .period
        .unwrap_or_else(|| state.config().reference_period());

    match calculate_balancing(Some(period), &request.entries, 1) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                period = %period,
                engineers = result.plan.engineer_count,
                total_shifts = result.plan.total_shifts,
                "Balancing completed successfully"
            );
            json_response(StatusCode::OK, result.plan)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Engine rejected request"
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error).into_response()
}
