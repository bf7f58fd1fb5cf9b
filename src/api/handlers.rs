//! HTTP request handlers for the expense engine API.
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
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::ledger::parse_report;
use crate::render::ReportSession;

use super::request::{ParseRequest, StatementRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/parse", post(parse_handler))
        .route("/statement", post(statement_handler))
        .with_state(state)
}

/// Handler for POST /parse.
///
/// Parses the submitted text and returns the whole report.
async fn parse_handler(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing parse request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match parse_report(&request.text, state.config().config()) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                dialect = %report.dialect(),
                employees = report.len(),
                grand_total = report.grand_totals().total,
                duration_us = start_time.elapsed().as_micros(),
                "Parse completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /statement.
///
/// Parses the submitted text and returns one employee's rendered statement
/// as an attachment.
async fn statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut session = ReportSession::new(state.config().config().clone());
    if let Err(err) = session.ingest(&request.text) {
        return engine_error_response(correlation_id, err);
    }

    let renderer = request.format.renderer();
    match session.render(&request.employee, renderer.as_ref(), Local::now()) {
        Ok(statement) => {
            info!(
                correlation_id = %correlation_id,
                employee = %statement.employee_name,
                format = %request.format,
                file_name = %statement.file_name,
                bytes = statement.bytes.len(),
                "Statement rendered"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, statement.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        attachment_disposition(&statement.file_name),
                    ),
                ],
                statement.bytes,
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
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
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// `attachment` disposition with an RFC 5987 encoded file name.
fn attachment_disposition(file_name: &str) -> String {
    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    format!("attachment; filename*=UTF-8''{}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::ExpenseReport;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config =
            ConfigLoader::load("./config/reimbursement.yaml").expect("Failed to load config");
        AppState::new(config)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn test_attachment_disposition_encodes_non_ascii() {
        assert_eq!(
            attachment_disposition("精算書_a.txt"),
            "attachment; filename*=UTF-8''%E7%B2%BE%E7%AE%97%E6%9B%B8_a.txt"
        );
    }

    #[tokio::test]
    async fn test_parse_valid_text_returns_200() {
        let router = create_router(create_test_state());
        let body = serde_json::json!({ "text": "田中様\n1/5 渋谷→新宿" }).to_string();

        let response = router.oneshot(post_json("/parse", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: ExpenseReport = serde_json::from_slice(&body).unwrap();
        assert_eq!(report.grand_totals().total, 275);
    }

    #[tokio::test]
    async fn test_parse_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(post_json("/parse", "{invalid json".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_statement_unknown_employee_returns_404() {
        let router = create_router(create_test_state());
        let body =
            serde_json::json!({ "text": "田中様\n1/5 A→B", "employee": "佐藤" }).to_string();

        let response = router.oneshot(post_json("/statement", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }
}
