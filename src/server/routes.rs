//! Sheet endpoint registry
//!
//! Every location gets the same three handlers, generated from its
//! `LocationSpec`: a range read, a row write and (usually) a whole-row
//! append. The legacy `/data` and `/write` paths reuse the same handlers
//! against the summary tab. Validation always runs before the remote call,
//! and upstream failures are logged in full but reported to the caller as a
//! generic message via the `AppError` envelope.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};

use crate::constants::{LOCATIONS, SUMMARY};
use crate::error::AppError;
use crate::models::{AppendRequest, LocationSpec, WriteRequest};
use crate::server::AppState;
use crate::services::WriteAck;

#[derive(Debug, Serialize)]
struct ReadResponse {
    data: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct AppendResponse {
    message: String,
    details: WriteAck,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    locations: usize,
}

/// Build the full route table from the builtin location specs.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new().route("/health", get(health_handler));

    for spec in LOCATIONS {
        router = register_location(router, spec);
    }

    // Legacy paths kept for pre-location clients; both target the summary tab
    router = router
        .route(
            "/data",
            get(|State(state): State<AppState>| async move {
                read_location(state, &SUMMARY).await
            }),
        )
        .route(
            "/write",
            post(|State(state): State<AppState>, body: Bytes| async move {
                write_location(state, &SUMMARY, body).await
            }),
        );

    router.with_state(state)
}

/// Register `GET /<name>`, `POST /<name>/write` and, when the location
/// supports it, `POST /<name>/add`.
fn register_location(router: Router<AppState>, spec: &'static LocationSpec) -> Router<AppState> {
    let mut router = router
        .route(
            &format!("/{}", spec.name),
            get(move |State(state): State<AppState>| async move {
                read_location(state, spec).await
            }),
        )
        .route(
            &format!("/{}/write", spec.name),
            post(move |State(state): State<AppState>, body: Bytes| async move {
                write_location(state, spec, body).await
            }),
        );

    if spec.appendable {
        router = router.route(
            &format!("/{}/add", spec.name),
            post(move |State(state): State<AppState>, body: Bytes| async move {
                append_location(state, spec, body).await
            }),
        );
    }

    router
}

async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        locations: LOCATIONS.len(),
    })
}

/// GET /<location> - Return the location's read range as row-major data
#[instrument(skip(state), fields(location = spec.name))]
async fn read_location(
    state: AppState,
    spec: &'static LocationSpec,
) -> Result<Response, AppError> {
    let rows = state.sheets.get_values(spec.read_range).await.map_err(|err| {
        error!(range = spec.read_range, error = %err, "Sheets read failed");
        AppError::Upstream("Failed to read from Google Sheets".to_string())
    })?;

    if rows.is_empty() {
        return Err(AppError::NotFound("No data found".to_string()));
    }

    info!(range = spec.read_range, row_count = rows.len(), "Returning sheet rows");
    Ok((StatusCode::OK, Json(ReadResponse { data: rows })).into_response())
}

/// POST /<location>/write - Overwrite one row's write span
#[instrument(skip(state, body), fields(location = spec.name))]
async fn write_location(
    state: AppState,
    spec: &'static LocationSpec,
    body: Bytes,
) -> Result<Response, AppError> {
    let body = parse_json(&body)?;
    let request = WriteRequest::from_body(&body, spec.write_width)?;

    let range = spec.write_range(request.row_index);
    let value_count = request.values.len();

    let ack = state
        .sheets
        .update_values(&range, vec![request.values])
        .await
        .map_err(|err| {
            // Full detail stays in the log; the caller gets a generic message
            error!(range = %range, value_count, error = %err, "Sheets update failed");
            AppError::Upstream("Failed to write to Google Sheets".to_string())
        })?;

    info!(range = %range, updated_cells = ack.updated_cells, "Row updated");
    Ok(message_response(
        StatusCode::OK,
        format!("Updated row {} in {}", request.row_index, spec.sheet_title),
    ))
}

/// POST /<location>/add - Append one full row (columns B through P)
#[instrument(skip(state, body), fields(location = spec.name))]
async fn append_location(
    state: AppState,
    spec: &'static LocationSpec,
    body: Bytes,
) -> Result<Response, AppError> {
    let body = parse_json(&body)?;
    let request = AppendRequest::from_body(&body)?;

    let range = spec.append_range();

    let ack = state
        .sheets
        .append_values(&range, vec![request.values])
        .await
        .map_err(|err| {
            error!(range = %range, error = %err, "Sheets append failed");
            AppError::Upstream("Failed to append to Google Sheets".to_string())
        })?;

    info!(range = %range, updated_range = ?ack.updated_range, "Row appended");
    Ok((
        StatusCode::OK,
        Json(AppendResponse {
            message: format!("Appended 1 row to {}", spec.sheet_title),
            details: ack,
        }),
    )
        .into_response())
}

fn parse_json(body: &Bytes) -> Result<Value, AppError> {
    serde_json::from_slice(body)
        .map_err(|_| AppError::InvalidInput("request body must be valid JSON".to_string()))
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(MessageResponse { message })).into_response()
}
