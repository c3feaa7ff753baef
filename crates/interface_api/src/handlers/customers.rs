//! Customer handlers
//!
//! Batch endpoints answer with the status code derived from the batch
//! outcome and a JSON array of the records that were not applied. Bodies
//! that are not a JSON array of objects and non-numeric ids are rejected
//! with a `400` error body before any record is looked at.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use domain_customer::{BatchReport, Outcome, RawRecord};

use crate::dto::customer::CustomerResponse;
use crate::{error::ApiError, AppState};

/// Maps a domain outcome to its response status
pub fn outcome_status(outcome: Outcome) -> StatusCode {
    match outcome {
        Outcome::Ok => StatusCode::OK,
        Outcome::Created => StatusCode::CREATED,
        Outcome::Accepted => StatusCode::ACCEPTED,
        Outcome::BadRequest => StatusCode::BAD_REQUEST,
        Outcome::Conflict => StatusCode::CONFLICT,
        Outcome::NotFound => StatusCode::NOT_FOUND,
    }
}

fn batch_response(report: BatchReport) -> (StatusCode, Json<Vec<RawRecord>>) {
    debug!(
        outcome = ?report.outcome,
        accepted = report.accepted.len(),
        rejected = report.rejected.len(),
        "batch finished"
    );
    (outcome_status(report.outcome), Json(report.rejected))
}

/// Lists all customers
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<CustomerResponse>> {
    let customers = state.service.list().await;
    Json(customers.iter().map(CustomerResponse::from).collect())
}

/// Gets a customer by ID
pub async fn get_customer(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let Path(id) = id?;
    let customer = state.service.get(id).await?;
    Ok(Json(CustomerResponse::from(&customer)))
}

/// Creates one customer per record
pub async fn create_customers(
    State(state): State<AppState>,
    records: Result<Json<Vec<RawRecord>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<RawRecord>>), ApiError> {
    let Json(records) = records?;
    Ok(batch_response(state.service.create_batch(records).await))
}

/// Applies every record to the customer with the given ID
pub async fn update_customer(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    records: Result<Json<Vec<RawRecord>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<RawRecord>>), ApiError> {
    let Path(id) = id?;
    let Json(records) = records?;
    Ok(batch_response(state.service.update_batch(id, records).await))
}

/// Deletes a customer
pub async fn delete_customer(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    Ok(outcome_status(state.service.delete(id).await))
}
