use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::a001_customer::aggregate::{
    Customer, CustomerDto, CustomerId, CustomerSaveResponse,
};
use contracts::domain::common::AggregateId;
use serde_json::json;

use crate::domain::a001_customer::{self, CustomerError};
use crate::shared::data::db::get_connection;

/// Map a service error to an HTTP status, logging everything that is not a client error
fn into_status(err: anyhow::Error) -> StatusCode {
    match err.downcast_ref::<CustomerError>() {
        Some(CustomerError::Validation(msg)) => {
            tracing::warn!("customer validation failed: {msg}");
            StatusCode::BAD_REQUEST
        }
        Some(CustomerError::NotFound(_)) => StatusCode::NOT_FOUND,
        None => {
            tracing::error!("customer request failed: {err:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn parse_id(id: &str) -> Result<CustomerId, StatusCode> {
    CustomerId::from_string(id).map_err(|_| StatusCode::BAD_REQUEST)
}

/// GET /api/customer
pub async fn list_all() -> Result<Json<Vec<Customer>>, StatusCode> {
    a001_customer::service::list_all(get_connection())
        .await
        .map(Json)
        .map_err(into_status)
}

/// GET /api/customer/:id
pub async fn get_by_id(Path(id): Path<String>) -> Result<Json<Customer>, StatusCode> {
    let id = parse_id(&id)?;
    a001_customer::service::get_by_id(get_connection(), id)
        .await
        .map(Json)
        .map_err(into_status)
}

/// POST /api/customer
pub async fn upsert(Json(dto): Json<CustomerDto>) -> Result<Json<CustomerSaveResponse>, StatusCode> {
    a001_customer::service::upsert(get_connection(), dto)
        .await
        .map(|id| Json(CustomerSaveResponse { id }))
        .map_err(into_status)
}

/// DELETE /api/customer/:id
pub async fn delete(Path(id): Path<String>) -> Result<(), StatusCode> {
    let id = parse_id(&id)?;
    a001_customer::service::delete(get_connection(), id)
        .await
        .map_err(into_status)
}

/// POST /api/customer/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, StatusCode> {
    a001_customer::service::insert_test_data(get_connection())
        .await
        .map(|inserted| Json(json!({ "inserted": inserted })))
        .map_err(into_status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_to_status_mapping() {
        assert_eq!(
            into_status(CustomerError::Validation("x".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            into_status(CustomerError::NotFound(CustomerId(1)).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            into_status(anyhow::anyhow!("disk full")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("0"), Ok(CustomerId(0)));
        assert_eq!(parse_id("x1"), Err(StatusCode::BAD_REQUEST));
    }
}
