use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use models::customer::{self, Customer};
use service::errors::ServiceError;

use crate::errors::ApiError;
use crate::routes::ServerState;

/// Path ids must be plain 0-255 integers; anything else is the caller's fault.
fn parse_id(raw: &str) -> Result<u8, ApiError> {
    customer::parse_customer_id(raw).map_err(|_| ApiError::bad_request("Invalid customer ID"))
}

#[utoipa::path(
    get, path = "/customers", tag = "customers",
    responses(
        (status = 200, description = "Full registry keyed by customer ID")
    )
)]
pub async fn list_customers(State(state): State<ServerState>) -> Json<HashMap<u8, Customer>> {
    Json(state.registry.list().await)
}

#[utoipa::path(
    get, path = "/customers/{id}", tag = "customers",
    params(("id" = u8, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer record"),
        (status = 400, description = "Invalid customer ID"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    let id = parse_id(&id)?;
    match state.registry.get(id).await {
        Some(found) => Ok(Json(found)),
        None => Err(ApiError::not_found("Customer not found")),
    }
}

#[utoipa::path(
    post, path = "/customers", tag = "customers",
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 201, description = "Created; returns the full registry"),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "Customer ID already taken")
    )
)]
pub async fn create_customer(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<HashMap<u8, Customer>>), ApiError> {
    let new_customer: Customer = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Invalid input format"))?;
    match state.registry.create(new_customer).await {
        Ok(map) => Ok((StatusCode::CREATED, Json(map))),
        Err(ServiceError::Conflict(_)) => {
            Err(ApiError::conflict("Customer with this ID already exists"))
        }
        Err(e) => Err(ApiError::bad_request(e.to_string())),
    }
}

/// Replace a record. The path id must exist, but the record is written under
/// the id inside the body; clients that send a different body id move the
/// record to that id and leave the path id's entry in place.
#[utoipa::path(
    post, path = "/customers/{id}", tag = "customers",
    params(("id" = u8, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerDoc,
    responses(
        (status = 201, description = "Replaced; returns the full registry"),
        (status = 400, description = "Malformed body or missing required field"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<HashMap<u8, Customer>>), ApiError> {
    let path_id = parse_id(&id)?;
    // Existence is checked before the body is even decoded.
    if state.registry.get(path_id).await.is_none() {
        return Err(ApiError::not_found("Customer not found"));
    }
    let updated: Customer = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Invalid request payload"))?;
    match state.registry.replace(path_id, updated).await {
        Ok(map) => Ok((StatusCode::CREATED, Json(map))),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found("Customer not found")),
        Err(ServiceError::Model(_) | ServiceError::Validation(_)) => Err(ApiError::bad_request(
            "All fields (Name, Role, Email, Phone) are required",
        )),
        Err(e) => Err(ApiError::bad_request(e.to_string())),
    }
}

/// Apply an array of updates in order. Aborts on the first unknown id;
/// records applied before that point stay applied.
#[utoipa::path(
    post, path = "/customers/batch", tag = "customers",
    request_body = Vec<crate::openapi::CustomerDoc>,
    responses(
        (status = 200, description = "All updates applied; returns the full registry"),
        (status = 400, description = "Body is not a customer array"),
        (status = 404, description = "An update referenced an unknown customer ID")
    )
)]
pub async fn batch_update_customers(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<Json<HashMap<u8, Customer>>, ApiError> {
    let updates: Vec<Customer> = serde_json::from_slice(&body)
        .map_err(|_| ApiError::bad_request("Invalid input"))?;
    match state.registry.apply_batch(updates).await {
        Ok(map) => Ok(Json(map)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found("Customer not found")),
        Err(e) => Err(ApiError::bad_request(e.to_string())),
    }
}

#[utoipa::path(
    delete, path = "/customers/{id}", tag = "customers",
    params(("id" = u8, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted; returns the remaining registry"),
        (status = 400, description = "Invalid customer ID"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<HashMap<u8, Customer>>, ApiError> {
    let id = parse_id(&id)?;
    match state.registry.remove(id).await {
        Ok(map) => Ok(Json(map)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::not_found("Customer not found")),
        Err(e) => Err(ApiError::bad_request(e.to_string())),
    }
}
