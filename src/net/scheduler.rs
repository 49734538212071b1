//! Client calls for the scheduler's appliance and optimization routes.
//!
//! Responses are returned as raw JSON: the server replies with
//! `{"success": ..}` envelopes for appliance edits and free-form
//! recommendation/savings objects for the rest.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use serde_json::{Value, json};

use super::api::{ApiError, HttpTransport, Method, api_call};

pub const ADD_APPLIANCE_ENDPOINT: &str = "/api/add_appliance";
pub const OPTIMIZE_ENDPOINT: &str = "/api/optimize";
pub const CALCULATE_SAVINGS_ENDPOINT: &str = "/api/calculate_savings";

fn delete_appliance_endpoint(appliance_id: u64) -> String {
    format!("/api/delete_appliance/{appliance_id}")
}

/// Register a new appliance via `POST /api/add_appliance`.
///
/// # Errors
///
/// Propagates any [`api_call`] failure.
pub async fn add_appliance<T: HttpTransport + ?Sized>(
    transport: &T,
    appliance: &Value,
) -> Result<Value, ApiError> {
    api_call(
        transport,
        ADD_APPLIANCE_ENDPOINT,
        Method::Post,
        Some(appliance),
    )
    .await
}

/// Remove an appliance via `DELETE /api/delete_appliance/{id}`.
///
/// # Errors
///
/// Propagates any [`api_call`] failure.
pub async fn delete_appliance<T: HttpTransport + ?Sized>(
    transport: &T,
    appliance_id: u64,
) -> Result<Value, ApiError> {
    let url = delete_appliance_endpoint(appliance_id);
    api_call(transport, &url, Method::Delete, None).await
}

/// Request run-time recommendations for the given appliances.
///
/// # Errors
///
/// Propagates any [`api_call`] failure.
pub async fn optimize_schedule<T: HttpTransport + ?Sized>(
    transport: &T,
    appliance_ids: &[u64],
    constraints: &Value,
) -> Result<Value, ApiError> {
    let payload = json!({ "appliances": appliance_ids, "constraints": constraints });
    api_call(transport, OPTIMIZE_ENDPOINT, Method::Post, Some(&payload)).await
}

/// Compare a proposed schedule against running everything now.
///
/// # Errors
///
/// Propagates any [`api_call`] failure.
pub async fn calculate_savings<T: HttpTransport + ?Sized>(
    transport: &T,
    schedule: &Value,
) -> Result<Value, ApiError> {
    api_call(
        transport,
        CALCULATE_SAVINGS_ENDPOINT,
        Method::Post,
        Some(schedule),
    )
    .await
}
