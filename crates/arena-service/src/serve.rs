use std::sync::Arc;

use arena_core::CanonicalFault;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, routing};
use http::StatusCode;
use serde_json::Value;

use crate::dispatch::Dispatcher;

/// Build the HTTP-bridge surface for one backend service
///
/// `POST /rpc/{method}` runs the registered handler; a fault becomes its
/// own status line plus the JSON-serialized canonical record — this is
/// the bridge transport's serialization hook.
pub fn rpc_router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/rpc/{method}", routing::post(dispatch_handler))
        .with_state(dispatcher)
}

async fn dispatch_handler(
    State(dispatcher): State<Arc<Dispatcher>>,
    Path(method): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    match dispatcher.dispatch(&method, payload).await {
        Ok(value) => Json(value).into_response(),
        Err(fault) => fault_response(&fault),
    }
}

fn fault_response(fault: &CanonicalFault) -> Response {
    let status = StatusCode::from_u16(fault.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(fault)).into_response()
}
