use std::sync::Arc;

use arena_core::DiagnosticSink;
use arena_rpc::{CallError, RpcClient};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use axum::{Router, routing};
use http::StatusCode;
use serde_json::Value;

use crate::classify::WireFault;
use crate::response::{GatewayFailure, HttpException, respond};

/// Shared state for the proxy routes
#[derive(Clone)]
pub struct GatewayState {
    /// Transport to the backend services
    pub rpc: Arc<dyn RpcClient>,
    /// Where unclassifiable failure detail goes
    pub sink: Arc<dyn DiagnosticSink>,
}

/// Build the RPC proxy surface
pub fn proxy_router(state: GatewayState) -> Router {
    Router::new()
        .route("/rpc/{service}/{method}", routing::post(proxy_handler))
        .with_state(state)
}

/// Forward one call and emit exactly one HTTP response
///
/// A call that never completed is not assumed to carry a fault record;
/// its error text goes through the same classification as everything
/// else and lands on the generic 500 when unrecognized.
async fn proxy_handler(
    State(state): State<GatewayState>,
    Path((service, method)): Path<(String, String)>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    // A bad request body still gets the standard envelope, not the
    // framework's plain-text rejection
    let Json(payload) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let exception = HttpException::envelope(StatusCode::BAD_REQUEST, rejection.body_text());
            return respond(exception.into(), state.sink.as_ref());
        }
    };

    if !state.rpc.has_service(&service) {
        let exception = HttpException::envelope(StatusCode::NOT_FOUND, format!("unknown service: {service}"));
        return respond(exception.into(), state.sink.as_ref());
    }

    match state.rpc.call(&service, &method, payload).await {
        Ok(value) => Json(value).into_response(),
        Err(CallError::Remote(wire)) => respond(GatewayFailure::Wire(WireFault::Payload(wire)), state.sink.as_ref()),
        Err(CallError::Transport(error)) => {
            let text = format!("{error:#}");
            respond(GatewayFailure::Wire(WireFault::Message(text)), state.sink.as_ref())
        }
    }
}
