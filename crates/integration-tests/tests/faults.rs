//! End-to-end fault propagation over a real gateway and real backends

mod harness;

use std::collections::HashMap;
use std::sync::Arc;

use arena_core::TracingSink;
use arena_rpc::HttpRpc;
use arena_service::{Dispatcher, RaisedError, handler_fn};
use harness::backend::TestBackend;
use harness::gateway_config;
use harness::server::TestServer;
use serde_json::{Value, json};

const GENERIC: &str = r#"{"statusCode":500,"message":"Internal server error","error":"InternalServerError"}"#;

fn esports_dispatcher() -> Dispatcher {
    let mut dispatcher = Dispatcher::new("esports", Arc::new(TracingSink));
    dispatcher.register(
        "match.get",
        handler_fn(|payload| async move {
            match payload.get("id").and_then(Value::as_u64) {
                Some(7) => Ok(json!({ "id": 7, "winner": "blue", "duration_s": 2144 })),
                Some(_) => Err(RaisedError::not_found("match not found")),
                None => Err(RaisedError::validation(vec![
                    "id is required".to_owned(),
                    "id must be a number".to_owned(),
                ])),
            }
        }),
    );
    dispatcher.register(
        "match.report",
        handler_fn(|_| async { Err(RaisedError::from(anyhow::anyhow!("replay store unreachable at 10.0.3.7"))) }),
    );
    dispatcher
}

async fn gateway_for(backend: &TestBackend) -> TestServer {
    let config = gateway_config(&[("esports", &backend.url())]);
    let services: HashMap<_, _> = config
        .services
        .iter()
        .map(|(name, service)| (name.clone(), service.url.clone()))
        .collect();
    TestServer::start(&config, Arc::new(HttpRpc::new(services))).await.unwrap()
}

async fn call(server: &TestServer, path: &str, body: Value) -> (u16, Value) {
    let resp = server
        .client()
        .post(server.url(path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = resp.status().as_u16();
    let body = resp.json::<Value>().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn successful_call_passes_the_result_through() {
    let backend = TestBackend::start(esports_dispatcher()).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/esports/match.get", json!({ "id": 7 })).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "id": 7, "winner": "blue", "duration_s": 2144 }));
}

#[tokio::test]
async fn domain_fault_crosses_both_boundaries_intact() {
    let backend = TestBackend::start(esports_dispatcher()).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/esports/match.get", json!({ "id": 99 })).await;

    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({ "statusCode": 404, "message": "match not found", "error": "NotFound" })
    );
}

#[tokio::test]
async fn validation_array_survives_end_to_end() {
    let backend = TestBackend::start(esports_dispatcher()).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/esports/match.get", json!({})).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({
            "statusCode": 400,
            "message": ["id is required", "id must be a number"],
            "error": "BadRequest"
        })
    );
}

#[tokio::test]
async fn unexpected_backend_failure_reaches_the_client_scrubbed() {
    let backend = TestBackend::start(esports_dispatcher()).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/esports/match.report", json!({ "id": 7 })).await;

    assert_eq!(status, 500);
    assert_eq!(body, serde_json::from_str::<Value>(GENERIC).unwrap());
    assert!(!body.to_string().contains("10.0.3.7"));
}

#[tokio::test]
async fn unknown_service_is_a_local_404() {
    let backend = TestBackend::start(esports_dispatcher()).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/billing/invoice.get", json!({})).await;

    assert_eq!(status, 404);
    assert_eq!(body["message"], "unknown service: billing");
}

#[tokio::test]
async fn dead_backend_collapses_to_the_generic_500() {
    let backend = TestBackend::start(esports_dispatcher()).await.unwrap();
    let server = gateway_for(&backend).await;
    backend.stop();
    // Give the listener a moment to actually close
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let (status, body) = call(&server, "/rpc/esports/match.get", json!({ "id": 7 })).await;

    assert_eq!(status, 500);
    assert_eq!(body, serde_json::from_str::<Value>(GENERIC).unwrap());
}

#[tokio::test]
async fn legacy_wire_shapes_are_reconstructed() {
    let responses = HashMap::from([
        (
            "by_status_field".to_owned(),
            (404, json!({ "status": 404, "message": "player not found", "error": "NotFound" })),
        ),
        (
            "nested".to_owned(),
            (409, json!({ "error": { "statusCode": 409, "message": "bracket already seeded", "error": "Conflict" } })),
        ),
        (
            "stringified".to_owned(),
            (401, json!({ "message": r#"{"statusCode":401,"message":"Token expired","error":"Unauthorized"}"# })),
        ),
    ]);
    let backend = TestBackend::start_canned(responses).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/esports/by_status_field", json!({})).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "NotFound");
    assert_eq!(body["statusCode"], 404);

    let (status, body) = call(&server, "/rpc/esports/nested", json!({})).await;
    assert_eq!(status, 409);
    assert_eq!(body["message"], "bracket already seeded");

    let (status, body) = call(&server, "/rpc/esports/stringified", json!({})).await;
    assert_eq!(status, 401);
    assert_eq!(
        body,
        json!({ "statusCode": 401, "message": "Token expired", "error": "Unauthorized" })
    );
}

#[tokio::test]
async fn unrecognizable_backend_body_is_a_generic_500() {
    let responses = HashMap::from([("weird".to_owned(), (502, json!({ "oops": "the proxy ate it" })))]);
    let backend = TestBackend::start_canned(responses).await.unwrap();
    let server = gateway_for(&backend).await;

    let (status, body) = call(&server, "/rpc/esports/weird", json!({})).await;

    assert_eq!(status, 500);
    assert_eq!(body, serde_json::from_str::<Value>(GENERIC).unwrap());
}
