mod support;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use flight_search::client::{FlightLookup, GatewayClient, SearchError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use support::flight;
use tokio::net::TcpListener;

#[derive(Clone)]
struct FakeGateway {
    status: StatusCode,
    body: String,
    queries: Arc<Mutex<Vec<String>>>,
}

async fn fake_flights(
    State(gateway): State<FakeGateway>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    gateway
        .queries
        .lock()
        .push(params.get("query").cloned().unwrap_or_default());
    (gateway.status, gateway.body.clone())
}

async fn spawn_gateway(status: StatusCode, body: String) -> (GatewayClient, FakeGateway) {
    let gateway = FakeGateway {
        status,
        body,
        queries: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/api/flights", get(fake_flights))
        .with_state(gateway.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client =
        GatewayClient::new_with_client(reqwest::Client::new(), format!("http://{addr}/"));
    (client, gateway)
}

#[tokio::test]
async fn decodes_flight_summaries() {
    let flights = vec![flight("UA123", "Landed", 0), flight("UA123", "Landed", 1)];
    let body = serde_json::to_string(&flights).unwrap();
    let (client, gateway) = spawn_gateway(StatusCode::OK, body).await;

    let result = client.lookup("UA123").await.unwrap();

    assert_eq!(result, flights);
    assert_eq!(gateway.queries.lock().clone(), vec!["UA123".to_string()]);
}

#[tokio::test]
async fn query_is_url_encoded() {
    let (client, gateway) = spawn_gateway(StatusCode::OK, "[]".to_string()).await;

    client.lookup("UA 123&x=1").await.unwrap();

    assert_eq!(gateway.queries.lock().clone(), vec!["UA 123&x=1".to_string()]);
}

#[tokio::test]
async fn forwarded_status_is_an_error_even_with_empty_list() {
    let (client, _) = spawn_gateway(StatusCode::NOT_FOUND, "[]".to_string()).await;

    let err = client.lookup("UA123").await.unwrap_err();

    assert!(matches!(err, SearchError::Status(StatusCode::NOT_FOUND)));
}

#[tokio::test]
async fn server_error_is_an_error() {
    let (client, _) = spawn_gateway(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"Failed to fetch flight data"}"#.to_string(),
    )
    .await;

    let err = client.lookup("UA123").await.unwrap_err();

    assert!(matches!(
        err,
        SearchError::Status(StatusCode::INTERNAL_SERVER_ERROR)
    ));
}

#[tokio::test]
async fn non_json_success_body_is_an_error() {
    let (client, _) = spawn_gateway(StatusCode::OK, "not json".to_string()).await;

    let err = client.lookup("UA123").await.unwrap_err();

    assert!(matches!(err, SearchError::Reqwest(_)));
}
