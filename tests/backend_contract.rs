//! Integration tests for the HTTP backend contract
//!
//! Each test starts a tiny in-process HTTP server on a random port, points an
//! `ApiClient` at it and checks both the request that went out and how the
//! response was mapped.

use std::sync::{Arc, Mutex};

use appraise::headless::runner::{execute, HeadlessCommand};
use appraise::HeadlessEvent;
use appraise_api::{ApiClient, ValuationBackend};
use appraise_app::estimator::{EstimateFailure, FALLBACK_ERROR_MESSAGE};
use appraise_core::{EstimateRequest, Error};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Canned response for one method + path
#[derive(Clone)]
struct Route {
    method: &'static str,
    path: &'static str,
    status: u16,
    content_type: &'static str,
    body: &'static str,
}

fn json(method: &'static str, path: &'static str, status: u16, body: &'static str) -> Route {
    Route {
        method,
        path,
        status,
        content_type: "application/json",
        body,
    }
}

/// A request as the stub saw it
#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    body: String,
}

struct Stub {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = requests.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let seen = seen.clone();
                tokio::spawn(async move {
                    serve(stream, &routes, &seen).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).unwrap()
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn serve(mut stream: TcpStream, routes: &[Route], seen: &Mutex<Vec<Recorded>>) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.unwrap_or(0);
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();
    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    seen.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        body,
    });

    let (status, content_type, body) = routes
        .iter()
        .find(|r| r.method == method && r.path == path)
        .map(|r| (r.status, r.content_type, r.body))
        .unwrap_or((404, "text/plain", "not found"));

    let response = format!(
        "HTTP/1.1 {} Stub\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        content_type,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn request(area: &str, bhk: &str, location: &str) -> EstimateRequest {
    EstimateRequest {
        area: area.into(),
        bhk: bhk.into(),
        location: location.into(),
    }
}

#[tokio::test]
async fn test_analytics_snapshot_is_decoded() {
    let stub = Stub::start(vec![json(
        "GET",
        "/api/analytics",
        200,
        r#"{"top_locations":[{"name":"Sindhu Bhavan","price":15000000.0},{"name":"Ambli","price":12500000.0}],
           "bhk_distribution":[{"bhk":2,"avg_price":4500000.0},{"bhk":3,"avg_price":8500000.0}]}"#,
    )])
    .await;

    let snapshot = stub.client().fetch_analytics().await.unwrap();

    assert_eq!(snapshot.top_locations.len(), 2);
    assert_eq!(snapshot.top_locations[0].name, "Sindhu Bhavan");
    assert_eq!(snapshot.bhk_distribution[1].bhk, 3);
    assert_eq!(stub.requests()[0].method, "GET");
}

#[tokio::test]
async fn test_location_catalog_keeps_order_and_first_duplicate() {
    let stub = Stub::start(vec![json(
        "GET",
        "/api/locations",
        200,
        r#"["Thaltej","Ambli","Bopal","Ambli"]"#,
    )])
    .await;

    let catalog = stub.client().fetch_locations().await.unwrap();

    assert_eq!(catalog.names(), ["Thaltej", "Ambli", "Bopal"]);
}

#[tokio::test]
async fn test_base_path_prefix_is_kept() {
    let stub = Stub::start(vec![json(
        "GET",
        "/valuation/api/locations",
        200,
        r#"["Bopal"]"#,
    )])
    .await;
    let client = ApiClient::new(&format!("{}/valuation", stub.base_url)).unwrap();

    let catalog = client.fetch_locations().await.unwrap();

    assert_eq!(catalog.names(), ["Bopal"]);
    assert_eq!(stub.requests()[0].path, "/valuation/api/locations");
}

#[tokio::test]
async fn test_predict_sends_fields_as_typed() {
    let stub = Stub::start(vec![json(
        "POST",
        "/predict",
        200,
        r#"{"predicted_price": 8500000.0}"#,
    )])
    .await;

    let price = stub
        .client()
        .predict(&request("1200.50", "3", "Sindhu Bhavan"))
        .await
        .unwrap();

    assert_eq!(price, 8_500_000.0);
    let sent = &stub.requests()[0];
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.path, "/predict");
    let body: serde_json::Value = serde_json::from_str(&sent.body).unwrap();
    assert_eq!(body["area"], "1200.50");
    assert_eq!(body["bhk"], "3");
    assert_eq!(body["location"], "Sindhu Bhavan");
}

#[tokio::test]
async fn test_rejection_message_is_surfaced() {
    let stub = Stub::start(vec![json(
        "POST",
        "/predict",
        400,
        r#"{"error":"Location not found in dataset"}"#,
    )])
    .await;

    let err = stub
        .client()
        .predict(&request("1500", "3", "Atlantis"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ServerRejection { status: 400, .. }));
    assert_eq!(
        EstimateFailure::from(&err),
        EstimateFailure::Rejected {
            message: "Location not found in dataset".into()
        }
    );
}

#[tokio::test]
async fn test_error_without_payload_falls_back() {
    let stub = Stub::start(vec![Route {
        method: "POST",
        path: "/predict",
        status: 502,
        content_type: "text/html",
        body: "<html>Bad Gateway</html>",
    }])
    .await;

    let err = stub
        .client()
        .predict(&request("1500", "3", "Bopal"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnexpectedStatus { status: 502 }));
    assert_eq!(
        EstimateFailure::from(&err).user_message(),
        FALLBACK_ERROR_MESSAGE
    );
}

#[tokio::test]
async fn test_degenerate_error_payload_falls_back() {
    for body in [r#"{"error":""}"#, r#"{"error":42}"#] {
        let stub = Stub::start(vec![json("POST", "/predict", 400, body)]).await;

        let err = stub
            .client()
            .predict(&request("1500", "3", "Bopal"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::UnexpectedStatus { status: 400 }), "{body}");
        assert_eq!(
            EstimateFailure::from(&err).user_message(),
            FALLBACK_ERROR_MESSAGE
        );
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_protocol_error() {
    let stub = Stub::start(vec![json("POST", "/predict", 200, r#"{"price":1}"#)]).await;

    let err = stub
        .client()
        .predict(&request("1500", "3", "Bopal"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Protocol { .. }));
    assert_eq!(
        EstimateFailure::from(&err).user_message(),
        FALLBACK_ERROR_MESSAGE
    );
}

#[tokio::test]
async fn test_analytics_error_status_is_reported() {
    let stub = Stub::start(vec![json("GET", "/api/analytics", 500, r#"{"error":"boom"}"#)]).await;

    let err = stub.client().fetch_analytics().await.unwrap_err();

    assert!(matches!(err, Error::UnexpectedStatus { status: 500 }));
}

#[tokio::test]
async fn test_ping_returns_greeting() {
    let stub = Stub::start(vec![Route {
        method: "GET",
        path: "/",
        status: 200,
        content_type: "text/plain",
        body: "Server is up and running!",
    }])
    .await;

    let greeting = stub.client().ping().await.unwrap();

    assert_eq!(greeting, "Server is up and running!");
}

#[tokio::test]
async fn test_closed_port_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{}", addr)).unwrap();
    let err = client.fetch_locations().await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }));
}

#[tokio::test]
async fn test_headless_estimate_over_http() {
    let stub = Stub::start(vec![json(
        "POST",
        "/predict",
        200,
        r#"{"predicted_price": 8500000.0}"#,
    )])
    .await;
    let client = stub.client();
    let base_url = client.base_url().to_string();

    let mut events = Vec::new();
    let mut sink = |event: HeadlessEvent| events.push(event);
    execute(
        &client,
        &base_url,
        HeadlessCommand::Estimate {
            area: "1500".into(),
            bhk: "3".into(),
            location: "Bopal".into(),
        },
        &mut sink,
    )
    .await
    .unwrap();

    match events.last() {
        Some(HeadlessEvent::Estimate {
            estimated_value,
            price_per_sqft,
            ..
        }) => {
            assert_eq!(estimated_value, "₹85,00,000");
            assert_eq!(price_per_sqft.as_deref(), Some("₹5,667"));
        }
        other => panic!("unexpected event {:?}", other),
    }
}
