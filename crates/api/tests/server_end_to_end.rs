//! End-to-end tests: real listener, real HTTP upstream (wiremock), real client.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use numwin_domain::Config;
use numwin_lib::{serve_with_listener, AppContext};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct RunningServer {
    addr: SocketAddr,
    ctx: Arc<AppContext>,
    shutdown: Option<oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<anyhow::Result<()>>,
}

impl RunningServer {
    async fn start(upstream: &MockServer) -> Self {
        let mut config = Config::default();
        config.upstream.base_url = upstream.uri();
        config.upstream.access_token = Some("test-token".into());

        let ctx = Arc::new(AppContext::new(config).expect("context"));
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve_with_listener(listener, ctx.clone(), async move {
            let _ = rx.await;
        }));

        Self { addr, ctx, shutdown: Some(tx), handle }
    }

    async fn get(&self, selector: &str) -> (u16, Value) {
        let client = reqwest::Client::builder().no_proxy().build().expect("client");
        let response = client
            .get(format!("http://{}/numbers/{selector}", self.addr))
            .send()
            .await
            .expect("request");
        let status = response.status().as_u16();
        let body = response.json::<Value>().await.expect("json body");
        (status, body)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("server task").expect("server result");
    }
}

#[tokio::test]
async fn serves_numbers_from_authenticated_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/primes"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numbers": [2, 3, 5, 7]})))
        .expect(1)
        .mount(&upstream)
        .await;

    let server = RunningServer::start(&upstream).await;
    let (status, body) = server.get("p").await;

    assert_eq!(status, 200);
    assert_eq!(body["windowPrevState"], json!([]));
    assert_eq!(body["windowCurrState"], json!([2, 3, 5, 7]));
    assert_eq!(body["numbers"], json!([2, 3, 5, 7]));
    assert_eq!(body["avg"], json!(4.25));

    server.stop().await;
}

#[tokio::test]
async fn slow_upstream_times_out_with_503() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rand"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"numbers": [42]}))
                .set_delay(Duration::from_millis(1500)),
        )
        .mount(&upstream)
        .await;

    let server = RunningServer::start(&upstream).await;
    let (status, body) = server.get("r").await;

    assert_eq!(status, 503);
    assert_eq!(body, json!({"error": "Failed to fetch numbers"}));
    assert!(server.ctx.store.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn upstream_error_status_returns_503() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fibo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let server = RunningServer::start(&upstream).await;
    let (status, body) = server.get("f").await;

    assert_eq!(status, 503);
    assert_eq!(body, json!({"error": "Failed to fetch numbers"}));

    server.stop().await;
}

#[tokio::test]
async fn invalid_selector_never_reaches_upstream() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"numbers": [1]})))
        .expect(0)
        .mount(&upstream)
        .await;

    let server = RunningServer::start(&upstream).await;
    let (status, body) = server.get("primes").await;

    assert_eq!(status, 400);
    assert_eq!(body, json!({"error": "Invalid number ID"}));

    server.stop().await;
}
