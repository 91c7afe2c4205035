use httpmock::prelude::*;
use query_submitter::health_service::HealthService;

#[tokio::test]
async fn reachable_server_is_healthy() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(200).body("<html>home</html>");
        })
        .await;

    let health = HealthService::new(Some(5)).unwrap();
    let status = health.check(&server.base_url()).await;

    mock.assert_async().await;
    assert!(status.ok, "{}", status.message);
    assert_eq!(status.status, Some(200));

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["endpoint"], server.base_url());
}

#[tokio::test]
async fn server_error_is_unhealthy() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/");
            then.status(503).body("starting up");
        })
        .await;

    let health = HealthService::new(Some(5)).unwrap();
    let status = health.check(&server.base_url()).await;

    assert!(!status.ok);
    assert_eq!(status.status, Some(503));
    assert!(status.message.contains("starting up"), "{}", status.message);
}

#[tokio::test]
async fn invalid_endpoint_is_unhealthy_without_request() {
    let health = HealthService::new(None).unwrap();
    let status = health.check("localhost:3000").await;

    assert!(!status.ok);
    assert_eq!(status.status, None);
    assert_eq!(status.latency_ms, 0);
}
