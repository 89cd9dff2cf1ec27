//! Licensing manager integration tests, mostly around memoization.

use serde_json::json;

mod common;
use common::test_client;

/// Test that the status document is fetched exactly once per client.
#[tokio::test]
async fn test_status_is_fetched_once() {
    let (mut server, client) = test_client().await;
    let mock = server
        .mock("GET", "/fmerest/v3/licensing/license/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"isLicensed":true,"expiryDate":"2027-01-31"}"#)
        .expect(1)
        .create_async()
        .await;

    let first = client.licensing().status().await.unwrap().clone();
    let second = client.licensing().status().await.unwrap().clone();

    mock.assert_async().await;
    assert!(first.is_licensed);
    assert_eq!(first.expiry_date, second.expiry_date);
}

/// Test that capabilities are cached as raw JSON.
#[tokio::test]
async fn test_capabilities_fetched_once() {
    let (mut server, client) = test_client().await;
    let mock = server
        .mock("GET", "/fmerest/v3/licensing/license/capabilities")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"engines":8,"dynamicEngines":false}"#)
        .expect(1)
        .create_async()
        .await;

    let first = client.licensing().capabilities().await.unwrap().clone();
    client.licensing().capabilities().await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, json!({"engines": 8, "dynamicEngines": false}));
}

/// Test that the machine key is decoded and fetched exactly once per
/// client.
#[tokio::test]
async fn test_machine_key_fetched_once() {
    let (mut server, client) = test_client().await;
    let mock = server
        .mock("GET", "/fmerest/v3/licensing/machinekey")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"machineKey":"MK-1234-ABCD"}"#)
        .expect(1)
        .create_async()
        .await;

    let first = client.licensing().machine_key().await.unwrap().clone();
    let second = client.licensing().machine_key().await.unwrap().clone();

    mock.assert_async().await;
    assert_eq!(first.machine_key, "MK-1234-ABCD");
    assert_eq!(first.machine_key, second.machine_key);
}

/// Test that the system code is unwrapped from its envelope and cached.
#[tokio::test]
async fn test_system_code_unwraps_envelope() {
    let (mut server, client) = test_client().await;
    let mock = server
        .mock("GET", "/fmerest/v3/licensing/systemcode")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"systemCode":"ab12-cd34-ef56"}"#)
        .expect(1)
        .create_async()
        .await;

    let first = client.licensing().system_code().await.unwrap().to_string();
    let second = client.licensing().system_code().await.unwrap().to_string();

    mock.assert_async().await;
    assert_eq!(first, "ab12-cd34-ef56");
    assert_eq!(first, second);
}

/// Test that a failed fetch is not cached: the next call retries and can
/// succeed.
#[tokio::test]
async fn test_failed_fetch_is_retried() {
    let (mut server, client) = test_client().await;
    let failing = server
        .mock("GET", "/fmerest/v3/licensing/license/status")
        .with_status(503)
        .with_body(r#"{"message":"licensing subsystem restarting"}"#)
        .expect(1)
        .create_async()
        .await;

    let error = client.licensing().status().await.unwrap_err();
    assert_eq!(error.status().map(|s| s.as_u16()), Some(503));

    failing.remove_async().await;
    server
        .mock("GET", "/fmerest/v3/licensing/license/status")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"isLicensed":true}"#)
        .create_async()
        .await;

    let status = client.licensing().status().await.unwrap();
    assert!(status.is_licensed);
}
