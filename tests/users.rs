//! User account integration tests.

use mockito::Matcher;

mod common;
use common::test_client;

/// Test that listing binds accounts and drops the synthetic `user:` role
/// tags.
#[tokio::test]
async fn test_all_binds_accounts_and_scrubs_roles() {
    let (mut server, client) = test_client().await;
    server
        .mock("GET", "/fmerest/v3/security/accounts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[
                {"name":"alice","type":"USER","enabled":true,
                 "roles":["fmeadmin","user:alice"]},
                {"name":"svc-robot","type":"SYSTEM","roles":["user:svc-robot"]}
            ]}"#,
        )
        .create_async()
        .await;

    let users = client.users().all().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].name, "alice");
    assert_eq!(users[0].roles, vec!["fmeadmin"]);
    assert_eq!(users[1].account_type, "SYSTEM");
    assert!(users[1].roles.is_empty());
}

/// Test single account lookup by name.
#[tokio::test]
async fn test_get_fetches_single_account() {
    let (mut server, client) = test_client().await;
    server
        .mock("GET", "/fmerest/v3/security/accounts/alice")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"name":"alice","fullName":"Alice Admin","email":"alice@example.com",
                "type":"USER","enabled":true,"securityLevel":3}"#,
        )
        .create_async()
        .await;

    let user = client.users().get("alice").await.unwrap();

    assert_eq!(user.full_name.as_deref(), Some("Alice Admin"));
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert_eq!(user.extra["securityLevel"], 3);
    assert_eq!(user.to_string(), "alice");
}

/// Test that a fetched account can list its own workspaces through the
/// transport it was bound to.
#[tokio::test]
async fn test_user_navigates_to_owned_workspaces() {
    let (mut server, client) = test_client().await;
    server
        .mock("GET", "/fmerest/v3/security/accounts/alice")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"alice","type":"USER"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/fmerest/v3/repositories")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"items":[{"name":"alpha"}]}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/fmerest/v3/repositories/alpha/items")
        .match_query(Matcher::UrlEncoded("type".into(), "WORKSPACE".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[
                {"name":"hers.fmw","userName":"alice"},
                {"name":"his.fmw","userName":"bob"}
            ]}"#,
        )
        .create_async()
        .await;

    let user = client.users().get("alice").await.unwrap();
    let workspaces = user.workspaces().await.unwrap();

    assert_eq!(workspaces.len(), 1);
    assert_eq!(workspaces[0].name, "hers.fmw");
}

/// Test that a fetched account can list its own automations.
#[tokio::test]
async fn test_user_navigates_to_owned_automations() {
    let (mut server, client) = test_client().await;
    server
        .mock("GET", "/fmerest/v3/security/accounts/bob")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"name":"bob","type":"USER"}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/fmerest/v3/automations/workflows")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[
                {"id":"1","name":"his","userName":"bob"},
                {"id":"2","name":"hers","userName":"alice"}
            ]}"#,
        )
        .create_async()
        .await;

    let user = client.users().get("bob").await.unwrap();
    let automations = user.automations().await.unwrap();

    assert_eq!(automations.len(), 1);
    assert_eq!(automations[0].id, "1");
}
