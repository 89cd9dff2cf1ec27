//! Project manager integration tests.

use fmeflow_client::CreateProjectRequest;
use mockito::Matcher;
use serde_json::json;

mod common;
use common::test_client;

/// Test that listing uses the doubled collection path.
#[tokio::test]
async fn test_all_lists_projects() {
    let (mut server, client) = test_client().await;
    let mock = server
        .mock("GET", "/fmerest/v3/projects/projects")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[
                {"id":"p-1","name":"migration","userName":"alice"},
                {"id":"p-2","name":"archive"}
            ]}"#,
        )
        .create_async()
        .await;

    let projects = client.projects().all().await.unwrap();

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, "p-1");
    assert_eq!(projects[1].name, "archive");
}

/// Test single project lookup by identifier.
#[tokio::test]
async fn test_get_fetches_single_project() {
    let (mut server, client) = test_client().await;
    server
        .mock("GET", "/fmerest/v3/projects/projects/p-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"p-1","name":"migration","description":"Q3 move"}"#)
        .create_async()
        .await;

    let project = client.projects().get("p-1").await.unwrap();

    assert_eq!(project.name, "migration");
    assert_eq!(project.description.as_deref(), Some("Q3 move"));
}

/// Test that creation posts the request body and decodes the reply.
#[tokio::test]
async fn test_create_posts_body_and_decodes_reply() {
    let (mut server, client) = test_client().await;
    let mock = server
        .mock("POST", "/fmerest/v3/projects/projects")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"name": "migration", "owner": "admin"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"p-9","name":"migration","owner":"admin"}"#)
        .create_async()
        .await;

    let request = CreateProjectRequest {
        name: "migration".into(),
        description: None,
        owner: Some("admin".into()),
    };
    let project = client.projects().create(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(project.id, "p-9");
    assert_eq!(project.owner.as_deref(), Some("admin"));
}

/// Test the owner filter over the full project listing.
#[tokio::test]
async fn test_for_user_filters_on_owner() {
    let (mut server, client) = test_client().await;
    server
        .mock("GET", "/fmerest/v3/projects/projects")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"items":[
                {"id":"p-1","name":"m1","userName":"alice"},
                {"id":"p-2","name":"m2","userName":"bob"}
            ]}"#,
        )
        .create_async()
        .await;

    let projects = client.projects().for_user("bob").await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "p-2");
}
