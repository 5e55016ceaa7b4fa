#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests: real gRPC server, real client, in-memory SQLite

mod common;

use common::start_server;
use users_sdk::{UserRequest, UsersClient, UsersError, UsersGrpcClient};

#[tokio::test]
async fn test_full_user_lifecycle() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    let created = client
        .create_user(UserRequest::new("a@b", "abc12345"))
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.email, "a@b");
    assert_eq!(created.password, "abc12345");

    let fetched = client.get_user(&created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = client
        .update_user(&created.id, UserRequest::new("c@d", "xyz98765"))
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.email, "c@d");
    assert_eq!(updated.password, "xyz98765");

    let listed = client.list_users().await.unwrap();
    assert_eq!(listed, vec![updated.clone()]);

    client.delete_user(&created.id).await.unwrap();

    let err = client.get_user(&created.id).await.unwrap_err();
    assert!(matches!(err, UsersError::NotFound(_)));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_invalid_email_is_rejected_with_message() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    let err = client
        .create_user(UserRequest::new("invalidemail", "abc12345"))
        .await
        .unwrap_err();
    assert_eq!(err, UsersError::Validation("invalid email format".to_owned()));

    assert!(client.list_users().await.unwrap().is_empty());
    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_short_password_is_rejected_with_message() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    let err = client
        .create_user(UserRequest::new("a@b", "abc12"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        UsersError::Validation("password must be at least 8 characters long".to_owned())
    );

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_list_on_fresh_server_is_empty() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    assert!(client.list_users().await.unwrap().is_empty());

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    let err = client
        .update_user("missing", UserRequest::new("c@d", "xyz98765"))
        .await
        .unwrap_err();
    assert!(matches!(err, UsersError::NotFound(_)));

    let err = client.delete_user("missing").await.unwrap_err();
    assert!(matches!(err, UsersError::NotFound(_)));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_empty_id_is_invalid_argument() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    let err = client.get_user("").await.unwrap_err();
    assert_eq!(err, UsersError::Validation("user ID is required".to_owned()));

    drop(client);
    server.shutdown().await;
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let server = start_server().await;
    let client = UsersGrpcClient::connect(server.uri()).await.unwrap();

    let a = client
        .create_user(UserRequest::new("a@b", "abc12345"))
        .await
        .unwrap();
    let b = client
        .create_user(UserRequest::new("a@b", "abc12345"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(client.list_users().await.unwrap().len(), 2);

    drop(client);
    server.shutdown().await;
}
