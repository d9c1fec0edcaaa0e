// ABOUTME: Integration tests for the user profile REST endpoint
// ABOUTME: Tests upsert success paths and required-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tabdeck

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::create_test_resources;
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use tabdeck_sync_server::routes::{MessageResponse, UserRoutes};

#[tokio::test]
async fn test_create_user() {
    let resources = create_test_resources().await.unwrap();
    let router = UserRoutes::router(resources.clone());

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({
            "user_id": "u1",
            "email": "a@b.com",
            "name": "Ada",
            "picture": "https://example.com/ada.png"
        }))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: MessageResponse = response.json();
    assert_eq!(body.message, "User created/updated successfully");

    let user = resources.database.get_user("u1").await.unwrap().unwrap();
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn test_update_user_changes_email_keeps_id() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"user_id": "u1", "email": "a@b.com"}))
        .send(UserRoutes::router(resources.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"user_id": "u1", "email": "c@d.com"}))
        .send(UserRoutes::router(resources.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let user = resources.database.get_user("u1").await.unwrap().unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.email, "c@d.com");
}

#[tokio::test]
async fn test_missing_user_id_is_rejected() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"email": "a@b.com"}))
        .send(UserRoutes::router(resources.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "user_id and email are required");
}

#[tokio::test]
async fn test_missing_email_is_rejected_without_partial_write() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"user_id": "u1"}))
        .send(UserRoutes::router(resources.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(resources.database.get_user("u1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_empty_strings_count_as_missing() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"user_id": "", "email": "a@b.com"}))
        .send(UserRoutes::router(resources.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_conflicting_email_surfaces_as_server_error() {
    let resources = create_test_resources().await.unwrap();

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"user_id": "u1", "email": "taken@b.com"}))
        .send(UserRoutes::router(resources.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = AxumTestRequest::post("/api/user")
        .json(&json!({"user_id": "u2", "email": "taken@b.com"}))
        .send(UserRoutes::router(resources.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].is_string());
}
