mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

use record_api::database::RecordStore;

#[tokio::test]
async fn list_records_returns_fixtures() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server.call_json("records", json!({}), None).await?;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["success"], true);
    let records = body["data"]["records"].as_array().expect("records array");
    assert_eq!(records.len(), 6);
    assert_eq!(records[0]["name"], "Ralph");
    Ok(())
}

#[tokio::test]
async fn create_then_get_round_trips_fields() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server
        .call_json(
            "createRecord",
            json!({"name": "Pip", "category": "Parrot", "accessory": "Bow tie"}),
            None,
        )
        .await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    let id = body["data"]["createRecord"]["id"].as_i64().expect("assigned id");

    let (_, body) = server.call_json("record", json!({ "id": id.to_string() }), None).await?;
    assert_eq!(
        body["data"]["record"],
        json!({"id": id, "name": "Pip", "category": "Parrot", "accessory": "Bow tie"})
    );
    Ok(())
}

#[tokio::test]
async fn create_with_missing_field_is_rejected() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server
        .call_json("createRecord", json!({"name": "Pip", "category": "Parrot"}), None)
        .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "All fields are required");
    assert!(body["field_errors"].get("accessory").is_some(), "body: {}", body);
    assert_eq!(server.store.len().await, 6);
    Ok(())
}

#[tokio::test]
async fn missing_record_is_null() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server.call_json("record", json!({"id": 999}), None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["record"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn update_subset_preserves_other_fields() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server
        .call_json("updateRecord", json!({"id": "4", "accessory": "Raincoat"}), None)
        .await?;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(
        body["data"]["updateRecord"],
        json!({"id": 4, "name": "Mayo", "category": "Dog", "accessory": "Raincoat"})
    );
    Ok(())
}

#[tokio::test]
async fn update_missing_record_is_not_found() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server
        .call_json("updateRecord", json!({"id": 77, "name": "Ghost"}), None)
        .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    Ok(())
}

#[tokio::test]
async fn delete_without_admin_session_is_forbidden() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    for session in [None, Some("Lulu")] {
        let (status, body) = server.call_json("deleteRecord", json!({"id": 2}), session).await?;
        assert_eq!(status, StatusCode::FORBIDDEN, "body: {}", body);
        assert_eq!(body["message"], "You are not authorized to delete this record");
    }

    assert!(server.store.get_by_id(2).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn delete_with_admin_session_removes_record() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server.call_json("deleteRecord", json!({"id": 2}), Some("Ralph")).await?;
    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"]["deleteRecord"]["name"], "Evelina");

    let (_, body) = server.call_json("record", json!({"id": 2}), None).await?;
    assert_eq!(body["data"]["record"], Value::Null);

    let (status, _) = server.call_json("deleteRecord", json!({"id": 2}), Some("Ralph")).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn record_by_identity_requires_name() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server.call_json("recordByIdentity", json!({"name": ""}), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "User must be logged in");

    let (status, body) = server.call_json("recordByIdentity", json!({"name": "Otto"}), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["recordByIdentity"]["id"], 3);
    Ok(())
}

#[tokio::test]
async fn unknown_operation_is_bad_request() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let (status, body) = server.call_json("dropRecords", json!({}), None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_invalid_json() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/graphql", server.base_url))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}
