mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["store"], "ok");
    Ok(())
}

#[tokio::test]
async fn root_lists_operations() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("{}/", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    let queries = body["data"]["operations"]["queries"].as_array().expect("queries array");
    let mutations = body["data"]["operations"]["mutations"].as_array().expect("mutations array");
    assert_eq!(queries.len(), 3, "queries: {}", body);
    assert_eq!(mutations.len(), 4, "mutations: {}", body);
    Ok(())
}
