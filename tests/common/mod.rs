#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};

use record_api::config::AppConfig;
use record_api::database::{seed_fixtures, MemoryRecordStore};
use record_api::{app, AppState};

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub store: Arc<MemoryRecordStore>,
    client: reqwest::Client,
}

impl TestServer {
    /// Serve the app in-process on a free port over a seeded memory store
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with(AppConfig::development()).await
    }

    pub async fn spawn_with(config: AppConfig) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let store = Arc::new(MemoryRecordStore::new());
        seed_fixtures(store.as_ref()).await?;

        let state = Arc::new(AppState::new(config, store.clone()));
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app(state)).await;
        });

        let server = Self {
            port,
            base_url,
            store,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(format!("{}/health", self.base_url)).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    /// POST an operation to /graphql, optionally presenting a session cookie value
    pub async fn call(
        &self,
        operation: &str,
        variables: Value,
        session: Option<&str>,
    ) -> Result<reqwest::Response> {
        let mut request = self
            .client
            .post(format!("{}/graphql", self.base_url))
            .json(&json!({ "operation": operation, "variables": variables }));
        if let Some(token) = session {
            request = request.header("Cookie", format!("sessionToken={}", token));
        }
        Ok(request.send().await?)
    }

    /// Like `call`, returning status and parsed body
    pub async fn call_json(
        &self,
        operation: &str,
        variables: Value,
        session: Option<&str>,
    ) -> Result<(StatusCode, Value)> {
        let res = self.call(operation, variables, session).await?;
        let status = res.status();
        let body = res.json::<Value>().await?;
        Ok((status, body))
    }
}

/// Value of the sessionToken cookie in a Set-Cookie header
pub fn session_token(res: &reqwest::Response) -> Option<String> {
    res.headers()
        .get_all("set-cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix("sessionToken="))
        .and_then(|rest| rest.split(';').next())
        .map(str::to_string)
}
