// handlers/graphql.rs - POST /graphql handler

use axum::{
    extract::{rejection::JsonRejection, Extension, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, SessionIdentity};
use crate::resolver::{self, ResolverContext};
use crate::types::Operation;
use crate::AppState;

/// Request body of the dispatch endpoint
///
/// ```json
/// { "operation": "createRecord", "variables": { "name": "Pip", "category": "Parrot", "accessory": "Bow tie" } }
/// ```
#[derive(Debug, Deserialize)]
pub struct GraphQlRequest {
    #[serde(alias = "operationName")]
    pub operation: String,
    #[serde(default)]
    pub variables: Option<Map<String, Value>>,
}

/// POST /graphql - run one query or mutation
///
/// Success: `{"success": true, "data": {"<operation>": <result>}}`.
/// `login` additionally sets the `sessionToken` cookie.
pub async fn graphql_post(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<SessionIdentity>,
    payload: Result<Json<GraphQlRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::invalid_json(e.body_text()))?;

    let operation: Operation = request
        .operation
        .parse()
        .map_err(|msg: String| ApiError::bad_request(msg))?;
    let variables = request.variables.unwrap_or_default();

    let ctx = ResolverContext {
        store: state.store.as_ref(),
        session: &state.config.session,
        credential: identity.0,
    };

    let resolution = resolver::dispatch(&ctx, operation, &variables).await?;

    let mut data = Map::new();
    data.insert(operation.name().to_string(), resolution.data);
    let mut response = ApiResponse::success(Value::Object(data)).into_response();

    if let Some(cookie) = resolution.set_cookie {
        let value = HeaderValue::from_str(&cookie).map_err(|e| {
            tracing::error!("Session cookie is not a valid header value: {}", e);
            ApiError::internal_server_error("Failed to issue session")
        })?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    Ok(response)
}
