use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::auth::read_credential;
use crate::AppState;

/// Identity presented in the session cookie, decoded per the session mode.
/// `None` when the request carried no usable credential.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionIdentity(pub Option<String>);

/// Reads the session cookie and injects a `SessionIdentity` into the request.
/// Never rejects; authorization decisions belong to the resolvers.
pub async fn session_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = read_credential(&state.config.session, request.headers());
    if identity.is_some() {
        tracing::debug!("Request carries a session credential");
    }
    request.extensions_mut().insert(SessionIdentity(identity));

    next.run(request).await
}
