//! Session credentials carried in the `sessionToken` cookie.
//!
//! In `plain` mode the cookie value is the claimed name itself: unsigned,
//! with no server-side session table, and forgeable by anyone who can set a
//! cookie. `signed` mode wraps the name in an HS256 JWT so the value cannot
//! be minted without the secret. The authorization gate only ever sees the
//! decoded identity string.

pub mod gate;

use axum::http::{header, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{SessionConfig, SessionMode};

pub use gate::{authorize_destructive, AuthError};

pub const SESSION_COOKIE: &str = "sessionToken";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(identity: &str, max_age_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: identity.to_string(),
            exp: (now + Duration::seconds(max_age_secs)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session secret is not configured")]
    MissingSecret,

    #[error("Session token generation failed: {0}")]
    TokenGeneration(String),
}

/// Produce the cookie value for an identity
pub fn issue_credential(settings: &SessionConfig, identity: &str) -> Result<String, SessionError> {
    match settings.mode {
        SessionMode::Plain => Ok(identity.to_string()),
        SessionMode::Signed => {
            if settings.secret.is_empty() {
                return Err(SessionError::MissingSecret);
            }
            let claims = Claims::new(identity, settings.cookie_max_age_secs);
            let key = EncodingKey::from_secret(settings.secret.as_bytes());
            encode(&Header::default(), &claims, &key)
                .map_err(|e| SessionError::TokenGeneration(e.to_string()))
        }
    }
}

/// Full `Set-Cookie` value for a session credential
pub fn session_cookie(value: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=lax; Path=/; Max-Age={}",
        SESSION_COOKIE, value, max_age_secs
    )
}

/// Identity presented by the caller, if any.
///
/// Signed tokens that fail verification or have expired are treated as
/// absent, so the gate fails closed on them.
pub fn read_credential(settings: &SessionConfig, headers: &HeaderMap) -> Option<String> {
    let raw = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|h| parse_cookie(h, SESSION_COOKIE))?;

    match settings.mode {
        SessionMode::Plain => Some(raw.to_string()),
        SessionMode::Signed => verify_token(settings, raw),
    }
}

fn verify_token(settings: &SessionConfig, token: &str) -> Option<String> {
    if settings.secret.is_empty() {
        return None;
    }
    let key = DecodingKey::from_secret(settings.secret.as_bytes());
    match decode::<Claims>(token, &key, &Validation::default()) {
        Ok(data) => Some(data.claims.sub),
        Err(e) => {
            tracing::debug!("Rejected session token: {}", e);
            None
        }
    }
}

/// Find one cookie in a `Cookie` header value
fn parse_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|part| part.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
