//! Operation dispatch.
//!
//! `dispatch` validates the variables for the requested operation, then
//! hands typed input to one resolver function per operation. Resolvers are
//! stateless; everything they need arrives in the `ResolverContext`.

pub mod mutation;
pub mod query;

use serde_json::Value;
use thiserror::Error;

use crate::auth::{AuthError, SessionError};
use crate::config::SessionConfig;
use crate::database::{RecordStore, StoreError};
use crate::types::Operation;
use crate::validation::{self, ValidationError, Variables};

pub use mutation::LoginOutcome;

/// Per-request inputs shared by every resolver
pub struct ResolverContext<'a> {
    pub store: &'a dyn RecordStore,
    pub session: &'a SessionConfig,
    /// Identity read from the session cookie, if one was presented
    pub credential: Option<String>,
}

/// Serialized operation result plus any cookie the response must set
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub data: Value,
    pub set_cookie: Option<String>,
}

impl Resolution {
    fn data(data: Value) -> Self {
        Self {
            data,
            set_cookie: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("User must be logged in")]
    AuthenticationRequired,

    #[error(transparent)]
    Authorization(#[from] AuthError),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(StoreError),

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<StoreError> for ResolverError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ResolverError::NotFound(format!("Record {} not found", id)),
            other => ResolverError::Store(other),
        }
    }
}

/// Run one operation against the store
pub async fn dispatch(
    ctx: &ResolverContext<'_>,
    operation: Operation,
    vars: &Variables,
) -> Result<Resolution, ResolverError> {
    tracing::debug!("Dispatching {}", operation);

    let resolution = match operation {
        Operation::Records => Resolution::data(serde_json::to_value(query::records(ctx).await?)?),
        Operation::Record => {
            let id = validation::parse_id(vars)?;
            Resolution::data(serde_json::to_value(query::record(ctx, id).await?)?)
        }
        Operation::RecordByIdentity => {
            let name = validation::optional_identity(vars, "name")?;
            let record = query::record_by_identity(ctx, name.as_deref()).await?;
            Resolution::data(serde_json::to_value(record)?)
        }
        Operation::CreateRecord => {
            let new = validation::validate_create(vars)?;
            Resolution::data(serde_json::to_value(mutation::create_record(ctx, new).await?)?)
        }
        Operation::UpdateRecord => {
            let (id, patch) = validation::validate_update(vars)?;
            Resolution::data(serde_json::to_value(mutation::update_record(ctx, id, patch).await?)?)
        }
        Operation::DeleteRecord => {
            let id = validation::parse_id(vars)?;
            Resolution::data(serde_json::to_value(mutation::delete_record(ctx, id).await?)?)
        }
        Operation::Login => {
            let input = validation::validate_login(vars)?;
            let outcome = mutation::login(ctx, input).await?;
            Resolution {
                data: serde_json::to_value(outcome.record)?,
                set_cookie: Some(outcome.set_cookie),
            }
        }
    };

    Ok(resolution)
}
