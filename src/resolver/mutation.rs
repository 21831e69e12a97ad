use tracing::{info, warn};

use crate::auth::{authorize_destructive, issue_credential, session_cookie};
use crate::database::{NewRecord, Record, RecordPatch};
use crate::validation::LoginInput;

use super::{ResolverContext, ResolverError};

/// Result of a successful login: the caller's record and the cookie to set
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub record: Option<Record>,
    pub set_cookie: String,
}

pub async fn create_record(
    ctx: &ResolverContext<'_>,
    new: NewRecord,
) -> Result<Record, ResolverError> {
    let record = ctx.store.create(new).await?;
    info!("Created record {} ({})", record.id, record.name);
    Ok(record)
}

pub async fn update_record(
    ctx: &ResolverContext<'_>,
    id: i64,
    patch: RecordPatch,
) -> Result<Record, ResolverError> {
    let record = ctx.store.update(id, patch).await?;
    info!("Updated record {}", record.id);
    Ok(record)
}

/// Delete a record on behalf of the admin identity.
///
/// The admin record is looked up by its configured name on every call; the
/// store is not touched for the delete itself unless the gate passes.
pub async fn delete_record(ctx: &ResolverContext<'_>, id: i64) -> Result<Record, ResolverError> {
    let admin = ctx.store.get_by_name(&ctx.session.admin_record_name).await?;

    if let Err(e) = authorize_destructive(ctx.credential.as_deref(), admin.as_ref()) {
        warn!(
            "Rejected delete of record {} (credential present: {})",
            id,
            ctx.credential.is_some()
        );
        return Err(e.into());
    }

    let record = ctx
        .store
        .delete(id)
        .await?
        .ok_or_else(|| ResolverError::NotFound(format!("Record {} not found", id)))?;

    info!("Deleted record {} ({})", record.id, record.name);
    Ok(record)
}

/// Check the configured credential pair and issue a session cookie
pub async fn login(ctx: &ResolverContext<'_>, input: LoginInput) -> Result<LoginOutcome, ResolverError> {
    let settings = ctx.session;
    if input.username != settings.login_username || input.password != settings.login_password {
        warn!("Failed login attempt for '{}'", input.username);
        return Err(ResolverError::InvalidCredentials);
    }

    let credential = issue_credential(settings, &input.username)?;
    let set_cookie = session_cookie(&credential, settings.cookie_max_age_secs);
    let record = ctx.store.get_by_name(&input.username).await?;

    info!("Login succeeded for '{}'", input.username);
    Ok(LoginOutcome { record, set_cookie })
}
