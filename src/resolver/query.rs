use crate::database::Record;

use super::{ResolverContext, ResolverError};

/// All records, in store order
pub async fn records(ctx: &ResolverContext<'_>) -> Result<Vec<Record>, ResolverError> {
    Ok(ctx.store.get_all().await?)
}

/// A single record; absence is not an error
pub async fn record(ctx: &ResolverContext<'_>, id: i64) -> Result<Option<Record>, ResolverError> {
    Ok(ctx.store.get_by_id(id).await?)
}

/// The record a caller claims to be logged in as.
///
/// An empty or missing name is rejected before the store is consulted.
pub async fn record_by_identity(
    ctx: &ResolverContext<'_>,
    name: Option<&str>,
) -> Result<Record, ResolverError> {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ResolverError::AuthenticationRequired),
    };

    ctx.store
        .get_by_name(name)
        .await?
        .ok_or_else(|| ResolverError::NotFound(format!("No record named '{}'", name)))
}
