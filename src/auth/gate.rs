use crate::database::Record;

pub const NOT_AUTHORIZED_MESSAGE: &str = "You are not authorized to delete this record";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("You are not authorized to delete this record")]
    NotAuthorized,
}

/// Permit a destructive operation only when the presented credential is
/// exactly the admin record's name.
///
/// Fails closed: a missing or empty credential, or a missing admin record,
/// is a rejection.
pub fn authorize_destructive(presented: Option<&str>, admin: Option<&Record>) -> Result<(), AuthError> {
    match (presented, admin) {
        (Some(credential), Some(admin)) if !credential.is_empty() && credential == admin.name => {
            Ok(())
        }
        _ => Err(AuthError::NotAuthorized),
    }
}
