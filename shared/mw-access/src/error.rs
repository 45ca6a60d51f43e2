//! Access control error types.

use thiserror::Error;

use crate::catalog::Permissions;

/// Errors produced by the guard surface.
///
/// The boolean query surface never returns these: a missing user, an
/// unrecognized role, or an unknown permission all evaluate to a plain
/// denial. Only [`require_permission`](crate::AccessContext::require_permission)
/// and the strict `Role` parser produce errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No signed-in user.
    #[error("authentication required")]
    NotSignedIn,

    /// User lacks a required permission.
    #[error("missing permission: {0:?}")]
    MissingPermission(Permissions),

    /// Role tag outside the closed role set.
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// Result type for access control operations.
pub type AccessResult<T> = Result<T, AccessError>;
