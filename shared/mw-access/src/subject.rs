//! The authenticated-user view consumed by the permission gate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::role::Role;

/// Minimal view of the signed-in user.
///
/// This is the only slice of the session the gate reads: the user id (for
/// log context) and the raw role tag exactly as the auth collaborator
/// supplies it. The session owns the user lifecycle; this crate never
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// User ID.
    pub id: Uuid,
    /// Role tag from the session payload (e.g. `"employee"`).
    pub role: String,
}

impl Subject {
    /// Build a subject from a session user.
    #[must_use]
    pub fn new(id: Uuid, role: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
        }
    }

    /// Resolve the raw role tag against the closed role set.
    ///
    /// `None` means the tag is unrecognized; the gate treats that as an
    /// empty grant rather than an error.
    #[must_use]
    pub fn parsed_role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}
