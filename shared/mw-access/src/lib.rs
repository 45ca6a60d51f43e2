//! Mawared Access Control
//!
//! Role-based permission gate shared by the platform services and the HQ
//! app. Resolves a signed-in user's role to a static permission set and
//! answers the boolean queries that guard dashboard actions and API
//! handlers.
//!
//! The one policy that matters: **fail closed**. A missing user, an
//! unrecognized role tag, and an unknown permission all resolve to
//! "denied", never to an error and never to an optimistic grant.

pub mod catalog;
pub mod error;
pub mod gate;
pub mod role;
pub mod subject;

pub use catalog::Permissions;
pub use error::{AccessError, AccessResult};
pub use gate::AccessContext;
pub use role::Role;
pub use subject::Subject;
