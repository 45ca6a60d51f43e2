//! Permission gate queries for the current user.
//!
//! Fail-closed by policy: a missing user, an unrecognized role tag, and an
//! unknown permission all evaluate to "denied", never to an error.

use tracing::{debug, warn};

use crate::catalog::Permissions;
use crate::error::{AccessError, AccessResult};
use crate::subject::Subject;

/// Pre-resolved permission context for the current user.
///
/// The role is resolved to its permission set once at construction; every
/// query afterwards is a pure set lookup with no side effects. Callers that
/// have not resolved a session yet build [`AccessContext::anonymous`],
/// which is exactly "no user"; there is no optimistic variant.
///
/// # Examples
///
/// ```
/// use mw_access::{AccessContext, Permissions, Subject};
/// use uuid::Uuid;
///
/// let ctx = AccessContext::for_subject(Subject::new(Uuid::new_v4(), "employee"));
/// assert!(ctx.has_permission(Permissions::LEAVES_REQUEST));
/// assert!(!ctx.has_permission(Permissions::PAYROLL_MANAGE));
///
/// let visitor = AccessContext::anonymous();
/// assert!(!visitor.has_permission(Permissions::CHAT_READ));
/// ```
#[derive(Debug, Clone)]
pub struct AccessContext {
    /// The signed-in user, if any.
    subject: Option<Subject>,

    /// Permissions granted by the subject's role; empty when signed out
    /// or when the role tag is unrecognized.
    granted: Permissions,
}

impl AccessContext {
    /// Context for a signed-out visitor. Grants nothing.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            subject: None,
            granted: Permissions::empty(),
        }
    }

    /// Resolve a context for the signed-in user.
    ///
    /// An unrecognized role tag degrades to the empty grant instead of
    /// failing, and is logged so a misconfigured role field upstream stays
    /// visible.
    #[must_use]
    pub fn for_subject(subject: Subject) -> Self {
        let granted = subject.parsed_role().map_or_else(
            || {
                warn!(
                    user_id = %subject.id,
                    role = %subject.role,
                    "unrecognized role tag, granting no permissions"
                );
                Permissions::empty()
            },
            |role| role.permissions(),
        );

        Self {
            subject: Some(subject),
            granted,
        }
    }

    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.subject.is_some()
    }

    /// The signed-in subject, if any.
    #[must_use]
    pub fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    // === Permission Checking ===

    /// Check whether the current user holds the given permission(s).
    ///
    /// Unconditionally false when signed out. A combined flag value
    /// requires every bit, matching set containment.
    #[must_use]
    pub fn has_permission(&self, permission: Permissions) -> bool {
        self.subject.is_some() && self.granted.has(permission)
    }

    /// True when at least one of the listed permissions is granted.
    ///
    /// An empty list is vacuously false, matching short-circuit OR over
    /// zero elements.
    #[must_use]
    pub fn has_any_permission(&self, permissions: &[Permissions]) -> bool {
        permissions.iter().any(|p| self.has_permission(*p))
    }

    /// True when every listed permission is granted.
    ///
    /// An empty list is vacuously true, matching universal quantification
    /// over zero elements. The asymmetry with
    /// [`has_any_permission`](Self::has_any_permission) is deliberate.
    #[must_use]
    pub fn has_all_permissions(&self, permissions: &[Permissions]) -> bool {
        permissions.iter().all(|p| self.has_permission(*p))
    }

    /// The full granted set for the current role; empty when signed out.
    #[must_use]
    pub const fn permissions(&self) -> Permissions {
        self.granted
    }

    /// Require a permission, for handler guards.
    ///
    /// Returns `Ok(())` if the permission is granted, `NotSignedIn` for a
    /// signed-out visitor, and `MissingPermission` otherwise.
    pub fn require_permission(&self, permission: Permissions) -> AccessResult<()> {
        if self.subject.is_none() {
            return Err(AccessError::NotSignedIn);
        }
        if self.granted.has(permission) {
            Ok(())
        } else {
            debug!(required = ?permission, granted = ?self.granted, "permission denied");
            Err(AccessError::MissingPermission(permission))
        }
    }

    // === Derived Checks ===
    //
    // Named shorthands for common UI queries. Each is a fixed combination
    // of the primitives above and carries no state of its own.

    /// Whether the user can add, edit, or remove employee records.
    #[must_use]
    pub fn can_manage_employees(&self) -> bool {
        self.has_any_permission(&[
            Permissions::EMPLOYEES_CREATE,
            Permissions::EMPLOYEES_EDIT,
            Permissions::EMPLOYEES_DELETE,
        ])
    }

    /// Whether the user can run and edit payroll.
    #[must_use]
    pub fn can_manage_payroll(&self) -> bool {
        self.has_permission(Permissions::PAYROLL_MANAGE)
    }

    /// Whether the user can approve or reject leave requests.
    #[must_use]
    pub fn can_approve_leaves(&self) -> bool {
        self.has_permission(Permissions::LEAVES_APPROVE)
    }

    /// Whether the user can resolve support tickets.
    #[must_use]
    pub fn can_resolve_tickets(&self) -> bool {
        self.has_permission(Permissions::TICKETS_RESOLVE)
    }

    /// Whether the user can open the reports dashboard.
    #[must_use]
    pub fn can_view_reports(&self) -> bool {
        self.has_permission(Permissions::REPORTS_VIEW)
    }

    /// Whether the user holds any platform administration permission.
    #[must_use]
    pub fn can_administer_platform(&self) -> bool {
        self.has_any_permission(&[
            Permissions::COMPANIES_MANAGE,
            Permissions::USERS_MANAGE,
            Permissions::SETTINGS_MANAGE,
        ])
    }
}

impl Default for AccessContext {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl From<Subject> for AccessContext {
    fn from(subject: Subject) -> Self {
        Self::for_subject(subject)
    }
}

/// Sessions hand the gate an `Option<Subject>`; `None` is a signed-out
/// visitor.
impl From<Option<Subject>> for AccessContext {
    fn from(subject: Option<Subject>) -> Self {
        subject.map_or_else(Self::anonymous, Self::for_subject)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::role::Role;

    fn context_for(role: &str) -> AccessContext {
        AccessContext::for_subject(Subject::new(Uuid::new_v4(), role))
    }

    // === Signed-In Queries ===

    #[test]
    fn test_has_permission_is_set_membership() {
        let ctx = context_for("employee");

        for (permission, _) in Permissions::tag_table() {
            assert_eq!(
                ctx.has_permission(*permission),
                ctx.permissions().has(*permission)
            );
        }
    }

    #[test]
    fn test_employee_can_request_leave_but_not_run_payroll() {
        let ctx = context_for("employee");

        assert!(ctx.has_permission(Permissions::LEAVES_REQUEST));
        assert!(!ctx.has_permission(Permissions::PAYROLL_MANAGE));
    }

    #[test]
    fn test_consultant_engagement_checks() {
        let ctx = context_for("consultant");

        assert!(ctx.has_all_permissions(&[
            Permissions::DOCUMENTS_READ,
            Permissions::TASKS_READ,
        ]));
        assert!(!ctx.has_all_permissions(&[
            Permissions::DOCUMENTS_READ,
            Permissions::PAYROLL_MANAGE,
        ]));
    }

    #[test]
    fn test_granted_set_matches_role_mapping() {
        for role in Role::all() {
            let ctx = context_for(role.as_str());
            assert_eq!(ctx.permissions(), role.permissions());
        }
    }

    // === Vacuous Quantification ===

    #[test]
    fn test_empty_any_is_false_and_empty_all_is_true_for_every_role() {
        for role in Role::all() {
            let ctx = context_for(role.as_str());
            assert!(!ctx.has_any_permission(&[]));
            assert!(ctx.has_all_permissions(&[]));
        }

        let visitor = AccessContext::anonymous();
        assert!(!visitor.has_any_permission(&[]));
        assert!(visitor.has_all_permissions(&[]));
    }

    // === Fail-Closed ===

    #[test]
    fn test_anonymous_context_denies_every_permission() {
        let visitor = AccessContext::anonymous();

        assert!(!visitor.is_signed_in());
        assert!(visitor.permissions().is_empty());
        for (permission, _) in Permissions::tag_table() {
            assert!(!visitor.has_permission(*permission));
        }
    }

    #[test]
    fn test_anonymous_denial_is_about_presence_not_role_lookup() {
        // chat.read is in the `user` role's set, yet a signed-out visitor
        // is still denied.
        assert!(Role::User.permissions().has(Permissions::CHAT_READ));
        assert!(!AccessContext::anonymous().has_any_permission(&[Permissions::CHAT_READ]));
    }

    #[test]
    fn test_unrecognized_role_degrades_to_empty_grant() {
        let ctx = context_for("superuser");

        assert!(ctx.is_signed_in());
        assert!(ctx.permissions().is_empty());
        for (permission, _) in Permissions::tag_table() {
            assert!(!ctx.has_permission(*permission));
        }
    }

    #[test]
    fn test_default_context_is_anonymous() {
        let ctx = AccessContext::default();
        assert!(!ctx.is_signed_in());
        assert!(ctx.permissions().is_empty());
    }

    #[test]
    fn test_from_optional_subject() {
        let signed_in = AccessContext::from(Some(Subject::new(Uuid::new_v4(), "company")));
        assert!(signed_in.can_manage_payroll());

        let signed_out = AccessContext::from(None);
        assert!(!signed_out.is_signed_in());
    }

    // === Guards ===

    #[test]
    fn test_require_permission_for_signed_out_visitor() {
        let visitor = AccessContext::anonymous();
        assert_eq!(
            visitor.require_permission(Permissions::CHAT_READ),
            Err(AccessError::NotSignedIn)
        );
    }

    #[test]
    fn test_require_permission_granted_and_denied() {
        let ctx = context_for("company");

        assert!(ctx.require_permission(Permissions::PAYROLL_MANAGE).is_ok());
        assert_eq!(
            ctx.require_permission(Permissions::SETTINGS_MANAGE),
            Err(AccessError::MissingPermission(Permissions::SETTINGS_MANAGE))
        );
    }

    // === Derived Checks ===

    #[test]
    fn test_derived_checks_track_role_presets() {
        let company = context_for("company");
        assert!(company.can_manage_employees());
        assert!(company.can_manage_payroll());
        assert!(company.can_approve_leaves());
        assert!(company.can_view_reports());
        assert!(!company.can_resolve_tickets());
        assert!(!company.can_administer_platform());

        let consultant = context_for("consultant");
        assert!(consultant.can_resolve_tickets());
        assert!(!consultant.can_manage_employees());
        assert!(!consultant.can_manage_payroll());

        let admin = context_for("admin");
        assert!(admin.can_administer_platform());
        assert!(admin.can_manage_employees());

        let visitor = AccessContext::anonymous();
        assert!(!visitor.can_manage_employees());
        assert!(!visitor.can_administer_platform());
    }
}
