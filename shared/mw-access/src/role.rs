//! Platform roles and the static role-to-permission mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::Permissions;
use crate::error::AccessError;

/// Platform role.
///
/// Every signed-in user has exactly one role, supplied by the session
/// collaborator as a lowercase tag. The set is closed; the mapping to
/// permissions is fixed at compile time and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform operator with every permission.
    Admin,
    /// Company dashboard owner managing a workforce.
    Company,
    /// HR consultant working client engagements.
    Consultant,
    /// Employee of a company on the platform.
    Employee,
    /// Signed-up individual without a company seat.
    User,
}

impl Role {
    /// Resolve a lowercase role tag to a role.
    ///
    /// Returns `None` for anything outside the closed set. The permission
    /// gate turns that into the empty grant; boundaries that should reject
    /// outright use the strict [`FromStr`] impl instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use mw_access::Role;
    ///
    /// assert_eq!(Role::parse("employee"), Some(Role::Employee));
    /// assert_eq!(Role::parse("superuser"), None);
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "admin" => Some(Self::Admin),
            "company" => Some(Self::Company),
            "consultant" => Some(Self::Consultant),
            "employee" => Some(Self::Employee),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// Returns the lowercase tag used on the wire and in session payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Company => "company",
            Self::Consultant => "consultant",
            Self::Employee => "employee",
            Self::User => "user",
        }
    }

    /// Returns all roles as a slice.
    ///
    /// Useful for iteration and golden-table validation.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Admin,
            Self::Company,
            Self::Consultant,
            Self::Employee,
            Self::User,
        ]
    }

    /// The static permission set for this role.
    ///
    /// Total over the role set: every role has an entry, and `admin` holds
    /// every permission in the catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use mw_access::{Permissions, Role};
    ///
    /// assert!(Role::Employee.permissions().has(Permissions::LEAVES_REQUEST));
    /// assert!(!Role::Employee.permissions().has(Permissions::PAYROLL_MANAGE));
    /// ```
    #[must_use]
    pub const fn permissions(self) -> Permissions {
        match self {
            Self::Admin => Permissions::all(),
            Self::Company => Permissions::COMPANY_DEFAULT,
            Self::Consultant => Permissions::CONSULTANT_DEFAULT,
            Self::Employee => Permissions::EMPLOYEE_DEFAULT,
            Self::User => Permissions::USER_DEFAULT,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::parse(tag).ok_or_else(|| AccessError::UnknownRole(tag.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_role() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(*role));
        }
    }

    #[test]
    fn test_parse_is_exact_match_only() {
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(" admin"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_from_str_rejects_unknown_roles() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, AccessError::UnknownRole("superuser".to_owned()));
    }

    #[test]
    fn test_admin_permissions_superset_of_every_role() {
        let admin = Role::Admin.permissions();
        for role in Role::all() {
            assert!(
                admin.has(role.permissions()),
                "admin should cover {role} permissions"
            );
        }
    }

    #[test]
    fn test_only_admin_holds_reserved_permissions() {
        for role in Role::all() {
            let expected = matches!(role, Role::Admin);
            assert_eq!(
                !role.permissions().validate_for_tenant(),
                expected,
                "{role} reserved-permission check"
            );
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Role::Consultant).unwrap();
        assert_eq!(json, "\"consultant\"");

        let role: Role = serde_json::from_str("\"company\"").unwrap();
        assert_eq!(role, Role::Company);
    }

    #[test]
    fn test_display_matches_wire_tag() {
        assert_eq!(Role::Employee.to_string(), "employee");
    }
}
