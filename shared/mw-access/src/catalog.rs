//! Platform permissions using bitflags.
//!
//! Permissions are organized into feature areas:
//! - Employees (bits 0-3): Employee record permissions
//! - Payroll (bits 4-5): Payroll run and payslip permissions
//! - Leaves (bits 6-8): Leave request and approval permissions
//! - Attendance (bits 9-10): Attendance tracking permissions
//! - Documents (bits 11-12): Document library permissions
//! - Tasks (bits 13-14): Task board permissions
//! - Tickets (bits 15-17): Support ticket permissions
//! - Consulting (bits 18-20): Consultation booking permissions
//! - Chat (bits 21-22): Messaging permissions
//! - Reports (bits 23-24): Reporting permissions
//! - Billing (bits 25-26): Subscription and invoice permissions
//! - Platform (bits 27-29): Platform administration permissions
//!
//! Each flag has a canonical dotted tag (`employees.create`,
//! `payroll.manage`, ...) matching what the web clients and session
//! payloads use on the wire.

use bitflags::bitflags;

bitflags! {
    /// Platform permissions represented as a 64-bit bitfield.
    ///
    /// A value is a *set* of permissions; single flags double as one-element
    /// sets, so the same type serves both the catalog and per-role grants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Permissions: u64 {
        // === Employees (bits 0-3) ===
        /// Permission to view employee records
        const EMPLOYEES_VIEW       = 1 << 0;
        /// Permission to add employees to a company
        const EMPLOYEES_CREATE     = 1 << 1;
        /// Permission to edit employee records
        const EMPLOYEES_EDIT       = 1 << 2;
        /// Permission to remove employees from a company
        const EMPLOYEES_DELETE     = 1 << 3;

        // === Payroll (bits 4-5) ===
        /// Permission to view payslips and payroll history
        const PAYROLL_VIEW         = 1 << 4;
        /// Permission to run, edit, and close payroll
        const PAYROLL_MANAGE       = 1 << 5;

        // === Leaves (bits 6-8) ===
        /// Permission to view leave balances and requests
        const LEAVES_VIEW          = 1 << 6;
        /// Permission to submit leave requests
        const LEAVES_REQUEST       = 1 << 7;
        /// Permission to approve or reject leave requests
        const LEAVES_APPROVE       = 1 << 8;

        // === Attendance (bits 9-10) ===
        /// Permission to view attendance records
        const ATTENDANCE_VIEW      = 1 << 9;
        /// Permission to correct and manage attendance records
        const ATTENDANCE_MANAGE    = 1 << 10;

        // === Documents (bits 11-12) ===
        /// Permission to read shared documents
        const DOCUMENTS_READ       = 1 << 11;
        /// Permission to upload, replace, and delete documents
        const DOCUMENTS_MANAGE     = 1 << 12;

        // === Tasks (bits 13-14) ===
        /// Permission to read assigned tasks
        const TASKS_READ           = 1 << 13;
        /// Permission to create, assign, and close tasks
        const TASKS_MANAGE         = 1 << 14;

        // === Tickets (bits 15-17) ===
        /// Permission to open support tickets
        const TICKETS_CREATE       = 1 << 15;
        /// Permission to view support tickets
        const TICKETS_VIEW         = 1 << 16;
        /// Permission to resolve and close support tickets
        const TICKETS_RESOLVE      = 1 << 17;

        // === Consulting (bits 18-20) ===
        /// Permission to book consultation sessions
        const CONSULTATIONS_BOOK   = 1 << 18;
        /// Permission to view consultation sessions
        const CONSULTATIONS_VIEW   = 1 << 19;
        /// Permission to manage consultation offerings and schedules
        const CONSULTATIONS_MANAGE = 1 << 20;

        // === Chat (bits 21-22) ===
        /// Permission to read chat conversations
        const CHAT_READ            = 1 << 21;
        /// Permission to send chat messages
        const CHAT_SEND            = 1 << 22;

        // === Reports (bits 23-24) ===
        /// Permission to view HR and payroll reports
        const REPORTS_VIEW         = 1 << 23;
        /// Permission to export reports
        const REPORTS_EXPORT       = 1 << 24;

        // === Billing (bits 25-26) ===
        /// Permission to view subscription and invoices
        const BILLING_VIEW         = 1 << 25;
        /// Permission to change plans and payment methods
        const BILLING_MANAGE       = 1 << 26;

        // === Platform (bits 27-29) ===
        /// Permission to manage companies across the platform
        const COMPANIES_MANAGE     = 1 << 27;
        /// Permission to manage user accounts across the platform
        const USERS_MANAGE         = 1 << 28;
        /// Permission to change platform-wide settings
        const SETTINGS_MANAGE      = 1 << 29;
    }
}

/// Canonical dotted tag for every permission flag, in bit order.
const TAG_TABLE: &[(Permissions, &str)] = &[
    (Permissions::EMPLOYEES_VIEW, "employees.view"),
    (Permissions::EMPLOYEES_CREATE, "employees.create"),
    (Permissions::EMPLOYEES_EDIT, "employees.edit"),
    (Permissions::EMPLOYEES_DELETE, "employees.delete"),
    (Permissions::PAYROLL_VIEW, "payroll.view"),
    (Permissions::PAYROLL_MANAGE, "payroll.manage"),
    (Permissions::LEAVES_VIEW, "leaves.view"),
    (Permissions::LEAVES_REQUEST, "leaves.request"),
    (Permissions::LEAVES_APPROVE, "leaves.approve"),
    (Permissions::ATTENDANCE_VIEW, "attendance.view"),
    (Permissions::ATTENDANCE_MANAGE, "attendance.manage"),
    (Permissions::DOCUMENTS_READ, "documents.read"),
    (Permissions::DOCUMENTS_MANAGE, "documents.manage"),
    (Permissions::TASKS_READ, "tasks.read"),
    (Permissions::TASKS_MANAGE, "tasks.manage"),
    (Permissions::TICKETS_CREATE, "tickets.create"),
    (Permissions::TICKETS_VIEW, "tickets.view"),
    (Permissions::TICKETS_RESOLVE, "tickets.resolve"),
    (Permissions::CONSULTATIONS_BOOK, "consultations.book"),
    (Permissions::CONSULTATIONS_VIEW, "consultations.view"),
    (Permissions::CONSULTATIONS_MANAGE, "consultations.manage"),
    (Permissions::CHAT_READ, "chat.read"),
    (Permissions::CHAT_SEND, "chat.send"),
    (Permissions::REPORTS_VIEW, "reports.view"),
    (Permissions::REPORTS_EXPORT, "reports.export"),
    (Permissions::BILLING_VIEW, "billing.view"),
    (Permissions::BILLING_MANAGE, "billing.manage"),
    (Permissions::COMPANIES_MANAGE, "companies.manage"),
    (Permissions::USERS_MANAGE, "users.manage"),
    (Permissions::SETTINGS_MANAGE, "settings.manage"),
];

impl Permissions {
    // === Preset Combinations ===

    /// Default permissions for the `user` role.
    ///
    /// A signed-up individual without a company seat: chat, consulting
    /// booking, and support tickets.
    pub const USER_DEFAULT: Self = Self::CHAT_READ
        .union(Self::CHAT_SEND)
        .union(Self::CONSULTATIONS_BOOK)
        .union(Self::CONSULTATIONS_VIEW)
        .union(Self::TICKETS_CREATE)
        .union(Self::TICKETS_VIEW);

    /// Default permissions for the `employee` role.
    ///
    /// Extends `user` with self-service HR: own payslips, leave requests,
    /// attendance, shared documents, and assigned tasks.
    pub const EMPLOYEE_DEFAULT: Self = Self::USER_DEFAULT
        .union(Self::PAYROLL_VIEW)
        .union(Self::LEAVES_VIEW)
        .union(Self::LEAVES_REQUEST)
        .union(Self::ATTENDANCE_VIEW)
        .union(Self::DOCUMENTS_READ)
        .union(Self::TASKS_READ);

    /// Default permissions for the `consultant` role.
    ///
    /// Consultants work client engagements: documents, tasks, consultation
    /// schedules, chat, and resolving the tickets routed to them.
    pub const CONSULTANT_DEFAULT: Self = Self::CHAT_READ
        .union(Self::CHAT_SEND)
        .union(Self::DOCUMENTS_READ)
        .union(Self::TASKS_READ)
        .union(Self::TASKS_MANAGE)
        .union(Self::TICKETS_VIEW)
        .union(Self::TICKETS_RESOLVE)
        .union(Self::CONSULTATIONS_VIEW)
        .union(Self::CONSULTATIONS_MANAGE);

    /// Default permissions for the `company` role.
    ///
    /// Company dashboard owners manage their workforce end to end, short
    /// of platform administration.
    pub const COMPANY_DEFAULT: Self = Self::EMPLOYEES_VIEW
        .union(Self::EMPLOYEES_CREATE)
        .union(Self::EMPLOYEES_EDIT)
        .union(Self::EMPLOYEES_DELETE)
        .union(Self::PAYROLL_VIEW)
        .union(Self::PAYROLL_MANAGE)
        .union(Self::LEAVES_VIEW)
        .union(Self::LEAVES_APPROVE)
        .union(Self::ATTENDANCE_VIEW)
        .union(Self::ATTENDANCE_MANAGE)
        .union(Self::DOCUMENTS_READ)
        .union(Self::DOCUMENTS_MANAGE)
        .union(Self::TASKS_READ)
        .union(Self::TASKS_MANAGE)
        .union(Self::TICKETS_CREATE)
        .union(Self::TICKETS_VIEW)
        .union(Self::CONSULTATIONS_BOOK)
        .union(Self::CONSULTATIONS_VIEW)
        .union(Self::CHAT_READ)
        .union(Self::CHAT_SEND)
        .union(Self::REPORTS_VIEW)
        .union(Self::REPORTS_EXPORT)
        .union(Self::BILLING_VIEW)
        .union(Self::BILLING_MANAGE);

    /// Permissions reserved for the `admin` role.
    ///
    /// No tenant-facing role may ever hold these. Used for validation when
    /// building or reviewing role presets.
    pub const ADMIN_RESERVED: Self = Self::COMPANIES_MANAGE
        .union(Self::USERS_MANAGE)
        .union(Self::SETTINGS_MANAGE);

    // === Permission Checking ===

    /// Check if this permission set includes the specified permission(s).
    ///
    /// # Examples
    ///
    /// ```
    /// use mw_access::Permissions;
    ///
    /// let perms = Permissions::CHAT_READ | Permissions::CHAT_SEND;
    /// assert!(perms.has(Permissions::CHAT_READ));
    /// assert!(!perms.has(Permissions::PAYROLL_MANAGE));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Self) -> bool {
        self.contains(permission)
    }

    /// Validate that these permissions are safe for a tenant-facing role.
    ///
    /// Returns `true` if none of the admin-reserved permissions are present.
    #[must_use]
    pub const fn validate_for_tenant(self) -> bool {
        !self.intersects(Self::ADMIN_RESERVED)
    }

    // === Wire Tags ===

    /// Resolve a dotted wire tag (`"employees.create"`) to its flag.
    ///
    /// Unknown tags resolve to `None`; callers treat that as "not granted".
    ///
    /// # Examples
    ///
    /// ```
    /// use mw_access::Permissions;
    ///
    /// assert_eq!(
    ///     Permissions::from_tag("leaves.request"),
    ///     Some(Permissions::LEAVES_REQUEST)
    /// );
    /// assert_eq!(Permissions::from_tag("leaves.teleport"), None);
    /// ```
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        TAG_TABLE
            .iter()
            .find(|(_, candidate)| *candidate == tag)
            .map(|(permission, _)| *permission)
    }

    /// Decompose a permission set into its dotted wire tags, in bit order.
    #[must_use]
    pub fn tags(self) -> Vec<&'static str> {
        TAG_TABLE
            .iter()
            .filter(|(permission, _)| self.contains(*permission))
            .map(|(_, tag)| *tag)
            .collect()
    }

    /// The full closed enumeration of (flag, tag) pairs.
    ///
    /// Useful for iteration and validation.
    #[must_use]
    pub const fn tag_table() -> &'static [(Self, &'static str)] {
        TAG_TABLE
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::empty()
    }
}
