//! Role-to-capability table
//!
//! The single shared permission lookup, consumed by both the presentation
//! layer and the request-handling layer. Two roles, static capability
//! sets, no inheritance.

use serde::{Deserialize, Serialize};

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Viewer,
}

/// A named permission granted to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Open the dashboard and apply location/date filters
    ViewDashboard,

    /// View the P&L analytics view
    ViewPnl,

    /// View the cash-flow analytics view
    ViewCashFlow,

    /// Export reports (Excel/CSV/PDF/JSON)
    ExportReports,

    /// Import data files
    ImportData,

    /// Dismiss and restore risk alerts
    DismissAlerts,

    /// Manage user accounts and roles
    ManageUsers,
}

/// Read-and-export subset granted to viewers.
const VIEWER_CAPABILITIES: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewPnl,
    Capability::ViewCashFlow,
    Capability::ExportReports,
];

/// Admins hold every capability.
const ADMIN_CAPABILITIES: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewPnl,
    Capability::ViewCashFlow,
    Capability::ExportReports,
    Capability::ImportData,
    Capability::DismissAlerts,
    Capability::ManageUsers,
];

/// Capability set for a role.
pub fn capabilities(role: Role) -> &'static [Capability] {
    match role {
        Role::Admin => ADMIN_CAPABILITIES,
        Role::Viewer => VIEWER_CAPABILITIES,
    }
}

/// Check a single capability for a role.
///
/// # Example
/// ```
/// use risk_alert_core_rs::{has_capability, Capability, Role};
///
/// assert!(has_capability(Role::Admin, Capability::ManageUsers));
/// assert!(!has_capability(Role::Viewer, Capability::ImportData));
/// ```
pub fn has_capability(role: Role, capability: Capability) -> bool {
    capabilities(role).contains(&capability)
}
