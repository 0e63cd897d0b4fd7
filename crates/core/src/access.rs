//! Role-derived capability checks
//!
//! All checks are pure derivations from the role value. Nothing here is
//! cached or persisted; callers recompute on every read so flags track the
//! live session.

use crate::types::Role;

impl Role {
    /// `super_admin` or `admin`.
    pub fn is_admin(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// `super_admin`, `admin`, or `manager`.
    pub fn is_manager_or_higher(self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin | Self::Manager)
    }

    /// Membership test against an arbitrary role set.
    pub fn is_one_of(self, roles: &[Role]) -> bool {
        roles.contains(&self)
    }
}

/// Capability flags for the current session, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub is_admin: bool,
    pub is_manager_or_higher: bool,
    pub can_view_tenant_settings: bool,
    pub can_update_tenant_settings: bool,
    pub can_view_notification_preferences: bool,
    pub can_update_notification_preferences: bool,
}

impl Capabilities {
    /// Derive the capability set from an optional role.
    ///
    /// `None` (anonymous session) yields no capabilities at all.
    pub fn for_role(role: Option<Role>) -> Self {
        let Some(role) = role else {
            return Self::default();
        };
        let is_admin = role.is_admin();
        Self {
            is_admin,
            is_manager_or_higher: role.is_manager_or_higher(),
            // Tenant settings are admin-only; preferences belong to any
            // authenticated user.
            can_view_tenant_settings: is_admin,
            can_update_tenant_settings: is_admin,
            can_view_notification_preferences: true,
            can_update_notification_preferences: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 5] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Manager,
        Role::Employee,
        Role::Viewer,
    ];

    #[test]
    fn is_admin_holds_exactly_for_super_admin_and_admin() {
        for role in ALL_ROLES {
            let expected = matches!(role, Role::SuperAdmin | Role::Admin);
            assert_eq!(role.is_admin(), expected, "role {role}");
        }
    }

    #[test]
    fn manager_or_higher_includes_manager() {
        assert!(Role::Manager.is_manager_or_higher());
        assert!(Role::Admin.is_manager_or_higher());
        assert!(!Role::Employee.is_manager_or_higher());
        assert!(!Role::Viewer.is_manager_or_higher());
    }

    #[test]
    fn anonymous_session_has_no_capabilities() {
        assert_eq!(Capabilities::for_role(None), Capabilities::default());
    }

    #[test]
    fn tenant_settings_follow_admin_flag() {
        let caps = Capabilities::for_role(Some(Role::Manager));
        assert!(!caps.can_view_tenant_settings);
        assert!(caps.can_view_notification_preferences);

        let caps = Capabilities::for_role(Some(Role::Admin));
        assert!(caps.can_view_tenant_settings);
        assert!(caps.can_update_tenant_settings);
    }
}
