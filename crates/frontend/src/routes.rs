//! Route table and navigation guards

use serde::{Deserialize, Serialize};
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password/:token")]
    ResetPassword { token: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/assets")]
    Assets,
    #[at("/assets/add")]
    AddAsset,
    #[at("/assets/:id")]
    ViewAsset { id: String },
    #[at("/assets/:id/edit")]
    EditAsset { id: String },
    #[at("/employees")]
    Employees,
    #[at("/employees/add")]
    AddEmployee,
    #[at("/employees/:id")]
    ViewEmployee { id: String },
    #[at("/employees/:id/edit")]
    EditEmployee { id: String },
    #[at("/software")]
    Software,
    #[at("/software/add")]
    AddSoftware,
    #[at("/software/:id")]
    ViewSoftware { id: String },
    #[at("/software/:id/edit")]
    EditSoftware { id: String },
    #[at("/transactions")]
    Transactions,
    #[at("/settings")]
    Settings,
    #[at("/settings/categories")]
    SettingsCategories,
    #[at("/settings/statuses")]
    SettingsStatuses,
    #[at("/settings/locations")]
    SettingsLocations,
    #[at("/settings/organizations")]
    SettingsOrganizations,
    #[at("/settings/departments")]
    SettingsDepartments,
    #[at("/settings/users")]
    SettingsUsers,
    #[at("/settings/general")]
    SettingsGeneral,
    #[at("/settings/notifications")]
    SettingsNotifications,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes that only render with an active session.
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Home
                | Self::Login
                | Self::Register
                | Self::ForgotPassword
                | Self::ResetPassword { .. }
                | Self::NotFound
        )
    }

    /// Routes reserved for anonymous visitors.
    pub fn requires_guest(&self) -> bool {
        matches!(
            self,
            Self::Login | Self::Register | Self::ForgotPassword | Self::ResetPassword { .. }
        )
    }

    /// Page title, prepended to the base window title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home | Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::ForgotPassword => "Forgot password",
            Self::ResetPassword { .. } => "Reset password",
            Self::Dashboard => "Dashboard",
            Self::Assets => "Assets",
            Self::AddAsset => "Add Asset",
            Self::ViewAsset { .. } => "View Asset",
            Self::EditAsset { .. } => "Edit Asset",
            Self::Employees => "Employees",
            Self::AddEmployee => "Add Employee",
            Self::ViewEmployee { .. } => "View Employee",
            Self::EditEmployee { .. } => "Edit Employee",
            Self::Software => "Software Licenses",
            Self::AddSoftware => "Add Software License",
            Self::ViewSoftware { .. } => "View License",
            Self::EditSoftware { .. } => "Edit License",
            Self::Transactions => "Transactions",
            Self::Settings => "Settings",
            Self::SettingsCategories => "Asset Categories",
            Self::SettingsStatuses => "Asset Statuses",
            Self::SettingsLocations => "Locations",
            Self::SettingsOrganizations => "Organizations",
            Self::SettingsDepartments => "Departments",
            Self::SettingsUsers => "User Management",
            Self::SettingsGeneral => "General Settings",
            Self::SettingsNotifications => "Notifications",
            Self::NotFound => "Not Found",
        }
    }
}

/// Query carried through the login redirect so the original destination
/// survives the round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectQuery {
    pub redirect: String,
}

/// What the guard decided for a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    /// Send to login, remembering where the visitor wanted to go.
    ToLogin { redirect: String },
    /// Authenticated visitors have no business on guest pages.
    ToDashboard,
}

/// Evaluate the guard rules for a navigation to `route` at `current_path`.
pub fn evaluate_guards(route: &Route, current_path: &str, authenticated: bool) -> GuardOutcome {
    if route.requires_auth() && !authenticated {
        GuardOutcome::ToLogin {
            redirect: current_path.to_string(),
        }
    } else if route.requires_guest() && authenticated {
        GuardOutcome::ToDashboard
    } else {
        GuardOutcome::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_route_without_session_redirects_to_login_with_return_path() {
        let outcome = evaluate_guards(&Route::Assets, "/assets", false);
        assert_eq!(
            outcome,
            GuardOutcome::ToLogin {
                redirect: "/assets".into()
            }
        );
    }

    #[test]
    fn protected_route_with_session_proceeds() {
        let outcome = evaluate_guards(&Route::Assets, "/assets", true);
        assert_eq!(outcome, GuardOutcome::Proceed);
    }

    #[test]
    fn guest_route_with_session_redirects_to_dashboard() {
        let outcome = evaluate_guards(&Route::Login, "/login", true);
        assert_eq!(outcome, GuardOutcome::ToDashboard);

        let outcome = evaluate_guards(
            &Route::ResetPassword {
                token: "tok".into(),
            },
            "/reset-password/tok",
            true,
        );
        assert_eq!(outcome, GuardOutcome::ToDashboard);
    }

    #[test]
    fn guest_route_without_session_proceeds() {
        let outcome = evaluate_guards(&Route::Register, "/register", false);
        assert_eq!(outcome, GuardOutcome::Proceed);
    }

    #[test]
    fn deep_links_keep_their_full_path() {
        let outcome = evaluate_guards(
            &Route::ViewAsset { id: "a-42".into() },
            "/assets/a-42",
            false,
        );
        assert_eq!(
            outcome,
            GuardOutcome::ToLogin {
                redirect: "/assets/a-42".into()
            }
        );
    }

    #[test]
    fn settings_subsections_require_auth() {
        assert!(Route::SettingsUsers.requires_auth());
        assert!(Route::SettingsGeneral.requires_auth());
        assert!(!Route::SettingsUsers.requires_guest());
    }
}
