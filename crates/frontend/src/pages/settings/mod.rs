//! Settings hub and subsections

mod catalogs;
mod general;
mod notifications;
mod users;

pub use catalogs::{
    CategoriesPage, DepartmentsPage, LocationsPage, OrganizationsPage, StatusesPage,
};
pub use general::GeneralSettingsPage;
pub use notifications::NotificationSettingsPage;
pub use users::UsersPage;

use crate::permissions::use_permissions;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let permissions = use_permissions();

    let tile = |route: Route, label: &str, description: &str| {
        html! {
            <Link<Route> to={route} classes="block bg-white rounded-lg shadow p-5 hover:shadow-md">
                <p class="font-semibold text-gray-900">{label.to_string()}</p>
                <p class="text-sm text-gray-500 mt-1">{description.to_string()}</p>
            </Link<Route>>
        }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"Settings"}</h1>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {tile(Route::SettingsCategories, "Asset Categories", "Group assets by kind")}
                {tile(Route::SettingsStatuses, "Asset Statuses", "Lifecycle labels and colors")}
                {tile(Route::SettingsLocations, "Locations", "Offices, floors, warehouses")}
                {tile(Route::SettingsOrganizations, "Organizations", "Corporate structure")}
                {tile(Route::SettingsDepartments, "Departments", "Teams and divisions")}
                {tile(Route::SettingsNotifications, "Notifications", "Your delivery preferences")}
                if permissions.is_admin {
                    {tile(Route::SettingsUsers, "User Management", "Accounts, roles, lockouts")}
                }
                if permissions.can_view_tenant_settings {
                    {tile(Route::SettingsGeneral, "General Settings", "Tenant-wide behavior")}
                }
            </div>
        </div>
    }
}
