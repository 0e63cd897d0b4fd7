mod asset_detail;
mod asset_form;
mod assets;
mod auth;
mod dashboard;
mod employee_detail;
mod employee_form;
mod employees;
mod not_found;
mod settings;
mod software;
mod transactions;

pub use asset_detail::AssetDetailPage;
pub use asset_form::AssetFormPage;
pub use assets::AssetsPage;
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage, ResetPasswordPage};
pub use dashboard::DashboardPage;
pub use employee_detail::EmployeeDetailPage;
pub use employee_form::EmployeeFormPage;
pub use employees::EmployeesPage;
pub use not_found::NotFoundPage;
pub use settings::{
    CategoriesPage, DepartmentsPage, GeneralSettingsPage, LocationsPage,
    NotificationSettingsPage, OrganizationsPage, SettingsPage, StatusesPage, UsersPage,
};
pub use software::{SoftwareDetailPage, SoftwareFormPage, SoftwarePage};
pub use transactions::TransactionsPage;
