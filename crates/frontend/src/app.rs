//! Application root: providers, router, global wiring

use crate::components::{Layout, RequireAuth, RequireGuest, ToastContainer};
use crate::config;
use crate::pages;
use crate::routes::Route;
use crate::session::{use_session, SessionAction, SessionProvider};
use crate::toast::ToastProvider;
use assetra_client::{clear_unauthorized_handler, set_unauthorized_handler};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <ToastProvider>
                    <AppShell />
                </ToastProvider>
            </SessionProvider>
        </BrowserRouter>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("shell renders inside the router");
    let route = use_route::<Route>();

    // The transport layer reports 401s as an event; the session layer owns
    // the teardown and the redirect.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            set_unauthorized_handler(move || {
                session.dispatch(SessionAction::LoggedOut);
                navigator.push(&Route::Login);
            });
            clear_unauthorized_handler
        });
    }

    // Title follows the route.
    use_effect_with(route.clone(), |route| {
        let title = match route {
            Some(route) => format!("{} - {}", route.title(), config::APP_TITLE),
            None => config::APP_TITLE.to_string(),
        };
        gloo::utils::document().set_title(&title);
    });

    html! {
        <>
            <Switch<Route> render={switch} />
            <ToastContainer />
        </>
    }
}

fn guest(route: Route, page: Html) -> Html {
    html! { <RequireGuest route={route}>{page}</RequireGuest> }
}

fn authed(route: Route, page: Html) -> Html {
    html! {
        <RequireAuth route={route}>
            <Layout>{page}</Layout>
        </RequireAuth>
    }
}

fn switch(route: Route) -> Html {
    match route.clone() {
        Route::Home => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => guest(route, html! { <pages::LoginPage /> }),
        Route::Register => guest(route, html! { <pages::RegisterPage /> }),
        Route::ForgotPassword => guest(route, html! { <pages::ForgotPasswordPage /> }),
        Route::ResetPassword { token } => {
            guest(route, html! { <pages::ResetPasswordPage {token} /> })
        }
        Route::Dashboard => authed(route, html! { <pages::DashboardPage /> }),
        Route::Assets => authed(route, html! { <pages::AssetsPage /> }),
        Route::AddAsset => authed(route, html! { <pages::AssetFormPage id={None::<String>} /> }),
        Route::ViewAsset { id } => authed(route, html! { <pages::AssetDetailPage {id} /> }),
        Route::EditAsset { id } => authed(route, html! { <pages::AssetFormPage id={Some(id)} /> }),
        Route::Employees => authed(route, html! { <pages::EmployeesPage /> }),
        Route::AddEmployee => {
            authed(route, html! { <pages::EmployeeFormPage id={None::<String>} /> })
        }
        Route::ViewEmployee { id } => authed(route, html! { <pages::EmployeeDetailPage {id} /> }),
        Route::EditEmployee { id } => {
            authed(route, html! { <pages::EmployeeFormPage id={Some(id)} /> })
        }
        Route::Software => authed(route, html! { <pages::SoftwarePage /> }),
        Route::AddSoftware => {
            authed(route, html! { <pages::SoftwareFormPage id={None::<String>} /> })
        }
        Route::ViewSoftware { id } => authed(route, html! { <pages::SoftwareDetailPage {id} /> }),
        Route::EditSoftware { id } => {
            authed(route, html! { <pages::SoftwareFormPage id={Some(id)} /> })
        }
        Route::Transactions => authed(route, html! { <pages::TransactionsPage /> }),
        Route::Settings => authed(route, html! { <pages::SettingsPage /> }),
        Route::SettingsCategories => authed(route, html! { <pages::CategoriesPage /> }),
        Route::SettingsStatuses => authed(route, html! { <pages::StatusesPage /> }),
        Route::SettingsLocations => authed(route, html! { <pages::LocationsPage /> }),
        Route::SettingsOrganizations => authed(route, html! { <pages::OrganizationsPage /> }),
        Route::SettingsDepartments => authed(route, html! { <pages::DepartmentsPage /> }),
        Route::SettingsUsers => authed(route, html! { <pages::UsersPage /> }),
        Route::SettingsGeneral => authed(route, html! { <pages::GeneralSettingsPage /> }),
        Route::SettingsNotifications => {
            authed(route, html! { <pages::NotificationSettingsPage /> })
        }
        Route::NotFound => html! { <pages::NotFoundPage /> },
    }
}
