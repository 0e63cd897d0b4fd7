//! Role-shaped dashboard

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::session::{refresh_user, use_session};
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::dashboard::{
    AdminDashboard, Dashboard, DashboardResponse, EmployeeDashboard, ManagerDashboard,
};
use yew::prelude::*;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let session = use_session();
    let toasts = use_toast();
    let dashboard = use_state(|| Option::<DashboardResponse>::None);
    let loading = use_state(|| true);

    {
        let session = session.clone();
        let toasts = toasts.clone();
        let dashboard = dashboard.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Revalidate the identity alongside the first data fetch; a
                // stale session tears itself down here.
                refresh_user(&session).await;
                match api_client().dashboard().await {
                    Ok(response) => dashboard.set(Some(response)),
                    Err(error) => {
                        if !error.is_unauthorized() {
                            toasts.error(error.user_message());
                        }
                    }
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <LoadingSpinner text="Loading dashboard..." /> };
    }

    match &*dashboard {
        Some(response) => html! {
            <div class="space-y-6">
                <h1 class="text-2xl font-bold text-gray-900">{"Dashboard"}</h1>
                {match &response.data {
                    Dashboard::Admin(data) => admin_view(data),
                    Dashboard::Manager(data) => manager_view(data),
                    Dashboard::Employee(data) => employee_view(data),
                }}
            </div>
        },
        None => html! {
            <p class="text-gray-500">{"Dashboard data is unavailable right now."}</p>
        },
    }
}

fn stat_tile(label: &str, value: String) -> Html {
    html! {
        <div class="bg-white rounded-lg shadow p-4">
            <p class="text-sm text-gray-500">{label.to_string()}</p>
            <p class="text-2xl font-semibold text-gray-900">{value}</p>
        </div>
    }
}

fn admin_view(data: &AdminDashboard) -> Html {
    html! {
        <>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {stat_tile("Total assets", data.asset_inventory.total.to_string())}
                {stat_tile("Utilization", format!("{:.0}%", data.asset_inventory.utilization_rate))}
                {stat_tile("Warranties expiring", data.asset_inventory.warranty_expiring_soon.to_string())}
                {stat_tile("Active employees", data.employee_status.active.to_string())}
            </div>
            if !data.alerts.is_empty() {
                <div class="bg-white rounded-lg shadow p-4">
                    <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Alerts"}</h2>
                    <ul class="space-y-2">
                        {for data.alerts.iter().map(|alert| html! {
                            <li class="text-sm text-gray-700">
                                {format!("{} ({})", alert.message, alert.count)}
                            </li>
                        })}
                    </ul>
                </div>
            }
            <div class="bg-white rounded-lg shadow p-4">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Recent activity"}</h2>
                {activity_list(&data.recent_activity)}
            </div>
        </>
    }
}

fn manager_view(data: &ManagerDashboard) -> Html {
    html! {
        <>
            <p class="text-gray-600">{format!("{} — {}", data.manager.name, data.manager.department)}</p>
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {stat_tile("Team size", data.team_overview.team_size.to_string())}
                {stat_tile("Team assets", data.team_overview.total_assets.to_string())}
                {stat_tile("Assets / employee", format!("{:.1}", data.key_metrics.assets_per_employee))}
            </div>
            <div class="bg-white rounded-lg shadow p-4">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Assets by category"}</h2>
                <ul class="space-y-1">
                    {for data.asset_distribution.iter().map(|row| html! {
                        <li class="text-sm text-gray-700 flex justify-between">
                            <span>{&row.category}</span>
                            <span class="font-medium">{row.count}</span>
                        </li>
                    })}
                </ul>
            </div>
        </>
    }
}

fn employee_view(data: &EmployeeDashboard) -> Html {
    html! {
        <>
            <p class="text-gray-600">{format!("Welcome back, {}", data.employee.name)}</p>
            <div class="grid grid-cols-3 gap-4">
                {stat_tile("My assets", data.stats.total_assets.to_string())}
                {stat_tile("Active workflows", data.stats.active_workflows.to_string())}
                {stat_tile("Pending tasks", data.stats.pending_tasks.to_string())}
            </div>
            <div class="bg-white rounded-lg shadow p-4">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"My assets"}</h2>
                <ul class="space-y-1">
                    {for data.my_assets.iter().map(|asset| html! {
                        <li class="text-sm text-gray-700">
                            {format!("{} ({})", asset.name, asset.category)}
                        </li>
                    })}
                </ul>
            </div>
            <div class="bg-white rounded-lg shadow p-4">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"Recent activity"}</h2>
                {activity_list(&data.recent_activity)}
            </div>
        </>
    }
}

fn activity_list(rows: &[assetra_client::api::dashboard::ActivityRow]) -> Html {
    if rows.is_empty() {
        return html! { <p class="text-sm text-gray-500">{"No recent activity."}</p> };
    }
    html! {
        <ul class="divide-y divide-gray-100">
            {for rows.iter().map(|row| html! {
                <li class="py-2 text-sm text-gray-700 flex justify-between">
                    <span>
                        {row.transaction_type.clone()}
                        {row.asset_name.as_ref().map(|name| format!(" — {name}")).unwrap_or_default()}
                    </span>
                    <span class="text-gray-400">{&row.performed_at}</span>
                </li>
            })}
        </ul>
    }
}
