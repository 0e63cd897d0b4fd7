//! Single-employee view: profile, assigned assets, software seats, history

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::employees::{Employee, EmployeeAsset};
use assetra_client::api::software::SoftwareAssignment;
use assetra_client::api::transactions::Transaction;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmployeeDetailProps {
    pub id: String,
}

#[function_component(EmployeeDetailPage)]
pub fn employee_detail_page(props: &EmployeeDetailProps) -> Html {
    let toasts = use_toast();
    let employee = use_state(|| Option::<Employee>::None);
    let assets = use_state(Vec::<EmployeeAsset>::new);
    let seats = use_state(Vec::<SoftwareAssignment>::new);
    let history = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    {
        let employee = employee.clone();
        let assets = assets.clone();
        let seats = seats.clone();
        let history = history.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                match client.get_employee(&id).await {
                    Ok(record) => employee.set(Some(record)),
                    Err(error) => toasts.error(error.user_message()),
                }
                if let Ok(rows) = client.employee_assets(&id).await {
                    assets.set(rows);
                }
                if let Ok(rows) = client.employee_software(&id).await {
                    seats.set(rows);
                }
                if let Ok(rows) = client.employee_transactions(&id).await {
                    history.set(rows);
                }
                loading.set(false);
            });
        });
    }

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let Some(record) = &*employee else {
        return html! { <p class="text-gray-500">{"Employee not found."}</p> };
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold text-gray-900">{record.full_name()}</h1>
                    <p class="text-sm text-gray-500">
                        {record.job_title.clone().unwrap_or_default()}
                        {" · "}
                        {&record.email}
                    </p>
                </div>
                <Link<Route> to={Route::EditEmployee { id: record.id.clone() }}
                    classes="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-sm font-medium rounded-lg">
                    {"Edit"}
                </Link<Route>>
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">
                    {format!("Assets ({})", assets.len())}
                </h2>
                if assets.is_empty() {
                    <p class="text-sm text-gray-500">{"No assets assigned."}</p>
                } else {
                    <ul class="divide-y divide-gray-100">
                        {for assets.iter().map(|asset| html! {
                            <li class="py-2 text-sm text-gray-700 flex justify-between">
                                <span>{format!("{} ({})", asset.name, asset.category)}</span>
                                <span class="text-gray-400">{asset.assigned_at.clone().unwrap_or_default()}</span>
                            </li>
                        })}
                    </ul>
                }
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">
                    {format!("Software ({})", seats.len())}
                </h2>
                if seats.is_empty() {
                    <p class="text-sm text-gray-500">{"No software seats."}</p>
                } else {
                    <ul class="divide-y divide-gray-100">
                        {for seats.iter().map(|seat| html! {
                            <li class="py-2 text-sm text-gray-700 flex justify-between">
                                <span>
                                    {seat.software_license.as_ref().map(|license| license.name.clone()).unwrap_or_else(|| seat.software_license_id.clone())}
                                </span>
                                <span class="text-gray-400">{&seat.assigned_at}</span>
                            </li>
                        })}
                    </ul>
                }
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-3">{"History"}</h2>
                if history.is_empty() {
                    <p class="text-sm text-gray-500">{"No transactions recorded."}</p>
                } else {
                    <ul class="divide-y divide-gray-100">
                        {for history.iter().map(|row| html! {
                            <li class="py-2 text-sm text-gray-700 flex justify-between">
                                <span>{&row.transaction_type}</span>
                                <span class="text-gray-400">{&row.performed_at}</span>
                            </li>
                        })}
                    </ul>
                }
            </div>
        </div>
    }
}
