//! Software license pages: list, detail with seat management, form

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::software::{
    AssignSeatRequest, LicenseStats, SoftwareAssignment, SoftwareFilters, SoftwareLicense,
    SoftwareLicenseInput,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SoftwarePage)]
pub fn software_page() -> Html {
    let toasts = use_toast();
    let licenses = use_state(Vec::<SoftwareLicense>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);

    {
        let licenses = licenses.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let filters = SoftwareFilters {
                    per_page: Some(50),
                    ..SoftwareFilters::default()
                };
                match api_client().list_software(&filters).await {
                    Ok(page) => licenses.set(page.data),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_delete = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_software(&id).await {
                    Ok(()) => {
                        toasts.success("License deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Software Licenses"}</h1>
                <Link<Route> to={Route::AddSoftware}
                    classes="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white text-sm font-medium rounded-lg">
                    {"Add license"}
                </Link<Route>>
            </div>

            if *loading {
                <LoadingSpinner />
            } else if licenses.is_empty() {
                <p class="text-gray-500 py-8 text-center">{"No licenses yet."}</p>
            } else {
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Vendor"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Seats"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Expires"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {for licenses.iter().map(|license| {
                                let id = license.id.clone();
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };
                                let seats = match license.used_seats {
                                    Some(used) => format!("{used}/{}", license.total_seats),
                                    None => license.total_seats.to_string(),
                                };
                                html! {
                                    <tr key={license.id.clone()}>
                                        <td class="px-6 py-3 text-sm font-medium text-gray-900">
                                            <Link<Route> to={Route::ViewSoftware { id: id.clone() }} classes="hover:underline">
                                                {&license.name}
                                            </Link<Route>>
                                        </td>
                                        <td class="px-6 py-3 text-sm text-gray-600">{&license.vendor}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">{seats}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">
                                            {license.expiration_date.clone().unwrap_or_default()}
                                        </td>
                                        <td class="px-6 py-3 text-sm text-right space-x-3">
                                            <Link<Route> to={Route::EditSoftware { id: id.clone() }} classes="text-blue-600 hover:underline">
                                                {"Edit"}
                                            </Link<Route>>
                                            <button onclick={delete} class="text-red-600 hover:underline">{"Delete"}</button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoftwareDetailProps {
    pub id: String,
}

#[function_component(SoftwareDetailPage)]
pub fn software_detail_page(props: &SoftwareDetailProps) -> Html {
    let toasts = use_toast();
    let license = use_state(|| Option::<SoftwareLicense>::None);
    let stats = use_state(|| Option::<LicenseStats>::None);
    let assignments = use_state(Vec::<SoftwareAssignment>::new);
    let loading = use_state(|| true);
    let assign_employee = use_state(String::new);
    let reload = use_state(|| 0u32);

    {
        let license = license.clone();
        let stats = stats.clone();
        let assignments = assignments.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with((props.id.clone(), *reload), move |(id, _)| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                match client.get_software(&id).await {
                    Ok(record) => license.set(Some(record)),
                    Err(error) => toasts.error(error.user_message()),
                }
                if let Ok(summary) = client.software_stats(&id).await {
                    stats.set(Some(summary));
                }
                if let Ok(rows) = client.software_assignments(&id).await {
                    assignments.set(rows);
                }
                loading.set(false);
            });
        });
    }

    let on_assign = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let assign_employee = assign_employee.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let employee_id = (*assign_employee).clone();
            if employee_id.is_empty() {
                return;
            }
            let toasts = toasts.clone();
            let id = id.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let request = AssignSeatRequest {
                    employee_id,
                    assigned_at: None,
                    status: None,
                };
                match api_client().assign_software(&id, &request).await {
                    Ok(_) => {
                        toasts.success("Seat assigned.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let on_revoke = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let reload = reload.clone();
        Callback::from(move |assignment_id: String| {
            let toasts = toasts.clone();
            let id = id.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().revoke_software(&id, &assignment_id).await {
                    Ok(()) => {
                        toasts.success("Seat revoked.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let Some(record) = &*license else {
        return html! { <p class="text-gray-500">{"License not found."}</p> };
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{&record.name}</h1>
                <Link<Route> to={Route::EditSoftware { id: record.id.clone() }}
                    classes="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-sm font-medium rounded-lg">
                    {"Edit"}
                </Link<Route>>
            </div>

            if let Some(summary) = &*stats {
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <div class="bg-white rounded-lg shadow p-4">
                        <p class="text-sm text-gray-500">{"Total seats"}</p>
                        <p class="text-2xl font-semibold text-gray-900">{summary.total_seats}</p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-4">
                        <p class="text-sm text-gray-500">{"Used"}</p>
                        <p class="text-2xl font-semibold text-gray-900">{summary.used_seats}</p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-4">
                        <p class="text-sm text-gray-500">{"Available"}</p>
                        <p class="text-2xl font-semibold text-gray-900">{summary.available_seats}</p>
                    </div>
                    <div class="bg-white rounded-lg shadow p-4">
                        <p class="text-sm text-gray-500">{"Utilization"}</p>
                        <p class="text-2xl font-semibold text-gray-900">{format!("{:.0}%", summary.utilization_rate)}</p>
                    </div>
                </div>
            }

            <div class="bg-white rounded-lg shadow p-6 space-y-4">
                <h2 class="text-lg font-semibold text-gray-900">{"Assignments"}</h2>
                <form onsubmit={on_assign} class="flex gap-2">
                    <input
                        placeholder="Employee id"
                        class="px-3 py-2 border border-gray-300 rounded-md text-sm"
                        value={(*assign_employee).clone()}
                        oninput={{
                            let assign_employee = assign_employee.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                assign_employee.set(input.value());
                            })
                        }}
                    />
                    <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">
                        {"Assign seat"}
                    </button>
                </form>
                if assignments.is_empty() {
                    <p class="text-sm text-gray-500">{"No seats assigned."}</p>
                } else {
                    <ul class="divide-y divide-gray-100">
                        {for assignments.iter().map(|assignment| {
                            let revoke = {
                                let on_revoke = on_revoke.clone();
                                let assignment_id = assignment.id.clone();
                                Callback::from(move |_| on_revoke.emit(assignment_id.clone()))
                            };
                            let holder = assignment
                                .employee
                                .as_ref()
                                .map(|employee| format!("{} {}", employee.first_name, employee.last_name))
                                .unwrap_or_else(|| assignment.employee_id.clone());
                            html! {
                                <li class="py-2 text-sm text-gray-700 flex items-center justify-between">
                                    <span>{holder}</span>
                                    <button onclick={revoke} class="text-red-600 hover:underline">{"Revoke"}</button>
                                </li>
                            }
                        })}
                    </ul>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SoftwareFormProps {
    pub id: Option<String>,
}

#[function_component(SoftwareFormPage)]
pub fn software_form_page(props: &SoftwareFormProps) -> Html {
    let toasts = use_toast();
    let navigator = use_navigator().expect("page renders inside the router");

    let name = use_state(String::new);
    let vendor = use_state(String::new);
    let total_seats = use_state(|| "1".to_string());
    let expiration = use_state(String::new);
    let saving = use_state(|| false);

    {
        let name = name.clone();
        let vendor = vendor.clone();
        let total_seats = total_seats.clone();
        let expiration = expiration.clone();
        let toasts = toasts.clone();
        use_effect_with(props.id.clone(), move |id| {
            let Some(id) = id.clone() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().get_software(&id).await {
                    Ok(license) => {
                        name.set(license.name);
                        vendor.set(license.vendor);
                        total_seats.set(license.total_seats.to_string());
                        expiration.set(license.expiration_date.unwrap_or_default());
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_submit = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let name = name.clone();
        let vendor = vendor.clone();
        let total_seats = total_seats.clone();
        let expiration = expiration.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);

            let input = SoftwareLicenseInput {
                name: Some((*name).clone()),
                vendor: Some((*vendor).clone()),
                total_seats: total_seats.parse().ok(),
                expiration_date: Some((*expiration).clone()).filter(|value| !value.is_empty()),
                status: Some("active".to_string()),
                ..SoftwareLicenseInput::default()
            };

            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                let result = match &id {
                    Some(id) => client.update_software(id, &input).await,
                    None => client.create_software(&input).await,
                };
                match result {
                    Ok(license) => {
                        toasts.success(if id.is_some() { "License updated." } else { "License created." });
                        navigator.push(&Route::ViewSoftware { id: license.id });
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="max-w-xl space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">
                {if props.id.is_some() { "Edit license" } else { "Add license" }}
            </h1>
            <form onsubmit={on_submit} class="bg-white rounded-lg shadow p-6 space-y-4">
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Name"}</label>
                    <input required=true class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                        value={(*name).clone()} oninput={bind(&name)} />
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Vendor"}</label>
                    <input required=true class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                        value={(*vendor).clone()} oninput={bind(&vendor)} />
                </div>
                <div class="grid grid-cols-2 gap-3">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Total seats"}</label>
                        <input type="number" min="1" required=true
                            class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*total_seats).clone()} oninput={bind(&total_seats)} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Expiration date"}</label>
                        <input type="date" class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*expiration).clone()} oninput={bind(&expiration)} />
                    </div>
                </div>
                <button type="submit" disabled={*saving}
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50">
                    {if *saving { "Saving..." } else { "Save license" }}
                </button>
            </form>
        </div>
    }
}
