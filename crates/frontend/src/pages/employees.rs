//! Employee list with lifecycle actions

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::employees::{Employee, EmploymentStatus};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(EmployeesPage)]
pub fn employees_page() -> Html {
    let toasts = use_toast();
    let employees = use_state(Vec::<Employee>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);

    {
        let employees = employees.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_employees().await {
                    Ok(rows) => employees.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_terminate = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let today = today_iso();
                match api_client()
                    .terminate_employee(&id, &today, "offboarding", None)
                    .await
                {
                    Ok(_) => {
                        toasts.success("Employee terminated.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let on_reactivate = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().reactivate_employee(&id).await {
                    Ok(_) => {
                        toasts.success("Employee reactivated.");
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
                <h1 class="text-2xl font-bold text-gray-900">{"Employees"}</h1>
                <Link<Route> to={Route::AddEmployee}
                    classes="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white text-sm font-medium rounded-lg">
                    {"Add employee"}
                </Link<Route>>
            </div>

            if *loading {
                <LoadingSpinner />
            } else if employees.is_empty() {
                <p class="text-gray-500 py-8 text-center">{"No employees yet."}</p>
            } else {
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Email"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Title"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {for employees.iter().map(|employee| {
                                let id = employee.id.clone();
                                let terminated = employee.employment_status == EmploymentStatus::Terminated;
                                let action = if terminated {
                                    let on_reactivate = on_reactivate.clone();
                                    let id = id.clone();
                                    html! {
                                        <button
                                            onclick={Callback::from(move |_| on_reactivate.emit(id.clone()))}
                                            class="text-green-600 hover:underline">
                                            {"Reactivate"}
                                        </button>
                                    }
                                } else {
                                    let on_terminate = on_terminate.clone();
                                    let id = id.clone();
                                    html! {
                                        <button
                                            onclick={Callback::from(move |_| on_terminate.emit(id.clone()))}
                                            class="text-red-600 hover:underline">
                                            {"Terminate"}
                                        </button>
                                    }
                                };
                                html! {
                                    <tr key={employee.id.clone()}>
                                        <td class="px-6 py-3 text-sm font-medium text-gray-900">
                                            <Link<Route> to={Route::ViewEmployee { id: employee.id.clone() }} classes="hover:underline">
                                                {employee.full_name()}
                                            </Link<Route>>
                                        </td>
                                        <td class="px-6 py-3 text-sm text-gray-600">{&employee.email}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">
                                            {employee.job_title.clone().unwrap_or_default()}
                                        </td>
                                        <td class="px-6 py-3 text-sm text-gray-600">
                                            {employee.employment_status.label()}
                                        </td>
                                        <td class="px-6 py-3 text-sm text-right space-x-3">
                                            <Link<Route> to={Route::EditEmployee { id: employee.id.clone() }}
                                                classes="text-blue-600 hover:underline">
                                                {"Edit"}
                                            </Link<Route>>
                                            {action}
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

/// Today's date in ISO form, from the JS clock.
fn today_iso() -> String {
    let date = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}
