//! Single-asset view: details, lifecycle actions, history

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::assets::{Asset, AssignmentType};
use assetra_client::api::transactions::Transaction;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssetDetailProps {
    pub id: String,
}

#[function_component(AssetDetailPage)]
pub fn asset_detail_page(props: &AssetDetailProps) -> Html {
    let toasts = use_toast();
    let asset = use_state(|| Option::<Asset>::None);
    let history = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let assign_employee = use_state(String::new);
    let transfer_to = use_state(String::new);
    let reload = use_state(|| 0u32);

    {
        let asset = asset.clone();
        let history = history.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with((props.id.clone(), *reload), move |(id, _)| {
            let id = id.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                match client.get_asset(&id).await {
                    Ok(record) => asset.set(Some(record)),
                    Err(error) => toasts.error(error.user_message()),
                }
                if let Ok(rows) = client.asset_transactions(&id).await {
                    history.set(rows);
                }
                loading.set(false);
            });
        });
    }

    let refresh = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    let on_assign = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let assign_employee = assign_employee.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let employee_id = (*assign_employee).clone();
            if employee_id.is_empty() {
                return;
            }
            let toasts = toasts.clone();
            let id = id.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client()
                    .assign_asset(&id, &employee_id, AssignmentType::Permanent, None)
                    .await
                {
                    Ok(_) => {
                        toasts.success("Asset assigned.");
                        refresh.emit(());
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let on_return = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let toasts = toasts.clone();
            let id = id.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().return_asset(&id, None).await {
                    Ok(_) => {
                        toasts.success("Asset returned to stock.");
                        refresh.emit(());
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let on_transfer = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let transfer_to = transfer_to.clone();
        let asset = asset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let to_employee = (*transfer_to).clone();
            let from_employee = asset
                .as_ref()
                .and_then(|asset| asset.employee_id)
                .map(|id| id.to_string());
            let (Some(from_employee), false) = (from_employee, to_employee.is_empty()) else {
                return;
            };
            let toasts = toasts.clone();
            let id = id.clone();
            let refresh = refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client()
                    .transfer_asset(&id, &from_employee, &to_employee)
                    .await
                {
                    Ok(_) => {
                        toasts.success("Asset transferred.");
                        refresh.emit(());
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let Some(record) = &*asset else {
        return html! { <p class="text-gray-500">{"Asset not found."}</p> };
    };

    let field = |label: &str, value: String| {
        html! {
            <div>
                <dt class="text-xs uppercase text-gray-400">{label.to_string()}</dt>
                <dd class="text-sm text-gray-800">{if value.is_empty() { "—".to_string() } else { value }}</dd>
            </div>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{&record.name}</h1>
                <Link<Route> to={Route::EditAsset { id: record.id.clone() }}
                    classes="px-4 py-2 bg-gray-100 hover:bg-gray-200 text-sm font-medium rounded-lg">
                    {"Edit"}
                </Link<Route>>
            </div>

            <dl class="bg-white rounded-lg shadow p-6 grid grid-cols-2 md:grid-cols-3 gap-4">
                {field("Category", record.category.clone())}
                {field("Status", record.status.label().to_string())}
                {field("Serial number", record.serial_number.clone().unwrap_or_default())}
                {field("Vendor", record.vendor.clone().unwrap_or_default())}
                {field("Purchase date", record.purchase_date.clone().unwrap_or_default())}
                {field("Warranty until", record.warranty_expiration.clone().unwrap_or_default())}
                {field(
                    "Assigned to",
                    record
                        .employee
                        .as_ref()
                        .map(|holder| format!("{} {}", holder.first_name, holder.last_name))
                        .unwrap_or_default(),
                )}
                {field(
                    "Location",
                    record.location.as_ref().map(|location| location.name.clone()).unwrap_or_default(),
                )}
                {field("Notes", record.notes.clone().unwrap_or_default())}
            </dl>

            <div class="bg-white rounded-lg shadow p-6 space-y-4">
                <h2 class="text-lg font-semibold text-gray-900">{"Lifecycle"}</h2>
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
                        {"Assign"}
                    </button>
                </form>
                <form onsubmit={on_transfer} class="flex gap-2">
                    <input
                        placeholder="Transfer to employee id"
                        class="px-3 py-2 border border-gray-300 rounded-md text-sm"
                        value={(*transfer_to).clone()}
                        oninput={{
                            let transfer_to = transfer_to.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                transfer_to.set(input.value());
                            })
                        }}
                    />
                    <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">
                        {"Transfer"}
                    </button>
                </form>
                <button onclick={on_return} class="px-3 py-2 bg-gray-100 hover:bg-gray-200 text-sm rounded-md">
                    {"Return to stock"}
                </button>
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
