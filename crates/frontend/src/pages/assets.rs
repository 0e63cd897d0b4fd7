//! Asset list with search, filters, and pagination

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::assets::{Asset, AssetFilters};
use assetra_client::PageMeta;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AssetsPage)]
pub fn assets_page() -> Html {
    let toasts = use_toast();
    let assets = use_state(Vec::<Asset>::new);
    let meta = use_state(|| Option::<PageMeta>::None);
    let loading = use_state(|| true);
    let page = use_state(|| 1u32);
    let query = use_state(String::new);
    let status = use_state(String::new);
    let reload = use_state(|| 0u32);

    {
        let assets = assets.clone();
        let meta = meta.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        let deps = (*page, (*query).clone(), (*status).clone(), *reload);
        use_effect_with(deps, move |(page, query, status, _)| {
            loading.set(true);
            let filters = AssetFilters {
                page: Some(*page),
                per_page: Some(25),
                q: Some(query.clone()).filter(|value| !value.is_empty()),
                status: Some(status.clone()).filter(|value| !value.is_empty()),
                ..AssetFilters::default()
            };
            let searching = filters.q.is_some();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                let result = if searching {
                    client.search_assets(&filters).await
                } else {
                    client.list_assets(&filters).await
                };
                match result {
                    Ok(response) => {
                        assets.set(response.data);
                        meta.set(Some(response.meta));
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_search = {
        let query = query.clone();
        let page = page.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
            page.set(1);
        })
    };

    let on_status = {
        let status = status.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status.set(select.value());
            page.set(1);
        })
    };

    let on_delete = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_asset(&id).await {
                    Ok(()) => {
                        toasts.success("Asset deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let (prev_disabled, next_disabled) = match &*meta {
        Some(meta) => (meta.page <= 1, meta.page >= meta.total_pages),
        None => (true, true),
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Assets"}</h1>
                <Link<Route> to={Route::AddAsset}
                    classes="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white text-sm font-medium rounded-lg">
                    {"Add asset"}
                </Link<Route>>
            </div>

            <div class="flex gap-3">
                <input
                    type="text"
                    placeholder="Search assets..."
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md"
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <select class="px-3 py-2 border border-gray-300 rounded-md" onchange={on_status}>
                    <option value="" selected={status.is_empty()}>{"All statuses"}</option>
                    <option value="in_stock">{"In stock"}</option>
                    <option value="assigned">{"Assigned"}</option>
                    <option value="in_repair">{"In repair"}</option>
                    <option value="retired">{"Retired"}</option>
                </select>
            </div>

            if *loading {
                <LoadingSpinner />
            } else if assets.is_empty() {
                <p class="text-gray-500 py-8 text-center">{"No assets found."}</p>
            } else {
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Category"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Serial"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {for assets.iter().map(|asset| {
                                let id = asset.id.clone();
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <tr key={asset.id.clone()}>
                                        <td class="px-6 py-3 text-sm font-medium text-gray-900">
                                            <Link<Route> to={Route::ViewAsset { id: id.clone() }} classes="hover:underline">
                                                {&asset.name}
                                            </Link<Route>>
                                        </td>
                                        <td class="px-6 py-3 text-sm text-gray-600">{&asset.category}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">{asset.status.label()}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">
                                            {asset.serial_number.clone().unwrap_or_default()}
                                        </td>
                                        <td class="px-6 py-3 text-sm text-right space-x-3">
                                            <Link<Route> to={Route::EditAsset { id: id.clone() }} classes="text-blue-600 hover:underline">
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

                <div class="flex items-center justify-between text-sm text-gray-600">
                    <span>
                        {meta.as_ref().map(|meta| format!("{} assets total", meta.total)).unwrap_or_default()}
                    </span>
                    <div class="space-x-2">
                        <button
                            disabled={prev_disabled}
                            onclick={{ let page = page.clone(); Callback::from(move |_| page.set((*page).saturating_sub(1).max(1))) }}
                            class="px-3 py-1.5 border rounded-md disabled:opacity-50">
                            {"Previous"}
                        </button>
                        <button
                            disabled={next_disabled}
                            onclick={{ let page = page.clone(); Callback::from(move |_| page.set(*page + 1)) }}
                            class="px-3 py-1.5 border rounded-md disabled:opacity-50">
                            {"Next"}
                        </button>
                    </div>
                </div>
            }
        </div>
    }
}
