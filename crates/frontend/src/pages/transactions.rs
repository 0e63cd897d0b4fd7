//! Transaction history list

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::transactions::{Transaction, TransactionFilters};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[function_component(TransactionsPage)]
pub fn transactions_page() -> Html {
    let toasts = use_toast();
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);
    let type_filter = use_state(String::new);

    {
        let transactions = transactions.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with((*type_filter).clone(), move |type_filter| {
            loading.set(true);
            let filters = TransactionFilters {
                transaction_type: Some(type_filter.clone()).filter(|value| !value.is_empty()),
                limit: Some(100),
            };
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_transactions(&filters).await {
                    Ok(rows) => transactions.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_type = {
        let type_filter = type_filter.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            type_filter.set(select.value());
        })
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold text-gray-900">{"Transactions"}</h1>
                <select class="px-3 py-2 border border-gray-300 rounded-md" onchange={on_type}>
                    <option value="" selected={type_filter.is_empty()}>{"All types"}</option>
                    <option value="assignment">{"Assignments"}</option>
                    <option value="return">{"Returns"}</option>
                    <option value="transfer">{"Transfers"}</option>
                    <option value="status_change">{"Status changes"}</option>
                </select>
            </div>

            if *loading {
                <LoadingSpinner />
            } else if transactions.is_empty() {
                <p class="text-gray-500 py-8 text-center">{"No transactions recorded."}</p>
            } else {
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Type"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Asset"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Employee"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"When"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {for transactions.iter().map(|row| html! {
                                <tr key={row.id.clone()}>
                                    <td class="px-6 py-3 text-sm font-medium text-gray-900">{&row.transaction_type}</td>
                                    <td class="px-6 py-3 text-sm text-gray-600">
                                        {row.asset.as_ref().map(|asset| asset.name.clone()).unwrap_or_else(|| row.asset_id.clone())}
                                    </td>
                                    <td class="px-6 py-3 text-sm text-gray-600">
                                        {row.employee.as_ref()
                                            .map(|employee| format!("{} {}", employee.first_name, employee.last_name))
                                            .unwrap_or_default()}
                                    </td>
                                    <td class="px-6 py-3 text-sm text-gray-400">{&row.performed_at}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
