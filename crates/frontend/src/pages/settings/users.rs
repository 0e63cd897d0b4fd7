//! User administration

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::permissions::use_permissions;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::users::{UserAccount, UserFilters};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const ASSIGNABLE_ROLES: [&str; 4] = ["admin", "manager", "employee", "viewer"];

#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let toasts = use_toast();
    let permissions = use_permissions();
    let users = use_state(Vec::<UserAccount>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);

    {
        let users = users.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_users(&UserFilters::default()).await {
                    Ok(rows) => users.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_role_change = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |(id, role): (String, String)| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().update_user_role(&id, &role).await {
                    Ok(_) => {
                        toasts.success("Role updated.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let on_unlock = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().unlock_user(&id).await {
                    Ok(_) => {
                        toasts.success("Account unlocked.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    let on_delete = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_user(&id).await {
                    Ok(()) => {
                        toasts.success("User deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    if !permissions.is_admin {
        return html! {
            <p class="text-gray-500">{"You don't have access to user management."}</p>
        };
    }

    html! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"User Management"}</h1>
            if *loading {
                <LoadingSpinner />
            } else {
                <div class="bg-white shadow rounded-lg overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"User"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Role"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-100">
                            {for users.iter().map(|user| {
                                let id = user.id.clone();
                                let role_select = {
                                    let on_role_change = on_role_change.clone();
                                    let id = id.clone();
                                    let current = user.role;
                                    html! {
                                        <select
                                            class="px-2 py-1 border border-gray-300 rounded-md text-sm"
                                            onchange={Callback::from(move |e: Event| {
                                                let select: HtmlSelectElement = e.target_unchecked_into();
                                                on_role_change.emit((id.clone(), select.value()));
                                            })}
                                        >
                                            {for ASSIGNABLE_ROLES.iter().map(|role| html! {
                                                <option value={*role} selected={current.as_str() == *role}>{*role}</option>
                                            })}
                                        </select>
                                    }
                                };
                                let unlock = user.locked.then(|| {
                                    let on_unlock = on_unlock.clone();
                                    let id = user.id.clone();
                                    html! {
                                        <button
                                            onclick={Callback::from(move |_| on_unlock.emit(id.clone()))}
                                            class="text-amber-600 hover:underline">
                                            {"Unlock"}
                                        </button>
                                    }
                                });
                                let delete = {
                                    let on_delete = on_delete.clone();
                                    let id = user.id.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <tr key={user.id.clone()}>
                                        <td class="px-6 py-3">
                                            <p class="text-sm font-medium text-gray-900">
                                                {format!("{} {}", user.first_name, user.last_name)}
                                            </p>
                                            <p class="text-xs text-gray-500">{&user.email}</p>
                                        </td>
                                        <td class="px-6 py-3">{role_select}</td>
                                        <td class="px-6 py-3 text-sm text-gray-600">
                                            {format!("{:?}", user.status)}
                                        </td>
                                        <td class="px-6 py-3 text-sm text-right space-x-3">
                                            {unlock.unwrap_or_default()}
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
