//! Tenant-wide settings, admin only

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::permissions::use_permissions;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::settings::{TenantSettings, TenantSettingsInput, WorkflowSettings};
use yew::prelude::*;

#[function_component(GeneralSettingsPage)]
pub fn general_settings_page() -> Html {
    let toasts = use_toast();
    let permissions = use_permissions();
    let settings = use_state(|| Option::<TenantSettings>::None);
    let loading = use_state(|| true);

    {
        let settings = settings.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        let can_view = permissions.can_view_tenant_settings;
        use_effect_with((), move |_| {
            if !can_view {
                loading.set(false);
                return;
            }
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().tenant_settings().await {
                    Ok(current) => settings.set(Some(current)),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_toggle_onboarding = {
        let toasts = toasts.clone();
        let settings = settings.clone();
        Callback::from(move |_| {
            let Some(current) = (*settings).clone() else {
                return;
            };
            let updated = WorkflowSettings {
                auto_create_onboarding: !current.workflow.auto_create_onboarding,
                ..current.workflow.clone()
            };
            let input = TenantSettingsInput {
                workflow: Some(updated),
                ..TenantSettingsInput::default()
            };
            let toasts = toasts.clone();
            let settings = settings.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().update_tenant_settings(&input).await {
                    Ok(saved) => {
                        toasts.success("Settings saved.");
                        settings.set(Some(saved));
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    if !permissions.can_view_tenant_settings {
        return html! {
            <p class="text-gray-500">{"Tenant settings are visible to admins only."}</p>
        };
    }

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let Some(current) = &*settings else {
        return html! { <p class="text-gray-500">{"Settings are unavailable right now."}</p> };
    };

    let row = |label: &str, value: String| {
        html! {
            <div class="flex justify-between py-2 border-b border-gray-100 last:border-0">
                <span class="text-sm text-gray-500">{label.to_string()}</span>
                <span class="text-sm text-gray-900">{value}</span>
            </div>
        }
    };

    html! {
        <div class="max-w-2xl space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">{"General Settings"}</h1>

            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-lg font-semibold text-gray-900">{"Workflows"}</h2>
                    if permissions.can_update_tenant_settings {
                        <button
                            onclick={on_toggle_onboarding}
                            class="px-3 py-1.5 text-sm bg-gray-100 hover:bg-gray-200 rounded-md">
                            {if current.workflow.auto_create_onboarding {
                                "Disable auto-onboarding"
                            } else {
                                "Enable auto-onboarding"
                            }}
                        </button>
                    }
                </div>
                {row("Auto-create onboarding", current.workflow.auto_create_onboarding.to_string())}
                {row("Auto-create offboarding", current.workflow.auto_create_offboarding.to_string())}
                {row("Default due days", current.workflow.default_due_days.to_string())}
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Assets"}</h2>
                {row("Depreciation method", current.asset.depreciation_method.clone())}
                {row("Depreciation months", current.asset.depreciation_months.to_string())}
                {row("Warranty alert days", current.asset.warranty_alert_days.to_string())}
                {row("Require serial numbers", current.asset.require_serial.to_string())}
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">{"Security"}</h2>
                {row("Require 2FA", current.security.require_2fa.to_string())}
                {row("Session timeout (min)", current.security.session_timeout_minutes.to_string())}
                {row("Lockout after failures", current.security.failed_login_lockout_count.to_string())}
            </div>
        </div>
    }
}
