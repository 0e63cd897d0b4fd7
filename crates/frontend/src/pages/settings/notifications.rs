//! Per-user notification preferences

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::settings::{
    NotificationFrequency, NotificationPreference, NotificationPreferenceInput,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

const FREQUENCIES: [(NotificationFrequency, &str, &str); 4] = [
    (NotificationFrequency::Immediate, "immediate", "Immediate"),
    (NotificationFrequency::DailyDigest, "daily_digest", "Daily digest"),
    (NotificationFrequency::WeeklyDigest, "weekly_digest", "Weekly digest"),
    (NotificationFrequency::Off, "off", "Off"),
];

#[function_component(NotificationSettingsPage)]
pub fn notification_settings_page() -> Html {
    let toasts = use_toast();
    let preferences = use_state(Vec::<NotificationPreference>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);

    {
        let preferences = preferences.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().notification_preferences().await {
                    Ok(rows) => preferences.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_frequency = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        Callback::from(move |(notification_type, value): (String, String)| {
            let frequency = FREQUENCIES
                .iter()
                .find(|(_, wire, _)| *wire == value)
                .map(|(frequency, _, _)| *frequency);
            let Some(frequency) = frequency else {
                return;
            };
            let input = NotificationPreferenceInput {
                frequency: Some(frequency),
                ..NotificationPreferenceInput::default()
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client()
                    .update_notification_preference(&notification_type, &input)
                    .await
                {
                    Ok(_) => {
                        toasts.success("Preference saved.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Notifications"}</h1>
            if *loading {
                <LoadingSpinner />
            } else if preferences.is_empty() {
                <p class="text-gray-500">{"No notification preferences configured."}</p>
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100">
                    {for preferences.iter().map(|preference| {
                        let select = {
                            let on_frequency = on_frequency.clone();
                            let notification_type = preference.notification_type.clone();
                            let current = preference.frequency;
                            html! {
                                <select
                                    class="px-2 py-1 border border-gray-300 rounded-md text-sm"
                                    onchange={Callback::from(move |e: Event| {
                                        let element: HtmlSelectElement = e.target_unchecked_into();
                                        on_frequency.emit((notification_type.clone(), element.value()));
                                    })}
                                >
                                    {for FREQUENCIES.iter().map(|(frequency, wire, label)| html! {
                                        <option value={*wire} selected={current == *frequency}>{*label}</option>
                                    })}
                                </select>
                            }
                        };
                        html! {
                            <li key={preference.id.clone()} class="px-4 py-3 flex items-center justify-between">
                                <div>
                                    <p class="text-sm font-medium text-gray-900">{&preference.notification_type}</p>
                                    <p class="text-xs text-gray-500">
                                        {if preference.respect_quiet_hours { "Respects quiet hours" } else { "Delivers any time" }}
                                    </p>
                                </div>
                                {select}
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
