//! Asset create/edit form
//!
//! Custom fields are free key/value rows; a photo plus any custom fields
//! turn the submission into a flattened multipart payload in the client.

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::assets::AssetInput;
use assetra_client::FileUpload;
use gloo::file::callbacks::FileReader;
use serde_json::{Map, Value};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AssetFormProps {
    /// `None` creates, `Some` edits.
    pub id: Option<String>,
}

#[function_component(AssetFormPage)]
pub fn asset_form_page(props: &AssetFormProps) -> Html {
    let toasts = use_toast();
    let navigator = use_navigator().expect("page renders inside the router");

    let name = use_state(String::new);
    let serial = use_state(String::new);
    let category = use_state(String::new);
    let status = use_state(|| "in_stock".to_string());
    let notes = use_state(String::new);
    let custom_fields = use_state(Vec::<(String, String)>::new);
    let photo = use_state(|| Option::<FileUpload>::None);
    let reader_handle = use_mut_ref(|| Option::<FileReader>::None);
    let loading = use_state(|| false);
    let saving = use_state(|| false);

    // Editing: prefill from the existing record.
    {
        let name = name.clone();
        let serial = serial.clone();
        let category = category.clone();
        let status = status.clone();
        let notes = notes.clone();
        let custom_fields = custom_fields.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(props.id.clone(), move |id| {
            let Some(id) = id.clone() else {
                return;
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().get_asset(&id).await {
                    Ok(asset) => {
                        name.set(asset.name);
                        serial.set(asset.serial_number.unwrap_or_default());
                        category.set(asset.category);
                        status.set(asset.status.as_value().to_string());
                        notes.set(asset.notes.unwrap_or_default());
                        if let Some(fields) = asset.custom_fields {
                            custom_fields.set(
                                fields
                                    .into_iter()
                                    .map(|(key, value)| {
                                        let text = match value {
                                            Value::String(text) => text,
                                            other => other.to_string(),
                                        };
                                        (key, text)
                                    })
                                    .collect(),
                            );
                        }
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_photo = {
        let photo = photo.clone();
        let reader_handle = reader_handle.clone();
        let toasts = toasts.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let file = gloo::file::File::from(file);
            let file_name = file.name();
            let content_type = file.raw_mime_type();
            let photo = photo.clone();
            let toasts = toasts.clone();
            let reader = gloo::file::callbacks::read_as_bytes(&file, move |result| match result {
                Ok(bytes) => photo.set(Some(FileUpload::new(
                    file_name.clone(),
                    content_type.clone(),
                    bytes,
                ))),
                Err(_) => toasts.error("Could not read the selected file."),
            });
            *reader_handle.borrow_mut() = Some(reader);
        })
    };

    let add_custom_field = {
        let custom_fields = custom_fields.clone();
        Callback::from(move |_| {
            let mut fields = (*custom_fields).clone();
            fields.push((String::new(), String::new()));
            custom_fields.set(fields);
        })
    };

    let on_submit = {
        let toasts = toasts.clone();
        let id = props.id.clone();
        let name = name.clone();
        let serial = serial.clone();
        let category = category.clone();
        let status = status.clone();
        let notes = notes.clone();
        let custom_fields = custom_fields.clone();
        let photo = photo.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *saving {
                return;
            }
            saving.set(true);

            let fields: Map<String, Value> = custom_fields
                .iter()
                .filter(|(key, _)| !key.is_empty())
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();

            let input = AssetInput {
                name: Some((*name).clone()),
                serial_number: Some((*serial).clone()).filter(|value| !value.is_empty()),
                category: Some((*category).clone()),
                status: Some((*status).clone()),
                notes: Some((*notes).clone()).filter(|value| !value.is_empty()),
                custom_fields: (!fields.is_empty()).then_some(fields),
                photo: (*photo).clone(),
                ..AssetInput::default()
            };

            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                let result = match &id {
                    Some(id) => client.update_asset(id, &input).await,
                    None => client.create_asset(&input).await,
                };
                match result {
                    Ok(asset) => {
                        toasts.success(if id.is_some() { "Asset updated." } else { "Asset created." });
                        navigator.push(&Route::ViewAsset { id: asset.id });
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner /> };
    }

    let text_input = |label: &str, state: &UseStateHandle<String>, required: bool| {
        let state = state.clone();
        let value = state.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            value.set(input.value());
        });
        html! {
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">{label.to_string()}</label>
                <input {required} class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                    value={(*state).clone()} {oninput} />
            </div>
        }
    };

    html! {
        <div class="max-w-2xl space-y-6">
            <h1 class="text-2xl font-bold text-gray-900">
                {if props.id.is_some() { "Edit asset" } else { "Add asset" }}
            </h1>
            <form onsubmit={on_submit} class="bg-white rounded-lg shadow p-6 space-y-4">
                {text_input("Name", &name, true)}
                {text_input("Serial number", &serial, false)}
                {text_input("Category", &category, true)}
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Status"}</label>
                    <select
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                        onchange={{
                            let status = status.clone();
                            Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                status.set(select.value());
                            })
                        }}
                    >
                        {for ["on_order", "in_stock", "assigned", "in_repair", "retired"].iter().map(|value| html! {
                            <option value={*value} selected={*status == *value}>{*value}</option>
                        })}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Notes"}</label>
                    <textarea
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                        value={(*notes).clone()}
                        oninput={{
                            let notes = notes.clone();
                            Callback::from(move |e: InputEvent| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                notes.set(area.value());
                            })
                        }}
                    />
                </div>

                <div>
                    <div class="flex items-center justify-between mb-1">
                        <label class="block text-sm font-medium text-gray-700">{"Custom fields"}</label>
                        <button type="button" onclick={add_custom_field} class="text-sm text-blue-600 hover:underline">
                            {"Add field"}
                        </button>
                    </div>
                    {for custom_fields.iter().enumerate().map(|(index, (key, value))| {
                        let on_key = {
                            let custom_fields = custom_fields.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut fields = (*custom_fields).clone();
                                fields[index].0 = input.value();
                                custom_fields.set(fields);
                            })
                        };
                        let on_value = {
                            let custom_fields = custom_fields.clone();
                            Callback::from(move |e: InputEvent| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                let mut fields = (*custom_fields).clone();
                                fields[index].1 = input.value();
                                custom_fields.set(fields);
                            })
                        };
                        html! {
                            <div class="flex gap-2 mb-2">
                                <input placeholder="Key" class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                                    value={key.clone()} oninput={on_key} />
                                <input placeholder="Value" class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                                    value={value.clone()} oninput={on_value} />
                            </div>
                        }
                    })}
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Photo"}</label>
                    <input type="file" accept="image/*" onchange={on_photo} class="block w-full text-sm" />
                    if let Some(file) = &*photo {
                        <p class="text-xs text-gray-500 mt-1">{format!("Attached: {}", file.file_name)}</p>
                    }
                </div>

                <button type="submit" disabled={*saving}
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50">
                    {if *saving { "Saving..." } else { "Save asset" }}
                </button>
            </form>
        </div>
    }
}
