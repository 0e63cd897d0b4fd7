//! Employee create/edit form
//!
//! Mirrors the asset form; the client wraps every multipart key in the
//! `employee[...]` prefix the backend expects.

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::routes::Route;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::employees::EmployeeInput;
use assetra_client::FileUpload;
use gloo::file::callbacks::FileReader;
use serde_json::{Map, Value};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EmployeeFormProps {
    pub id: Option<String>,
}

#[function_component(EmployeeFormPage)]
pub fn employee_form_page(props: &EmployeeFormProps) -> Html {
    let toasts = use_toast();
    let navigator = use_navigator().expect("page renders inside the router");

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let job_title = use_state(String::new);
    let employment_status = use_state(|| "active".to_string());
    let custom_fields = use_state(Vec::<(String, String)>::new);
    let photo = use_state(|| Option::<FileUpload>::None);
    let reader_handle = use_mut_ref(|| Option::<FileReader>::None);
    let loading = use_state(|| false);
    let saving = use_state(|| false);

    {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let job_title = job_title.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(props.id.clone(), move |id| {
            let Some(id) = id.clone() else {
                return;
            };
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().get_employee(&id).await {
                    Ok(employee) => {
                        first_name.set(employee.first_name);
                        last_name.set(employee.last_name);
                        email.set(employee.email);
                        job_title.set(employee.job_title.unwrap_or_default());
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
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let job_title = job_title.clone();
        let employment_status = employment_status.clone();
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

            let input = EmployeeInput {
                first_name: Some((*first_name).clone()),
                last_name: Some((*last_name).clone()),
                email: Some((*email).clone()),
                job_title: Some((*job_title).clone()).filter(|value| !value.is_empty()),
                employment_status: Some((*employment_status).clone()),
                custom_fields: (!fields.is_empty()).then_some(fields),
                photo: (*photo).clone(),
                ..EmployeeInput::default()
            };

            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let id = id.clone();
            let saving = saving.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let client = api_client();
                let result = match &id {
                    Some(id) => client.update_employee(id, &input).await,
                    None => client.create_employee(&input).await,
                };
                match result {
                    Ok(employee) => {
                        toasts.success(if id.is_some() {
                            "Employee updated."
                        } else {
                            "Employee created."
                        });
                        navigator.push(&Route::ViewEmployee { id: employee.id });
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
                {if props.id.is_some() { "Edit employee" } else { "Add employee" }}
            </h1>
            <form onsubmit={on_submit} class="bg-white rounded-lg shadow p-6 space-y-4">
                <div class="grid grid-cols-2 gap-3">
                    {text_input("First name", &first_name, true)}
                    {text_input("Last name", &last_name, true)}
                </div>
                {text_input("Email", &email, true)}
                {text_input("Job title", &job_title, false)}
                <div>
                    <label class="block text-sm font-medium text-gray-700 mb-1">{"Employment status"}</label>
                    <select
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                        onchange={{
                            let employment_status = employment_status.clone();
                            Callback::from(move |e: Event| {
                                let select: HtmlSelectElement = e.target_unchecked_into();
                                employment_status.set(select.value());
                            })
                        }}
                    >
                        {for ["active", "on_leave", "terminated"].iter().map(|value| html! {
                            <option value={*value} selected={*employment_status == *value}>{*value}</option>
                        })}
                    </select>
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
                    {if *saving { "Saving..." } else { "Save employee" }}
                </button>
            </form>
        </div>
    }
}
