//! Catalog maintenance pages
//!
//! Five small CRUD catalogs share the same page shape: a creation form on
//! top, the existing entries below with delete. Hierarchy (parent links for
//! locations/organizations/departments) is accepted as plain ids; the
//! backend owns integrity.

use crate::client::api_client;
use crate::components::LoadingSpinner;
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::categories::{Category, CategoryInput};
use assetra_client::api::departments::{Department, DepartmentInput};
use assetra_client::api::locations::{Location, LocationInput};
use assetra_client::api::organizations::{Organization, OrganizationInput};
use assetra_client::api::statuses::{StatusLabel, StatusLabelInput};
use web_sys::HtmlInputElement;
use yew::prelude::*;

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let toasts = use_toast();
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let name = use_state(String::new);
    let description = use_state(String::new);

    {
        let categories = categories.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_categories().await {
                    Ok(rows) => categories.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        let name = name.clone();
        let description = description.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = CategoryInput {
                name: Some((*name).clone()),
                description: Some((*description).clone()).filter(|value| !value.is_empty()),
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            let name = name.clone();
            let description = description.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().create_category(&input).await {
                    Ok(_) => {
                        toasts.success("Category created.");
                        name.set(String::new());
                        description.set(String::new());
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
        Callback::from(move |id: i64| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_category(id).await {
                    Ok(()) => {
                        toasts.success("Category deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Asset Categories"}</h1>
            <form onsubmit={on_create} class="bg-white rounded-lg shadow p-4 flex gap-2">
                <input required=true placeholder="Name"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*name).clone()}
                    oninput={{ let name = name.clone(); Callback::from(move |e: InputEvent| name.set(input_value(&e))) }} />
                <input placeholder="Description"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*description).clone()}
                    oninput={{ let description = description.clone(); Callback::from(move |e: InputEvent| description.set(input_value(&e))) }} />
                <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">{"Add"}</button>
            </form>
            if *loading {
                <LoadingSpinner />
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100">
                    {for categories.iter().map(|category| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = category.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <li key={category.id} class="px-4 py-3 flex items-center justify-between">
                                <div>
                                    <p class="text-sm font-medium text-gray-900">{&category.name}</p>
                                    if let Some(description) = &category.description {
                                        <p class="text-xs text-gray-500">{description}</p>
                                    }
                                </div>
                                <button onclick={delete} class="text-sm text-red-600 hover:underline">{"Delete"}</button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}

#[function_component(StatusesPage)]
pub fn statuses_page() -> Html {
    let toasts = use_toast();
    let statuses = use_state(Vec::<StatusLabel>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let name = use_state(String::new);
    let value = use_state(String::new);
    let color = use_state(|| "#3b82f6".to_string());

    {
        let statuses = statuses.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_statuses().await {
                    Ok(rows) => statuses.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        let name = name.clone();
        let value = value.clone();
        let color = color.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = StatusLabelInput {
                name: Some((*name).clone()),
                value: Some((*value).clone()),
                color: Some((*color).clone()),
                description: None,
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            let name = name.clone();
            let value = value.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().create_status(&input).await {
                    Ok(_) => {
                        toasts.success("Status created.");
                        name.set(String::new());
                        value.set(String::new());
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
        Callback::from(move |id: i64| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_status(id).await {
                    Ok(()) => {
                        toasts.success("Status deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Asset Statuses"}</h1>
            <form onsubmit={on_create} class="bg-white rounded-lg shadow p-4 flex gap-2">
                <input required=true placeholder="Name"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*name).clone()}
                    oninput={{ let name = name.clone(); Callback::from(move |e: InputEvent| name.set(input_value(&e))) }} />
                <input required=true placeholder="Value (machine name)"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*value).clone()}
                    oninput={{ let value = value.clone(); Callback::from(move |e: InputEvent| value.set(input_value(&e))) }} />
                <input type="color"
                    class="w-12 border border-gray-300 rounded-md"
                    value={(*color).clone()}
                    oninput={{ let color = color.clone(); Callback::from(move |e: InputEvent| color.set(input_value(&e))) }} />
                <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">{"Add"}</button>
            </form>
            if *loading {
                <LoadingSpinner />
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100">
                    {for statuses.iter().map(|status| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = status.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <li key={status.id} class="px-4 py-3 flex items-center justify-between">
                                <div class="flex items-center gap-3">
                                    <span class="w-3 h-3 rounded-full inline-block" style={format!("background: {}", status.color)}></span>
                                    <span class="text-sm font-medium text-gray-900">{&status.name}</span>
                                    <span class="text-xs text-gray-400">{&status.value}</span>
                                </div>
                                <button onclick={delete} class="text-sm text-red-600 hover:underline">{"Delete"}</button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}

#[function_component(LocationsPage)]
pub fn locations_page() -> Html {
    let toasts = use_toast();
    let locations = use_state(Vec::<Location>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let name = use_state(String::new);
    let city = use_state(String::new);

    {
        let locations = locations.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_locations().await {
                    Ok(rows) => locations.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        let name = name.clone();
        let city = city.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = LocationInput {
                name: Some((*name).clone()),
                city: Some((*city).clone()).filter(|value| !value.is_empty()),
                location_type: Some("office".to_string()),
                is_active: Some(true),
                ..LocationInput::default()
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            let name = name.clone();
            let city = city.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().create_location(&input).await {
                    Ok(_) => {
                        toasts.success("Location created.");
                        name.set(String::new());
                        city.set(String::new());
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
        Callback::from(move |id: i64| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_location(id).await {
                    Ok(()) => {
                        toasts.success("Location deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Locations"}</h1>
            <form onsubmit={on_create} class="bg-white rounded-lg shadow p-4 flex gap-2">
                <input required=true placeholder="Name"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*name).clone()}
                    oninput={{ let name = name.clone(); Callback::from(move |e: InputEvent| name.set(input_value(&e))) }} />
                <input placeholder="City"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*city).clone()}
                    oninput={{ let city = city.clone(); Callback::from(move |e: InputEvent| city.set(input_value(&e))) }} />
                <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">{"Add"}</button>
            </form>
            if *loading {
                <LoadingSpinner />
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100">
                    {for locations.iter().map(|location| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = location.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <li key={location.id} class="px-4 py-3 flex items-center justify-between">
                                <div>
                                    <p class="text-sm font-medium text-gray-900">{&location.name}</p>
                                    if let Some(city) = &location.city {
                                        <p class="text-xs text-gray-500">{city}</p>
                                    }
                                </div>
                                <button onclick={delete} class="text-sm text-red-600 hover:underline">{"Delete"}</button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}

#[function_component(OrganizationsPage)]
pub fn organizations_page() -> Html {
    let toasts = use_toast();
    let organizations = use_state(Vec::<Organization>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let name = use_state(String::new);

    {
        let organizations = organizations.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_organizations().await {
                    Ok(rows) => organizations.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        let name = name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = OrganizationInput {
                name: Some((*name).clone()),
                ..OrganizationInput::default()
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            let name = name.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().create_organization(&input).await {
                    Ok(_) => {
                        toasts.success("Organization created.");
                        name.set(String::new());
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
        Callback::from(move |id: i64| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_organization(id).await {
                    Ok(()) => {
                        toasts.success("Organization deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Organizations"}</h1>
            <form onsubmit={on_create} class="bg-white rounded-lg shadow p-4 flex gap-2">
                <input required=true placeholder="Name"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*name).clone()}
                    oninput={{ let name = name.clone(); Callback::from(move |e: InputEvent| name.set(input_value(&e))) }} />
                <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">{"Add"}</button>
            </form>
            if *loading {
                <LoadingSpinner />
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100">
                    {for organizations.iter().map(|organization| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = organization.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <li key={organization.id} class="px-4 py-3 flex items-center justify-between">
                                <p class="text-sm font-medium text-gray-900">{&organization.name}</p>
                                <button onclick={delete} class="text-sm text-red-600 hover:underline">{"Delete"}</button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}

#[function_component(DepartmentsPage)]
pub fn departments_page() -> Html {
    let toasts = use_toast();
    let departments = use_state(Vec::<Department>::new);
    let loading = use_state(|| true);
    let reload = use_state(|| 0u32);
    let name = use_state(String::new);

    {
        let departments = departments.clone();
        let loading = loading.clone();
        let toasts = toasts.clone();
        use_effect_with(*reload, move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().list_departments().await {
                    Ok(rows) => departments.set(rows),
                    Err(error) => toasts.error(error.user_message()),
                }
                loading.set(false);
            });
        });
    }

    let on_create = {
        let toasts = toasts.clone();
        let reload = reload.clone();
        let name = name.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let input = DepartmentInput {
                name: Some((*name).clone()),
                ..DepartmentInput::default()
            };
            let toasts = toasts.clone();
            let reload = reload.clone();
            let name = name.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().create_department(&input).await {
                    Ok(_) => {
                        toasts.success("Department created.");
                        name.set(String::new());
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
        Callback::from(move |id: i64| {
            let toasts = toasts.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().delete_department(id).await {
                    Ok(()) => {
                        toasts.success("Department deleted.");
                        reload.set(*reload + 1);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl space-y-4">
            <h1 class="text-2xl font-bold text-gray-900">{"Departments"}</h1>
            <form onsubmit={on_create} class="bg-white rounded-lg shadow p-4 flex gap-2">
                <input required=true placeholder="Name"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    value={(*name).clone()}
                    oninput={{ let name = name.clone(); Callback::from(move |e: InputEvent| name.set(input_value(&e))) }} />
                <button type="submit" class="px-3 py-2 bg-blue-600 text-white text-sm rounded-md">{"Add"}</button>
            </form>
            if *loading {
                <LoadingSpinner />
            } else {
                <ul class="bg-white rounded-lg shadow divide-y divide-gray-100">
                    {for departments.iter().map(|department| {
                        let delete = {
                            let on_delete = on_delete.clone();
                            let id = department.id;
                            Callback::from(move |_| on_delete.emit(id))
                        };
                        html! {
                            <li key={department.id} class="px-4 py-3 flex items-center justify-between">
                                <p class="text-sm font-medium text-gray-900">{&department.name}</p>
                                <button onclick={delete} class="text-sm text-red-600 hover:underline">{"Delete"}</button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
