//! Guest-facing pages: sign in, registration, password recovery

use crate::client::api_client;
use crate::routes::{RedirectQuery, Route};
use crate::session::{self, use_session, SessionAction};
use crate::toast::{use_toast, ToastHandle};
use assetra_client::api::auth::{
    Credentials, ForgotPasswordRequest, RegisterRequest, ResetPasswordRequest,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

fn input_value(e: &InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// After a successful login, resume the navigation the guard interrupted.
fn redirect_target(location: &yew_router::history::Location) -> Route {
    location
        .query::<RedirectQuery>()
        .ok()
        .and_then(|query| Route::recognize(&query.redirect))
        .unwrap_or(Route::Dashboard)
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("page renders inside the router");
    let location = use_location().expect("page renders inside the router");

    let email = use_state(String::new);
    let password = use_state(String::new);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(&e)))
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            let navigator = navigator.clone();
            let location = location.clone();
            let credentials = Credentials {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            wasm_bindgen_futures::spawn_local(async move {
                if session::login(&session, credentials).await {
                    navigator.push(&redirect_target(&location));
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Sign in"}</h1>
                if let Some(error) = &session.error {
                    <div class="mb-4 p-3 rounded-lg bg-red-50 text-red-700 text-sm">{error}</div>
                }
                <form onsubmit={on_submit} class="space-y-4">
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input
                            type="email"
                            required=true
                            class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input
                            type="password"
                            required=true
                            class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={session.loading}
                        class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50"
                    >
                        {if session.loading { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <div class="mt-4 flex justify-between text-sm">
                    <Link<Route> to={Route::ForgotPassword} classes="text-blue-600 hover:underline">
                        {"Forgot password?"}
                    </Link<Route>>
                    <Link<Route> to={Route::Register} classes="text-blue-600 hover:underline">
                        {"Create account"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("page renders inside the router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let phone = use_state(String::new);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| state.set(input_value(&e)))
    };

    let on_submit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let phone = phone.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let session = session.clone();
            let navigator = navigator.clone();
            let data = RegisterRequest {
                email: (*email).clone(),
                password: (*password).clone(),
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                phone: Some((*phone).clone()).filter(|value| !value.is_empty()),
            };
            wasm_bindgen_futures::spawn_local(async move {
                if session::register(&session, data).await {
                    navigator.push(&Route::Dashboard);
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Create account"}</h1>
                if let Some(error) = &session.error {
                    <div class="mb-4 p-3 rounded-lg bg-red-50 text-red-700 text-sm">{error}</div>
                }
                <form onsubmit={on_submit} class="space-y-4">
                    <div class="grid grid-cols-2 gap-3">
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"First name"}</label>
                            <input required=true class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                                value={(*first_name).clone()} oninput={bind(&first_name)} />
                        </div>
                        <div>
                            <label class="block text-sm font-medium text-gray-700 mb-1">{"Last name"}</label>
                            <input required=true class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                                value={(*last_name).clone()} oninput={bind(&last_name)} />
                        </div>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Email"}</label>
                        <input type="email" required=true class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*email).clone()} oninput={bind(&email)} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Password"}</label>
                        <input type="password" required=true class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*password).clone()} oninput={bind(&password)} />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700 mb-1">{"Phone (optional)"}</label>
                        <input class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                            value={(*phone).clone()} oninput={bind(&phone)} />
                    </div>
                    <button type="submit" disabled={session.loading}
                        class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50">
                        {if session.loading { "Creating..." } else { "Create account" }}
                    </button>
                </form>
                <div class="mt-4 text-sm text-center">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">
                        {"Already have an account? Sign in"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let toasts = use_toast();
    let email = use_state(String::new);
    let sending = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(input_value(&e)))
    };

    let on_submit = {
        let toasts = toasts.clone();
        let email = email.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            sending.set(true);
            let toasts = toasts.clone();
            let sending = sending.clone();
            let data = ForgotPasswordRequest {
                email: (*email).clone(),
            };
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().forgot_password(&data).await {
                    Ok(response) => toasts.success(response.message),
                    Err(error) => toasts.error(error.user_message()),
                }
                sending.set(false);
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-2">{"Forgot password"}</h1>
                <p class="text-sm text-gray-500 mb-6">
                    {"We'll email you a link to reset your password."}
                </p>
                <form onsubmit={on_submit} class="space-y-4">
                    <input type="email" required=true placeholder="you@example.com"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                        value={(*email).clone()} oninput={on_email} />
                    <button type="submit" disabled={*sending}
                        class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg disabled:opacity-50">
                        {"Send reset link"}
                    </button>
                </form>
                <div class="mt-4 text-sm text-center">
                    <Link<Route> to={Route::Login} classes="text-blue-600 hover:underline">{"Back to sign in"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResetPasswordProps {
    pub token: String,
}

#[function_component(ResetPasswordPage)]
pub fn reset_password_page(props: &ResetPasswordProps) -> Html {
    let toasts = use_toast();
    let navigator = use_navigator().expect("page renders inside the router");
    let session = use_session();

    let password = use_state(String::new);
    let confirmation = use_state(String::new);
    let token_valid = use_state(|| Option::<bool>::None);

    // Check the token before showing the form.
    {
        let token = props.token.clone();
        let token_valid = token_valid.clone();
        use_effect_with(token, move |token| {
            let token = token.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let valid = api_client().validate_reset_token(&token).await.is_ok();
                token_valid.set(Some(valid));
            });
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| state.set(input_value(&e)))
    };

    let on_submit = {
        let toasts = toasts.clone();
        let token = props.token.clone();
        let password = password.clone();
        let confirmation = confirmation.clone();
        let session = session.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password != *confirmation {
                toasts.warning("Passwords do not match.");
                return;
            }
            let toasts = toasts.clone();
            let navigator = navigator.clone();
            let data = ResetPasswordRequest {
                token: token.clone(),
                password: (*password).clone(),
                password_confirmation: (*confirmation).clone(),
            };
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api_client().reset_password(&data).await {
                    Ok(response) => {
                        toasts.success(response.message);
                        session.dispatch(SessionAction::ClearedError);
                        navigator.push(&Route::Login);
                    }
                    Err(error) => toasts.error(error.user_message()),
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-xl shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 mb-6">{"Reset password"}</h1>
                {match *token_valid {
                    None => html! { <p class="text-sm text-gray-500">{"Checking your reset link..."}</p> },
                    Some(false) => html! {
                        <p class="text-sm text-red-600">
                            {"This reset link is invalid or has expired."}
                        </p>
                    },
                    Some(true) => html! {
                        <form onsubmit={on_submit} class="space-y-4">
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"New password"}</label>
                                <input type="password" required=true
                                    class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                                    value={(*password).clone()} oninput={bind(&password)} />
                            </div>
                            <div>
                                <label class="block text-sm font-medium text-gray-700 mb-1">{"Confirm password"}</label>
                                <input type="password" required=true
                                    class="block w-full px-3 py-2 border border-gray-300 rounded-md"
                                    value={(*confirmation).clone()} oninput={bind(&confirmation)} />
                            </div>
                            <button type="submit"
                                class="w-full py-2 px-4 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg">
                                {"Reset password"}
                            </button>
                        </form>
                    },
                }}
            </div>
        </div>
    }
}
