//! Application shell for authenticated pages

use crate::permissions::use_permissions;
use crate::routes::Route;
use crate::session::{logout, use_session};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let session = use_session();
    let permissions = use_permissions();
    let navigator = use_navigator().expect("layout renders inside the router");

    let user_name = session
        .user
        .as_ref()
        .map(assetra_core::User::full_name)
        .unwrap_or_default();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                logout(&session).await;
                navigator.push(&Route::Login);
            });
        })
    };

    html! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 py-3 flex items-center justify-between">
                    <div class="flex items-center gap-6">
                        <Link<Route> to={Route::Dashboard} classes="text-xl font-bold text-blue-600">
                            {"Assetra"}
                        </Link<Route>>
                        <nav class="flex items-center gap-4 text-sm text-gray-600">
                            <Link<Route> to={Route::Dashboard} classes="hover:text-gray-900">{"Dashboard"}</Link<Route>>
                            <Link<Route> to={Route::Assets} classes="hover:text-gray-900">{"Assets"}</Link<Route>>
                            <Link<Route> to={Route::Employees} classes="hover:text-gray-900">{"Employees"}</Link<Route>>
                            <Link<Route> to={Route::Software} classes="hover:text-gray-900">{"Software"}</Link<Route>>
                            <Link<Route> to={Route::Transactions} classes="hover:text-gray-900">{"Transactions"}</Link<Route>>
                            if permissions.is_admin {
                                <Link<Route> to={Route::Settings} classes="hover:text-gray-900">{"Settings"}</Link<Route>>
                            }
                        </nav>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="text-sm text-gray-500">{user_name}</span>
                        <button
                            onclick={on_logout}
                            class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-lg"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </header>
            <main class="flex-1 max-w-7xl w-full mx-auto px-4 py-6">
                {props.children.clone()}
            </main>
        </div>
    }
}
