use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen bg-gray-50 flex flex-col items-center justify-center gap-4">
            <h1 class="text-4xl font-bold text-gray-900">{"404"}</h1>
            <p class="text-gray-500">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline">
                {"Back to the dashboard"}
            </Link<Route>>
        </div>
    }
}
