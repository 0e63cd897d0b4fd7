mod app;
mod client;
mod components;
mod config;
mod pages;
mod permissions;
mod routes;
mod session;
mod toast;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
