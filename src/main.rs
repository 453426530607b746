mod components;
mod config;
mod context;
mod models;
mod navigation;
mod routes;
mod services;
mod utils;
mod views;

use views::App;

fn main() {
    console_error_panic_hook::set_once();
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 QuickDesk starting...");

    yew::Renderer::<App>::new().render();
}
