//! Todo Client Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod editor;
mod filter;
mod logging;
mod models;
mod notice;
mod store;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_build_env();
    logging::init(config.log_level);
    log::info!("[APP] Starting for user {} against {}", config.user_id, config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
