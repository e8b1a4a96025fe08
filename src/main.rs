#![allow(warnings)]
//! Project Board Frontend Entry Point

mod commands;
mod config;
mod context;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::load_config();
    logger::init(config.level_filter());
    log::info!("board for project {} at {}", config.project_id, config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
