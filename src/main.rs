mod api;
mod app;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod navigation;
mod pages;
mod render;
mod workflow;

use leptos::prelude::*;
use tracing::{info, warn};

use app::App;
use config::DashboardConfig;

fn main() {
    console_error_panic_hook::set_once();

    let stored = DashboardConfig::load();
    let config = match &stored {
        Ok(Some(saved)) => saved.clone(),
        _ => DashboardConfig::default(),
    };

    logging::init(&config.log_level);
    if let Err(e) = &stored {
        warn!("Using default settings: {}", e);
    }
    info!("⚽ Football Analytics Platform loaded (backend {})", config.api_base_url);

    leptos::mount::mount_to_body(move || view! { <App initial_config=config /> });
}
