pub mod player_comparison;
pub mod settings;
pub mod team_comparison;
pub mod video_analysis;

use tracing::error;

use crate::api::HttpApi;
use crate::config::DashboardConfig;

pub(crate) const INVALID_BACKEND: &str = "Error: URL del servidor no válida";

/// Blocking prompt used for validation errors.
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Client for the currently configured backend.
pub(crate) fn api_client(config: &DashboardConfig) -> Option<HttpApi> {
    match HttpApi::new(&config.api_base_url) {
        Ok(api) => Some(api),
        Err(e) => {
            error!("Cannot reach backend '{}': {}", config.api_base_url, e);
            None
        }
    }
}
