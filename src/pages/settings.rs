use leptos::prelude::*;
use tracing::{info, warn};

use crate::config::{ConfigContext, DashboardConfig, DEFAULT_API_URL};
use crate::error::ConfigError;
use crate::render::TiePolicy;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ConfigContext { config } = expect_context();
    let current = config.get_untracked();
    let (api_url, set_api_url) = signal(current.api_base_url);
    let (tie_policy, set_tie_policy) = signal(current.tie_policy);
    let (status, set_status) = signal::<Option<Result<String, String>>>(None);

    let on_save = move |_| {
        let updated = DashboardConfig {
            api_base_url: api_url.get_untracked().trim().to_string(),
            tie_policy: tie_policy.get_untracked(),
            ..config.get_untracked()
        };

        match updated.save() {
            Ok(()) => {
                info!("Settings saved: backend {}, ties {}", updated.api_base_url, updated.tie_policy.id());
                config.set(updated);
                set_status.set(Some(Ok("Ajustes guardados".to_string())));
            }
            // Still valid, just not persisted; apply for this session.
            Err(ConfigError::Storage(e)) => {
                warn!("Settings applied but not persisted: {}", e);
                config.set(updated);
                set_status.set(Some(Ok("Ajustes aplicados (no se pudieron guardar)".to_string())));
            }
            Err(e) => {
                warn!("Rejected settings: {}", e);
                set_status.set(Some(Err(e.to_string())));
            }
        }
    };

    let on_reset = move |_| {
        let defaults = DashboardConfig::default();
        set_api_url.set(defaults.api_base_url);
        set_tie_policy.set(defaults.tie_policy);
        set_status.set(None);
    };

    view! {
        <div class="page settings-page">
            <h2>"Ajustes"</h2>

            <div class="settings-section">
                <label for="apiUrl">"URL del servidor de análisis"</label>
                <input
                    id="apiUrl"
                    type="text"
                    class="input"
                    placeholder=DEFAULT_API_URL
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
            </div>

            <div class="settings-section">
                <label for="tiePolicy">"Empates en ventajas calculadas localmente (xG, regates, pases)"</label>
                <select
                    id="tiePolicy"
                    class="input"
                    on:change=move |ev| {
                        if let Some(policy) = TiePolicy::from_id(&event_target_value(&ev)) {
                            set_tie_policy.set(policy);
                        }
                    }
                >
                    {TiePolicy::ALL
                        .into_iter()
                        .map(|policy| {
                            view! {
                                <option value=policy.id() selected=move || tie_policy.get() == policy>
                                    {policy.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <div class="action-buttons">
                <button class="btn btn-primary" on:click=on_save>"Guardar"</button>
                <button class="btn btn-secondary" on:click=on_reset>"Restablecer"</button>
            </div>

            {move || {
                status.get().map(|s| match s {
                    Ok(msg) => view! { <p class="status-text status-success">{msg}</p> }.into_any(),
                    Err(msg) => view! { <p class="status-text status-error">{msg}</p> }.into_any(),
                })
            }}
        </div>
    }
}
