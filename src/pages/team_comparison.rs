use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{alert, api_client, INVALID_BACKEND};
use crate::components::panels::{EntitySelect, ResultsPanel};
use crate::config::ConfigContext;
use crate::render;
use crate::workflow::compare::compare_teams;
use crate::workflow::target::{PanelSignals, RenderTarget};
use crate::workflow::try_begin;

/// World Cup 2022 sides available in the backend's event data.
const TEAMS: &[&str] = &[
    "Argentina",
    "France",
    "Croatia",
    "Morocco",
    "Brazil",
    "England",
    "Portugal",
    "Netherlands",
    "Spain",
    "Germany",
];

#[component]
pub fn TeamComparisonPage() -> impl IntoView {
    let ConfigContext { config } = expect_context();
    let (team1, set_team1) = signal(String::new());
    let (team2, set_team2) = signal(String::new());
    let results = PanelSignals::new();
    let busy = RwSignal::new(false);

    let on_compare = move |_| {
        let (first, second) = (team1.get_untracked(), team2.get_untracked());
        let cfg = config.get_untracked();
        spawn_local(async move {
            let Some(_guard) = try_begin(&busy) else {
                return;
            };
            let Some(api) = api_client(&cfg) else {
                results.set_visible(true);
                results.set_html(&render::error_html(INVALID_BACKEND));
                return;
            };
            if let Err(e) = compare_teams(&api, &first, &second, &results, cfg.tie_policy).await {
                if e.is_validation() {
                    alert(&e.to_string());
                }
            }
        });
    };

    view! {
        <div class="page teams-page">
            <h2>"Comparación de Equipos"</h2>
            <p class="page-description">
                "Compara el estilo de juego de dos selecciones del Mundial 2022."
            </p>

            <div class="selector-row">
                <EntitySelect id="team1Select" label="Equipo 1" placeholder="Selecciona un equipo" options=TEAMS set_value=set_team1 />
                <span class="versus">"vs"</span>
                <EntitySelect id="team2Select" label="Equipo 2" placeholder="Selecciona un equipo" options=TEAMS set_value=set_team2 />
            </div>

            <button class="btn btn-primary" on:click=on_compare disabled=move || busy.get()>
                {move || if busy.get() { "Comparando..." } else { "Comparar Equipos" }}
            </button>

            <ResultsPanel panel=results class="teams-results" />
        </div>
    }
}
