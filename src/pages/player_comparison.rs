use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::{alert, api_client, INVALID_BACKEND};
use crate::components::panels::{EntitySelect, ResultsPanel};
use crate::config::ConfigContext;
use crate::render;
use crate::workflow::compare::compare_players;
use crate::workflow::target::{PanelSignals, RenderTarget};
use crate::workflow::try_begin;

const PLAYERS: &[&str] = &[
    "Lionel Messi",
    "Kylian Mbappé",
    "Julián Álvarez",
    "Olivier Giroud",
    "Luka Modrić",
    "Antoine Griezmann",
    "Cody Gakpo",
    "Bukayo Saka",
    "Richarlison",
    "Álvaro Morata",
];

#[component]
pub fn PlayerComparisonPage() -> impl IntoView {
    let ConfigContext { config } = expect_context();
    let (player1, set_player1) = signal(String::new());
    let (player2, set_player2) = signal(String::new());
    let results = PanelSignals::new();
    let busy = RwSignal::new(false);

    let on_compare = move |_| {
        let (first, second) = (player1.get_untracked(), player2.get_untracked());
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
            if let Err(e) = compare_players(&api, &first, &second, &results, cfg.tie_policy).await {
                if e.is_validation() {
                    alert(&e.to_string());
                }
            }
        });
    };

    view! {
        <div class="page players-page">
            <h2>"Comparación de Jugadores"</h2>
            <p class="page-description">
                "Goles, asistencias, xG, pases clave y regates cara a cara."
            </p>

            <div class="selector-row">
                <EntitySelect id="player1Select" label="Jugador 1" placeholder="Selecciona un jugador" options=PLAYERS set_value=set_player1 />
                <span class="versus">"vs"</span>
                <EntitySelect id="player2Select" label="Jugador 2" placeholder="Selecciona un jugador" options=PLAYERS set_value=set_player2 />
            </div>

            <button class="btn btn-primary" on:click=on_compare disabled=move || busy.get()>
                {move || if busy.get() { "Comparando..." } else { "Comparar Jugadores" }}
            </button>

            <ResultsPanel panel=results class="players-results" />
        </div>
    }
}
