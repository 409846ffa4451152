//! Side-by-side comparison of two teams or two players.

use std::future::Future;

use tracing::{info, warn};

use super::target::RenderTarget;
use crate::api::AnalyticsApi;
use crate::error::{ApiError, DashboardError};
use crate::render::{self, Comparison, TiePolicy};

/// User-facing texts for one kind of comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareKind {
    pub subject: &'static str,
    pub prompt: &'static str,
    pub loading: &'static str,
    pub failure: &'static str,
}

pub const TEAMS: CompareKind = CompareKind {
    subject: "teams",
    prompt: "Por favor selecciona ambos equipos",
    loading: "Analizando equipos...",
    failure: "Error al comparar equipos",
};

pub const PLAYERS: CompareKind = CompareKind {
    subject: "players",
    prompt: "Por favor selecciona ambos jugadores",
    loading: "Analizando jugadores...",
    failure: "Error al comparar jugadores",
};

pub async fn compare_teams<A, R>(
    api: &A,
    team1: &str,
    team2: &str,
    results: &R,
    ties: TiePolicy,
) -> Result<(), DashboardError>
where
    A: AnalyticsApi,
    R: RenderTarget,
{
    let (first, second) = (team1.trim(), team2.trim());
    run_comparison(&TEAMS, first, second, results, ties, api.compare_teams(first, second)).await
}

pub async fn compare_players<A, R>(
    api: &A,
    player1: &str,
    player2: &str,
    results: &R,
    ties: TiePolicy,
) -> Result<(), DashboardError>
where
    A: AnalyticsApi,
    R: RenderTarget,
{
    let (first, second) = (player1.trim(), player2.trim());
    run_comparison(&PLAYERS, first, second, results, ties, api.compare_players(first, second)).await
}

/// `fetch` is lazy: it is only awaited once both identifiers are present, so
/// a failed validation issues no request.
async fn run_comparison<C, R, F>(
    kind: &CompareKind,
    first: &str,
    second: &str,
    results: &R,
    ties: TiePolicy,
    fetch: F,
) -> Result<(), DashboardError>
where
    C: Comparison,
    R: RenderTarget,
    F: Future<Output = Result<C, ApiError>>,
{
    if first.is_empty() || second.is_empty() {
        return Err(DashboardError::Validation(kind.prompt.to_string()));
    }

    results.set_visible(true);
    results.set_html(&render::loading_html(kind.loading));

    match fetch.await {
        Ok(data) => {
            results.set_html(&render::render_comparison(&data, ties));
            info!("Compared {}: {} vs {}", kind.subject, first, second);
            Ok(())
        }
        Err(e) => {
            warn!("Comparing {} {} vs {} failed: {}", kind.subject, first, second, e);
            results.set_html(&render::error_html(&format!("Error: {}", kind.failure)));
            Err(DashboardError::Request(kind.failure.to_string()))
        }
    }
}
