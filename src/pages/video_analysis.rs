//! Video upload and analysis section.
//!
//! Users drop or pick a match video; it is uploaded, analyzed by the backend
//! and the tracking summary is shown below the progress bar.

use leptos::prelude::*;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::{api_client, INVALID_BACKEND};
use crate::components::panels::{ProgressPanel, ResultsPanel};
use crate::components::upload_zone::UploadZone;
use crate::config::ConfigContext;
use crate::render;
use crate::workflow::jobs::{open_job, refresh_jobs};
use crate::workflow::target::{PanelSignals, ProgressTarget, RenderTarget};
use crate::workflow::try_begin;
use crate::workflow::upload::{claim_upload, run_upload, UploadPhase};

/// Job id of the row action button under the click, if any.
fn clicked_job_id(ev: &web_sys::MouseEvent) -> Option<String> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&format!("[{}]", render::JOB_ID_ATTR)).ok().flatten())
        .and_then(|el| el.get_attribute(render::JOB_ID_ATTR))
}

#[component]
pub fn VideoAnalysisPage() -> impl IntoView {
    let ConfigContext { config } = expect_context();

    let progress = PanelSignals::new();
    let results = PanelSignals::new();
    let jobs = PanelSignals::new();
    let job_note = PanelSignals::new();
    let upload_notice = PanelSignals::new();
    let uploading = RwSignal::new(false);
    let loading_jobs = RwSignal::new(false);
    let opening_job = RwSignal::new(false);

    let on_file = move |file: web_sys::File| {
        let cfg = config.get_untracked();
        spawn_local(async move {
            let Some(_guard) = claim_upload(&uploading, &upload_notice) else {
                debug!("Dropped '{}' while busy", file.name());
                return;
            };
            let Some(api) = api_client(&cfg) else {
                progress.set_visible(true);
                progress.set_progress(UploadPhase::Idle.progress());
                progress.set_text(INVALID_BACKEND);
                return;
            };
            if let Err(e) = run_upload(&api, &file, &progress, &results).await {
                debug!("Upload workflow for '{}' ended with: {}", file.name(), e);
            }
            upload_notice.set_visible(false);
        });
    };

    let on_refresh_jobs = move |_| {
        let cfg = config.get_untracked();
        spawn_local(async move {
            let Some(_guard) = try_begin(&loading_jobs) else {
                return;
            };
            let Some(api) = api_client(&cfg) else {
                jobs.set_visible(true);
                jobs.set_html(&render::error_html(INVALID_BACKEND));
                return;
            };
            let _ = refresh_jobs(&api, &jobs).await;
        });
    };

    let on_jobs_click = move |ev: web_sys::MouseEvent| {
        let Some(job_id) = clicked_job_id(&ev) else {
            return;
        };
        let cfg = config.get_untracked();
        spawn_local(async move {
            let Some(_guard) = try_begin(&opening_job) else {
                return;
            };
            let Some(api) = api_client(&cfg) else {
                job_note.set_visible(true);
                job_note.set_text(INVALID_BACKEND);
                return;
            };
            if let Err(e) = open_job(&api, &job_id, &results, &job_note).await {
                debug!("Opening job {} ended with: {}", job_id, e);
            }
        });
    };

    view! {
        <div class="page video-page">
            <h2>"Análisis de Video"</h2>
            <p class="page-description">
                "Sube un video de un partido para detectar y seguir a los jugadores."
            </p>

            <UploadZone on_file=on_file busy=uploading />
            <p class="upload-notice" style:display=move || if upload_notice.visible.get() { "block" } else { "none" }>
                {move || upload_notice.text.get()}
            </p>
            <ProgressPanel panel=progress />
            <ResultsPanel panel=results class="video-results" />

            <div class="jobs-section">
                <div class="jobs-header">
                    <h3>"Trabajos Recientes"</h3>
                    <button
                        class="btn btn-secondary"
                        on:click=on_refresh_jobs
                        disabled=move || loading_jobs.get()
                    >
                        {move || if loading_jobs.get() { "Cargando..." } else { "Actualizar" }}
                    </button>
                </div>
                <div on:click=on_jobs_click>
                    <ResultsPanel panel=jobs class="jobs-results" />
                </div>
                <p class="status-text job-note" style:display=move || if job_note.visible.get() { "block" } else { "none" }>
                    {move || job_note.text.get()}
                </p>
            </div>
        </div>
    }
}
