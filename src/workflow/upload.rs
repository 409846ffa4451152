//! Two-step video workflow: upload the file, then trigger analysis on the
//! returned job.
//!
//! ```text
//! Idle -> Uploading -> Analyzing -> Done
//!            |            |
//!            +-> Failed <-+
//! ```

use tracing::{info, warn};

use super::target::{ProgressTarget, RenderTarget};
use super::{try_begin, BusyFlag, BusyGuard};
use crate::api::AnalyticsApi;
use crate::error::DashboardError;
use crate::models::VideoAnalysisResult;
use crate::render;

pub const UPLOAD_FAILED: &str = "Error al subir";
pub const ANALYZE_FAILED: &str = "Error al analizar";
pub const UPLOAD_IN_PROGRESS: &str = "Ya hay un análisis en curso";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading,
    Analyzing,
    Done,
    Failed(String),
}

impl UploadPhase {
    /// Approximate progress shown for the phase.
    pub fn progress(&self) -> u8 {
        match self {
            UploadPhase::Idle => 0,
            UploadPhase::Uploading => 20,
            UploadPhase::Analyzing => 50,
            UploadPhase::Done => 100,
            UploadPhase::Failed(_) => 0,
        }
    }

    pub fn status_text(&self) -> String {
        match self {
            UploadPhase::Idle => String::new(),
            UploadPhase::Uploading => "Subiendo video...".to_string(),
            UploadPhase::Analyzing => "Analizando con YOLO...".to_string(),
            UploadPhase::Done => "¡Completado!".to_string(),
            UploadPhase::Failed(message) => format!("Error: {}", message),
        }
    }
}

fn enter<P: ProgressTarget>(progress: &P, phase: &UploadPhase) {
    progress.set_progress(phase.progress());
    progress.set_text(&phase.status_text());
}

/// Claim the upload workflow for a new file. A refused claim is reported in
/// `notice`; the running upload's progress is left untouched.
pub fn claim_upload<'a, B, N>(flag: &'a B, notice: &N) -> Option<BusyGuard<'a, B>>
where
    B: BusyFlag,
    N: RenderTarget,
{
    match try_begin(flag) {
        Some(guard) => {
            notice.set_visible(false);
            Some(guard)
        }
        None => {
            warn!("Upload already in progress, ignoring new file");
            notice.set_text(UPLOAD_IN_PROGRESS);
            notice.set_visible(true);
            None
        }
    }
}

/// Run one upload + analyze sequence for `file`.
///
/// Both containers are reset first. The results container only becomes
/// visible on success; on failure the progress bar drops back to 0% and the
/// status line carries the error.
pub async fn run_upload<A, P, R>(
    api: &A,
    file: &A::File,
    progress: &P,
    results: &R,
) -> Result<VideoAnalysisResult, DashboardError>
where
    A: AnalyticsApi,
    P: ProgressTarget,
    R: RenderTarget,
{
    progress.set_visible(true);
    results.set_visible(false);
    results.set_html("");

    match upload_and_analyze(api, file, progress).await {
        Ok(analysis) => {
            enter(progress, &UploadPhase::Done);
            results.set_html(&render::render_video_results(&analysis));
            results.set_visible(true);
            info!(
                "Analysis complete: {} trackers, {} detections",
                analysis.player_metrics.len(),
                analysis.detection_summary.total_detections
            );
            Ok(analysis)
        }
        Err(err) => {
            enter(progress, &UploadPhase::Failed(err.to_string()));
            Err(err)
        }
    }
}

async fn upload_and_analyze<A, P>(
    api: &A,
    file: &A::File,
    progress: &P,
) -> Result<VideoAnalysisResult, DashboardError>
where
    A: AnalyticsApi,
    P: ProgressTarget,
{
    enter(progress, &UploadPhase::Uploading);
    let job = api.upload_video(file).await.map_err(|e| {
        warn!("Video upload failed: {}", e);
        DashboardError::Request(UPLOAD_FAILED.to_string())
    })?;
    info!("Video uploaded as job {}", job.job_id);

    enter(progress, &UploadPhase::Analyzing);
    // The uploaded job is left on the backend if analysis fails.
    api.analyze_video(&job.job_id).await.map_err(|e| {
        warn!("Analysis of job {} failed: {}", job.job_id, e);
        DashboardError::Request(ANALYZE_FAILED.to_string())
    })
}
