use tracing::{debug, info, warn};

use super::target::RenderTarget;
use crate::api::AnalyticsApi;
use crate::error::{ApiError, DashboardError};
use crate::models::JobStatus;
use crate::render;

pub const JOBS_FAILED: &str = "Error al cargar trabajos";
pub const JOB_RESULTS_FAILED: &str = "Error al cargar resultados";

/// What opening a listed job ended up showing.
#[derive(Debug, Clone, PartialEq)]
pub enum JobView {
    /// Results rendered into the video results container.
    Completed,
    /// Not finished yet; only its status was shown.
    Pending(JobStatus),
}

fn pending_text(status: &JobStatus) -> String {
    format!("Trabajo {}: {} ({}%)", status.job_id, status.status, status.progress)
}

/// Fetch the backend's job list into `results`.
pub async fn refresh_jobs<A, R>(api: &A, results: &R) -> Result<usize, DashboardError>
where
    A: AnalyticsApi,
    R: RenderTarget,
{
    results.set_visible(true);
    results.set_html(&render::loading_html("Cargando trabajos..."));

    match api.list_jobs().await {
        Ok(list) => {
            debug!("Backend reports {} jobs", list.total);
            results.set_html(&render::render_job_list(&list));
            Ok(list.jobs.len())
        }
        Err(e) => {
            warn!("Listing jobs failed: {}", e);
            results.set_html(&render::error_html(&format!("Error: {}", JOBS_FAILED)));
            Err(DashboardError::Request(JOBS_FAILED.to_string()))
        }
    }
}

/// Poll one job and, once completed, show its analysis in `results`.
///
/// `note` is the inline line under the job list; it carries the job's status
/// while it is still running, or the error when a request fails.
pub async fn open_job<A, R, N>(api: &A, job_id: &str, results: &R, note: &N) -> Result<JobView, DashboardError>
where
    A: AnalyticsApi,
    R: RenderTarget,
    N: RenderTarget,
{
    note.set_visible(true);
    note.set_text(&format!("Consultando trabajo {}...", job_id));

    let failed = |e: ApiError| {
        warn!("Loading job {} failed: {}", job_id, e);
        note.set_text(&format!("Error: {}", JOB_RESULTS_FAILED));
        DashboardError::Request(JOB_RESULTS_FAILED.to_string())
    };

    let status = api.job_status(job_id).await.map_err(failed)?;
    if !status.is_completed() {
        debug!("Job {} is {} at {}%", job_id, status.status, status.progress);
        note.set_text(&pending_text(&status));
        return Ok(JobView::Pending(status));
    }

    let body = api.job_results(job_id).await.map_err(failed)?;
    match body.results {
        Some(analysis) => {
            results.set_html(&render::render_video_results(&analysis));
            results.set_visible(true);
            note.set_text(&format!("Resultados del trabajo {}", job_id));
            info!("Showing stored results of job {}", job_id);
            Ok(JobView::Completed)
        }
        None => {
            let pending = JobStatus {
                status: body.status,
                ..status
            };
            note.set_text(&pending_text(&pending));
            Ok(JobView::Pending(pending))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{fixtures, JobList, JobResults, JobSummary};
    use crate::workflow::fake::FakeApi;
    use crate::workflow::target::recording::RecordingTarget;

    #[tokio::test]
    async fn test_lists_jobs() {
        let mut api = FakeApi::new();
        api.jobs = Ok(JobList {
            total: 1,
            jobs: vec![JobSummary {
                id: "a1b2c3d4".to_string(),
                filename: "final.mp4".to_string(),
                status: "completed".to_string(),
                progress: 100,
            }],
        });
        let results = RecordingTarget::default();

        assert_eq!(refresh_jobs(&api, &results).await, Ok(1));
        assert!(results.html().contains("final.mp4"));
        assert!(results.visible());
    }

    #[tokio::test]
    async fn test_failure_is_shown_inline() {
        let mut api = FakeApi::new();
        api.jobs = Err(ApiError::Transport("offline".to_string()));
        let results = RecordingTarget::default();

        let err = refresh_jobs(&api, &results).await.unwrap_err();
        assert_eq!(err.to_string(), "Error al cargar trabajos");
        assert!(results.html().contains("Error: Error al cargar trabajos"));
    }

    fn status(job_id: &str, state: &str, progress: u8) -> JobStatus {
        JobStatus {
            job_id: job_id.to_string(),
            status: state.to_string(),
            progress,
            filename: Some("final.mp4".to_string()),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_completed_job_shows_results() {
        let mut api = FakeApi::new();
        api.status = Ok(status("a1b2c3d4", "completed", 100));
        api.results = Ok(JobResults {
            job_id: "a1b2c3d4".to_string(),
            status: "completed".to_string(),
            results: Some(fixtures::video_result(&[9, 4])),
            message: None,
        });
        let results = RecordingTarget::default();
        let note = RecordingTarget::default();

        assert_eq!(open_job(&api, "a1b2c3d4", &results, &note).await, Ok(JobView::Completed));
        assert_eq!(api.calls(), ["GET status a1b2c3d4", "GET results a1b2c3d4"]);
        assert!(results.visible());
        assert!(results.html().contains("Resultados del Análisis"));
        assert!(results.html().contains("#9"));
        assert_eq!(note.text(), "Resultados del trabajo a1b2c3d4");
    }

    #[tokio::test]
    async fn test_running_job_shows_status_inline() {
        let mut api = FakeApi::new();
        api.status = Ok(status("e5f6a7b8", "processing", 40));
        let results = RecordingTarget::default();
        let note = RecordingTarget::default();

        let view = open_job(&api, "e5f6a7b8", &results, &note).await.unwrap();
        assert!(matches!(view, JobView::Pending(ref s) if s.progress == 40));
        assert_eq!(api.calls(), ["GET status e5f6a7b8"], "Results are not fetched before completion");
        assert_eq!(note.text(), "Trabajo e5f6a7b8: processing (40%)");
        assert!(note.visible());
        assert!(!results.visible());
        assert!(results.html().is_empty());
    }

    #[tokio::test]
    async fn test_results_missing_despite_completed_status() {
        let mut api = FakeApi::new();
        api.status = Ok(status("a1b2c3d4", "completed", 100));
        api.results = Ok(JobResults {
            job_id: "a1b2c3d4".to_string(),
            status: "processing".to_string(),
            results: None,
            message: Some("El análisis aún no ha terminado".to_string()),
        });
        let results = RecordingTarget::default();
        let note = RecordingTarget::default();

        let view = open_job(&api, "a1b2c3d4", &results, &note).await.unwrap();
        assert!(matches!(view, JobView::Pending(ref s) if s.status == "processing"));
        assert_eq!(note.text(), "Trabajo a1b2c3d4: processing (100%)");
        assert!(!results.visible());
    }

    #[tokio::test]
    async fn test_job_lookup_http_error() {
        let mut api = FakeApi::new();
        api.status = Err(ApiError::Status(404));
        let results = RecordingTarget::default();
        let note = RecordingTarget::default();

        let err = open_job(&api, "gone", &results, &note).await.unwrap_err();
        assert_eq!(err, DashboardError::Request("Error al cargar resultados".to_string()));
        assert_eq!(note.text(), "Error: Error al cargar resultados");
        assert!(!results.visible());

        let mut api = FakeApi::new();
        api.status = Ok(status("a1b2c3d4", "completed", 100));
        api.results = Err(ApiError::Status(500));
        let err = open_job(&api, "a1b2c3d4", &results, &note).await.unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(note.text(), "Error: Error al cargar resultados");
    }
}
