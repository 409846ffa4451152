//! Client for the analytics backend.
//!
//! The backend is an opaque HTTP service; non-2xx is the only failure signal
//! consulted and error bodies are never parsed.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::models::{
    AnalyzeResponse, CompareResponse, Envelope, JobList, JobResults, JobStatus, PlayerComparison,
    TeamComparison, UploadJob, VideoAnalysisResult,
};

/// Endpoint URLs relative to a configurable base. Any path prefix on the base
/// (e.g. a reverse-proxy mount point) is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!("'{}' cannot be a base URL", base_url)));
        }
        Ok(Self { base })
    }

    fn path(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn upload(&self) -> Url {
        self.path(&["api", "video", "upload"])
    }

    /// The job id is a single path segment; reserved characters are encoded.
    pub fn analyze(&self, job_id: &str) -> Url {
        self.path(&["api", "video", "analyze", job_id])
    }

    pub fn teams_compare(&self, team1: &str, team2: &str) -> Url {
        let mut url = self.path(&["api", "teams", "compare"]);
        url.query_pairs_mut()
            .append_pair("team1", team1)
            .append_pair("team2", team2);
        url
    }

    pub fn players_compare(&self, player1: &str, player2: &str) -> Url {
        let mut url = self.path(&["api", "players", "compare"]);
        url.query_pairs_mut()
            .append_pair("player1", player1)
            .append_pair("player2", player2);
        url
    }

    pub fn jobs(&self) -> Url {
        self.path(&["api", "jobs"])
    }

    pub fn status(&self, job_id: &str) -> Url {
        self.path(&["api", "status", job_id])
    }

    pub fn results(&self, job_id: &str) -> Url {
        self.path(&["api", "results", job_id])
    }
}

/// Decode a 2xx response body, treating `{ "error": ... }` as a failure.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(Envelope::Success(value)) => Ok(value),
        Ok(Envelope::Failure { error }) => Err(ApiError::Backend(error)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Operations the dashboard needs from the backend.
///
/// `File` is whatever handle the caller has for the picked video; the browser
/// client uses `web_sys::File`.
#[allow(async_fn_in_trait)]
pub trait AnalyticsApi {
    type File;

    async fn upload_video(&self, file: &Self::File) -> Result<UploadJob, ApiError>;
    async fn analyze_video(&self, job_id: &str) -> Result<VideoAnalysisResult, ApiError>;
    async fn compare_teams(&self, team1: &str, team2: &str) -> Result<TeamComparison, ApiError>;
    async fn compare_players(&self, player1: &str, player2: &str) -> Result<PlayerComparison, ApiError>;
    async fn list_jobs(&self) -> Result<JobList, ApiError>;
    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ApiError>;
    async fn job_results(&self, job_id: &str) -> Result<JobResults, ApiError>;
}

/// `fetch`-backed implementation used in the browser.
#[derive(Debug, Clone)]
pub struct HttpApi {
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            endpoints: Endpoints::new(base_url)?,
        })
    }

    async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.ok() {
            warn!("{} returned HTTP {}", response.url(), response.status());
            return Err(ApiError::Status(response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode_body(&body)
    }

    async fn get<T: DeserializeOwned>(url: Url) -> Result<T, ApiError> {
        debug!("GET {}", url);
        let response = Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read(response).await
    }
}

impl AnalyticsApi for HttpApi {
    type File = web_sys::File;

    async fn upload_video(&self, file: &web_sys::File) -> Result<UploadJob, ApiError> {
        let url = self.endpoints.upload();
        debug!("POST {} ({}, {} bytes)", url, file.name(), file.size());

        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Transport(format!("Failed to create form data: {:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Transport(format!("Failed to attach file: {:?}", e)))?;

        let response = Request::post(url.as_str())
            .body(form)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read(response).await
    }

    async fn analyze_video(&self, job_id: &str) -> Result<VideoAnalysisResult, ApiError> {
        let url = self.endpoints.analyze(job_id);
        debug!("POST {}", url);
        let response = Request::post(url.as_str())
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read::<AnalyzeResponse>(response)
            .await
            .map(|r| r.results)
    }

    async fn compare_teams(&self, team1: &str, team2: &str) -> Result<TeamComparison, ApiError> {
        Self::get::<CompareResponse<TeamComparison>>(self.endpoints.teams_compare(team1, team2))
            .await
            .map(|r| r.comparison)
    }

    async fn compare_players(&self, player1: &str, player2: &str) -> Result<PlayerComparison, ApiError> {
        Self::get::<CompareResponse<PlayerComparison>>(self.endpoints.players_compare(player1, player2))
            .await
            .map(|r| r.comparison)
    }

    async fn list_jobs(&self) -> Result<JobList, ApiError> {
        Self::get(self.endpoints.jobs()).await
    }

    async fn job_status(&self, job_id: &str) -> Result<JobStatus, ApiError> {
        Self::get(self.endpoints.status(job_id)).await
    }

    async fn job_results(&self, job_id: &str) -> Result<JobResults, ApiError> {
        Self::get(self.endpoints.results(job_id)).await
    }
}
