//! Payloads exchanged with the analytics backend.
//!
//! All of these are request-scoped view models: decoded once, rendered once,
//! then dropped when the next invocation replaces the view.

use serde::{Deserialize, Serialize};

// -- Video upload / analysis --

/// Handle for one uploaded video, returned by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadJob {
    pub job_id: String,
}

/// Wrapper matching the analyze endpoint's `{ results: ... }` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzeResponse {
    pub results: VideoAnalysisResult,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VideoAnalysisResult {
    pub video_info: VideoInfo,
    pub detection_summary: DetectionSummary,
    #[serde(default)]
    pub player_metrics: Vec<PlayerMetric>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VideoInfo {
    pub duration_sec: f64,
    pub fps: f64,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub total_frames: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DetectionSummary {
    pub total_detections: u64,
    pub unique_players: u64,
    #[serde(default)]
    pub player_detections: Option<u64>,
    #[serde(default)]
    pub ball_detections: Option<u64>,
}

/// Per-tracker activity, already sorted by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerMetric {
    pub tracker_id: i64,
    pub frames_tracked: u64,
    pub distance_px: f64,
}

// -- Job listing --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobSummary {
    pub id: String,
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobList {
    pub total: usize,
    #[serde(default)]
    pub jobs: Vec<JobSummary>,
}

/// Body of the status endpoint; polled for a single job.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobStatus {
    pub job_id: String,
    pub status: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl JobStatus {
    pub fn is_completed(&self) -> bool {
        self.status == JOB_COMPLETED
    }
}

pub const JOB_COMPLETED: &str = "completed";

/// Body of the results endpoint. `results` is only present once the job has
/// completed; otherwise the backend sends a `message` instead.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct JobResults {
    pub job_id: String,
    pub status: String,
    #[serde(default)]
    pub results: Option<VideoAnalysisResult>,
    #[serde(default)]
    pub message: Option<String>,
}

// -- Comparisons --

/// Wrapper matching both compare endpoints' `{ comparison: ... }` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompareResponse<T> {
    pub comparison: T,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamStats {
    pub team: String,
    pub goals: u32,
    pub xg: f64,
    pub pass_accuracy: f64,
    pub pressures_per_game: f64,
    pub conversion_rate: f64,
    pub dribble_success: f64,
    #[serde(default)]
    pub matches: Option<u32>,
    #[serde(default)]
    pub shots: Option<u32>,
}

/// Server-computed advantage fields for a team comparison. Each names a team.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamVerdicts {
    pub more_goals: String,
    pub better_passing: String,
    pub more_pressing: String,
    pub more_efficient: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamComparison {
    pub team1: TeamStats,
    pub team2: TeamStats,
    pub comparison: TeamVerdicts,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerStats {
    pub player: String,
    pub goals: u32,
    pub assists: u32,
    pub xg: f64,
    pub goals_over_xg: f64,
    pub key_passes: u32,
    pub pass_accuracy: f64,
    pub dribbles_successful: u32,
    pub dribbles_attempted: u32,
    pub dribble_success_rate: f64,
    #[serde(default)]
    pub matches: Option<u32>,
}

/// Server-computed advantage fields for a player comparison.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerVerdicts {
    pub more_goals: String,
    pub more_assists: String,
    pub better_conversion: String,
    pub more_creative: String,
    pub better_dribbler: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerComparison {
    pub player1: PlayerStats,
    pub player2: PlayerStats,
    pub comparison: PlayerVerdicts,
}

/// Some backend services answer failures with HTTP 200 and `{ "error": ... }`.
/// Variant order matters: the error shape is tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Envelope<T> {
    Failure { error: String },
    Success(T),
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn team(name: &str, goals: u32, xg: f64, dribble_success: f64) -> TeamStats {
        TeamStats {
            team: name.to_string(),
            goals,
            xg,
            pass_accuracy: 85.0,
            pressures_per_game: 140.5,
            conversion_rate: 12.3,
            dribble_success,
            matches: None,
            shots: None,
        }
    }

    pub fn team_comparison(t1: TeamStats, t2: TeamStats) -> TeamComparison {
        let first = t1.team.clone();
        let second = t2.team.clone();
        TeamComparison {
            team1: t1,
            team2: t2,
            comparison: TeamVerdicts {
                more_goals: first.clone(),
                better_passing: second.clone(),
                more_pressing: first,
                more_efficient: second,
            },
        }
    }

    pub fn player(name: &str, xg: f64, pass_accuracy: f64) -> PlayerStats {
        PlayerStats {
            player: name.to_string(),
            goals: 7,
            assists: 3,
            xg,
            goals_over_xg: 0.0,
            key_passes: 21,
            pass_accuracy,
            dribbles_successful: 15,
            dribbles_attempted: 24,
            dribble_success_rate: 62.5,
            matches: None,
        }
    }

    pub fn player_comparison(p1: PlayerStats, p2: PlayerStats) -> PlayerComparison {
        let first = p1.player.clone();
        let second = p2.player.clone();
        PlayerComparison {
            player1: p1,
            player2: p2,
            comparison: PlayerVerdicts {
                more_goals: "Empate".to_string(),
                more_assists: first.clone(),
                better_conversion: second.clone(),
                more_creative: first,
                better_dribbler: second,
            },
        }
    }

    pub fn video_result(trackers: &[i64]) -> VideoAnalysisResult {
        VideoAnalysisResult {
            video_info: VideoInfo {
                duration_sec: 30.0,
                fps: 25.0,
                resolution: None,
                total_frames: None,
            },
            detection_summary: DetectionSummary {
                total_detections: 1840,
                unique_players: trackers.len() as u64,
                player_detections: None,
                ball_detections: None,
            },
            player_metrics: trackers
                .iter()
                .enumerate()
                .map(|(i, &id)| PlayerMetric {
                    tracker_id: id,
                    frames_tracked: 700 - i as u64 * 100,
                    distance_px: 5000.0 - i as f64 * 1000.0,
                })
                .collect(),
        }
    }
}
