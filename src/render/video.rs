use super::{escape_html, number, result_card};
use crate::models::{JobList, VideoAnalysisResult, JOB_COMPLETED};

/// Attribute carrying the job id on each job row's action button.
pub const JOB_ID_ATTR: &str = "data-job-id";

pub fn render_video_results(results: &VideoAnalysisResult) -> String {
    let info = &results.video_info;
    let summary = &results.detection_summary;

    let mut cards = vec![
        result_card("Duración", &format!("{}s", number(info.duration_sec))),
        result_card("FPS", &number(info.fps)),
        result_card("Detecciones", &summary.total_detections.to_string()),
        result_card("Jugadores Únicos", &summary.unique_players.to_string()),
    ];
    if let Some(resolution) = &info.resolution {
        cards.push(result_card("Resolución", resolution));
    }
    if let Some(frames) = info.total_frames {
        cards.push(result_card("Frames Totales", &frames.to_string()));
    }
    if let Some(players) = summary.player_detections {
        cards.push(result_card("Detecciones de Jugadores", &players.to_string()));
    }
    if let Some(balls) = summary.ball_detections {
        cards.push(result_card("Detecciones de Balón", &balls.to_string()));
    }

    // Backend order is preserved; rank is position in the list.
    let rows: String = results
        .player_metrics
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "<tr><td>{}</td><td>#{}</td><td>{}</td><td>{}</td></tr>\n",
                i + 1,
                p.tracker_id,
                p.frames_tracked,
                number(p.distance_px)
            )
        })
        .collect();

    format!(
        r#"<h3>📊 Resultados del Análisis</h3>
<div class="results-grid">{cards}</div>
<h4>🏃 Top Jugadores por Actividad</h4>
<table class="comparison-table">
<thead><tr><th>Rank</th><th>ID</th><th>Frames</th><th>Distancia (px)</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        cards = cards.concat(),
        rows = rows,
    )
}

/// Table of the jobs the backend currently knows about.
pub fn render_job_list(list: &JobList) -> String {
    if list.jobs.is_empty() {
        return r#"<p class="empty-hint">No hay trabajos todavía</p>"#.to_string();
    }

    let rows: String = list
        .jobs
        .iter()
        .map(|job| {
            let action = if job.status == JOB_COMPLETED {
                "Ver resultados"
            } else {
                "Ver estado"
            };
            format!(
                "<tr><td>{}</td><td>{}</td><td><span class=\"job-status job-{}\">{}</span></td><td>{}%</td>\
                 <td><button class=\"btn btn-small\" {}=\"{}\">{}</button></td></tr>\n",
                escape_html(&job.id),
                escape_html(&job.filename),
                escape_html(&job.status.to_lowercase()),
                escape_html(&job.status),
                job.progress,
                JOB_ID_ATTR,
                escape_html(&job.id),
                action
            )
        })
        .collect();

    format!(
        r#"<p class="jobs-total">{total} trabajos</p>
<table class="comparison-table">
<thead><tr><th>ID</th><th>Archivo</th><th>Estado</th><th>Progreso</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        total = list.total,
        rows = rows,
    )
}
