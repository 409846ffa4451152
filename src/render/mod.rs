//! HTML fragment builders for the result containers.
//!
//! Every function here is pure: payload in, markup out. Backend strings are
//! escaped before they reach the markup.

pub(crate) mod table;
mod video;

pub use table::{render_comparison, Comparison, TiePolicy};
pub use video::{render_job_list, render_video_results, JOB_ID_ATTR};

/// Escape text for safe interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Spinner shown while a request is in flight.
pub fn loading_html(message: &str) -> String {
    format!(
        r#"<div class="loading"><div class="spinner"></div><span>{}</span></div>"#,
        escape_html(message)
    )
}

pub fn error_html(message: &str) -> String {
    format!(r#"<div class="error-message">{}</div>"#, escape_html(message))
}

/// Backend numbers are printed as-is, except that `-0` reads as `0`.
pub(crate) fn number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn result_card(label: &str, value: &str) -> String {
    format!(
        r#"<div class="result-card"><div class="label">{}</div><div class="value">{}</div></div>"#,
        escape_html(label),
        escape_html(value)
    )
}
