use leptos::prelude::*;

/// A display region a workflow writes into.
pub trait RenderTarget {
    fn set_text(&self, text: &str);
    fn set_html(&self, html: &str);
    fn set_visible(&self, visible: bool);
}

/// A region that additionally shows a progress bar.
pub trait ProgressTarget: RenderTarget {
    fn set_progress(&self, percent: u8);
}

/// Signals backing one container in the view. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct PanelSignals {
    pub text: RwSignal<String>,
    pub html: RwSignal<String>,
    pub visible: RwSignal<bool>,
    pub progress: RwSignal<u8>,
}

impl PanelSignals {
    pub fn new() -> Self {
        Self {
            text: RwSignal::new(String::new()),
            html: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
            progress: RwSignal::new(0),
        }
    }
}

impl Default for PanelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for PanelSignals {
    fn set_text(&self, text: &str) {
        self.text.set(text.to_string());
    }

    fn set_html(&self, html: &str) {
        self.html.set(html.to_string());
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

impl ProgressTarget for PanelSignals {
    fn set_progress(&self, percent: u8) {
        self.progress.set(percent.min(100));
    }
}
