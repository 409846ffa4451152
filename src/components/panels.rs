use leptos::prelude::*;

use crate::workflow::target::PanelSignals;

fn display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// Progress bar plus status line driven by a workflow.
#[component]
pub fn ProgressPanel(panel: PanelSignals) -> impl IntoView {
    view! {
        <div class="progress-container" style:display=move || display(panel.visible.get())>
            <div class="progress-track">
                <div
                    class="progress-bar"
                    style:width=move || format!("{}%", panel.progress.get())
                ></div>
            </div>
            <p class="progress-status">{move || panel.text.get()}</p>
        </div>
    }
}

/// Container whose markup is produced by the render helpers.
#[component]
pub fn ResultsPanel(
    panel: PanelSignals,
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=format!("results {}", class)
            style:display=move || display(panel.visible.get())
            inner_html=move || panel.html.get()
        ></div>
    }
}

/// Two-way picker for a comparison side.
#[component]
pub fn EntitySelect(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="select-group">
            <label for=id>{label}</label>
            <select id=id class="input" on:change=move |ev| set_value.set(event_target_value(&ev))>
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|name| view! { <option value=*name>{*name}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
