//! Drag-and-drop target with a file-picker fallback.
//!
//! Only the first file of a drop or selection is used.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn UploadZone(
    /// Called with the picked video.
    on_file: impl Fn(web_sys::File) + 'static + Copy + Send + Sync,
    /// True while an upload is running; the zone is dimmed and the picker disabled.
    busy: RwSignal<bool>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "video-file-input";

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            on_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let file = input.files().and_then(|files| files.get(0));
        // Reset so picking the same file again still fires `change`.
        input.set_value("");
        if let Some(file) = file {
            on_file(file);
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || is_over.get()
            class:busy=move || busy.get()
            on:dragover=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                set_is_over.set(true);
            }
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=on_drop
        >
            <div class="upload-icon">"🎥"</div>
            <p class="upload-main">"Arrastra un video de un partido aquí"</p>
            <p class="upload-hint">"o"</p>
            <label for=file_input_id class="btn btn-secondary">
                "Seleccionar archivo"
            </label>
            <input
                type="file"
                id=file_input_id
                accept="video/*"
                style="display: none"
                disabled=move || busy.get()
                on:change=on_input_change
            />
            <p class="upload-formats">"MP4, AVI, MOV, MKV"</p>
        </div>
    }
}
