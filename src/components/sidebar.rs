use leptos::prelude::*;
use tracing::warn;

use crate::navigation::{Navigator, Section};

#[component]
pub fn Sidebar(nav: RwSignal<Navigator>) -> impl IntoView {
    // Each link passes its own section id; nothing is read from an ambient event.
    let on_navigate = move |section_id: &'static str| {
        let mut result = Ok(Section::default());
        nav.update(|n| result = n.activate(section_id));
        match result {
            Ok(section) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_hash(section.id());
                }
            }
            Err(e) => warn!("Navigation ignored: {}", e),
        }
    };

    view! {
        <nav class="sidebar">
            <div class="sidebar-header">
                <h1 class="sidebar-title">"⚽ Football Analytics"</h1>
                <p class="sidebar-subtitle">"Video, equipos y jugadores"</p>
            </div>
            <ul class="nav-list">
                {Section::ALL
                    .into_iter()
                    .map(move |section| {
                        view! {
                            <li class="nav-item">
                                <a
                                    href=format!("#{}", section.id())
                                    class="nav-link"
                                    class:active=move || nav.with(|n| n.is_active(section))
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.prevent_default();
                                        on_navigate(section.id());
                                    }
                                >
                                    {section.label()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
