use leptos::prelude::*;
use tracing::warn;

use crate::components::sidebar::Sidebar;
use crate::config::{ConfigContext, DashboardConfig};
use crate::navigation::{Navigator, Section};
use crate::pages::player_comparison::PlayerComparisonPage;
use crate::pages::settings::SettingsPage;
use crate::pages::team_comparison::TeamComparisonPage;
use crate::pages::video_analysis::VideoAnalysisPage;

#[component]
pub fn App(initial_config: DashboardConfig) -> impl IntoView {
    let config = RwSignal::new(initial_config);
    provide_context(ConfigContext { config });

    // Deep links such as `#players` open that panel directly.
    let fragment = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let (navigator, unknown) = Navigator::from_fragment(&fragment);
    if let Some(e) = unknown {
        warn!("{}, showing '{}' instead", e, navigator.active().id());
    }
    let nav = RwSignal::new(navigator);

    view! {
        <div class="app-layout">
            <Sidebar nav=nav />
            <main class="content">
                <Panel section=Section::Video nav=nav>
                    <VideoAnalysisPage />
                </Panel>
                <Panel section=Section::Teams nav=nav>
                    <TeamComparisonPage />
                </Panel>
                <Panel section=Section::Players nav=nav>
                    <PlayerComparisonPage />
                </Panel>
                <Panel section=Section::Settings nav=nav>
                    <SettingsPage />
                </Panel>
            </main>
        </div>
    }
}

/// One dashboard section; shown only while it is the active one.
#[component]
fn Panel(section: Section, nav: RwSignal<Navigator>, children: Children) -> impl IntoView {
    view! {
        <section
            id=section.id()
            class="section"
            class:active=move || nav.with(|n| n.is_active(section))
        >
            {children()}
        </section>
    }
}
