use std::str::FromStr;

use crate::error::NavigationError;

/// Dashboard panels. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Video,
    Teams,
    Players,
    Settings,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Video, Section::Teams, Section::Players, Section::Settings];

    /// Element id of the panel, also used as the URL fragment.
    pub fn id(self) -> &'static str {
        match self {
            Section::Video => "video",
            Section::Teams => "teams",
            Section::Players => "players",
            Section::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Video => "Análisis de Video",
            Section::Teams => "Equipos",
            Section::Players => "Jugadores",
            Section::Settings => "Ajustes",
        }
    }
}

impl FromStr for Section {
    type Err = NavigationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .ok_or_else(|| NavigationError::UnknownSection(id.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    active: Section,
}

impl Navigator {
    pub fn new(initial: Section) -> Self {
        Self { active: initial }
    }

    /// Start from a URL fragment such as `#teams`; unknown or empty fragments
    /// fall back to the default section.
    pub fn from_fragment(fragment: &str) -> (Self, Option<NavigationError>) {
        let mut nav = Self::new(Section::default());
        let id = fragment.trim_start_matches('#');
        if id.is_empty() {
            return (nav, None);
        }
        match nav.activate(id) {
            Ok(_) => (nav, None),
            Err(e) => (nav, Some(e)),
        }
    }

    /// Show `section_id` and hide every other panel. Unknown ids leave the
    /// current panel active.
    pub fn activate(&mut self, section_id: &str) -> Result<Section, NavigationError> {
        let section = section_id.parse::<Section>()?;
        self.active = section;
        Ok(section)
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }
}
