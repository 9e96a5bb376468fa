use facelace_core::Color;
use facelace_store::FaceletStore;

use crate::state::Settings;

// AppState holds persisted state (facelets + selected color + settings). It is serialized for resume.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) store: FaceletStore,
    pub(crate) selected_color: Option<Color>,
    pub(crate) settings: Settings,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FaceletStore::new())
    }
}

impl AppState {
    #[must_use]
    pub(crate) fn new(store: FaceletStore) -> Self {
        Self {
            store,
            selected_color: None,
            settings: Settings::default(),
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn from_parts(
        store: FaceletStore,
        selected_color: Option<Color>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            selected_color,
            settings,
            dirty: false,
        }
    }

    #[must_use]
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
