//! Saving and restoring [`AppState`] through eframe storage.

use eframe::Storage;
use facelace_core::Color;
use facelace_store::{CubeState, FaceletStore};
use serde::{Deserialize, Serialize};

use crate::state::{AppState, Settings};

const STATE_KEY: &str = "facelace_app_state_v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PersistedState {
    cube: CubeState,
    selected_color: Option<Color>,
    #[serde(default)]
    settings: Settings,
}

impl PersistedState {
    fn from_app_state(state: &AppState) -> Self {
        Self {
            cube: state.store.snapshot(),
            selected_color: state.selected_color,
            settings: state.settings.clone(),
        }
    }

    fn into_app_state(self) -> Option<AppState> {
        match FaceletStore::from_cube_state(&self.cube) {
            Ok(store) => Some(AppState::from_parts(
                store,
                self.selected_color,
                self.settings,
            )),
            Err(err) => {
                log::warn!("discarding saved cube: {err}");
                None
            }
        }
    }
}

pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let persisted = eframe::get_value::<PersistedState>(storage, STATE_KEY)?;
    persisted.into_app_state()
}

pub(crate) fn save_state(storage: &mut dyn Storage, state: &AppState) {
    eframe::set_value(storage, STATE_KEY, &PersistedState::from_app_state(state));
}
