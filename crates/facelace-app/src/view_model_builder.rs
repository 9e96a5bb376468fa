use facelace_core::{
    Color, FaceletPosition,
    containers::{Array6, Array54},
};

use crate::{
    state::{AppState, UiState},
    ui::{
        controls::ControlsViewModel,
        cube_net::{CubeNetViewModel, NetCell, NetVisualState},
        main_screen::MainScreenViewModel,
        move_list::MoveListViewModel,
        palette::{PaletteViewModel, Swatch},
        settings::SettingsViewModel,
        status_line::StatusLineViewModel,
    },
};

#[must_use]
pub(crate) fn build_main_screen_view_model<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
) -> MainScreenViewModel<'a> {
    let requesting = ui_state.submission.is_requesting();
    MainScreenViewModel {
        net_vm: build_net_view_model(app_state),
        palette_vm: build_palette_view_model(app_state),
        controls_vm: ControlsViewModel::new(!requesting, requesting, ui_state.settings_open),
        move_list_vm: MoveListViewModel::new(
            &ui_state.playback,
            ui_state.submission.phase().is_displaying(),
        ),
        status_line_vm: StatusLineViewModel::new(ui_state.message.as_ref(), requesting),
    }
}

#[must_use]
pub(crate) fn build_settings_view_model(app_state: &AppState) -> SettingsViewModel<'_> {
    SettingsViewModel::new(&app_state.settings)
}

fn build_net_view_model(app_state: &AppState) -> CubeNetViewModel {
    let store = &app_state.store;
    let cells = std::array::from_fn(|i| {
        let pos = FaceletPosition::ALL[i];
        let color = store.color(pos);
        let mut visual_state = NetVisualState::empty();
        if pos.is_center() {
            visual_state |= NetVisualState::CENTER;
        }
        if let Some(selected) = app_state.selected_color {
            if color == Some(selected) {
                visual_state |= NetVisualState::SAME_COLOR;
            }
            if !pos.is_center() && store.set_color_capability(pos, selected).is_err() {
                visual_state |= NetVisualState::PAINT_BLOCKED;
            }
        }
        NetCell {
            color,
            visual_state,
        }
    });
    CubeNetViewModel::new(Array54::from_array(cells))
}

fn build_palette_view_model(app_state: &AppState) -> PaletteViewModel {
    let swatches = Color::ALL.map(|color| Swatch {
        remaining: app_state.store.remaining(color),
        selected: app_state.selected_color == Some(color),
    });
    PaletteViewModel::new(Array6::from_array(swatches))
}
